pub mod guard;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryCredentials;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use guard::{admit, Decision};
pub use models::{Role, Session, UserInfo};
pub use session::{CredentialStore, SessionStore, TOKEN_KEY, USER_KEY};
