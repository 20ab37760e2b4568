//! This crate contains all shared UI for the workspace: the session
//! provider, the generic fetch hook, and one view per page of the product.
//! Views are thin — identity, authorization, querying, and the application
//! workflow all live in the `api` and `store` crates.

pub mod views;

mod session;
pub use session::{post_login_path, use_session, Api, Lifecycle, SessionContext, SessionProvider};

mod fetch;
pub use fetch::{use_fetch, FetchHandle};

mod navbar;
pub use navbar::Navbar;

mod status;
pub use status::{status_class, status_label};

mod components;
pub use components::{ErrorAlert, FormInput, LoadingSpinner};

/// Full-page navigation, used for cross-view redirects.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "redirect requested outside the browser");
    }
}

/// Show only the date part of an ISO-8601 timestamp.
pub fn display_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Thousands-separated salary figure for display.
pub fn display_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_grouping() {
        assert_eq!(display_salary(0), "0");
        assert_eq!(display_salary(950), "950");
        assert_eq!(display_salary(5_000_000), "5.000.000");
        assert_eq!(display_salary(12_500), "12.500");
    }

    #[test]
    fn date_part_of_timestamp() {
        assert_eq!(display_date("2026-08-01T09:30:00Z"), "2026-08-01");
        assert_eq!(display_date("2026-08-01"), "2026-08-01");
    }
}
