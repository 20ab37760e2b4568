use dioxus::prelude::*;

use store::{admit, Decision, Role};
use ui::views::{
    HomeView, JobBrowserView, JobDetailView, LoginView, ManageApplicationsView, ManageJobsView,
    MyApplicationsView, NotFoundView, PostJobView, ProfileView, RegisterView,
};
use ui::{Navbar, SessionProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/jobs")]
    Jobs {},
    #[route("/jobs/:id")]
    JobDetail { id: i64 },
    #[route("/post-job")]
    PostJob {},
    #[route("/manage-jobs")]
    ManageJobs {},
    #[route("/manage-applications")]
    ManageApplications {},
    #[route("/my-applications")]
    MyApplications {},
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Navbar {}
            main {
                class: "main-content",
                Router::<Route> {}
            }
        }
    }
}

/// Admission gate for role-restricted routes. Views never compare roles
/// themselves; they receive the decision made here.
#[component]
fn Guarded(#[props(default)] required: Option<Role>, children: Element) -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    match admit(session.current().as_ref(), required) {
        Decision::Allow => rsx! {
            {children}
        },
        Decision::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Decision::RedirectHome => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        HomeView {}
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        RegisterView {}
    }
}

#[component]
fn Jobs() -> Element {
    rsx! {
        JobBrowserView {}
    }
}

#[component]
fn JobDetail(id: i64) -> Element {
    rsx! {
        JobDetailView { id }
    }
}

#[component]
fn PostJob() -> Element {
    rsx! {
        Guarded {
            required: Some(Role::Employer),
            PostJobView {}
        }
    }
}

#[component]
fn ManageJobs() -> Element {
    rsx! {
        Guarded {
            required: Some(Role::Employer),
            ManageJobsView {}
        }
    }
}

#[component]
fn ManageApplications() -> Element {
    rsx! {
        Guarded {
            required: Some(Role::Employer),
            ManageApplicationsView {}
        }
    }
}

#[component]
fn MyApplications() -> Element {
    rsx! {
        Guarded {
            required: Some(Role::JobSeeker),
            MyApplicationsView {}
        }
    }
}

#[component]
fn Profile() -> Element {
    rsx! {
        Guarded {
            ProfileView {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        NotFoundView {}
    }
}
