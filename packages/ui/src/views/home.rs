use dioxus::prelude::*;
use store::Role;

use crate::session::use_session;

/// Landing page with role-aware calls to action.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let role = session.current().map(|s| s.role());

    rsx! {
        div {
            class: "home-page",
            div {
                class: "container hero",
                h1 { "Find your next opportunity" }
                p {
                    class: "hero-subtitle",
                    "Browse openings from companies across the country, or post your own and start hiring."
                }
                div {
                    class: "hero-actions",
                    a { class: "btn btn-primary", href: "/jobs", "Browse Jobs" }
                    {match role {
                        Some(Role::Employer) => rsx! {
                            a { class: "btn btn-secondary", href: "/post-job", "Post a Job" }
                        },
                        Some(Role::JobSeeker) => rsx! {
                            a { class: "btn btn-secondary", href: "/my-applications", "My Applications" }
                        },
                        None => rsx! {
                            a { class: "btn btn-secondary", href: "/register", "Sign Up" }
                        },
                    }}
                }
            }
        }
    }
}
