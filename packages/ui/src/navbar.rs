use dioxus::prelude::*;
use store::Role;

use crate::session::use_session;
use crate::redirect_to;

#[component]
pub fn Navbar() -> Element {
    let session = use_session();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                a { class: "navbar-brand", href: "/", "JobPortal" }

                div {
                    class: "nav-menu",
                    a { class: "nav-link", href: "/jobs", "Browse Jobs" }

                    if let Some(current) = session.current() {
                        if current.role() == Role::Employer {
                            a { class: "nav-link", href: "/post-job", "Post Job" }
                            a { class: "nav-link", href: "/manage-jobs", "My Jobs" }
                            a { class: "nav-link", href: "/manage-applications", "Applications" }
                        }
                        if current.role() == Role::JobSeeker {
                            a { class: "nav-link", href: "/my-applications", "My Applications" }
                        }
                        div {
                            class: "user-menu",
                            a { class: "nav-link", href: "/profile", "Profile" }
                            span { class: "user-email", "{current.user.email}" }
                            button {
                                class: "logout-btn",
                                onclick: {
                                    let session = session.clone();
                                    move |_| {
                                        session.logout();
                                        redirect_to("/");
                                    }
                                },
                                "Logout"
                            }
                        }
                    } else {
                        a { class: "nav-link login-link", href: "/login", "Login" }
                        a { class: "nav-link signup-link", href: "/register", "Sign Up" }
                    }
                }
            }
        }
    }
}
