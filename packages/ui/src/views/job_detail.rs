use api::applications::LifecycleError;
use api::Job;
use dioxus::prelude::*;
use store::{Decision, Role};

use crate::components::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch;
use crate::redirect_to;
use crate::session::use_session;
use crate::{display_date, display_salary};

/// Single job page with the role-dependent apply panel.
#[component]
pub fn JobDetailView(id: i64) -> Element {
    let session = use_session();
    let job = use_fetch::<Job>(move || api::jobs::job_path(id));
    let mut applying = use_signal(|| false);
    let mut applied = use_signal(|| false);
    let mut api_error = use_signal(String::new);

    let handle_apply = {
        let session = session.clone();
        move |_| {
            let lifecycle = session.lifecycle();
            async move {
                applying.set(true);
                api_error.set(String::new());
                match lifecycle.apply(id).await {
                    Ok(()) => applied.set(true),
                    Err(LifecycleError::Denied(Decision::RedirectLogin)) => redirect_to("/login"),
                    Err(LifecycleError::Denied(_)) => redirect_to("/"),
                    Err(LifecycleError::AlreadyApplied) => applied.set(true),
                    Err(err) => api_error.set(err.to_string()),
                }
                applying.set(false);
            }
        }
    };

    let state = job.state();
    let role = session.current().map(|s| s.role());

    rsx! {
        div {
            class: "job-detail",
            div {
                class: "container",
                button {
                    class: "back-button",
                    onclick: move |_| redirect_to("/jobs"),
                    "\u{2190} Back to Jobs"
                }

                if state.is_initial_loading() {
                    div { class: "loading-center", LoadingSpinner { size: "lg" } }
                } else if let Some(job) = state.data.clone() {
                    div {
                        class: "detail-layout",
                        main {
                            class: "detail-content",
                            header {
                                class: "detail-header",
                                h1 { "{job.title}" }
                                span { class: "job-type-badge", "{job.r#type}" }
                            }

                            div {
                                class: "detail-meta",
                                div {
                                    class: "meta-item",
                                    span { class: "meta-label", "Company" }
                                    span { class: "meta-value", "{job.company_name}" }
                                }
                                div {
                                    class: "meta-item",
                                    span { class: "meta-label", "Location" }
                                    span { class: "meta-value", "{job.location}" }
                                }
                                div {
                                    class: "meta-item",
                                    span { class: "meta-label", "Salary" }
                                    span { class: "meta-value", "Rp{display_salary(job.salary)}/month" }
                                }
                                div {
                                    class: "meta-item",
                                    span { class: "meta-label", "Posted" }
                                    span { class: "meta-value", "{display_date(&job.created_at)}" }
                                }
                            }

                            section {
                                class: "detail-section",
                                h2 { "Description" }
                                p { "{job.description}" }
                            }

                            section {
                                class: "detail-section",
                                h2 { "Requirements" }
                                ul {
                                    class: "requirements-list",
                                    for requirement in job.requirements.lines().filter(|l| !l.trim().is_empty()) {
                                        li { "{requirement}" }
                                    }
                                }
                            }
                        }

                        aside {
                            class: "detail-sidebar",
                            if !api_error().is_empty() {
                                ErrorAlert { message: api_error() }
                            }

                            if applied() {
                                div {
                                    class: "success-box",
                                    h3 { "Application Submitted" }
                                    p { "Your application has been submitted successfully. The employer will review it soon." }
                                }
                            } else {
                                {match role {
                                    Some(Role::JobSeeker) => rsx! {
                                        button {
                                            class: "btn btn-primary apply-button",
                                            disabled: applying(),
                                            onclick: handle_apply,
                                            if applying() {
                                                LoadingSpinner { size: "sm" }
                                            } else {
                                                "Apply Now"
                                            }
                                        }
                                    },
                                    Some(Role::Employer) => rsx! {
                                        div {
                                            class: "info-box",
                                            p { "You are viewing this as an employer. You cannot apply to this job." }
                                        }
                                    },
                                    None => rsx! {
                                        button {
                                            class: "btn btn-primary apply-button",
                                            onclick: move |_| redirect_to("/register"),
                                            "Sign Up to Apply"
                                        }
                                    },
                                }}
                            }

                            div {
                                class: "info-box",
                                h3 { "About This Role" }
                                ul {
                                    class: "info-list",
                                    li {
                                        strong { "Type: " }
                                        "{job.r#type}"
                                    }
                                    li {
                                        strong { "Level: " }
                                        {job.level.clone().unwrap_or_else(|| "Not specified".to_string())}
                                    }
                                }
                            }
                        }
                    }
                } else if let Some(message) = state.error.clone() {
                    ErrorAlert { message }
                } else {
                    div {
                        class: "empty-state",
                        p { "Job not found" }
                    }
                }
            }
        }
    }
}
