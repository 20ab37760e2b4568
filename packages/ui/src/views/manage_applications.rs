use api::applications::EMPLOYER_APPLICANTS_PATH;
use api::{ApplicationStatus, EmployerApplication};
use dioxus::prelude::*;

use crate::components::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch;
use crate::session::use_session;

const ACTIONS: &[(&str, &str, ApplicationStatus)] = &[
    ("Accept", "accept", ApplicationStatus::Accepted),
    ("Shortlist", "shortlist", ApplicationStatus::Shortlisted),
    ("Reject", "reject", ApplicationStatus::Rejected),
];

/// Employer triage: every applicant across the employer's jobs, with
/// status actions. The list is refetched after each successful update so
/// what is shown always came from the server.
#[component]
pub fn ManageApplicationsView() -> Element {
    let session = use_session();
    let applications =
        use_fetch::<Vec<EmployerApplication>>(|| EMPLOYER_APPLICANTS_PATH.to_string());
    let mut updating = use_signal(|| None::<i64>);
    let mut update_error = use_signal(String::new);

    let state = applications.state();

    rsx! {
        div {
            class: "applications-page",
            div {
                class: "container",
                h1 { "Manage Applications" }

                if let Some(message) = state.error.clone() {
                    ErrorAlert { message }
                }
                if !update_error().is_empty() {
                    ErrorAlert {
                        message: update_error(),
                        onclose: move |_| update_error.set(String::new()),
                    }
                }

                if state.is_initial_loading() {
                    div { class: "loading-center", LoadingSpinner { size: "lg" } }
                } else if let Some(list) = state.data.clone() {
                    if list.is_empty() {
                        div {
                            class: "empty-state",
                            p { "No applications yet." }
                        }
                    } else {
                        div {
                            class: "applications-list employer",
                            for app in list {
                                div {
                                    key: "{app.id}",
                                    class: "application-card employer",
                                    div {
                                        class: "app-header",
                                        div {
                                            class: "app-title",
                                            h3 { "{app.seeker_name}" }
                                            p { "{app.job_title}" }
                                        }
                                        div { class: "app-email", "{app.seeker_email}" }
                                    }
                                    div {
                                        class: "app-actions",
                                        for (label, css, status) in ACTIONS.iter().copied() {
                                            button {
                                                key: "{css}",
                                                class: "action-btn {css}",
                                                disabled: updating() == Some(app.id),
                                                onclick: {
                                                    let session = session.clone();
                                                    let mut applications = applications;
                                                    let id = app.id;
                                                    move |_| {
                                                        let lifecycle = session.lifecycle();
                                                        spawn(async move {
                                                            updating.set(Some(id));
                                                            update_error.set(String::new());
                                                            match lifecycle.set_status(id, status).await {
                                                                Ok(_) => applications.refetch(),
                                                                Err(err) => update_error.set(err.to_string()),
                                                            }
                                                            updating.set(None);
                                                        });
                                                    }
                                                },
                                                "{label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
