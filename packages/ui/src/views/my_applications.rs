use api::applications::MY_APPLICATIONS_PATH;
use api::SeekerApplication;
use dioxus::prelude::*;

use crate::components::{ErrorAlert, LoadingSpinner};
use crate::display_date;
use crate::fetch::use_fetch;
use crate::{status_class, status_label};

/// The seeker's application list with status badges.
#[component]
pub fn MyApplicationsView() -> Element {
    let applications = use_fetch::<Vec<SeekerApplication>>(|| MY_APPLICATIONS_PATH.to_string());
    let state = applications.state();

    rsx! {
        div {
            class: "applications-page",
            div {
                class: "container",
                h1 { "My Applications" }

                if let Some(message) = state.error.clone() {
                    ErrorAlert { message }
                }

                if state.is_initial_loading() {
                    div { class: "loading-center", LoadingSpinner { size: "lg" } }
                } else if let Some(list) = state.data.clone() {
                    if list.is_empty() {
                        div {
                            class: "empty-state",
                            p { "You haven't applied to any jobs yet." }
                        }
                    } else {
                        div {
                            class: "applications-list",
                            for app in list {
                                div {
                                    key: "{app.id}",
                                    class: "application-card",
                                    div {
                                        class: "app-header",
                                        div {
                                            class: "app-title",
                                            h3 { "{app.job_title}" }
                                            p { "{app.company_name}" }
                                        }
                                        span {
                                            class: "app-status {status_class(app.status)}",
                                            "{status_label(app.status)}"
                                        }
                                    }
                                    div {
                                        class: "app-details",
                                        span { "Applied: {display_date(&app.applied_date)}" }
                                        span { "{app.location}" }
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
