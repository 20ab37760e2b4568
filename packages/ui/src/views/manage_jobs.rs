use api::Job;
use dioxus::prelude::*;

use crate::components::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch;
use crate::session::use_session;
use crate::{display_date, display_salary};

/// The employer's own postings, with delete-and-refetch.
#[component]
pub fn ManageJobsView() -> Element {
    let session = use_session();
    let jobs = use_fetch::<Vec<Job>>(|| api::jobs::MY_JOBS_PATH.to_string());
    let mut deleting = use_signal(|| None::<i64>);
    let mut delete_error = use_signal(String::new);

    let state = jobs.state();

    rsx! {
        div {
            class: "manage-jobs",
            div {
                class: "container",
                div {
                    class: "manage-header",
                    h1 { "My Jobs" }
                    a { class: "btn btn-primary", href: "/post-job", "Post New Job" }
                }

                if let Some(message) = state.error.clone() {
                    ErrorAlert { message }
                }
                if !delete_error().is_empty() {
                    ErrorAlert {
                        message: delete_error(),
                        onclose: move |_| delete_error.set(String::new()),
                    }
                }

                if state.is_initial_loading() {
                    div { class: "loading-center", LoadingSpinner { size: "lg" } }
                } else if let Some(list) = state.data.clone() {
                    if list.is_empty() {
                        div {
                            class: "empty-state",
                            p { "No jobs posted yet." }
                            a { class: "btn btn-primary", href: "/post-job", "Post Your First Job" }
                        }
                    } else {
                        div {
                            class: "jobs-table",
                            table {
                                thead {
                                    tr {
                                        th { "Title" }
                                        th { "Location" }
                                        th { "Type" }
                                        th { "Salary" }
                                        th { "Posted" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for job in list {
                                        tr {
                                            key: "{job.id}",
                                            td { class: "title-cell", strong { "{job.title}" } }
                                            td { "{job.location}" }
                                            td { span { class: "type-badge", "{job.r#type}" } }
                                            td { "Rp{display_salary(job.salary)}" }
                                            td { "{display_date(&job.created_at)}" }
                                            td {
                                                button {
                                                    class: "btn-small btn-delete",
                                                    disabled: deleting() == Some(job.id),
                                                    onclick: {
                                                        let session = session.clone();
                                                        let mut jobs = jobs;
                                                        let id = job.id;
                                                        move |_| {
                                                            let api = session.api();
                                                            spawn(async move {
                                                                deleting.set(Some(id));
                                                                delete_error.set(String::new());
                                                                match api::jobs::delete_job(&api, id).await {
                                                                    Ok(()) => jobs.refetch(),
                                                                    Err(err) => delete_error.set(err.to_string()),
                                                                }
                                                                deleting.set(None);
                                                            });
                                                        }
                                                    },
                                                    if deleting() == Some(job.id) {
                                                        "Deleting..."
                                                    } else {
                                                        "Delete"
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
    }
}
