use api::models::JOB_TYPES;
use api::{FilterField, JobFilter, JobPage};
use dioxus::prelude::*;

use crate::components::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch;
use crate::{display_date, display_salary};

const LOCATIONS: &[&str] = &["Jakarta", "Surabaya", "Bandung", "Remote"];

/// Job listing with search, filters, and pagination.
#[component]
pub fn JobBrowserView() -> Element {
    let mut filter = use_signal(JobFilter::default);
    let jobs = use_fetch::<JobPage>(move || api::jobs::jobs_path(&filter()));

    let mut set_field = move |field: FilterField, value: String| {
        let next = filter.peek().set(field, &value);
        filter.set(next);
    };

    let state = jobs.state();
    let page = filter().page;

    rsx! {
        div {
            class: "job-browser",
            div {
                class: "container",
                h1 { "Job Opportunities" }

                div {
                    class: "browser-layout",
                    aside {
                        class: "filters-sidebar",
                        h3 { "Filters" }

                        div {
                            class: "filter-group",
                            label { "Search" }
                            input {
                                class: "filter-input",
                                r#type: "text",
                                value: filter().search,
                                placeholder: "Job title, skills...",
                                oninput: move |evt: FormEvent| set_field(FilterField::Search, evt.value()),
                            }
                        }

                        div {
                            class: "filter-group",
                            label { "Location" }
                            select {
                                class: "filter-input",
                                value: filter().location,
                                oninput: move |evt: FormEvent| set_field(FilterField::Location, evt.value()),
                                option { value: "", "All Locations" }
                                for location in LOCATIONS {
                                    option { value: *location, "{location}" }
                                }
                            }
                        }

                        div {
                            class: "filter-group",
                            label { "Job Type" }
                            select {
                                class: "filter-input",
                                value: filter().job_type,
                                oninput: move |evt: FormEvent| set_field(FilterField::JobType, evt.value()),
                                option { value: "", "All Types" }
                                for job_type in JOB_TYPES {
                                    option { value: *job_type, "{job_type}" }
                                }
                            }
                        }

                        div {
                            class: "filter-group",
                            label { "Salary Range" }
                            div {
                                class: "salary-inputs",
                                input {
                                    class: "filter-input",
                                    r#type: "number",
                                    placeholder: "Min",
                                    value: filter().salary_min.map(|v| v.to_string()).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| set_field(FilterField::SalaryMin, evt.value()),
                                }
                                span { "-" }
                                input {
                                    class: "filter-input",
                                    r#type: "number",
                                    placeholder: "Max",
                                    value: filter().salary_max.map(|v| v.to_string()).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| set_field(FilterField::SalaryMax, evt.value()),
                                }
                            }
                        }
                    }

                    main {
                        class: "jobs-list",
                        if let Some(message) = state.error.clone() {
                            ErrorAlert { message }
                        }

                        if state.is_initial_loading() {
                            div { class: "loading-center", LoadingSpinner { size: "lg" } }
                        } else if let Some(data) = state.data.clone() {
                            if data.jobs.is_empty() {
                                div {
                                    class: "empty-state",
                                    p { "No jobs found. Try adjusting your filters." }
                                }
                            } else {
                                div { class: "jobs-count", "Found {data.total} jobs" }
                                for job in data.jobs.clone() {
                                    a {
                                        key: "{job.id}",
                                        class: "job-item",
                                        href: "/jobs/{job.id}",
                                        div {
                                            class: "job-header",
                                            h3 { "{job.title}" }
                                            span { class: "job-type-badge", "{job.r#type}" }
                                        }
                                        p { class: "job-company", "{job.company_name}" }
                                        div {
                                            class: "job-footer",
                                            div {
                                                class: "job-info",
                                                span { class: "job-location", "{job.location}" }
                                                span { class: "job-salary", "Rp{display_salary(job.salary)}" }
                                            }
                                            div { class: "job-date", "{display_date(&job.created_at)}" }
                                        }
                                    }
                                }

                                if data.pages > 1 {
                                    div {
                                        class: "pagination",
                                        button {
                                            disabled: page <= 1,
                                            onclick: move |_| {
                                                let next = filter.peek().with_page(page.saturating_sub(1));
                                                filter.set(next);
                                            },
                                            "Previous"
                                        }
                                        span { "Page {page} of {data.pages}" }
                                        button {
                                            disabled: page >= data.pages,
                                            onclick: {
                                                let last = data.pages;
                                                move |_| {
                                                    let next = filter.peek().with_page((page + 1).min(last));
                                                    filter.set(next);
                                                }
                                            },
                                            "Next"
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
