use api::models::JOB_TYPES;
use api::{FormError, NewJob, ValidationErrors};
use dioxus::prelude::*;

use crate::components::{ErrorAlert, FormInput, LoadingSpinner};
use crate::redirect_to;
use crate::session::use_session;

/// Employer form for posting a new job.
#[component]
pub fn PostJobView() -> Element {
    let session = use_session();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut requirements = use_signal(String::new);
    let mut salary = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut job_type = use_signal(|| JOB_TYPES[0].to_string());
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut api_error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let submit = {
        let session = session.clone();
        move |_| {
            let api = session.api();
            async move {
                api_error.set(String::new());
                field_errors.set(ValidationErrors::new());
                loading.set(true);

                let job = NewJob {
                    title: title(),
                    description: description(),
                    requirements: requirements(),
                    salary: salary().trim().parse().unwrap_or(0),
                    location: location(),
                    r#type: job_type(),
                };
                match api::jobs::create_job(&api, &job).await {
                    Ok(_) => redirect_to("/manage-jobs"),
                    Err(FormError::Invalid(errors)) => field_errors.set(errors),
                    Err(FormError::Api(err)) => api_error.set(err.to_string()),
                }
                loading.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "post-job-page",
            div {
                class: "container",
                h1 { "Post a New Job" }

                div {
                    class: "form-container",
                    if !api_error().is_empty() {
                        ErrorAlert {
                            message: api_error(),
                            onclose: move |_| api_error.set(String::new()),
                        }
                    }

                    div {
                        class: "job-form",
                        FormInput {
                            label: "Job Title",
                            name: "title",
                            value: title(),
                            placeholder: "e.g., Senior Backend Developer",
                            error: field_errors().get("title").map(str::to_string),
                            required: true,
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }

                        div {
                            class: "form-group",
                            label {
                                class: "form-label",
                                "Description "
                                span { class: "required", "*" }
                            }
                            textarea {
                                class: if field_errors().get("description").is_some() { "form-textarea error" } else { "form-textarea" },
                                rows: "6",
                                value: description(),
                                placeholder: "Describe the job role and responsibilities",
                                oninput: move |evt: FormEvent| description.set(evt.value()),
                            }
                            if let Some(message) = field_errors().get("description").map(str::to_string) {
                                span { class: "error-message", "{message}" }
                            }
                        }

                        div {
                            class: "form-group",
                            label {
                                class: "form-label",
                                "Requirements "
                                span { class: "required", "*" }
                            }
                            textarea {
                                class: if field_errors().get("requirements").is_some() { "form-textarea error" } else { "form-textarea" },
                                rows: "6",
                                value: requirements(),
                                placeholder: "List requirements (one per line)",
                                oninput: move |evt: FormEvent| requirements.set(evt.value()),
                            }
                            if let Some(message) = field_errors().get("requirements").map(str::to_string) {
                                span { class: "error-message", "{message}" }
                            }
                        }

                        div {
                            class: "form-row",
                            FormInput {
                                label: "Salary (IDR)",
                                name: "salary",
                                input_type: "number",
                                value: salary(),
                                placeholder: "e.g., 5000000",
                                error: field_errors().get("salary").map(str::to_string),
                                required: true,
                                oninput: move |evt: FormEvent| salary.set(evt.value()),
                            }
                            FormInput {
                                label: "Location",
                                name: "location",
                                value: location(),
                                placeholder: "e.g., Jakarta",
                                error: field_errors().get("location").map(str::to_string),
                                required: true,
                                oninput: move |evt: FormEvent| location.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-group",
                            label { class: "form-label", "Job Type" }
                            select {
                                class: "form-input",
                                value: job_type(),
                                oninput: move |evt: FormEvent| job_type.set(evt.value()),
                                for option_type in JOB_TYPES {
                                    option { value: *option_type, "{option_type}" }
                                }
                            }
                        }

                        button {
                            class: "btn btn-primary btn-large",
                            disabled: loading(),
                            onclick: submit,
                            if loading() {
                                LoadingSpinner { size: "sm" }
                            } else {
                                "Post Job"
                            }
                        }
                    }
                }
            }
        }
    }
}
