use api::profile;
use api::ProfileData;
use dioxus::prelude::*;
use store::Role;

use crate::components::{ErrorAlert, FormInput, LoadingSpinner};
use crate::session::use_session;

/// Profile editor for the current user.
///
/// Email is read-only. CV files live with the blob-storage collaborator;
/// only the stored link is shown here.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut experience = use_signal(String::new);
    let mut cv_url = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut api_error = use_signal(String::new);
    let mut success_message = use_signal(String::new);

    // Load the profile on mount.
    let _loader = use_resource({
        let session = session.clone();
        move || {
            let api = session.api();
            async move {
                match profile::get_profile(&api).await {
                    Ok(data) => {
                        name.set(data.name);
                        email.set(data.email);
                        skills.set(data.skills);
                        experience.set(data.experience);
                        cv_url.set(data.cv_url);
                    }
                    Err(err) => api_error.set(err.to_string()),
                }
                loading.set(false);
            }
        }
    });

    let save = {
        let session = session.clone();
        move |_| {
            let api = session.api();
            async move {
                api_error.set(String::new());
                success_message.set(String::new());
                saving.set(true);

                let data = ProfileData {
                    name: name(),
                    email: email(),
                    skills: skills(),
                    experience: experience(),
                    cv_url: cv_url(),
                };
                match profile::update_profile(&api, &data).await {
                    Ok(echoed) => {
                        name.set(echoed.name);
                        success_message.set("Profile updated successfully".to_string());
                    }
                    Err(err) => api_error.set(err.to_string()),
                }
                saving.set(false);
            }
        }
    };

    let role = session.current().map(|s| s.role());

    rsx! {
        div {
            class: "profile-page",
            div {
                class: "container",
                h1 { "My Profile" }

                if loading() {
                    div { class: "loading-center", LoadingSpinner { size: "lg" } }
                } else {
                    div {
                        class: "profile-container",
                        if !api_error().is_empty() {
                            ErrorAlert {
                                message: api_error(),
                                onclose: move |_| api_error.set(String::new()),
                            }
                        }
                        if !success_message().is_empty() {
                            div {
                                class: "success-alert",
                                p { "{success_message()}" }
                            }
                        }

                        div {
                            class: "profile-form",
                            div {
                                class: "form-section",
                                h2 { "Personal Information" }
                                FormInput {
                                    label: "Full Name",
                                    name: "name",
                                    value: name(),
                                    placeholder: "Your name",
                                    oninput: move |evt: FormEvent| name.set(evt.value()),
                                }
                                FormInput {
                                    label: "Email",
                                    name: "email",
                                    input_type: "email",
                                    value: email(),
                                    disabled: true,
                                    oninput: move |_| {},
                                }
                            }

                            if role == Some(Role::JobSeeker) {
                                div {
                                    class: "form-section",
                                    h2 { "Professional Information" }
                                    div {
                                        class: "form-group",
                                        label { class: "form-label", "Skills" }
                                        textarea {
                                            class: "form-textarea",
                                            rows: "4",
                                            value: skills(),
                                            placeholder: "List your skills (one per line)",
                                            oninput: move |evt: FormEvent| skills.set(evt.value()),
                                        }
                                    }
                                    div {
                                        class: "form-group",
                                        label { class: "form-label", "Experience" }
                                        textarea {
                                            class: "form-textarea",
                                            rows: "4",
                                            value: experience(),
                                            placeholder: "Describe your work experience",
                                            oninput: move |evt: FormEvent| experience.set(evt.value()),
                                        }
                                    }
                                }

                                div {
                                    class: "form-section",
                                    h2 { "Resume/CV" }
                                    if cv_url().is_empty() {
                                        p { class: "file-info", "No CV on file yet." }
                                    } else {
                                        p {
                                            class: "file-info",
                                            strong { "Current CV: " }
                                            a { href: cv_url(), "View CV" }
                                        }
                                    }
                                }
                            }

                            button {
                                class: "btn btn-primary btn-large",
                                disabled: saving(),
                                onclick: save,
                                if saving() {
                                    LoadingSpinner { size: "sm" }
                                } else {
                                    "Save Profile"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
