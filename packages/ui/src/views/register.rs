use api::auth::{self, RegisterForm, RegisterOutcome};
use api::{FormError, ValidationErrors};
use dioxus::prelude::*;
use store::Role;

use crate::components::{ErrorAlert, FormInput, LoadingSpinner};
use crate::redirect_to;
use crate::session::{post_login_path, use_session};

/// Registration page. Shows a verification step when the deployment
/// requires email confirmation before the first login.
#[component]
pub fn RegisterView() -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::JobSeeker);
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut api_error = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut verification_pending = use_signal(|| false);

    if let Some(current) = session.current() {
        redirect_to(post_login_path(current.role()));
        return rsx! {};
    }

    let submit = {
        let session = session.clone();
        move |_| {
            let session = session.clone();
            async move {
                api_error.set(String::new());
                field_errors.set(ValidationErrors::new());
                loading.set(true);

                let form = RegisterForm {
                    name: name(),
                    email: email(),
                    password: password(),
                    confirm_password: confirm_password(),
                    role: role(),
                };
                match auth::register(&session.api(), &form).await {
                    Ok(RegisterOutcome::LoggedIn(_)) => {
                        session.refresh();
                        redirect_to("/profile");
                    }
                    Ok(RegisterOutcome::VerificationPending) => verification_pending.set(true),
                    Err(FormError::Invalid(errors)) => field_errors.set(errors),
                    Err(FormError::Api(err)) => api_error.set(err.to_string()),
                }
                loading.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h1 { "Create Account" }
                p {
                    class: "auth-subtitle",
                    if verification_pending() {
                        "Verify your email to complete registration"
                    } else {
                        "Sign up to find your next opportunity"
                    }
                }

                if !api_error().is_empty() {
                    ErrorAlert {
                        message: api_error(),
                        onclose: move |_| api_error.set(String::new()),
                    }
                }

                if verification_pending() {
                    div {
                        class: "verification-box",
                        p {
                            "A verification email has been sent to "
                            strong { "{email()}" }
                        }
                        p { "Please check your email and click the verification link to activate your account." }
                        button {
                            class: "auth-button",
                            onclick: move |_| redirect_to("/login"),
                            "Go to Login"
                        }
                    }
                } else {
                    div {
                        class: "auth-form",
                        FormInput {
                            label: "Full Name",
                            name: "name",
                            value: name(),
                            placeholder: "John Doe",
                            error: field_errors().get("name").map(str::to_string),
                            required: true,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        FormInput {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            value: email(),
                            placeholder: "your@email.com",
                            error: field_errors().get("email").map(str::to_string),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        div {
                            class: "form-group",
                            label {
                                class: "form-label",
                                "Account Type "
                                span { class: "required", "*" }
                            }
                            select {
                                class: "form-input",
                                name: "role",
                                value: role().as_str(),
                                oninput: move |evt: FormEvent| {
                                    role.set(match evt.value().as_str() {
                                        "employer" => Role::Employer,
                                        _ => Role::JobSeeker,
                                    });
                                },
                                option { value: "job_seeker", "Job Seeker" }
                                option { value: "employer", "Employer" }
                            }
                        }
                        FormInput {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            value: password(),
                            error: field_errors().get("password").map(str::to_string),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        FormInput {
                            label: "Confirm Password",
                            name: "confirm_password",
                            input_type: "password",
                            value: confirm_password(),
                            error: field_errors().get("confirm_password").map(str::to_string),
                            required: true,
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                        button {
                            class: "auth-button",
                            disabled: loading(),
                            onclick: submit,
                            if loading() {
                                LoadingSpinner { size: "sm" }
                            } else {
                                "Create Account"
                            }
                        }
                    }
                }

                div {
                    class: "auth-footer",
                    "Already have an account? "
                    a { href: "/login", "Login here" }
                }
            }
        }
    }
}
