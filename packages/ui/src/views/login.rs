use api::auth::{self, LoginForm};
use api::{FormError, ValidationErrors};
use dioxus::prelude::*;

use crate::components::{ErrorAlert, FormInput, LoadingSpinner};
use crate::redirect_to;
use crate::session::{post_login_path, use_session};

/// Login page.
#[component]
pub fn LoginView() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut api_error = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already logged in: go straight to the role's landing page.
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

                let form = LoginForm {
                    email: email(),
                    password: password(),
                };
                match auth::login(&session.api(), &form).await {
                    Ok(logged_in) => {
                        session.refresh();
                        redirect_to(post_login_path(logged_in.role()));
                    }
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
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Login to access your account" }

                if !api_error().is_empty() {
                    ErrorAlert {
                        message: api_error(),
                        onclose: move |_| api_error.set(String::new()),
                    }
                }

                div {
                    class: "auth-form",
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
                    FormInput {
                        label: "Password",
                        name: "password",
                        input_type: "password",
                        value: password(),
                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        error: field_errors().get("password").map(str::to_string),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "auth-button",
                        disabled: loading(),
                        onclick: submit,
                        if loading() {
                            LoadingSpinner { size: "sm" }
                        } else {
                            "Login"
                        }
                    }
                }

                div {
                    class: "auth-footer",
                    "Don't have an account? "
                    a { href: "/register", "Register here" }
                }
            }
        }
    }
}
