//! Small shared widgets: labeled input, error banner, loading spinner.

use dioxus::prelude::*;

/// Labeled text input with inline validation message.
#[component]
pub fn FormInput(
    label: String,
    name: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            label {
                class: "form-label",
                "{label}"
                if required {
                    span { class: "required", " *" }
                }
            }
            input {
                class: if error.is_some() { "form-input error" } else { "form-input" },
                r#type: "{input_type}",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(ref message) = error {
                span { class: "error-message", "{message}" }
            }
        }
    }
}

/// Dismissible error banner.
#[component]
pub fn ErrorAlert(
    message: String,
    #[props(default)] onclose: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-alert",
            p { "{message}" }
            if let Some(onclose) = onclose {
                button {
                    class: "alert-close",
                    onclick: move |_| onclose.call(()),
                    "\u{00D7}"
                }
            }
        }
    }
}

#[component]
pub fn LoadingSpinner(#[props(default = "md".to_string())] size: String) -> Element {
    rsx! {
        div { class: "spinner spinner-{size}" }
    }
}
