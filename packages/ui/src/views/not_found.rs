use dioxus::prelude::*;

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            class: "not-found",
            div {
                class: "container",
                h1 { "404" }
                p { "The page you are looking for does not exist." }
                a { class: "btn btn-primary", href: "/", "Back to Home" }
            }
        }
    }
}
