use dioxus::prelude::*;

use crate::features::session::View;

/// Stand-in for screens that only show a notice.
#[component]
pub fn PlaceholderView(view: View) -> Element {
    let notice = view.placeholder_notice().unwrap_or("Coming soon...");

    rsx! {
        div {
            class: "screen placeholder-screen",
            h2 { class: "screen-title", "{view.label()}" }
            p { class: "placeholder-notice", "{notice}" }
        }
    }
}
