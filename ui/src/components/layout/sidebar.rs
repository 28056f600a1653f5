use dioxus::prelude::*;

use crate::features::session::{menu_for_role, panel_title, Role, View};

#[derive(Props, PartialEq, Clone)]
pub struct SidebarProps {
    pub role: Role,
    pub active_view: View,
    pub on_navigate: EventHandler<View>,
    pub on_logout: EventHandler<()>,
}

/// Brand header, the menu for the current role and the sign-out button.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let items = menu_for_role(props.role);

    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar-header",
                h1 { class: "sidebar-brand", "HYNS" }
                p { class: "sidebar-subtitle", "{panel_title(props.role)}" }
            }
            nav {
                class: "sidebar-nav",
                for item in items.iter().copied() {
                    button {
                        key: "{item.view.id()}",
                        class: if item.view == props.active_view { "nav-item active" } else { "nav-item" },
                        onclick: move |_| props.on_navigate.call(item.view),
                        span { class: "nav-icon", "{item.icon}" }
                        span { class: "nav-label", "{item.label}" }
                    }
                }
            }
            div {
                class: "sidebar-footer",
                button {
                    class: "nav-item sign-out",
                    onclick: move |_| props.on_logout.call(()),
                    span { class: "nav-icon", "🚪" }
                    span { class: "nav-label", "Sign Out" }
                }
            }
        }
    }
}
