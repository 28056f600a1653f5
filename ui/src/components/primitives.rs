//! Presentation primitives
//!
//! Cards, badges and alerts shared by every screen. They carry no state of
//! their own.

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    pub title: Option<String>,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            class: "card {props.class}",
            if let Some(title) = &props.title {
                div {
                    class: "card-header",
                    h3 { class: "card-title", "{title}" }
                }
            }
            div {
                class: "card-content",
                {props.children}
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BadgeProps {
    /// Full class list, e.g. `"badge badge-error"`
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span {
            class: "{props.class}",
            {props.children}
        }
    }
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum AlertTone {
    Success,
    Warning,
    Error,
}

impl AlertTone {
    pub fn class(&self) -> &'static str {
        match self {
            AlertTone::Success => "alert alert-success",
            AlertTone::Warning => "alert alert-warning",
            AlertTone::Error => "alert alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertTone::Success => "✓",
            AlertTone::Warning => "⚠",
            AlertTone::Error => "✗",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AlertProps {
    pub tone: AlertTone,
    pub title: String,
    pub children: Element,
}

#[component]
pub fn Alert(props: AlertProps) -> Element {
    rsx! {
        div {
            class: "{props.tone.class()}",
            role: "alert",
            span { class: "alert-icon", "{props.tone.icon()}" }
            div {
                class: "alert-description",
                strong { "{props.title}" }
                br {}
                {props.children}
            }
        }
    }
}

/// A label/value line inside an information box.
#[component]
pub fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        p {
            class: "detail-row",
            span { class: "detail-label", "{label}: " }
            "{value}"
        }
    }
}
