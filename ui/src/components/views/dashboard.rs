use dioxus::prelude::*;

use crate::components::primitives::{Badge, Card};
use crate::features::dashboard::{
    recent_operations, security_alerts, verification_stats, RECENT_OPERATIONS_LIMIT,
};
use crate::utils::format_count;

#[derive(Props, PartialEq, Clone)]
pub struct DashboardViewProps {
    pub on_new_verification: EventHandler<()>,
}

#[component]
pub fn DashboardView(props: DashboardViewProps) -> Element {
    let stats = verification_stats();
    let operations = recent_operations();
    let alerts = security_alerts();
    let verified = format_count(stats.verified_count);

    rsx! {
        div {
            class: "screen dashboard-screen",
            div {
                class: "screen-header",
                div {
                    h2 { class: "screen-title", "Dashboard" }
                    p { class: "screen-subtitle", "Welcome back to your HYNS dashboard" }
                }
                button {
                    class: "primary-button",
                    onclick: move |_| props.on_new_verification.call(()),
                    "New Verification"
                }
            }

            div {
                class: "card-grid",
                Card {
                    title: "Smartphones Verified".to_string(),
                    div { class: "stat-value", "{verified}" }
                    p {
                        class: "stat-caption",
                        span { class: "text-success", "{stats.monthly_change}" }
                        " from last month"
                    }
                }

                Card {
                    title: "Recent Operations".to_string(),
                    ul {
                        class: "operation-list",
                        for operation in operations.iter().take(RECENT_OPERATIONS_LIMIT) {
                            li {
                                key: "{operation.id}",
                                class: "operation-row",
                                div {
                                    class: "operation-main",
                                    span { class: "operation-kind", "{operation.kind.label()}" }
                                    span { class: "{operation.status.css_class()}", "{operation.status.icon()}" }
                                    p { class: "operation-imei", "IMEI: {operation.imei}" }
                                }
                                span { class: "operation-time", "{operation.time}" }
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    div {
                        class: "card-header",
                        h3 {
                            class: "card-title",
                            "Security Alerts "
                            if !alerts.is_empty() {
                                Badge { class: "badge badge-error".to_string(), "{alerts.len()}" }
                            }
                        }
                    }
                    div {
                        class: "card-content",
                        if alerts.is_empty() {
                            div {
                                class: "empty-state",
                                span { class: "status-icon success", "✓" }
                                p { "No security alerts" }
                            }
                        } else {
                            for alert in alerts.iter() {
                                div {
                                    key: "{alert.id}",
                                    class: "security-alert {alert.severity.label()}",
                                    span { class: "alert-icon", "⚠" }
                                    div {
                                        p { class: "security-alert-message", "{alert.message}" }
                                        p { class: "security-alert-time", "{alert.time}" }
                                    }
                                    Badge { class: alert.severity.badge_class().to_string(), "{alert.severity.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
