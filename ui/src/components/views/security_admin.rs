use dioxus::prelude::*;

use crate::components::display::StatusChart;
use crate::components::primitives::{Alert, AlertTone, Badge, Card};
use crate::console_info;
use crate::features::security::{seed_records, SmartphoneSecurityRecord, StatusSummary};
use crate::utils::format_reported_date;

/// Security dashboard for administrators: status counts, the report table
/// and the distribution chart.
#[component]
pub fn SecurityAdminView() -> Element {
    // Loaded once per mount; the records are never edited.
    let records = use_hook(|| seed_records().map_err(|error| error.to_string()));

    rsx! {
        div {
            class: "screen security-screen",
            h2 { class: "screen-title", "Security Dashboard" }
            p { class: "screen-subtitle", "Monitor and manage smartphone security reports" }

            {
                match records {
                    Ok(records) => rsx! { SecurityOverview { records: records } },
                    Err(message) => rsx! {
                        Alert {
                            tone: AlertTone::Error,
                            title: "Security records unavailable".to_string(),
                            "{message}"
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct SecurityOverviewProps {
    records: Vec<SmartphoneSecurityRecord>,
}

#[component]
fn SecurityOverview(props: SecurityOverviewProps) -> Element {
    let summary = StatusSummary::from_records(&props.records);

    rsx! {
        div {
            class: "card-grid summary-grid",
            SummaryCard { label: "Total Devices".to_string(), value: summary.total, class: "text-neutral".to_string() }
            SummaryCard { label: "Stolen".to_string(), value: summary.stolen, class: "text-error".to_string() }
            SummaryCard { label: "Lost".to_string(), value: summary.lost, class: "text-warning".to_string() }
            SummaryCard { label: "Recovered".to_string(), value: summary.recovered, class: "text-success".to_string() }
        }

        div {
            class: "security-layout",
            Card {
                title: "Device Security Status".to_string(),
                class: "records-card".to_string(),
                table {
                    class: "records-table",
                    thead {
                        tr {
                            th { "IMEI" }
                            th { "Owner" }
                            th { "Status" }
                            th { "Reported Date" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for record in props.records.iter() {
                            RecordRow { key: "{record.id}", record: record.clone() }
                        }
                    }
                }
            }

            Card {
                title: "Status Distribution".to_string(),
                class: "chart-card".to_string(),
                StatusChart { slices: summary.chart_slices() }
                div {
                    class: "chart-stats",
                    p {
                        class: "chart-stat",
                        span { "Active Issues" }
                        span { class: "text-error", "{summary.active_issues()}" }
                    }
                    p {
                        class: "chart-stat",
                        span { "Recovery Rate" }
                        span { class: "text-success", "{summary.recovery_rate_percent()}%" }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: usize, class: String) -> Element {
    rsx! {
        div {
            class: "card summary-card",
            p { class: "summary-label", "{label}" }
            p { class: "summary-value {class}", "{value}" }
        }
    }
}

#[component]
fn RecordRow(record: SmartphoneSecurityRecord) -> Element {
    let status = record.status;
    let can_recover = record.can_mark_recovered();
    let notice = record.recovery_notice();
    let reported = format_reported_date(&record.reported_date);

    rsx! {
        tr {
            td { class: "mono", "{record.imei}" }
            td { "{record.owner}" }
            td {
                Badge {
                    class: status.badge_class().to_string(),
                    "{status.icon()} {status.label()}"
                }
            }
            td { "{reported}" }
            td {
                if can_recover {
                    button {
                        class: "secondary-button small",
                        onclick: move |_| {
                            // Nothing is persisted; the request is only logged.
                            console_info!("{}", notice);
                        },
                        "Mark as Recovered"
                    }
                }
            }
        }
    }
}
