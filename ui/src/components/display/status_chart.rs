//! Donut chart of device report statuses, drawn with plain SVG strokes.

use dioxus::prelude::*;

use crate::features::security::{donut_segments, ChartSlice};

// Radius whose circumference is 100, so dash lengths read as percentages
const RING_RADIUS: &str = "15.91549430918954";

#[derive(Props, PartialEq, Clone)]
pub struct StatusChartProps {
    pub slices: Vec<ChartSlice>,
}

#[component]
pub fn StatusChart(props: StatusChartProps) -> Element {
    let segments = donut_segments(&props.slices);

    rsx! {
        div {
            class: "status-chart",
            svg {
                class: "donut-chart",
                view_box: "0 0 42 42",
                "role": "img",
                "aria-label": "Status distribution",
                circle {
                    class: "donut-ring",
                    cx: "21",
                    cy: "21",
                    r: RING_RADIUS,
                    fill: "transparent",
                    stroke: "#e5e7eb",
                    stroke_width: "6",
                }
                for segment in segments {
                    circle {
                        key: "{segment.label}",
                        class: "donut-segment",
                        cx: "21",
                        cy: "21",
                        r: RING_RADIUS,
                        fill: "transparent",
                        stroke: "{segment.color}",
                        stroke_width: "6",
                        stroke_dasharray: "{segment.dasharray()}",
                        stroke_dashoffset: "{segment.dashoffset()}",
                        title { "{segment.label}: {segment.value} Devices" }
                    }
                }
            }
            ul {
                class: "chart-legend",
                for slice in props.slices.iter() {
                    li {
                        key: "{slice.label}",
                        class: "legend-item",
                        span {
                            class: "legend-swatch",
                            style: "background-color: {slice.color};",
                        }
                        "{slice.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use crate::features::security::{seed_records, StatusSummary};

    #[test]
    fn test_chart_renders_seed_distribution() {
        let records = seed_records().unwrap();
        let slices = StatusSummary::from_records(&records).chart_slices();
        assert_eq!(donut_segments(&slices).len(), 3);

        let mut dom = VirtualDom::new_with_props(StatusChart, StatusChartProps { slices });
        dom.rebuild(&mut NoOpMutations);
    }
}
