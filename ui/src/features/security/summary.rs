//! Aggregates behind the security dashboard cards and donut chart.

use crate::features::security::records::{DeviceStatus, SmartphoneSecurityRecord};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub lost: usize,
    pub stolen: usize,
    pub recovered: usize,
    pub total: usize,
}

impl StatusSummary {
    pub fn from_records(records: &[SmartphoneSecurityRecord]) -> Self {
        let count = |status: DeviceStatus| records.iter().filter(|r| r.status == status).count();
        Self {
            lost: count(DeviceStatus::Lost),
            stolen: count(DeviceStatus::Stolen),
            recovered: count(DeviceStatus::Recovered),
            total: records.len(),
        }
    }

    pub fn count(&self, status: DeviceStatus) -> usize {
        match status {
            DeviceStatus::Lost => self.lost,
            DeviceStatus::Stolen => self.stolen,
            DeviceStatus::Recovered => self.recovered,
        }
    }

    pub fn active_issues(&self) -> usize {
        self.total - self.recovered
    }

    /// Rounded percentage of recovered devices, 0 for an empty list.
    pub fn recovery_rate_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.recovered as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Slices in legend order: Lost, Stolen, Recovered.
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        DeviceStatus::ALL
            .into_iter()
            .map(|status| ChartSlice {
                label: status.label(),
                value: self.count(status),
                color: status.color(),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

/// One donut arc expressed as SVG stroke dash parameters, on a circle whose
/// circumference is 100 units.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub label: &'static str,
    pub color: &'static str,
    pub value: usize,
    /// Arc length, in percent of the circle
    pub length: f64,
    /// Where the arc starts, in percent of the circle
    pub offset: f64,
}

impl DonutSegment {
    pub fn dasharray(&self) -> String {
        format!("{:.2} {:.2}", self.length, 100.0 - self.length)
    }

    /// SVG dashoffset that starts the arc at twelve o'clock.
    pub fn dashoffset(&self) -> String {
        format!("{:.2}", 25.0 - self.offset)
    }
}

/// Lays slices out around the ring. Empty slices are skipped.
pub fn donut_segments(slices: &[ChartSlice]) -> Vec<DonutSegment> {
    let total: usize = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut offset = 0.0;
    let mut segments = Vec::with_capacity(slices.len());
    for slice in slices.iter().filter(|s| s.value > 0) {
        let length = slice.value as f64 / total as f64 * 100.0;
        segments.push(DonutSegment {
            label: slice.label,
            color: slice.color,
            value: slice.value,
            length,
            offset,
        });
        offset += length;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::security::records::seed_records;

    #[test]
    fn test_seed_summary() {
        let summary = StatusSummary::from_records(&seed_records().unwrap());
        assert_eq!(summary.lost, 2);
        assert_eq!(summary.stolen, 2);
        assert_eq!(summary.recovered, 2);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.active_issues(), 4);
        assert_eq!(summary.recovery_rate_percent(), 33);
    }

    #[test]
    fn test_recovery_rate_rounds() {
        let summary = StatusSummary { lost: 1, stolen: 0, recovered: 2, total: 3 };
        assert_eq!(summary.recovery_rate_percent(), 67);
    }

    #[test]
    fn test_empty_list_has_zero_rate() {
        let summary = StatusSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.recovery_rate_percent(), 0);
        assert!(donut_segments(&summary.chart_slices()).is_empty());
    }

    #[test]
    fn test_chart_slices_order_and_colors() {
        let summary = StatusSummary { lost: 2, stolen: 3, recovered: 1, total: 6 };
        let slices = summary.chart_slices();
        assert_eq!(
            slices.iter().map(|s| (s.label, s.value)).collect::<Vec<_>>(),
            vec![("Lost", 2), ("Stolen", 3), ("Recovered", 1)]
        );
        assert_eq!(slices[1].color, "#E74C3C");
    }

    #[test]
    fn test_donut_segments_cover_ring() {
        let summary = StatusSummary { lost: 1, stolen: 0, recovered: 3, total: 4 };
        let segments = donut_segments(&summary.chart_slices());

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Lost");
        assert!((segments[0].length - 25.0).abs() < 1e-9);
        assert!((segments[1].offset - 25.0).abs() < 1e-9);
        assert_eq!(segments[1].dasharray(), "75.00 25.00");
        assert_eq!(segments[0].dashoffset(), "25.00");

        let covered: f64 = segments.iter().map(|s| s.length).sum();
        assert!((covered - 100.0).abs() < 1e-9);
    }
}
