use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::verification::Imei;
use crate::services::errors::{HynsError, HynsResult};

const SEED_RECORDS: &str = include_str!("../../../assets/data/security_records.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceStatus {
    Lost,
    Stolen,
    Recovered,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 3] = [
        DeviceStatus::Lost,
        DeviceStatus::Stolen,
        DeviceStatus::Recovered,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Lost => "Lost",
            DeviceStatus::Stolen => "Stolen",
            DeviceStatus::Recovered => "Recovered",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeviceStatus::Lost => "🕒",
            DeviceStatus::Stolen => "⚠",
            DeviceStatus::Recovered => "✓",
        }
    }

    /// Chart and badge color.
    pub fn color(&self) -> &'static str {
        match self {
            DeviceStatus::Lost => "#F39C12",
            DeviceStatus::Stolen => "#E74C3C",
            DeviceStatus::Recovered => "#2ECC71",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DeviceStatus::Lost => "badge badge-warning",
            DeviceStatus::Stolen => "badge badge-error",
            DeviceStatus::Recovered => "badge badge-success",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lost/stolen report as listed on the security dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartphoneSecurityRecord {
    pub id: String,
    pub imei: Imei,
    pub owner: String,
    pub status: DeviceStatus,
    /// ISO date, `YYYY-MM-DD`
    pub reported_date: String,
    pub last_update: String,
}

impl SmartphoneSecurityRecord {
    /// Only open reports get a "Mark as Recovered" button.
    pub fn can_mark_recovered(&self) -> bool {
        self.status != DeviceStatus::Recovered
    }

    /// Console line for a recovery request. Nothing is persisted.
    pub fn recovery_notice(&self) -> String {
        format!("Marking device {} as recovered", self.id)
    }
}

/// Parses a record list in the seed file's JSON shape.
pub fn parse_records(json: &str) -> HynsResult<Vec<SmartphoneSecurityRecord>> {
    serde_json::from_str(json).map_err(|e| HynsError::SeedData {
        message: format!("security records: {}", e),
    })
}

/// The six fixed reports shown to administrators.
pub fn seed_records() -> HynsResult<Vec<SmartphoneSecurityRecord>> {
    parse_records(SEED_RECORDS)
}
