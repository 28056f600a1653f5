//! Fixed figures shown on the landing dashboard.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Purchase,
    Sale,
    Verification,
}

impl OperationKind {
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Purchase => "Purchase",
            OperationKind::Sale => "Sale",
            OperationKind::Verification => "Verification",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationStatus {
    Completed,
    Pending,
    Verified,
}

impl OperationStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            OperationStatus::Completed | OperationStatus::Verified => "✓",
            OperationStatus::Pending => "🕒",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OperationStatus::Completed | OperationStatus::Verified => "status-icon success",
            OperationStatus::Pending => "status-icon warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecentOperation {
    pub id: &'static str,
    pub kind: OperationKind,
    pub imei: &'static str,
    /// Buyer for purchases, seller for sales
    pub party: Option<&'static str>,
    pub status: OperationStatus,
    pub time: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    High,
    Medium,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::High => "high",
            AlertSeverity::Medium => "medium",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AlertSeverity::High => "badge badge-error",
            AlertSeverity::Medium => "badge badge-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SecurityAlert {
    pub id: &'static str,
    pub message: &'static str,
    pub severity: AlertSeverity,
    pub time: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VerificationStats {
    pub verified_count: u64,
    pub monthly_change: &'static str,
}

/// Operations card shows at most this many rows.
pub const RECENT_OPERATIONS_LIMIT: usize = 4;

pub fn verification_stats() -> VerificationStats {
    VerificationStats {
        verified_count: 1247,
        monthly_change: "+12%",
    }
}

pub fn recent_operations() -> Vec<RecentOperation> {
    vec![
        RecentOperation {
            id: "1",
            kind: OperationKind::Purchase,
            imei: "356789012345678",
            party: Some("John Doe"),
            status: OperationStatus::Completed,
            time: "2 hours ago",
        },
        RecentOperation {
            id: "2",
            kind: OperationKind::Sale,
            imei: "356789012345679",
            party: Some("Jane Smith"),
            status: OperationStatus::Pending,
            time: "4 hours ago",
        },
        RecentOperation {
            id: "3",
            kind: OperationKind::Verification,
            imei: "356789012345680",
            party: None,
            status: OperationStatus::Verified,
            time: "6 hours ago",
        },
        RecentOperation {
            id: "4",
            kind: OperationKind::Sale,
            imei: "356789012345681",
            party: Some("Mike Johnson"),
            status: OperationStatus::Completed,
            time: "1 day ago",
        },
    ]
}

pub fn security_alerts() -> Vec<SecurityAlert> {
    vec![
        SecurityAlert {
            id: "1",
            message: "Stolen device attempted verification",
            severity: AlertSeverity::High,
            time: "30 min ago",
        },
        SecurityAlert {
            id: "2",
            message: "Suspicious activity detected",
            severity: AlertSeverity::Medium,
            time: "2 hours ago",
        },
    ]
}
