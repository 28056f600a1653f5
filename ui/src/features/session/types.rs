// Application-wide session and routing state - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Merchant,
    Admin,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    ImeiVerification,
    Operations,
    Marketplace,
    Settings,
    Security,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::ImeiVerification,
        View::Operations,
        View::Marketplace,
        View::Settings,
        View::Security,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::ImeiVerification => "imei-verification",
            View::Operations => "operations",
            View::Marketplace => "marketplace",
            View::Settings => "settings",
            View::Security => "security",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::ImeiVerification => "IMEI Verification",
            View::Operations => "Operations",
            View::Marketplace => "Marketplace",
            View::Settings => "Settings",
            View::Security => "Security",
        }
    }

    /// Body text for views that only show a "coming soon" notice.
    pub fn placeholder_notice(&self) -> Option<&'static str> {
        match self {
            View::Marketplace => Some("Marketplace functionality coming soon..."),
            View::Settings => Some("Settings panel coming soon..."),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// Action enum for session and routing mutations
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    LogIn { role: Role },
    LogOut,
    /// Sidebar selection
    Navigate(View),
    /// Dashboard shortcut into the IMEI lookup
    NewVerification,
    /// Shortcut from a verification result into the sale/purchase form
    RegisterSale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub logged_in: bool,
    pub role: Role,
    pub active_view: View,
}

impl AppState {
    /// Reduces the state in place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: AppAction) {
        match action {
            AppAction::LogIn { role } => {
                self.logged_in = true;
                self.role = role;
                self.active_view = View::Dashboard;
                tracing::info!(?role, "session started");
            }
            AppAction::LogOut => {
                self.logged_in = false;
                self.active_view = View::Dashboard;
                tracing::info!("session ended");
            }
            AppAction::Navigate(view) => {
                if !self.logged_in {
                    tracing::warn!(%view, "navigation ignored while logged out");
                    return;
                }
                self.active_view = view;
            }
            AppAction::NewVerification => {
                self.shortcut(View::Dashboard, View::ImeiVerification);
            }
            AppAction::RegisterSale => {
                self.shortcut(View::ImeiVerification, View::Operations);
            }
        }
    }

    fn shortcut(&mut self, from: View, to: View) {
        if !self.logged_in || self.active_view != from {
            tracing::warn!(
                current = %self.active_view,
                expected = %from,
                target = %to,
                "shortcut ignored"
            );
            return;
        }
        self.active_view = to;
    }
}
