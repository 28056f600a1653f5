//! Role-based menu contents for the sidebar.
//!
//! Gating here only decides what is rendered. Nothing stops a view from
//! being reached by other means.

use crate::features::session::types::{Role, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub view: View,
    pub label: &'static str,
    pub icon: &'static str,
}

const MERCHANT_MENU: [MenuItem; 5] = [
    MenuItem { view: View::Dashboard, label: "Dashboard", icon: "📊" },
    MenuItem { view: View::ImeiVerification, label: "IMEI Verification", icon: "🛡️" },
    MenuItem { view: View::Operations, label: "Operations", icon: "📱" },
    MenuItem { view: View::Marketplace, label: "Marketplace", icon: "🛒" },
    MenuItem { view: View::Settings, label: "Settings", icon: "⚙️" },
];

const ADMIN_MENU: [MenuItem; 3] = [
    MenuItem { view: View::Dashboard, label: "Dashboard", icon: "📊" },
    MenuItem { view: View::Security, label: "Security", icon: "🛡️" },
    MenuItem { view: View::Settings, label: "Settings", icon: "⚙️" },
];

pub fn menu_for_role(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Merchant => &MERCHANT_MENU,
        Role::Admin => &ADMIN_MENU,
    }
}

pub fn panel_title(role: Role) -> &'static str {
    match role {
        Role::Merchant => "Merchant Dashboard",
        Role::Admin => "Admin Panel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(role: Role) -> Vec<View> {
        menu_for_role(role).iter().map(|item| item.view).collect()
    }

    #[test]
    fn test_merchant_menu() {
        assert_eq!(
            views(Role::Merchant),
            vec![
                View::Dashboard,
                View::ImeiVerification,
                View::Operations,
                View::Marketplace,
                View::Settings,
            ]
        );
    }

    #[test]
    fn test_admin_menu() {
        assert_eq!(
            views(Role::Admin),
            vec![View::Dashboard, View::Security, View::Settings]
        );
    }

    #[test]
    fn test_menu_labels_match_view_labels() {
        for role in [Role::Merchant, Role::Admin] {
            for item in menu_for_role(role) {
                assert_eq!(item.label, item.view.label());
            }
        }
    }

    #[test]
    fn test_panel_titles() {
        assert_eq!(panel_title(Role::Admin), "Admin Panel");
        assert_eq!(panel_title(Role::Merchant), "Merchant Dashboard");
    }
}
