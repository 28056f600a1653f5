use crate::{console_debug, console_info, console_warn};
use dioxus::prelude::*;

use crate::app::AppServices;
use crate::components::forms::{ImeiVerificationForm, LoginFormComponent, SalePurchaseForm};
use crate::components::layout::Sidebar;
use crate::components::views::{DashboardView, PlaceholderView, SecurityAdminView};
use crate::features::session::{AppAction, AppState, View};
use crate::services::config::HynsConfig;
use crate::services::decision::assign_role;

const HYNS_CSS: Asset = asset!("/assets/styling/hyns.css");

/// Root of the platform: login screen until signed in, then the sidebar
/// shell with the active view.
#[component]
pub fn HynsApp(#[props(default)] config: HynsConfig) -> Element {
    let services = use_context_provider(|| {
        let config = match config.validate() {
            Ok(()) => config,
            Err(error) => {
                console_warn!("ignoring configuration: {}", error);
                HynsConfig::default()
            }
        };
        AppServices::simulated(config)
    });
    let mut state = use_signal(AppState::default);

    let dispatch = EventHandler::new(move |action: AppAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_login = EventHandler::new(move |_: ()| {
        let role = assign_role(services.decisions.as_ref(), &services.config.outcomes);
        console_info!("signed in as {:?}", role);
        dispatch.call(AppAction::LogIn { role });
    });

    let current = state();

    rsx! {
        document::Link { rel: "stylesheet", href: HYNS_CSS }

        if !current.logged_in {
            LoginFormComponent { on_login: on_login }
        } else {
            div {
                class: "app-shell",
                Sidebar {
                    role: current.role,
                    active_view: current.active_view,
                    on_navigate: move |view: View| {
                        console_debug!("navigate to {}", view);
                        dispatch.call(AppAction::Navigate(view));
                    },
                    on_logout: move |_| {
                        console_info!("signed out");
                        dispatch.call(AppAction::LogOut);
                    },
                }
                main {
                    class: "app-main",
                    {render_view(current.active_view, dispatch)}
                }
            }
        }
    }
}

fn render_view(view: View, dispatch: EventHandler<AppAction>) -> Element {
    match view {
        View::Dashboard => rsx! {
            DashboardView {
                on_new_verification: move |_| dispatch.call(AppAction::NewVerification),
            }
        },
        View::ImeiVerification => rsx! {
            ImeiVerificationForm {
                on_register_sale: move |_| dispatch.call(AppAction::RegisterSale),
            }
        },
        View::Operations => rsx! { SalePurchaseForm {} },
        View::Security => rsx! { SecurityAdminView {} },
        View::Marketplace | View::Settings => rsx! { PlaceholderView { view: view } },
    }
}
