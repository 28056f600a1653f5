use dioxus::prelude::*;
use ui::services::config::HynsConfig;
use ui::HynsApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");
// Registry timings and odds, overridable without touching code
const HYNS_CONFIG: &str = include_str!("../assets/hyns.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "HYNS" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let config = use_hook(|| HynsConfig::from_json_or_default(HYNS_CONFIG));

    rsx! {
        HynsApp { config: config }
    }
}
