use dioxus::prelude::*;

use registration::AppConfig;
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../../../datacollect.toml");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting data collection (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::AppProviders {
            config,
            Router::<Route> {}
        }
    }
}
