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

const CONFIG_TOML: &str = include_str!("../../../datacollect.toml");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting data collection (desktop)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        ui::AppProviders {
            config,
            Router::<Route> {}
        }
    }
}
