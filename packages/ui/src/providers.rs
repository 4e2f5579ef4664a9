use api::HttpDataService;
use dioxus::prelude::*;
use registration::AppConfig;

use crate::toast::ToastProvider;

/// Shared context for every platform: configuration, the Data Service client
/// and the toast stack.
#[component]
pub fn AppProviders(config: AppConfig, children: Element) -> Element {
    let config = use_context_provider(|| config);
    use_context_provider(|| {
        tracing::info!("data service at {}", config.service.base_url);
        HttpDataService::from_config(&config.service)
    });

    rsx! {
        ToastProvider {
            auto_close_ms: config.notifications.auto_close_ms,
            {children}
        }
    }
}
