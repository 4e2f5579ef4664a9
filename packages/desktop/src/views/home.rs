use dioxus::prelude::*;
use ui::views::DataCollectionView;

/// Desktop has no location provider, so "Get My Location" reports that
/// geolocation is unsupported.
#[component]
pub fn Home() -> Element {
    rsx! {
        DataCollectionView {}
    }
}
