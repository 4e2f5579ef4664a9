use dioxus::prelude::*;
use ui::views::DataCollectionView;

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "page",
            DataCollectionView {}
        }
    }
}
