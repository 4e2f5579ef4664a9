use api::HttpDataService;
use dioxus::prelude::*;
use registration::{
    AppConfig, DataService, Department, Field, Gender, IntoEnumIterator, LocationProvider,
    PageState,
};

use crate::form_fields::{LocationField, SelectRow, TextFieldRow};
use crate::location::make_locator;
use crate::map_preview::MapPreview;
use crate::record_table::RecordTable;
use crate::toast::{notify, use_toasts};

const FORM_CSS: Asset = asset!("/assets/styling/form.css");

/// The registration form, its location capture, and the record browser.
///
/// All page state lives in one [`PageState`] signal. Async work is spawned on
/// this component's scope, so a result arriving after unmount is dropped.
#[component]
pub fn DataCollectionView() -> Element {
    let config = use_context::<AppConfig>();
    let service = use_context::<HttpDataService>();
    let mut toasts = use_toasts();
    let mut page = use_signal(PageState::new);

    let submit_service = service.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let prepared = page.write().begin_submit();
        match prepared {
            Err(warning) => notify(&mut toasts, warning),
            Ok(payload) => {
                let service = submit_service.clone();
                spawn(async move {
                    let result = service.register(&payload).await;
                    let note = page.write().finish_submit(result);
                    notify(&mut toasts, note);
                });
            }
        }
    };

    let handle_locate = move |_: ()| {
        spawn(async move {
            let result = make_locator().current_position().await;
            let note = page.write().location_captured(result);
            notify(&mut toasts, note);
        });
    };

    let handle_fetch = move |_| {
        let service = service.clone();
        spawn(async move {
            let result = service.list_records().await;
            let note = page.write().records_fetched(result);
            notify(&mut toasts, note);
        });
    };

    let state = page();
    let genders: Vec<String> = Gender::iter().map(|g| g.to_string()).collect();
    let departments: Vec<String> = Department::iter().map(|d| d.to_string()).collect();

    rsx! {
        document::Stylesheet { href: FORM_CSS }

        div {
            class: "form-container",
            h2 { "Data Collection" }

            form {
                onsubmit: handle_submit,

                for field in Field::text_inputs() {
                    TextFieldRow {
                        key: "{field}",
                        field,
                        value: state.form.value(field),
                        error: state.errors.get(field).map(str::to_string),
                        on_input: move |value: String| page.write().edit(field, &value),
                    }
                }

                SelectRow {
                    field: Field::Gender,
                    placeholder: "Select Gender",
                    options: genders,
                    value: state.form.value(Field::Gender),
                    error: state.errors.get(Field::Gender).map(str::to_string),
                    on_change: move |value: String| page.write().edit(Field::Gender, &value),
                }

                SelectRow {
                    field: Field::Department,
                    placeholder: "Select Department",
                    options: departments,
                    value: state.form.value(Field::Department),
                    error: state.errors.get(Field::Department).map(str::to_string),
                    on_change: move |value: String| page.write().edit(Field::Department, &value),
                }

                LocationField {
                    value: state.form.current_location.clone(),
                    on_locate: handle_locate,
                }

                if let Some(center) = state.location {
                    MapPreview {
                        center,
                        zoom: config.map.zoom,
                        tile_url: config.map.tile_url.clone(),
                    }
                }

                button {
                    class: "submit-button",
                    r#type: "submit",
                    "Submit"
                }
            }

            button {
                class: "show-entries-button",
                r#type: "button",
                onclick: handle_fetch,
                "Show All Entries"
            }
        }

        if state.table_visible {
            RecordTable { records: state.records.clone() }
        }
    }
}
