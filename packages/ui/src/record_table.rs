use dioxus::prelude::*;
use registration::{Field, Record};

const TABLE_CSS: Asset = asset!("/assets/styling/table.css");

/// One row per stored record; columns follow the form, minus the password.
#[component]
pub fn RecordTable(records: Vec<Record>) -> Element {
    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        div {
            class: "record-table-wrapper",
            table {
                class: "record-table",
                thead {
                    tr {
                        for field in Field::table_columns() {
                            th { key: "{field}", "{field.heading()}" }
                        }
                    }
                }
                tbody {
                    for (index, record) in records.iter().enumerate() {
                        tr {
                            key: "{index}",
                            for field in Field::table_columns() {
                                td { key: "{field}", "{record.cell(field)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
