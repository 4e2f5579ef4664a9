//! Labelled input rows used by the data collection form.

use dioxus::prelude::*;
use registration::Field;

fn label_class(field: Field) -> &'static str {
    if field.is_required() {
        "required"
    } else {
        ""
    }
}

/// One `<input>` with its label and inline error.
#[component]
pub fn TextFieldRow(
    field: Field,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    let input_type = match field {
        Field::Password => "password",
        Field::Dob => "date",
        _ => "text",
    };

    rsx! {
        div {
            class: "form-group",
            label {
                class: label_class(field),
                r#for: field.key(),
                "{field}"
            }
            div {
                class: "form-control",
                input {
                    id: field.key(),
                    name: field.key(),
                    r#type: input_type,
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
                if let Some(err) = error {
                    span { class: "error", "{err}" }
                }
            }
        }
    }
}

/// A `<select>` over a closed set of options, with an empty placeholder entry.
#[component]
pub fn SelectRow(
    field: Field,
    placeholder: String,
    options: Vec<String>,
    value: String,
    error: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            label {
                class: label_class(field),
                r#for: field.key(),
                "{field}"
            }
            div {
                class: "form-control",
                select {
                    id: field.key(),
                    name: field.key(),
                    value: "{value}",
                    onchange: move |evt: FormEvent| on_change.call(evt.value()),
                    option { value: "", "{placeholder}" }
                    for opt in options {
                        option {
                            key: "{opt}",
                            value: "{opt}",
                            selected: opt == value,
                            "{opt}"
                        }
                    }
                }
                if let Some(err) = error {
                    span { class: "error", "{err}" }
                }
            }
        }
    }
}

/// Read-only location text plus the button that triggers a capture.
#[component]
pub fn LocationField(value: String, on_locate: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { r#for: Field::CurrentLocation.key(), "Current Location" }
            div {
                class: "form-control",
                div {
                    class: "location-row",
                    input {
                        id: Field::CurrentLocation.key(),
                        name: Field::CurrentLocation.key(),
                        r#type: "text",
                        value: "{value}",
                        readonly: true,
                        placeholder: "Click 'Get My Location'",
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| on_locate.call(()),
                        "Get My Location"
                    }
                }
            }
        }
    }
}
