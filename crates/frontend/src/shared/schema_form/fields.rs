use crate::shared::components::ui::{Input, Select, Textarea};
use contracts::shared::artifact_schema::{
    enum_selection_value, field_controls, value_as_input, Bag, FieldControl, FieldDescriptor,
};
use leptos::prelude::*;
use serde_json::Value;

fn field_class(full_width: bool) -> &'static str {
    if full_width {
        "schema-field schema-field--full"
    } else {
        "schema-field"
    }
}

/// Editable controls for `schema`, reading from and writing into `data`.
///
/// Each edit reports a single `(key, value)`; the owner merges it into its
/// bag. Renders nothing for an empty schema.
#[component]
pub fn SchemaFields(
    #[prop(into)] title: String,
    schema: &'static [FieldDescriptor],
    #[prop(into)] data: Signal<Bag>,
    on_change: Callback<(String, Value)>,
) -> impl IntoView {
    if schema.is_empty() {
        return ().into_any();
    }

    let input_of = move |key: String| Signal::derive(move || data.with(|b| value_as_input(b.get(&key))));
    let write_text = move |key: &'static str| {
        Callback::new(move |v: String| on_change.run((key.to_string(), Value::String(v))))
    };

    // layout comes from the plan; values stay live through `data`
    let rendered = field_controls(schema)
        .into_iter()
        .map(|control| match control {
            FieldControl::Text { key, label, full_width, .. } => view! {
                <div class=field_class(full_width)>
                    <Input label=label.to_string() value=input_of(key.to_string()) on_input=write_text(key) />
                </div>
            }
            .into_any(),
            FieldControl::TextArea { key, label, full_width, .. } => view! {
                <div class=field_class(full_width)>
                    <Textarea label=label.to_string() value=input_of(key.to_string()) on_input=write_text(key) rows=3 />
                </div>
            }
            .into_any(),
            FieldControl::Enum { key, label, options, full_width, .. } => view! {
                <div class=field_class(full_width)>
                    <Select
                        label=label.to_string()
                        value=input_of(key.to_string())
                        options=options
                        placeholder="Seçiniz...".to_string()
                        on_change=Callback::new(move |raw: String| {
                            on_change.run((key.to_string(), enum_selection_value(&raw)))
                        })
                    />
                </div>
            }
            .into_any(),
            FieldControl::Measure { key, unit_key, label, units, full_width, .. } => {
                let unit_value = input_of(unit_key.clone());
                view! {
                    <div class=field_class(full_width)>
                        <label class="form__label">{label}</label>
                        <div class="schema-field__measure">
                            <Input
                                value=input_of(key.to_string())
                                placeholder="Değer".to_string()
                                on_input=write_text(key)
                            />
                            <Select
                                value=unit_value
                                options=units
                                placeholder="Birim".to_string()
                                on_change=Callback::new(move |unit: String| {
                                    on_change.run((unit_key.clone(), Value::String(unit)))
                                })
                            />
                        </div>
                    </div>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <section class="schema-section">
            <h3 class="schema-section__title">{title}</h3>
            <div class="schema-section__grid">{rendered}</div>
        </section>
    }
    .into_any()
}
