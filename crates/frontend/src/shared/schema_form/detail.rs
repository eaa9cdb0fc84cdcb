use crate::shared::components::key_value_row::KeyValueGrid;
use contracts::shared::artifact_schema::{detail_section, Bag, FieldDescriptor};
use leptos::prelude::*;

/// Read-only grid of a bag: scheduled rows first, then unknown keys under
/// `extras_title`. Nothing at all when the bag has nothing to show.
#[component]
pub fn SchemaDetailSection(
    #[prop(into)] title: String,
    #[prop(into)] extras_title: String,
    schema: &'static [FieldDescriptor],
    bag: Bag,
) -> impl IntoView {
    detail_section(schema, &bag).map(|section| {
        let has_extras = !section.extras.is_empty();
        view! {
            <section class="detail-section">
                <h3 class="detail-section__title">{title}</h3>
                <KeyValueGrid rows=section.rows />
                {has_extras.then(|| view! {
                    <h4 class="detail-section__subtitle">{extras_title}</h4>
                    <KeyValueGrid rows=section.extras />
                })}
            </section>
        }
    })
}
