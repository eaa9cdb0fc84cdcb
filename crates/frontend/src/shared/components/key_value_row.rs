use contracts::shared::artifact_schema::DetailRow;
use leptos::prelude::*;

/// Label/value cell pair of a detail grid
#[component]
pub fn KeyValueRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="kv-row">
            <div class="kv-row__label">{label}</div>
            <div class="kv-row__value">{value}</div>
        </div>
    }
}

/// Grid of rows; renders nothing for an empty list
#[component]
pub fn KeyValueGrid(rows: Vec<DetailRow>) -> impl IntoView {
    (!rows.is_empty()).then(|| {
        view! {
            <div class="kv-grid">
                {rows
                    .into_iter()
                    .map(|row| view! { <KeyValueRow label=row.label value=row.value /> })
                    .collect_view()}
            </div>
        }
    })
}

/// Rows for the pairs that have a value; blank and missing values are left out
pub fn non_empty_rows(pairs: Vec<(&str, Option<String>)>) -> Vec<DetailRow> {
    pairs
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| DetailRow::new(label, v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_skipped() {
        let rows = non_empty_rows(vec![
            ("Anakod", Some("AAB".to_string())),
            ("Tabaka", Some("  ".to_string())),
            ("GIS", None),
        ]);
        assert_eq!(rows, vec![DetailRow::new("Anakod", "AAB")]);
    }
}
