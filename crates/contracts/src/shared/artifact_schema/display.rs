//! Read-only formatting of a bag against a schema

use super::bag::Bag;
use super::types::{FieldDescriptor, FieldKind};
use super::vocabulary::enum_vocabulary;
use serde_json::Value;
use std::collections::HashSet;

/// One label/value line of a detail grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Rows of the scheduled fields plus keys the schema does not know about
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailSection {
    pub rows: Vec<DetailRow>,
    pub extras: Vec<DetailRow>,
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Strings verbatim, everything else as JSON
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Plain value, `None` when empty/null/missing
pub fn format_plain(value: Option<&Value>) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    value.map(stringify)
}

/// Enum label for a stored code. Codes stored as numbers or numeric strings
/// are both looked up; anything not in the vocabulary shows raw.
pub fn format_enum(enum_key: &str, value: Option<&Value>) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    let value = value?;
    let code = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    let label = code.and_then(|c| enum_vocabulary(enum_key).and_then(|v| v.label(c)));
    Some(match label {
        Some(label) => label.to_string(),
        None => stringify(value),
    })
}

/// `"12 cm"`, or `"12"` when the unit is blank. `None` when the value is blank.
pub fn format_measure(bag: &Bag, key: &str, unit_key: Option<&str>) -> Option<String> {
    let value = format_plain(bag.get(key))?;
    let unit = unit_key.and_then(|k| format_plain(bag.get(k)));
    Some(match unit {
        Some(unit) => format!("{} {}", value, unit),
        None => value,
    })
}

fn format_field(field: &FieldDescriptor, bag: &Bag) -> Option<String> {
    if field.kind == FieldKind::Enum {
        if let Some(enum_key) = field.enum_key {
            return format_enum(enum_key, bag.get(field.key));
        }
    }
    if field.is_measure() {
        return format_measure(bag, field.key, field.unit_key);
    }
    format_plain(bag.get(field.key))
}

/// Builds the read-only grid for `bag`.
///
/// Scheduled fields come first, in schema order. Keys that are neither a
/// scheduled key nor the unit key of one follow as extras, labelled by their
/// raw key. `None` when there is nothing to show at all.
pub fn detail_section(schema: &[FieldDescriptor], bag: &Bag) -> Option<DetailSection> {
    let mut used: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();

    for field in schema {
        used.insert(field.key);
        if let Some(unit_key) = field.unit_key {
            used.insert(unit_key);
        }
        if let Some(value) = format_field(field, bag) {
            rows.push(DetailRow::new(field.label, value));
        }
    }

    let extras: Vec<DetailRow> = bag
        .iter()
        .filter(|(key, _)| !used.contains(key.as_str()))
        .filter(|(_, value)| !is_blank(Some(value)))
        .map(|(key, value)| DetailRow::new(key.clone(), stringify(value)))
        .collect();

    if rows.is_empty() && extras.is_empty() {
        return None;
    }
    Some(DetailSection { rows, extras })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FormType;
    use crate::shared::artifact_schema::{details_schema, MEASUREMENT_SCHEMA};
    use serde_json::json;

    fn bag(v: Value) -> Bag {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn measure_value_and_unit() {
        let b = bag(json!({"height": "12", "height_unit": "cm"}));
        assert_eq!(format_measure(&b, "height", Some("height_unit")).as_deref(), Some("12 cm"));

        let b = bag(json!({"height": "12", "height_unit": ""}));
        assert_eq!(format_measure(&b, "height", Some("height_unit")).as_deref(), Some("12"));

        let b = bag(json!({"height": 12}));
        assert_eq!(format_measure(&b, "height", Some("height_unit")).as_deref(), Some("12"));
    }

    #[test]
    fn measure_without_value_is_omitted() {
        let b = bag(json!({"height": "", "height_unit": "cm"}));
        assert_eq!(format_measure(&b, "height", Some("height_unit")), None);
        let b = bag(json!({"height": null, "height_unit": "cm"}));
        assert_eq!(format_measure(&b, "height", Some("height_unit")), None);
        let section = detail_section(MEASUREMENT_SCHEMA, &b);
        assert_eq!(section, None);
    }

    #[test]
    fn enum_labels_and_fallbacks() {
        assert_eq!(format_enum("pore", Some(&json!(2))).as_deref(), Some("Çok"));
        assert_eq!(format_enum("pore", Some(&json!("1"))).as_deref(), Some("Orta"));
        assert_eq!(format_enum("pore", Some(&json!(9))).as_deref(), Some("9"));
        assert_eq!(format_enum("pore", Some(&json!("kaba"))).as_deref(), Some("kaba"));
        assert_eq!(format_enum("missing", Some(&json!(0))).as_deref(), Some("0"));
        assert_eq!(format_enum("pore", Some(&Value::Null)), None);
        assert_eq!(format_enum("pore", None), None);
    }

    #[test]
    fn plain_values() {
        assert_eq!(format_plain(Some(&json!("Roma"))).as_deref(), Some("Roma"));
        assert_eq!(format_plain(Some(&json!(4))).as_deref(), Some("4"));
        assert_eq!(format_plain(Some(&json!(false))).as_deref(), Some("false"));
        assert_eq!(format_plain(Some(&json!(""))), None);
    }

    #[test]
    fn unknown_key_shows_once_as_extra() {
        let b = bag(json!({"grave_type": "Lahit", "foo": "bar"}));
        let section = detail_section(details_schema(FormType::Mezar), &b).unwrap();
        assert_eq!(section.rows, vec![DetailRow::new("Mezar Tipi", "Lahit")]);
        assert_eq!(section.extras, vec![DetailRow::new("foo", "bar")]);
    }

    #[test]
    fn unit_keys_of_scheduled_fields_are_not_extras() {
        let b = bag(json!({"diameter": "18", "diameter_unit": "mm", "weight_unit": "gr"}));
        let section = detail_section(details_schema(FormType::Sikke), &b).unwrap();
        assert_eq!(section.rows, vec![DetailRow::new("Çap", "18 mm")]);
        assert!(section.extras.is_empty());
    }

    #[test]
    fn object_extras_are_json() {
        let b = bag(json!({"legacy": {"x": 1}}));
        let section = detail_section(&[], &b).unwrap();
        assert!(section.rows.is_empty());
        assert_eq!(section.extras, vec![DetailRow::new("legacy", r#"{"x":1}"#)]);
    }

    #[test]
    fn legacy_keys_survive_a_form_type_change() {
        // stored as SIKKE, now shown under the SERAMIK schema
        let b = bag(json!({"emperor": "Hadrianus", "baking": 0}));
        let section = detail_section(details_schema(FormType::Seramik), &b).unwrap();
        assert_eq!(section.rows, vec![DetailRow::new("Fırınlama", "İyi")]);
        assert_eq!(section.extras, vec![DetailRow::new("emperor", "Hadrianus")]);
    }

    #[test]
    fn empty_bag_renders_nothing() {
        assert_eq!(detail_section(details_schema(FormType::Seramik), &Bag::new()), None);
        let b = bag(json!({"note": "", "other": null}));
        assert_eq!(detail_section(&[], &b), None);
    }
}
