//! Editable control plan for a schema.
//!
//! The UI maps each [`FieldControl`] to widgets bound to the live bag;
//! every edit writes exactly one key back through [`super::apply_change`].

use super::types::{FieldDescriptor, FieldKind};
use super::vocabulary::{enum_options, unit_options};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    Text {
        key: &'static str,
        label: &'static str,
        full_width: bool,
    },
    TextArea {
        key: &'static str,
        label: &'static str,
        full_width: bool,
    },
    Enum {
        key: &'static str,
        label: &'static str,
        options: Vec<(String, String)>,
        full_width: bool,
    },
    Measure {
        key: &'static str,
        unit_key: String,
        label: &'static str,
        units: Vec<(String, String)>,
        full_width: bool,
    },
}

impl FieldControl {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Text { key, .. }
            | Self::TextArea { key, .. }
            | Self::Enum { key, .. }
            | Self::Measure { key, .. } => key,
        }
    }

    pub fn full_width(&self) -> bool {
        match self {
            Self::Text { full_width, .. }
            | Self::TextArea { full_width, .. }
            | Self::Enum { full_width, .. }
            | Self::Measure { full_width, .. } => *full_width,
        }
    }
}

fn control_for(field: &FieldDescriptor) -> FieldControl {
    match field.kind {
        FieldKind::Enum => FieldControl::Enum {
            key: field.key,
            label: field.label,
            options: field.enum_key.map(enum_options).unwrap_or_default(),
            full_width: field.full_width,
        },
        _ if field.is_measure() => {
            let unit_key = field
                .unit_key
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}_unit", field.key));
            FieldControl::Measure {
                key: field.key,
                unit_key,
                label: field.label,
                units: unit_options(field.effective_unit_type()),
                full_width: field.full_width,
            }
        }
        FieldKind::TextArea => FieldControl::TextArea {
            key: field.key,
            label: field.label,
            full_width: field.full_width,
        },
        _ => FieldControl::Text {
            key: field.key,
            label: field.label,
            full_width: field.full_width,
        },
    }
}

/// One control per schema entry, in schema order. Empty schema, no controls.
pub fn field_controls(schema: &[FieldDescriptor]) -> Vec<FieldControl> {
    schema.iter().map(control_for).collect()
}

/// Value written back for an enum select: the integer code, or `null` for
/// the blank option.
pub fn enum_selection_value(raw: &str) -> Value {
    match raw.trim().parse::<i64>() {
        Ok(code) => Value::from(code),
        Err(_) => Value::Null,
    }
}
