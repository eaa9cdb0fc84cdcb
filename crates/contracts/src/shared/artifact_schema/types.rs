//! Field descriptor types

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    /// Small integer code with a label vocabulary
    Enum,
    /// Free-text value plus a unit picked from a bounded list
    Measure,
}

impl FieldKind {
    /// Unknown kinds render as plain text fields.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "textarea" => Self::TextArea,
            "enum" => Self::Enum,
            "measure" => Self::Measure,
            _ => Self::Text,
        }
    }
}

/// Vocabulary of allowed unit symbols for measure fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitType {
    #[default]
    Length,
    Weight,
}

impl UnitType {
    /// Allowed symbols, in display order
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Self::Length => &["mm", "cm", "m"],
            Self::Weight => &["gr", "kg"],
        }
    }
}

/// One entry of a `details` or `measurements` bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Storage key inside the bag
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Vocabulary name for `Enum` fields
    pub enum_key: Option<&'static str>,
    /// Sibling key holding the unit of a measure field
    pub unit_key: Option<&'static str>,
    pub unit_type: Option<UnitType>,
    /// Layout hint: span the whole form row
    pub full_width: bool,
}

impl FieldDescriptor {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            enum_key: None,
            unit_key: None,
            unit_type: None,
            full_width: false,
        }
    }

    pub const fn textarea(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::TextArea,
            enum_key: None,
            unit_key: None,
            unit_type: None,
            full_width: true,
        }
    }

    pub const fn enumeration(key: &'static str, label: &'static str, enum_key: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Enum,
            enum_key: Some(enum_key),
            unit_key: None,
            unit_type: None,
            full_width: false,
        }
    }

    pub const fn measure(
        key: &'static str,
        label: &'static str,
        unit_key: &'static str,
        unit_type: UnitType,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Measure,
            enum_key: None,
            unit_key: Some(unit_key),
            unit_type: Some(unit_type),
            full_width: false,
        }
    }

    /// Measure fields, and any field that names a unit key, render as a
    /// value + unit pair.
    pub fn is_measure(&self) -> bool {
        self.kind == FieldKind::Measure || self.unit_key.is_some()
    }

    pub fn effective_unit_type(&self) -> UnitType {
        self.unit_type.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_parses_as_text() {
        assert_eq!(FieldKind::parse("measure"), FieldKind::Measure);
        assert_eq!(FieldKind::parse("textarea"), FieldKind::TextArea);
        assert_eq!(FieldKind::parse("date"), FieldKind::Text);
        assert_eq!(FieldKind::parse(""), FieldKind::Text);
    }

    #[test]
    fn unit_key_makes_a_measure() {
        let mut f = FieldDescriptor::text("diameter", "Çap");
        assert!(!f.is_measure());
        f.unit_key = Some("diameter_unit");
        assert!(f.is_measure());
        assert_eq!(f.effective_unit_type(), UnitType::Length);
    }
}
