//! Enum label vocabularies and unit lists

use super::types::UnitType;

/// Integer code → label mapping. Entries are kept in ascending code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVocabulary {
    pub key: &'static str,
    pub entries: &'static [(i64, &'static str)],
}

impl EnumVocabulary {
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }
}

pub const ENUMS: &[EnumVocabulary] = &[
    EnumVocabulary {
        key: "surface_quality",
        entries: &[(0, "Pürtüklü"), (1, "Tozsu"), (2, "Kaygan")],
    },
    EnumVocabulary {
        key: "baking",
        entries: &[(0, "İyi"), (1, "Orta"), (2, "Kötü")],
    },
    EnumVocabulary {
        key: "texture",
        entries: &[(0, "Sert"), (1, "Orta"), (2, "Yumuşak")],
    },
    EnumVocabulary {
        key: "pore",
        entries: &[(0, "Az"), (1, "Orta"), (2, "Çok")],
    },
];

pub fn enum_vocabulary(key: &str) -> Option<&'static EnumVocabulary> {
    ENUMS.iter().find(|v| v.key == key)
}

/// (value, label) select options sorted by ascending numeric code.
/// Unknown vocabularies yield no options.
pub fn enum_options(key: &str) -> Vec<(String, String)> {
    let mut entries: Vec<(i64, &'static str)> = enum_vocabulary(key)
        .map(|v| v.entries.to_vec())
        .unwrap_or_default();
    entries.sort_by_key(|(code, _)| *code);
    entries
        .into_iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

pub fn unit_options(unit_type: UnitType) -> Vec<(String, String)> {
    unit_type
        .units()
        .iter()
        .map(|u| (u.to_string(), u.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_sorted_by_code() {
        let opts = enum_options("baking");
        assert_eq!(
            opts,
            vec![
                ("0".to_string(), "İyi".to_string()),
                ("1".to_string(), "Orta".to_string()),
                ("2".to_string(), "Kötü".to_string()),
            ]
        );
        assert!(enum_options("missing").is_empty());
    }

    #[test]
    fn units_follow_unit_type() {
        let weight: Vec<String> = unit_options(UnitType::Weight).into_iter().map(|(v, _)| v).collect();
        assert_eq!(weight, vec!["gr", "kg"]);
        assert_eq!(unit_options(UnitType::Length).len(), 3);
    }

    #[test]
    fn label_lookup() {
        let v = enum_vocabulary("surface_quality").unwrap();
        assert_eq!(v.label(0), Some("Pürtüklü"));
        assert_eq!(v.label(7), None);
    }
}
