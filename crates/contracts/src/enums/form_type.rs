use serde::{Deserialize, Serialize};

/// Artifact subtype, decides which details schema applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormType {
    #[default]
    Genel,
    Sikke,
    Seramik,
    Mezar,
}

impl FormType {
    /// Wire value as sent to and received from the API
    pub fn code(&self) -> &'static str {
        match self {
            FormType::Genel => "GENEL",
            FormType::Sikke => "SIKKE",
            FormType::Seramik => "SERAMIK",
            FormType::Mezar => "MEZAR",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormType::Genel => "Genel",
            FormType::Sikke => "Sikke",
            FormType::Seramik => "Seramik",
            FormType::Mezar => "Mezar",
        }
    }

    pub fn all() -> Vec<FormType> {
        vec![
            FormType::Genel,
            FormType::Sikke,
            FormType::Seramik,
            FormType::Mezar,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "GENEL" => Some(FormType::Genel),
            "SIKKE" => Some(FormType::Sikke),
            "SERAMIK" => Some(FormType::Seramik),
            "MEZAR" => Some(FormType::Mezar),
            _ => None,
        }
    }

    /// (value, label) pairs for select controls
    pub fn options() -> Vec<(String, String)> {
        Self::all()
            .into_iter()
            .map(|t| (t.code().to_string(), t.display_name().to_string()))
            .collect()
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_round_trip() {
        for t in FormType::all() {
            assert_eq!(FormType::from_code(t.code()), Some(t));
        }
        assert_eq!(FormType::from_code("KEMIK"), None);
    }

    #[test]
    fn serializes_uppercase() {
        let json = serde_json::to_string(&FormType::Seramik).unwrap();
        assert_eq!(json, "\"SERAMIK\"");
        let parsed: FormType = serde_json::from_str("\"MEZAR\"").unwrap();
        assert_eq!(parsed, FormType::Mezar);
    }
}
