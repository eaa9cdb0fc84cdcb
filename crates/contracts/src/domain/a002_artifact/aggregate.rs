use crate::domain::common::null_as_default;
use crate::enums::FormType;
use crate::shared::artifact_schema::Bag;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Zero-padded display form of an artifact number (`7` → `0007`)
pub fn padded_artifact_no(no: u32) -> String {
    format!("{:04}", no)
}

// ============================================================================
// Read model
// ============================================================================

/// Catalogued find ("Buluntu") as returned by `/api/artifacts/`.
///
/// `details` follows the schema of `form_type`, `measurements` is shared by
/// every type. Both may contain keys no schema knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: i64,
    pub main_code: i64,
    #[serde(default)]
    pub main_code_code: Option<String>,
    #[serde(default)]
    pub main_code_finding_place: Option<String>,
    pub artifact_no: u32,
    #[serde(default)]
    pub full_artifact_no: Option<String>,
    #[serde(default)]
    pub artifact_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_type: FormType,
    #[serde(default)]
    pub production_material: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub finding_shape: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub excavation_inv_no: Option<String>,
    #[serde(default)]
    pub museum_inv_no: Option<String>,
    #[serde(default)]
    pub piece_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source_and_reference: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_inventory: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Bag,
    #[serde(default, deserialize_with = "null_as_default")]
    pub measurements: Bag,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drawings: Vec<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Artifact {
    pub fn padded_no(&self) -> String {
        padded_artifact_no(self.artifact_no)
    }

    /// Server-computed full number, rebuilt from the main code when absent
    pub fn full_no(&self) -> String {
        match (&self.full_artifact_no, &self.main_code_code) {
            (Some(full), _) if !full.is_empty() => full.clone(),
            (_, Some(code)) => format!("{}{}", code, self.padded_no()),
            _ => self.padded_no(),
        }
    }

    /// `AAA — Açma 3`, or just the code when the place is unknown
    pub fn main_code_label(&self) -> String {
        let code = self.main_code_code.clone().unwrap_or_else(|| self.main_code.to_string());
        match self.main_code_finding_place.as_deref() {
            Some(place) if !place.is_empty() => format!("{} — {}", code, place),
            _ => code,
        }
    }

    pub fn has_files(&self) -> bool {
        !self.images.is_empty() || !self.drawings.is_empty()
    }
}

/// Display text of one image/drawing reference
pub fn file_reference_text(reference: &Value) -> String {
    match reference {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_record_with_null_bags() {
        let json = r#"{
            "id": 11, "main_code": 3, "main_code_code": "AAC",
            "main_code_finding_place": "Açma 2", "artifact_no": 7,
            "full_artifact_no": "AAC0007", "artifact_date": "2025-07-14",
            "form_type": "SIKKE", "production_material": "Bronz",
            "period": null, "piece_date": null, "notes": null,
            "source_and_reference": null, "is_active": true, "is_inventory": false,
            "details": null, "measurements": {"height": "2", "height_unit": "cm"},
            "images": null, "drawings": ["cizim/aac0007.png"],
            "created_at": "2025-07-14T10:00:00Z", "updated_at": "2025-07-14T10:00:00Z"
        }"#;
        let a: Artifact = serde_json::from_str(json).unwrap();
        assert_eq!(a.form_type, FormType::Sikke);
        assert!(a.details.is_empty());
        assert!(a.images.is_empty());
        assert_eq!(a.measurements.get("height_unit"), Some(&json!("cm")));
        assert_eq!(a.full_no(), "AAC0007");
        assert_eq!(a.main_code_label(), "AAC — Açma 2");
        assert!(a.has_files());
    }

    #[test]
    fn minimal_record_gets_defaults() {
        let a: Artifact =
            serde_json::from_str(r#"{"id": 1, "main_code": 9, "artifact_no": 12}"#).unwrap();
        assert_eq!(a.form_type, FormType::Genel);
        assert!(a.is_active);
        assert!(!a.is_inventory);
        assert_eq!(a.padded_no(), "0012");
        assert_eq!(a.full_no(), "0012");
        assert_eq!(a.main_code_label(), "9");
        assert!(!a.has_files());
    }

    #[test]
    fn full_no_falls_back_to_code() {
        let mut a: Artifact = serde_json::from_str(
            r#"{"id": 1, "main_code": 9, "main_code_code": "ABZ", "artifact_no": 123}"#,
        )
        .unwrap();
        assert_eq!(a.full_no(), "ABZ0123");
        a.artifact_no = 12345;
        assert_eq!(a.full_no(), "ABZ12345");
    }

    #[test]
    fn file_references() {
        assert_eq!(file_reference_text(&json!("a.jpg")), "a.jpg");
        assert_eq!(file_reference_text(&json!({"url": "b.jpg"})), r#"{"url":"b.jpg"}"#);
    }
}
