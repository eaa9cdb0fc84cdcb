use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

/// Excavation context ("Anakod").
///
/// `code` is assigned by the server in sequence (AAA, AAB, ... ZZZ) and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCode {
    pub id: i64,
    pub code: String,
    pub finding_place: String,
    #[serde(default)]
    pub plan_square: Option<String>,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub grave_no: Option<String>,
    #[serde(default)]
    pub gis: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl MainCode {
    /// Option label for pickers: `AAA — Açma 3`
    pub fn picker_label(&self) -> String {
        format!("{} — {}", self.code, self.finding_place)
    }

    /// Banner shown after the server assigned a code
    pub fn created_message(&self) -> String {
        format!("Anakod {} başarı ile oluşturuldu.", self.code)
    }
}

// ============================================================================
// Create payload
// ============================================================================

/// Create form for a main code. The server assigns `code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainCodeDto {
    pub finding_place: String,
    pub plan_square: String,
    pub description: String,
    pub layer: String,
    pub level: String,
    pub grave_no: String,
    pub gis: String,
}

impl MainCodeDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.finding_place.trim().is_empty() {
            return Err("Buluntu Yeri zorunludur.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_place_is_required() {
        let mut dto = MainCodeDto::default();
        assert_eq!(dto.validate(), Err("Buluntu Yeri zorunludur.".to_string()));
        dto.finding_place = "   ".into();
        assert!(dto.validate().is_err());
        dto.finding_place = "Açma 3".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn parses_server_record_with_nulls() {
        let json = r#"{
            "id": 4, "code": "AAD", "finding_place": "Sondaj 1",
            "plan_square": null, "description": null, "layer": "II",
            "level": null, "grave_no": null, "gis": null,
            "created_at": "2025-06-01T09:30:00Z", "updated_at": "2025-06-01T09:30:00Z"
        }"#;
        let mc: MainCode = serde_json::from_str(json).unwrap();
        assert_eq!(mc.code, "AAD");
        assert_eq!(mc.layer.as_deref(), Some("II"));
        assert_eq!(mc.picker_label(), "AAD — Sondaj 1");
        assert_eq!(mc.created_message(), "Anakod AAD başarı ile oluşturuldu.");
    }
}
