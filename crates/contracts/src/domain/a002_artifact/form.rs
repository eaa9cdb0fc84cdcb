use super::aggregate::Artifact;
use crate::domain::a001_main_code::aggregate::MainCode;
use crate::enums::FormType;
use crate::shared::artifact_schema::{apply_change, Bag};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Digits only, left-padded to four. Empty input stays empty.
pub fn pad_artifact_no(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    format!("{:0>4}", digits)
}

/// Positive artifact number from raw input, `None` for anything else
pub fn parse_artifact_no(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|n| *n > 0)
}

// ============================================================================
// Form state
// ============================================================================

/// Editable artifact form, shared by the create page and the edit modal.
///
/// Select and number inputs are kept as the raw text the user sees;
/// conversion happens in [`ArtifactDto::to_payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactDto {
    /// Main code id as chosen in the picker, empty when none
    pub main_code: String,
    pub artifact_no: String,
    /// `YYYY-MM-DD`
    pub artifact_date: String,
    pub form_type: FormType,
    pub production_material: String,
    pub period: String,
    pub finding_shape: String,
    pub level: String,
    pub excavation_inv_no: String,
    pub museum_inv_no: String,
    pub piece_date: String,
    pub notes: String,
    pub source_and_reference: String,
    pub is_inventory: bool,
    pub is_active: bool,
    pub details: Bag,
    pub measurements: Bag,
    pub images: Vec<Value>,
    pub drawings: Vec<Value>,
}

impl Default for ArtifactDto {
    fn default() -> Self {
        Self {
            main_code: String::new(),
            artifact_no: String::new(),
            artifact_date: String::new(),
            form_type: FormType::Genel,
            production_material: String::new(),
            period: String::new(),
            finding_shape: String::new(),
            level: String::new(),
            excavation_inv_no: String::new(),
            museum_inv_no: String::new(),
            piece_date: String::new(),
            notes: String::new(),
            source_and_reference: String::new(),
            is_inventory: false,
            is_active: true,
            details: Bag::new(),
            measurements: Bag::new(),
            images: Vec::new(),
            drawings: Vec::new(),
        }
    }
}

/// Write shape for `POST /api/artifacts/` and `PATCH /api/artifacts/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactPayload {
    pub main_code: i64,
    pub artifact_no: u32,
    pub artifact_date: String,
    pub form_type: FormType,
    pub production_material: String,
    pub period: String,
    pub finding_shape: String,
    pub level: String,
    pub excavation_inv_no: String,
    pub museum_inv_no: String,
    pub piece_date: String,
    pub notes: String,
    pub source_and_reference: String,
    pub is_inventory: bool,
    pub is_active: bool,
    pub details: Bag,
    pub measurements: Bag,
    pub images: Vec<Value>,
    pub drawings: Vec<Value>,
}

impl ArtifactDto {
    /// Loads a stored record for editing
    pub fn from_artifact(a: &Artifact) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            main_code: a.main_code.to_string(),
            artifact_no: a.artifact_no.to_string(),
            artifact_date: text(&a.artifact_date),
            form_type: a.form_type,
            production_material: text(&a.production_material),
            period: text(&a.period),
            finding_shape: text(&a.finding_shape),
            level: text(&a.level),
            excavation_inv_no: text(&a.excavation_inv_no),
            museum_inv_no: text(&a.museum_inv_no),
            piece_date: text(&a.piece_date),
            notes: text(&a.notes),
            source_and_reference: text(&a.source_and_reference),
            is_inventory: a.is_inventory,
            is_active: a.is_active,
            details: a.details.clone(),
            measurements: a.measurements.clone(),
            images: a.images.clone(),
            drawings: a.drawings.clone(),
        }
    }

    /// Blank form with the same main code still selected
    pub fn reset_keeping_main_code(&mut self) {
        let main_code = std::mem::take(&mut self.main_code);
        *self = Self {
            main_code,
            ..Self::default()
        };
    }

    /// Changing the type drops every detail key of the previous type
    pub fn set_form_type(&mut self, form_type: FormType) {
        if self.form_type != form_type {
            self.details = Bag::new();
        }
        self.form_type = form_type;
    }

    pub fn set_detail(&mut self, key: &str, value: Value) {
        self.details = apply_change(&self.details, key, value);
    }

    pub fn set_measurement(&mut self, key: &str, value: Value) {
        self.measurements = apply_change(&self.measurements, key, value);
    }

    pub fn main_code_id(&self) -> Option<i64> {
        self.main_code.trim().parse::<i64>().ok()
    }

    pub fn artifact_number(&self) -> Option<u32> {
        parse_artifact_no(&self.artifact_no)
    }

    /// `AAA0007` for main code AAA and number 7, once both are set
    pub fn full_no_preview(&self, main_codes: &[MainCode]) -> Option<String> {
        let id = self.main_code_id()?;
        let code = main_codes.iter().find(|m| m.id == id).map(|m| m.code.as_str())?;
        let no = pad_artifact_no(&self.artifact_no);
        if code.is_empty() || no.is_empty() {
            return None;
        }
        Some(format!("{}{}", code, no))
    }

    /// Required-field checks done before any request is sent
    pub fn validate(&self) -> Result<(), String> {
        if self.main_code_id().is_none() {
            return Err("Anakod seçiniz.".into());
        }
        if self.artifact_no.trim().is_empty() {
            return Err("Buluntu No giriniz.".into());
        }
        if self.artifact_number().is_none() {
            return Err("Buluntu No pozitif bir tam sayı olmalıdır.".into());
        }
        let date = self.artifact_date.trim();
        if date.is_empty() {
            return Err("Buluntu Tarihi giriniz.".into());
        }
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err("Buluntu Tarihi geçersiz (YYYY-AA-GG).".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<ArtifactPayload, String> {
        self.validate()?;
        let main_code = self.main_code_id().ok_or("Anakod seçiniz.")?;
        let artifact_no = self
            .artifact_number()
            .ok_or("Buluntu No pozitif bir tam sayı olmalıdır.")?;
        Ok(ArtifactPayload {
            main_code,
            artifact_no,
            artifact_date: self.artifact_date.trim().to_string(),
            form_type: self.form_type,
            production_material: self.production_material.clone(),
            period: self.period.clone(),
            finding_shape: self.finding_shape.clone(),
            level: self.level.clone(),
            excavation_inv_no: self.excavation_inv_no.clone(),
            museum_inv_no: self.museum_inv_no.clone(),
            piece_date: self.piece_date.clone(),
            notes: self.notes.clone(),
            source_and_reference: self.source_and_reference.clone(),
            is_inventory: self.is_inventory,
            is_active: self.is_active,
            details: self.details.clone(),
            measurements: self.measurements.clone(),
            images: self.images.clone(),
            drawings: self.drawings.clone(),
        })
    }
}

/// Banner shown after a successful save
pub fn saved_message(saved: &Artifact, updated: bool) -> String {
    let verb = if updated { "güncellendi" } else { "kaydedildi" };
    format!("{} buluntu başarı ile {}.", saved.full_no(), verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn main_code(id: i64, code: &str) -> MainCode {
        MainCode {
            id,
            code: code.into(),
            finding_place: "Açma 1".into(),
            plan_square: None,
            layer: None,
            level: None,
            grave_no: None,
            gis: None,
            description: None,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: None,
        }
    }

    fn filled() -> ArtifactDto {
        ArtifactDto {
            main_code: "5".into(),
            artifact_no: "7".into(),
            artifact_date: "2025-08-03".into(),
            ..ArtifactDto::default()
        }
    }

    #[test]
    fn padding() {
        assert_eq!(pad_artifact_no("7"), "0007");
        assert_eq!(pad_artifact_no("0012"), "0012");
        assert_eq!(pad_artifact_no("12345"), "12345");
        assert_eq!(pad_artifact_no(""), "");
        assert_eq!(pad_artifact_no("ab"), "");
    }

    #[test]
    fn preview_combines_code_and_number() {
        let codes = vec![main_code(4, "AAB"), main_code(5, "AAA")];
        assert_eq!(filled().full_no_preview(&codes).as_deref(), Some("AAA0007"));

        let mut dto = filled();
        dto.artifact_no.clear();
        assert_eq!(dto.full_no_preview(&codes), None);
        dto = filled();
        dto.main_code.clear();
        assert_eq!(dto.full_no_preview(&codes), None);
    }

    #[test]
    fn switching_form_type_clears_details() {
        let mut dto = filled();
        dto.set_form_type(FormType::Sikke);
        dto.set_detail("emperor", json!("Hadrianus"));
        dto.set_measurement("height", json!("2"));
        dto.set_form_type(FormType::Sikke);
        assert_eq!(dto.details.len(), 1);

        dto.set_form_type(FormType::Seramik);
        assert!(dto.details.is_empty());
        assert_eq!(dto.measurements.get("height"), Some(&json!("2")));
    }

    #[test]
    fn validation_order() {
        let mut dto = ArtifactDto::default();
        assert_eq!(dto.validate(), Err("Anakod seçiniz.".to_string()));
        dto.main_code = "5".into();
        assert_eq!(dto.validate(), Err("Buluntu No giriniz.".to_string()));
        dto.artifact_no = "0".into();
        assert_eq!(dto.validate(), Err("Buluntu No pozitif bir tam sayı olmalıdır.".to_string()));
        dto.artifact_no = "-3".into();
        assert!(dto.validate().is_err());
        dto.artifact_no = "0007".into();
        assert_eq!(dto.validate(), Err("Buluntu Tarihi giriniz.".to_string()));
        dto.artifact_date = "2025-02-30".into();
        assert_eq!(dto.validate(), Err("Buluntu Tarihi geçersiz (YYYY-AA-GG).".to_string()));
        dto.artifact_date = "2025-02-28".into();
        assert_eq!(dto.validate(), Ok(()));
    }

    #[test]
    fn payload_has_integer_ids() {
        let mut dto = filled();
        dto.artifact_no = "0007".into();
        dto.set_form_type(FormType::Mezar);
        dto.set_detail("grave_type", json!("Lahit"));
        let payload = dto.to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["main_code"], json!(5));
        assert_eq!(json["artifact_no"], json!(7));
        assert_eq!(json["form_type"], json!("MEZAR"));
        assert_eq!(json["is_active"], json!(true));
        assert_eq!(json["details"], json!({"grave_type": "Lahit"}));
        assert_eq!(json["images"], json!([]));
    }

    #[test]
    fn reset_keeps_main_code_only() {
        let mut dto = filled();
        dto.notes = "kırık".into();
        dto.is_active = false;
        dto.set_form_type(FormType::Sikke);
        dto.reset_keeping_main_code();
        assert_eq!(
            dto,
            ArtifactDto {
                main_code: "5".into(),
                ..ArtifactDto::default()
            }
        );
    }

    #[test]
    fn edit_round_trip_keeps_legacy_keys() {
        let stored: Artifact = serde_json::from_value(json!({
            "id": 2, "main_code": 5, "main_code_code": "AAA", "artifact_no": 7,
            "artifact_date": "2025-08-03", "form_type": "SERAMIK",
            "details": {"baking": 1, "old_key": "x"}, "museum_inv_no": "M-12"
        }))
        .unwrap();
        let payload = ArtifactDto::from_artifact(&stored).to_payload().unwrap();
        assert_eq!(payload.details.get("old_key"), Some(&json!("x")));
        assert_eq!(payload.museum_inv_no, "M-12");
        assert_eq!(payload.form_type, FormType::Seramik);
        assert_eq!(saved_message(&stored, true), "AAA0007 buluntu başarı ile güncellendi.");
        assert_eq!(saved_message(&stored, false), "AAA0007 buluntu başarı ile kaydedildi.");
    }
}
