//! Schema per form type.
//!
//! Adding or removing a field here needs no change in the renderers.

use super::types::{FieldDescriptor as F, UnitType};
use crate::enums::FormType;

/// Shared by every form type, stored in `measurements`
pub const MEASUREMENT_SCHEMA: &[F] = &[
    F::measure("height", "Yükseklik", "height_unit", UnitType::Length),
    F::measure("nozzle_diameter", "Ağız Çapı", "nozzle_diameter_unit", UnitType::Length),
    F::measure("base_diameter", "Kaide/Dip Çapı", "base_diameter_unit", UnitType::Length),
    F::measure("wall_thickness", "Kalınlık/Cidar", "wall_thickness_unit", UnitType::Length),
    F::measure("length", "Uzunluk", "length_unit", UnitType::Length),
    F::measure("width", "Genişlik", "width_unit", UnitType::Length),
    F::measure("body_diameter", "Gövde Çapı", "body_diameter_unit", UnitType::Length),
];

const SIKKE: &[F] = &[
    F::text("condition", "Kondüsyon"),
    F::text("unit", "Birimi"),
    F::measure("diameter", "Çap", "diameter_unit", UnitType::Length),
    F::text("mold_direction", "Kalıp Yönü"),
    F::text("emperor", "İmparator"),
    F::text("minting_year", "Darp Yılı"),
    F::textarea("front_face_definition", "Ön Yüz Tanımı"),
    F::textarea("back_face_definition", "Arka Yüz Tanımı"),
    F::textarea("front_face_legend", "Ön Yüz Lejandı"),
    F::textarea("back_face_legend", "Arka Yüz Lejandı"),
    F::text("mint", "Darphane"),
    F::text("branch", "Şube"),
    F::text("reference", "Ref."),
    F::measure("weight", "Ağırlık", "weight_unit", UnitType::Weight),
];

const SERAMIK: &[F] = &[
    F::text("clay_color", "Hamur Rengi"),
    F::text("undercoat_color", "Astar Rengi"),
    F::text("dipinto_color", "Dipinto Rengi"),
    F::text("surface_color", "Yüzey Rengi"),
    F::text("glaze_color", "Sır Rengi"),
    F::text("pattern_color", "Bezeme Rengi"),
    F::text("other_color", "Diğer Renk"),
    F::textarea("clay_definition", "Hamur Tanım"),
    F::textarea("form_definition", "Form Tanım"),
    F::textarea("more_definition", "Astar/Sır/Yüzey Tanım"),
    F::enumeration("surface_quality", "Yüzey Kalitesi", "surface_quality"),
    F::enumeration("baking", "Fırınlama", "baking"),
    F::enumeration("texture", "Doku", "texture"),
    F::enumeration("pore", "Gözenek", "pore"),
];

const MEZAR: &[F] = &[
    F::text("grave_type", "Mezar Tipi"),
    F::text("burial_form", "Gömü Biçimi"),
    F::text("burial_type", "Gömü Tipi"),
    F::text("depth", "Derinlik"),
    F::text("direction", "Yön"),
    F::textarea("grave_artifacts", "Mezar Buluntuları"),
];

/// Known `details` keys of a form type. `GENEL` has none.
pub fn details_schema(form_type: FormType) -> &'static [F] {
    match form_type {
        FormType::Genel => &[],
        FormType::Sikke => SIKKE,
        FormType::Seramik => SERAMIK,
        FormType::Mezar => MEZAR,
    }
}

/// Section title of the editable details block
pub fn details_title(form_type: FormType) -> String {
    match form_type {
        FormType::Genel => "Form Detayları".to_string(),
        other => format!("{} Detayları", other.display_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::artifact_schema::{enum_vocabulary, FieldKind};
    use std::collections::HashSet;

    #[test]
    fn genel_has_empty_schema() {
        assert!(details_schema(FormType::Genel).is_empty());
        assert_eq!(details_schema(FormType::Sikke).len(), 14);
        assert_eq!(details_schema(FormType::Seramik).len(), 14);
        assert_eq!(details_schema(FormType::Mezar).len(), 6);
    }

    #[test]
    fn keys_are_unique_and_do_not_clash_with_unit_keys() {
        for form_type in FormType::all() {
            let schema = details_schema(form_type);
            let mut seen = HashSet::new();
            for f in schema {
                assert!(seen.insert(f.key), "duplicate key {}", f.key);
                if let Some(unit_key) = f.unit_key {
                    assert!(seen.insert(unit_key), "duplicate unit key {}", unit_key);
                }
            }
        }
    }

    #[test]
    fn every_entry_is_plain_enum_or_measure() {
        let all = FormType::all()
            .into_iter()
            .flat_map(|t| details_schema(t).iter())
            .chain(MEASUREMENT_SCHEMA.iter());
        for f in all {
            match f.kind {
                FieldKind::Enum => {
                    let key = f.enum_key.expect("enum field without vocabulary");
                    assert!(enum_vocabulary(key).is_some(), "unknown vocabulary {}", key);
                }
                FieldKind::Measure => {
                    assert!(f.unit_key.is_some());
                    assert!(f.unit_type.is_some());
                }
                FieldKind::Text | FieldKind::TextArea => assert!(f.unit_key.is_none()),
            }
        }
    }

    #[test]
    fn titles() {
        assert_eq!(details_title(FormType::Genel), "Form Detayları");
        assert_eq!(details_title(FormType::Seramik), "Seramik Detayları");
    }
}
