//! Read-only artifact detail, shown in a modal from the lists

use crate::shared::components::key_value_row::{non_empty_rows, KeyValueGrid};
use crate::shared::date_utils::format_date;
use crate::shared::modal::Modal;
use crate::shared::schema_form::SchemaDetailSection;
use contracts::domain::a002_artifact::aggregate::{file_reference_text, Artifact};
use contracts::shared::artifact_schema::{details_schema, DetailRow, MEASUREMENT_SCHEMA};
use leptos::prelude::*;
use serde_json::Value;

/// Heading of the schema-driven section, the same for every form type
pub const DETAILS_SECTION_TITLE: &str = "Form Detayları";

fn yes_no(flag: bool) -> String {
    if flag { "Evet" } else { "Hayır" }.to_string()
}

/// "Genel Bilgiler" rows. Empty fields are left out; the two flags always
/// show.
pub fn general_rows(a: &Artifact) -> Vec<DetailRow> {
    let mut rows = non_empty_rows(vec![
        ("Tam Buluntu No", Some(a.full_no())),
        ("Anakod", Some(a.main_code_label())),
        ("Buluntu No", Some(a.padded_no())),
        ("Buluntu Tarihi", a.artifact_date.as_deref().map(format_date)),
        ("Form", Some(a.form_type.display_name().to_string())),
        ("Yapım Malzemesi", a.production_material.clone()),
        ("Dönem", a.period.clone()),
        ("Buluntu Şekli", a.finding_shape.clone()),
        ("Seviye", a.level.clone()),
        ("Kazı Envanter No", a.excavation_inv_no.clone()),
        ("Müze Envanter No", a.museum_inv_no.clone()),
        ("Eser Tarihi", a.piece_date.clone()),
        ("Kaynak / Referans", a.source_and_reference.clone()),
        ("Notlar", a.notes.clone()),
    ]);
    rows.push(DetailRow::new("Envanterlik", yes_no(a.is_inventory)));
    rows.push(DetailRow::new("Aktif", yes_no(a.is_active)));
    rows
}

fn file_list(title: &'static str, refs: Vec<Value>) -> impl IntoView {
    (!refs.is_empty()).then(|| {
        view! {
            <div class="detail-files">
                <h4 class="detail-section__subtitle">{title}</h4>
                <ul class="detail-files__list">
                    {refs
                        .iter()
                        .map(|r| view! { <li>{file_reference_text(r)}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
pub fn ArtifactDetailModal(artifact: Artifact, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Buluntu {}", artifact.full_no());
    let has_files = artifact.has_files();
    let schema = details_schema(artifact.form_type);

    view! {
        <Modal title=title on_close=on_close class="modal--wide".to_string()>
            <section class="detail-section">
                <h3 class="detail-section__title">"Genel Bilgiler"</h3>
                <KeyValueGrid rows=general_rows(&artifact) />
            </section>

            <SchemaDetailSection
                title=DETAILS_SECTION_TITLE
                extras_title="Ek Alanlar"
                schema=schema
                bag=artifact.details.clone()
            />

            <SchemaDetailSection
                title="Ölçü Bilgileri"
                extras_title="Ek Ölçüler"
                schema=MEASUREMENT_SCHEMA
                bag=artifact.measurements.clone()
            />

            {has_files.then(|| view! {
                <section class="detail-section">
                    <h3 class="detail-section__title">"Dosyalar"</h3>
                    {file_list("Görseller", artifact.images.clone())}
                    {file_list("Çizimler", artifact.drawings.clone())}
                </section>
            })}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::FormType;
    use serde_json::json;

    fn artifact() -> Artifact {
        serde_json::from_value(json!({
            "id": 5,
            "main_code": 2,
            "main_code_code": "AAB",
            "main_code_finding_place": "Açma 3",
            "artifact_no": 12,
            "full_artifact_no": "AAB0012",
            "artifact_date": "2024-06-01",
            "form_type": "SIKKE",
            "period": "Roma",
            "notes": "",
            "details": null,
            "measurements": {}
        }))
        .unwrap()
    }

    #[test]
    fn general_rows_skip_blank_fields() {
        let rows = general_rows(&artifact());
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Tam Buluntu No",
                "Anakod",
                "Buluntu No",
                "Buluntu Tarihi",
                "Form",
                "Dönem",
                "Envanterlik",
                "Aktif"
            ]
        );
        assert_eq!(rows[1].value, "AAB — Açma 3");
        assert_eq!(rows[2].value, "0012");
        assert_eq!(rows[3].value, "01.06.2024");
        assert_eq!(rows[4].value, "Sikke");
        assert_eq!(rows[6].value, "Hayır");
        assert_eq!(rows[7].value, "Evet");
    }

    #[test]
    fn details_heading_does_not_follow_form_type() {
        assert_eq!(DETAILS_SECTION_TITLE, "Form Detayları");
        assert_ne!(
            DETAILS_SECTION_TITLE,
            contracts::shared::artifact_schema::details_title(FormType::Sikke)
        );
    }

    #[test]
    fn form_type_decides_details_schema() {
        let a = artifact();
        assert_eq!(a.form_type, FormType::Sikke);
        assert!(!details_schema(a.form_type).is_empty());
        assert!(details_schema(FormType::Genel).is_empty());
    }
}
