use crate::shared::api_client::{api_delete, api_get, api_patch, api_post};
use crate::shared::api_utils::api_url;
use crate::shared::list_query::build_query;
use contracts::domain::a002_artifact::aggregate::Artifact;
use contracts::domain::a002_artifact::form::ArtifactPayload;
use contracts::domain::a002_artifact::unique_check::UniqueCheckResponse;
use contracts::domain::common::ListResponse;
use contracts::enums::ExportFormat;

const API_PATH: &str = "/api/artifacts/";

pub async fn list_artifacts(query: &str) -> Result<ListResponse<Artifact>, String> {
    if query.is_empty() {
        api_get(API_PATH).await
    } else {
        api_get(&format!("{}?{}", API_PATH, query)).await
    }
}

pub async fn create_artifact(payload: &ArtifactPayload) -> Result<Artifact, String> {
    api_post(API_PATH, payload).await
}

pub async fn update_artifact(id: i64, payload: &ArtifactPayload) -> Result<Artifact, String> {
    api_patch(&format!("{}{}/", API_PATH, id), payload).await
}

pub async fn delete_artifact(id: i64) -> Result<(), String> {
    api_delete(&format!("{}{}/", API_PATH, id)).await
}

/// `{exists}` for a main code / number pair
pub async fn check_unique(params: &[(&str, String)]) -> Result<UniqueCheckResponse, String> {
    api_get(&format!("{}check-unique/?{}", API_PATH, build_query(params))).await
}

pub fn export_path(id: i64, format: ExportFormat) -> String {
    format!("{}{}/export/?format={}", API_PATH, id, format.code())
}

/// Hands the download to the browser by navigating to the export URL
pub fn start_export(id: i64, format: ExportFormat) -> Result<(), String> {
    let path = export_path(id, format);
    log::debug!("GET {}", path);
    let window = web_sys::window().ok_or_else(|| "Tarayıcı penceresi bulunamadı.".to_string())?;
    window
        .location()
        .set_href(&api_url(&path))
        .map_err(|e| format!("Export başlatılamadı: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_carries_format() {
        assert_eq!(export_path(12, ExportFormat::Xlsx), "/api/artifacts/12/export/?format=xlsx");
    }
}
