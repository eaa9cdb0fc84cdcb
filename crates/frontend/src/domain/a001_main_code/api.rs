use crate::shared::api_client::{api_delete, api_get, api_post};
use crate::shared::list_query::build_query;
use contracts::domain::a001_main_code::aggregate::{MainCode, MainCodeDto};
use contracts::domain::common::ListResponse;

const API_PATH: &str = "/api/main-codes/";

/// Rows for the picker: everything the first page of 500 holds, by code
pub const PICKER_PAGE_SIZE: usize = 500;

pub async fn list_main_codes(query: &str) -> Result<ListResponse<MainCode>, String> {
    if query.is_empty() {
        api_get(API_PATH).await
    } else {
        api_get(&format!("{}?{}", API_PATH, query)).await
    }
}

/// Main codes for a select box, ordered by code
pub async fn fetch_main_code_options() -> Result<Vec<MainCode>, String> {
    let query = build_query(&[
        ("ordering", "code".to_string()),
        ("page_size", PICKER_PAGE_SIZE.to_string()),
    ]);
    let (rows, _) = list_main_codes(&query).await?.into_parts();
    Ok(rows)
}

/// The response carries the code the server assigned
pub async fn create_main_code(dto: &MainCodeDto) -> Result<MainCode, String> {
    api_post(API_PATH, dto).await
}

pub async fn delete_main_code(id: i64) -> Result<(), String> {
    api_delete(&format!("{}{}/", API_PATH, id)).await
}
