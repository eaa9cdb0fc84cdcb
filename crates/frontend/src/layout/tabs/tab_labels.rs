//! Titles of the tabs, shared by the tab bar and the sidebar.

/// Readable title for a tab key; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d001_health" => "Dashboard",

        "a001_main_code_create" => "Anakod Oluştur",
        "a001_main_code_list" => "Anakod Listesi",

        "a002_artifact_create" => "Buluntu Oluştur",
        "a002_artifact_list" => "Buluntu Listesi",

        _ => "",
    }
}
