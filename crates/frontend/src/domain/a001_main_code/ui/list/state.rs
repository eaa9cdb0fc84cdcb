use crate::shared::date_utils::format_datetime;
use crate::shared::list_query::{ListController, ListFilters, DEFAULT_ORDERING};
use contracts::domain::a001_main_code::aggregate::MainCode;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainCodeFilters {
    /// Free-text search across code, place and description
    pub q: String,
    pub code: String,
    pub finding_place: String,
}

impl ListFilters for MainCodeFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("code", self.code.clone()),
            ("finding_place", self.finding_place.clone()),
        ]
    }
}

pub const ORDERING_OPTIONS: &[(&str, &str)] = &[
    ("-created_at", "En yeni"),
    ("created_at", "En eski"),
    ("code", "Kod (A → Z)"),
    ("-code", "Kod (Z → A)"),
];

pub const PAGE_SIZES: &[usize] = &[25, 50, 100, 200];
pub const DEFAULT_PAGE_SIZE: usize = 50;

pub type MainCodeListState = ListController<MainCodeFilters, MainCode>;

pub fn create_state() -> RwSignal<MainCodeListState> {
    RwSignal::new(MainCodeListState::new(DEFAULT_ORDERING, DEFAULT_PAGE_SIZE))
}

fn or_dash(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

/// Cell texts of one table row, owned so every cell closure gets its own
#[derive(Debug, Clone, PartialEq)]
pub struct MainCodeRowCells {
    pub code: String,
    pub finding_place: String,
    pub plan_square: String,
    pub layer: String,
    pub level: String,
    pub grave_no: String,
    pub created: String,
}

impl MainCodeRowCells {
    pub fn of(row: &MainCode) -> Self {
        Self {
            code: row.code.clone(),
            finding_place: row.finding_place.clone(),
            plan_square: or_dash(&row.plan_square),
            layer: or_dash(&row.layer),
            level: or_dash(&row.level),
            grave_no: or_dash(&row.grave_no),
            created: format_datetime(&row.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_has_only_paging() {
        let state = MainCodeListState::new(DEFAULT_ORDERING, DEFAULT_PAGE_SIZE);
        assert_eq!(state.query_string(), "ordering=-created_at&page=1&page_size=50");
    }

    #[test]
    fn draft_is_not_queried_until_applied() {
        let mut state = MainCodeListState::new(DEFAULT_ORDERING, DEFAULT_PAGE_SIZE);
        state.filter_draft.code = "AAB".into();
        state.filter_draft.finding_place = "  ".into();
        assert!(!state.query_string().contains("code=AAB"));

        state.apply_filters();
        assert_eq!(
            state.query_string(),
            "code=AAB&ordering=-created_at&page=1&page_size=50"
        );
        assert_eq!(state.filters.active_count(), 1);
    }

    #[test]
    fn row_cells_dash_missing_columns() {
        let row: MainCode = serde_json::from_str(
            r#"{
                "id": 4, "code": "AAD", "finding_place": "Sondaj 1",
                "plan_square": null, "layer": "II", "level": " ", "grave_no": "M3",
                "created_at": "2025-06-01T09:30:00Z", "updated_at": "2025-06-01T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(
            MainCodeRowCells::of(&row),
            MainCodeRowCells {
                code: "AAD".into(),
                finding_place: "Sondaj 1".into(),
                plan_square: "—".into(),
                layer: "II".into(),
                level: "—".into(),
                grave_no: "M3".into(),
                created: "01.06.2025 09:30".into(),
            }
        );
        // the record itself stays whole for the detail modal
        assert_eq!(row.code, "AAD");
    }

    #[test]
    fn orderings_cover_both_directions() {
        let keys: Vec<_> = ORDERING_OPTIONS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["-created_at", "created_at", "code", "-code"]);
        assert!(PAGE_SIZES.contains(&DEFAULT_PAGE_SIZE));
    }
}
