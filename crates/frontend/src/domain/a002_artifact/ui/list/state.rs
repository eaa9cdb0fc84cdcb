use crate::shared::date_utils::format_date;
use crate::shared::list_query::{ListController, ListFilters, DEFAULT_ORDERING};
use contracts::domain::a002_artifact::aggregate::Artifact;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactFilters {
    pub q: String,
    /// Main code id; set by the linked list of a main code
    pub main_code: String,
    pub main_code_code: String,
    pub finding_place: String,
    pub artifact_no: String,
    pub production_material: String,
    pub period: String,
    /// Wire code (`SIKKE`, ...) or empty for every type
    pub form_type: String,
    /// `YYYY-MM-DD`
    pub date_from: String,
    pub date_to: String,
}

impl ArtifactFilters {
    pub fn for_main_code(id: i64) -> Self {
        Self {
            main_code: id.to_string(),
            ..Self::default()
        }
    }
}

impl ListFilters for ArtifactFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("main_code", self.main_code.clone()),
            ("main_code_code", self.main_code_code.clone()),
            ("finding_place", self.finding_place.clone()),
            ("artifact_no", self.artifact_no.clone()),
            ("production_material", self.production_material.clone()),
            ("period", self.period.clone()),
            ("form_type", self.form_type.clone()),
            ("date_from", self.date_from.clone()),
            ("date_to", self.date_to.clone()),
        ]
    }
}

pub const ORDERING_OPTIONS: &[(&str, &str)] = &[
    ("-created_at", "En yeni kayıt"),
    ("created_at", "En eski kayıt"),
    ("-artifact_date", "Buluntu tarihi (yeni → eski)"),
    ("artifact_date", "Buluntu tarihi (eski → yeni)"),
    ("-artifact_no", "Buluntu No (büyük → küçük)"),
    ("artifact_no", "Buluntu No (küçük → büyük)"),
    ("main_code__code", "Anakod (A → Z)"),
    ("-main_code__code", "Anakod (Z → A)"),
];

pub const PAGE_SIZES: &[usize] = &[25, 50, 100, 200];
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Orderings of the artifact list inside a main code detail
pub const LINKED_ORDERING_OPTIONS: &[(&str, &str)] = &[
    ("-created_at", "En yeni kayıt"),
    ("created_at", "En eski kayıt"),
    ("-artifact_no", "Buluntu No (büyük → küçük)"),
    ("artifact_no", "Buluntu No (küçük → büyük)"),
];

pub const LINKED_PAGE_SIZES: &[usize] = &[10, 25, 50, 100];
pub const LINKED_DEFAULT_PAGE_SIZE: usize = 25;

pub type ArtifactListState = ListController<ArtifactFilters, Artifact>;

pub fn create_state() -> RwSignal<ArtifactListState> {
    RwSignal::new(ArtifactListState::new(DEFAULT_ORDERING, DEFAULT_PAGE_SIZE))
}

/// Artifacts of one main code
pub fn create_linked_state(main_code_id: i64) -> RwSignal<ArtifactListState> {
    RwSignal::new(
        ArtifactListState::new(DEFAULT_ORDERING, LINKED_DEFAULT_PAGE_SIZE)
            .with_filters(ArtifactFilters::for_main_code(main_code_id)),
    )
}

/// Cell texts of one table row, owned so every cell closure gets its own
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactRowCells {
    pub full_no: String,
    pub main_code: String,
    pub date: String,
    pub form: &'static str,
    pub material: String,
    pub period: String,
}

impl ArtifactRowCells {
    pub fn of(a: &Artifact) -> Self {
        Self {
            full_no: a.full_no(),
            main_code: a.main_code_label(),
            date: a.artifact_date.as_deref().map(format_date).unwrap_or_default(),
            form: a.form_type.display_name(),
            material: a.production_material.clone().unwrap_or_default(),
            period: a.period.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ordering_choices;

    #[test]
    fn filters_keep_parameter_order_and_skip_blanks() {
        let mut state = ArtifactListState::new(DEFAULT_ORDERING, DEFAULT_PAGE_SIZE);
        state.filter_draft = ArtifactFilters {
            form_type: "SIKKE".into(),
            main_code_code: "AAB".into(),
            date_from: "2024-01-01".into(),
            period: " ".into(),
            ..ArtifactFilters::default()
        };
        state.apply_filters();
        assert_eq!(
            state.query_string(),
            "main_code_code=AAB&form_type=SIKKE&date_from=2024-01-01&ordering=-created_at&page=1&page_size=50"
        );
        assert_eq!(state.filters.active_count(), 3);
    }

    #[test]
    fn linked_list_is_scoped_to_main_code() {
        let mut state = ArtifactListState::new(DEFAULT_ORDERING, LINKED_DEFAULT_PAGE_SIZE)
            .with_filters(ArtifactFilters::for_main_code(4));
        assert_eq!(
            state.query_string(),
            "main_code=4&ordering=-created_at&page=1&page_size=25"
        );
        state.set_ordering("-artifact_no");
        assert!(state.query_string().starts_with("main_code=4&ordering=-artifact_no"));
    }

    #[test]
    fn row_cells_cover_every_column() {
        let a: Artifact = serde_json::from_str(
            r#"{
                "id": 3, "main_code": 2, "main_code_code": "AAC",
                "main_code_finding_place": "Açma 2", "artifact_no": 7,
                "artifact_date": "2025-07-14", "form_type": "SIKKE",
                "production_material": "Bronz", "period": null
            }"#,
        )
        .unwrap();
        let cells = ArtifactRowCells::of(&a);
        assert_eq!(cells.full_no, "AAC0007");
        assert_eq!(cells.main_code, "AAC — Açma 2");
        assert_eq!(cells.date, "14.07.2025");
        assert_eq!(cells.form, "Sikke");
        assert_eq!(cells.material, "Bronz");
        assert_eq!(cells.period, "");
    }

    #[test]
    fn ordering_sets_match_their_lists() {
        assert_eq!(ORDERING_OPTIONS.len(), 8);
        assert!(LINKED_ORDERING_OPTIONS
            .iter()
            .all(|(k, _)| ORDERING_OPTIONS.iter().any(|(o, _)| o == k)));
        assert!(LINKED_PAGE_SIZES.contains(&LINKED_DEFAULT_PAGE_SIZE));
        assert_eq!(ordering_choices(LINKED_ORDERING_OPTIONS)[0].0, "-created_at");
    }
}
