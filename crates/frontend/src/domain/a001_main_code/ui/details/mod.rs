//! Main code detail modal with the artifacts recorded under it

use crate::domain::a002_artifact::api as artifact_api;
use crate::domain::a002_artifact::ui::details::ArtifactDetailModal;
use crate::domain::a002_artifact::ui::list::state::{
    create_linked_state, LINKED_ORDERING_OPTIONS, LINKED_PAGE_SIZES,
};
use crate::shared::components::key_value_row::{non_empty_rows, KeyValueGrid};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::list_query::{ordering_choices, spawn_list_load};
use crate::shared::modal::Modal;
use contracts::domain::a001_main_code::aggregate::MainCode;
use contracts::domain::a002_artifact::aggregate::Artifact;
use contracts::shared::artifact_schema::DetailRow;
use leptos::prelude::*;

/// "Anakod Bilgileri" rows; blank fields are left out
pub fn main_code_rows(m: &MainCode) -> Vec<DetailRow> {
    non_empty_rows(vec![
        ("Anakod", Some(m.code.clone())),
        ("Buluntu Yeri", Some(m.finding_place.clone())),
        ("Plan Kare", m.plan_square.clone()),
        ("Tabaka", m.layer.clone()),
        ("Seviye", m.level.clone()),
        ("Mezar No", m.grave_no.clone()),
        ("GIS", m.gis.clone()),
        ("Açıklama", m.description.clone()),
        ("Oluşturma", Some(format_datetime(&m.created_at))),
        ("Güncelleme", m.updated_at.as_deref().map(format_datetime)),
    ])
}

#[component]
pub fn MainCodeDetailModal(main_code: MainCode, on_close: Callback<()>) -> impl IntoView {
    let linked = create_linked_state(main_code.id);
    let opened_artifact = RwSignal::new(None::<Artifact>);

    // failures here just leave the list empty
    let load = move || {
        spawn_list_load(linked, true, |query: String| async move {
            artifact_api::list_artifacts(&query).await
        })
    };
    load();

    // Escape reaches both modals; the inner one goes first
    let close = Callback::new(move |_| {
        if opened_artifact.get_untracked().is_some() {
            opened_artifact.set(None);
        } else {
            on_close.run(());
        }
    });

    view! {
        <Modal title=format!("Anakod {}", main_code.code) on_close=close class="modal--wide".to_string()>
            <section class="detail-section">
                <h3 class="detail-section__title">"Anakod Bilgileri"</h3>
                <KeyValueGrid rows=main_code_rows(&main_code) />
            </section>

            <section class="detail-section">
                <div class="detail-section__header">
                    <h3 class="detail-section__title">"Bağlı Buluntular"</h3>
                    <Select
                        value=Signal::derive(move || linked.with(|s| s.ordering.clone()))
                        options=ordering_choices(LINKED_ORDERING_OPTIONS)
                        on_change=Callback::new(move |ordering: String| {
                            linked.update(|s| s.set_ordering(&ordering));
                            load();
                        })
                    />
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || linked.with(|s| s.page))
                    total_pages=Signal::derive(move || linked.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || linked.with(|s| s.count))
                    page_size=Signal::derive(move || linked.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page| {
                        linked.update(|s| s.set_page(page));
                        load();
                    })
                    on_page_size_change=Callback::new(move |size| {
                        linked.update(|s| s.set_page_size(size));
                        load();
                    })
                    page_size_options=LINKED_PAGE_SIZES.to_vec()
                />

                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tam Buluntu No"</th>
                            <th class="table__header-cell">"Buluntu Tarihi"</th>
                            <th class="table__header-cell">"Form"</th>
                            <th class="table__header-cell">"Dönem"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || linked.with(|s| s.rows.clone())
                            key=|a| a.id
                            children=move |a: Artifact| {
                                let date = a.artifact_date.as_deref().map(format_date).unwrap_or_default();
                                let full_no = a.full_no();
                                let form = a.form_type.display_name();
                                let period = a.period.clone().unwrap_or_default();
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| opened_artifact.set(Some(a.clone()))
                                    >
                                        <td class="table__cell">{full_no}</td>
                                        <td class="table__cell">{date}</td>
                                        <td class="table__cell">{form}</td>
                                        <td class="table__cell">{period}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || linked.with(|s| !s.loading && s.rows.is_empty())>
                    <div class="table-wrapper__empty">"Bu Anakoda bağlı buluntu yok."</div>
                </Show>
            </section>

            {move || opened_artifact.get().map(|artifact| view! {
                <ArtifactDetailModal
                    artifact=artifact
                    on_close=Callback::new(move |_| opened_artifact.set(None))
                />
            })}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_leave_out_blank_fields() {
        let m = MainCode {
            id: 1,
            code: "AAC".into(),
            finding_place: "Nekropol".into(),
            plan_square: Some("K12".into()),
            layer: Some(String::new()),
            level: None,
            grave_no: Some("M-4".into()),
            gis: None,
            description: None,
            created_at: "2024-05-01T10:30:00Z".into(),
            updated_at: None,
        };
        let rows = main_code_rows(&m);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Anakod", "Buluntu Yeri", "Plan Kare", "Mezar No", "Oluşturma"]);
        assert_eq!(rows[4].value, "01.05.2024 10:30");
    }
}
