pub mod state;

use self::state::{create_state, ArtifactFilters, ArtifactRowCells, ORDERING_OPTIONS, PAGE_SIZES};
use crate::domain::a002_artifact::api;
use crate::domain::a002_artifact::ui::details::ArtifactDetailModal;
use crate::domain::a002_artifact::ui::form::ArtifactForm;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::icons::icon;
use crate::shared::list_query::{ordering_choices, spawn_list_load, ListFilters};
use crate::shared::modal::{Modal, ModalState};
use crate::shared::notice::{confirm_delete, Notice, NoticeBanner, DELETED_MESSAGE};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_artifact::aggregate::Artifact;
use contracts::domain::a002_artifact::form::saved_message;
use contracts::enums::{ExportFormat, FormType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ArtifactList(
    /// Opens the create page; the button is hidden without it
    #[prop(optional)]
    on_create: Option<Callback<()>>,
) -> impl IntoView {
    let state = create_state();
    let notice = RwSignal::new(Notice::None);
    let modal = RwSignal::new(ModalState::<Artifact>::Closed);

    let load = move || {
        spawn_list_load(state, false, |query: String| async move {
            api::list_artifacts(&query).await
        })
    };

    let delete_row = move |id: i64| {
        if !confirm_delete() {
            return;
        }
        spawn_local(async move {
            match api::delete_artifact(id).await {
                Ok(()) => {
                    notice.set(Notice::Success(DELETED_MESSAGE.to_string()));
                    state.update(|s| s.step_back_after_delete());
                    load();
                }
                Err(e) => notice.set(Notice::Error(e)),
            }
        });
    };

    let export_row = move |artifact: &Artifact, format: ExportFormat| {
        let outcome = api::start_export(artifact.id, format)
            .map(|_| format.started_message(&artifact.full_no()));
        notice.set(match outcome {
            Ok(msg) => Notice::Success(msg),
            Err(e) => Notice::Error(e),
        });
    };

    let on_edit_saved = Callback::new(move |saved: Artifact| {
        modal.set(ModalState::Closed);
        notice.set(Notice::Success(saved_message(&saved, true)));
        load();
    });

    let draft = move |get: fn(&ArtifactFilters) -> &String| {
        Signal::derive(move || state.with(|s| get(&s.filter_draft).clone()))
    };
    let set_draft = move |set: fn(&mut ArtifactFilters, String)| {
        Callback::new(move |v: String| state.update(|s| set(&mut s.filter_draft, v)))
    };

    load();

    view! {
        <PageFrame page_id="a002_artifact--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Buluntu Listesi"</h1>
                    <Badge variant="primary".to_string()>
                        {move || state.with(|s| s.count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Select
                        value=Signal::derive(move || state.with(|s| s.ordering.clone()))
                        options=ordering_choices(ORDERING_OPTIONS)
                        on_change=Callback::new(move |ordering: String| {
                            state.update(|s| s.set_ordering(&ordering));
                            load();
                        })
                    />
                    {on_create.map(|create| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| create.run(())>
                            {icon("plus")}
                            " Yeni Buluntu"
                        </Button>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            state.update(|s| s.set_page(1));
                            load();
                        }
                        disabled=Signal::derive(move || state.with(|s| s.loading))
                    >
                        {icon("refresh")}
                        " Yenile"
                    </Button>
                </div>
            </div>

            <NoticeBanner notice=notice />

            <div class="page__content">
                <FilterPanel
                    active_filters_count=Signal::derive(move || state.with(|s| s.filters.active_count()))
                    on_apply=Callback::new(move |_| {
                        state.update(|s| s.apply_filters());
                        load();
                    })
                    on_clear=Callback::new(move |_| {
                        state.update(|s| s.clear_filters());
                        load();
                    })
                    toolbar=view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                            total_count=Signal::derive(move || state.with(|s| s.count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |page| {
                                state.update(|s| s.set_page(page));
                                load();
                            })
                            on_page_size_change=Callback::new(move |size| {
                                state.update(|s| s.set_page_size(size));
                                load();
                            })
                            page_size_options=PAGE_SIZES.to_vec()
                        />
                    }
                    .into_any()
                >
                    <Input
                        label="Arama".to_string()
                        placeholder="Buluntu no, dönem, notlar...".to_string()
                        value=draft(|f| &f.q)
                        on_input=set_draft(|f, v| f.q = v)
                    />
                    <Input
                        label="Anakod".to_string()
                        value=draft(|f| &f.main_code_code)
                        on_input=set_draft(|f, v| f.main_code_code = v)
                    />
                    <Input
                        label="Buluntu Yeri".to_string()
                        value=draft(|f| &f.finding_place)
                        on_input=set_draft(|f, v| f.finding_place = v)
                    />
                    <Input
                        label="Buluntu No".to_string()
                        value=draft(|f| &f.artifact_no)
                        on_input=set_draft(|f, v| f.artifact_no = v)
                    />
                    <Input
                        label="Yapım Malzemesi".to_string()
                        value=draft(|f| &f.production_material)
                        on_input=set_draft(|f, v| f.production_material = v)
                    />
                    <Input
                        label="Dönem".to_string()
                        value=draft(|f| &f.period)
                        on_input=set_draft(|f, v| f.period = v)
                    />
                    <Select
                        label="Form Tipi".to_string()
                        value=draft(|f| &f.form_type)
                        options=FormType::options()
                        placeholder="Tümü".to_string()
                        on_change=set_draft(|f, v| f.form_type = v)
                    />
                    <Input
                        label="Tarih (başlangıç)".to_string()
                        input_type="date".to_string()
                        value=draft(|f| &f.date_from)
                        on_input=set_draft(|f, v| f.date_from = v)
                    />
                    <Input
                        label="Tarih (bitiş)".to_string()
                        input_type="date".to_string()
                        value=draft(|f| &f.date_to)
                        on_input=set_draft(|f, v| f.date_to = v)
                    />
                </FilterPanel>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">
                        <span class="alert__text">{err}</span>
                        <button
                            class="alert__close"
                            title="Kapat"
                            on:click=move |_| state.update(|s| s.error = None)
                        >
                            {icon("x")}
                        </button>
                    </div>
                })}

                <div class="table-wrapper">
                    <Show when=move || state.with(|s| s.loading)>
                        <div class="table-wrapper__loading">
                            <Spinner size=SpinnerSize::Small />
                        </div>
                    </Show>

                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Tam Buluntu No"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Anakod"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Buluntu Tarihi"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Form"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Yapım Malzemesi"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Dönem"</TableHeaderCell>
                                <TableHeaderCell min_width=280.0>"İşlemler"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows.clone())
                                key=|a| (a.id, a.updated_at.clone())
                                children=move |a: Artifact| {
                                    let id = a.id;
                                    let ArtifactRowCells { full_no, main_code, date, form, material, period } =
                                        ArtifactRowCells::of(&a);
                                    let row = StoredValue::new(a);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            modal.set(ModalState::Viewing(row.get_value()));
                                                        }
                                                    >
                                                        {full_no}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{main_code}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {date}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{form}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {material}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {period}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="button button--icon"
                                                        title="Görüntüle"
                                                        on:click=move |_| modal.set(ModalState::Viewing(row.get_value()))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="button button--icon"
                                                        title="Düzenle"
                                                        on:click=move |_| modal.set(ModalState::Editing(row.get_value()))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Sil"
                                                        on:click=move |_| delete_row(id)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                    {ExportFormat::all()
                                                        .into_iter()
                                                        .map(|format| view! {
                                                            <button
                                                                class="button button--small button--secondary"
                                                                title="Dışa aktar"
                                                                on:click=move |_| row.with_value(|a| export_row(a, format))
                                                            >
                                                                {icon("download")}
                                                                {format.button_label()}
                                                            </button>
                                                        })
                                                        .collect_view()}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| !s.loading && s.rows.is_empty() && s.error.is_none())>
                        <div class="table-wrapper__empty">"Kayıt bulunamadı."</div>
                    </Show>
                </div>
            </div>

            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Viewing(artifact) => Some(view! {
                    <ArtifactDetailModal
                        artifact=artifact
                        on_close=Callback::new(move |_| modal.set(ModalState::Closed))
                    />
                }
                .into_any()),
                ModalState::Editing(artifact) => Some(view! {
                    <Modal
                        title=format!("Buluntu Düzenle: {}", artifact.full_no())
                        on_close=Callback::new(move |_| modal.set(ModalState::Closed))
                        class="modal--wide".to_string()
                    >
                        <ArtifactForm
                            artifact=artifact
                            on_saved=on_edit_saved
                            on_cancel=Callback::new(move |_| modal.set(ModalState::Closed))
                        />
                    </Modal>
                }
                .into_any()),
            }}
        </PageFrame>
    }
}
