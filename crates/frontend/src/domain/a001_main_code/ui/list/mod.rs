pub mod state;

use self::state::{create_state, MainCodeRowCells, ORDERING_OPTIONS, PAGE_SIZES};
use crate::domain::a001_main_code::api;
use crate::domain::a001_main_code::ui::details::MainCodeDetailModal;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::icons::icon;
use crate::shared::list_query::{ordering_choices, spawn_list_load, ListFilters};
use crate::shared::modal::ModalState;
use crate::shared::notice::{confirm_delete, Notice, NoticeBanner, DELETED_MESSAGE};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_main_code::aggregate::MainCode;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn MainCodeList() -> impl IntoView {
    let state = create_state();
    let notice = RwSignal::new(Notice::None);
    let modal = RwSignal::new(ModalState::<MainCode>::Closed);

    let load = move || {
        spawn_list_load(state, false, |query: String| async move {
            api::list_main_codes(&query).await
        })
    };

    let delete_row = move |id: i64| {
        if !confirm_delete() {
            return;
        }
        spawn_local(async move {
            match api::delete_main_code(id).await {
                Ok(()) => {
                    notice.set(Notice::Success(DELETED_MESSAGE.to_string()));
                    state.update(|s| s.step_back_after_delete());
                    load();
                }
                Err(e) => notice.set(Notice::Error(e)),
            }
        });
    };

    let draft = move |get: fn(&state::MainCodeFilters) -> &String| {
        Signal::derive(move || state.with(|s| get(&s.filter_draft).clone()))
    };
    let set_draft = move |set: fn(&mut state::MainCodeFilters, String)| {
        Callback::new(move |v: String| state.update(|s| set(&mut s.filter_draft, v)))
    };

    load();

    view! {
        <PageFrame page_id="a001_main_code--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Anakod Listesi"</h1>
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
                        placeholder="Kod, yer, açıklama...".to_string()
                        value=draft(|f| &f.q)
                        on_input=set_draft(|f, v| f.q = v)
                    />
                    <Input
                        label="Anakod".to_string()
                        value=draft(|f| &f.code)
                        on_input=set_draft(|f, v| f.code = v)
                    />
                    <Input
                        label="Buluntu Yeri".to_string()
                        value=draft(|f| &f.finding_place)
                        on_input=set_draft(|f, v| f.finding_place = v)
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

                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=90.0>"Anakod"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Buluntu Yeri"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Plan Kare"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Tabaka"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Seviye"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Mezar No"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Oluşturma"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"İşlemler"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows.clone())
                                key=|row| row.id
                                children=move |row: MainCode| {
                                    let MainCodeRowCells {
                                        code,
                                        finding_place,
                                        plan_square,
                                        layer,
                                        level,
                                        grave_no,
                                        created,
                                    } = MainCodeRowCells::of(&row);
                                    let id = row.id;
                                    let record = StoredValue::new(row);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            modal.set(ModalState::Viewing(record.get_value()));
                                                        }
                                                    >
                                                        {code}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{finding_place}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{plan_square}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{layer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{level}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{grave_no}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="button button--icon"
                                                        title="Görüntüle"
                                                        on:click=move |_| modal.set(ModalState::Viewing(record.get_value()))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Sil"
                                                        on:click=move |_| delete_row(id)
                                                    >
                                                        {icon("delete")}
                                                    </button>
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

            {move || modal.with(|m| m.viewing().cloned()).map(|main_code| view! {
                <MainCodeDetailModal
                    main_code=main_code
                    on_close=Callback::new(move |_| modal.set(ModalState::Closed))
                />
            })}
        </PageFrame>
    }
}
