//! Main code create page
//!
//! - view_model.rs: form state and the submit command
//! - mod.rs: the page itself

mod view_model;

pub use view_model::MainCodeCreateViewModel;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBanner;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use contracts::domain::a001_main_code::aggregate::MainCodeDto;
use leptos::prelude::*;

#[component]
pub fn MainCodeCreate() -> impl IntoView {
    let vm = MainCodeCreateViewModel::new();
    let form = vm.form;

    let field = move |get: fn(&MainCodeDto) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };
    let setter = move |set: fn(&mut MainCodeDto, String)| {
        Callback::new(move |v: String| form.update(|f| set(f, v)))
    };

    view! {
        <PageFrame page_id="a001_main_code--form" category=PAGE_CAT_FORM>
            <PageHeader title="Anakod Oluştur" subtitle="Kod sunucu tarafından sırayla atanır (AAA, AAB, ...)".to_string() />

            <NoticeBanner notice=vm.notice />

            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div class="form__grid">
                    <Input
                        label="Buluntu Yeri".to_string()
                        required=true
                        value=field(|f| &f.finding_place)
                        on_input=setter(|f, v| f.finding_place = v)
                    />
                    <Input
                        label="Plan Kare".to_string()
                        value=field(|f| &f.plan_square)
                        on_input=setter(|f, v| f.plan_square = v)
                    />
                    <Input
                        label="Tabaka".to_string()
                        value=field(|f| &f.layer)
                        on_input=setter(|f, v| f.layer = v)
                    />
                    <Input
                        label="Seviye".to_string()
                        value=field(|f| &f.level)
                        on_input=setter(|f, v| f.level = v)
                    />
                    <Input
                        label="Mezar No".to_string()
                        value=field(|f| &f.grave_no)
                        on_input=setter(|f, v| f.grave_no = v)
                    />
                    <Input
                        label="GIS".to_string()
                        value=field(|f| &f.gis)
                        on_input=setter(|f, v| f.gis = v)
                    />
                    <Textarea
                        label="Açıklama".to_string()
                        class="form__group--full".to_string()
                        value=field(|f| &f.description)
                        on_input=setter(|f, v| f.description = v)
                        rows=4
                    />
                </div>

                <div class="form__actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Kaydediliyor..." } else { "Kaydet" }}
                    </button>
                </div>
            </form>
        </PageFrame>
    }
}
