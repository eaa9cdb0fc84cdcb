//! Artifact create/edit form
//!
//! - view_model.rs: form state, advisory uniqueness check, submit
//! - mod.rs: the form component and the create page around it

mod view_model;

pub use view_model::{ArtifactFormViewModel, UNIQUE_CHECK_DELAY_MS};

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBanner;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::schema_form::SchemaFields;
use contracts::domain::a002_artifact::aggregate::Artifact;
use contracts::domain::a002_artifact::form::ArtifactDto;
use contracts::enums::FormType;
use contracts::shared::artifact_schema::{details_schema, details_title, MEASUREMENT_SCHEMA};
use leptos::prelude::*;

/// Artifact form. Without `artifact` it creates records; with one it edits
/// that record.
#[component]
pub fn ArtifactForm(
    #[prop(optional)] artifact: Option<Artifact>,
    /// Called with the stored record after every successful save
    #[prop(optional)]
    on_saved: Option<Callback<Artifact>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let vm = ArtifactFormViewModel::new(artifact.as_ref());
    let form = vm.form;
    vm.load_main_codes();

    let field = move |get: fn(&ArtifactDto) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };
    let setter = move |set: fn(&mut ArtifactDto, String)| {
        Callback::new(move |v: String| form.update(|f| set(f, v)))
    };

    // rebuilt only when the type changes, so typing keeps focus
    let form_type = Memo::new(move |_| form.with(|f| f.form_type));
    let details = Memo::new(move |_| form.with(|f| f.details.clone()));
    let measurements = Memo::new(move |_| form.with(|f| f.measurements.clone()));

    let hint_view = move || {
        let hint = vm.unique_hint();
        hint.text().map(|text| {
            let class = if hint.is_error() { "form__hint form__hint--error" } else { "form__hint form__hint--ok" };
            view! { <div class=class>{text}</div> }
        })
    };

    view! {
        <div class="artifact-form">
            <NoticeBanner notice=vm.notice />

            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit(on_saved);
                }
            >
                <section class="form__section">
                    <h3 class="form__section-title">"Genel Bilgiler"</h3>
                    <div class="form__grid">
                        <Select
                            label="Anakod".to_string()
                            required=true
                            value=field(|f| &f.main_code)
                            options=Signal::derive(move || vm.main_code_options())
                            placeholder="Anakod seçiniz".to_string()
                            on_change=Callback::new(move |v| vm.set_main_code(v))
                        />
                        <div class="form__group">
                            <Input
                                label="Buluntu No".to_string()
                                required=true
                                placeholder="örn. 12".to_string()
                                value=field(|f| &f.artifact_no)
                                on_input=Callback::new(move |v| vm.set_artifact_no(v))
                            />
                            {hint_view}
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Tam Buluntu No"</label>
                            <div class="form__readonly">
                                {move || vm.full_no_preview().unwrap_or_else(|| "—".to_string())}
                            </div>
                        </div>
                        <Input
                            label="Buluntu Tarihi".to_string()
                            required=true
                            input_type="date".to_string()
                            value=field(|f| &f.artifact_date)
                            on_input=setter(|f, v| f.artifact_date = v)
                        />
                        <Select
                            label="Form Tipi".to_string()
                            value=Signal::derive(move || form_type.get().code().to_string())
                            options=FormType::options()
                            on_change=Callback::new(move |code: String| vm.set_form_type(&code))
                        />
                        <Input
                            label="Yapım Malzemesi".to_string()
                            value=field(|f| &f.production_material)
                            on_input=setter(|f, v| f.production_material = v)
                        />
                        <Input
                            label="Dönem".to_string()
                            value=field(|f| &f.period)
                            on_input=setter(|f, v| f.period = v)
                        />
                        <Input
                            label="Buluntu Şekli".to_string()
                            value=field(|f| &f.finding_shape)
                            on_input=setter(|f, v| f.finding_shape = v)
                        />
                        <Input
                            label="Seviye".to_string()
                            value=field(|f| &f.level)
                            on_input=setter(|f, v| f.level = v)
                        />
                        <Input
                            label="Kazı Envanter No".to_string()
                            value=field(|f| &f.excavation_inv_no)
                            on_input=setter(|f, v| f.excavation_inv_no = v)
                        />
                        <Input
                            label="Müze Envanter No".to_string()
                            value=field(|f| &f.museum_inv_no)
                            on_input=setter(|f, v| f.museum_inv_no = v)
                        />
                        <Input
                            label="Eser Tarihi".to_string()
                            value=field(|f| &f.piece_date)
                            on_input=setter(|f, v| f.piece_date = v)
                        />
                        <Textarea
                            label="Kaynak / Referans".to_string()
                            class="form__group--full".to_string()
                            value=field(|f| &f.source_and_reference)
                            on_input=setter(|f, v| f.source_and_reference = v)
                        />
                        <Textarea
                            label="Notlar".to_string()
                            class="form__group--full".to_string()
                            value=field(|f| &f.notes)
                            on_input=setter(|f, v| f.notes = v)
                        />
                        <div class="form__group form__group--inline">
                            <Checkbox
                                label="Envanterlik".to_string()
                                checked=Signal::derive(move || form.with(|f| f.is_inventory))
                                on_change=Callback::new(move |v| form.update(|f| f.is_inventory = v))
                            />
                            <Checkbox
                                label="Aktif".to_string()
                                checked=Signal::derive(move || form.with(|f| f.is_active))
                                on_change=Callback::new(move |v| form.update(|f| f.is_active = v))
                            />
                        </div>
                    </div>
                </section>

                {move || {
                    let ft = form_type.get();
                    view! {
                        <SchemaFields
                            title=details_title(ft)
                            schema=details_schema(ft)
                            data=details
                            on_change=Callback::new(move |(key, value): (String, serde_json::Value)| {
                                vm.set_detail(&key, value)
                            })
                        />
                    }
                }}

                <SchemaFields
                    title="Ölçü Bilgileri"
                    schema=MEASUREMENT_SCHEMA
                    data=measurements
                    on_change=Callback::new(move |(key, value): (String, serde_json::Value)| {
                        vm.set_measurement(&key, value)
                    })
                />

                <div class="form__actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {icon("save")}
                        {move || match (vm.saving.get(), vm.is_edit_mode()) {
                            (true, _) => "Kaydediliyor...",
                            (false, true) => "Güncelle",
                            (false, false) => "Kaydet",
                        }}
                    </button>
                    {on_cancel.map(|cancel| view! {
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| cancel.run(())
                        >
                            "Vazgeç"
                        </button>
                    })}
                </div>
            </form>
        </div>
    }
}

/// "Buluntu Oluştur" tab
#[component]
pub fn ArtifactCreatePage() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_artifact--form" category=PAGE_CAT_FORM>
            <PageHeader
                title="Buluntu Oluştur"
                subtitle="Kayıttan sonra seçili Anakod korunur.".to_string()
            />
            <ArtifactForm />
        </PageFrame>
    }
}
