//! Tab key to view mapping. Every tab key the app can open is listed here.

use crate::dashboards::d001_health::HealthDashboard;
use crate::domain::a001_main_code::ui::create::MainCodeCreate;
use crate::domain::a001_main_code::ui::list::MainCodeList;
use crate::domain::a002_artifact::ui::form::ArtifactCreatePage;
use crate::domain::a002_artifact::ui::list::ArtifactList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// View for the tab `key`, or a placeholder for keys nobody registered.
///
/// `tabs_store` is available to pages that need to open or close tabs.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // d001: backend health
        "d001_health" => view! { <HealthDashboard /> }.into_any(),

        // a001: main codes
        "a001_main_code_create" => view! { <MainCodeCreate /> }.into_any(),
        "a001_main_code_list" => view! { <MainCodeList /> }.into_any(),

        // a002: artifacts
        "a002_artifact_create" => view! { <ArtifactCreatePage /> }.into_any(),
        "a002_artifact_list" => view! {
            <ArtifactList on_create=Callback::new(move |_| {
                tabs_store.open_tab("a002_artifact_create", super::tab_label_for_key("a002_artifact_create"))
            }) />
        }
        .into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Sayfa bulunamadı"</div> }.into_any()
        }
    }
}
