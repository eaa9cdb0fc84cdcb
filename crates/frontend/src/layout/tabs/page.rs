use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Content of one open tab.
///
/// The page is mounted only while its tab is active; switching back builds
/// it again, so every page refetches its data on activation.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = StoredValue::new(tab.key.clone());
    let is_active = move || {
        tab_key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str()))
    };

    view! {
        <div class="tabs__item" data-tab-key=tab.key>
            <Show when=is_active>
                {move || {
                    let key = tab_key.get_value();
                    log::debug!("TabPage mounted: '{}'", key);
                    on_cleanup(move || log::debug!("TabPage unmounted"));
                    render_tab_content(&key, tabs_store)
                }}
            </Show>
        </div>
    }
}
