use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use leptos::prelude::*;

/// Tab the workspace opens on when the URL names none
pub const HOME_TAB: &str = "d001_health";

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // runs once: restores ?active= and starts syncing it
    tabs_store.init_router_integration();
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
