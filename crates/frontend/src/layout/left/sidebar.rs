//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

/// Menu entries shown under a group use their own short labels; the tab
/// that opens gets its title from `tab_label_for_key`.
fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "general",
            label: "Genel",
            icon: "layout-dashboard",
            items: vec![("d001_health", "Dashboard", "activity")],
        },
        MenuGroup {
            id: "main_codes",
            label: "Anakod",
            icon: "map-pin",
            items: vec![
                ("a001_main_code_create", "Oluştur", "plus"),
                ("a001_main_code_list", "Listele", "list"),
            ],
        },
        MenuGroup {
            id: "artifacts",
            label: "Buluntu",
            icon: "package",
            items: vec![
                ("a002_artifact_create", "Oluştur", "plus"),
                ("a002_artifact_list", "Listele", "list"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded_groups.get().contains(&group_id);
                let toggle = move |_| {
                    expanded_groups.update(|items| {
                        if let Some(pos) = items.iter().position(|x| *x == group_id) {
                            items.remove(pos);
                        } else {
                            items.push(group_id);
                        }
                    })
                };
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
