//! Root wrapper for every page rendered inside a tab.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root
//! element so a page found in the DOM inspector leads straight to its
//! `domain/` directory.

use leptos::prelude::*;

/// Table with filters and paging
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form for one record
pub const PAGE_CAT_FORM: &str = "form";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// e.g. `"a002_artifact--list"`
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
