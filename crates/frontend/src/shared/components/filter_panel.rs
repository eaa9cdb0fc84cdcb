use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter block with the paging bar in its header.
///
/// `children` are the filter inputs; they edit the draft only. "Filtrele"
/// applies it and "Temizle" clears draft and applied filters.
#[component]
pub fn FilterPanel(
    #[prop(into)] active_filters_count: Signal<usize>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
    /// Rendered once in the header, usually `PaginationControls`
    toolbar: AnyView,
    children: ChildrenFn,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtreler"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {toolbar}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <form
                    class="filter-panel-content"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_apply.run(());
                    }
                >
                    <div class="filter-panel__grid">
                        {children()}
                    </div>
                    <div class="filter-panel__actions">
                        <button type="submit" class="button button--primary">
                            "Filtrele"
                        </button>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_clear.run(())
                        >
                            "Temizle"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
