pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// |   (Left)  |     (Center)     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let left_hidden = move || !ctx.left_open.get();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=left_hidden>
                    {left()}
                </aside>

                <main class="app-main">
                    <div data-zone="center" class="app-tabs">
                        {center()}
                    </div>
                </main>
            </div>
        </div>
    }
}
