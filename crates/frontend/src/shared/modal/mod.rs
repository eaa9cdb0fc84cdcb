use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// What a page's modal currently shows.
///
/// One value instead of an "open" flag plus a selected record, so the
/// modal can never be open without a record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Viewing(T),
    Editing(T),
}

impl<T> ModalState<T> {
    pub fn viewing(&self) -> Option<&T> {
        match self {
            ModalState::Viewing(r) => Some(r),
            _ => None,
        }
    }
}

/// Overlay dialog. Escape, the close button and a click on the overlay all
/// call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Extra class on the dialog box, e.g. `modal--wide`
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=move || format!("modal {}", class.get().unwrap_or_default())
                role="dialog"
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
