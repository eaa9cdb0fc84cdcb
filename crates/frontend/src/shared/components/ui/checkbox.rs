use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-wrapper">
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{move || label.get()}</span>
        </label>
    }
}
