use leptos::prelude::*;

/// Labelled multi-line input
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class=move || format!("form__group {}", class.get().unwrap_or_default())>
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <textarea
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
