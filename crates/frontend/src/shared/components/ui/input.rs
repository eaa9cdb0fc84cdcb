use leptos::prelude::*;

/// Labelled text input. The value is pushed as a DOM property so resets
/// from the view-model show up after the user has typed.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "date", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class=move || format!("form__group {}", class.get().unwrap_or_default())>
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
