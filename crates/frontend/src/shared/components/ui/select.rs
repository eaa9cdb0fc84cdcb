use leptos::prelude::*;

/// Labelled select over `(value, label)` pairs.
///
/// With `placeholder` set, a blank option with that text comes first and
/// selecting it reports an empty string.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=move || format!("form__group {}", class.get().unwrap_or_default())>
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <select
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" selected=move || value.get().is_empty()>{p}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, label)| format!("{}|{}", val, label)
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
