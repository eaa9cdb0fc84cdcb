use leptos::prelude::*;

/// Small pill: "primary", "success", "error" or "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
