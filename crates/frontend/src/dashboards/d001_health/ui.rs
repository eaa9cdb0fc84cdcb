use super::api::{fetch_health, format_payload};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn HealthDashboard() -> impl IntoView {
    let (payload, set_payload) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match fetch_health().await {
                Ok(value) => {
                    set_payload.set(Some(format_payload(&value)));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::warn!("health check failed: {}", e);
                    set_payload.set(None);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    load();

    view! {
        <PageFrame page_id="d001_health--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sistem Durumu"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Yenile"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">
                        <span class="alert__text">{err}</span>
                    </div>
                })}

                {move || payload.get().map(|text| view! {
                    <pre class="health__payload">{text}</pre>
                })}
            </div>
        </PageFrame>
    }
}
