use crate::shared::icons::icon;
use leptos::prelude::*;

pub const DELETE_CONFIRM: &str = "Silmek istediğinize emin misiniz?";
pub const DELETED_MESSAGE: &str = "Kayıt silindi.";

/// Browser confirm dialog before a destructive action.
/// Anything but an explicit "OK" counts as a refusal.
pub fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_CONFIRM).ok())
        .unwrap_or(false)
}

/// Inline banner state. Success and error never show together: a new
/// action replaces whatever was shown before.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notice {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> Option<&str> {
        match self {
            Notice::None => None,
            Notice::Success(msg) | Notice::Error(msg) => Some(msg),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn from_result<T>(result: &Result<T, String>, success: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(value) => Notice::Success(success(value)),
            Err(e) => Notice::Error(e.clone()),
        }
    }
}

/// Dismissable banner bound to a [`Notice`] signal
#[component]
pub fn NoticeBanner(notice: RwSignal<Notice>) -> impl IntoView {
    move || {
        let current = notice.get();
        current.text().map(|text| {
            let class = if current.is_error() {
                "alert alert--error"
            } else {
                "alert alert--success"
            };
            view! {
                <div class=class role="status">
                    <span class="alert__text">{text.to_string()}</span>
                    <button
                        class="alert__close"
                        title="Kapat"
                        on:click=move |_| notice.set(Notice::None)
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
