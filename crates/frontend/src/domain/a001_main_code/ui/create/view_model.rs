use crate::domain::a001_main_code::api;
use crate::shared::notice::Notice;
use contracts::domain::a001_main_code::aggregate::MainCodeDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MainCodeCreateViewModel {
    pub form: RwSignal<MainCodeDto>,
    pub notice: RwSignal<Notice>,
    pub saving: RwSignal<bool>,
}

impl Default for MainCodeCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MainCodeCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MainCodeDto::default()),
            notice: RwSignal::new(Notice::None),
            saving: RwSignal::new(false),
        }
    }

    /// Validates, posts, and on success clears the form and shows the
    /// code the server assigned
    pub fn submit(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();
        if let Err(msg) = dto.validate() {
            self.notice.set(Notice::Error(msg));
            return;
        }

        let this = *self;
        this.notice.set(Notice::None);
        this.saving.set(true);
        spawn_local(async move {
            let result = api::create_main_code(&dto).await;
            if result.is_ok() {
                this.form.set(MainCodeDto::default());
            }
            this.notice.set(Notice::from_result(&result, |created| created.created_message()));
            this.saving.set(false);
        });
    }
}
