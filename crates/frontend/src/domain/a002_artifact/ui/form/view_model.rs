use crate::domain::a001_main_code::api as main_code_api;
use crate::domain::a002_artifact::api;
use crate::shared::debounce::Debouncer;
use crate::shared::notice::Notice;
use contracts::domain::a001_main_code::aggregate::MainCode;
use contracts::domain::a002_artifact::aggregate::Artifact;
use contracts::domain::a002_artifact::form::{saved_message, ArtifactDto};
use contracts::domain::a002_artifact::unique_check::{
    unique_check_params, UniqueCheckState, UniqueHint, UNIQUE_BLOCK_MESSAGE,
};
use contracts::enums::FormType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

/// Quiet period before the advisory uniqueness check runs
pub const UNIQUE_CHECK_DELAY_MS: u32 = 250;

/// Create/edit form of one artifact.
///
/// `editing_id` is `Some` in edit mode: saves go out as PATCH and the
/// uniqueness check excludes the record itself.
#[derive(Clone, Copy)]
pub struct ArtifactFormViewModel {
    pub form: RwSignal<ArtifactDto>,
    pub editing_id: Option<i64>,
    pub main_codes: RwSignal<Vec<MainCode>>,
    pub notice: RwSignal<Notice>,
    pub unique: RwSignal<UniqueCheckState>,
    pub saving: RwSignal<bool>,
    debouncer: Debouncer,
}

impl ArtifactFormViewModel {
    pub fn new(existing: Option<&Artifact>) -> Self {
        Self {
            form: RwSignal::new(existing.map(ArtifactDto::from_artifact).unwrap_or_default()),
            editing_id: existing.map(|a| a.id),
            main_codes: RwSignal::new(Vec::new()),
            notice: RwSignal::new(Notice::None),
            unique: RwSignal::new(UniqueCheckState::default()),
            saving: RwSignal::new(false),
            debouncer: Debouncer::new(UNIQUE_CHECK_DELAY_MS),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Options of the main code picker
    pub fn load_main_codes(&self) {
        let this = *self;
        spawn_local(async move {
            match main_code_api::fetch_main_code_options().await {
                Ok(rows) => this.main_codes.set(rows),
                Err(e) => this.notice.set(Notice::Error(e)),
            }
        });
    }

    pub fn main_code_options(&self) -> Vec<(String, String)> {
        self.main_codes.with(|rows| {
            rows.iter()
                .map(|m| (m.id.to_string(), m.picker_label()))
                .collect()
        })
    }

    /// `AAB0012` once both main code and number are known
    pub fn full_no_preview(&self) -> Option<String> {
        self.main_codes
            .with(|codes| self.form.with(|f| f.full_no_preview(codes)))
    }

    pub fn set_main_code(&self, value: String) {
        self.form.update(|f| f.main_code = value);
        self.schedule_unique_check();
    }

    pub fn set_artifact_no(&self, value: String) {
        self.form.update(|f| f.artifact_no = value);
        self.schedule_unique_check();
    }

    pub fn set_form_type(&self, code: &str) {
        if let Some(form_type) = FormType::from_code(code) {
            self.form.update(|f| f.set_form_type(form_type));
        }
    }

    pub fn set_detail(&self, key: &str, value: Value) {
        self.form.update(|f| f.set_detail(key, value));
    }

    pub fn set_measurement(&self, key: &str, value: Value) {
        self.form.update(|f| f.set_measurement(key, value));
    }

    pub fn unique_hint(&self) -> UniqueHint {
        self.unique.with(|u| u.hint())
    }

    /// Debounced advisory check of the main code / number pair.
    ///
    /// The hint clears as soon as the pair changes; only the answer for the
    /// newest pair may set it again.
    fn schedule_unique_check(&self) {
        let params = self
            .form
            .with_untracked(|f| unique_check_params(f, self.editing_id));
        let Some(params) = params else {
            self.debouncer.cancel();
            self.unique.update(|u| u.clear());
            return;
        };
        let Some(ticket) = self.unique.try_update(|u| u.begin()) else {
            return;
        };

        let this = *self;
        self.debouncer.schedule(move || {
            spawn_local(async move {
                let result = api::check_unique(&params).await;
                let applied = this
                    .unique
                    .try_update(|u| u.finish(ticket, result))
                    .unwrap_or(false);
                if !applied {
                    log::debug!("dropped stale uniqueness answer #{}", ticket);
                }
            });
        });
    }

    /// Validates, then creates or updates. A confirmed number clash from
    /// the advisory check refuses the submit.
    pub fn submit(&self, on_saved: Option<Callback<Artifact>>) {
        if self.saving.get_untracked() {
            return;
        }
        let payload = match self.form.with_untracked(|f| f.to_payload()) {
            Ok(payload) => payload,
            Err(msg) => {
                self.notice.set(Notice::Error(msg));
                return;
            }
        };
        if self.unique.with_untracked(|u| u.hint().blocks_submit()) {
            self.notice.set(Notice::Error(UNIQUE_BLOCK_MESSAGE.to_string()));
            return;
        }

        let this = *self;
        this.notice.set(Notice::None);
        this.saving.set(true);
        spawn_local(async move {
            let result = match this.editing_id {
                Some(id) => api::update_artifact(id, &payload).await,
                None => api::create_artifact(&payload).await,
            };
            this.saving.set(false);

            let saved = match result {
                Ok(saved) => saved,
                Err(e) => {
                    this.notice.set(Notice::Error(e));
                    return;
                }
            };
            this.notice.set(Notice::Success(saved_message(&saved, this.is_edit_mode())));
            if this.is_edit_mode() {
                this.form.set(ArtifactDto::from_artifact(&saved));
            } else {
                this.form.update(|f| f.reset_keeping_main_code());
                this.debouncer.cancel();
                this.unique.update(|u| u.clear());
            }
            if let Some(cb) = on_saved {
                cb.run(saved);
            }
        });
    }
}
