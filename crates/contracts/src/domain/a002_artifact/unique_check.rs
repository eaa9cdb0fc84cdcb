//! Advisory "is this number already used" check.
//!
//! The server enforces uniqueness; this only warns before submit.

use super::form::ArtifactDto;
use serde::{Deserialize, Serialize};

/// Answer of `GET /api/artifacts/check-unique/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueCheckResponse {
    #[serde(default)]
    pub exists: bool,
}

/// What the form shows under the number input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniqueHint {
    /// Not checked, check skipped, or check failed
    #[default]
    Unknown,
    Available,
    Taken,
}

impl UniqueHint {
    pub fn from_response(resp: &UniqueCheckResponse) -> Self {
        if resp.exists {
            UniqueHint::Taken
        } else {
            UniqueHint::Available
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            UniqueHint::Unknown => None,
            UniqueHint::Available => Some("Uygun."),
            UniqueHint::Taken => Some("Bu Anakod için bu Buluntu No zaten mevcut."),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UniqueHint::Taken)
    }

    /// Only a confirmed clash stops the submit
    pub fn blocks_submit(&self) -> bool {
        self.is_error()
    }
}

/// Hint plus the ticket of the newest check.
///
/// Changing main code or number starts a new check and clears the hint at
/// once, so a verdict about the previous pair can neither block nor approve
/// the current one. Only the answer carrying the newest ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniqueCheckState {
    latest: u64,
    hint: UniqueHint,
}

impl UniqueCheckState {
    pub fn hint(&self) -> UniqueHint {
        self.hint
    }

    /// Input changed and can be checked: returns the ticket of the new check
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.hint = UniqueHint::Unknown;
        self.latest
    }

    /// Input changed but there is nothing to check, or the form was reset
    pub fn clear(&mut self) {
        self.latest += 1;
        self.hint = UniqueHint::Unknown;
    }

    /// Applies an answer. Returns `false` when the ticket is stale and the
    /// answer was dropped. A failed check leaves no hint.
    pub fn finish(&mut self, ticket: u64, result: Result<UniqueCheckResponse, String>) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.hint = result
            .map(|resp| UniqueHint::from_response(&resp))
            .unwrap_or_default();
        true
    }
}

pub const UNIQUE_BLOCK_MESSAGE: &str =
    "Buluntu No benzersiz olmalıdır. Lütfen farklı bir numara deneyin.";

/// Query parameters for the check, `None` when there is nothing to check
pub fn unique_check_params(
    dto: &ArtifactDto,
    exclude_id: Option<i64>,
) -> Option<Vec<(&'static str, String)>> {
    let main_code = dto.main_code_id()?;
    let artifact_no = dto.artifact_number()?;
    let mut params = vec![
        ("main_code", main_code.to_string()),
        ("artifact_no", artifact_no.to_string()),
    ];
    if let Some(id) = exclude_id {
        params.push(("exclude_id", id.to_string()));
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_without_code_or_number() {
        let mut dto = ArtifactDto::default();
        assert_eq!(unique_check_params(&dto, None), None);
        dto.main_code = "3".into();
        assert_eq!(unique_check_params(&dto, None), None);
        dto.artifact_no = "0".into();
        assert_eq!(unique_check_params(&dto, None), None);
    }

    #[test]
    fn edit_mode_excludes_itself() {
        let dto = ArtifactDto {
            main_code: "3".into(),
            artifact_no: "0042".into(),
            ..ArtifactDto::default()
        };
        assert_eq!(
            unique_check_params(&dto, Some(17)),
            Some(vec![
                ("main_code", "3".to_string()),
                ("artifact_no", "42".to_string()),
                ("exclude_id", "17".to_string()),
            ])
        );
    }

    #[test]
    fn hints() {
        let taken = UniqueHint::from_response(&UniqueCheckResponse { exists: true });
        assert!(taken.blocks_submit());
        assert_eq!(taken.text(), Some("Bu Anakod için bu Buluntu No zaten mevcut."));
        let free = UniqueHint::from_response(&UniqueCheckResponse { exists: false });
        assert!(!free.blocks_submit());
        assert_eq!(free.text(), Some("Uygun."));
        assert!(!UniqueHint::Unknown.blocks_submit());
        assert_eq!(UniqueHint::Unknown.text(), None);
    }

    #[test]
    fn new_input_clears_previous_verdict() {
        let mut state = UniqueCheckState::default();
        let five = state.begin();
        assert!(state.finish(five, Ok(UniqueCheckResponse { exists: true })));
        assert!(state.hint().blocks_submit());

        // number changed to 6, submit before the debounced check answers
        let six = state.begin();
        assert_eq!(state.hint(), UniqueHint::Unknown);
        assert!(!state.hint().blocks_submit());

        assert!(state.finish(six, Ok(UniqueCheckResponse { exists: false })));
        assert_eq!(state.hint(), UniqueHint::Available);
    }

    #[test]
    fn stale_answer_is_dropped() {
        let mut state = UniqueCheckState::default();
        let old = state.begin();
        let new = state.begin();
        assert!(!state.finish(old, Ok(UniqueCheckResponse { exists: true })));
        assert_eq!(state.hint(), UniqueHint::Unknown);
        assert!(state.finish(new, Ok(UniqueCheckResponse { exists: false })));
        assert_eq!(state.hint(), UniqueHint::Available);
    }

    #[test]
    fn cleared_input_drops_in_flight_check() {
        let mut state = UniqueCheckState::default();
        let ticket = state.begin();
        state.clear();
        assert!(!state.finish(ticket, Ok(UniqueCheckResponse { exists: true })));
        assert_eq!(state.hint(), UniqueHint::Unknown);
    }

    #[test]
    fn failed_check_leaves_no_hint() {
        let mut state = UniqueCheckState::default();
        let ticket = state.begin();
        assert!(state.finish(ticket, Err("Sunucuya ulaşılamadı: timeout".into())));
        assert_eq!(state.hint(), UniqueHint::Unknown);
        assert!(!state.hint().blocks_submit());
    }
}
