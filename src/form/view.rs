//! Pure projection of the request state into what the page shows

use crate::controller::RequestState;
use crate::form::Draft;

pub const TITLE: &str = "AI Map Generator";
pub const PROMPT_LABEL: &str = "Describe the map you want to generate";
pub const STYLE_LABEL: &str = "Map Style";
pub const SUBMIT_LABEL: &str = "Generate Map";
pub const BUSY_LABEL: &str = "Generating...";

/// Everything the page renders, derived from state and draft alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub submit_enabled: bool,
    pub busy: bool,
    pub button_label: &'static str,
    pub error: Option<String>,
    pub image_url: Option<String>,
}

impl ViewModel {
    pub fn project(state: &RequestState, draft: &Draft) -> Self {
        let busy = state.is_submitting();
        Self {
            submit_enabled: !busy && draft.has_prompt(),
            busy,
            button_label: if busy { BUSY_LABEL } else { SUBMIT_LABEL },
            error: state.error_message().map(str::to_string),
            image_url: state.result_url().map(str::to_string),
        }
    }

    /// Plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        if self.busy {
            return BUSY_LABEL.to_string();
        }
        match (&self.image_url, &self.error) {
            (Some(url), _) => format!("Generated map: {}", url),
            (None, Some(error)) => format!("Error: {}", error),
            (None, None) => String::new(),
        }
    }
}
