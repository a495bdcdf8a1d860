//! The map request form: editable draft plus its controller

pub mod view;

use tokio::sync::watch;

use crate::backend::MapStyle;
use crate::controller::{RequestState, Submission, SubmissionController};
use crate::error::Result;

pub use view::ViewModel;

/// User-editable, not-yet-submitted form values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub prompt: String,
    pub style: MapStyle,
}

impl Draft {
    pub fn new(prompt: impl Into<String>, style: MapStyle) -> Self {
        Self {
            prompt: prompt.into(),
            style,
        }
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

/// A single-page form bound to one [`SubmissionController`].
///
/// The draft is edited freely and independently of the request state; only
/// `submit` hands a snapshot of it to the controller.
pub struct MapForm {
    draft: Draft,
    controller: SubmissionController,
}

impl MapForm {
    pub fn new(controller: SubmissionController) -> Self {
        Self {
            draft: Draft::default(),
            controller,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.draft.prompt = prompt.into();
    }

    pub fn set_style(&mut self, style: MapStyle) {
        self.draft.style = style;
    }

    pub fn state(&self) -> RequestState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.controller.subscribe()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.view().submit_enabled
    }

    /// Submit the current draft
    pub fn submit(&self) -> Result<Submission> {
        self.controller.submit(&self.draft)
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::project(&self.controller.state(), &self.draft)
    }
}
