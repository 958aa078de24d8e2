//! Report screen mode state machine.
//!
//! Governs which lifecycle calls the report screen may issue. The guard
//! against overlapping generations is advisory: it stops one screen from
//! issuing a second request, not two screens from racing each other.

use serde::Serialize;

use crate::domain::foundation::{ReportId, StateMachine, ValidationError};
use crate::domain::report::ReportError;

/// Mode of the report screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Idle,
    Generating,
    Displaying,
    Browsing,
}

impl StateMachine for ViewMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewMode::*;
        matches!(
            (self, target),
            (Idle, Generating)
                | (Generating, Displaying)
                | (Generating, Idle)
                | (Displaying, Idle)
                | (Browsing, Displaying)
                | (Browsing, Idle)
                | (_, Browsing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewMode::*;
        match self {
            Idle => vec![Generating, Browsing],
            Generating => vec![Displaying, Idle, Browsing],
            Displaying => vec![Idle, Browsing],
            Browsing => vec![Displaying, Idle, Browsing],
        }
    }
}

/// Screen state: the mode plus the report on display, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportViewState {
    mode: ViewMode,
    current_report: Option<ReportId>,
}

impl Default for ReportViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Idle,
            current_report: None,
        }
    }
}

impl ReportViewState {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn current_report(&self) -> Option<&ReportId> {
        self.current_report.as_ref()
    }

    /// Whether the generate trigger should be enabled.
    pub fn can_request_generation(&self) -> bool {
        self.mode.can_transition_to(&ViewMode::Generating)
    }

    /// Idle → Generating. Rejected while a generation is already running.
    pub fn request_generation(&mut self) -> Result<(), ValidationError> {
        self.mode = self.mode.transition_to(ViewMode::Generating)?;
        self.current_report = None;
        Ok(())
    }

    /// Generating → Displaying.
    pub fn generation_succeeded(&mut self, report_id: ReportId) -> Result<(), ValidationError> {
        self.mode = self.mode.transition_to(ViewMode::Displaying)?;
        self.current_report = Some(report_id);
        Ok(())
    }

    /// Generating → Idle, or Generating → Browsing when the error asks the
    /// user to free capacity first.
    pub fn generation_failed(&mut self, error: &ReportError) -> Result<(), ValidationError> {
        let target = if error.redirects_to_list() {
            ViewMode::Browsing
        } else {
            ViewMode::Idle
        };
        if self.mode != ViewMode::Generating {
            return Err(ValidationError::invalid_format(
                "state_transition",
                format!("No generation in progress (mode {:?})", self.mode),
            ));
        }
        self.mode = self.mode.transition_to(target)?;
        self.current_report = None;
        Ok(())
    }

    /// Displaying or Browsing → Idle ("generate new").
    pub fn start_new(&mut self) -> Result<(), ValidationError> {
        self.mode = self.mode.transition_to(ViewMode::Idle)?;
        self.current_report = None;
        Ok(())
    }

    /// Any mode → Browsing.
    pub fn switch_to_list(&mut self) {
        self.mode = ViewMode::Browsing;
        self.current_report = None;
    }

    /// Browsing → Displaying.
    pub fn select_report(&mut self, report_id: ReportId) -> Result<(), ValidationError> {
        if self.mode != ViewMode::Browsing {
            return Err(ValidationError::invalid_format(
                "state_transition",
                format!("Reports can only be selected from the list (mode {:?})", self.mode),
            ));
        }
        self.mode = ViewMode::Displaying;
        self.current_report = Some(report_id);
        Ok(())
    }
}
