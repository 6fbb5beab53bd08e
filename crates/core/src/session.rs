use log::debug;

use crate::error::Miss;
use crate::formatter::TargetFormatter;
use crate::models::{FormatConfig, FormattedTarget, Resolution};
use crate::resolvers::TargetResolver;
use crate::traits::ProjectView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No input typed yet
    Idle,
    Valid,
    Invalid,
}

/// State behind a "go to" prompt.
///
/// The anchor offset is fixed when the session opens. Every input change
/// re-resolves from scratch and refreshes the display strings, so the host
/// only has to forward text and read back `is_valid` / `display`.
pub struct GotoSession<'a> {
    project: &'a dyn ProjectView,
    resolver: TargetResolver,
    formatter: TargetFormatter,
    anchor_offset: usize,
    input: String,
    outcome: Option<Result<Resolution, Miss>>,
    display: FormattedTarget,
}

impl<'a> GotoSession<'a> {
    pub fn open(project: &'a dyn ProjectView, anchor_offset: usize, config: FormatConfig) -> Self {
        debug!("Opening goto session at +{:06X}", anchor_offset);
        Self {
            project,
            resolver: TargetResolver::new(&config),
            formatter: TargetFormatter::new(config),
            anchor_offset,
            input: String::new(),
            outcome: None,
            display: FormattedTarget::default(),
        }
    }

    /// Feeds the current text of the input field. Returns the new validity.
    pub fn set_input(&mut self, text: &str) -> bool {
        self.input = text.to_string();
        let outcome = self.resolver.resolve_detailed(text, self.anchor_offset, self.project);
        self.display = self
            .formatter
            .format(outcome.ok().map(|r| r.offset), self.project);
        self.outcome = Some(outcome);
        self.is_valid()
    }

    pub fn state(&self) -> SessionState {
        match self.outcome {
            None => SessionState::Idle,
            Some(Ok(_)) => SessionState::Valid,
            Some(Err(_)) => SessionState::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state() == SessionState::Valid
    }

    pub fn anchor_offset(&self) -> usize {
        self.anchor_offset
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn target_offset(&self) -> Option<usize> {
        match self.outcome {
            Some(Ok(resolution)) => Some(resolution.offset),
            _ => None,
        }
    }

    pub fn resolution(&self) -> Option<&Result<Resolution, Miss>> {
        self.outcome.as_ref()
    }

    pub fn display(&self) -> &FormattedTarget {
        &self.display
    }

    /// The offset to jump to, if the current input is acceptable
    pub fn confirm(self) -> Option<usize> {
        self.target_offset()
    }
}
