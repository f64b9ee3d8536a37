//! The lookup form: an identifier, one request at a time, and whichever of
//! the idle, error or result states the last lookup ended in.

use tracing::{debug, warn};

use crate::{error::LookupError, model::LookupResult, source::RecordSource};

/// Which panel the form currently shows. At most one of error and result is
/// ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Error,
    Result,
}

/// Ticket for an in-flight lookup, returned by [`LookupForm::begin_lookup`].
///
/// Only the most recently issued ticket may change what the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    generation: u64,
    identifier: String,
}

impl PendingLookup {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct LookupForm {
    identifier: String,
    error_message: String,
    result: Option<LookupResult>,
    is_loading: bool,
    generation: u64,
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Empty when there is nothing to report.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn display_state(&self) -> DisplayState {
        if !self.error_message.is_empty() {
            DisplayState::Error
        } else if self.result.is_some() {
            DisplayState::Result
        } else {
            DisplayState::Idle
        }
    }

    /// Start a lookup for the current identifier.
    ///
    /// Always clears the previous error and result. Returns `None` when the
    /// identifier is blank; in that case the validation message is set,
    /// nothing is loading and any lookup still in flight is superseded.
    pub fn begin_lookup(&mut self) -> Option<PendingLookup> {
        self.error_message.clear();
        self.result = None;
        self.generation += 1;

        if self.identifier.trim().is_empty() {
            self.is_loading = false;
            self.error_message = LookupError::MissingIdentifier.to_string();
            return None;
        }

        self.is_loading = true;
        debug!(generation = self.generation, identifier = %self.identifier, "lookup started");

        Some(PendingLookup {
            generation: self.generation,
            identifier: self.identifier.clone(),
        })
    }

    /// Apply the outcome of a lookup. Returns `false` and changes nothing if
    /// a newer lookup has been started since `pending` was issued.
    pub fn settle(
        &mut self,
        pending: PendingLookup,
        outcome: Result<LookupResult, LookupError>,
    ) -> bool {
        if pending.generation != self.generation {
            warn!(
                stale = pending.generation,
                current = self.generation,
                "ignoring outcome of superseded lookup"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.error_message.clear();
                self.result = Some(result);
            }
            Err(err) => {
                debug!(error = ?err, "lookup failed");
                self.result = None;
                self.error_message = err.to_string();
            }
        }

        self.is_loading = false;
        true
    }

    /// Validate, fetch once from `source`, and settle.
    pub async fn submit<S>(&mut self, source: &S) -> DisplayState
    where
        S: RecordSource + ?Sized,
    {
        if let Some(pending) = self.begin_lookup() {
            let outcome = source.fetch(pending.identifier()).await;
            self.settle(pending, outcome);
        }

        self.display_state()
    }
}
