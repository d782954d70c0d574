// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Modal lifecycle: `Closed → Open → Submitting → Closed | Failed`.
//!
//! `Failed` is the modal still open with an error shown; submitting again
//! from there is allowed.

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
    Failed(String),
}

/// A modal plus the form or subject it was opened for.
#[derive(Debug, Clone)]
pub struct Modal<T> {
    phase: ModalPhase,
    data: Option<T>,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Closed,
            data: None,
        }
    }
}

impl<T: Clone> Modal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with fresh data, discarding any previous form and error.
    pub fn open(&mut self, data: T) {
        self.phase = ModalPhase::Open;
        self.data = Some(data);
    }

    pub fn close(&mut self) {
        self.phase = ModalPhase::Closed;
        self.data = None;
    }

    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable access to the form while it is editable.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self.phase {
            ModalPhase::Open | ModalPhase::Failed(_) => self.data.as_mut(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ModalPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enter `Submitting` and hand back a copy of the form.
    ///
    /// `None` when the modal is closed or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<T> {
        match self.phase {
            ModalPhase::Open | ModalPhase::Failed(_) => {
                let data = self.data.clone()?;
                self.phase = ModalPhase::Submitting;
                Some(data)
            }
            _ => None,
        }
    }

    /// Stay open and show `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.phase != ModalPhase::Closed {
            self.phase = ModalPhase::Failed(message.into());
        }
    }

    /// Close on success; on error stay open with the user-facing message.
    pub fn finish<R>(&mut self, result: &Result<R, AppError>, fallback: &str) {
        match result {
            Ok(_) => self.close(),
            Err(err) => self.fail(err.user_message(fallback)),
        }
    }
}
