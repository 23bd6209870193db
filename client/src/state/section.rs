//! Per-page UI state for a record section.
//!
//! DESIGN
//! ======
//! Each section page keeps one `SectionState<T>` in an `RwSignal`. It pairs
//! the record [`Registry`] with the transient presentation toggles: whether
//! the form is hidden, creating or editing, the current search term, the
//! form draft, a busy flag while the simulated submit delay runs, and the
//! banner above the list.
//!
//! Submits are split into `begin_submit` (validation, sets `busy`) and
//! `finish_submit` (mutates the registry) so pages can await a timer in
//! between. `begin_submit` snapshots the validated mode and draft as a
//! pending ticket and `finish_submit` commits only that snapshot. Any form
//! transition in between (cancel, open create, open edit) drops the ticket,
//! so a failed validation never reaches the registry.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use super::form::FormError;
use super::registry::{Record, RecordId, Registry, RegistryError};

/// Which form, if any, is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Hidden,
    Creating,
    Editing(RecordId),
}

/// Inline message above the section content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Success(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionState<T: Record> {
    pub registry: Registry<T>,
    pub search: String,
    pub mode: FormMode,
    pub draft: T::Draft,
    pub busy: bool,
    pub banner: Option<Banner>,
    pending: Option<(FormMode, T::Draft)>,
}

impl<T: Record> SectionState<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            registry: Registry::new(seed),
            search: String::new(),
            mode: FormMode::Hidden,
            draft: T::Draft::default(),
            busy: false,
            banner: None,
            pending: None,
        }
    }

    pub fn form_open(&self) -> bool {
        self.mode != FormMode::Hidden
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Records matching the current search term.
    pub fn visible(&self) -> Vec<T> {
        self.registry.list(&self.search).into_iter().cloned().collect()
    }

    pub fn open_create(&mut self) {
        self.drop_pending();
        self.mode = FormMode::Creating;
        self.draft = T::Draft::default();
        self.banner = None;
    }

    /// Load record `id` into the form. Returns `false` if it no longer exists.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let Some(record) = self.registry.get(id) else {
            return false;
        };
        let draft = record.to_draft();
        self.drop_pending();
        self.draft = draft;
        self.mode = FormMode::Editing(id);
        self.banner = None;
        true
    }

    pub fn cancel(&mut self) {
        self.drop_pending();
        self.mode = FormMode::Hidden;
        self.draft = T::Draft::default();
    }

    /// Whether a validated submit is waiting for `finish_submit`.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn drop_pending(&mut self) {
        self.pending = None;
        self.busy = false;
    }

    /// Validate the draft and mark the section busy.
    ///
    /// # Errors
    ///
    /// Returns the validation error, which is also placed in the banner.
    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        self.banner = None;
        if let Err(err) = T::validate(&self.draft) {
            self.banner = Some(Banner::Error(err.to_string()));
            return Err(err);
        }
        self.pending = Some((self.mode, self.draft.clone()));
        self.busy = true;
        Ok(())
    }

    /// Commit the snapshot taken by `begin_submit` and close the form.
    ///
    /// Returns `Ok(None)` when there is nothing to commit: no submit was
    /// started, or the form was cancelled or reopened while it was pending.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::SaveFailed`] if the snapshot was taken with the
    /// form hidden or the edited record disappeared in the meantime.
    pub fn finish_submit(&mut self, now_millis: i64) -> Result<Option<T>, FormError> {
        let Some((mode, draft)) = self.pending.take() else {
            return Ok(None);
        };
        self.busy = false;
        self.commit(mode, draft, now_millis).map(Some)
    }

    /// Validate and apply in one step (sections without a simulated delay).
    ///
    /// # Errors
    ///
    /// See [`SectionState::begin_submit`] and [`SectionState::finish_submit`].
    pub fn submit(&mut self, now_millis: i64) -> Result<T, FormError> {
        self.begin_submit()?;
        let (mode, draft) = (self.mode, self.draft.clone());
        self.drop_pending();
        self.commit(mode, draft, now_millis)
    }

    fn commit(&mut self, mode: FormMode, draft: T::Draft, now_millis: i64) -> Result<T, FormError> {
        let outcome = match mode {
            FormMode::Creating => Ok((self.registry.create(draft, now_millis), T::MESSAGES.created)),
            FormMode::Editing(id) => self.registry.update(id, draft).map(|r| (r, T::MESSAGES.updated)),
            FormMode::Hidden => Err(RegistryError::NotFound(0)),
        };
        match outcome {
            Ok((record, message)) => {
                self.banner = Some(Banner::Success(message.to_owned()));
                self.mode = FormMode::Hidden;
                self.draft = T::Draft::default();
                Ok(record)
            }
            Err(_) => {
                let err = FormError::SaveFailed(T::MESSAGES.save_failed);
                self.banner = Some(Banner::Error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Remove record `id`. Confirmation happens in the page before this call.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the record is already gone.
    pub fn delete(&mut self, id: RecordId) -> Result<T, RegistryError> {
        let removed = self.registry.delete(id)?;
        if self.mode == FormMode::Editing(id) {
            self.cancel();
        }
        self.banner = Some(Banner::Success(T::MESSAGES.deleted.to_owned()));
        Ok(removed)
    }
}
