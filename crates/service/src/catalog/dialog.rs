use models::{CatalogRecord, FieldErrors};
use thiserror::Error;

use crate::catalog::manager::ListManager;
use crate::errors::ServiceError;

#[derive(Debug, Error, PartialEq)]
pub enum DialogError {
    #[error("no record selected for editing")]
    NoSelection,
    #[error("validation error: {0}")]
    Validation(FieldErrors),
}

impl From<ServiceError> for DialogError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errors) => DialogError::Validation(errors),
            ServiceError::NotFound(_) => DialogError::NoSelection,
        }
    }
}

/// Add/edit dialog state for one record kind: two open flags and the
/// record selected for editing.
#[derive(Debug, Clone)]
pub struct DialogState<R: CatalogRecord> {
    add_open: bool,
    edit_open: bool,
    selected: Option<R>,
}

impl<R: CatalogRecord> Default for DialogState<R> {
    fn default() -> Self {
        Self { add_open: false, edit_open: false, selected: None }
    }
}

impl<R: CatalogRecord> DialogState<R> {
    pub fn new() -> Self { Self::default() }

    pub fn is_add_open(&self) -> bool { self.add_open }
    pub fn is_edit_open(&self) -> bool { self.edit_open }
    pub fn selection(&self) -> Option<&R> { self.selected.as_ref() }

    pub fn open_add(&mut self) {
        self.add_open = true;
    }

    pub fn cancel_add(&mut self) {
        self.add_open = false;
    }

    /// Select `record` and open the edit dialog; returns the form contents
    /// pre-filled from the record.
    pub fn open_edit(&mut self, record: R) -> R::Input {
        let form = record.to_input();
        self.selected = Some(record);
        self.edit_open = true;
        form
    }

    pub fn cancel_edit(&mut self) {
        self.edit_open = false;
        self.selected = None;
    }

    /// Submit the add form. On success the dialog closes and `form` is reset
    /// to empty fields; on failure both are left as they were.
    pub fn submit_add(&mut self, manager: &mut ListManager<R>, form: &mut R::Input) -> Result<R, DialogError> {
        let record = manager.add(form.clone())?;
        *form = R::Input::default();
        self.add_open = false;
        Ok(record)
    }

    /// Submit the edit form for the current selection.
    ///
    /// Validation failure keeps the dialog open with its selection. Any
    /// valid submit closes the dialog and clears the selection, including
    /// when the selected record has since been deleted.
    pub fn submit_edit(&mut self, manager: &mut ListManager<R>, input: R::Input) -> Result<Option<R>, DialogError> {
        let id = self.selected.as_ref().map(|r| r.id()).ok_or(DialogError::NoSelection)?;
        let updated = manager.update(id, input)?;
        self.edit_open = false;
        self.selected = None;
        Ok(updated)
    }
}
