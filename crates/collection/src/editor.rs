//! Staging of row edits on the displayed collection.
//!
//! Edits work on a copy of the row, so the table keeps showing the original
//! until the draft is saved. Nothing here is persisted: the next reload
//! rebuilds the collection from the sources.

use thiserror::Error;

use data_loader::Movie;

/// Errors from editing operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("No row is being edited")]
    NoDraft,

    #[error("Row {index} does not exist (collection has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("The draft is a new row and has nothing to delete")]
    NotAnExistingRow,
}

/// Which row a draft will be written back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    New,
    Row(usize),
}

#[derive(Debug, Clone)]
struct Draft {
    target: DraftTarget,
    movie: Movie,
}

/// Holds at most one draft at a time.
#[derive(Debug, Default)]
pub struct RowEditor {
    draft: Option<Draft>,
}

impl RowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft for a new, empty row.
    pub fn begin_add(&mut self) {
        self.draft = Some(Draft {
            target: DraftTarget::New,
            movie: Movie::default(),
        });
    }

    /// Start a draft holding a copy of `rows[index]`.
    pub fn begin_edit(&mut self, rows: &[Movie], index: usize) -> Result<(), EditError> {
        let movie = rows.get(index).ok_or(EditError::RowOutOfRange {
            index,
            len: rows.len(),
        })?;
        self.draft = Some(Draft {
            target: DraftTarget::Row(index),
            movie: movie.clone(),
        });
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn target(&self) -> Option<DraftTarget> {
        self.draft.as_ref().map(|draft| draft.target)
    }

    pub fn draft(&self) -> Option<&Movie> {
        self.draft.as_ref().map(|draft| &draft.movie)
    }

    pub fn draft_mut(&mut self) -> Option<&mut Movie> {
        self.draft.as_mut().map(|draft| &mut draft.movie)
    }

    /// Write the draft back: push a new row or replace the edited one.
    ///
    /// The draft is closed on success and kept on error.
    pub fn save(&mut self, rows: &mut Vec<Movie>) -> Result<DraftTarget, EditError> {
        let draft = self.draft.as_ref().ok_or(EditError::NoDraft)?;
        match draft.target {
            DraftTarget::New => rows.push(draft.movie.clone()),
            DraftTarget::Row(index) => {
                let len = rows.len();
                let row = rows
                    .get_mut(index)
                    .ok_or(EditError::RowOutOfRange { index, len })?;
                *row = draft.movie.clone();
            }
        }
        let target = draft.target;
        self.draft = None;
        Ok(target)
    }

    /// Remove the row being edited and close the draft.
    pub fn delete(&mut self, rows: &mut Vec<Movie>) -> Result<Movie, EditError> {
        let draft = self.draft.as_ref().ok_or(EditError::NoDraft)?;
        let DraftTarget::Row(index) = draft.target else {
            return Err(EditError::NotAnExistingRow);
        };
        if index >= rows.len() {
            return Err(EditError::RowOutOfRange {
                index,
                len: rows.len(),
            });
        }
        self.draft = None;
        Ok(rows.remove(index))
    }

    /// Drop the draft without writing anything.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}
