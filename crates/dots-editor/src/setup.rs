//! Setup form: rows/columns text inputs and a submit action.
//!
//! Submitting parses both fields, then locks and hides the form. A failed
//! submit leaves it editable; a locked form refuses further submits.

use dots_core::{Dimensions, GridError};
use winnow::ascii::dec_int;
use winnow::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    rows_text: String,
    columns_text: String,
    locked: bool,
    visible: bool,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupForm {
    pub fn new() -> Self {
        Self {
            rows_text: String::new(),
            columns_text: String::new(),
            locked: false,
            visible: true,
        }
    }

    pub fn rows_text(&self) -> &str {
        &self.rows_text
    }

    pub fn columns_text(&self) -> &str {
        &self.columns_text
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns false (and ignores the edit) once the form is locked.
    pub fn set_rows_text(&mut self, text: &str) -> bool {
        if self.locked {
            return false;
        }
        self.rows_text = text.to_string();
        true
    }

    /// Returns false (and ignores the edit) once the form is locked.
    pub fn set_columns_text(&mut self, text: &str) -> bool {
        if self.locked {
            return false;
        }
        self.columns_text = text.to_string();
        true
    }

    /// Parse both fields, then lock and hide the form.
    ///
    /// # Errors
    /// `GridError::InvalidInput` for non-numeric text,
    /// `GridError::InvalidDimensions` for values outside `1..=MAX_DIMENSION`,
    /// `GridError::FormLocked` if the form was already submitted.
    pub fn submit(&mut self) -> Result<Dimensions, GridError> {
        if self.locked {
            return Err(GridError::FormLocked);
        }
        let dims = self.parse().inspect_err(|e| {
            log::warn!("setup form rejected: {e}");
        })?;
        self.locked = true;
        self.visible = false;
        log::debug!("setup form submitted: {}×{}", dims.rows, dims.columns);
        Ok(dims)
    }

    fn parse(&self) -> Result<Dimensions, GridError> {
        let rows = parse_dimension("rows", &self.rows_text)?;
        let columns = parse_dimension("columns", &self.columns_text)?;
        Dimensions::new(rows, columns)
    }
}

/// Parse one dimension field: optional sign, decimal digits, surrounding
/// whitespace ignored.
///
/// # Errors
/// Returns `GridError::InvalidInput` if the text is not a whole number.
pub fn parse_dimension(field: &'static str, text: &str) -> Result<i64, GridError> {
    parse_count
        .parse(text.trim())
        .map_err(|_| GridError::InvalidInput {
            field,
            input: text.to_string(),
        })
}

fn parse_count(input: &mut &str) -> ModalResult<i64> {
    dec_int.parse_next(input)
}
