//! Grid configuration: dimensions, spacing, and interaction constants.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

// ─── Dimensions ───────────────────────────────────────────────────────────

/// Largest accepted row or column count.
pub const MAX_DIMENSION: u32 = 1024;

/// Validated grid size. Both fields are in `1..=MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: u32,
    pub columns: u32,
}

impl Dimensions {
    /// Validate raw dimension input.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if either value is not in
    /// `1..=MAX_DIMENSION`.
    pub fn new(rows: i64, columns: i64) -> Result<Self, GridError> {
        let valid = 1..=MAX_DIMENSION;
        match (u32::try_from(rows), u32::try_from(columns)) {
            (Ok(r), Ok(c)) if valid.contains(&r) && valid.contains(&c) => Ok(Self {
                rows: r,
                columns: c,
            }),
            _ => Err(GridError::InvalidDimensions { rows, columns }),
        }
    }

    /// Total number of dots.
    pub fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Always false for validated dimensions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of undirected lattice edges for this size.
    pub fn lattice_edge_count(&self) -> usize {
        let (r, c) = (self.rows as usize, self.columns as usize);
        r.saturating_mul(c.saturating_sub(1))
            .saturating_add(c.saturating_mul(r.saturating_sub(1)))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 6,
        }
    }
}

// ─── Config ───────────────────────────────────────────────────────────────

/// Layout and interaction settings for a grid.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    /// World position of dot `(0, 0)`.
    pub origin: (f64, f64),
    /// Distance between consecutive rows (along world x).
    pub row_spacing: f64,
    /// Distance between consecutive columns (along world y).
    pub column_spacing: f64,
    /// A pointer strictly closer than this to a dot hits it.
    pub hit_radius: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        let dims = Dimensions::default();
        Self {
            rows: dims.rows,
            columns: dims.columns,
            origin: (-100.0, -100.0),
            row_spacing: 60.0,
            column_spacing: 60.0,
            hit_radius: 30.0,
        }
    }
}

impl GridConfig {
    /// Parse a JSON config, filling missing fields with defaults.
    ///
    /// # Errors
    /// Returns `GridError::Config` on malformed JSON and
    /// `GridError::InvalidDimensions` for rows or columns outside `1..=MAX_DIMENSION`.
    pub fn from_json(text: &str) -> Result<Self, GridError> {
        let config: GridConfig = serde_json::from_str(text)?;
        config.dimensions()?;
        Ok(config)
    }

    /// Return a copy with different dimensions.
    pub fn with_dimensions(&self, dims: Dimensions) -> Self {
        Self {
            rows: dims.rows,
            columns: dims.columns,
            ..self.clone()
        }
    }

    /// Validated dimensions of this config.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimensions` if rows or columns is outside `1..=MAX_DIMENSION`.
    pub fn dimensions(&self) -> Result<Dimensions, GridError> {
        Dimensions::new(self.rows.into(), self.columns.into())
    }
}
