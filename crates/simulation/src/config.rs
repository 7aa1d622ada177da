//! Session configuration.

use crate::engine::Traversal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },
    #[error("ticks per frame must be at least 1")]
    NoTicksPerFrame,
}

/// Shape of the play area and how fast it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxConfig {
    pub rows: usize,
    pub columns: usize,
    /// Engine ticks run per displayed frame.
    pub ticks_per_frame: u32,
    pub traversal: Traversal,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            columns: 100,
            ticks_per_frame: 1,
            traversal: Traversal::TopDown,
        }
    }
}

impl SandboxConfig {
    #[must_use]
    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_ticks_per_frame(mut self, ticks_per_frame: u32) -> Self {
        self.ticks_per_frame = ticks_per_frame;
        self
    }

    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// # Errors
    ///
    /// Fails on a zero-sized grid or zero ticks per frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.ticks_per_frame == 0 {
            return Err(ConfigError::NoTicksPerFrame);
        }
        Ok(())
    }
}
