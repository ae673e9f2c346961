//! Enumeration configuration and its validation.

use std::fmt;

use crate::grid::Grid;

/// Run configuration: grid size `S`, interior-removal depth `D`, vertex count `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumerationCfg {
    pub size: usize,
    pub depth: usize,
    pub vertices: usize,
}

impl EnumerationCfg {
    pub const DEFAULT_SIZE: usize = 3;
    pub const DEFAULT_DEPTH: usize = 1;
    pub const DEFAULT_VERTICES: usize = 3;

    #[inline]
    pub fn new(size: usize, depth: usize, vertices: usize) -> Self {
        Self {
            size,
            depth,
            vertices,
        }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        Grid::new(self.size, self.depth)
    }

    /// Check `S > 0`, `D < S`, `k ≥ 3`, and `k ≤` admissible point count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.depth >= self.size {
            return Err(ConfigError::DepthTooLarge {
                depth: self.depth,
                size: self.size,
            });
        }
        if self.vertices < 3 {
            return Err(ConfigError::TooFewVertices {
                vertices: self.vertices,
            });
        }
        let available = self.grid().points().len();
        if self.vertices > available {
            return Err(ConfigError::NotEnoughPoints {
                vertices: self.vertices,
                available,
            });
        }
        Ok(())
    }
}

impl Default for EnumerationCfg {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_DEPTH,
            Self::DEFAULT_VERTICES,
        )
    }
}

/// Reasons a configuration cannot produce any polygon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyGrid,
    DepthTooLarge { depth: usize, size: usize },
    TooFewVertices { vertices: usize },
    NotEnoughPoints { vertices: usize, available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "grid size must be positive"),
            ConfigError::DepthTooLarge { depth, size } => write!(
                f,
                "interior removal depth {depth} must be smaller than grid size {size}"
            ),
            ConfigError::TooFewVertices { vertices } => {
                write!(f, "a polygon needs at least 3 vertices, got {vertices}")
            }
            ConfigError::NotEnoughPoints {
                vertices,
                available,
            } => write!(
                f,
                "{vertices} vertices requested but the grid has only {available} admissible points"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
