//! Grid layout for the video wall
//!
//! The wall is always square: the automatic dimension is the smallest `n`
//! with `n * n >= count`. The user-selected size applies to an empty wall
//! and whenever the user picks a size by hand.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column/row counts applied to the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
}

impl GridLayout {
    pub fn square(n: u32) -> Self {
        let n = n.max(1);
        Self {
            columns: n,
            rows: n,
        }
    }
}

impl std::fmt::Display for GridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Smallest square dimension holding `count` slots (minimum 1).
pub fn auto_dimension(count: usize) -> u32 {
    if count <= 1 {
        return 1;
    }
    let mut n = (count as f64).sqrt().ceil() as u32;
    // sqrt().ceil() can land one off around perfect squares.
    while (n as usize).pow(2) < count {
        n += 1;
    }
    while n > 1 && ((n - 1) as usize).pow(2) >= count {
        n -= 1;
    }
    n
}

/// The user-facing grid size selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSizeSelector {
    options: Vec<u32>,
    selected: u32,
}

impl GridSizeSelector {
    pub fn new(options: Vec<u32>, selected: u32) -> Result<Self> {
        if options.is_empty() || options.iter().any(|&n| n == 0) {
            return Err(Error::InvalidConfig(
                "grid size options must be non-empty and positive".to_string(),
            ));
        }
        let mut selector = Self {
            selected: options[0],
            options,
        };
        selector.select(selected)?;
        Ok(selector)
    }

    pub fn options(&self) -> &[u32] {
        &self.options
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    /// Explicit user selection; the size must be one of the options.
    pub fn select(&mut self, size: u32) -> Result<()> {
        if !self.options.contains(&size) {
            return Err(Error::UnavailableGridSize(size));
        }
        self.selected = size;
        Ok(())
    }

    /// Mirror an automatic dimension back into the selector when it is an
    /// available option; other dimensions leave the selection alone.
    pub fn snap_to(&mut self, size: u32) {
        if self.options.contains(&size) {
            self.selected = size;
        }
    }

    /// Layout for a slot count: an empty wall shows the selected size, an
    /// occupied wall the auto square.
    pub fn layout_for(&self, count: usize) -> GridLayout {
        if count == 0 {
            GridLayout::square(self.selected)
        } else {
            GridLayout::square(auto_dimension(count))
        }
    }
}
