// File: crates/calwall-core/src/types.rs
// Summary: Shared types and constants (default canvas size, paddings).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1080;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 2400;
/// Default number of dot columns.
pub const COLUMNS: u32 = 15;

/// Upper bound on dots in any period (a leap year).
pub const MAX_UNITS: u32 = 366;

/// Canvas paddings, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i64 { self.left as i64 + self.right as i64 }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i64 { self.top as i64 + self.bottom as i64 }
}
