//! Utility functions and helpers shared by both aggregators.
//!
//! This module provides the static catalog configuration (generation table), display
//! formatting for names and image URLs, the closed localization tables (stat names, type
//! colors, sprite slots), cache freshness calculations, and the cooperative cancellation flag
//! observed by the bulk loader.

pub mod cancel;
pub mod format;
pub mod generation;
pub mod localize;
pub mod time;
