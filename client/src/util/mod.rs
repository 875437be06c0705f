//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and animation timing
//! from page and component logic to improve reuse and testability.

pub mod motion;
pub mod preference;
