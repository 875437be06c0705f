//! Client-side state and static content.
//!
//! DESIGN
//! ======
//! `appearance` is the only mutable state in the site; `content` holds the
//! immutable records the pages render.

pub mod appearance;
pub mod content;
