//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared page chrome (header, footer, backgrounds) and
//! the appearance toggle. Stateful pieces take their state through props.

pub mod animated_text;
pub mod cursor_glow;
pub mod grid_background;
pub mod site_footer;
pub mod site_header;
pub mod theme_toggle;
