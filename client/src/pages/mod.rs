//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page lays out its content regions and delegates shared chrome
//! (header, footer, toggle) to `components`. Row builders are pure so list
//! order and count can be checked without rendering.

pub mod blog;
pub mod home;
