//! Platform abstraction layer for OS-facing helpers.

mod desktop;
pub use desktop::*;
