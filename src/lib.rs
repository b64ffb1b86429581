//! Building-load optimization dashboard: bounded per-building inputs,
//! a randomized reduction transform, and derived impact metrics.

pub mod config;
pub mod io;
/// Load transform, impact metrics, and session reporting.
pub mod opt;

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "tui")]
pub mod tui;
