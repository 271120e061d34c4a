//! UI rendering module for Envsafe CLI
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod help_overlay;
pub mod location_list;
pub mod profile_detail;
pub mod widgets;

pub use help_overlay::render as render_help_overlay;
pub use location_list::render as render_location_list;
pub use profile_detail::render as render_profile_detail;
