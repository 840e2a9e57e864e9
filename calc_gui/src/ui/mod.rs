//! UI module for Petal GUI
//!
//! # Panel Structure
//! - `toolbar` - Title and light/dark toggle
//! - `display` - The calculator display
//! - `keypad` - The 4-column button grid
//! - `status_bar` - Pending operation and status messages
//!
//! # Shared
//! - `palette` - Key and display colors for light and dark mode

pub mod display;
pub mod keypad;
pub mod palette;
pub mod status_bar;
pub mod toolbar;
