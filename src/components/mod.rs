//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod entry;
pub mod help_dialog;
pub mod layout;
pub mod menu;
pub mod quit_dialog;
pub mod text;

pub use entry::EntryComponent;
pub use help_dialog::HelpDialog;
pub use layout::{centered_popup, draw_header, split_header};
pub use menu::MenuComponent;
pub use quit_dialog::QuitDialog;
