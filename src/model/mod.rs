//! Model layer - state types independent of rendering
//!
//! - `DishEntry` / `DishForm` - the domain record and the form producing it
//! - `EntryState` - data owned by the entry screen
//! - `Navigator` - route stack with per-route parameters
//! - `ModalStack` - modal overlay management

pub mod dish;
pub mod entry;
pub mod modal;
pub mod navigation;

// Re-export commonly used types
pub use dish::{DishEntry, FormField};
pub use entry::EntryState;
pub use modal::{Modal, ModalStack};
pub use navigation::{MenuParams, Navigator, Route};
