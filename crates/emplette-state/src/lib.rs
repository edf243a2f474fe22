//! # emplette-state
//!
//! The in-memory view/session state for the emplette application and the
//! pure reducer that transitions it.
//!
//! The container never performs I/O.  The UI flow calls the store directly
//! and reflects outcomes back here by dispatching events; store failures
//! arrive as [`Event::SetError`] text.  Keeping [`reduce`] pure and total
//! lets every dispatch be replayed and tested without a live database.

pub mod container;
pub mod events;
pub mod queries;

pub use container::{reduce, AppState, Container};
pub use events::{Event, ListChanges, ListDraft};
