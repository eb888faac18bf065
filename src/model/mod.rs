//! Domain model types (pure).
//!
//! All types in this module are plain data: records, the store, screen
//! locations and the error taxonomy.

pub mod date;
pub mod error;
pub mod event;
pub mod key_action;
pub mod route;
pub mod store;

// Re-export for convenience
pub use date::{format_date, parse_iso_date};
pub use error::{AppError, InputError, LookupError, ParseError, RouteError};
pub use event::{EventId, EventRecord};
pub use key_action::KeyAction;
pub use route::Route;
pub use store::EventStore;
