//! Eventboard
//!
//! Terminal browser for a community events listing: featured events, a
//! filterable and paginated listing, event details with similar events, and
//! simulated RSVP and contact forms.
//!
//! The crate follows a Pure Core / Impure Shell split: `model`, `parser` and
//! `state` are pure; `source`, `view` and `logging` do the I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
