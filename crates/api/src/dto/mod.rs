//! Transfer objects exchanged at the HTTP boundary.
//!
//! These are flat, owned snapshots independent of the table layout. Field
//! names are camelCase on the wire, dates are `YYYY-MM-DD` and prices are
//! JSON numbers.

pub mod game;
pub mod genre;
