//! Calendar-day handling.
//!
//! Every date that enters the system is normalized once, at the boundary, into a
//! [`DateKey`]. All calendar arithmetic uses UTC; time-of-day never survives
//! normalization.

mod clock;
mod date_input;
mod date_key;

#[cfg(test)]
mod date_key_test;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_input::{normalize, normalize_or_err, DateInput};
pub use date_key::DateKey;
