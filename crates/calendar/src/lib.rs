//! # typhon-calendar
//!
//! Pure date arithmetic for the canonical monthly time axis.
//!
//! Every series assembled by the typhon pipeline is aligned to the same
//! sequence of month-start timestamps. This crate provides the timestamp
//! type ([`MonthStamp`]) and the sequence builder ([`monthly_sequence`]);
//! it performs no I/O.
//!
//! ## Quick Start
//!
//! ```ignore
//! use typhon_calendar::{MonthStamp, monthly_sequence};
//!
//! let axis = monthly_sequence(1990, 1999).unwrap();
//! assert_eq!(axis.len(), 120);
//! assert_eq!(axis[0], MonthStamp::new(1990, 1).unwrap());
//! ```

mod error;
mod sequence;
mod stamp;

pub use error::CalendarError;
pub use sequence::monthly_sequence;
pub use stamp::MonthStamp;
