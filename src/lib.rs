//! Allocation-free NMEA-0183 decoding for small targets.
//!
//! [`NmeaParser`] takes one byte at a time (straight from a UART receive
//! interrupt, say) and decodes `$GPGGA` fix sentences into a [`GpsPosition`].
//! The [`format`] functions go the other way, writing decimal degrees as the
//! fixed-width `DDMM.MMMM` text GPS formats use.
//!
//! A parser is not reentrant. Callers feeding it from more than one context
//! must serialize access themselves.
#![cfg_attr(not(test), no_std)]

pub mod buffer;
mod detail;
pub mod error;
pub mod format;
pub mod parser;
pub mod position;

pub use buffer::{FieldBuffer, FIELD_CAPACITY};
pub use error::SentenceError;
pub use format::{format_lat_ddmm, format_lon_ddmm, int_to_string, DDMM_MIN_CAPACITY};
pub use parser::{MessageType, NmeaParser};
pub use position::GpsPosition;

// This isn't in core for some reason, so do this to avoid pulling in a dependency
pub trait Abs {
    fn abs(self) -> Self;
}

impl Abs for f32 {
    fn abs(self) -> Self {
        f32::from_bits(self.to_bits() & 0x7fff_ffff)
    }
}
