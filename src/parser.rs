use defmt::{debug, trace, warn};

use crate::{
    buffer::{FieldBuffer, FIELD_CAPACITY},
    detail::{from_hex, parse_latitude, parse_longitude, string_equals, string_to_float, string_to_int},
    error::SentenceError,
    position::GpsPosition,
};

#[derive(defmt::Format, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageType {
    Gpgga,
    Unknown,
}

// Bad is sticky until the next `$`. A `$` re-enters Collecting from any state.
#[derive(Copy, Clone, PartialEq, Eq)]
enum ParserState {
    WaitingForStart,
    Collecting,
    // Bytes after `*`: buffered but not part of the running checksum
    ChecksumCollecting,
    Bad(SentenceError),
}
use ParserState::*;

/// Byte-at-a-time NMEA-0183 decoder for the GPGGA fix sentence.
///
/// `N` is the capacity of the field buffer, including the terminator
/// appended to each field before it is decoded.
pub struct NmeaParser<const N: usize = FIELD_CAPACITY> {
    state: ParserState,
    buf: FieldBuffer<N>,
    checksum: u8,
    field: u8,
    message_type: MessageType,
    position: GpsPosition,
}

impl<const N: usize> Default for NmeaParser<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NmeaParser<N> {
    pub fn new() -> Self {
        Self {
            state: WaitingForStart,
            buf: FieldBuffer::new(),
            checksum: 0,
            field: 0,
            message_type: MessageType::Unknown,
            position: GpsPosition::default(),
        }
    }

    /// Feeds one byte of the incoming stream.
    ///
    /// Returns true exactly when `b` is the `\n` closing a sentence that had a
    /// checksum section, whether or not that checksum matched. Check
    /// [`good`](Self::good) or [`fault`](Self::fault) afterwards.
    ///
    /// Sentences that go bad before their terminator, sentences without a
    /// checksum and sentences of an unknown type never report completion.
    pub fn process(&mut self, b: u8) -> bool {
        if b == b'$' {
            self.start();
            return false;
        }

        if matches!(self.state, WaitingForStart | Bad(_)) {
            return false;
        }

        // Unrecognized identifier: drop the rest of the sentence
        if self.field > 0 && self.message_type == MessageType::Unknown {
            return false;
        }

        match (self.state, b) {
            (_, b'\r') => false,
            (Collecting, b',') => {
                self.checksum ^= b;
                self.end_field();
                false
            }
            (Collecting, b'*') => {
                self.end_field();
                if self.state == Collecting {
                    self.state = ChecksumCollecting;
                }
                false
            }
            (Collecting, b'\n') => {
                self.fail(SentenceError::MissingChecksum);
                false
            }
            (ChecksumCollecting, b'\n') => {
                self.check();
                true
            }
            (state, b) => {
                if state == Collecting {
                    self.checksum ^= b;
                }
                if !self.buf.append(b) {
                    self.fail(SentenceError::Overflow);
                }
                false
            }
        }
    }

    /// True unless the last sentence was judged bad.
    pub fn good(&self) -> bool {
        !self.bad()
    }

    pub fn bad(&self) -> bool {
        matches!(self.state, Bad(_))
    }

    /// Why the current sentence is bad, if it is.
    pub fn fault(&self) -> Option<SentenceError> {
        match self.state {
            Bad(err) => Some(err),
            _ => None,
        }
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Position data. Valid after `process` reports a good GPGGA sentence,
    /// until the next GPGGA sentence starts overwriting it.
    pub fn position(&self) -> &GpsPosition {
        &self.position
    }

    fn start(&mut self) {
        trace!("nmea: sentence start");
        self.state = Collecting;
        self.buf.clear();
        self.checksum = 0;
        self.field = 0;
        self.message_type = MessageType::Unknown;
    }

    fn fail(&mut self, err: SentenceError) {
        warn!("nmea: bad {} sentence: {}", self.message_type, err);
        self.state = Bad(err);
    }

    fn end_field(&mut self) {
        if !self.buf.append(0) {
            self.fail(SentenceError::Overflow);
            return;
        }

        self.process_field();
        self.field = self.field.saturating_add(1);
        self.buf.clear();
    }

    // Field 0 is the sentence identifier and selects the handler for the rest
    fn process_field(&mut self) {
        if self.field == 0 {
            self.message_type = if string_equals(self.buf.as_bytes(), b"GPGGA") {
                MessageType::Gpgga
            } else {
                MessageType::Unknown
            };
            debug!("nmea: {=[u8]:a} -> {}", self.buf.as_bytes(), self.message_type);
            return;
        }

        match self.message_type {
            MessageType::Gpgga => self.process_gpgga_field(),
            MessageType::Unknown => {}
        }
    }

    fn process_gpgga_field(&mut self) {
        let val = self.buf.as_bytes();
        let posn = &mut self.position;

        match self.field {
            1 => posn.timestamp = string_to_int(val) as u32,
            2 => posn.latitude = parse_latitude(val),
            3 => {
                if self.buf.at(0) == b'S' {
                    posn.latitude = -posn.latitude;
                }
            }
            4 => posn.longitude = parse_longitude(val),
            5 => {
                if self.buf.at(0) == b'W' {
                    posn.longitude = -posn.longitude;
                }
            }
            6 => posn.fix_quality = string_to_int(val) as u8,
            7 => posn.number_satellites = string_to_int(val) as u8,
            8 => posn.horizontal_dilution = string_to_float(val),
            9 => posn.altitude_msl = string_to_float(val),
            11 => posn.geoid_height = string_to_float(val),
            // Units, DGPS age and DGPS station id
            10 | 12 | 13 | 14 => {}
            n => self.fail(SentenceError::UnexpectedField(n)),
        }
    }

    fn check(&mut self) {
        let len = self.buf.size();
        if len != 2 {
            self.fail(SentenceError::ChecksumLength(u8::try_from(len).unwrap_or(u8::MAX)));
            return;
        }

        let saw = from_hex(self.buf.at(0)) << 4 | from_hex(self.buf.at(1));
        if saw != self.checksum {
            self.fail(SentenceError::BadChecksum {
                expect: self.checksum,
                saw,
            });
            return;
        }

        debug!("nmea: {} complete", self.message_type);
        self.state = WaitingForStart;
    }
}
