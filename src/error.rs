/// Reason a sentence was judged bad.
#[derive(thiserror::Error, defmt::Format, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SentenceError {
    /// A field did not fit in the field buffer.
    #[error("field exceeds buffer capacity")]
    Overflow,
    /// The sentence ended without a `*` checksum section.
    #[error("sentence ended without a checksum")]
    MissingChecksum,
    /// The checksum section did not hold exactly two characters.
    #[error("checksum field has {0} characters, expected 2")]
    ChecksumLength(u8),
    /// The checksum digits did not match the bytes received.
    #[error("checksum mismatch: computed {expect:#04x}, sentence says {saw:#04x}")]
    BadChecksum { expect: u8, saw: u8 },
    /// The message carried a field its handler does not know.
    #[error("unexpected field index {0}")]
    UnexpectedField(u8),
}
