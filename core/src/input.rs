//! Parsing of the raw guess field.

use std::num::IntErrorKind;

use guess_types::{GUESS_MAX, GUESS_MIN, GuessError};

/// Parse the raw field text into a guess.
///
/// Surrounding whitespace is ignored. The rest must be an optional sign
/// followed by ASCII digits, otherwise the text is [`GuessError::NotANumber`].
/// Well-formed integers outside `GUESS_MIN..=GUESS_MAX`, including ones too
/// large to represent, are [`GuessError::OutOfRange`].
pub fn parse_guess(raw: &str) -> Result<u8, GuessError> {
    let value = match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            return Err(match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => GuessError::OutOfRange,
                _ => GuessError::NotANumber,
            });
        }
    };

    if value < i64::from(GUESS_MIN) || value > i64::from(GUESS_MAX) {
        return Err(GuessError::OutOfRange);
    }
    u8::try_from(value).map_err(|_| GuessError::OutOfRange)
}
