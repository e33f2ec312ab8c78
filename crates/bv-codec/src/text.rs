//! The 94-symbol text codec.
//!
//! String bodies on the wire use the printable bytes 33–126, but in a
//! permuted order: wire byte 33 (`!`) means `a`, 34 (`"`) means `b`, and so
//! on through the alphabet below. Decoding maps wire bytes to the alphabet;
//! encoding is the inverse.

use crate::error::{CodecError, CodecResult};

/// Target alphabet, indexed by wire byte minus 33: lowercase, uppercase,
/// digits, a fixed punctuation run, space, newline. Protocol data — do not
/// reorder.
pub const TEXT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`|~ \n";

/// Decode a wire string body into ordinary text.
///
/// Fails with [`CodecError::InvalidDigit`] if a wire byte falls outside
/// `!`..`~`.
pub fn decode_text(body: &str) -> CodecResult<String> {
    let alphabet = TEXT_ALPHABET.as_bytes();
    let mut out = String::with_capacity(body.len());
    for c in body.chars() {
        let ord = u32::from(c);
        if !(33..=126).contains(&ord) {
            return Err(CodecError::InvalidDigit(c));
        }
        out.push(char::from(alphabet[(ord - 33) as usize]));
    }
    Ok(out)
}

/// Encode ordinary text into a wire string body.
///
/// Fails with [`CodecError::UnencodableCharacter`] for anything outside the
/// 94-symbol alphabet (notably control characters other than newline).
pub fn encode_text(text: &str) -> CodecResult<String> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let wire = inverse(c).ok_or(CodecError::UnencodableCharacter(c))?;
        out.push(char::from(wire));
    }
    Ok(out)
}

/// Wire byte for an alphabet character, or `None` if it has no slot.
fn inverse(c: char) -> Option<u8> {
    // The alphabet is pure ASCII, so a 128-entry lookup covers it.
    static TABLE: std::sync::OnceLock<[Option<u8>; 128]> = std::sync::OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut table = [None; 128];
        for (i, b) in TEXT_ALPHABET.bytes().enumerate() {
            table[b as usize] = Some(33 + i as u8);
        }
        table
    });
    if c.is_ascii() {
        table[c as usize]
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_94_symbols() {
        assert_eq!(TEXT_ALPHABET.len(), 94);
    }

    #[test]
    fn hello_world_body_decodes() {
        assert_eq!(decode_text("B%,,/}Q/2,$_").unwrap(), "Hello World!");
    }

    #[test]
    fn first_wire_byte_is_lowercase_a() {
        assert_eq!(decode_text("!").unwrap(), "a");
        assert_eq!(encode_text("a").unwrap(), "!");
    }

    #[test]
    fn round_trip_over_full_alphabet() {
        let encoded = encode_text(TEXT_ALPHABET).unwrap();
        assert_eq!(decode_text(&encoded).unwrap(), TEXT_ALPHABET);
    }

    #[test]
    fn space_and_newline_are_encodable() {
        assert_eq!(decode_text(&encode_text("get lambdaman\n").unwrap()).unwrap(), "get lambdaman\n");
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(encode_text("a\tb"), Err(CodecError::UnencodableCharacter('\t')));
        assert_eq!(encode_text("héllo"), Err(CodecError::UnencodableCharacter('é')));
    }

    #[test]
    fn rejects_out_of_range_wire_byte() {
        assert_eq!(decode_text("ab\x1fcd"), Err(CodecError::InvalidDigit('\x1f')));
    }
}
