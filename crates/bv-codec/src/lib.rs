//! Codecs for the bound-variable wire format.
//!
//! Two independent encodings share the 94 printable ASCII characters
//! (`!`..`~`, ordinal 33–126):
//! - a positional base-94 integer encoding ([`int_from_base94`],
//!   [`base94_from_int`]);
//! - a fixed permutation mapping wire bytes to a custom text alphabet
//!   ([`decode_text`], [`encode_text`]).

mod base94;
mod error;
mod text;

pub use base94::{base94_from_int, int_from_base94};
pub use error::{CodecError, CodecResult};
pub use text::{decode_text, encode_text, TEXT_ALPHABET};
