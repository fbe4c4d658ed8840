//! Base-122 obfuscation.
//!
//! The UTF-8 bytes of the input are regrouped into 7-bit chunks and each
//! chunk becomes one code point. Chunks that would produce a character that
//! is awkward in config files (NUL, LF, CR, `"`, `&`, `\`) are folded together
//! with the following chunk into a single two-byte code point in
//! `0x080..=0x7FF`, so every input round-trips.

use tracing::trace;

use crate::error::{CodecError, Result};

/// 7-bit values that are never emitted as a single code point.
const ILLEGALS: [u8; 6] = [0, 10, 13, 34, 38, 92];

/// Marks a two-byte code point whose illegal chunk was the last one.
const SHORTENED: u32 = 0b111;

/// Encode text into its Base-122 form. Total: never fails.
pub fn encode(text: &str) -> String {
    trace!(len = text.len(), "encoding");

    let mut reader = BitReader::new(text.as_bytes());
    let mut out = String::with_capacity(text.len() + text.len() / 7 + 1);

    while let Some(bits) = reader.next7() {
        match ILLEGALS.iter().position(|&b| b == bits) {
            Some(index) => {
                let code = match reader.next7() {
                    Some(next) => 0x80 | ((index as u32) << 8) | u32::from(next),
                    None => 0x80 | (SHORTENED << 8) | u32::from(bits),
                };
                // 0x080..=0x7FF is never a surrogate
                if let Some(ch) = char::from_u32(code) {
                    out.push(ch);
                }
            }
            None => out.push(char::from(bits)),
        }
    }

    out
}

/// Decode a Base-122 string produced by [`encode`].
///
/// # Errors
///
/// Returns `CodecError::InvalidEncoding` if the input contains code points
/// the encoder never emits or does not decode to UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    trace!(len = encoded.len(), "decoding");

    let mut writer = BitWriter::default();

    for ch in encoded.chars() {
        let code = u32::from(ch);
        if code < 0x80 {
            writer.push7(code as u8);
            continue;
        }

        let index = (code >> 8) & 0b111;
        if code > 0x7FF || code & 0x80 == 0 || index as usize == ILLEGALS.len() {
            return Err(CodecError::InvalidEncoding(format!(
                "unexpected code point U+{:04X}",
                code
            ))
            .into());
        }
        if index != SHORTENED {
            writer.push7(ILLEGALS[index as usize]);
        }
        writer.push7((code & 0x7F) as u8);
    }

    String::from_utf8(writer.bytes)
        .map_err(|_| CodecError::InvalidEncoding("not valid UTF-8".to_string()).into())
}

/// Reads 7 bits at a time, zero-padding the final chunk.
struct BitReader<'a> {
    bytes: &'a [u8],
    index: usize,
    bit: u32,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            index: 0,
            bit: 0,
        }
    }

    fn next7(&mut self) -> Option<u8> {
        let first = u32::from(*self.bytes.get(self.index)?);
        let high = (((0xFE >> self.bit) & first) << self.bit) >> 1;

        self.bit += 7;
        if self.bit < 8 {
            return Some(high as u8);
        }

        self.bit -= 8;
        self.index += 1;
        let Some(&second) = self.bytes.get(self.index) else {
            return Some(high as u8);
        };
        let low = ((0xFF00 >> self.bit) & u32::from(second) & 0xFF) >> (8 - self.bit);

        Some((high | low) as u8)
    }
}

/// Packs 7-bit chunks back into bytes, dropping trailing padding.
#[derive(Default)]
struct BitWriter {
    bytes: Vec<u8>,
    current: u32,
    filled: u32,
}

impl BitWriter {
    fn push7(&mut self, bits: u8) {
        let shifted = u32::from(bits) << 1;
        self.current |= shifted >> self.filled;
        self.filled += 7;

        if self.filled >= 8 {
            self.bytes.push((self.current & 0xFF) as u8);
            self.filled -= 8;
            self.current = (shifted << (7 - self.filled)) & 0xFF;
        }
    }
}
