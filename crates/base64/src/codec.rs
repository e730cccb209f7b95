//! Alphabet-parameterised base64 codec.

use crate::constants::{ALPHABET, ALPHABET_URL, INVALID, PAD};
use crate::Base64Error;

/// A base64 codec over a 64-character ASCII alphabet.
///
/// The forward table maps sextets to characters and the reverse table maps
/// bytes back to sextets, so both directions are a single array index per
/// character.
///
/// # Example
///
/// ```
/// use olumi_base64::{Base64, STANDARD};
///
/// assert_eq!(STANDARD.encode(b"hello"), "aGVsbG8=");
///
/// let custom = Base64::new("ZYXWVUTSRQPONMLKJIHGFEDCBAzyxwvutsrqponmlkjihgfedcba9876543210.~", None).unwrap();
/// let text = custom.encode(b"\x00\xff");
/// assert_eq!(custom.decode(&text).unwrap(), b"\x00\xff");
/// ```
#[derive(Debug, Clone)]
pub struct Base64 {
    table: [u8; 64],
    lookup: [u8; 256],
    pad: Option<u8>,
}

/// Standard alphabet with `=` padding.
pub const STANDARD: Base64 = Base64::from_table(ALPHABET, Some(PAD));

/// URL-safe alphabet without padding.
pub const URL_SAFE: Base64 = Base64::from_table(ALPHABET_URL, None);

const fn build_lookup(table: &[u8; 64]) -> [u8; 256] {
    let mut lookup = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        lookup[table[i] as usize] = i as u8;
        i += 1;
    }
    lookup
}

impl Base64 {
    const fn from_table(table: &[u8; 64], pad: Option<u8>) -> Self {
        Self {
            table: *table,
            lookup: build_lookup(table),
            pad,
        }
    }

    /// Creates a codec for a custom alphabet.
    ///
    /// `chars` must hold exactly 64 distinct ASCII characters. `pad` of `None`
    /// disables padding on encode; decode still accepts trailing `=` when `=`
    /// is not itself part of the alphabet.
    ///
    /// # Errors
    ///
    /// [`Base64Error::InvalidCharSetLength`] when `chars` is not 64 long,
    /// [`Base64Error::InvalidCharSet`] for non-ASCII or repeated characters or
    /// a padding character that collides with the alphabet.
    pub fn new(chars: &str, pad: Option<char>) -> Result<Self, Base64Error> {
        if chars.chars().count() != 64 {
            return Err(Base64Error::InvalidCharSetLength);
        }
        let table: [u8; 64] = chars
            .as_bytes()
            .try_into()
            .map_err(|_| Base64Error::InvalidCharSet)?;
        let lookup = build_lookup(&table);
        if lookup.iter().filter(|&&v| v != INVALID).count() != 64 {
            return Err(Base64Error::InvalidCharSet);
        }
        let pad = match pad {
            None => None,
            Some(c) if c.is_ascii() && lookup[c as usize] == INVALID => Some(c as u8),
            Some(_) => return Err(Base64Error::InvalidCharSet),
        };
        Ok(Self { table, lookup, pad })
    }

    /// Length of the text [`Base64::encode`] produces for `len` input bytes.
    pub fn encoded_len(&self, len: usize) -> usize {
        let full = len / 3 * 4;
        match (len % 3, self.pad.is_some()) {
            (0, _) => full,
            (_, true) => full + 4,
            (rem, false) => full + rem + 1,
        }
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(self.encoded_len(bytes.len()));
        let mut chunks = bytes.chunks_exact(3);
        for chunk in &mut chunks {
            let n = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
            self.push_sextets(&mut out, n, 4);
        }
        match *chunks.remainder() {
            [o1] => {
                self.push_sextets(&mut out, u32::from(o1) << 16, 2);
                self.push_pad(&mut out, 2);
            }
            [o1, o2] => {
                self.push_sextets(&mut out, (u32::from(o1) << 16) | (u32::from(o2) << 8), 3);
                self.push_pad(&mut out, 1);
            }
            _ => {}
        }
        out
    }

    /// Decodes `encoded`, accepting both padded and unpadded input.
    ///
    /// Padding is only valid where it completes the final group.
    ///
    /// Trailing bits in the last group are ignored.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, Base64Error> {
        let input = encoded.as_bytes();
        let pad = self.pad.unwrap_or(PAD);
        let trailing = if self.lookup[pad as usize] == INVALID {
            input.iter().rev().take_while(|&&b| b == pad).count()
        } else {
            0
        };
        let body = &input[..input.len() - trailing];
        let rem = body.len() % 4;
        let misplaced = match self.pad {
            Some(_) => input.len() % 4 != 0,
            // Unpadded codecs accept padding only up to the next group boundary.
            None => rem == 0 || trailing > 4 - rem,
        };
        if trailing > 2 || (trailing > 0 && misplaced) {
            return Err(Base64Error::InvalidPadding);
        }

        let mut out = Vec::with_capacity(body.len() / 4 * 3 + 2);
        let mut chunks = body.chunks_exact(4);
        let mut offset = 0;
        for chunk in &mut chunks {
            let n = self.sextets(chunk, offset)?;
            out.extend_from_slice(&[(n >> 16) as u8, (n >> 8) as u8, n as u8]);
            offset += 4;
        }
        let rest = chunks.remainder();
        match rest.len() {
            0 => {}
            2 => {
                let n = self.sextets(rest, offset)? << 12;
                out.push((n >> 16) as u8);
            }
            3 => {
                let n = self.sextets(rest, offset)? << 6;
                out.extend_from_slice(&[(n >> 16) as u8, (n >> 8) as u8]);
            }
            _ => return Err(Base64Error::InvalidLength(body.len())),
        }
        Ok(out)
    }

    fn push_sextets(&self, out: &mut String, n: u32, count: u32) {
        for i in 0..count {
            let sextet = (n >> (18 - 6 * i)) & 0x3F;
            out.push(char::from(self.table[sextet as usize]));
        }
    }

    fn push_pad(&self, out: &mut String, count: usize) {
        if let Some(pad) = self.pad {
            out.extend(std::iter::repeat(char::from(pad)).take(count));
        }
    }

    fn sextets(&self, chars: &[u8], offset: usize) -> Result<u32, Base64Error> {
        chars.iter().enumerate().try_fold(0u32, |acc, (i, &byte)| {
            match self.lookup[byte as usize] {
                INVALID => Err(Base64Error::InvalidChar {
                    position: offset + i,
                    byte,
                }),
                v => Ok((acc << 6) | u32::from(v)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_matches_output() {
        for len in 0..10 {
            let bytes = vec![0xA5u8; len];
            assert_eq!(STANDARD.encoded_len(len), STANDARD.encode(&bytes).len());
            assert_eq!(URL_SAFE.encoded_len(len), URL_SAFE.encode(&bytes).len());
        }
    }

    #[test]
    fn lookup_rejects_chars_outside_alphabet() {
        assert_eq!(
            URL_SAFE.decode("ab+c"),
            Err(Base64Error::InvalidChar {
                position: 2,
                byte: b'+'
            })
        );
        assert_eq!(
            STANDARD.decode("ab-c"),
            Err(Base64Error::InvalidChar {
                position: 2,
                byte: b'-'
            })
        );
    }

    #[test]
    fn single_trailing_char_is_an_invalid_length() {
        assert_eq!(URL_SAFE.decode("abcde"), Err(Base64Error::InvalidLength(5)));
    }

    #[test]
    fn custom_alphabet_validation() {
        assert_eq!(
            Base64::new("abc", None).unwrap_err(),
            Base64Error::InvalidCharSetLength
        );
        let dup = "A".repeat(64);
        assert_eq!(Base64::new(&dup, None).unwrap_err(), Base64Error::InvalidCharSet);
        let alphabet = std::str::from_utf8(ALPHABET).unwrap();
        assert_eq!(
            Base64::new(alphabet, Some('A')).unwrap_err(),
            Base64Error::InvalidCharSet
        );
        assert!(Base64::new(alphabet, Some('.')).is_ok());
    }
}
