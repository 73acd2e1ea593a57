//! Base-32 codec with a configurable alphabet, pad symbol and bit complement.

use crate::{EncodingError, Error, ENCODED_LEN, SIZE};

const NO_VALUE: u8 = 0xff;

/// A base-32 encoder/decoder for 16-byte identifiers.
///
/// Every identifier encodes to exactly [`ENCODED_LEN`] symbols. The first 25 symbols carry five
/// bits each and the last one carries the remaining three bits in its high positions. Shorter
/// inputs are accepted by the decoder as if left-padded with the pad symbol, which lets
/// [`Codec::shorten`] drop leading pad symbols from the canonical form.
///
/// When `complement` is set, every byte is bit-complemented before encoding and after decoding,
/// so that a larger identifier produces a lexicographically smaller string.
///
/// # Examples
///
/// ```rust
/// use uid16::Codec;
///
/// const HEX_ISH: Codec = Codec::new(b"0123456789abcdefghijklmnopqrstuv", b'0', false);
///
/// let encoded = HEX_ISH.encode(&[0xff; 16]);
/// assert_eq!(&encoded, b"vvvvvvvvvvvvvvvvvvvvvvvvvs");
/// assert_eq!(HEX_ISH.decode(&encoded), Ok([0xff; 16]));
/// assert_eq!(HEX_ISH.decode(b"1"), HEX_ISH.decode(b"00001"));
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Codec {
    alphabet: [u8; 32],
    pad: u8,
    complement: bool,
    lookup: [u8; 256],
}

impl Codec {
    /// Creates a codec from a 32-symbol alphabet, a pad symbol and the complement flag.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if the alphabet contains a non-ASCII or
    /// duplicate symbol, or if the pad symbol is not part of the alphabet.
    pub const fn new(alphabet: &[u8; 32], pad: u8, complement: bool) -> Self {
        let mut lookup = [NO_VALUE; 256];
        let mut i = 0;
        while i < 32 {
            let c = alphabet[i];
            if !c.is_ascii() {
                panic!("alphabet must consist of ASCII symbols");
            }
            if lookup[c as usize] != NO_VALUE {
                panic!("alphabet must not contain duplicate symbols");
            }
            lookup[c as usize] = i as u8;
            i += 1;
        }
        if lookup[pad as usize] == NO_VALUE {
            panic!("pad symbol must be part of the alphabet");
        }

        Self {
            alphabet: *alphabet,
            pad,
            complement,
            lookup,
        }
    }

    /// Returns the 32 symbols in the order of their numeric values.
    pub const fn alphabet(&self) -> &[u8; 32] {
        &self.alphabet
    }

    /// Returns the symbol implied in front of a shortened string.
    pub const fn pad(&self) -> u8 {
        self.pad
    }

    /// Returns `true` if bytes are complemented around the base-32 step.
    pub const fn complement(&self) -> bool {
        self.complement
    }

    /// Encodes 16 bytes into the canonical fixed-length form.
    pub fn encode(&self, bytes: &[u8; SIZE]) -> [u8; ENCODED_LEN] {
        let mut value = u128::from_be_bytes(*bytes);
        if self.complement {
            value = !value;
        }

        let mut dst = [0u8; ENCODED_LEN];
        for (i, e) in dst[..ENCODED_LEN - 1].iter_mut().enumerate() {
            *e = self.alphabet[(value >> (123 - 5 * i)) as usize & 31];
        }
        // last symbol holds the remaining 3 bits
        dst[ENCODED_LEN - 1] = self.alphabet[(value as usize & 7) << 2];
        dst
    }

    /// Decodes a canonical or left-truncated encoding into 16 bytes.
    ///
    /// Missing leading symbols are filled with the pad symbol; the empty string therefore
    /// decodes to whatever an all-pad string decodes to. The two unused low bits of the last
    /// symbol are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] if `src` has more than [`ENCODED_LEN`] bytes or
    /// contains a byte that is not in the alphabet.
    pub fn decode(&self, src: &[u8]) -> Result<[u8; SIZE], Error> {
        let Some(n_pad) = ENCODED_LEN.checked_sub(src.len()) else {
            return Err(EncodingError::TooLong { len: src.len() }.into());
        };

        let mut digits = [self.lookup[self.pad as usize]; ENCODED_LEN];
        for (offset, (dst, &byte)) in digits[n_pad..].iter_mut().zip(src).enumerate() {
            *dst = self.lookup[byte as usize];
            if *dst == NO_VALUE {
                return Err(EncodingError::InvalidSymbol { byte, offset }.into());
            }
        }

        let mut value = digits[..ENCODED_LEN - 1]
            .iter()
            .fold(0u128, |acc, &e| (acc << 5) | e as u128);
        value = (value << 3) | (digits[ENCODED_LEN - 1] >> 2) as u128;
        if self.complement {
            value = !value;
        }
        Ok(value.to_be_bytes())
    }

    /// Strips leading pad symbols from a canonical encoding, retaining at least one symbol.
    pub fn shorten<'a>(&self, encoded: &'a str) -> &'a str {
        let n = encoded
            .bytes()
            .take(encoded.len().saturating_sub(1))
            .take_while(|&c| c == self.pad)
            .count();
        &encoded[n..]
    }
}

#[cfg(test)]
mod tests {
    use super::Codec;
    use crate::{EncodingError, Error, Forward, Reverse, Variant, ENCODED_LEN};

    const FWD: Codec = Forward::CODEC;
    const REV: Codec = Reverse::CODEC;

    /// Returns prepared pairs of canonical and shortened forward encodings
    fn prepare_cases() -> &'static [(&'static str, &'static str)] {
        &[
            ("0008hpxy8cgub03qjull4frtkf", "8hpxy8cgub03qjull4frtkf"),
            ("00000000000040000000000000", "40000000000000"),
            ("00000000000040b00000000000", "40b00000000000"),
            ("30000000000000000000000000", "30000000000000000000000000"),
            ("00000000000000000000000000", "0"),
            ("0000000000000000000000000b", "b"),
            ("yyyyyyyyyyyyyyyyyyyyyyyyyv", "yyyyyyyyyyyyyyyyyyyyyyyyyv"),
        ]
    }

    /// Encodes boundary values to golden strings
    #[test]
    fn encodes_boundary_values_to_golden_strings() {
        assert_eq!(&FWD.encode(&[0x00; 16]), b"00000000000000000000000000");
        assert_eq!(&FWD.encode(&[0xff; 16]), b"yyyyyyyyyyyyyyyyyyyyyyyyyv");
        assert_eq!(&REV.encode(&[0x00; 16]), b"yyyyyyyyyyyyyyyyyyyyyyyyyv");
        assert_eq!(&REV.encode(&[0xff; 16]), b"00000000000000000000000000");
    }

    /// Decodes canonical and shortened forms to the same bytes
    #[test]
    fn decodes_canonical_and_shortened_forms_to_the_same_bytes() {
        for (canonical, short) in prepare_cases() {
            let bytes = FWD.decode(canonical.as_bytes()).unwrap();
            assert_eq!(FWD.decode(short.as_bytes()), Ok(bytes));
            assert_eq!(&FWD.encode(&bytes), canonical.as_bytes());
            assert_eq!(FWD.shorten(canonical), *short);
        }

        let bytes = REV.decode(b"yyysksp6kunvwyrl0gd0jpaeir").unwrap();
        assert_eq!(REV.decode(b"sksp6kunvwyrl0gd0jpaeir"), Ok(bytes));
        assert_eq!(REV.shorten("yyysksp6kunvwyrl0gd0jpaeir"), "sksp6kunvwyrl0gd0jpaeir");
    }

    /// Decodes empty and single-pad strings to all zeros
    #[test]
    fn decodes_empty_and_single_pad_strings_to_all_zeros() {
        assert_eq!(FWD.decode(b""), Ok([0; 16]));
        assert_eq!(FWD.decode(b"0"), Ok([0; 16]));
        assert_eq!(REV.decode(b""), Ok([0; 16]));
        assert_eq!(REV.decode(b"y"), Ok([0; 16]));
    }

    /// Keeps one symbol when shortening all-pad encodings
    #[test]
    fn keeps_one_symbol_when_shortening_all_pad_encodings() {
        assert_eq!(FWD.shorten("00000000000000000000000000"), "0");
        assert_eq!(REV.shorten("yyyyyyyyyyyyyyyyyyyyyyyyyv"), "v");
        assert_eq!(FWD.shorten("0"), "0");
        assert_eq!(FWD.shorten(""), "");
    }

    /// Treats any number of leading pad symbols as equivalent
    #[test]
    fn treats_any_number_of_leading_pad_symbols_as_equivalent() {
        for (codec, suffix) in [(FWD, "8hpxy8cgub03qjull4frtkf"), (REV, "sksp6kunvwyrl0gd0jpaeir")] {
            let expected = codec.decode(suffix.as_bytes()).unwrap();
            for k in 0..=(ENCODED_LEN - suffix.len()) {
                let mut padded = vec![codec.pad(); k];
                padded.extend_from_slice(suffix.as_bytes());
                assert_eq!(codec.decode(&padded), Ok(expected));
            }
        }
    }

    /// Ignores unused trailing bits of the last symbol
    #[test]
    fn ignores_unused_trailing_bits_of_the_last_symbol() {
        assert_eq!(FWD.decode(b"3"), Ok([0; 16]));
        assert_eq!(FWD.decode(b"yyyyyyyyyyyyyyyyyyyyyyyyyy"), Ok([0xff; 16]));
    }

    /// Rejects strings longer than the canonical length
    #[test]
    fn rejects_strings_longer_than_the_canonical_length() {
        assert_eq!(
            FWD.decode(b"000000000000000000000000000"),
            Err(Error::InvalidEncoding(EncodingError::TooLong { len: 27 }))
        );
        assert_eq!(
            REV.decode(b"yyyyyyyyyyyyyyyyyyyyyyyyyyv"),
            Err(Error::InvalidEncoding(EncodingError::TooLong { len: 27 }))
        );
    }

    /// Rejects symbols outside the alphabet
    #[test]
    fn rejects_symbols_outside_the_alphabet() {
        let cases: &[(&[u8], u8, usize)] = &[
            (b"1", b'1', 0),
            (b"0002", b'2', 3),
            (b"9hpxy8cgub03qjull4frtkf", b'9', 0),
            (b"8hpxy8cgub03qjull4frtkz", b'z', 22),
            (b"8HPXY8CGUB03QJULL4FRTKF", b'H', 1),
            (b" 8hpxy8cgub03qjull4frtkf", b' ', 0),
            (b"8hpxy8cgub03qjull4frtkf\n", b'\n', 23),
            ("0é".as_bytes(), 0xc3, 1),
        ];
        for &(src, byte, offset) in cases {
            assert_eq!(
                FWD.decode(src),
                Err(Error::InvalidEncoding(EncodingError::InvalidSymbol {
                    byte,
                    offset
                }))
            );
        }
    }

    /// Preserves byte order in string order
    #[test]
    fn preserves_byte_order_in_string_order() {
        let mut prev = [0u8; 16];
        for _ in 0..10_000 {
            let curr: [u8; 16] = rand::random();
            let (lo, hi) = if prev < curr { (prev, curr) } else { (curr, prev) };
            assert!(FWD.encode(&lo) <= FWD.encode(&hi));
            assert!(REV.encode(&lo) >= REV.encode(&hi));
            prev = curr;
        }
    }

    /// Decodes what it encodes
    #[test]
    fn decodes_what_it_encodes() {
        for _ in 0..10_000 {
            let bytes: [u8; 16] = rand::random();
            for codec in [FWD, REV] {
                let encoded = codec.encode(&bytes);
                assert_eq!(codec.decode(&encoded), Ok(bytes));
                let text = std::str::from_utf8(&encoded).unwrap();
                assert_eq!(codec.decode(codec.shorten(text).as_bytes()), Ok(bytes));
            }
        }
    }
}
