use std::{fmt, hash, marker::PhantomData, str};

use fstr::FStr;

use crate::{Error, Forward, Reverse, Variant, ENCODED_LEN, SIZE};

/// Represents a 128-bit sortable unique identifier.
///
/// The 16 bytes are laid out big-endian as an 8-byte timestamp (100-nanosecond ticks since
/// [`EPOCH_UNIX_NANOS`](crate::EPOCH_UNIX_NANOS)), a 1-byte sequence counter and 7 random bytes.
/// The type parameter selects the textual codec: see [`Uid16`] and [`Uid16r`].
///
/// Comparison operators follow the byte value, which is chronological for both variants. Only
/// the string form of [`Uid16r`] sorts in the opposite direction.
pub struct Uid<V> {
    bytes: [u8; SIZE],
    variant: PhantomData<V>,
}

/// Identifier whose string form sorts ascending with time.
pub type Uid16 = Uid<Forward>;

/// Identifier whose string form sorts descending with time.
pub type Uid16r = Uid<Reverse>;

impl<V> Uid<V> {
    /// Nil identifier (all bits zero)
    pub const NIL: Self = Self::from_bytes([0x00; SIZE]);

    /// Max identifier (all bits one)
    pub const MAX: Self = Self::from_bytes([0xff; SIZE]);

    /// Creates an identifier from a raw byte array.
    pub const fn from_bytes(bytes: [u8; SIZE]) -> Self {
        Self {
            bytes,
            variant: PhantomData,
        }
    }

    /// Creates an identifier from field values.
    pub const fn from_fields(timestamp: u64, sequence: u8, random: [u8; 7]) -> Self {
        let t = timestamp.to_be_bytes();
        let r = random;
        Self::from_bytes([
            t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7], sequence, r[0], r[1], r[2], r[3],
            r[4], r[5], r[6],
        ])
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; SIZE] {
        &self.bytes
    }

    /// Returns the effective timestamp in 100-nanosecond ticks since the custom epoch.
    pub const fn timestamp(&self) -> u64 {
        let b = &self.bytes;
        u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Returns the sequence counter.
    pub const fn sequence(&self) -> u8 {
        self.bytes[8]
    }

    /// Returns the random tail.
    pub const fn random(&self) -> [u8; 7] {
        let b = &self.bytes;
        [b[9], b[10], b[11], b[12], b[13], b[14], b[15]]
    }
}

impl<V: Variant> Uid<V> {
    /// Returns the canonical string representation stored in a stack-allocated structure that can
    /// be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uid16::Uid16;
    ///
    /// let x = "0008hpxy8cgub03qjull4frtkf".parse::<Uid16>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "0008hpxy8cgub03qjull4frtkf");
    /// assert_eq!(format!("{}", y), "0008hpxy8cgub03qjull4frtkf");
    /// # Ok::<(), uid16::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<ENCODED_LEN> {
        let buffer = V::CODEC.encode(&self.bytes);
        debug_assert!(buffer.is_ascii());
        // SAFETY: every alphabet symbol is ASCII
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the string representation with leading pad symbols removed.
    ///
    /// At least one symbol is retained. The result is accepted by [`str::parse`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uid16::{Uid16, Uid16r};
    ///
    /// let x = "0008hpxy8cgub03qjull4frtkf".parse::<Uid16>()?;
    /// assert_eq!(x.shorten(), "8hpxy8cgub03qjull4frtkf");
    /// assert_eq!(x.shorten().parse(), Ok(x));
    ///
    /// assert_eq!(Uid16::NIL.shorten(), "0");
    /// assert_eq!(Uid16r::NIL.shorten(), "v");
    /// # Ok::<(), uid16::Error>(())
    /// ```
    pub fn shorten(&self) -> String {
        V::CODEC.shorten(&self.encode()).to_owned()
    }

    /// Creates an identifier from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the slice length differs from [`SIZE`].
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; SIZE]>::try_from(src)
            .map(Self::from_bytes)
            .map_err(|_| Error::InvalidLength { len: src.len() })
    }
}

impl<V: Variant> fmt::Display for Uid<V> {
    /// Returns the canonical 26-symbol string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<V: Variant> fmt::Debug for Uid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(V::NAME).field(&&*self.encode()).finish()
    }
}

impl<V: Variant> str::FromStr for Uid<V> {
    type Err = Error;

    /// Creates an object from the canonical or shortened string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        V::CODEC.decode(src.as_bytes()).map(Self::from_bytes)
    }
}

// Manual impls so that the bounds do not leak onto the marker type.

impl<V> Clone for Uid<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Uid<V> {}

impl<V> PartialEq for Uid<V> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<V> Eq for Uid<V> {}

impl<V> PartialOrd for Uid<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Uid<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl<V> hash::Hash for Uid<V> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl<V> Default for Uid<V> {
    fn default() -> Self {
        Self::NIL
    }
}

impl<V> From<Uid<V>> for [u8; SIZE] {
    fn from(src: Uid<V>) -> Self {
        src.bytes
    }
}

impl<V> From<[u8; SIZE]> for Uid<V> {
    fn from(src: [u8; SIZE]) -> Self {
        Self::from_bytes(src)
    }
}

impl<V: Variant> TryFrom<&[u8]> for Uid<V> {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl<V> AsRef<[u8]> for Uid<V> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<V> From<Uid<V>> for u128 {
    fn from(src: Uid<V>) -> Self {
        Self::from_be_bytes(src.bytes)
    }
}

impl<V> From<u128> for Uid<V> {
    fn from(src: u128) -> Self {
        Self::from_bytes(src.to_be_bytes())
    }
}

impl<V: Variant> From<Uid<V>> for String {
    fn from(src: Uid<V>) -> Self {
        src.to_string()
    }
}

impl<V: Variant> TryFrom<String> for Uid<V> {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, PhantomData, Uid, Variant};
    use serde::{de, Deserializer, Serializer};

    impl<V: Variant> serde::Serialize for Uid<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de, V: Variant> serde::Deserialize<'de> for Uid<V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl(PhantomData))
            } else {
                deserializer.deserialize_bytes(VisitorImpl(PhantomData))
            }
        }
    }

    struct VisitorImpl<V>(PhantomData<V>);

    impl<'de, V: Variant> de::Visitor<'de> for VisitorImpl<V> {
        type Value = Uid<V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a {} representation", V::NAME)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}
