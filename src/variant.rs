//! Sort-order variants of the identifier.

use std::{fmt, hash};

use crate::Codec;

/// Configuration that distinguishes the forward and reverse identifier families.
///
/// Both families share the bit layout and generator algorithm; only the textual codec differs.
/// Implementors are zero-sized marker types.
pub trait Variant:
    Copy + Eq + Ord + hash::Hash + fmt::Debug + Default + Send + Sync + 'static
{
    /// Codec that maps identifiers of this variant to and from strings.
    const CODEC: Codec;

    /// Short name used in diagnostics.
    const NAME: &'static str;
}

/// Ascending variant: the string form sorts from oldest to newest.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Forward;

impl Variant for Forward {
    const CODEC: Codec = Codec::new(b"0345678abcdefghijklmnopqrstuvwxy", b'0', false);
    const NAME: &'static str = "uid16";
}

/// Descending variant: the string form sorts from newest to oldest.
///
/// Bytes are complemented before encoding, so the pad symbol is the one that encodes all-one
/// bits, and the nil identifier renders as the largest possible string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Reverse;

impl Variant for Reverse {
    const CODEC: Codec = Codec::new(b"0345678abcdefghijklmnopqrstuvwxy", b'y', true);
    const NAME: &'static str = "uid16r";
}
