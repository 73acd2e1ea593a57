//! Compact, lexicographically sortable 128-bit identifiers
//!
//! ```rust
//! use uid16::{uid16, uid16r};
//!
//! let id = uid16();
//! println!("{}", id); // e.g. "06kndsvcoi8xxjj30b3jb3b80v"
//! println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
//!
//! let newest_first = uid16r();
//! println!("{}", newest_first); // e.g. "yuheo85pdjs33iixyqxiqxqsy0"
//! ```
//!
//! Two families share one bit layout and one generator algorithm:
//!
//! - [`Uid16`] renders as a 26-character string that sorts ascending with creation time.
//! - [`Uid16r`] complements the bytes before encoding, so its string sorts descending with
//!   creation time (newest first), which suits key-value stores that only scan forward.
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           timestamp                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           timestamp                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |   sequence    |                     random                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             random                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 64-bit `timestamp` counts 100-nanosecond ticks since [`EPOCH_UNIX_NANOS`] plus the
//!   generator's cumulative clock offset.
//! - The 8-bit `sequence` orders identifiers generated within the same tick. It restarts at zero
//!   whenever the clock advances.
//! - The remaining 56 `random` bits come from a cryptographically strong random number generator.
//!
//! If the system clock moves backwards, the generator adds the rewind plus one tick to its clock
//! offset, so embedded timestamps keep increasing and may run ahead of the wall clock. The offset
//! is never reduced.
//!
//! # Text encoding
//!
//! Identifiers encode to 26 symbols from the alphabet `0345678abcdefghijklmnopqrstuvwxy`, which
//! is in ascending ASCII order so that string comparison matches byte comparison. Shortened forms
//! drop the leading pad symbols and are accepted by the parsers:
//!
//! ```rust
//! use uid16::{Uid16, Uid16r};
//!
//! let x: Uid16 = "8hpxy8cgub03qjull4frtkf".parse()?;
//! assert_eq!(x.to_string(), "0008hpxy8cgub03qjull4frtkf");
//! assert_eq!(x.shorten(), "8hpxy8cgub03qjull4frtkf");
//!
//! assert_eq!(Uid16r::NIL.to_string(), "yyyyyyyyyyyyyyyyyyyyyyyyyv");
//! assert_eq!(Uid16r::NIL.shorten(), "v");
//! # Ok::<(), uid16::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generators behind [`uid16()`] and
//!   [`uid16r()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization and deserialization of identifiers.
//! - `tracing`: emits `tracing` events and spans from the generator.

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Size of an identifier in bytes.
pub const SIZE: usize = 16;

/// Length of the canonical string representation in symbols.
pub const ENCODED_LEN: usize = 26;

/// Custom epoch of the timestamp field in nanoseconds since the Unix epoch.
///
/// This corresponds to 2018-03-12T09:00:32.285679425Z.
pub const EPOCH_UNIX_NANOS: u64 = 1_520_845_232_285_679_425;

mod codec;
pub use codec::Codec;

mod error;
pub use error::{EncodingError, Error};

mod id;
pub use id::{Uid, Uid16, Uid16r};

mod variant;
pub use variant::{Forward, Reverse, Variant};

pub mod generator;
pub use generator::{
    Generator, OsRandom, RandSource, SystemClock, ThreadRandom, TimeSource, Uid16Gen, Uid16rGen,
};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uid16, uid16r};
