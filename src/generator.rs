//! Identifier generator and its clock and randomness sources.

use std::{
    cmp::Ordering,
    fmt, iter,
    marker::PhantomData,
    sync::{Mutex, MutexGuard, PoisonError},
    time,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, Forward, Reverse, Uid, Variant, EPOCH_UNIX_NANOS};

pub mod with_rand08;
pub use with_rand08::{OsRandom, ThreadRandom};

/// Length of one timestamp tick in nanoseconds.
pub const TICK_NANOS: u64 = 100;

/// A trait that defines the clock interface for [`Generator`].
///
/// Any `Fn() -> u64` closure implements this trait, which is handy for deterministic tests.
pub trait TimeSource {
    /// Returns the current time in 100-nanosecond ticks since
    /// [`EPOCH_UNIX_NANOS`](crate::EPOCH_UNIX_NANOS).
    fn now(&self) -> u64;
}

impl<F: Fn() -> u64> TimeSource for F {
    fn now(&self) -> u64 {
        self()
    }
}

/// A trait that defines the random number generator interface for [`Generator`].
///
/// Sources are shared by every caller of a generator and are invoked outside the generator's
/// lock, so implementations take `&self`. Any `Fn(&mut [u8])` closure implements this trait.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill(&self, dest: &mut [u8]);
}

impl<F: Fn(&mut [u8])> RandSource for F {
    fn fill(&self, dest: &mut [u8]) {
        self(dest)
    }
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
///
/// Readings before the custom epoch saturate at zero.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> u64 {
        let unix_nanos = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        (unix_nanos.saturating_sub(EPOCH_UNIX_NANOS as u128) / TICK_NANOS as u128) as u64
    }
}

/// Monotonicity state guarded by the generator's lock.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
struct State {
    last_time: u64,
    clock_offset: u64,
    last_seq: u8,
}

impl State {
    /// Folds a raw clock reading into the state and returns the effective timestamp and sequence.
    fn advance(&mut self, now: u64) -> (u64, u8) {
        match now.cmp(&self.last_time) {
            Ordering::Less => self.cold_clock_behind(now),
            // wraps from 0xff to 0x00 without touching the timestamp
            Ordering::Equal => self.last_seq = self.last_seq.wrapping_add(1),
            Ordering::Greater => self.last_seq = 0,
        }
        self.last_time = now;
        (now.wrapping_add(self.clock_offset), self.last_seq)
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(&mut self, now: u64) {
        let rewind = self.last_time - now;
        self.clock_offset = self.clock_offset.wrapping_add(rewind).wrapping_add(1);

        #[cfg(feature = "tracing")]
        tracing::warn!(
            last_time = self.last_time,
            now,
            rewind,
            clock_offset = self.clock_offset,
            "clock moved backwards; advancing offset"
        );
    }
}

/// Represents an identifier generator that guarantees the monotonic order of the timestamp and
/// sequence fields of the identifiers it produces.
///
/// The generator owns the last clock reading, the cumulative clock offset and the last sequence
/// value behind a single [`Mutex`] that is held only while these three values are updated. The
/// clock is read before and the random tail is drawn after the critical section, so a shared
/// generator can be used from many threads at once.
///
/// - If the clock reading is greater than the last one, the sequence restarts at zero.
/// - If the reading equals the last one, the sequence is incremented. An increment past `0xff`
///   wraps to `0x00` within the same timestamp; the random tail then keeps identifiers apart.
/// - If the reading is smaller than the last one (e.g. an NTP step), the offset grows by the
///   rewind plus one tick, so the embedded timestamp keeps increasing and runs ahead of the real
///   clock until the latter catches up.
///
/// # Examples
///
/// ```rust
/// use std::thread;
/// use uid16::Uid16Gen;
///
/// let g = Uid16Gen::new();
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// Deterministic sources can be plugged in through closures:
///
/// ```rust
/// use uid16::{Forward, Generator};
///
/// let g = Generator::<Forward, _, _>::with_sources(|| 1u64, |dest: &mut [u8]| dest.fill(0));
/// assert_eq!(g.generate().to_string(), "00000000000040000000000000");
/// assert_eq!(g.generate().to_string(), "00000000000040b00000000000");
/// ```
pub struct Generator<V, T = SystemClock, R = ThreadRandom> {
    state: Mutex<State>,
    time: T,
    rng: R,
    variant: PhantomData<fn() -> V>,
}

/// Generator of [`Uid16`](crate::Uid16) values with the default sources.
pub type Uid16Gen = Generator<Forward>;

/// Generator of [`Uid16r`](crate::Uid16r) values with the default sources.
pub type Uid16rGen = Generator<Reverse>;

impl<V: Variant> Generator<V> {
    /// Creates a generator that reads [`SystemClock`] and draws from [`ThreadRandom`].
    ///
    /// This is a `const fn`, so the result can be stored in a `static` item.
    pub const fn new() -> Self {
        Self::with_sources(SystemClock, ThreadRandom)
    }
}

impl<V: Variant> Default for Generator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant, T: TimeSource, R: RandSource> Generator<V, T, R> {
    /// Creates a generator with the specified clock and random number generator.
    pub const fn with_sources(time: T, rng: R) -> Self {
        Self::from_components(0, 0, 0, time, rng)
    }

    /// Creates a generator preloaded with explicit state values.
    ///
    /// This is primarily useful for restoring a generator or steering it into edge cases; prefer
    /// [`Self::with_sources`] otherwise.
    pub const fn from_components(
        last_time: u64,
        clock_offset: u64,
        last_seq: u8,
        time: T,
        rng: R,
    ) -> Self {
        Self {
            state: Mutex::new(State {
                last_time,
                clock_offset,
                last_seq,
            }),
            time,
            rng,
            variant: PhantomData,
        }
    }

    /// Generates a new identifier.
    ///
    /// This method never fails. A source that cannot deliver time or randomness is a fatal
    /// environment problem and is left to the source to report (the bundled ones panic).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Uid<V> {
        let now = self.time.now();
        let (timestamp, sequence) = self.lock_state().advance(now);

        let mut random = [0u8; 7];
        self.rng.fill(&mut random);
        Uid::from_fields(timestamp, sequence, random)
    }

    /// Returns an infinite iterator that calls [`Self::generate`] for each item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uid16::Uid16rGen;
    ///
    /// let g = Uid16rGen::new();
    /// let ids: Vec<String> = g.iter().take(4).map(String::from).collect();
    /// assert!(ids.windows(2).all(|w| w[0] > w[1]));
    /// ```
    pub fn iter(&self) -> Iter<'_, V, T, R> {
        Iter(self)
    }

    /// Parses a canonical or shortened string representation.
    ///
    /// Decoding does not depend on the generator state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] if the string is longer than 26 symbols or contains a
    /// symbol outside the variant's alphabet.
    pub fn from_string(&self, src: &str) -> Result<Uid<V>, Error> {
        src.parse()
    }

    /// Copies a 16-byte slice into an identifier verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `src` is exactly 16 bytes long.
    pub fn from_bytes(&self, src: &[u8]) -> Result<Uid<V>, Error> {
        Uid::from_slice(src)
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        // the guarded integers are never left half-updated, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Variant, T, R> fmt::Debug for Generator<V, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = *self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Generator")
            .field("variant", &V::NAME)
            .field("last_time", &state.last_time)
            .field("clock_offset", &state.clock_offset)
            .field("last_seq", &state.last_seq)
            .finish_non_exhaustive()
    }
}

/// Infinite iterator returned by [`Generator::iter`].
pub struct Iter<'a, V, T, R>(&'a Generator<V, T, R>);

impl<V: Variant, T: TimeSource, R: RandSource> Iterator for Iter<'_, V, T, R> {
    type Item = Uid<V>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<V: Variant, T: TimeSource, R: RandSource> iter::FusedIterator for Iter<'_, V, T, R> {}
