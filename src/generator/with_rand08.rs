//! Randomness sources backed by `rand` (v0.8) crate.

use std::sync::{Mutex, PoisonError};

use rand::RngCore;

use super::{Generator, RandSource, SystemClock};
use crate::Variant;

/// A [`RandSource`] that draws from the thread-local generator ([`rand::thread_rng()`]).
///
/// `ThreadRng` is a ChaCha-based CSPRNG seeded from the operating system and reseeded
/// periodically. This type stores nothing and looks the thread-local generator up on every call,
/// so it is `Send + Sync` and contention-free across threads.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn fill(&self, dest: &mut [u8]) {
        rand::thread_rng().fill_bytes(dest);
    }
}

/// A [`RandSource`] that reads the operating system's entropy source ([`rand::rngs::OsRng`]) on
/// every call.
///
/// # Panics
///
/// [`RandSource::fill`] panics if the operating system fails to deliver random bytes.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) {
        rand::rngs::OsRng.fill_bytes(dest);
    }
}

/// An adapter that implements [`RandSource`] for a stateful [`RngCore`] type.
///
/// The wrapped generator sits behind its own [`Mutex`], independent of the generator's state
/// lock. This is useful for seeded generators in reproducible tests.
#[derive(Debug, Default)]
pub struct Adapter<T>(Mutex<T>);

impl<T> Adapter<T> {
    /// Wraps a random number generator.
    pub const fn new(rng: T) -> Self {
        Self(Mutex::new(rng))
    }

    /// Unwraps the random number generator.
    pub fn into_inner(self) -> T {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill(&self, dest: &mut [u8]) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(dest);
    }
}

impl<V: Variant, T: RngCore> Generator<V, SystemClock, Adapter<T>> {
    /// Creates a generator that reads [`SystemClock`] and draws from a random number generator
    /// that implements [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use uid16::{Forward, Generator};
    ///
    /// let g = Generator::<Forward, _, _>::with_rand08(rand::rngs::StdRng::seed_from_u64(42));
    /// println!("{}", g.generate());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_sources(SystemClock, Adapter::new(rng))
    }
}
