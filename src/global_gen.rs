//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use crate::{Generator, Uid16, Uid16Gen, Uid16r, Uid16rGen};

static FORWARD: Uid16Gen = Generator::new();
static REVERSE: Uid16rGen = Generator::new();

/// Generates a [`Uid16`] whose string form sorts ascending with creation time.
///
/// This function employs a process-wide generator and guarantees the monotonic order of the
/// timestamp and sequence fields across all threads. On Unix, the calling thread's random number
/// generator is reseeded when the process ID changes (i.e. upon process forks) to prevent
/// collisions across processes.
///
/// # Examples
///
/// ```rust
/// let id = uid16::uid16();
/// println!("{}", id); // e.g. "06kndsvcoi8xxjj30b3jb3b80v"
/// println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
///
/// let id_string: String = uid16::uid16().to_string();
/// ```
pub fn uid16() -> Uid16 {
    unix_fork_safety::reseed_thread_rng_upon_pid_change();
    FORWARD.generate()
}

/// Generates a [`Uid16r`] whose string form sorts descending with creation time.
///
/// The reverse generator is independent of the one behind [`uid16()`].
///
/// # Examples
///
/// ```rust
/// let a = uid16::uid16r();
/// let b = uid16::uid16r();
/// assert!(a.to_string() > b.to_string());
/// ```
pub fn uid16r() -> Uid16r {
    unix_fork_safety::reseed_thread_rng_upon_pid_change();
    REVERSE.generate()
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks).
    pub fn reseed_thread_rng_upon_pid_change() {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid != last_pid.replace(pid) {
                // rand v0.8 with rand_chacha v0.3 reseeds a forked ThreadRng only after its
                // buffered block of 64 `u32` values is used up.
                let _: [[u32; 32]; 2] = rand::random();

                #[cfg(feature = "tracing")]
                tracing::debug!(pid, "process id changed; reseeded thread-local rng");
            }
        });
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() {}
}
