//! Desktop platform implementation.

use std::time::Duration;

use rand::rngs::ThreadRng;

/// Precise sleep for frame pacing.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

pub fn rng() -> ThreadRng {
    rand::rng()
}
