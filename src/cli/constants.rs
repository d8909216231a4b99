//! Crate-level display-level state and the `displaylevel!`/`display!` macros
//! gating `eprintln!` by verbosity (modelled on `lz4cli.c`'s `DISPLAYLEVEL`
//! macro).
//!
//! LZ8S has exactly two binaries, each with one flag set, so there is no
//! alternate-command-mode dispatch here.

use std::sync::atomic::{AtomicU32, Ordering};

/// 0 = quiet (`-q`, hides the byte/bit breakdown); 1 = default (breakdown
/// shown); 2 = `-v` (adds the full per-value histogram). The ratio line
/// itself is printed regardless of level — see [`super::report::print_ratio_line`].
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(1);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprintln!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_level_is_one() {
        // Other tests in this process may have mutated the global; just
        // check get/set round-trip rather than assume an untouched default.
        let prev = display_level();
        set_display_level(2);
        assert_eq!(display_level(), 2);
        set_display_level(prev);
    }
}
