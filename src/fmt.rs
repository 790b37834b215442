//! Logging macros
//!
//! Events go to `tracing` when the `tracing` feature is enabled, otherwise to
//! `esp-println` with `esp32-log`. With neither, the macros only borrow their
//! arguments so call sites stay warning-free.
//!
//! Declared first in `lib.rs` with `#[macro_use]` so every module sees them.

#![allow(unused_macros)]

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($s $(, $x)*);
        #[cfg(all(feature = "esp32-log", not(feature = "tracing")))]
        ::esp_println::println!(concat!("[debug] ", $s) $(, $x)*);
        #[cfg(not(any(feature = "tracing", feature = "esp32-log")))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "tracing")]
        ::tracing::info!($s $(, $x)*);
        #[cfg(all(feature = "esp32-log", not(feature = "tracing")))]
        ::esp_println::println!(concat!("[info] ", $s) $(, $x)*);
        #[cfg(not(any(feature = "tracing", feature = "esp32-log")))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "tracing")]
        ::tracing::warn!($s $(, $x)*);
        #[cfg(all(feature = "esp32-log", not(feature = "tracing")))]
        ::esp_println::println!(concat!("[warn] ", $s) $(, $x)*);
        #[cfg(not(any(feature = "tracing", feature = "esp32-log")))]
        let _ = ($( & $x ),*);
    }};
}
