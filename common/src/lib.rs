#![cfg_attr(not(test), no_std)]
//! # Nucleo demo logic
//!
//! Hardware independent pieces of the Nucleo-L031K6 and Nucleo-L452RE demo
//! programs. Everything in here only depends on the `embedded-hal` traits,
//! so it can be unit tested on the host.

use core::convert::Infallible;

pub mod bits;
pub mod button;
pub mod cycler;
pub mod echo;
pub mod leds;
pub mod mandelbrot;
pub mod ramp;
pub mod serial;
pub mod text;
pub mod ticks;

/// Discharge the result of an operation that cannot fail.
///
/// All GPIO operations of the supported HALs use `Infallible` as error type.
#[inline(always)]
pub fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
