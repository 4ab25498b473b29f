#![forbid(unsafe_code)]

pub mod model;
pub mod time;

pub use time::{Clock, fixed_clock, fixed_now};
