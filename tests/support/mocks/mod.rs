// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod gateway;
pub mod time;

pub use gateway::{RecordedCall, RecordingGateway};
pub use time::{FixedClock, fixed_now};
