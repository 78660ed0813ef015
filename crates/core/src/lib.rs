#![forbid(unsafe_code)]

//! Domain core for the NeuroQuant assessment: question data, scoring and
//! the share-link codec. Everything here is pure; timing comes in through
//! [`Clock`] and randomness lives in the services crate.

pub mod bank;
pub mod model;
pub mod scoring;
pub mod share;
pub mod time;

pub use time::Clock;
