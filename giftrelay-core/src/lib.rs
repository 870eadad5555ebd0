#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod framework;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod pairing;
pub mod relay;
pub mod report;
pub mod store;
