//! Core traits defined in `hostel-core` and implemented by other crates.

pub mod publisher;

pub use publisher::EventPublisher;
