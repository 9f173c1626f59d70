//! HostelHub integration tests.
//!
//! `api_test` runs without a database. The remaining modules need a
//! disposable PostgreSQL database in `HOSTEL_TEST_DATABASE_URL` and are
//! ignored by default: `cargo test --test integration -- --ignored`.

mod api_test;
mod booking_test;
mod complaint_test;
mod helpers;
mod hostel_test;
mod review_test;
