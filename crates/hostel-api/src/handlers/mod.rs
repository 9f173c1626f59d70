//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod booking;
pub mod complaint;
pub mod dashboard;
pub mod health;
pub mod hostel;
pub mod notification;
pub mod payment;
pub mod review;
pub mod room;
pub mod setting;
pub mod user;
