//! Core type definitions used across the HostelHub workspace.

pub mod date;
pub mod pagination;

pub use date::DateRange;
pub use pagination::{PageLink, PageRequest, PageResponse, Pagination};
