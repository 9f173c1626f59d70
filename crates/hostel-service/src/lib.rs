//! # hostel-service
//!
//! Business logic service layer for HostelHub. Each service orchestrates
//! repositories, the authorization policy, and the event publisher to
//! implement one application use case family.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Every operation takes a
//! [`RequestContext`] carrying the acting user.

pub mod booking;
pub mod complaint;
pub mod context;
pub mod dashboard;
pub mod hostel;
pub mod notification;
pub mod payment;
pub mod review;
pub mod room;
pub mod setting;
pub mod user;

pub use booking::BookingService;
pub use complaint::ComplaintService;
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use hostel::HostelService;
pub use notification::{NotificationDispatcher, NotificationService};
pub use payment::PaymentService;
pub use review::ReviewService;
pub use room::RoomService;
pub use setting::SettingService;
pub use user::{AdminUserService, UserService};
