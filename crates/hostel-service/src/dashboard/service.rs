//! Dashboard service.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::debug;

use hostel_auth::policy::{self, require_roles};
use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_database::repositories::booking::BookingRepository;
use hostel_database::repositories::complaint::{ComplaintFilter, ComplaintRepository};
use hostel_database::repositories::dashboard::{BlockComplaints, DashboardRepository};
use hostel_database::repositories::payment::PaymentRepository;
use hostel_database::repositories::review::ReviewRepository;
use hostel_database::repositories::room::RoomRepository;
use hostel_database::repositories::user::UserRepository;
use hostel_entity::booking::BookingView;
use hostel_entity::complaint::{ComplaintStatus, ComplaintView};
use hostel_entity::payment::PaymentView;
use hostel_entity::review::ReviewView;
use hostel_entity::room::RoomView;
use hostel_entity::user::{User, UserRole};

use super::aggregate;
use crate::context::RequestContext;

const LATEST: i64 = 5;

/// System-wide figures for administrators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_students: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub available_rooms: i64,
    pub occupancy_rate: f64,
    pub total_bookings: i64,
    pub pending_complaints: i64,
    pub total_revenue: f64,
    /// Completed-payment revenue of the current year, January first.
    pub monthly_revenue: [f64; 12],
    pub latest_bookings: Vec<BookingView>,
    pub latest_complaints: Vec<ComplaintView>,
}

/// Everything about the calling student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub student: User,
    pub current_room: Option<RoomView>,
    pub bookings_count: usize,
    pub bookings: Vec<BookingView>,
    pub payments_total: f64,
    pub payments: Vec<PaymentView>,
    pub complaints_count: usize,
    pub pending_complaints: usize,
    pub complaints: Vec<ComplaintView>,
    pub reviews: Vec<ReviewView>,
}

/// Occupancy of one block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStats {
    pub block: String,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub available_rooms: i64,
    pub occupancy_rate: f64,
}

/// Per-block rooms and complaints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelDashboard {
    pub block_stats: Vec<BlockStats>,
    pub complaints_by_block: Vec<BlockComplaints>,
}

/// Builds dashboards from aggregate queries.
#[derive(Debug, Clone)]
pub struct DashboardService {
    dashboard_repo: Arc<DashboardRepository>,
    user_repo: Arc<UserRepository>,
    room_repo: Arc<RoomRepository>,
    booking_repo: Arc<BookingRepository>,
    payment_repo: Arc<PaymentRepository>,
    complaint_repo: Arc<ComplaintRepository>,
    review_repo: Arc<ReviewRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dashboard_repo: Arc<DashboardRepository>,
        user_repo: Arc<UserRepository>,
        room_repo: Arc<RoomRepository>,
        booking_repo: Arc<BookingRepository>,
        payment_repo: Arc<PaymentRepository>,
        complaint_repo: Arc<ComplaintRepository>,
        review_repo: Arc<ReviewRepository>,
    ) -> Self {
        Self {
            dashboard_repo,
            user_repo,
            room_repo,
            booking_repo,
            payment_repo,
            complaint_repo,
            review_repo,
        }
    }

    /// Admin dashboard.
    pub async fn admin_stats(&self, ctx: &RequestContext) -> AppResult<AdminDashboard> {
        policy::admin_only(&ctx.actor).into_result()?;

        let counts = self.dashboard_repo.system_counts().await?;
        let year = Utc::now().year();
        let revenue = self.dashboard_repo.monthly_revenue(year).await?;
        let latest_bookings = self.booking_repo.find_latest(LATEST).await?;
        let latest_complaints = self
            .complaint_repo
            .find_matching(&ComplaintFilter::default(), Some(LATEST))
            .await?;

        debug!(year, total_rooms = counts.total_rooms, "Admin dashboard computed");

        Ok(AdminDashboard {
            total_students: counts.total_students,
            total_rooms: counts.total_rooms,
            occupied_rooms: counts.occupied_rooms,
            available_rooms: counts.total_rooms - counts.occupied_rooms,
            occupancy_rate: aggregate::occupancy_rate(counts.occupied_rooms, counts.total_rooms),
            total_bookings: counts.total_bookings,
            pending_complaints: counts.pending_complaints,
            total_revenue: counts.total_revenue,
            monthly_revenue: aggregate::monthly_slots(&revenue),
            latest_bookings,
            latest_complaints,
        })
    }

    /// The calling student's own dashboard.
    pub async fn student_stats(&self, ctx: &RequestContext) -> AppResult<StudentDashboard> {
        require_roles(&ctx.actor, &[UserRole::Student]).into_result()?;

        let student = self
            .user_repo
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let current_room = match student.room_id {
            Some(room_id) => self.room_repo.find_view_by_id(room_id).await?,
            None => None,
        };

        let bookings = self.booking_repo.find_by_user(student.id).await?;
        let payments = self.payment_repo.find_by_user(student.id).await?;
        let complaints = self
            .complaint_repo
            .find_matching(
                &ComplaintFilter {
                    student_id: Some(student.id),
                    ..Default::default()
                },
                None,
            )
            .await?;
        let reviews = self.review_repo.find_by_student(student.id).await?;

        Ok(StudentDashboard {
            current_room,
            bookings_count: bookings.len(),
            bookings,
            payments_total: payments.iter().map(|p| p.payment.amount).sum(),
            payments,
            complaints_count: complaints.len(),
            pending_complaints: complaints
                .iter()
                .filter(|c| c.complaint.status == ComplaintStatus::Pending)
                .count(),
            complaints,
            reviews,
            student,
        })
    }

    /// Per-block occupancy and complaint counts. Admin or staff.
    pub async fn hostel_stats(&self, ctx: &RequestContext) -> AppResult<HostelDashboard> {
        require_roles(&ctx.actor, &[UserRole::Admin, UserRole::Staff]).into_result()?;

        let block_stats = self
            .dashboard_repo
            .rooms_by_block()
            .await?
            .into_iter()
            .map(|b| BlockStats {
                available_rooms: b.total_rooms - b.occupied_rooms,
                occupancy_rate: aggregate::occupancy_rate(b.occupied_rooms, b.total_rooms),
                block: b.block,
                total_rooms: b.total_rooms,
                occupied_rooms: b.occupied_rooms,
            })
            .collect();
        let complaints_by_block = self.dashboard_repo.complaints_by_block().await?;

        Ok(HostelDashboard {
            block_stats,
            complaints_by_block,
        })
    }
}
