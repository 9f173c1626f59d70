//! Review service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy;
use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::repositories::booking::BookingRepository;
use hostel_database::repositories::hostel::HostelRepository;
use hostel_database::repositories::review::ReviewRepository;
use hostel_database::{Tx, commit};
use hostel_entity::review::{Review, ReviewView};

use super::rating::RatingSummary;
use crate::context::RequestContext;

/// Request to review a hostel.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[serde(alias = "hostel")]
    pub hostel_id: Uuid,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

/// Partial review update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

/// Writes reviews and keeps each hostel's rating in step with them.
#[derive(Debug, Clone)]
pub struct ReviewService {
    review_repo: Arc<ReviewRepository>,
    hostel_repo: Arc<HostelRepository>,
    booking_repo: Arc<BookingRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        review_repo: Arc<ReviewRepository>,
        hostel_repo: Arc<HostelRepository>,
        booking_repo: Arc<BookingRepository>,
    ) -> Self {
        Self {
            review_repo,
            hostel_repo,
            booking_repo,
        }
    }

    /// Reviews a hostel the caller has stayed in. One review per
    /// student and hostel.
    pub async fn create_review(
        &self,
        ctx: &RequestContext,
        req: CreateReviewRequest,
    ) -> AppResult<ReviewView> {
        let stayed = self
            .booking_repo
            .has_completed_stay(ctx.user_id(), req.hostel_id)
            .await?;
        policy::review::create(&ctx.actor, stayed).into_result()?;

        let mut tx = self.review_repo.begin().await?;
        self.hostel_repo
            .lock(&mut tx, req.hostel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Hostel not found"))?;

        let review = self
            .review_repo
            .insert(
                &mut tx,
                ctx.user_id(),
                req.hostel_id,
                req.rating,
                req.comment.as_deref(),
            )
            .await?;
        self.recompute_rating(&mut tx, review.hostel_id).await?;
        commit(tx).await?;

        info!(
            review_id = %review.id,
            hostel_id = %review.hostel_id,
            actor_id = %ctx.user_id(),
            rating = review.rating,
            "Review created"
        );

        self.load(review.id).await
    }

    /// Changes rating or comment.
    pub async fn update_review(
        &self,
        ctx: &RequestContext,
        review_id: Uuid,
        req: UpdateReviewRequest,
    ) -> AppResult<ReviewView> {
        let existing = self.find(review_id).await?;
        policy::review::modify(&ctx.actor, existing.student_id).into_result()?;

        let mut tx = self.review_repo.begin().await?;
        self.hostel_repo.lock(&mut tx, existing.hostel_id).await?;
        let review = self
            .review_repo
            .update(&mut tx, review_id, req.rating, req.comment.as_deref())
            .await?;
        self.recompute_rating(&mut tx, review.hostel_id).await?;
        commit(tx).await?;

        info!(review_id = %review_id, actor_id = %ctx.user_id(), "Review updated");
        self.load(review_id).await
    }

    /// Removes a review.
    pub async fn delete_review(&self, ctx: &RequestContext, review_id: Uuid) -> AppResult<()> {
        let existing = self.find(review_id).await?;
        policy::review::modify(&ctx.actor, existing.student_id).into_result()?;

        let mut tx = self.review_repo.begin().await?;
        self.hostel_repo.lock(&mut tx, existing.hostel_id).await?;
        if !self.review_repo.delete(&mut tx, review_id).await? {
            return Err(AppError::not_found("Review not found"));
        }
        self.recompute_rating(&mut tx, existing.hostel_id).await?;
        commit(tx).await?;

        info!(review_id = %review_id, actor_id = %ctx.user_id(), "Review deleted");
        Ok(())
    }

    /// Every review. Admin only.
    pub async fn list_reviews(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<ReviewView>> {
        policy::admin_only(&ctx.actor).into_result()?;
        self.review_repo.find_all(&page).await
    }

    /// Reviews of one hostel. Public.
    pub async fn hostel_reviews(&self, hostel_id: Uuid) -> AppResult<Vec<ReviewView>> {
        self.review_repo.find_by_hostel(hostel_id).await
    }

    /// Reviews written by the caller.
    pub async fn my_reviews(&self, ctx: &RequestContext) -> AppResult<Vec<ReviewView>> {
        self.review_repo.find_by_student(ctx.user_id()).await
    }

    /// Reviews across the caller's hostels.
    pub async fn owner_reviews(&self, ctx: &RequestContext) -> AppResult<Vec<ReviewView>> {
        policy::owner_listing(&ctx.actor).into_result()?;
        self.review_repo.find_by_owner(ctx.user_id()).await
    }

    /// A single review. Public.
    pub async fn get_review(&self, review_id: Uuid) -> AppResult<ReviewView> {
        self.load(review_id).await
    }

    async fn recompute_rating(&self, tx: &mut Tx, hostel_id: Uuid) -> AppResult<()> {
        let ratings = self.review_repo.ratings_for_hostel(&mut **tx, hostel_id).await?;
        let summary = RatingSummary::from_ratings(&ratings);
        self.hostel_repo
            .set_rating(&mut **tx, hostel_id, summary.rating, summary.num_reviews)
            .await?;
        debug!(
            hostel_id = %hostel_id,
            rating = summary.rating,
            num_reviews = summary.num_reviews,
            "Hostel rating recomputed"
        );
        Ok(())
    }

    async fn find(&self, review_id: Uuid) -> AppResult<Review> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))
    }

    async fn load(&self, review_id: Uuid) -> AppResult<ReviewView> {
        self.review_repo
            .find_view_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))
    }
}
