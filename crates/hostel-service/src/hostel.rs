//! Hostel service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy::{self, Actor};
use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::repositories::hostel::{HostelFilter, HostelRepository};
use hostel_entity::hostel::{CreateHostel, Hostel, UpdateHostel};

use crate::context::RequestContext;

/// Request to register a hostel.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
}

/// Partial hostel update. `isVerified` is honoured for admins only.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHostelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub is_verified: Option<bool>,
}

/// Listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostelQuery {
    pub city: Option<String>,
    pub verified: Option<bool>,
}

/// Hostel registration, listing and verification.
#[derive(Debug, Clone)]
pub struct HostelService {
    hostel_repo: Arc<HostelRepository>,
}

impl HostelService {
    /// Creates a new hostel service.
    pub fn new(hostel_repo: Arc<HostelRepository>) -> Self {
        Self { hostel_repo }
    }

    /// Registers a hostel owned by the caller. New hostels start unverified.
    pub async fn create_hostel(
        &self,
        ctx: &RequestContext,
        req: CreateHostelRequest,
    ) -> AppResult<Hostel> {
        policy::hostel::create(&ctx.actor).into_result()?;
        let hostel = self
            .hostel_repo
            .create(&CreateHostel {
                owner_id: ctx.user_id(),
                name: req.name,
                description: req.description,
                address: req.address,
                city: req.city,
                amenities: req.amenities,
                contact_phone: req.contact_phone,
                contact_email: req.contact_email,
            })
            .await?;
        info!(hostel_id = %hostel.id, actor_id = %ctx.user_id(), "Hostel created");
        Ok(hostel)
    }

    /// Public listing. Anonymous callers and students only see verified
    /// hostels, so `verified=false` yields nothing for them.
    pub async fn list_hostels(
        &self,
        actor: Option<&Actor>,
        query: HostelQuery,
        page: PageRequest,
    ) -> AppResult<PageResponse<Hostel>> {
        let filter = HostelFilter {
            city: query.city,
            verified_only: policy::hostel::lists_verified_only(actor),
            verified: query.verified,
        };
        self.hostel_repo.find_all(&filter, &page).await
    }

    /// Hostels owned by the caller.
    pub async fn owner_hostels(&self, ctx: &RequestContext) -> AppResult<Vec<Hostel>> {
        policy::owner_listing(&ctx.actor).into_result()?;
        self.hostel_repo.find_by_owner(ctx.user_id()).await
    }

    /// A single hostel. Unverified hostels are visible to admins and
    /// their owner only.
    pub async fn get_hostel(&self, actor: Option<&Actor>, hostel_id: Uuid) -> AppResult<Hostel> {
        let hostel = self.find(hostel_id).await?;
        policy::hostel::view(actor, &hostel).into_result()?;
        Ok(hostel)
    }

    /// Applies a partial update.
    pub async fn update_hostel(
        &self,
        ctx: &RequestContext,
        hostel_id: Uuid,
        req: UpdateHostelRequest,
    ) -> AppResult<Hostel> {
        let hostel = self.find(hostel_id).await?;
        policy::hostel::manage(&ctx.actor, &hostel).into_result()?;
        if req.is_verified.is_some() {
            policy::hostel::verify(&ctx.actor).into_result()?;
        }

        let mut updated = self
            .hostel_repo
            .update(
                hostel_id,
                &UpdateHostel {
                    name: req.name,
                    description: req.description,
                    address: req.address,
                    city: req.city,
                    amenities: req.amenities,
                    contact_phone: req.contact_phone,
                    contact_email: req.contact_email,
                },
            )
            .await?;
        if let Some(verified) = req.is_verified {
            updated = self
                .hostel_repo
                .set_verified(hostel_id, verified, ctx.user_id())
                .await?;
        }

        info!(hostel_id = %hostel_id, actor_id = %ctx.user_id(), "Hostel updated");
        Ok(updated)
    }

    /// Marks a hostel verified, stamping the verifying admin.
    pub async fn verify_hostel(&self, ctx: &RequestContext, hostel_id: Uuid) -> AppResult<Hostel> {
        policy::hostel::verify(&ctx.actor).into_result()?;
        let hostel = self
            .hostel_repo
            .set_verified(hostel_id, true, ctx.user_id())
            .await?;
        info!(hostel_id = %hostel_id, actor_id = %ctx.user_id(), "Hostel verified");
        Ok(hostel)
    }

    /// Deletes a hostel and its rooms.
    pub async fn delete_hostel(&self, ctx: &RequestContext, hostel_id: Uuid) -> AppResult<()> {
        let hostel = self.find(hostel_id).await?;
        policy::hostel::manage(&ctx.actor, &hostel).into_result()?;
        self.hostel_repo.delete(hostel_id).await?;
        info!(hostel_id = %hostel_id, actor_id = %ctx.user_id(), "Hostel deleted");
        Ok(())
    }

    async fn find(&self, hostel_id: Uuid) -> AppResult<Hostel> {
        self.hostel_repo
            .find_by_id(hostel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Hostel not found"))
    }
}
