//! Room service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy::{self, Actor};
use hostel_core::error::AppError;
use hostel_core::events::{DomainEvent, RoomEvent};
use hostel_core::result::AppResult;
use hostel_core::traits::EventPublisher;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::repositories::hostel::HostelRepository;
use hostel_database::repositories::room::{RoomFilter, RoomRepository};
use hostel_database::repositories::user::UserRepository;
use hostel_entity::hostel::Hostel;
use hostel_entity::room::{CreateRoom, GenderPreference, Room, RoomType, RoomView, UpdateRoom};
use hostel_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Request to add a room to a hostel.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 20))]
    pub room_number: String,
    pub room_type: RoomType,
    #[validate(length(min = 1, max = 20))]
    pub block: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub gender_preference: GenderPreference,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Partial room update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 20))]
    pub room_number: Option<String>,
    pub room_type: Option<RoomType>,
    #[validate(length(min = 1, max = 20))]
    pub block: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub gender_preference: Option<GenderPreference>,
    pub is_available: Option<bool>,
}

/// Listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomQuery {
    #[serde(alias = "hostel")]
    pub hostel_id: Option<Uuid>,
    #[serde(alias = "type")]
    pub room_type: Option<RoomType>,
    pub is_available: Option<bool>,
    pub max_price: Option<f64>,
}

/// Request to allocate a student to a room.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AllocateRoomRequest {
    #[serde(alias = "student")]
    pub student_id: Uuid,
}

/// Room inventory and allocation.
#[derive(Debug, Clone)]
pub struct RoomService {
    room_repo: Arc<RoomRepository>,
    hostel_repo: Arc<HostelRepository>,
    user_repo: Arc<UserRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(
        room_repo: Arc<RoomRepository>,
        hostel_repo: Arc<HostelRepository>,
        user_repo: Arc<UserRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            room_repo,
            hostel_repo,
            user_repo,
            publisher,
        }
    }

    /// Adds a room to a hostel the caller owns.
    pub async fn create_room(
        &self,
        ctx: &RequestContext,
        hostel_id: Uuid,
        req: CreateRoomRequest,
    ) -> AppResult<Room> {
        let hostel = self.find_hostel(hostel_id).await?;
        policy::room::manage(&ctx.actor, hostel.owner_id).into_result()?;

        let room = self
            .room_repo
            .create(&CreateRoom {
                hostel_id,
                room_number: req.room_number,
                room_type: req.room_type,
                block: req.block,
                price: req.price,
                capacity: req.capacity,
                amenities: req.amenities,
                gender_preference: req.gender_preference,
                is_available: req.is_available,
            })
            .await?;
        info!(room_id = %room.id, hostel_id = %hostel_id, actor_id = %ctx.user_id(), "Room created");
        Ok(room)
    }

    /// Public listing, cheapest first. Anonymous callers and students only
    /// see rooms of verified hostels.
    pub async fn list_rooms(
        &self,
        actor: Option<&Actor>,
        query: RoomQuery,
        page: PageRequest,
    ) -> AppResult<PageResponse<RoomView>> {
        let filter = RoomFilter {
            hostel_id: query.hostel_id,
            room_type: query.room_type,
            is_available: query.is_available,
            max_price: query.max_price,
            verified_only: policy::hostel::lists_verified_only(actor),
        };
        self.room_repo.find_all(&filter, &page).await
    }

    /// Rooms of one hostel, subject to the hostel's visibility.
    pub async fn hostel_rooms(
        &self,
        actor: Option<&Actor>,
        hostel_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<RoomView>> {
        let hostel = self.find_hostel(hostel_id).await?;
        policy::hostel::view(actor, &hostel).into_result()?;
        let filter = RoomFilter {
            hostel_id: Some(hostel_id),
            ..Default::default()
        };
        self.room_repo.find_all(&filter, &page).await
    }

    /// A single room, subject to its hostel's visibility.
    pub async fn get_room(&self, actor: Option<&Actor>, room_id: Uuid) -> AppResult<RoomView> {
        let view = self
            .room_repo
            .find_view_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        let hostel = self.find_hostel(view.room.hostel_id).await?;
        policy::hostel::view(actor, &hostel).into_result()?;
        Ok(view)
    }

    /// Applies a partial update.
    pub async fn update_room(
        &self,
        ctx: &RequestContext,
        room_id: Uuid,
        req: UpdateRoomRequest,
    ) -> AppResult<Room> {
        let (_, hostel) = self.find_with_hostel(room_id).await?;
        policy::room::manage(&ctx.actor, hostel.owner_id).into_result()?;

        let room = self
            .room_repo
            .update(
                room_id,
                &UpdateRoom {
                    room_number: req.room_number,
                    room_type: req.room_type,
                    block: req.block,
                    price: req.price,
                    capacity: req.capacity,
                    amenities: req.amenities,
                    gender_preference: req.gender_preference,
                    is_available: req.is_available,
                },
            )
            .await?;
        info!(room_id = %room_id, actor_id = %ctx.user_id(), "Room updated");
        Ok(room)
    }

    /// Deletes a room. Rooms with bookings are kept.
    pub async fn delete_room(&self, ctx: &RequestContext, room_id: Uuid) -> AppResult<()> {
        let (_, hostel) = self.find_with_hostel(room_id).await?;
        policy::room::manage(&ctx.actor, hostel.owner_id).into_result()?;
        self.room_repo.delete(room_id).await?;
        info!(room_id = %room_id, actor_id = %ctx.user_id(), "Room deleted");
        Ok(())
    }

    /// Allocates a student to a room and notifies them.
    pub async fn allocate_room(
        &self,
        ctx: &RequestContext,
        room_id: Uuid,
        req: AllocateRoomRequest,
    ) -> AppResult<User> {
        let (room, hostel) = self.find_with_hostel(room_id).await?;
        policy::room::manage(&ctx.actor, hostel.owner_id).into_result()?;

        match self.user_repo.find_by_id(req.student_id).await? {
            Some(user) if user.role == UserRole::Student => {}
            _ => return Err(AppError::not_found("Student not found")),
        }
        let student = self.user_repo.set_room(req.student_id, Some(room.id)).await?;

        info!(
            room_id = %room.id,
            student_id = %student.id,
            actor_id = %ctx.user_id(),
            "Room allocated"
        );

        let event = RoomEvent::Allocated {
            room_id: room.id,
            student_id: student.id,
            room_number: room.room_number,
            block: room.block,
        };
        self.publisher
            .publish_or_log(DomainEvent::new(Some(ctx.user_id()), event.into()))
            .await;

        Ok(student)
    }

    async fn find_hostel(&self, hostel_id: Uuid) -> AppResult<Hostel> {
        self.hostel_repo
            .find_by_id(hostel_id)
            .await?
            .ok_or_else(|| AppError::not_found("Hostel not found"))
    }

    async fn find_with_hostel(&self, room_id: Uuid) -> AppResult<(Room, Hostel)> {
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        let hostel = self.find_hostel(room.hostel_id).await?;
        Ok((room, hostel))
    }
}
