//! Setting service.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use hostel_auth::policy::{self, Actor};
use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_database::repositories::setting::SettingRepository;
use hostel_entity::setting::{Setting, SettingCategory, UpsertSetting};

use super::defaults;
use crate::context::RequestContext;

/// Body of `PUT /settings/{key}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSettingRequest {
    pub value: serde_json::Value,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub category: SettingCategory,
    #[serde(default)]
    pub is_public: bool,
}

/// Reads and administers key/value settings.
#[derive(Debug, Clone)]
pub struct SettingService {
    setting_repo: Arc<SettingRepository>,
}

impl SettingService {
    /// Creates a new setting service.
    pub fn new(setting_repo: Arc<SettingRepository>) -> Self {
        Self { setting_repo }
    }

    /// Every setting. Admin only.
    pub async fn list_settings(&self, ctx: &RequestContext) -> AppResult<Vec<Setting>> {
        policy::setting::administer(&ctx.actor).into_result()?;
        self.setting_repo.find_all().await
    }

    /// Public settings as a key → value map.
    pub async fn public_settings(&self) -> AppResult<BTreeMap<String, serde_json::Value>> {
        Ok(self
            .setting_repo
            .find_public()
            .await?
            .into_iter()
            .map(|s| (s.key, s.value))
            .collect())
    }

    /// One setting. Non-public settings are admin only.
    pub async fn get_setting(&self, actor: Option<&Actor>, key: &str) -> AppResult<Setting> {
        let setting = self
            .setting_repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Setting '{key}' not found")))?;
        policy::setting::read(actor, &setting).into_result()?;
        Ok(setting)
    }

    /// Creates or replaces a setting. Keys are stored lowercased.
    pub async fn upsert_setting(
        &self,
        ctx: &RequestContext,
        key: &str,
        req: UpsertSettingRequest,
    ) -> AppResult<Setting> {
        policy::setting::administer(&ctx.actor).into_result()?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::validation("Setting key must not be empty"));
        }

        let setting = self
            .setting_repo
            .upsert(&UpsertSetting {
                key: key.to_lowercase(),
                value: req.value,
                description: req.description,
                category: req.category,
                is_public: req.is_public,
                updated_by: Some(ctx.user_id()),
            })
            .await?;
        info!(key = %setting.key, actor_id = %ctx.user_id(), "Setting saved");
        Ok(setting)
    }

    /// Deletes a setting. Admin only.
    pub async fn delete_setting(&self, ctx: &RequestContext, key: &str) -> AppResult<()> {
        policy::setting::administer(&ctx.actor).into_result()?;
        if !self.setting_repo.delete(key).await? {
            return Err(AppError::not_found(format!("Setting '{key}' not found")));
        }
        info!(key = %key, actor_id = %ctx.user_id(), "Setting deleted");
        Ok(())
    }

    /// Inserts the default settings that are missing. Returns how many
    /// were inserted.
    pub async fn initialize(&self, ctx: &RequestContext) -> AppResult<u64> {
        policy::setting::administer(&ctx.actor).into_result()?;
        self.seed_defaults(Some(ctx.user_id())).await
    }

    /// Seeds defaults without an actor, for the CLI.
    pub async fn seed_defaults(&self, updated_by: Option<uuid::Uuid>) -> AppResult<u64> {
        let mut inserted = 0;
        for setting in defaults::default_settings(updated_by) {
            if self.setting_repo.insert_if_absent(&setting).await? {
                inserted += 1;
            }
        }
        info!(inserted, "Default settings initialized");
        Ok(inserted)
    }
}
