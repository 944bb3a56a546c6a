use super::Database;
use anyhow::Result;
use teloxide::types::ChatId;

use crate::annotation::ImageAnnotation;

impl Database {
    /// Store the annotation for the chat's most recent photo, replacing any
    /// previous one.
    pub async fn set_annotation(&self, chat_id: ChatId, annotation: &ImageAnnotation) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Storing image annotation");
        sqlx::query(
            "INSERT INTO image_annotations (chat_id, description, tags) VALUES (?, ?, ?) \
             ON CONFLICT(chat_id) DO UPDATE SET description = excluded.description, tags = excluded.tags",
        )
        .bind(chat_id.0)
        .bind(&annotation.description)
        .bind(&annotation.tags)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn get_annotation(&self, chat_id: ChatId) -> Result<Option<ImageAnnotation>> {
        tracing::trace!(chat_id = chat_id.0, "Fetching image annotation");
        sqlx::query_as("SELECT description, tags FROM image_annotations WHERE chat_id = ?")
            .bind(chat_id.0)
            .fetch_optional(self.pool())
            .await
            .map_err(Into::into)
    }

    pub async fn clear_annotation(&self, chat_id: ChatId) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Clearing image annotation");
        sqlx::query("DELETE FROM image_annotations WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
