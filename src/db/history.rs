use super::Database;
use anyhow::Result;
use teloxide::types::ChatId;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl Database {
    pub async fn append_history(&self, chat_id: ChatId, role: &str, content: &str) -> Result<()> {
        tracing::trace!(chat_id = chat_id.0, role, "Appending history message");
        sqlx::query("INSERT INTO chat_history (chat_id, role, content) VALUES (?, ?, ?)")
            .bind(chat_id.0)
            .bind(role)
            .bind(content)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// The chat's dialogue so far, oldest first.
    pub async fn list_history(&self, chat_id: ChatId) -> Result<Vec<ChatMessage>> {
        tracing::trace!(chat_id = chat_id.0, "Listing history");
        sqlx::query_as("SELECT role, content FROM chat_history WHERE chat_id = ? ORDER BY id")
            .bind(chat_id.0)
            .fetch_all(self.pool())
            .await
            .map_err(Into::into)
    }

    pub async fn clear_history(&self, chat_id: ChatId) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Clearing history");
        sqlx::query("DELETE FROM chat_history WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
