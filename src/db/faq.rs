use super::Database;
use anyhow::Result;
use teloxide::types::ChatId;

use crate::faq::QaEntry;

impl Database {
    /// Replace the chat's FAQ document with `entries` in one transaction.
    /// A document is swapped wholesale or not at all, never merged.
    pub async fn replace_faq(&self, chat_id: ChatId, entries: &[QaEntry]) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, count = entries.len(), "Replacing FAQ");
        let mut tx = self.pool().begin().await?;
        sqlx::query("DELETE FROM faq_entries WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(&mut *tx)
            .await?;
        for entry in entries {
            sqlx::query("INSERT INTO faq_entries (chat_id, question, answer) VALUES (?, ?, ?)")
                .bind(chat_id.0)
                .bind(&entry.question)
                .bind(&entry.answer)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// The chat's FAQ entries in upload order.
    pub async fn list_faq(&self, chat_id: ChatId) -> Result<Vec<QaEntry>> {
        tracing::trace!(chat_id = chat_id.0, "Listing FAQ entries");
        sqlx::query_as("SELECT question, answer FROM faq_entries WHERE chat_id = ? ORDER BY id")
            .bind(chat_id.0)
            .fetch_all(self.pool())
            .await
            .map_err(Into::into)
    }

    pub async fn clear_faq(&self, chat_id: ChatId) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Clearing FAQ");
        sqlx::query("DELETE FROM faq_entries WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
