use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use triomphe::Arc;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, TypedBuilder)]
pub struct NewMessage {
    #[builder(setter(into))]
    name: String,
    #[builder(setter(into))]
    email: String,
    #[builder(setter(into))]
    message: String,
}

/// Guest-book entries
#[derive(Clone)]
pub struct MessageStore {
    inner: Arc<RwLock<Vec<Message>>>,
}

impl MessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    #[instrument(skip_all)]
    pub async fn insert(&self, new_message: NewMessage) -> Message {
        let message = Message {
            id: Uuid::new_v4(),
            name: new_message.name,
            email: new_message.email,
            message: new_message.message,
            created_at: OffsetDateTime::now_utc(),
        };

        self.inner.write().await.push(message.clone());
        debug!(id = %message.id, "stored guest-book message");

        message
    }

    /// All messages, newest first
    pub async fn list(&self) -> Vec<Message> {
        self.inner.read().await.iter().rev().cloned().collect()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{MessageStore, NewMessage};

    #[tokio::test]
    async fn newest_first() {
        let store = MessageStore::new();
        assert!(store.list().await.is_empty());

        for name in ["first", "second", "third"] {
            store
                .insert(
                    NewMessage::builder()
                        .name(name)
                        .email("guest@example.com")
                        .message("hello")
                        .build(),
                )
                .await;
        }

        let names: Vec<_> = store.list().await.into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["third", "second", "first"]);
    }
}
