use deadpool_postgres::Pool;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::message::{CreateMessageRequest, Message},
    repositories::message_repository::MessageRepository,
};

pub async fn find_all(pool: &Pool) -> Result<Vec<Message>, ApiError> {
    let client = pool.get().await?;
    let messages = MessageRepository::find_all(&client).await?;
    Ok(messages)
}

/// An empty vec means no message carries this id; callers read that
/// structurally instead of through an error.
pub async fn find_by_id(pool: &Pool, id: &str) -> Result<Vec<Message>, ApiError> {
    let client = pool.get().await?;
    let messages = MessageRepository::find_by_id(&client, id).await?;
    Ok(messages)
}

/// Persists a message, generating an id when the caller supplied none.
///
/// A duplicate explicit id is not retried or regenerated; the constraint
/// violation propagates to the caller.
pub async fn save(pool: &Pool, message: CreateMessageRequest) -> Result<(), ApiError> {
    let id = assign_id(message.id);

    let client = pool.get().await?;
    MessageRepository::insert(&client, &id, &message.text).await?;
    Ok(())
}

/// Keeps a non-empty caller-supplied id, otherwise generates a fresh UUID-v4
/// in its textual form.
pub fn assign_id(id: Option<String>) -> String {
    match id {
        Some(id) if !id.is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_id_keeps_explicit_id() {
        assert_eq!(assign_id(Some("greeting".to_string())), "greeting");
    }

    #[test]
    fn assign_id_generates_uuid_when_absent() {
        let id = assign_id(None);
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn assign_id_treats_empty_string_as_absent() {
        let id = assign_id(Some(String::new()));
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn assign_id_generates_distinct_ids() {
        assert_ne!(assign_id(None), assign_id(None));
    }
}
