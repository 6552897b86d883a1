// repositories/message_repository.rs

use deadpool_postgres::Client;
use tokio_postgres::Error;

use crate::models::message::Message;

pub struct MessageRepository;

impl MessageRepository {
    /// Inserts a new message into the database
    ///
    /// A duplicate id surfaces the driver's unique-violation error; there are
    /// no upsert semantics.
    pub async fn insert(client: &Client, id: &str, text: &str) -> Result<(), Error> {
        let query = "
            INSERT INTO messages (id, text)
            VALUES ($1, $2)
        ";
        client.execute(query, &[&id, &text]).await?;
        Ok(())
    }

    /// Fetches all messages
    pub async fn find_all(client: &Client) -> Result<Vec<Message>, Error> {
        let query = "
            SELECT id, text
            FROM messages
        ";
        let rows = client.query(query, &[]).await?;

        let messages = rows
            .iter()
            .map(|row| Message {
                id: row.get(0),
                text: row.get(1),
            })
            .collect();

        Ok(messages)
    }

    /// Fetches the messages matching an id
    ///
    /// The id is the primary key, so the result holds zero or one rows. A
    /// missing row yields an empty vec, not an error.
    pub async fn find_by_id(client: &Client, id: &str) -> Result<Vec<Message>, Error> {
        let query = "
            SELECT id, text
            FROM messages
            WHERE id = $1
        ";
        let rows = client.query(query, &[&id]).await?;

        let messages = rows
            .iter()
            .map(|row| Message {
                id: row.get(0),
                text: row.get(1),
            })
            .collect();

        Ok(messages)
    }
}
