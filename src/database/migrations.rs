use tokio_postgres::Client;

// This function applies database migrations, creating the tables used by the service.
pub async fn apply_migrations(client: &Client) -> Result<(), String> {
    create_tables(client).await?;
    Ok(())
}

// This function creates all the necessary tables for the application.
async fn create_tables(client: &Client) -> Result<(), String> {
    // Create the 'messages' table
    let create_messages_table_query = "
        CREATE TABLE IF NOT EXISTS messages (
            id VARCHAR(60) PRIMARY KEY,
            text VARCHAR NOT NULL
        )
    ";
    client
        .execute(create_messages_table_query, &[])
        .await
        .map_err(|e| format!("Error creating messages table: {}", e))?;

    Ok(())
}
