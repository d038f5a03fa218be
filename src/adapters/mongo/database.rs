//! MongoDB connection wrapper: connect, index setup, health check.

use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};

use crate::domain::member::MemberError;

use super::member_repository::MemberDocument;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, MemberError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri)
            .await
            .map_err(|e| MemberError::infrastructure(format!("MongoDB connect failed: {e}")))?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB connection established");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), MemberError> {
        let members = self.members();

        // Listing is always newest-first
        let created_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();
        members
            .create_index(created_index, None)
            .await
            .map_err(|e| MemberError::infrastructure(format!("index creation failed: {e}")))?;
        tracing::info!("Created index on members.created_at");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name("email_lookup".to_string())
                    .build(),
            )
            .build();
        members
            .create_index(email_index, None)
            .await
            .map_err(|e| MemberError::infrastructure(format!("index creation failed: {e}")))?;
        tracing::info!("Created index on members.email");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), MemberError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| MemberError::infrastructure(format!("MongoDB ping failed: {e}")))?;
        Ok(())
    }

    pub fn members(&self) -> Collection<MemberDocument> {
        self.db.collection("members")
    }
}
