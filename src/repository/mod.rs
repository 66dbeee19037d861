//! Repository layer for database operations

pub mod books;

use mongodb::{bson::doc, options::ClientOptions, Client, Database};

use crate::{config::DatabaseConfig, error::AppResult};

/// Connect to MongoDB and verify the connection.
///
/// The driver connects lazily, so a `ping` is issued here to force the
/// connection: the caller must not start serving traffic unless this
/// returns successfully.
pub async fn connect(config: &DatabaseConfig) -> AppResult<Database> {
    let mut options = ClientOptions::parse(&config.url).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    let db = client.database(&config.name);

    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}

/// Main repository struct holding the database handle
#[derive(Clone)]
pub struct Repository {
    pub db: Database,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database handle
    pub fn new(db: Database) -> Self {
        Self {
            books: books::BooksRepository::new(&db),
            db,
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
