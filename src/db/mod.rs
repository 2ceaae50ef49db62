// Storage layer for categories and questions

use std::sync::Arc;

use color_eyre::{
    eyre::{ensure, OptionExt},
    Result,
};

mod category;
mod helpers;
mod question;
mod schema;

/// Handle over a local SQLite file (`file:` URL) or a remote Turso
/// database. Cheap to clone; every query opens its own connection.
#[derive(Clone)]
pub struct Db {
    db: Arc<libsql::Database>,
}

impl Db {
    pub async fn new(url: String, auth_token: String) -> Result<Self> {
        let db = if let Some(path) = url.strip_prefix("file:") {
            libsql::Builder::new_local(path).build().await?
        } else {
            libsql::Builder::new_remote(url, auth_token).build().await?
        };

        let conn = db.connect()?;
        verify_connection(&conn).await?;
        schema::create_schema(&conn).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { db: Arc::new(db) })
    }
}

async fn verify_connection(conn: &libsql::Connection) -> Result<()> {
    let one = conn
        .query("SELECT 1", ())
        .await?
        .next()
        .await?
        .ok_or_eyre("connection check returned no rows")?
        .get::<i32>(0)?;
    ensure!(one == 1, "connection check returned {one}");
    Ok(())
}
