use color_eyre::Result;
use libsql::params;

use super::helpers::{query_all, query_one};
use super::Db;
use crate::models::Category;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let conn = self.db.connect()?;
        query_all(&conn, "SELECT id, type FROM categories ORDER BY id", ()).await
    }

    /// Categories are reference data with no HTTP surface; this exists for
    /// seeding and tests.
    pub async fn create_category(&self, kind: &str) -> Result<Category> {
        let conn = self.db.connect()?;
        let category = query_one::<Category>(
            &conn,
            "INSERT INTO categories (type) VALUES (?) RETURNING id, type",
            params![kind],
        )
        .await?;

        tracing::info!(
            "new category created: id={}, type={}",
            category.id,
            category.kind
        );
        Ok(category)
    }
}
