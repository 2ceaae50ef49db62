use color_eyre::{eyre::OptionExt, Result};
use libsql::params::IntoParams;
use serde::de::DeserializeOwned;

/// Run a query and map every row into `T` with `libsql::de::from_row`.
pub async fn query_all<T: DeserializeOwned>(
    conn: &libsql::Connection,
    sql: &str,
    params: impl IntoParams,
) -> Result<Vec<T>> {
    let mut rows = conn.query(sql, params).await?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(libsql::de::from_row::<T>(&row)?);
    }
    Ok(out)
}

/// Run a query expected to yield exactly one row (e.g. `INSERT ...
/// RETURNING`) and map it into `T`. An empty result set is an error.
pub async fn query_one<T: DeserializeOwned>(
    conn: &libsql::Connection,
    sql: &str,
    params: impl IntoParams,
) -> Result<T> {
    let row = conn
        .query(sql, params)
        .await?
        .next()
        .await?
        .ok_or_eyre("query returned no rows")?;
    Ok(libsql::de::from_row::<T>(&row)?)
}
