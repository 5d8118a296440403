// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recent-search history operations.

use chrono::{SecondsFormat, Utc};
use gutenlens_core::GutenlensError;
use rusqlite::params;

use crate::database::Database;
use crate::models::SearchedBook;

/// Default number of rows returned by a recent-search listing.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Append a search record with a server-assigned timestamp.
///
/// The identifier is stored exactly as supplied; repeated lookups of the
/// same book create duplicate rows.
pub async fn record_search(db: &Database, book_id: &str) -> Result<(), GutenlensError> {
    let book_id = book_id.to_string();
    let search_date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO searched_books (book_id, search_date) VALUES (?1, ?2)",
                params![book_id, search_date],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Return the most recent `limit` search records, newest first.
///
/// Rows with equal timestamps fall back to insertion order (id) so the
/// listing stays stable under rapid consecutive inserts.
pub async fn recent_searches(
    db: &Database,
    limit: i64,
) -> Result<Vec<SearchedBook>, GutenlensError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, book_id, search_date FROM searched_books
                 ORDER BY search_date DESC, id DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(SearchedBook {
                    id: row.get(0)?,
                    book_id: row.get(1)?,
                    search_date: row.get(2)?,
                })
            })?;
            let mut searches = Vec::new();
            for row in rows {
                searches.push(row?);
            }
            Ok(searches)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
