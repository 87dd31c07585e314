//! SQL fragment builders and error classification shared by the SQLite
//! repositories.
//!
//! Table and column names only ever come from `&'static str` constants on
//! the record types, never from request input.

use super::records::SqliteQuery;
use mercado_domain::UniqueValue;

/// `id, a, b` for a plain `SELECT`.
pub fn select_list(columns: &[&str]) -> String {
    std::iter::once("id")
        .chain(columns.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `p.id AS id, p.a AS a` so joined rows keep the parent's column names.
pub fn qualified_select_list(alias: &str, columns: &[&str]) -> String {
    std::iter::once("id")
        .chain(columns.iter().copied())
        .map(|c| format!("{alias}.{c} AS {c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `?, ?, ?` with one placeholder per column.
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// `a = ?, b = ?` for an `UPDATE ... SET`.
pub fn assignments(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn bind_unique<'q>(query: SqliteQuery<'q>, value: &UniqueValue) -> SqliteQuery<'q> {
    match value {
        UniqueValue::Int(v) => query.bind(*v),
        UniqueValue::Text(v) => query.bind(v.clone()),
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
