//! Cross-table queries: reference checks and child-count reports.

use mercado_domain::{CountReport, Record};
use sqlx::Row;

use super::helpers::qualified_select_list;
use super::records::SqlRecord;
use super::Database;
use crate::persistence::traits::Relations;
use crate::persistence::PersistenceError;

impl Relations for Database {
    async fn exists(&self, collection: &'static str, id: i64) -> Result<bool, PersistenceError> {
        let sql = format!("SELECT COUNT(*) FROM {collection} WHERE id = ?");
        let (count,): (i64,) = sqlx::query_as(&sql).bind(id).fetch_one(self.pool()).await?;
        Ok(count > 0)
    }

    async fn count_children<R>(&self, parent_id: Option<i64>) -> Result<Vec<R::Row>, PersistenceError>
    where
        R: CountReport,
        R::Parent: SqlRecord,
        R::Child: SqlRecord,
    {
        let filter = if parent_id.is_some() {
            "WHERE p.id = ?"
        } else {
            ""
        };
        let sql = format!(
            r#"
            SELECT {}, COUNT(c.id) AS child_count
            FROM {} p
            LEFT JOIN {} c ON c.{} = p.id
            {filter}
            GROUP BY p.id
            ORDER BY p.id
            "#,
            qualified_select_list("p", <R::Parent as SqlRecord>::COLUMNS),
            <R::Parent as Record>::COLLECTION,
            <R::Child as Record>::COLLECTION,
            R::FOREIGN_KEY,
        );

        let mut query = sqlx::query(&sql);
        if let Some(id) = parent_id {
            query = query.bind(id);
        }
        let rows = query.fetch_all(self.pool()).await?;

        if let (Some(id), true) = (parent_id, rows.is_empty()) {
            return Err(PersistenceError::NotFound {
                label: <R::Parent as Record>::LABEL,
                id,
            });
        }

        rows.iter()
            .map(|row| -> Result<R::Row, PersistenceError> {
                let parent = <R::Parent as SqlRecord>::from_row(row)?;
                let count: i64 = row.try_get("child_count")?;
                Ok(R::row(&parent, count))
            })
            .collect()
    }
}
