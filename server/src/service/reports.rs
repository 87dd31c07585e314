//! Child-count reports.

use mercado_domain::CountReport;

use super::ServiceError;
use crate::persistence::{Relations, SqlRecord, Store};

pub struct ReportService<'a> {
    store: &'a Store,
}

impl<'a> ReportService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Counts for every parent, or for `parent_id` alone.
    pub async fn count<R>(&self, parent_id: Option<i64>) -> Result<Vec<R::Row>, ServiceError>
    where
        R: CountReport,
        R::Parent: SqlRecord,
        R::Child: SqlRecord,
    {
        Ok(self.store.count_children::<R>(parent_id).await?)
    }
}
