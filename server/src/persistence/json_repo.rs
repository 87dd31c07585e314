//! Flat-file backend: one JSON array per collection under a data directory.

use super::traits::{Relations, Repository};
use super::{JsonStore, PersistenceError, SqlRecord};
use dashmap::DashMap;
use mercado_domain::{tally, CountReport, Record, UniqueValue};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The set of JSON collections in one data directory.
///
/// Holds one mutex per collection file. Every read-modify-write on a file
/// runs under its mutex; plain reads do not take it.
#[derive(Clone)]
pub struct JsonCatalog {
    dir: PathBuf,
    locks: Arc<DashMap<&'static str, Arc<Mutex<()>>>>,
}

impl JsonCatalog {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            locks: Arc::new(DashMap::new()),
        }
    }

    fn lock_for(&self, collection: &'static str) -> Arc<Mutex<()>> {
        Arc::clone(&self.locks.entry(collection).or_default())
    }

    pub fn repository<E: Record>(&self) -> JsonRepository<E> {
        JsonRepository {
            store: JsonStore::new(&self.dir, E::COLLECTION),
            lock: self.lock_for(E::COLLECTION),
        }
    }
}

/// JSON-file implementation of [`Repository`].
///
/// Ids are assigned as max+1 over the current file contents.
pub struct JsonRepository<E> {
    store: JsonStore<E>,
    lock: Arc<Mutex<()>>,
}

/// Reject `candidate` if another record already holds its business key.
fn ensure_unique<E: Record>(records: &[E], candidate: &E) -> Result<(), PersistenceError> {
    let (Some(field), Some(value)) = (E::UNIQUE_FIELD, candidate.unique_value()) else {
        return Ok(());
    };
    let taken = records
        .iter()
        .any(|r| r.id() != candidate.id() && r.unique_value().as_ref() == Some(&value));
    if taken {
        return Err(PersistenceError::Duplicate { field, value });
    }
    Ok(())
}

impl<E: Record> Repository<E> for JsonRepository<E> {
    async fn get_all(&self) -> Result<Vec<E>, PersistenceError> {
        self.store.load_all()
    }

    async fn get_by_id(&self, id: i64) -> Result<E, PersistenceError> {
        self.store
            .load_all()?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or(PersistenceError::NotFound { label: E::LABEL, id })
    }

    async fn find_by_unique(&self, value: &UniqueValue) -> Result<Option<E>, PersistenceError> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .find(|r| r.unique_value().as_ref() == Some(value)))
    }

    async fn create(&self, mut record: E) -> Result<E, PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut records = self.store.load_all()?;
        ensure_unique(&records, &record)?;

        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        record.assign_id(next_id);
        records.push(record.clone());
        self.store.save_all(&records)?;
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E, PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut records = self.store.load_all()?;
        ensure_unique(&records, &record)?;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or(PersistenceError::NotFound {
                label: E::LABEL,
                id: record.id(),
            })?;
        *slot = record.clone();
        self.store.save_all(&records)?;
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut records = self.store.load_all()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(PersistenceError::NotFound { label: E::LABEL, id });
        }
        self.store.save_all(&records)
    }
}

impl Relations for JsonCatalog {
    async fn exists(&self, collection: &'static str, id: i64) -> Result<bool, PersistenceError> {
        let store = JsonStore::<serde_json::Value>::new(&self.dir, collection);
        Ok(store
            .load_all()?
            .iter()
            .any(|item| item.get("id").and_then(serde_json::Value::as_i64) == Some(id)))
    }

    async fn count_children<R>(&self, parent_id: Option<i64>) -> Result<Vec<R::Row>, PersistenceError>
    where
        R: CountReport,
        R::Parent: SqlRecord,
        R::Child: SqlRecord,
    {
        let mut parents = JsonStore::<R::Parent>::new(&self.dir, <R::Parent as Record>::COLLECTION)
            .load_all()?;
        if let Some(id) = parent_id {
            parents.retain(|p| p.id() == id);
            if parents.is_empty() {
                return Err(PersistenceError::NotFound {
                    label: <R::Parent as Record>::LABEL,
                    id,
                });
            }
        }
        let children =
            JsonStore::<R::Child>::new(&self.dir, <R::Child as Record>::COLLECTION).load_all()?;
        Ok(tally::<R>(&parents, &children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercado_domain::{Locality, Seller, SellersByLocality, Warehouse};

    fn warehouse(code: &str) -> Warehouse {
        Warehouse {
            id: 0,
            warehouse_code: code.to_string(),
            address: "Rua das Margaridas".to_string(),
            telephone: "4833334444".to_string(),
            locality_id: 1,
            minimum_capacity: 0,
            minimum_temperature: 0.0,
        }
    }

    fn locality(zip: &str, name: &str) -> Locality {
        Locality {
            id: 0,
            zip_code: zip.to_string(),
            locality_name: name.to_string(),
            province_name: "SC".to_string(),
            country_name: "Brasil".to_string(),
        }
    }

    fn seller(cid: i64, locality_id: i64) -> Seller {
        Seller {
            id: 0,
            cid,
            company_name: format!("Seller {cid}"),
            address: "Rua 1".to_string(),
            telephone: "4800000000".to_string(),
            locality_id,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCatalog::new(dir.path().to_path_buf()).repository::<Warehouse>();

        let a = repo.create(warehouse("a1")).await.unwrap();
        let b = repo.create(warehouse("b2")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        repo.delete(1).await.unwrap();
        let c = repo.create(warehouse("c3")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_get_all_on_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCatalog::new(dir.path().to_path_buf()).repository::<Warehouse>();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_code_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCatalog::new(dir.path().to_path_buf()).repository::<Warehouse>();
        repo.create(warehouse("j753")).await.unwrap();

        let err = repo.create(warehouse("j753")).await.unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::Duplicate {
                field: "warehouse_code",
                ..
            }
        ));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_own_code() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCatalog::new(dir.path().to_path_buf()).repository::<Warehouse>();
        let mut stored = repo.create(warehouse("j753")).await.unwrap();

        stored.address = "Rua Nova".to_string();
        let updated = repo.update(stored.clone()).await.unwrap();
        assert_eq!(updated, stored);
        assert_eq!(repo.get_by_id(stored.id).await.unwrap().address, "Rua Nova");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCatalog::new(dir.path().to_path_buf()).repository::<Warehouse>();
        let mut ghost = warehouse("x");
        ghost.id = 40;

        assert!(matches!(
            repo.update(ghost).await,
            Err(PersistenceError::NotFound { id: 40, .. })
        ));
        assert!(matches!(
            repo.delete(40).await,
            Err(PersistenceError::NotFound { id: 40, .. })
        ));
    }

    #[tokio::test]
    async fn test_find_by_unique() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonCatalog::new(dir.path().to_path_buf()).repository::<Warehouse>();
        let stored = repo.create(warehouse("j753")).await.unwrap();

        let found = repo
            .find_by_unique(&UniqueValue::Text("j753".to_string()))
            .await
            .unwrap();
        assert_eq!(found, Some(stored));
        assert_eq!(
            repo.find_by_unique(&UniqueValue::Text("zzz".to_string()))
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_exists_reads_any_collection() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonCatalog::new(dir.path().to_path_buf());
        catalog
            .repository::<Locality>()
            .create(locality("88000-000", "Florianopolis"))
            .await
            .unwrap();

        assert!(catalog.exists("localities", 1).await.unwrap());
        assert!(!catalog.exists("localities", 2).await.unwrap());
        assert!(!catalog.exists("sellers", 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_count_children() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonCatalog::new(dir.path().to_path_buf());
        let localities = catalog.repository::<Locality>();
        let floripa = localities
            .create(locality("88000-000", "Florianopolis"))
            .await
            .unwrap();
        let joinville = localities
            .create(locality("89200-000", "Joinville"))
            .await
            .unwrap();
        let sellers = catalog.repository::<Seller>();
        sellers.create(seller(1, floripa.id)).await.unwrap();
        sellers.create(seller(2, floripa.id)).await.unwrap();

        let all = catalog
            .count_children::<SellersByLocality>(None)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].sellers_count, 2);
        assert_eq!(all[1].locality_id, joinville.id);
        assert_eq!(all[1].sellers_count, 0);

        let one = catalog
            .count_children::<SellersByLocality>(Some(joinville.id))
            .await
            .unwrap();
        assert_eq!(one.len(), 1);

        assert!(matches!(
            catalog.count_children::<SellersByLocality>(Some(99)).await,
            Err(PersistenceError::NotFound { id: 99, .. })
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_admit_one_code() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonCatalog::new(dir.path().to_path_buf());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = catalog.repository::<Warehouse>();
            handles.push(tokio::spawn(async move { repo.create(warehouse("race")).await }));
        }
        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(catalog.repository::<Warehouse>().get_all().await.unwrap().len(), 1);
    }
}
