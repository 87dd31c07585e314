//! Generic create/read/update/delete for any resource.

use mercado_domain::{Reference, Resource};

use super::ServiceError;
use crate::persistence::{AnyRepository, Relations, Repository, SqlRecord, Store};

/// CRUD for one resource type over the configured [`Store`].
///
/// Writes are guarded in two places: the service looks the business key up
/// before writing so the common case gets a clean conflict, and the
/// repository re-checks atomically with the write so concurrent requests
/// cannot both succeed.
pub struct ResourceService<'a, E> {
    store: &'a Store,
    repo: AnyRepository<E>,
}

impl<'a, E: Resource + SqlRecord> ResourceService<'a, E> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            repo: store.repository(),
        }
    }

    pub async fn list(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<E, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn create(&self, draft: E::Draft) -> Result<E, ServiceError> {
        let record = E::from_draft(draft);
        record.validate()?;
        self.ensure_unique(&record).await?;
        self.ensure_references(record.references()).await?;

        let created = self.repo.create(record).await?;
        tracing::info!(resource = E::COLLECTION, id = created.id(), "created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, changes: E::Changes) -> Result<E, ServiceError> {
        let current = self.repo.get_by_id(id).await?;
        let mut next = current.clone();
        next.merge(changes);
        next.validate()?;

        if next.unique_value() != current.unique_value() {
            self.ensure_unique(&next).await?;
        }
        let previous = current.references();
        let changed = next
            .references()
            .into_iter()
            .filter(|r| !previous.contains(r))
            .collect();
        self.ensure_references(changed).await?;

        let updated = self.repo.update(next).await?;
        tracing::info!(resource = E::COLLECTION, id, "updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.get_by_id(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(resource = E::COLLECTION, id, "deleted");
        Ok(())
    }

    async fn ensure_unique(&self, record: &E) -> Result<(), ServiceError> {
        let (Some(field), Some(value)) = (E::UNIQUE_FIELD, record.unique_value()) else {
            return Ok(());
        };
        match self.repo.find_by_unique(&value).await? {
            Some(existing) if existing.id() != record.id() => {
                Err(ServiceError::Conflict(format!("{field} already exists")))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_references(&self, references: Vec<Reference>) -> Result<(), ServiceError> {
        for reference in references {
            if !self.store.exists(reference.collection, reference.id).await? {
                return Err(ServiceError::Conflict(format!(
                    "{} with id: {} does not exist",
                    reference.label, reference.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{Database, JsonCatalog};
    use mercado_domain::{
        NewLocality, NewSeller, NewWarehouse, SellerChanges, ValidationError, Warehouse,
        WarehouseChanges,
    };
    use mercado_domain::{Locality, Seller};

    async fn sqlite_store() -> Store {
        Store::Sqlite(Database::new_in_memory().await.unwrap())
    }

    fn json_store(dir: &tempfile::TempDir) -> Store {
        Store::Json(JsonCatalog::new(dir.path().to_path_buf()))
    }

    fn new_warehouse(code: &str) -> NewWarehouse {
        NewWarehouse {
            warehouse_code: code.to_string(),
            address: "Rua das Margaridas".to_string(),
            telephone: "4833334444".to_string(),
            locality_id: 1,
            minimum_capacity: 0,
            minimum_temperature: 0.0,
        }
    }

    fn new_locality(zip: &str) -> NewLocality {
        NewLocality {
            zip_code: zip.to_string(),
            locality_name: "Florianopolis".to_string(),
            province_name: "Santa Catarina".to_string(),
            country_name: "Brasil".to_string(),
        }
    }

    fn new_seller(cid: i64, locality_id: i64) -> NewSeller {
        NewSeller {
            cid,
            company_name: "Hortifruti Sul".to_string(),
            address: "Rua 7 de Setembro 12".to_string(),
            telephone: "4830302020".to_string(),
            locality_id,
        }
    }

    async fn assert_duplicate_create_conflicts(store: &Store) {
        let service = ResourceService::<Warehouse>::new(store);
        let created = service.create(new_warehouse("j753")).await.unwrap();
        assert!(created.id > 0);

        let err = service.create(new_warehouse("j753")).await.unwrap_err();
        match err {
            ServiceError::Conflict(msg) => assert!(msg.contains("warehouse_code")),
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts_sqlite() {
        assert_duplicate_create_conflicts(&sqlite_store().await).await;
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts_json() {
        let dir = tempfile::tempdir().unwrap();
        assert_duplicate_create_conflicts(&json_store(&dir)).await;
    }

    async fn assert_missing_reference_conflicts(store: &Store) {
        let sellers = ResourceService::<Seller>::new(store);
        let err = sellers.create(new_seller(1, 9)).await.unwrap_err();
        match err {
            ServiceError::Conflict(msg) => assert_eq!(msg, "locality with id: 9 does not exist"),
            other => panic!("expected Conflict, got {other:?}"),
        }

        let locality = ResourceService::<Locality>::new(store)
            .create(new_locality("88000-000"))
            .await
            .unwrap();
        let seller = sellers.create(new_seller(1, locality.id)).await.unwrap();
        assert_eq!(seller.locality_id, locality.id);
    }

    #[tokio::test]
    async fn test_missing_reference_conflicts_sqlite() {
        assert_missing_reference_conflicts(&sqlite_store().await).await;
    }

    #[tokio::test]
    async fn test_missing_reference_conflicts_json() {
        let dir = tempfile::tempdir().unwrap();
        assert_missing_reference_conflicts(&json_store(&dir)).await;
    }

    #[tokio::test]
    async fn test_update_keeps_own_key_and_unspecified_fields() {
        let store = sqlite_store().await;
        let service = ResourceService::<Warehouse>::new(&store);
        let created = service.create(new_warehouse("j753")).await.unwrap();

        let updated = service
            .update(
                created.id,
                WarehouseChanges {
                    warehouse_code: Some("j753".to_string()),
                    telephone: Some("4899990000".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.telephone, "4899990000");
        assert_eq!(updated.address, created.address);
        assert_eq!(service.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_to_other_records_key_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let store = json_store(&dir);
        let service = ResourceService::<Warehouse>::new(&store);
        service.create(new_warehouse("a1")).await.unwrap();
        let second = service.create(new_warehouse("b2")).await.unwrap();

        let err = service
            .update(
                second.id,
                WarehouseChanges {
                    warehouse_code: Some("a1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(service.get(second.id).await.unwrap().warehouse_code, "b2");
    }

    #[tokio::test]
    async fn test_update_checks_only_changed_references() {
        let store = sqlite_store().await;
        let locality = ResourceService::<Locality>::new(&store)
            .create(new_locality("88000-000"))
            .await
            .unwrap();
        let sellers = ResourceService::<Seller>::new(&store);
        let seller = sellers.create(new_seller(5, locality.id)).await.unwrap();

        let err = sellers
            .update(
                seller.id,
                SellerChanges {
                    locality_id: Some(77),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref msg) if msg == "locality with id: 77 does not exist"));
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_before_storage() {
        let store = sqlite_store().await;
        let service = ResourceService::<Warehouse>::new(&store);
        let err = service.create(new_warehouse("  ")).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Missing("warehouse_code"))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = sqlite_store().await;
        let service = ResourceService::<Warehouse>::new(&store);
        let created = service.create(new_warehouse("j753")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get(created.id).await,
            Err(ServiceError::NotFound { label: "warehouse", .. })
        ));
        assert!(matches!(
            service.delete(created.id).await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    async fn assert_concurrent_creates_succeed_once(store: Store) {
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                ResourceService::<Warehouse>::new(&store)
                    .create(new_warehouse("race"))
                    .await
            }));
        }

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(ServiceError::Conflict(_)) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(created, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_succeed_once_sqlite() {
        assert_concurrent_creates_succeed_once(sqlite_store().await).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_succeed_once_json() {
        let dir = tempfile::tempdir().unwrap();
        assert_concurrent_creates_succeed_once(json_store(&dir)).await;
    }
}
