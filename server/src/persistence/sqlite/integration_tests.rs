use mercado_domain::{
    Buyer, BuyerPurchaseOrdersCount, Carry, CarriesByLocality, Employee, InboundOrder,
    InboundOrdersByEmployee, Locality, LocalitySellersCount, Product, ProductRecord,
    PurchaseOrder, PurchaseOrdersByBuyer, Record, RecordsByProduct, Seller, SellersByLocality,
};

use super::{Database, SqliteRepository};
use crate::persistence::traits::{Relations, Repository};
use crate::persistence::PersistenceError;

fn locality(zip: &str, name: &str) -> Locality {
    Locality {
        id: 0,
        zip_code: zip.to_string(),
        locality_name: name.to_string(),
        province_name: "Santa Catarina".to_string(),
        country_name: "Brasil".to_string(),
    }
}

fn seller(cid: i64, locality_id: i64) -> Seller {
    Seller {
        id: 0,
        cid,
        company_name: format!("Seller {cid}"),
        address: "Rua das Flores 10".to_string(),
        telephone: "4830301010".to_string(),
        locality_id,
    }
}

fn buyer(card: &str) -> Buyer {
    Buyer {
        id: 0,
        card_number_id: card.to_string(),
        first_name: "Maria".to_string(),
        last_name: "Silva".to_string(),
    }
}

fn purchase_order(number: &str, buyer_id: i64) -> PurchaseOrder {
    PurchaseOrder {
        id: 0,
        order_number: number.to_string(),
        order_date: "2021-04-04".to_string(),
        tracking_code: "abscf123".to_string(),
        buyer_id,
        product_record_id: 1,
        order_status_id: 1,
    }
}

async fn create<E: super::SqlRecord>(db: &Database, record: E) -> E {
    SqliteRepository::<E>::new(db.pool().clone())
        .create(record)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_exists_checks_the_named_table() {
    let db = Database::new_in_memory().await.unwrap();
    let loc = create(&db, locality("88000-000", "Florianopolis")).await;

    assert!(db.exists(Locality::COLLECTION, loc.id).await.unwrap());
    assert!(!db.exists(Locality::COLLECTION, loc.id + 1).await.unwrap());
    assert!(!db.exists(Seller::COLLECTION, loc.id).await.unwrap());
}

#[tokio::test]
async fn test_sellers_by_locality_counts_zero_rows() {
    let db = Database::new_in_memory().await.unwrap();
    let floripa = create(&db, locality("88000-000", "Florianopolis")).await;
    let joinville = create(&db, locality("89200-000", "Joinville")).await;
    create(&db, seller(1, floripa.id)).await;
    create(&db, seller(2, floripa.id)).await;

    let rows = db.count_children::<SellersByLocality>(None).await.unwrap();
    assert_eq!(
        rows,
        vec![
            LocalitySellersCount {
                locality_id: floripa.id,
                locality_name: "Florianopolis".to_string(),
                sellers_count: 2,
            },
            LocalitySellersCount {
                locality_id: joinville.id,
                locality_name: "Joinville".to_string(),
                sellers_count: 0,
            },
        ]
    );
}

#[tokio::test]
async fn test_report_filtered_to_one_parent() {
    let db = Database::new_in_memory().await.unwrap();
    let first = create(&db, buyer("111")).await;
    let second = create(&db, buyer("222")).await;
    create(&db, purchase_order("po-1", second.id)).await;
    create(&db, purchase_order("po-2", second.id)).await;
    create(&db, purchase_order("po-3", first.id)).await;

    let rows = db
        .count_children::<PurchaseOrdersByBuyer>(Some(second.id))
        .await
        .unwrap();
    assert_eq!(
        rows,
        vec![BuyerPurchaseOrdersCount {
            id: second.id,
            card_number_id: "222".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Silva".to_string(),
            purchase_orders_count: 2,
        }]
    );
}

#[tokio::test]
async fn test_report_for_missing_parent_is_not_found() {
    let db = Database::new_in_memory().await.unwrap();
    let err = db
        .count_children::<CarriesByLocality>(Some(5))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::NotFound { label: "locality", id: 5 }
    ));
}

#[tokio::test]
async fn test_report_on_empty_tables_is_empty() {
    let db = Database::new_in_memory().await.unwrap();
    assert!(db
        .count_children::<InboundOrdersByEmployee>(None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_inbound_orders_by_employee_keeps_warehouse() {
    let db = Database::new_in_memory().await.unwrap();
    let employee = create(
        &db,
        Employee {
            id: 0,
            card_number_id: "E-01".to_string(),
            first_name: "Joao".to_string(),
            last_name: "Pereira".to_string(),
            warehouse_id: 3,
        },
    )
    .await;
    create(
        &db,
        InboundOrder {
            id: 0,
            order_number: "io-1".to_string(),
            order_date: "2022-01-10".to_string(),
            employee_id: employee.id,
            product_batch_id: 4,
            warehouse_id: 3,
        },
    )
    .await;

    let rows = db
        .count_children::<InboundOrdersByEmployee>(None)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].warehouse_id, 3);
    assert_eq!(rows[0].inbound_orders_count, 1);
}

#[tokio::test]
async fn test_records_by_product_with_float_columns() {
    let db = Database::new_in_memory().await.unwrap();
    let product = create(
        &db,
        Product {
            id: 0,
            product_code: "P-100".to_string(),
            description: "Queijo minas".to_string(),
            width: 1.5,
            height: 2.25,
            length: 3.0,
            net_weight: 0.5,
            expiration_rate: 0.7,
            recommended_freezing_temperature: -18.0,
            freezing_rate: 0.3,
            product_type_id: 2,
            seller_id: 1,
        },
    )
    .await;
    for date in ["2022-01-01", "2022-02-01"] {
        create(
            &db,
            ProductRecord {
                id: 0,
                last_update_date: date.to_string(),
                purchase_price: 10.5,
                sale_price: 15.0,
                product_id: product.id,
            },
        )
        .await;
    }

    let loaded = SqliteRepository::<Product>::new(db.pool().clone())
        .get_by_id(product.id)
        .await
        .unwrap();
    assert_eq!(loaded, product);

    let rows = db
        .count_children::<RecordsByProduct>(Some(product.id))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Queijo minas");
    assert_eq!(rows[0].records_count, 2);
}

#[tokio::test]
async fn test_carries_text_cid_is_unique() {
    let db = Database::new_in_memory().await.unwrap();
    let repo = SqliteRepository::<Carry>::new(db.pool().clone());
    let carry = Carry {
        id: 0,
        cid: "CID-9".to_string(),
        company_name: "Transportes Sul".to_string(),
        address: "Rod. BR-101 km 200".to_string(),
        telephone: "4732321212".to_string(),
        locality_id: 1,
    };
    repo.create(carry.clone()).await.unwrap();
    assert!(matches!(
        repo.create(carry).await,
        Err(PersistenceError::Duplicate { field: "cid", .. })
    ));
}

#[tokio::test]
async fn test_deleting_child_updates_report() {
    let db = Database::new_in_memory().await.unwrap();
    let loc = create(&db, locality("01000-000", "Sao Paulo")).await;
    let s = create(&db, seller(10, loc.id)).await;

    SqliteRepository::<Seller>::new(db.pool().clone())
        .delete(s.id)
        .await
        .unwrap();

    let rows = db
        .count_children::<SellersByLocality>(Some(loc.id))
        .await
        .unwrap();
    assert_eq!(rows[0].sellers_count, 0);
}
