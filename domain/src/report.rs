//! Child-count reports: how many records of one collection point at each
//! record of another.
//!
//! A report type names the parent and child collections, the foreign-key
//! column on the child, and how to shape one output row. Storage backends
//! compute the counts (SQL with `LEFT JOIN ... GROUP BY`, files with
//! [`tally`]); nothing is cached.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::{Buyer, Carry, Employee, InboundOrder, Locality, Product, ProductRecord, PurchaseOrder, Seller};

pub trait CountReport: Send + Sync + 'static {
    type Parent: Record;
    type Child: Record;
    type Row: Serialize + Send + 'static;

    /// Column on the child collection holding the parent id.
    const FOREIGN_KEY: &'static str;

    fn parent_of(child: &Self::Child) -> i64;

    fn row(parent: &Self::Parent, count: i64) -> Self::Row;
}

/// Count children per parent in memory. Parents with no children get a zero
/// row; output follows the order of `parents`.
pub fn tally<R: CountReport>(parents: &[R::Parent], children: &[R::Child]) -> Vec<R::Row> {
    parents
        .iter()
        .map(|parent| {
            let count = children
                .iter()
                .filter(|child| R::parent_of(child) == parent.id())
                .count();
            R::row(parent, count as i64)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalitySellersCount {
    pub locality_id: i64,
    pub locality_name: String,
    pub sellers_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalityCarriesCount {
    pub locality_id: i64,
    pub locality_name: String,
    pub carries_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerPurchaseOrdersCount {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInboundOrdersCount {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
    pub inbound_orders_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecordsCount {
    pub product_id: i64,
    pub description: String,
    pub records_count: i64,
}

pub enum SellersByLocality {}

impl CountReport for SellersByLocality {
    type Parent = Locality;
    type Child = Seller;
    type Row = LocalitySellersCount;
    const FOREIGN_KEY: &'static str = "locality_id";

    fn parent_of(child: &Seller) -> i64 {
        child.locality_id
    }

    fn row(parent: &Locality, count: i64) -> LocalitySellersCount {
        LocalitySellersCount {
            locality_id: parent.id,
            locality_name: parent.locality_name.clone(),
            sellers_count: count,
        }
    }
}

pub enum CarriesByLocality {}

impl CountReport for CarriesByLocality {
    type Parent = Locality;
    type Child = Carry;
    type Row = LocalityCarriesCount;
    const FOREIGN_KEY: &'static str = "locality_id";

    fn parent_of(child: &Carry) -> i64 {
        child.locality_id
    }

    fn row(parent: &Locality, count: i64) -> LocalityCarriesCount {
        LocalityCarriesCount {
            locality_id: parent.id,
            locality_name: parent.locality_name.clone(),
            carries_count: count,
        }
    }
}

pub enum PurchaseOrdersByBuyer {}

impl CountReport for PurchaseOrdersByBuyer {
    type Parent = Buyer;
    type Child = PurchaseOrder;
    type Row = BuyerPurchaseOrdersCount;
    const FOREIGN_KEY: &'static str = "buyer_id";

    fn parent_of(child: &PurchaseOrder) -> i64 {
        child.buyer_id
    }

    fn row(parent: &Buyer, count: i64) -> BuyerPurchaseOrdersCount {
        BuyerPurchaseOrdersCount {
            id: parent.id,
            card_number_id: parent.card_number_id.clone(),
            first_name: parent.first_name.clone(),
            last_name: parent.last_name.clone(),
            purchase_orders_count: count,
        }
    }
}

pub enum InboundOrdersByEmployee {}

impl CountReport for InboundOrdersByEmployee {
    type Parent = Employee;
    type Child = InboundOrder;
    type Row = EmployeeInboundOrdersCount;
    const FOREIGN_KEY: &'static str = "employee_id";

    fn parent_of(child: &InboundOrder) -> i64 {
        child.employee_id
    }

    fn row(parent: &Employee, count: i64) -> EmployeeInboundOrdersCount {
        EmployeeInboundOrdersCount {
            id: parent.id,
            card_number_id: parent.card_number_id.clone(),
            first_name: parent.first_name.clone(),
            last_name: parent.last_name.clone(),
            warehouse_id: parent.warehouse_id,
            inbound_orders_count: count,
        }
    }
}

pub enum RecordsByProduct {}

impl CountReport for RecordsByProduct {
    type Parent = Product;
    type Child = ProductRecord;
    type Row = ProductRecordsCount;
    const FOREIGN_KEY: &'static str = "product_id";

    fn parent_of(child: &ProductRecord) -> i64 {
        child.product_id
    }

    fn row(parent: &Product, count: i64) -> ProductRecordsCount {
        ProductRecordsCount {
            product_id: parent.id,
            description: parent.description.clone(),
            records_count: count,
        }
    }
}
