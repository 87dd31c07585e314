//! Row mapping between the domain records and their SQLite tables.

use mercado_domain::{
    Buyer, Carry, Employee, InboundOrder, Locality, Product, ProductRecord, PurchaseOrder, Record,
    Section, Seller, Warehouse,
};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A record stored in the table named by `Record::COLLECTION`, with an
/// `INTEGER PRIMARY KEY AUTOINCREMENT` column called `id`.
pub trait SqlRecord: Record {
    /// Non-key columns, in the order [`SqlRecord::bind_columns`] binds them.
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

impl SqlRecord for Locality {
    const COLUMNS: &'static [&'static str] =
        &["zip_code", "locality_name", "province_name", "country_name"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.zip_code.clone())
            .bind(self.locality_name.clone())
            .bind(self.province_name.clone())
            .bind(self.country_name.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            zip_code: row.try_get("zip_code")?,
            locality_name: row.try_get("locality_name")?,
            province_name: row.try_get("province_name")?,
            country_name: row.try_get("country_name")?,
        })
    }
}

impl SqlRecord for Seller {
    const COLUMNS: &'static [&'static str] =
        &["cid", "company_name", "address", "telephone", "locality_id"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.cid)
            .bind(self.company_name.clone())
            .bind(self.address.clone())
            .bind(self.telephone.clone())
            .bind(self.locality_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            cid: row.try_get("cid")?,
            company_name: row.try_get("company_name")?,
            address: row.try_get("address")?,
            telephone: row.try_get("telephone")?,
            locality_id: row.try_get("locality_id")?,
        })
    }
}

impl SqlRecord for Warehouse {
    const COLUMNS: &'static [&'static str] = &[
        "warehouse_code",
        "address",
        "telephone",
        "locality_id",
        "minimum_capacity",
        "minimum_temperature",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.warehouse_code.clone())
            .bind(self.address.clone())
            .bind(self.telephone.clone())
            .bind(self.locality_id)
            .bind(self.minimum_capacity)
            .bind(self.minimum_temperature)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            warehouse_code: row.try_get("warehouse_code")?,
            address: row.try_get("address")?,
            telephone: row.try_get("telephone")?,
            locality_id: row.try_get("locality_id")?,
            minimum_capacity: row.try_get("minimum_capacity")?,
            minimum_temperature: row.try_get("minimum_temperature")?,
        })
    }
}

impl SqlRecord for Section {
    const COLUMNS: &'static [&'static str] = &[
        "section_number",
        "current_temperature",
        "minimum_temperature",
        "current_capacity",
        "minimum_capacity",
        "maximum_capacity",
        "warehouse_id",
        "product_type_id",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.section_number)
            .bind(self.current_temperature)
            .bind(self.minimum_temperature)
            .bind(self.current_capacity)
            .bind(self.minimum_capacity)
            .bind(self.maximum_capacity)
            .bind(self.warehouse_id)
            .bind(self.product_type_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            section_number: row.try_get("section_number")?,
            current_temperature: row.try_get("current_temperature")?,
            minimum_temperature: row.try_get("minimum_temperature")?,
            current_capacity: row.try_get("current_capacity")?,
            minimum_capacity: row.try_get("minimum_capacity")?,
            maximum_capacity: row.try_get("maximum_capacity")?,
            warehouse_id: row.try_get("warehouse_id")?,
            product_type_id: row.try_get("product_type_id")?,
        })
    }
}

impl SqlRecord for Product {
    const COLUMNS: &'static [&'static str] = &[
        "product_code",
        "description",
        "width",
        "height",
        "length",
        "net_weight",
        "expiration_rate",
        "recommended_freezing_temperature",
        "freezing_rate",
        "product_type_id",
        "seller_id",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.product_code.clone())
            .bind(self.description.clone())
            .bind(self.width)
            .bind(self.height)
            .bind(self.length)
            .bind(self.net_weight)
            .bind(self.expiration_rate)
            .bind(self.recommended_freezing_temperature)
            .bind(self.freezing_rate)
            .bind(self.product_type_id)
            .bind(self.seller_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            product_code: row.try_get("product_code")?,
            description: row.try_get("description")?,
            width: row.try_get("width")?,
            height: row.try_get("height")?,
            length: row.try_get("length")?,
            net_weight: row.try_get("net_weight")?,
            expiration_rate: row.try_get("expiration_rate")?,
            recommended_freezing_temperature: row.try_get("recommended_freezing_temperature")?,
            freezing_rate: row.try_get("freezing_rate")?,
            product_type_id: row.try_get("product_type_id")?,
            seller_id: row.try_get("seller_id")?,
        })
    }
}

impl SqlRecord for ProductRecord {
    const COLUMNS: &'static [&'static str] =
        &["last_update_date", "purchase_price", "sale_price", "product_id"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.last_update_date.clone())
            .bind(self.purchase_price)
            .bind(self.sale_price)
            .bind(self.product_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            last_update_date: row.try_get("last_update_date")?,
            purchase_price: row.try_get("purchase_price")?,
            sale_price: row.try_get("sale_price")?,
            product_id: row.try_get("product_id")?,
        })
    }
}

impl SqlRecord for Employee {
    const COLUMNS: &'static [&'static str] =
        &["card_number_id", "first_name", "last_name", "warehouse_id"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.card_number_id.clone())
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
            .bind(self.warehouse_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            card_number_id: row.try_get("card_number_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            warehouse_id: row.try_get("warehouse_id")?,
        })
    }
}

impl SqlRecord for InboundOrder {
    const COLUMNS: &'static [&'static str] = &[
        "order_number",
        "order_date",
        "employee_id",
        "product_batch_id",
        "warehouse_id",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.order_number.clone())
            .bind(self.order_date.clone())
            .bind(self.employee_id)
            .bind(self.product_batch_id)
            .bind(self.warehouse_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            order_number: row.try_get("order_number")?,
            order_date: row.try_get("order_date")?,
            employee_id: row.try_get("employee_id")?,
            product_batch_id: row.try_get("product_batch_id")?,
            warehouse_id: row.try_get("warehouse_id")?,
        })
    }
}

impl SqlRecord for Buyer {
    const COLUMNS: &'static [&'static str] = &["card_number_id", "first_name", "last_name"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.card_number_id.clone())
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            card_number_id: row.try_get("card_number_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        })
    }
}

impl SqlRecord for PurchaseOrder {
    const COLUMNS: &'static [&'static str] = &[
        "order_number",
        "order_date",
        "tracking_code",
        "buyer_id",
        "product_record_id",
        "order_status_id",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.order_number.clone())
            .bind(self.order_date.clone())
            .bind(self.tracking_code.clone())
            .bind(self.buyer_id)
            .bind(self.product_record_id)
            .bind(self.order_status_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            order_number: row.try_get("order_number")?,
            order_date: row.try_get("order_date")?,
            tracking_code: row.try_get("tracking_code")?,
            buyer_id: row.try_get("buyer_id")?,
            product_record_id: row.try_get("product_record_id")?,
            order_status_id: row.try_get("order_status_id")?,
        })
    }
}

impl SqlRecord for Carry {
    const COLUMNS: &'static [&'static str] =
        &["cid", "company_name", "address", "telephone", "locality_id"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.cid.clone())
            .bind(self.company_name.clone())
            .bind(self.address.clone())
            .bind(self.telephone.clone())
            .bind(self.locality_id)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            cid: row.try_get("cid")?,
            company_name: row.try_get("company_name")?,
            address: row.try_get("address")?,
            telephone: row.try_get("telephone")?,
            locality_id: row.try_get("locality_id")?,
        })
    }
}
