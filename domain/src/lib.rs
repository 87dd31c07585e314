//! Domain model for the Mercado Fresco inventory API.
//!
//! Every resource is a flat [`Record`] keyed by a server-assigned `i64` id.
//! Resources that carry a business key (warehouse code, zip code, card
//! number, ...) expose it through [`Record::unique_value`] so storage and
//! services can guard it without knowing the concrete type. Request shapes
//! (drafts for create, changes for partial update) hang off [`Resource`].

pub mod record;
pub mod report;
pub mod resources;
pub mod validation;

pub use record::{Record, Reference, Resource, UniqueValue};
pub use report::{
    tally, BuyerPurchaseOrdersCount, CarriesByLocality, CountReport, EmployeeInboundOrdersCount,
    InboundOrdersByEmployee, LocalityCarriesCount, LocalitySellersCount, ProductRecordsCount,
    PurchaseOrdersByBuyer, RecordsByProduct, SellersByLocality,
};
pub use resources::*;
pub use validation::ValidationError;
