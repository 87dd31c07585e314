mod buyer;
mod carry;
mod employee;
mod inbound_order;
mod locality;
mod product;
mod product_record;
mod purchase_order;
mod section;
mod seller;
mod warehouse;

pub use buyer::{Buyer, BuyerChanges, NewBuyer};
pub use carry::{Carry, CarryChanges, NewCarry};
pub use employee::{Employee, EmployeeChanges, NewEmployee};
pub use inbound_order::{InboundOrder, InboundOrderChanges, NewInboundOrder};
pub use locality::{Locality, LocalityChanges, NewLocality};
pub use product::{NewProduct, Product, ProductChanges};
pub use product_record::{NewProductRecord, ProductRecord, ProductRecordChanges};
pub use purchase_order::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderChanges};
pub use section::{NewSection, Section, SectionChanges};
pub use seller::{NewSeller, Seller, SellerChanges};
pub use warehouse::{NewWarehouse, Warehouse, WarehouseChanges};
