//! HTTP surface: `/api/v1/<resource>` CRUD routes, child-count reports and
//! a health probe.

mod auth;
mod handlers;
mod response;

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use mercado_domain::{
    Buyer, CarriesByLocality, Carry, Employee, InboundOrder, InboundOrdersByEmployee, Locality,
    Product, ProductRecord, PurchaseOrder, PurchaseOrdersByBuyer, RecordsByProduct, Resource,
    Section, Seller, SellersByLocality, Warehouse,
};
use tower_http::trace::TraceLayer;

use crate::persistence::{SqlRecord, Store};
use handlers::{
    create, destroy, health, list, method_not_allowed, not_found, report, show, update,
};

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// When set, every `/api/v1` request must carry it in the `token` header.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(store: Store, api_token: Option<String>) -> Self {
        Self {
            store,
            api_token: api_token.map(Arc::from),
        }
    }
}

/// Collection and item routes for one resource.
fn crud<E: Resource + SqlRecord>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(path, get(list::<E>).post(create::<E>))
        .route(
            &format!("{path}/:id"),
            get(show::<E>)
                .patch(update::<E>)
                .put(update::<E>)
                .delete(destroy::<E>),
        )
}

pub fn app(state: AppState) -> Router {
    let mut api = Router::new();
    api = crud::<Warehouse>(api, "/api/v1/warehouses");
    api = crud::<Section>(api, "/api/v1/sections");
    api = crud::<Product>(api, "/api/v1/products");
    api = crud::<ProductRecord>(api, "/api/v1/productRecords");
    api = crud::<Employee>(api, "/api/v1/employees");
    api = crud::<Buyer>(api, "/api/v1/buyers");
    api = crud::<Seller>(api, "/api/v1/sellers");
    api = crud::<Locality>(api, "/api/v1/localities");
    api = crud::<Carry>(api, "/api/v1/carries");
    api = crud::<InboundOrder>(api, "/api/v1/inboundOrders");
    api = crud::<PurchaseOrder>(api, "/api/v1/purchaseOrders");

    let api = api
        .route(
            "/api/v1/localities/reportSellers",
            get(report::<SellersByLocality>),
        )
        .route(
            "/api/v1/localities/reportCarries",
            get(report::<CarriesByLocality>),
        )
        .route(
            "/api/v1/buyers/reportPurchaseOrders",
            get(report::<PurchaseOrdersByBuyer>),
        )
        .route(
            "/api/v1/employees/reportInboundOrders",
            get(report::<InboundOrdersByEmployee>),
        )
        .route(
            "/api/v1/products/reportRecords",
            get(report::<RecordsByProduct>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
