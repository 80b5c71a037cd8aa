use actix_web::http::StatusCode;
use log::{error, info, warn};
use crate::server::controller::error::LookupError;
use crate::server::controller::response::OrderResponse;
use crate::server::database::store::OrderStore;
use crate::server::model::order::{OrderLookupRequest, OrderRecord};
use serde_json::Value;

/// Looks up order records by `orderId` and shapes them into responses.
pub(crate) struct OrderLookupHandler<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderLookupHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every outcome, including store failures, ends up as a response.
    pub async fn handle(&self, request: &OrderLookupRequest) -> OrderResponse {
        info!("received lookup request, orderId={:?}", request.order_id);
        match self.lookup(request).await {
            Ok(records) => OrderResponse::json(
                StatusCode::OK,
                Value::Array(records.into_iter().map(Value::Object).collect()),
            ),
            Err(e) => {
                match &e {
                    LookupError::StoreAccess(cause) => error!("failed to access data store, {}", cause),
                    _ => warn!("lookup rejected, {}", e),
                }
                OrderResponse::json(e.status_code(), e.body())
            }
        }
    }

    async fn lookup(&self, request: &OrderLookupRequest) -> Result<Vec<OrderRecord>, LookupError> {
        let order_id = request.order_id().ok_or(LookupError::MissingOrderId)?;
        let records = self.store.query_by_order_id(order_id).await?;
        if records.is_empty() {
            return Err(LookupError::OrderNotFound);
        }
        Ok(records)
    }
}
