use actix_web::http::Method;
use actix_web::{web, HttpRequest};
use crate::server::controller::order::OrderLookupHandler;
use crate::server::controller::response::OrderResponse;
use crate::server::database::store::OrderStore;
use crate::server::model::order::OrderLookupRequest;

/// Mount `/orders` for a handler backed by `S`
pub(crate) fn configure<S: OrderStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::get().to(get_orders::<S>))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

/// look up records of the `orderId` query parameter
async fn get_orders<S: OrderStore>(req: HttpRequest, handler: web::Data<OrderLookupHandler<S>>) -> OrderResponse {
    let request = OrderLookupRequest::from_query_string(req.query_string());
    handler.handle(&request).await
}

async fn preflight() -> OrderResponse {
    OrderResponse::preflight()
}
