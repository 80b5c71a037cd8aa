use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::database::store::StoreError;
use serde_json::{json, Value};

#[derive(Debug, Display, Error)]
pub(crate) enum LookupError {
    #[display("orderId parameter is required")]
    MissingOrderId,
    #[display("order not found")]
    OrderNotFound,
    #[display("error accessing data store")]
    StoreAccess(StoreError),
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match *self {
            LookupError::MissingOrderId => StatusCode::BAD_REQUEST,
            LookupError::OrderNotFound => StatusCode::NOT_FOUND,
            LookupError::StoreAccess(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// response body; only store failures expose their cause
    pub fn body(&self) -> Value {
        match self {
            LookupError::StoreAccess(cause) => json!({
                "message": self.to_string(),
                "error": cause.to_string(),
            }),
            _ => json!({ "message": self.to_string() }),
        }
    }
}

impl From<StoreError> for LookupError {
    fn from(e: StoreError) -> Self {
        LookupError::StoreAccess(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(LookupError::MissingOrderId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(LookupError::OrderNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            LookupError::StoreAccess(StoreError::Closed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_cause_is_exposed() {
        let body = LookupError::from(StoreError::Closed).body();
        assert_eq!(
            body.to_string(),
            r#"{"message":"error accessing data store","error":"connection to the data store is closed"}"#
        );
    }

    #[test]
    fn client_errors_carry_only_a_message() {
        assert_eq!(
            LookupError::MissingOrderId.body().to_string(),
            r#"{"message":"orderId parameter is required"}"#
        );
        assert_eq!(LookupError::OrderNotFound.body().to_string(), r#"{"message":"order not found"}"#);
    }
}
