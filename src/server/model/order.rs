use actix_web::web;

/// One stored order record, kept as the store returned it.
pub(crate) type OrderRecord = serde_json::Map<String, serde_json::Value>;

const ORDER_ID_PARAM: &str = "orderId";

/// Query parameters accepted by the lookup endpoint
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct OrderLookupRequest {
    pub order_id: Option<String>,
}

impl OrderLookupRequest {
    #[cfg(test)]
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
        }
    }

    /// Parse a raw query string. A repeated `orderId` resolves to its last
    /// non-empty value; an undecodable query counts as no parameters.
    pub fn from_query_string(query: &str) -> Self {
        let order_id = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_default()
            .into_iter()
            .filter(|(key, value)| key == ORDER_ID_PARAM && !value.is_empty())
            .map(|(_, value)| value)
            .last();
        Self { order_id }
    }

    /// The order id, if present and non-empty.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref().filter(|id| !id.is_empty())
    }
}
