use crate::server::model::order::OrderRecord;
use derive_more::{Display, Error};
use log::debug;
use serde_json::Value;
use tokio_postgres::Client;

#[derive(Debug, Display, Error)]
pub(crate) enum StoreError {
    #[display("{_0}")]
    Db(tokio_postgres::Error),
    #[display("connection to the data store is closed")]
    Closed,
    #[display("record for orderId={order_id} is not a JSON object")]
    MalformedRecord {
        #[error(not(source))]
        order_id: String,
    },
}

/// Backing store of order records, looked up by partition key `orderId`.
pub(crate) trait OrderStore: Send + Sync + 'static {
    /// All records sharing `order_id`, ordered by sort key. Empty when none match.
    async fn query_by_order_id(&self, order_id: &str) -> Result<Vec<OrderRecord>, StoreError>;
}

/// Created by the embedded migrations, see `migrations/V1__create_orders.sql`.
const SELECT_BY_ORDER_ID: &str = "SELECT record FROM orders WHERE order_id = $1 ORDER BY sort_key";

/// [`OrderStore`] over the `orders` table.
pub(crate) struct PgOrderStore {
    client: Client,
}

impl PgOrderStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl OrderStore for PgOrderStore {
    async fn query_by_order_id(&self, order_id: &str) -> Result<Vec<OrderRecord>, StoreError> {
        if self.client.is_closed() {
            return Err(StoreError::Closed);
        }
        let rows = self
            .client
            .query(SELECT_BY_ORDER_ID, &[&order_id])
            .await
            .map_err(StoreError::Db)?;
        debug!("orderId={} matched {} rows", order_id, rows.len());

        rows.into_iter()
            .map(|row| -> Result<OrderRecord, StoreError> {
                match row.try_get::<_, Value>("record").map_err(StoreError::Db)? {
                    Value::Object(record) => Ok(record),
                    _ => Err(StoreError::MalformedRecord {
                        order_id: order_id.to_string(),
                    }),
                }
            })
            .collect()
    }
}

// for test
#[cfg(test)]
pub(crate) use mock::MockStore;

#[cfg(test)]
mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// in-memory store, optionally failing every query
    #[derive(Default)]
    pub(crate) struct MockStore {
        records: HashMap<String, Vec<OrderRecord>>,
        failing: bool,
        calls: AtomicUsize,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn with_record(mut self, record: Value) -> Self {
            let Value::Object(record) = record else {
                panic!("mock records must be objects");
            };
            let order_id = record
                .get("orderId")
                .and_then(Value::as_str)
                .expect("mock records need an orderId")
                .to_string();
            self.records.entry(order_id).or_default().push(record);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl OrderStore for MockStore {
        async fn query_by_order_id(&self, order_id: &str) -> Result<Vec<OrderRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing {
                return Err(StoreError::Closed);
            }
            Ok(self.records.get(order_id).cloned().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_targets_the_migrated_table() {
        let migration = include_str!("migrations/V1__create_orders.sql");
        assert!(migration.contains("CREATE TABLE IF NOT EXISTS orders ("));
        for column in ["order_id TEXT", "sort_key TEXT", "record JSON"] {
            assert!(migration.contains(column), "column={column}");
        }
        assert!(SELECT_BY_ORDER_ID.contains("FROM orders "));
    }

    #[test]
    fn malformed_record_names_the_order() {
        let e = StoreError::MalformedRecord {
            order_id: "abc123".to_string(),
        };
        assert_eq!(e.to_string(), "record for orderId=abc123 is not a JSON object");
    }

    #[tokio::test]
    async fn mock_store_groups_by_order_id() {
        let store = MockStore::new()
            .with_record(json!({"orderId": "a", "line": 1}))
            .with_record(json!({"orderId": "b", "line": 1}))
            .with_record(json!({"orderId": "a", "line": 2}));

        let records = store.query_by_order_id("a").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["line"], json!(2));
        assert!(store.query_by_order_id("c").await.unwrap().is_empty());
        assert_eq!(store.calls(), 2);
    }
}
