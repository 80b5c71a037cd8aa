use anyhow::{Context, Error};
use log::{error, info};
use tokio_postgres::{Client, NoTls};

/// Open the store connection and drive it in the background.
pub(crate) async fn connect(conn_str: &str) -> Result<Client, Error> {
    let (client, conn) = tokio_postgres::connect(conn_str, NoTls)
        .await
        .context("failed to create connection")?;
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            error!("connection returned error and aborted, {}", e);
        }
    });
    info!("connection created");
    Ok(client)
}
