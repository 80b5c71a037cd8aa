//! main file for the server

pub mod model;
mod controller;
mod database;
mod routes;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use crate::server::controller::order::OrderLookupHandler;
use crate::server::database::connection;
use crate::server::database::store::PgOrderStore;
use crate::server::model::config::ServerConfig;

/// Run the server
pub async fn run(ServerConfig{ addr, db_conn_str }: ServerConfig) -> anyhow::Result<()> {
    let client = connection::connect(&db_conn_str).await?;
    let handler = web::Data::new(OrderLookupHandler::new(PgOrderStore::new(client)));
    info!("serving orders on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(handler.clone())
            .wrap(Logger::default())
            .configure(routes::orders::configure::<PgOrderStore>)
    })
        .bind(addr)?
        .run()
        .await?;
    Ok(())
}
