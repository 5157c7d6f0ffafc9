//! Backend HTTP Server
//!
//! Wires authentication and todo routes into a single actix-web server.
//! Tables are provisioned at startup; the JWT secret and bind address
//! come from the environment.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = minder_pg::db().await;
    minder_pg::provision::<minder_auth::Account>(&client).await.expect("users table");
    minder_pg::provision::<minder_todos::Todo>(&client).await.expect("todos table");
    let crypto = web::Data::new(minder_auth::Crypto::from_env());
    let client = web::Data::new(client);
    log::info!("starting server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(minder_auth::register))
                    .route("/login", web::post().to(minder_auth::login)),
            )
            .service(
                web::scope("/todos")
                    .route("", web::post().to(minder_todos::create))
                    .route("", web::get().to(minder_todos::list))
                    .route("/{id}", web::get().to(minder_todos::get))
                    .route("/{id}", web::put().to(minder_todos::update))
                    .route("/{id}", web::delete().to(minder_todos::delete)),
            )
    })
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
