#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::reporting::{ErrorReporter, LogReporter};
#[cfg(feature = "server")]
use crate::repository::factory::BackendFactory;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_templates;
#[cfg(feature = "server")]
use crate::routes::diagnostics::{debug_error, tunnel};
#[cfg(feature = "server")]
use crate::routes::wizard::show_wizard;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod reporting;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // One factory per process; the backend client it builds is the only
    // instance handlers ever see.
    let factory = web::Data::new(BackendFactory::new(server_config.backend.clone()));
    let reporter: web::Data<dyn ErrorReporter> =
        web::Data::from(Arc::new(LogReporter) as Arc<dyn ErrorReporter>);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(web::scope("/api").service(api_v1_templates))
            .service(show_wizard)
            .service(tunnel)
            .service(debug_error)
            .app_data(web::Data::new(tera.clone()))
            .app_data(factory.clone())
            .app_data(reporter.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
