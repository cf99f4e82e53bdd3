use actix_web::{App, HttpServer, web};
use tracing::{error, info};

use snaplink::api;
use snaplink::config::AppConfig;
use snaplink::repository::RepositoryHandle;
use snaplink::system::logging::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    let _log_guard = init_logging(&config);

    let repository = web::Data::new(RepositoryHandle::new(config.database.clone()));

    // A failed connection is logged but does not stop the server: the
    // handle retries on first store access, which surfaces as a 500 until
    // the database comes back.
    if let Err(e) = repository.warm().await {
        error!("Database connection error: {}", e);
    }

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);
    info!("Shorten endpoint: POST /{}", config.routes.shorten);
    info!("Redirect endpoint: GET /{}/{{code}}", config.routes.redirect);

    let app_config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(app_config.clone())
            .app_data(repository.clone())
            .configure(|cfg| api::routes::configure(app_config.get_ref(), cfg))
    })
    .bind(bind_address)?
    .run()
    .await
}
