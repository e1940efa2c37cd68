use actix_web::{App, HttpServer, middleware, web};

use vollmed::api::ApiClient;
use vollmed::auth::session;
use vollmed::config::AppConfig;
use vollmed::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Optional .env file; real environment variables take precedence
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let secret_key = config.cookie_key();
    let client = ApiClient::new(&config.api_url);
    let secure_cookie = config.production;

    log::info!("Backend API at {}", client.base_url());
    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(secret_key.clone(), secure_cookie))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(client.clone()))
            .configure(routes::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
