use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use edufeed_server::{
    app_state::AppState,
    auth::{JwtService, SessionMiddleware},
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if matches!(std::env::var("APP_ENV").as_deref(), Ok("production")) {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let allowed_origin = config.allowed_origin.clone();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(SessionMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .service(handlers::generate_feedback)
            .service(handlers::get_learning_insights)
            .service(handlers::home)
            .service(handlers::login_page)
            .service(handlers::teacher_dashboard)
            .service(handlers::student_dashboard)
            .service(handlers::health_check)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
