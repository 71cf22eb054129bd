use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blog_service::{handlers, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cfg!(debug_assertions) {
        dotenvy::dotenv().ok();
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting blog-service v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.app.env
    );

    if let Err(e) = auth_core::jwt::initialize_jwt_secret(&config.auth.jwt_secret) {
        tracing::error!("Failed to initialize JWT secret: {}", e);
        std::process::exit(1);
    }

    let mut db_config = db_pool::DbConfig::from_env("blog-service").unwrap_or_default();
    if db_config.database_url.is_empty() {
        db_config.database_url = config.database.url.clone();
    }
    db_config.log_config();

    let pool = match db_pool::create_pool(db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    // Shared database: sibling services apply their own migrations, so
    // versions unknown to this service are ignored. The identity
    // migration must have run first for the users_reference view.
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(true);
    if let Err(e) = migrator.run(&pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Listening on {}", bind_address);

    let pool_data = web::Data::new(pool.clone());
    let pagination_data = web::Data::new(config.pagination);
    let allowed_origins = config.cors.allowed_origins.clone();

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        for origin in allowed_origins.split(',').map(str::trim) {
            if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(pool_data.clone())
            .app_data(pagination_data.clone())
            .wrap(TracingLogger::default())
            .wrap(cors)
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("/api/blogs")
                    .wrap(actix_middleware::JwtAuthMiddleware)
                    .route("", web::post().to(handlers::create_blog))
                    .route("", web::get().to(handlers::list_blogs))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(handlers::get_blog))
                            .route(web::put().to(handlers::update_blog))
                            .route(web::delete().to(handlers::delete_blog)),
                    ),
            )
    })
    .bind(&bind_address)?
    .run()
    .await;

    tracing::info!("blog-service shutting down, closing database pool");
    pool.close().await;

    server
}
