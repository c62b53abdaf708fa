use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_service::handlers;
use blog_service::middleware::JwtAuthMiddleware;
use blog_service::openapi::ApiDoc;
use blog_service::security::TokenService;
use blog_service::services::{CommentService, IdentityService, PostService};
use blog_service::Settings;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));

    // Open the database and apply the schema
    let pool = match blog_service::db::connect(&settings.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = blog_service::db::init_schema(&pool).await {
        tracing::error!("Schema setup failed: {:#}", e);
        eprintln!("ERROR: Failed to initialize schema: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Connected to database at {}", settings.database.url);

    let tokens = TokenService::new(&settings.jwt.secret, settings.jwt.expiry_seconds);
    let identity = web::Data::new(IdentityService::new(pool.clone(), tokens.clone()));
    let posts = web::Data::new(PostService::new(pool.clone()));
    let comments = web::Data::new(CommentService::new(pool.clone()));
    let pool_data = web::Data::new(pool);

    let bind_address = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_origins = settings.cors.allowed_origins.clone();

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in cors_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(identity.clone())
            .app_data(posts.clone())
            .app_data(comments.clone())
            .app_data(pool_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api/v1/openapi.json", openapi_doc),
            )
            // Health and auth endpoints are reachable without a token
            .route("/api/v1/health", web::get().to(handlers::health))
            .service(
                web::scope("/api/v1/auth")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login)),
            )
            .service(
                web::scope("/api/v1")
                    .wrap(JwtAuthMiddleware::new(tokens.clone()))
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_posts))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::put().to(handlers::update_post))
                                    .route(web::delete().to(handlers::delete_post)),
                            )
                            .service(
                                web::resource("/{post_id}/comments")
                                    .route(web::get().to(handlers::get_comments))
                                    .route(web::post().to(handlers::create_comment)),
                            ),
                    )
                    .service(
                        web::scope("/comments").service(
                            web::resource("/{comment_id}")
                                .route(web::put().to(handlers::update_comment))
                                .route(web::delete().to(handlers::delete_comment)),
                        ),
                    )
                    .service(
                        web::scope("/users")
                            .service(web::resource("").route(web::get().to(handlers::list_users)))
                            .service(
                                web::resource("/{user_id}")
                                    .route(web::delete().to(handlers::delete_user)),
                            ),
                    ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run();

    let server_handle = server.handle();

    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        server_handle.stop(true).await;
    });

    server.await?;

    tracing::info!("Blog-service shutting down");

    Ok(())
}
