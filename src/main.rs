use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{delete, get, patch, post, put},
    Router,
};
use chrono::FixedOffset;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::{
    buffer::BufferLayer, limit::RateLimitLayer, load_shed::LoadShedLayer, ServiceBuilder,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::app::{env::Envy, util::seed};

mod admin;
mod app;
mod auth;
mod categories;
mod quotes;
mod statistics;
mod transactions;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub envy: Arc<Envy>,
    pub utc_offset: FixedOffset,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,ledger_api=debug".into()),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };
    let Some(utc_offset) = envy.utc_offset()
    else {
        panic!("UTC_OFFSET_MINUTES must be within a day");
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ]);

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections.unwrap_or(50))
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    if let Err(e) = seed::create_super_admin_if_missing(&envy, &pool).await {
        panic!("{:#?}", e);
    }
    if let Err(e) = seed::seed_quotes(&pool).await {
        panic!("{:#?}", e);
    }

    let state = AppState {
        pool,
        envy: Arc::new(envy),
        utc_offset,
    };

    let api = Router::new()
        // auth
        .route("/auth/register", post(auth::controller::register))
        .route("/auth/login", post(auth::controller::login))
        .route("/auth/logout", post(auth::controller::logout))
        .route("/auth/me", get(auth::controller::get_me))
        // categories
        .route("/categories", post(categories::controller::create_category))
        .route("/categories", get(categories::controller::get_categories))
        .route(
            "/categories/:id",
            get(categories::controller::get_category_by_id),
        )
        .route(
            "/categories/:id",
            patch(categories::controller::edit_category_by_id),
        )
        .route(
            "/categories/:id",
            delete(categories::controller::delete_category_by_id),
        )
        // transactions
        .route(
            "/transactions",
            post(transactions::controller::create_transaction),
        )
        .route(
            "/transactions",
            get(transactions::controller::get_transactions),
        )
        .route(
            "/transactions/:id",
            get(transactions::controller::get_transaction_by_id),
        )
        .route(
            "/transactions/:id",
            patch(transactions::controller::edit_transaction_by_id),
        )
        .route(
            "/transactions/:id",
            delete(transactions::controller::delete_transaction_by_id),
        )
        // statistics
        .route(
            "/statistics",
            get(statistics::controller::get_statistics),
        )
        // users
        .route("/users/quotes", get(users::controller::get_user_quote))
        .route("/users/quotes", post(users::controller::edit_user_quote))
        .route("/users/quotes", delete(users::controller::delete_user_quote))
        // quotes
        .route("/quotes", post(quotes::controller::create_quote))
        .route("/quotes/random", get(quotes::controller::get_random_quote))
        .route("/quotes/me", get(quotes::controller::get_my_quote))
        // admin
        .route("/admin/users", get(admin::controller::get_users))
        .route(
            "/admin/users/:id/role",
            put(admin::controller::edit_user_role_by_id),
        )
        .route(
            "/admin/users/:id",
            delete(admin::controller::delete_user_by_id),
        )
        .route(
            "/admin/statistics",
            get(admin::controller::get_system_statistics),
        );

    // app
    let app = Router::new()
        .route("/", get(app::controller::get_root))
        .nest("/api", api)
        .fallback(app::controller::fallback)
        // layers
        .layer(cors)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(app::controller::handle_layer_error))
                .layer(LoadShedLayer::new())
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(100, Duration::from_secs(1))),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
