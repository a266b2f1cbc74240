use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_corner::db::{self, LogOnError};
use job_corner::{auth, config, routes, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "job_corner=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = config::load_settings();
  let pool = db::init_db(&settings.database_path).expect("Failed to initialize database");

  {
    let conn = db::try_lock(&pool).expect("Database lock failed during startup");
    if let Some(removed) =
      auth::db::cleanup_expired_sessions(&conn).log_warn("Failed to clean up expired sessions")
    {
      tracing::info!("Removed {} expired session(s)", removed);
    }
  }

  let cors = routes::cors_layer(&settings.cors_origin)
    .unwrap_or_else(|_| panic!("Invalid CORS origin: {}", settings.cors_origin));

  let state = AppState::new(pool, settings.cookie_settings());
  let app = routes::router(state)
    .layer(cors)
    .layer(TraceLayer::new_for_http());

  let bind_addr = settings.bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://{}", bind_addr);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
