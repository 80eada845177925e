// ============================================================================
// CREATORHUB API
// ============================================================================

// - Creator/supporter accounts with bearer-token sessions
// - Posts with free/premium visibility, feed and trending
// - Comments, likes, follows and mock subscriptions
// - Creator analytics, search and AI content suggestions
// - CORS, request timeout and concurrency limit
// - Structured logging

use creatorhub_api::{AppState, config::Config, db::Database, router, seed::seed};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("creatorhub_api=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let db = Database::new();
    if config.seed_data {
        seed(&db);
    }

    let addr = config.addr();

    // Create application state
    let state = match AppState::new(db, config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                    - Health check");
    info!("  POST   /auth/signup               - Create account");
    info!("  POST   /auth/login                - Login by email");
    info!("  POST   /auth/logout               - Revoke token (auth)");
    info!("  GET    /auth/me                   - Current user (auth)");
    info!("  GET    /users                     - List users");
    info!("  PUT    /users/me                  - Update profile (auth)");
    info!("  POST   /users/:id/follow          - Follow (auth)");
    info!("  GET    /posts                     - List posts");
    info!("  GET    /posts/feed                - Feed (optional auth)");
    info!("  GET    /posts/trending            - Trending posts");
    info!("  POST   /posts                     - Create post (creator)");
    info!("  POST   /posts/:id/comments        - Comment (auth)");
    info!("  POST   /posts/:id/like            - Like (auth)");
    info!("  POST   /subscriptions             - Subscribe (auth)");
    info!("  GET    /analytics/overview        - Creator analytics (creator)");
    info!("  GET    /search?q=                 - Search");
    info!("  POST   /ai/suggestions            - Content suggestions");

    axum::serve(listener, app).await.expect("server error");
}
