use log::{error, info, warn};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use blog_gate::auth::login::LoginService;
use blog_gate::auth::token::TokenManager;
use blog_gate::config::ServerConfig;
use blog_gate::handlers::authorize::{handle_auth_check, handle_rejection, require_admin};
use blog_gate::handlers::blogs::{
    handle_add_post, handle_get_post, handle_list_posts, handle_remove_post,
};
use blog_gate::handlers::login::handle_login;
use blog_gate::handlers::users::{
    handle_add_account, handle_get_account, handle_list_accounts, handle_remove_account,
};
use blog_gate::storage::memory::{MemoryAccountStore, MemoryBlogStore};
use blog_gate::storage::traits::{SharedAccountStore, SharedBlogStore};

#[tokio::main]
async fn main() {
    // Initialize env
    match dotenvy::dotenv() {
        Ok(_) => info!("Environment variables loaded from .env file"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    };

    // Initialize logging
    env_logger::init();

    // Load config from the environment; missing token settings are fatal
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration: host={}, port={}", config.host, config.port);

    // Shared state: token authority, login flow, storage backends
    let token_manager = Arc::new(TokenManager::new(&config.auth));
    let accounts: SharedAccountStore = Arc::new(MemoryAccountStore::new());
    let blogs: SharedBlogStore = Arc::new(MemoryBlogStore::new());
    let login_service = Arc::new(LoginService::new(accounts.clone(), token_manager.clone()));

    // Public routes
    let login_route = warp::path!("api" / "login")
        .and(warp::post())
        .and(with_state(login_service))
        .and(warp::body::json())
        .and_then(handle_login);

    let auth_route = warp::path!("api" / "auth")
        .and(warp::get())
        .and(with_state(token_manager.clone()))
        .and(warp::header::optional::<String>("authorization"))
        .and_then(handle_auth_check);

    let list_blogs = warp::path!("api" / "blogs")
        .and(warp::get())
        .and(with_state(blogs.clone()))
        .and_then(handle_list_posts);

    let get_blog = warp::path!("api" / "blogs" / String)
        .and(warp::get())
        .and(with_state(blogs.clone()))
        .and_then(handle_get_post);

    // Admin-gated routes
    let add_blog = warp::path!("api" / "blogs")
        .and(warp::post())
        .and(require_admin(token_manager.clone()))
        .and(with_state(blogs.clone()))
        .and(warp::body::json())
        .and_then(handle_add_post);

    let remove_blog = warp::path!("api" / "blogs" / String)
        .and(warp::delete())
        .and(require_admin(token_manager.clone()))
        .and(with_state(blogs.clone()))
        .and_then(handle_remove_post);

    let add_user = warp::path!("api" / "users")
        .and(warp::post())
        .and(require_admin(token_manager.clone()))
        .and(with_state(accounts.clone()))
        .and(warp::body::json())
        .and_then(handle_add_account);

    let list_users = warp::path!("api" / "users")
        .and(warp::get())
        .and(require_admin(token_manager.clone()))
        .and(with_state(accounts.clone()))
        .and_then(handle_list_accounts);

    let get_user = warp::path!("api" / "users" / String)
        .and(warp::get())
        .and(require_admin(token_manager.clone()))
        .and(with_state(accounts.clone()))
        .and_then(handle_get_account);

    let remove_user = warp::path!("api" / "users" / String)
        .and(warp::delete())
        .and(require_admin(token_manager.clone()))
        .and(with_state(accounts.clone()))
        .and_then(handle_remove_account);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["authorization", "content-type"])
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    let routes = login_route
        .or(auth_route)
        .or(list_blogs)
        .or(get_blog)
        .or(add_blog)
        .or(remove_blog)
        .or(add_user)
        .or(list_users)
        .or(get_user)
        .or(remove_user)
        .recover(handle_rejection)
        .with(cors);

    // Build the server address
    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Failed to parse server address: {}", e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Starting Blog Gate server on {}", addr);

    warp::serve(routes).run(addr).await;
}

// Helper function to include shared state in request handling
fn with_state<T: Clone + Send + Sync + 'static>(
    state: T,
) -> impl Filter<Extract = (T,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
