//! Authentication and authorization module

pub mod authorizer;
pub mod credentials;
pub mod login;
pub mod token;
pub mod user;

// Re-export main components
pub use authorizer::{AuthPolicy, Effect, GatewayAuthorizer};
pub use login::{LoginError, LoginRequest, LoginService, LoginSuccess};
pub use token::{extract_bearer_token, Claims, TokenManager};
pub use user::UserRole;
