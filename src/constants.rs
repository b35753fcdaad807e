// Fundamental configuration constants
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3030;

// Token configuration constants
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 300;
pub const BEARER_PREFIX: &str = "Bearer ";

// Gateway policy document constants
pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
pub const ANONYMOUS_PRINCIPAL: &str = "user";
