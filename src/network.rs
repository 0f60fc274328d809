//! Network URL constants for the copy-trading SDK.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "COPYTRADE_API_URL";

/// Environment variable holding a bearer access token.
pub const ENV_ACCESS_TOKEN: &str = "COPYTRADE_ACCESS_TOKEN";

/// Environment variable setting the transport timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "COPYTRADE_TIMEOUT_SECS";
