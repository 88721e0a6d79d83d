//! Default values applied when a field is absent from file and env.

pub const BIND_ADDRESS: &str = "0.0.0.0";
pub const PORT: u16 = 3000;

pub const UPSTREAM_URL: &str = "https://api.x10.network/numapi.php";
pub const UPSTREAM_KEY: &str = "thunder";
pub const USER_AGENT: &str = "VehicleProxy/1.0 (Credit @SxThunder)";

pub const LOG_LEVEL: &str = "info";

pub fn bind_address() -> String {
    BIND_ADDRESS.to_string()
}

pub fn port() -> u16 {
    PORT
}

pub fn upstream_url() -> String {
    UPSTREAM_URL.to_string()
}

pub fn upstream_key() -> String {
    UPSTREAM_KEY.to_string()
}

pub fn user_agent() -> String {
    USER_AGENT.to_string()
}

pub fn log_level() -> String {
    LOG_LEVEL.to_string()
}
