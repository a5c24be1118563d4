/// User agent sent with every request, e.g. `uupdump-api-rs/0.1.0`.
pub const DEFAULT_USER_AGENT: &str = concat!("uupdump-api-rs/", env!("CARGO_PKG_VERSION"));

pub fn get_user_agent() -> &'static str {
    DEFAULT_USER_AGENT
}
