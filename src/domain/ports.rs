/// Settings every entry point (HTTP server, Lambda) needs to serve lookups.
pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn help_url(&self) -> &str;
}
