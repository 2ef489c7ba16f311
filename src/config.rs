use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub screener_base_url: String,
}

impl Config {
    /// Reads configuration from the environment, after loading a `.env`
    /// file when one is present. Every setting has a production default.
    pub fn init() -> Config {
        dotenv().ok();
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let screener_base_url = std::env::var("SCREENER_BASE_URL")
            .unwrap_or_else(|_| "https://www.screener.in".to_string());
        Config {
            bind_addr,
            screener_base_url,
        }
    }
}
