use crate::config::Config;
use crate::external::Screener;

pub struct AppState {
    pub screener: Screener,
    pub config: Config,
}
