use pathboard::board::Board;
use pathboard::ridepath::Fetcher;
use pathboard::weather;
use tokio::sync::RwLock;

pub struct AppState {
    pub fetcher: Fetcher,
    pub weather: weather::Client,
    pub last_good: RwLock<Option<Board>>,
}

impl AppState {
    pub fn new(fetcher: Fetcher, weather: weather::Client) -> Self {
        Self {
            fetcher,
            weather,
            last_good: RwLock::new(None),
        }
    }
}
