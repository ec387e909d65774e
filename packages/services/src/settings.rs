const DEFAULT_RETENTION_DAYS: i64 = 30;
const DEFAULT_FROM: &str = "noreply@behaviors.local";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Closed issues older than this many days are purged
    pub purge_retention_days: i64,
    pub notification_from: String,
    pub base_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            purge_retention_days: DEFAULT_RETENTION_DAYS,
            notification_from: DEFAULT_FROM.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServiceSettings {
    pub fn from_env() -> Self {
        let purge_retention_days = parse_retention_days(
            std::env::var("PURGE_RETENTION_DAYS").ok().as_deref(),
        );
        let notification_from = std::env::var("NOTIFICATION_FROM")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_FROM.to_string());
        let base_url =
            std::env::var("APP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        ServiceSettings {
            purge_retention_days,
            notification_from,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn parse_retention_days(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|days| *days > 0)
        .unwrap_or(DEFAULT_RETENTION_DAYS)
}
