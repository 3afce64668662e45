use super::Config;
use tracing::warn;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TEMPFEEL_API_URL")
            && !url.is_empty()
        {
            self.service.base_url = url;
        }

        if let Ok(secs_str) = std::env::var("TEMPFEEL_REQUEST_TIMEOUT_SECS") {
            match secs_str.parse::<u64>() {
                Ok(secs) if secs > 0 => self.service.request_timeout_secs = Some(secs),
                _ => warn!(value = %secs_str, "ignoring invalid TEMPFEEL_REQUEST_TIMEOUT_SECS"),
            }
        }
    }
}
