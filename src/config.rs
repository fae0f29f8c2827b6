pub const SITE_OWNER: &str = "Jordan Reyes";
pub const AWAY_TITLE: &str = "Come back soon!";
pub const FAVICON_VISIBLE: &str = "/assets/images/favicon.svg";
pub const FAVICON_AWAY: &str = "/assets/images/favicon-away.svg";

pub const SCROLL_SPY_OFFSET: f64 = 200.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 60.0;
pub const TOAST_DEFAULT_DURATION_MS: u32 = 3_000;

const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_RELAY_USER_ID: &str = "user_portfolio_public_key";
const DEFAULT_RELAY_SERVICE_ID: &str = "contact_service";
const DEFAULT_RELAY_TEMPLATE_ID: &str = "template_contact";
const DEFAULT_CHAT_WIDGET_SRC: &str = "https://embed.tawk.to/60df10bf7f4b000ac03ab6a8/1f9jlirg6";

/// Identifiers handed to the email relay on every submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: &'static str,
    pub user_id: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            endpoint: non_empty_or(option_env!("RELAY_ENDPOINT"), DEFAULT_RELAY_ENDPOINT),
            user_id: non_empty_or(option_env!("RELAY_USER_ID"), DEFAULT_RELAY_USER_ID),
            service_id: non_empty_or(option_env!("RELAY_SERVICE_ID"), DEFAULT_RELAY_SERVICE_ID),
            template_id: non_empty_or(option_env!("RELAY_TEMPLATE_ID"), DEFAULT_RELAY_TEMPLATE_ID),
        }
    }
}

/// `None` disables the widget.
pub fn chat_widget_src() -> Option<&'static str> {
    match option_env!("CHAT_WIDGET_SRC") {
        Some(value) if value.trim().is_empty() => None,
        Some(value) => Some(value.trim()),
        None => Some(DEFAULT_CHAT_WIDGET_SRC),
    }
}

fn non_empty_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_build_values_fall_back_to_defaults() {
        assert_eq!(non_empty_or(None, "fallback"), "fallback");
        assert_eq!(non_empty_or(Some("   "), "fallback"), "fallback");
        assert_eq!(non_empty_or(Some(" svc_1 "), "fallback"), "svc_1");
    }

    #[test]
    fn relay_config_is_never_blank() {
        let config = RelayConfig::from_build_env();
        assert!(config.endpoint.starts_with("https://"));
        assert!(!config.user_id.is_empty());
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
    }
}
