pub mod catalog;
pub mod domain;
pub mod reading;
pub mod saju;

pub mod config {
    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub public_url: Option<String>,
        /// Raw `PORT` value; parsed by [`Settings::port`] so only the API cares about it.
        pub port: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                sentry_dsn: non_empty_var("SENTRY_DSN"),
                public_url: non_empty_var("PUBLIC_URL"),
                port: non_empty_var("PORT"),
            })
        }

        pub fn port(&self) -> u16 {
            let Some(raw) = self.port.as_deref() else {
                return DEFAULT_PORT;
            };
            raw.parse().unwrap_or_else(|_| {
                tracing::warn!(port = raw, default = DEFAULT_PORT, "invalid PORT; using default");
                DEFAULT_PORT
            })
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn with_port(port: &str) -> Settings {
            Settings {
                port: Some(port.to_string()),
                ..Default::default()
            }
        }

        #[test]
        fn port_defaults_to_3000() {
            assert_eq!(Settings::default().port(), 3000);
            assert_eq!(with_port("8080").port(), 8080);
        }

        #[test]
        fn malformed_port_falls_back_to_default() {
            assert_eq!(with_port("http").port(), 3000);
            assert_eq!(with_port("70000").port(), 3000);
            assert_eq!(with_port("-1").port(), 3000);
        }
    }
}
