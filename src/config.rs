use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub tick_rate: Duration,
    pub max_logs: usize,
    pub console_lines: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            max_logs: 200,
            console_lines: 4,
        }
    }
}

impl AppConfig {
    /// Reads `MATCHUP_*` overrides from the process environment. Call after the
    /// dotenv files have been loaded.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let tick_ms = parse_clamped(
            env::var("MATCHUP_TICK_MS").ok().as_deref(),
            defaults.tick_rate.as_millis() as u64,
            50,
        );
        Self {
            tick_rate: Duration::from_millis(tick_ms),
            max_logs: parse_clamped(
                env::var("MATCHUP_MAX_LOGS").ok().as_deref(),
                defaults.max_logs as u64,
                10,
            ) as usize,
            console_lines: parse_clamped(
                env::var("MATCHUP_CONSOLE_LINES").ok().as_deref(),
                defaults.console_lines as u64,
                1,
            ) as usize,
        }
    }
}

fn parse_clamped(raw: Option<&str>, default: u64, min: u64) -> u64 {
    raw.and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
        .max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_clamped_falls_back_and_clamps() {
        assert_eq!(parse_clamped(None, 250, 50), 250);
        assert_eq!(parse_clamped(Some("garbage"), 250, 50), 250);
        assert_eq!(parse_clamped(Some(" 400 "), 250, 50), 400);
        assert_eq!(parse_clamped(Some("5"), 250, 50), 50);
        assert_eq!(parse_clamped(Some("-1"), 200, 10), 200);
    }
}
