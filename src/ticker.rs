use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Shortest poll interval accepted from config
const MIN_TICK_MS: u64 = 16;

/// Get tick duration for a configured interval
pub fn tick_duration(tick_rate_ms: u64) -> Duration {
    Duration::from_millis(tick_rate_ms.max(MIN_TICK_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration(DEFAULT_TICK_MS);
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_tick_duration_has_floor() {
        assert_eq!(tick_duration(0), Duration::from_millis(16));
    }
}
