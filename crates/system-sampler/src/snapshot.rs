use serde::{Deserialize, Serialize};

/// One reading of host identity and utilization.
///
/// All usage values are percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub hostname: String,
    pub platform: String,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
}

/// Converts a `used / total` ratio into a percentage with one decimal,
/// clamped to `[0, 100]`. A zero total yields `None`.
pub fn percentage(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(normalize_percent(used as f64 / total as f64 * 100.0))
}

/// Rounds to one decimal and clamps to `[0, 100]`. NaN becomes 0.
pub fn normalize_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    ((value * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(50, 200), Some(25.0));
        assert_eq!(percentage(1, 3), Some(33.3));
        assert_eq!(percentage(0, 10), Some(0.0));
        assert_eq!(percentage(10, 10), Some(100.0));
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), None);
    }

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(normalize_percent(-3.0), 0.0);
        assert_eq!(normalize_percent(100.04), 100.0);
        assert_eq!(normalize_percent(250.0), 100.0);
        assert_eq!(normalize_percent(f64::NAN), 0.0);
        assert_eq!(normalize_percent(42.46), 42.5);
    }

    #[test]
    fn test_snapshot_field_names() {
        let snapshot = SystemSnapshot {
            hostname: "web-1".to_string(),
            platform: "Linux-6.1.0-x86_64".to_string(),
            cpu_usage: 12.5,
            memory_usage: 40.0,
            disk_usage: 71.2,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["hostname"], "web-1");
        assert_eq!(json["platform"], "Linux-6.1.0-x86_64");
        assert_eq!(json["cpu_usage"], 12.5);
        assert_eq!(json["memory_usage"], 40.0);
        assert_eq!(json["disk_usage"], 71.2);
    }
}
