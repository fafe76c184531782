//! Line-oriented text exposition of a snapshot's gauges.
//!
//! Output is exactly three lines, cpu then memory then disk:
//!
//! ```text
//! system_cpu_usage{host="web-1"} 12.5
//! system_memory_usage{host="web-1"} 40.0
//! system_disk_usage{host="web-1"} 71.2
//! ```

use crate::SystemSnapshot;

impl SystemSnapshot {
    /// Returns `(metric name, value)` pairs in exposition order.
    pub fn gauges(&self) -> [(&'static str, f64); 3] {
        [
            ("system_cpu_usage", self.cpu_usage),
            ("system_memory_usage", self.memory_usage),
            ("system_disk_usage", self.disk_usage),
        ]
    }

    /// One formatted line per gauge, labelled with the host name.
    pub fn metric_lines(&self) -> Vec<String> {
        let host = escape_label_value(&self.hostname);
        self.gauges()
            .iter()
            .map(|(name, value)| format!("{name}{{host=\"{host}\"}} {value:?}"))
            .collect()
    }

    /// All lines joined with `\n`, without a trailing newline.
    pub fn to_exposition(&self) -> String {
        self.metric_lines().join("\n")
    }
}

/// Escapes a label value the way the Prometheus text format expects.
pub fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
