use serde::{Deserialize, Serialize};

/// Clock and version reported by the database server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub server_time: String,
    pub version: String,
}

/// Outcome of a single database check, as it appears in the health report.
///
/// Serializes with an internal `status` tag:
///
/// ```json
/// {"status": "connected", "server_time": "2024-01-01 00:00:00", "version": "8.0.34"}
/// {"status": "error", "error": "Connection failed: ..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected { server_time: String, version: String },
    Error { error: String },
}

impl DatabaseStatus {
    /// Returns true if the check reached the server and got an answer.
    pub fn is_connected(&self) -> bool {
        matches!(self, DatabaseStatus::Connected { .. })
    }

    /// Builds an error status from anything displayable.
    pub fn error(err: impl std::fmt::Display) -> Self {
        DatabaseStatus::Error {
            error: err.to_string(),
        }
    }
}

impl From<ServerInfo> for DatabaseStatus {
    fn from(info: ServerInfo) -> Self {
        DatabaseStatus::Connected {
            server_time: info.server_time,
            version: info.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_serialization() {
        let status = DatabaseStatus::from(ServerInfo {
            server_time: "2024-01-01 00:00:00".to_string(),
            version: "8.0.34".to_string(),
        });

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "connected");
        assert_eq!(json["server_time"], "2024-01-01 00:00:00");
        assert_eq!(json["version"], "8.0.34");
        assert!(status.is_connected());
    }

    #[test]
    fn test_error_serialization() {
        let status = DatabaseStatus::error("connection refused");

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "connection refused");
        assert!(json.get("version").is_none());
        assert!(!status.is_connected());
    }

    #[test]
    fn test_deserialization() {
        let status: DatabaseStatus =
            serde_json::from_str(r#"{"status":"error","error":"boom"}"#).unwrap();
        assert_eq!(status, DatabaseStatus::error("boom"));
    }
}
