//! Single-shot database liveness probe.
//!
//! Every check opens its own connection, asks the server for its clock and
//! version, and releases the connection before returning. Failures are
//! reported as a [`DatabaseStatus::Error`] value, never as a panic.

pub mod error;
pub mod mysql;
pub mod probe;
pub mod settings;
pub mod status;

pub use error::{ProbeError, Result};
pub use mysql::MySqlProbe;
pub use probe::DatabaseProbe;
pub use settings::DatabaseSettings;
pub use status::{DatabaseStatus, ServerInfo};
