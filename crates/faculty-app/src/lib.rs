// Rust guideline compliant 2026-10-16

//! Shared application services for the Faculty command-line client.
//!
//! This crate connects the pure core to the platform: the [`Platform`]
//! seam and its HTTP implementation, name lookups, job and server helpers,
//! datasets, server agents, workspace paths, SSH invocations and
//! standardized error envelopes.

pub mod agent;
pub mod datasets;
pub mod environments;
pub mod error;
pub mod http;
pub mod jobs;
pub mod lookup;
pub mod platform;
pub mod response;
pub mod servers;
pub mod session;
pub mod ssh;
pub mod workspace;

pub use agent::ServerAgent;
pub use environments::{
    agent_url, execution_summary, format_command, latest_execution, select_steps, stream_step_logs,
};
pub use error::{AppError, DatasetError, ErrorCode, Result};
pub use http::HttpPlatform;
pub use jobs::{
    collect_runs, parse_parameter_sets, plan_run_parameters, select_subrun, submission_summary,
};
pub use lookup::{resolve_environment, resolve_job, resolve_project, resolve_server};
pub use platform::Platform;
pub use response::ErrorEnvelope;
pub use servers::{
    browser_url, requested_resources, server_spec, ssh_config_entry, wait_until_running,
};
pub use session::Session;
pub use ssh::{run_streaming, KeyFile, SyncDirection};
pub use workspace::{list_directory, workspace_prefix};
