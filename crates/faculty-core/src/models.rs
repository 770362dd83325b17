// Rust guideline compliant 2026-10-16

//! Platform resource models.
//!
//! These mirror the JSON payloads of the platform REST services closely
//! enough to deserialize them directly; field names are camelCase on the wire.

use crate::resolve::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A project the user can access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    #[serde(rename = "projectId", alias = "id")]
    pub id: Uuid,
    /// Display name, not necessarily unique.
    pub name: String,
    /// Owning user.
    pub owner_id: Uuid,
    /// When the project was archived, if it has been.
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

impl Identified for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Lifecycle status of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    /// Server is being scheduled.
    Creating,
    /// Server is scheduled and starting up.
    Pending,
    /// Server is up.
    Running,
    /// Server failed to start or crashed.
    Error,
}

impl ServerStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServerStatus::Creating => "creating",
            ServerStatus::Pending => "pending",
            ServerStatus::Running => "running",
            ServerStatus::Error => "error",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute resources assigned to a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerResources {
    /// A whole machine of the given node type.
    Dedicated {
        /// Machine type, e.g. `m5.xlarge`.
        #[serde(rename = "nodeType")]
        node_type: String,
    },
    /// A slice of a shared machine.
    Shared {
        /// CPU allocation in thousandths of a core.
        #[serde(rename = "milliCpus")]
        milli_cpus: u64,
        /// Memory allocation in megabytes.
        #[serde(rename = "memoryMb")]
        memory_mb: u64,
    },
}

/// A network service exposed by a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service name, e.g. `https` or `hound`.
    pub name: String,
    /// Host name the service is reachable on.
    pub host: String,
    /// Port the service listens on.
    pub port: u16,
    /// URL scheme.
    pub scheme: String,
    /// Full URI of the service.
    pub uri: String,
}

/// A compute server in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Server identifier.
    #[serde(rename = "instanceId", alias = "id")]
    pub id: Uuid,
    /// Project the server belongs to.
    pub project_id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Display name, not necessarily unique.
    pub name: String,
    /// Server type, e.g. `jupyter`.
    #[serde(rename = "type")]
    pub server_type: String,
    /// Assigned resources.
    #[serde(rename = "instanceSize", alias = "resources")]
    pub resources: ServerResources,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Current status.
    pub status: ServerStatus,
    /// Exposed services.
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Server {
    /// Returns the service with the given name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.name == name)
    }
}

impl Identified for Server {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Request body for creating a server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServer {
    /// Server type, e.g. `jupyter`.
    #[serde(rename = "type")]
    pub server_type: String,
    /// Requested resources.
    #[serde(rename = "instanceSize")]
    pub resources: ServerResources,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional server image version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_version: Option<String>,
    /// Environments to apply on start.
    pub environment_ids: Vec<Uuid>,
}

/// Connection details for SSH access to a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshDetails {
    /// Host to connect to.
    pub hostname: String,
    /// SSH port.
    pub port: u16,
    /// Login user.
    pub username: String,
    /// Private key in PEM format.
    pub key: String,
}

/// A machine type available on dedicated infrastructure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeType {
    /// Machine type name.
    pub name: String,
    /// CPU count in thousandths of a core.
    pub milli_cpus: u64,
    /// Memory in megabytes.
    pub memory_mb: u64,
    /// Number of GPUs, if any.
    #[serde(default)]
    pub num_gpus: Option<u32>,
    /// GPU model, if any.
    #[serde(default)]
    pub gpu_name: Option<String>,
    /// Hourly price in US dollars.
    pub cost_usd_per_hour: f64,
}

/// A server environment defined in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Environment identifier.
    #[serde(rename = "environmentId", alias = "id")]
    pub id: Uuid,
    /// Project the environment belongs to.
    pub project_id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Identified for Environment {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Descriptive metadata of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A job definition in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job identifier.
    #[serde(rename = "jobId", alias = "id")]
    pub id: Uuid,
    /// Name and description.
    #[serde(rename = "meta", alias = "metadata")]
    pub metadata: JobMetadata,
}

impl Job {
    /// Returns the job display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl Identified for Job {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Execution state of a run or subrun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Waiting for resources.
    Queued,
    /// Resources are being prepared.
    Starting,
    /// Command is executing.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished unsuccessfully.
    Failed,
    /// Cancellation requested.
    Cancelling,
    /// Cancelled before finishing.
    Cancelled,
    /// Platform error.
    Error,
}

impl RunState {
    /// Returns the wire name of the state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Queued => "queued",
            RunState::Starting => "starting",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
            RunState::Cancelling => "cancelling",
            RunState::Cancelled => "cancelled",
            RunState::Error => "error",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a subrun as listed within its run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubrunSummary {
    /// Subrun identifier.
    #[serde(rename = "subrunId", alias = "id")]
    pub id: Uuid,
    /// Subrun number within the run.
    pub subrun_number: u64,
    /// Execution state.
    pub state: RunState,
}

/// A run of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Run identifier.
    #[serde(rename = "runId", alias = "id")]
    pub id: Uuid,
    /// Run number within the job.
    pub run_number: u64,
    /// Execution state.
    pub state: RunState,
    /// Submission time.
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Start time.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// End time.
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Subruns; only populated when a single run is fetched.
    #[serde(default)]
    pub subruns: Vec<SubrunSummary>,
}

/// Position and size of a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Offset of the first result.
    pub start: u64,
    /// Maximum number of results.
    pub limit: u64,
}

/// Pagination metadata of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Offset of the first result in this page.
    pub start: u64,
    /// Number of results in this page.
    pub size: u64,
    /// The previous page, if any.
    #[serde(default)]
    pub previous: Option<Page>,
    /// The next page, if any.
    #[serde(default)]
    pub next: Option<Page>,
}

/// A page of runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPage {
    /// Runs in this page.
    pub runs: Vec<Run>,
    /// Where this page sits in the full listing.
    pub pagination: Pagination,
}

/// One environment step executed before a subrun's command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStepExecution {
    /// Environment the step belongs to.
    pub environment_id: Uuid,
    /// Step identifier.
    pub environment_step_id: Uuid,
    /// Environment display name.
    pub environment_name: String,
    /// Execution state.
    pub state: RunState,
}

/// Full details of a subrun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subrun {
    /// Subrun identifier.
    #[serde(rename = "subrunId", alias = "id")]
    pub id: Uuid,
    /// Subrun number within the run.
    pub subrun_number: u64,
    /// Execution state.
    pub state: RunState,
    /// Environment steps executed before the command.
    #[serde(default)]
    pub environment_step_executions: Vec<EnvironmentStepExecution>,
}

/// A chunk of log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPart {
    /// Sequence number of the part.
    pub log_part_number: u64,
    /// Log text, including line endings.
    pub content: String,
}

/// A file or directory in a project workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkspaceEntry {
    /// A regular file.
    File {
        /// Path relative to the workspace root, with a leading `/`.
        path: String,
        /// Base name.
        name: String,
        /// Size in bytes.
        #[serde(default)]
        size: u64,
    },
    /// A directory and, up to the requested depth, its contents.
    Directory {
        /// Path relative to the workspace root, with a leading `/`.
        path: String,
        /// Base name.
        name: String,
        /// Child entries.
        #[serde(default)]
        content: Vec<WorkspaceEntry>,
    },
}

impl WorkspaceEntry {
    /// Returns the entry path relative to the workspace root.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            WorkspaceEntry::File { path, .. } | WorkspaceEntry::Directory { path, .. } => path,
        }
    }

    /// Returns whether the entry is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self, WorkspaceEntry::Directory { .. })
    }
}

/// An object, or a directory marker ending in `/`, in a project's datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetObject {
    /// Absolute path within the datasets, with a leading `/`.
    pub path: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Entity tag of the stored content.
    #[serde(default)]
    pub etag: Option<String>,
    /// Last modification time.
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

/// One page of a dataset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPage {
    /// Objects on this page.
    pub objects: Vec<DatasetObject>,
    /// Token of the next page, if any.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Object store backing a project's datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageProvider {
    /// Amazon S3; uploads go in presigned parts.
    #[serde(rename = "S3")]
    S3,
    /// Google Cloud Storage; uploads go to one resumable session URL.
    #[serde(rename = "GCS")]
    Gcs,
}

/// Where and how to upload a new dataset object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    /// Backing object store.
    pub provider: StorageProvider,
    /// Multipart upload ID, for S3.
    #[serde(default)]
    pub upload_id: Option<String>,
    /// Session URL, for GCS.
    #[serde(default)]
    pub url: Option<String>,
}

/// An uploaded part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedPart {
    /// Part number, starting at 1.
    pub part_number: u32,
    /// Entity tag returned when the part was stored.
    pub etag: String,
}

/// Status of an environment execution on a server, or of one of its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Not started yet.
    Queued,
    /// In progress.
    Running,
    /// Finished successfully.
    Success,
    /// Finished with an error.
    Failure,
    /// Stopped before finishing.
    Cancelled,
}

impl ExecutionStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionStatus::Queued => "queued",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Success => "success",
            ExecutionStatus::Failure => "failure",
            ExecutionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One command of an environment being applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    /// Step identifier.
    pub id: Uuid,
    /// Command line of the step.
    pub command: Vec<String>,
    /// Step status.
    pub status: ExecutionStatus,
}

/// The steps applying one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentApplication {
    /// Environment identifier.
    #[serde(default)]
    pub environment_id: Option<Uuid>,
    /// Steps in order.
    pub steps: Vec<ExecutionStep>,
}

/// An application of environments to a running server, as tracked by the
/// server's agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentExecution {
    /// Execution identifier.
    pub id: Uuid,
    /// Overall status.
    pub status: ExecutionStatus,
    /// Environments in the order they are applied.
    pub environments: Vec<EnvironmentApplication>,
}

impl EnvironmentExecution {
    /// Returns every step of every environment, in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &ExecutionStep> {
        self.environments.iter().flat_map(|e| e.steps.iter())
    }
}

/// A line of output from an environment execution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLogLine {
    /// Line number within the step output.
    pub line_number: u64,
    /// Line text without its line ending.
    pub content: String,
}
