// Rust guideline compliant 2026-10-16

//! Faculty Core Library
//!
//! This crate provides the pure building blocks of the Faculty command-line client:
//! - Argument parsing (job parameter strings, run identifiers)
//! - Name resolution (mapping display names or IDs to resource IDs)
//! - Platform resource models
//! - Credentials and profile configuration
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod resolve;

pub use config::Profile;
pub use error::{Error, ErrorCategory, Result};
pub use models::{
    CompletedPart, DatasetObject, Environment, EnvironmentApplication, EnvironmentExecution,
    EnvironmentStepExecution, ExecutionStatus, ExecutionStep, Job, JobMetadata, LogPart, NewServer,
    NodeType, ObjectPage, Page, Pagination, PresignedUpload, Project, Run, RunPage, RunState,
    Server, ServerResources, ServerStatus, Service, SshDetails, StepLogLine, StorageProvider,
    Subrun, SubrunSummary, WorkspaceEntry,
};
pub use parse::{
    escape_split, parse_parameter_values, parse_run_identifier, ParameterValues, RunIdentifier,
};
pub use resolve::{Identified, Kind};
