// Rust guideline compliant 2026-10-16

//! The seam between commands and the platform REST services.

use crate::agent::ServerAgent;
use crate::error::Result;
use faculty_core::{
    Environment, Job, LogPart, NewServer, NodeType, ObjectPage, Page, ParameterValues, Project,
    Run, RunPage, Server, SshDetails, Subrun, WorkspaceEntry,
};
use std::io::{Read, Write};
use uuid::Uuid;

/// Operations the command-line client performs against the platform.
///
/// Each method maps to one REST call. Implementations perform no name
/// resolution; all arguments are identifiers.
pub trait Platform {
    /// Returns the ID of the user the credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns an error if the account service cannot be reached.
    fn authenticated_user_id(&self) -> Result<Uuid>;

    /// Lists the projects a user can access.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_projects(&self, user_id: Uuid) -> Result<Vec<Project>>;

    /// Creates a project owned by a user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the name is rejected.
    fn create_project(&self, user_id: Uuid, name: &str) -> Result<Project>;

    /// Lists the servers in a project, optionally only those with a given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_servers(&self, project_id: Uuid, name: Option<&str>) -> Result<Vec<Server>>;

    /// Lists the servers owned by a user across all projects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_user_servers(&self, user_id: Uuid) -> Result<Vec<Server>>;

    /// Fetches one server.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the server does not exist.
    fn get_server(&self, project_id: Uuid, server_id: Uuid) -> Result<Server>;

    /// Creates a server and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the request is rejected, e.g. for
    /// exceeding resource limits.
    fn create_server(&self, project_id: Uuid, server: &NewServer) -> Result<Uuid>;

    /// Terminates a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn delete_server(&self, server_id: Uuid) -> Result<()>;

    /// Returns SSH connection details for a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn ssh_details(&self, project_id: Uuid, server_id: Uuid) -> Result<SshDetails>;

    /// Applies an environment to a running server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn apply_environment(&self, server_id: Uuid, environment_id: Uuid) -> Result<()>;

    /// Lists machine types available for dedicated servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_node_types(&self) -> Result<Vec<NodeType>>;

    /// Lists the environments defined in a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_environments(&self, project_id: Uuid) -> Result<Vec<Environment>>;

    /// Lists the jobs defined in a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_jobs(&self, project_id: Uuid) -> Result<Vec<Job>>;

    /// Lists one page of a job's runs; `None` requests the first page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_runs(&self, project_id: Uuid, job_id: Uuid, page: Option<Page>) -> Result<RunPage>;

    /// Submits a run with one subrun per parameter set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the parameters are rejected.
    fn create_run(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        parameter_values: &[ParameterValues],
    ) -> Result<Uuid>;

    /// Fetches a run, including its subrun summaries.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if there is no such run.
    fn get_run(&self, project_id: Uuid, job_id: Uuid, run_number: u64) -> Result<Run>;

    /// Fetches a subrun, including its environment steps.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if there is no such subrun.
    fn get_subrun(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        run_number: u64,
        subrun_number: u64,
    ) -> Result<Subrun>;

    /// Returns the log of one environment step of a subrun.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn subrun_environment_step_logs(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        run_id: Uuid,
        subrun_id: Uuid,
        step_id: Uuid,
    ) -> Result<Vec<LogPart>>;

    /// Returns the log of a subrun's command.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn subrun_command_logs(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        run_id: Uuid,
        subrun_id: Uuid,
    ) -> Result<Vec<LogPart>>;

    /// Lists workspace entries below a prefix relative to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the prefix does not exist.
    fn list_workspace(&self, project_id: Uuid, prefix: &str, depth: u32)
        -> Result<Vec<WorkspaceEntry>>;

    /// Lists one page of the dataset objects whose paths start with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn list_objects(
        &self,
        project_id: Uuid,
        prefix: &str,
        page_token: Option<&str>,
    ) -> Result<ObjectPage>;

    /// Creates a dataset directory, and its parents when `parents` is set.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::PathAlreadyExists` if the directory exists.
    fn create_directory(&self, project_id: Uuid, path: &str, parents: bool) -> Result<()>;

    /// Copies a dataset object, or a whole directory when `recursive` is set.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::PathNotFound` if the source does not exist, or
    /// `DatasetError::SourceIsADirectory` for a directory without `recursive`.
    fn copy_object(
        &self,
        project_id: Uuid,
        source: &str,
        destination: &str,
        recursive: bool,
    ) -> Result<()>;

    /// Deletes a dataset object, or a whole directory when `recursive` is set.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::PathNotFound` if the path does not exist, or
    /// `DatasetError::TargetIsADirectory` for a directory without `recursive`.
    fn delete_object(&self, project_id: Uuid, path: &str, recursive: bool) -> Result<()>;

    /// Writes the content of a dataset object to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::PathNotFound` if the object does not exist.
    fn download_object(
        &self,
        project_id: Uuid,
        path: &str,
        destination: &mut dyn Write,
    ) -> Result<()>;

    /// Stores everything read from `content` as a dataset object.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the content or any transfer fails.
    fn upload_object(&self, project_id: Uuid, path: &str, content: &mut dyn Read) -> Result<()>;

    /// Returns a client for the agent of a running server at `url`.
    fn server_agent(&self, url: &str) -> Box<dyn ServerAgent + '_>;
}
