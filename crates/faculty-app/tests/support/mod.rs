// Rust guideline compliant 2026-10-16

//! In-memory platform for exercising application services.

#![allow(dead_code)]

use chrono::Utc;
use faculty_app::{AppError, DatasetError, Platform, Result, ServerAgent};
use faculty_core::{
    DatasetObject, Environment, EnvironmentExecution, Job, JobMetadata, LogPart, NewServer,
    NodeType, ObjectPage, Page, Pagination, ParameterValues, Project, Run, RunPage, RunState,
    Server, ServerResources, ServerStatus, SshDetails, StepLogLine, Subrun, SubrunSummary,
    WorkspaceEntry,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::io::{Read, Write};
use uuid::Uuid;

pub const USER_ID: Uuid = Uuid::from_u128(0xfeed);

/// Records calls and serves fixed data.
#[derive(Default)]
pub struct FakePlatform {
    pub projects: Vec<Project>,
    pub servers: Vec<Server>,
    pub jobs: Vec<Job>,
    pub environments: Vec<Environment>,
    pub run_pages: Vec<RunPage>,
    pub workspace: Option<Vec<WorkspaceEntry>>,
    /// Dataset objects by path; directories end with `/` and have no content.
    pub objects: RefCell<BTreeMap<String, Vec<u8>>>,
    /// Objects per listing page; zero puts everything on one page.
    pub object_page_size: usize,
    /// Statuses reported by successive server listings.
    pub server_statuses: RefCell<VecDeque<ServerStatus>>,
    pub execution: Option<EnvironmentExecution>,
    pub step_logs: HashMap<Uuid, Vec<String>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    pub fn add_object(&self, path: &str, content: &str) {
        self.objects
            .borrow_mut()
            .insert(path.to_string(), content.as_bytes().to_vec());
    }

    pub fn object(&self, path: &str) -> Option<String> {
        self.objects
            .borrow()
            .get(path)
            .map(|content| String::from_utf8_lossy(content).into_owned())
    }

    pub fn object_paths(&self) -> Vec<String> {
        self.objects.borrow().keys().cloned().collect()
    }

    // Paths under a directory, or `None` when nothing is stored there.
    fn directory_contents(&self, path: &str) -> Option<Vec<String>> {
        let directory = format!("{}/", path.trim_end_matches('/'));
        let contents: Vec<String> = self
            .objects
            .borrow()
            .keys()
            .filter(|key| key.starts_with(&directory))
            .cloned()
            .collect();
        (!contents.is_empty()).then_some(contents)
    }
}

struct FakeAgent<'a> {
    platform: &'a FakePlatform,
}

impl ServerAgent for FakeAgent<'_> {
    fn latest_environment_execution(&self) -> Result<Option<EnvironmentExecution>> {
        self.platform.record("latest_environment_execution");
        Ok(self.platform.execution.clone())
    }

    fn stream_environment_step_logs(
        &self,
        _execution_id: Uuid,
        step_id: Uuid,
        on_line: &mut dyn FnMut(&StepLogLine),
    ) -> Result<()> {
        self.platform
            .record(format!("stream_environment_step_logs {step_id}"));
        let lines = self.platform.step_logs.get(&step_id).cloned().unwrap_or_default();
        for (number, content) in lines.into_iter().enumerate() {
            on_line(&StepLogLine {
                line_number: number as u64,
                content,
            });
        }
        Ok(())
    }
}

pub fn project(id: u128, name: &str) -> Project {
    Project {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        owner_id: USER_ID,
        archived_at: None,
    }
}

pub fn server(id: u128, name: &str, status: ServerStatus) -> Server {
    Server {
        id: Uuid::from_u128(id),
        project_id: Uuid::from_u128(1),
        owner_id: USER_ID,
        name: name.to_string(),
        server_type: "jupyter".to_string(),
        resources: ServerResources::Shared {
            milli_cpus: 1000,
            memory_mb: 4000,
        },
        created_at: Utc::now(),
        status,
        services: Vec::new(),
    }
}

pub fn job(id: u128, name: &str) -> Job {
    Job {
        id: Uuid::from_u128(id),
        metadata: JobMetadata {
            name: name.to_string(),
            description: String::new(),
        },
    }
}

pub fn environment(id: u128, name: &str) -> Environment {
    Environment {
        id: Uuid::from_u128(id),
        project_id: Uuid::from_u128(1),
        name: name.to_string(),
        description: None,
    }
}

pub fn run(number: u64, subruns: u64) -> Run {
    Run {
        id: Uuid::from_u128(u128::from(number) + 0x1000),
        run_number: number,
        state: RunState::Completed,
        submitted_at: None,
        started_at: None,
        ended_at: None,
        subruns: (1..=subruns)
            .map(|n| SubrunSummary {
                id: Uuid::from_u128(u128::from(n) + 0x2000),
                subrun_number: n,
                state: RunState::Completed,
            })
            .collect(),
    }
}

pub fn run_page(numbers: &[u64], start: u64, next: Option<Page>) -> RunPage {
    RunPage {
        runs: numbers.iter().map(|n| run(*n, 1)).collect(),
        pagination: Pagination {
            start,
            size: numbers.len() as u64,
            previous: None,
            next,
        },
    }
}

impl Platform for FakePlatform {
    fn authenticated_user_id(&self) -> Result<Uuid> {
        self.record("authenticated_user_id");
        Ok(USER_ID)
    }

    fn list_projects(&self, _user_id: Uuid) -> Result<Vec<Project>> {
        self.record("list_projects");
        Ok(self.projects.clone())
    }

    fn create_project(&self, user_id: Uuid, name: &str) -> Result<Project> {
        self.record(format!("create_project {name}"));
        Ok(Project {
            id: Uuid::from_u128(0xabc),
            name: name.to_string(),
            owner_id: user_id,
            archived_at: None,
        })
    }

    fn list_servers(&self, _project_id: Uuid, name: Option<&str>) -> Result<Vec<Server>> {
        self.record(format!("list_servers {}", name.unwrap_or("*")));
        let status = self.server_statuses.borrow_mut().pop_front();
        Ok(self
            .servers
            .iter()
            .filter(|s| name.map_or(true, |n| s.name == n))
            .cloned()
            .map(|mut s| {
                if let Some(status) = status {
                    s.status = status;
                }
                s
            })
            .collect())
    }

    fn list_user_servers(&self, _user_id: Uuid) -> Result<Vec<Server>> {
        self.record("list_user_servers");
        Ok(self.servers.clone())
    }

    fn get_server(&self, _project_id: Uuid, server_id: Uuid) -> Result<Server> {
        self.record("get_server");
        self.servers
            .iter()
            .find(|s| s.id == server_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("server not found".to_string()))
    }

    fn create_server(&self, _project_id: Uuid, _server: &NewServer) -> Result<Uuid> {
        self.record("create_server");
        Ok(Uuid::from_u128(0x5e))
    }

    fn delete_server(&self, _server_id: Uuid) -> Result<()> {
        self.record("delete_server");
        Ok(())
    }

    fn ssh_details(&self, _project_id: Uuid, _server_id: Uuid) -> Result<SshDetails> {
        self.record("ssh_details");
        Ok(SshDetails {
            hostname: "cube.example.com".to_string(),
            port: 2222,
            username: "faculty".to_string(),
            key: "KEY".to_string(),
        })
    }

    fn apply_environment(&self, _server_id: Uuid, _environment_id: Uuid) -> Result<()> {
        self.record("apply_environment");
        Ok(())
    }

    fn list_node_types(&self) -> Result<Vec<NodeType>> {
        self.record("list_node_types");
        Ok(Vec::new())
    }

    fn list_environments(&self, _project_id: Uuid) -> Result<Vec<Environment>> {
        self.record("list_environments");
        Ok(self.environments.clone())
    }

    fn list_jobs(&self, _project_id: Uuid) -> Result<Vec<Job>> {
        self.record("list_jobs");
        Ok(self.jobs.clone())
    }

    fn list_runs(&self, _project_id: Uuid, _job_id: Uuid, page: Option<Page>) -> Result<RunPage> {
        let start = page.map_or(0, |p| p.start);
        self.record(format!("list_runs {start}"));
        self.run_pages
            .iter()
            .find(|p| p.pagination.start == start)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no page at {start}")))
    }

    fn create_run(
        &self,
        _project_id: Uuid,
        _job_id: Uuid,
        parameter_values: &[ParameterValues],
    ) -> Result<Uuid> {
        self.record(format!("create_run {}", parameter_values.len()));
        Ok(Uuid::from_u128(0x9))
    }

    fn get_run(&self, _project_id: Uuid, _job_id: Uuid, run_number: u64) -> Result<Run> {
        self.record(format!("get_run {run_number}"));
        Ok(run(run_number, 1))
    }

    fn get_subrun(
        &self,
        _project_id: Uuid,
        _job_id: Uuid,
        _run_number: u64,
        subrun_number: u64,
    ) -> Result<Subrun> {
        self.record(format!("get_subrun {subrun_number}"));
        Ok(Subrun {
            id: Uuid::from_u128(0x2000 + u128::from(subrun_number)),
            subrun_number,
            state: RunState::Completed,
            environment_step_executions: Vec::new(),
        })
    }

    fn subrun_environment_step_logs(
        &self,
        _project_id: Uuid,
        _job_id: Uuid,
        _run_id: Uuid,
        _subrun_id: Uuid,
        _step_id: Uuid,
    ) -> Result<Vec<LogPart>> {
        self.record("subrun_environment_step_logs");
        Ok(Vec::new())
    }

    fn subrun_command_logs(
        &self,
        _project_id: Uuid,
        _job_id: Uuid,
        _run_id: Uuid,
        _subrun_id: Uuid,
    ) -> Result<Vec<LogPart>> {
        self.record("subrun_command_logs");
        Ok(vec![LogPart {
            log_part_number: 0,
            content: "done\n".to_string(),
        }])
    }

    fn list_workspace(
        &self,
        _project_id: Uuid,
        prefix: &str,
        depth: u32,
    ) -> Result<Vec<WorkspaceEntry>> {
        self.record(format!("list_workspace {prefix} {depth}"));
        self.workspace
            .clone()
            .ok_or_else(|| AppError::NotFound("no such prefix".to_string()))
    }

    fn list_objects(
        &self,
        _project_id: Uuid,
        prefix: &str,
        page_token: Option<&str>,
    ) -> Result<ObjectPage> {
        self.record(format!("list_objects {prefix} {}", page_token.unwrap_or("-")));
        let matching: Vec<DatasetObject> = self
            .objects
            .borrow()
            .iter()
            .filter(|(path, _)| path.starts_with(prefix))
            .map(|(path, content)| DatasetObject {
                path: path.clone(),
                size: content.len() as u64,
                etag: None,
                last_modified: None,
            })
            .collect();

        let start: usize = page_token.map_or(0, |token| token.parse().unwrap());
        let end = if self.object_page_size == 0 {
            matching.len()
        } else {
            (start + self.object_page_size).min(matching.len())
        };
        Ok(ObjectPage {
            objects: matching[start..end].to_vec(),
            next_page_token: (end < matching.len()).then(|| end.to_string()),
        })
    }

    fn create_directory(&self, _project_id: Uuid, path: &str, parents: bool) -> Result<()> {
        self.record(format!("create_directory {path} {parents}"));
        let directory = format!("{}/", path.trim_end_matches('/'));
        let mut objects = self.objects.borrow_mut();
        if objects.contains_key(&directory) {
            if parents {
                return Ok(());
            }
            return Err(DatasetError::PathAlreadyExists(path.to_string()).into());
        }
        let mut ancestor = String::from("/");
        for component in directory.split('/').filter(|c| !c.is_empty()) {
            ancestor.push_str(component);
            ancestor.push('/');
            objects.entry(ancestor.clone()).or_default();
        }
        Ok(())
    }

    fn copy_object(
        &self,
        _project_id: Uuid,
        source: &str,
        destination: &str,
        recursive: bool,
    ) -> Result<()> {
        self.record(format!("copy_object {source} {destination} {recursive}"));
        let file = self.objects.borrow().get(source).cloned();
        if let Some(content) = file {
            self.objects
                .borrow_mut()
                .insert(destination.to_string(), content);
            return Ok(());
        }
        let Some(contents) = self.directory_contents(source) else {
            return Err(DatasetError::PathNotFound(source.to_string()).into());
        };
        if !recursive {
            return Err(DatasetError::SourceIsADirectory(source.to_string()).into());
        }
        let from = format!("{}/", source.trim_end_matches('/'));
        let to = format!("{}/", destination.trim_end_matches('/'));
        let mut objects = self.objects.borrow_mut();
        for path in contents {
            let content = objects.get(&path).cloned().unwrap_or_default();
            objects.insert(path.replacen(&from, &to, 1), content);
        }
        Ok(())
    }

    fn delete_object(&self, _project_id: Uuid, path: &str, recursive: bool) -> Result<()> {
        self.record(format!("delete_object {path} {recursive}"));
        if self.objects.borrow_mut().remove(path).is_some() {
            return Ok(());
        }
        let Some(contents) = self.directory_contents(path) else {
            return Err(DatasetError::PathNotFound(path.to_string()).into());
        };
        if !recursive {
            return Err(DatasetError::TargetIsADirectory(path.to_string()).into());
        }
        let mut objects = self.objects.borrow_mut();
        for key in contents {
            objects.remove(&key);
        }
        Ok(())
    }

    fn download_object(
        &self,
        _project_id: Uuid,
        path: &str,
        destination: &mut dyn Write,
    ) -> Result<()> {
        self.record(format!("download_object {path}"));
        let content = self
            .objects
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| DatasetError::PathNotFound(path.to_string()))?;
        destination.write_all(&content)?;
        Ok(())
    }

    fn upload_object(&self, _project_id: Uuid, path: &str, content: &mut dyn Read) -> Result<()> {
        self.record(format!("upload_object {path}"));
        let mut body = Vec::new();
        content.read_to_end(&mut body)?;
        self.objects.borrow_mut().insert(path.to_string(), body);
        Ok(())
    }

    fn server_agent(&self, url: &str) -> Box<dyn ServerAgent + '_> {
        self.record(format!("server_agent {url}"));
        Box::new(FakeAgent { platform: self })
    }
}
