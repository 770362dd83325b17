// Rust guideline compliant 2026-10-16

//! Blocking HTTP implementation of [`Platform`].

use crate::agent::{read_log_stream, ServerAgent};
use crate::error::{AppError, DatasetError, Result};
use crate::platform::Platform;
use faculty_core::{
    CompletedPart, Environment, EnvironmentExecution, Job, LogPart, NewServer, NodeType,
    ObjectPage, Page, ParameterValues, PresignedUpload, Profile, Project, Run, RunPage, Server,
    SshDetails, StepLogLine, StorageProvider, Subrun, WorkspaceEntry,
};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, ETAG};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::{self, BufReader, Read, Write};
use std::time::{Duration, Instant};
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Object transfers and log streams may run far longer than API calls.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

// S3 rejects multipart parts smaller than this, except the last.
const UPLOAD_CHUNK_SIZE: usize = 5 * 1024 * 1024;

// Tokens are refreshed this long before the platform says they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

const ACCOUNT_SERVICE: &str = "hudson";
const PROJECT_SERVICE: &str = "casebook";
const SERVER_SERVICE: &str = "galleon";
const CLUSTER_SERVICE: &str = "klostermann";
const ENVIRONMENT_SERVICE: &str = "baskerville";
const JOB_SERVICE: &str = "steve";
const LOG_SERVICE: &str = "wozniak";
const WORKSPACE_SERVICE: &str = "workspace";
const OBJECT_SERVICE: &str = "hoard";

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + EXPIRY_MARGIN < self.expires_at
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticatedAccount {
    user_id: Uuid,
}

#[derive(Deserialize)]
struct AuthenticateResponse {
    account: AuthenticatedAccount,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewProject<'a> {
    owner_id: Uuid,
    name: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedServer {
    instance_id: Uuid,
}

#[derive(Serialize)]
struct ParameterValue<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewRun<'a> {
    parameter_value_sets: Vec<Vec<ParameterValue<'a>>>,
}

impl<'a> NewRun<'a> {
    // Parameters within a set are sorted by name for a stable request body.
    fn from_values(parameter_values: &'a [ParameterValues]) -> Self {
        let parameter_value_sets = parameter_values
            .iter()
            .map(|values| {
                let mut set: Vec<ParameterValue<'a>> = values
                    .iter()
                    .map(|(name, value)| ParameterValue { name, value })
                    .collect();
                set.sort_by(|a, b| a.name.cmp(b.name));
                set
            })
            .collect();
        Self {
            parameter_value_sets,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedRun {
    run_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogPartsResponse {
    log_parts: Vec<LogPart>,
}

#[derive(Serialize)]
struct ObjectPath<'a> {
    path: &'a str,
}

#[derive(Deserialize)]
struct PresignedUrl {
    url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PartRequest<'a> {
    path: &'a str,
    upload_id: &'a str,
    part_number: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteUpload<'a> {
    path: &'a str,
    upload_id: &'a str,
    completed_parts: &'a [CompletedPart],
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// Gives object store failures their dataset meaning for `path`.
fn object_error(
    err: AppError,
    path: &str,
    bad_request: Option<fn(String) -> DatasetError>,
) -> AppError {
    let path = path.to_string();
    let dataset = match err {
        AppError::NotFound(_) => DatasetError::PathNotFound(path),
        AppError::Http { status: 409, .. } => DatasetError::PathAlreadyExists(path),
        AppError::BadRequest(message) => match bad_request {
            Some(kind) => kind(path),
            None => return AppError::BadRequest(message),
        },
        other => return other,
    };
    dataset.into()
}

fn flag(value: bool) -> String {
    u8::from(value).to_string()
}

fn read_chunk(content: &mut dyn Read) -> Result<Vec<u8>> {
    let mut chunk = Vec::with_capacity(UPLOAD_CHUNK_SIZE);
    (&mut *content)
        .take(UPLOAD_CHUNK_SIZE as u64)
        .read_to_end(&mut chunk)?;
    Ok(chunk)
}

/// Platform client speaking to the REST services of one deployment.
pub struct HttpPlatform {
    client: Client,
    profile: Profile,
    token: RefCell<Option<AccessToken>>,
}

impl HttpPlatform {
    /// Creates a client for the deployment described by `profile`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Transport` if the HTTP client cannot be built.
    pub fn new(profile: Profile) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            profile,
            token: RefCell::new(None),
        })
    }

    /// Returns a valid access token, requesting a new one when needed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the credentials are rejected.
    pub fn access_token(&self) -> Result<String> {
        if let Some(token) = self.token.borrow().as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        let url = format!("{}/access_token", self.profile.service_url(ACCOUNT_SERVICE));
        tracing::debug!(url = %url, "requesting access token");
        let request = self.client.post(&url).json(&TokenRequest {
            client_id: &self.profile.client_id,
            client_secret: &self.profile.client_secret,
            grant_type: "client_credentials",
        });
        let response: TokenResponse = Self::send(request)?;

        let token = AccessToken {
            value: response.access_token,
            expires_at: Instant::now() + Duration::from_secs(response.expires_in),
        };
        let value = token.value.clone();
        *self.token.borrow_mut() = Some(token);
        Ok(value)
    }

    fn url(&self, service: &str, path: &str) -> String {
        format!("{}{}", self.profile.service_url(service), path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.bearer_auth(self.access_token()?))
    }

    fn get<T: DeserializeOwned>(&self, service: &str, path: &str) -> Result<T> {
        let url = self.url(service, path);
        tracing::debug!(method = "GET", url = %url, "platform request");
        Self::send(self.authorized(self.client.get(&url))?)
    }

    fn get_with_query<T: DeserializeOwned>(
        &self,
        service: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(service, path);
        tracing::debug!(method = "GET", url = %url, ?query, "platform request");
        Self::send(self.authorized(self.client.get(&url).query(query))?)
    }

    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        service: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(service, path);
        tracing::debug!(method = "POST", url = %url, "platform request");
        Self::send(self.authorized(self.client.post(&url).json(body))?)
    }

    fn request(&self, method: Method, service: &str, path: &str) -> Result<RequestBuilder> {
        let url = self.url(service, path);
        tracing::debug!(method = %method, url = %url, "platform request");
        self.authorized(self.client.request(method, &url))
    }

    // Uploads S3 parts of at least the minimum size; an empty object is one
    // empty part.
    fn upload_parts(
        &self,
        project_id: Uuid,
        path: &str,
        upload_id: &str,
        content: &mut dyn Read,
    ) -> Result<()> {
        let mut parts: Vec<CompletedPart> = Vec::new();
        let mut part_number = 0;
        loop {
            let chunk = read_chunk(content)?;
            if chunk.is_empty() && !parts.is_empty() {
                break;
            }
            let last = chunk.len() < UPLOAD_CHUNK_SIZE;
            part_number += 1;

            let presigned: PresignedUrl = self.post(
                OBJECT_SERVICE,
                &format!("/project/{project_id}/presign/upload/part"),
                &PartRequest {
                    path,
                    upload_id,
                    part_number,
                },
            )?;
            tracing::debug!(path, part_number, size = chunk.len(), "uploading part");
            let response = Self::checked(
                self.client
                    .put(&presigned.url)
                    .body(chunk)
                    .timeout(TRANSFER_TIMEOUT),
            )?;
            let etag = response
                .headers()
                .get(ETAG)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| {
                    AppError::UnexpectedResponse("uploaded part has no ETag".to_string())
                })?;
            parts.push(CompletedPart {
                part_number,
                etag: etag.to_string(),
            });

            if last {
                break;
            }
        }

        let request = self.request(
            Method::PUT,
            OBJECT_SERVICE,
            &format!("/project/{project_id}/presign/upload/complete"),
        )?;
        Self::send_empty(request.json(&CompleteUpload {
            path,
            upload_id,
            completed_parts: &parts,
        }))
    }

    fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = Self::checked(request)?;
        let text = response.text()?;
        serde_json::from_str(&text).map_err(|err| {
            AppError::UnexpectedResponse(format!("could not decode platform response: {err}"))
        })
    }

    fn send_empty(request: RequestBuilder) -> Result<()> {
        Self::checked(request).map(|_| ())
    }

    fn checked(request: RequestBuilder) -> Result<reqwest::blocking::Response> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "platform request failed");
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|parsed| parsed.error)
            .unwrap_or_else(|_| body.clone());

        Err(match status {
            StatusCode::BAD_REQUEST => AppError::BadRequest(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            _ => AppError::Http {
                status: status.as_u16(),
                body,
            },
        })
    }
}

impl Platform for HttpPlatform {
    fn authenticated_user_id(&self) -> Result<Uuid> {
        let response: AuthenticateResponse = self.get(ACCOUNT_SERVICE, "/authenticate")?;
        Ok(response.account.user_id)
    }

    fn list_projects(&self, user_id: Uuid) -> Result<Vec<Project>> {
        self.get(PROJECT_SERVICE, &format!("/user/{user_id}"))
    }

    fn create_project(&self, user_id: Uuid, name: &str) -> Result<Project> {
        self.post(
            PROJECT_SERVICE,
            "/project",
            &NewProject {
                owner_id: user_id,
                name,
            },
        )
    }

    fn list_servers(&self, project_id: Uuid, name: Option<&str>) -> Result<Vec<Server>> {
        let query: Vec<(&str, String)> =
            name.map(|n| ("name", n.to_string())).into_iter().collect();
        self.get_with_query(SERVER_SERVICE, &format!("/instance/{project_id}"), &query)
    }

    fn list_user_servers(&self, user_id: Uuid) -> Result<Vec<Server>> {
        self.get(SERVER_SERVICE, &format!("/instance/user/{user_id}"))
    }

    fn get_server(&self, project_id: Uuid, server_id: Uuid) -> Result<Server> {
        self.get(SERVER_SERVICE, &format!("/instance/{project_id}/{server_id}"))
    }

    fn create_server(&self, project_id: Uuid, server: &NewServer) -> Result<Uuid> {
        let created: CreatedServer =
            self.post(SERVER_SERVICE, &format!("/instance/{project_id}"), server)?;
        Ok(created.instance_id)
    }

    fn delete_server(&self, server_id: Uuid) -> Result<()> {
        let url = self.url(SERVER_SERVICE, &format!("/instance/{server_id}"));
        tracing::debug!(method = "DELETE", url = %url, "platform request");
        Self::send_empty(self.authorized(self.client.delete(&url))?)
    }

    fn ssh_details(&self, project_id: Uuid, server_id: Uuid) -> Result<SshDetails> {
        self.get(SERVER_SERVICE, &format!("/instance/{project_id}/{server_id}/ssh"))
    }

    fn apply_environment(&self, server_id: Uuid, environment_id: Uuid) -> Result<()> {
        let url = self.url(
            SERVER_SERVICE,
            &format!("/instance/{server_id}/environment/{environment_id}"),
        );
        tracing::debug!(method = "PUT", url = %url, "platform request");
        Self::send_empty(self.authorized(self.client.put(&url))?)
    }

    fn list_node_types(&self) -> Result<Vec<NodeType>> {
        self.get_with_query(
            CLUSTER_SERVICE,
            "/node-type/single-tenanted",
            &[("interactiveInstancesConfigured", "true".to_string())],
        )
    }

    fn list_environments(&self, project_id: Uuid) -> Result<Vec<Environment>> {
        self.get(ENVIRONMENT_SERVICE, &format!("/project/{project_id}/environment"))
    }

    fn list_jobs(&self, project_id: Uuid) -> Result<Vec<Job>> {
        self.get(JOB_SERVICE, &format!("/project/{project_id}/job"))
    }

    fn list_runs(&self, project_id: Uuid, job_id: Uuid, page: Option<Page>) -> Result<RunPage> {
        let query: Vec<(&str, String)> = page
            .map(|p| vec![("start", p.start.to_string()), ("limit", p.limit.to_string())])
            .unwrap_or_default();
        self.get_with_query(
            JOB_SERVICE,
            &format!("/project/{project_id}/job/{job_id}/run"),
            &query,
        )
    }

    fn create_run(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        parameter_values: &[ParameterValues],
    ) -> Result<Uuid> {
        let created: CreatedRun = self.post(
            JOB_SERVICE,
            &format!("/project/{project_id}/job/{job_id}/run"),
            &NewRun::from_values(parameter_values),
        )?;
        Ok(created.run_id)
    }

    fn get_run(&self, project_id: Uuid, job_id: Uuid, run_number: u64) -> Result<Run> {
        self.get(
            JOB_SERVICE,
            &format!("/project/{project_id}/job/{job_id}/run/{run_number}"),
        )
    }

    fn get_subrun(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        run_number: u64,
        subrun_number: u64,
    ) -> Result<Subrun> {
        self.get(
            JOB_SERVICE,
            &format!("/project/{project_id}/job/{job_id}/run/{run_number}/subrun/{subrun_number}"),
        )
    }

    fn subrun_environment_step_logs(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        run_id: Uuid,
        subrun_id: Uuid,
        step_id: Uuid,
    ) -> Result<Vec<LogPart>> {
        let response: LogPartsResponse = self.get(
            LOG_SERVICE,
            &format!(
                "/project/{project_id}/job/{job_id}/run/{run_id}/subrun/{subrun_id}\
                 /environment-step/{step_id}"
            ),
        )?;
        Ok(response.log_parts)
    }

    fn subrun_command_logs(
        &self,
        project_id: Uuid,
        job_id: Uuid,
        run_id: Uuid,
        subrun_id: Uuid,
    ) -> Result<Vec<LogPart>> {
        let response: LogPartsResponse = self.get(
            LOG_SERVICE,
            &format!("/project/{project_id}/job/{job_id}/run/{run_id}/subrun/{subrun_id}/command"),
        )?;
        Ok(response.log_parts)
    }

    fn list_workspace(
        &self,
        project_id: Uuid,
        prefix: &str,
        depth: u32,
    ) -> Result<Vec<WorkspaceEntry>> {
        self.get_with_query(
            WORKSPACE_SERVICE,
            &format!("/project/{project_id}/file"),
            &[("prefix", prefix.to_string()), ("depth", depth.to_string())],
        )
    }

    fn list_objects(
        &self,
        project_id: Uuid,
        prefix: &str,
        page_token: Option<&str>,
    ) -> Result<ObjectPage> {
        let query: Vec<(&str, String)> = page_token
            .map(|token| ("pageToken", token.to_string()))
            .into_iter()
            .collect();
        self.get_with_query(
            OBJECT_SERVICE,
            &format!("/project/{project_id}/object-list{prefix}"),
            &query,
        )
    }

    fn create_directory(&self, project_id: Uuid, path: &str, parents: bool) -> Result<()> {
        let request = self.request(
            Method::PUT,
            OBJECT_SERVICE,
            &format!("/project/{project_id}/directory{path}"),
        )?;
        Self::send_empty(request.query(&[("parents", flag(parents))]))
            .map_err(|err| object_error(err, path, None))
    }

    fn copy_object(
        &self,
        project_id: Uuid,
        source: &str,
        destination: &str,
        recursive: bool,
    ) -> Result<()> {
        let request = self.request(
            Method::PUT,
            OBJECT_SERVICE,
            &format!("/project/{project_id}/object{destination}"),
        )?;
        let query = [("sourcePath", source.to_string()), ("recursive", flag(recursive))];
        Self::send_empty(request.query(&query))
            .map_err(|err| object_error(err, source, Some(DatasetError::SourceIsADirectory)))
    }

    fn delete_object(&self, project_id: Uuid, path: &str, recursive: bool) -> Result<()> {
        let request = self.request(
            Method::DELETE,
            OBJECT_SERVICE,
            &format!("/project/{project_id}/object{path}"),
        )?;
        Self::send_empty(request.query(&[("recursive", flag(recursive))]))
            .map_err(|err| object_error(err, path, Some(DatasetError::TargetIsADirectory)))
    }

    fn download_object(
        &self,
        project_id: Uuid,
        path: &str,
        destination: &mut dyn Write,
    ) -> Result<()> {
        let presigned: PresignedUrl = self
            .post(
                OBJECT_SERVICE,
                &format!("/project/{project_id}/presign/download"),
                &ObjectPath { path },
            )
            .map_err(|err| object_error(err, path, None))?;

        tracing::debug!(path, "downloading object");
        let mut response =
            Self::checked(self.client.get(&presigned.url).timeout(TRANSFER_TIMEOUT))?;
        io::copy(&mut response, destination)?;
        Ok(())
    }

    fn upload_object(&self, project_id: Uuid, path: &str, content: &mut dyn Read) -> Result<()> {
        let upload: PresignedUpload = self.post(
            OBJECT_SERVICE,
            &format!("/project/{project_id}/presign/upload"),
            &ObjectPath { path },
        )?;

        match upload.provider {
            StorageProvider::S3 => {
                let upload_id = upload.upload_id.ok_or_else(|| {
                    AppError::UnexpectedResponse("S3 upload has no upload ID".to_string())
                })?;
                self.upload_parts(project_id, path, &upload_id, content)
            }
            StorageProvider::Gcs => {
                let url = upload.url.ok_or_else(|| {
                    AppError::UnexpectedResponse("GCS upload has no session URL".to_string())
                })?;
                let mut body = Vec::new();
                content.read_to_end(&mut body)?;
                tracing::debug!(path, size = body.len(), "uploading object");
                Self::send_empty(self.client.put(&url).body(body).timeout(TRANSFER_TIMEOUT))
            }
        }
    }

    fn server_agent(&self, url: &str) -> Box<dyn ServerAgent + '_> {
        Box::new(HttpServerAgent {
            platform: self,
            base_url: url.trim_end_matches('/').to_string(),
        })
    }
}

/// Client for the agent of one server, authenticated as the platform user.
struct HttpServerAgent<'a> {
    platform: &'a HttpPlatform,
    base_url: String,
}

impl ServerAgent for HttpServerAgent<'_> {
    fn latest_environment_execution(&self) -> Result<Option<EnvironmentExecution>> {
        let url = format!("{}/api/execution/latest", self.base_url);
        tracing::debug!(method = "GET", url = %url, "agent request");
        let request = self.platform.authorized(self.platform.client.get(&url))?;
        match HttpPlatform::send(request) {
            Ok(execution) => Ok(Some(execution)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn stream_environment_step_logs(
        &self,
        execution_id: Uuid,
        step_id: Uuid,
        on_line: &mut dyn FnMut(&StepLogLine),
    ) -> Result<()> {
        let url = format!("{}/api/execution/{execution_id}/{step_id}/logs", self.base_url);
        tracing::debug!(method = "GET", url = %url, "agent request");
        let request = self.platform.client.get(&url).header(ACCEPT, "text/event-stream");
        let request = self.platform.authorized(request.timeout(TRANSFER_TIMEOUT))?;
        let response = HttpPlatform::checked(request)?;
        read_log_stream(BufReader::new(response), on_line)
    }
}
