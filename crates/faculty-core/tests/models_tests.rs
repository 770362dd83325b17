// Rust guideline compliant 2026-10-16

//! Deserialization tests for platform payloads.

use faculty_core::{
    EnvironmentExecution, ExecutionStatus, Job, ObjectPage, PresignedUpload, Project, RunPage,
    RunState, Server, ServerResources, ServerStatus, StorageProvider, WorkspaceEntry,
};

#[test]
fn test_project_payload() {
    let json = r#"{
        "projectId": "7ab1c7f8-5e35-4bcb-a1f1-c1d0d1e4c6a2",
        "name": "test-project",
        "ownerId": "0d1f29b4-2e4b-4d42-9e8a-1f63bce0c84a",
        "archivedAt": null
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.name, "test-project");
    assert!(project.archived_at.is_none());
}

#[test]
fn test_server_payload() {
    let json = r#"{
        "instanceId": "0a8f1f04-7d9a-4f0e-8ff7-0a7c4ea5d1a1",
        "projectId": "7ab1c7f8-5e35-4bcb-a1f1-c1d0d1e4c6a2",
        "ownerId": "0d1f29b4-2e4b-4d42-9e8a-1f63bce0c84a",
        "name": "test-server",
        "type": "jupyter",
        "instanceSize": {"milliCpus": 1000, "memoryMb": 4000},
        "createdAt": "2020-01-01T00:00:00Z",
        "status": "running",
        "services": [
            {
                "name": "https",
                "host": "h.example.com",
                "port": 443,
                "scheme": "https",
                "uri": "https://h.example.com"
            }
        ]
    }"#;
    let server: Server = serde_json::from_str(json).unwrap();
    assert_eq!(server.status, ServerStatus::Running);
    assert_eq!(server.server_type, "jupyter");
    assert_eq!(
        server.resources,
        ServerResources::Shared {
            milli_cpus: 1000,
            memory_mb: 4000
        }
    );
    assert_eq!(server.service("https").map(|s| s.port), Some(443));
    assert!(server.service("hound").is_none());
}

#[test]
fn test_job_payload() {
    let json = r#"{
        "jobId": "1b6f0a1c-91f6-4bb6-95f6-1f3c9a7b2d10",
        "meta": {"name": "nightly", "description": "Nightly retrain"}
    }"#;
    let job: Job = serde_json::from_str(json).unwrap();
    assert_eq!(job.name(), "nightly");
    assert_eq!(job.metadata.description, "Nightly retrain");
}

#[test]
fn test_run_page_payload() {
    let json = r#"{
        "runs": [{
            "runId": "5b7f0a1c-91f6-4bb6-95f6-1f3c9a7b2d10",
            "runNumber": 3,
            "state": "completed",
            "submittedAt": "2021-03-01T10:00:00Z",
            "startedAt": "2021-03-01T10:00:05Z",
            "endedAt": null
        }],
        "pagination": {"start": 0, "size": 1, "previous": null, "next": {"start": 1, "limit": 1}}
    }"#;
    let page: RunPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.runs[0].run_number, 3);
    assert_eq!(page.runs[0].state, RunState::Completed);
    assert!(page.runs[0].subruns.is_empty());
    assert_eq!(page.pagination.next.map(|p| p.start), Some(1));
}

#[test]
fn test_workspace_listing_payload() {
    let json = r#"{
        "type": "directory",
        "path": "/",
        "name": "",
        "content": [
            {"type": "directory", "path": "/data", "name": "data", "content": []},
            {"type": "file", "path": "/notes.txt", "name": "notes.txt", "size": 12}
        ]
    }"#;
    let entry: WorkspaceEntry = serde_json::from_str(json).unwrap();
    match entry {
        WorkspaceEntry::Directory { content, .. } => {
            assert!(content[0].is_directory());
            assert_eq!(content[1].path(), "/notes.txt");
        }
        WorkspaceEntry::File { .. } => panic!("expected a directory"),
    }
}

#[test]
fn test_object_page_payload() {
    let json = r#"{
        "objects": [
            {"path": "/", "size": 0, "etag": null, "lastModified": null},
            {
                "path": "/input.csv",
                "size": 1024,
                "etag": "\"9b2cf535f27731c974343645a3985328\"",
                "lastModified": "2020-01-02T03:04:05Z"
            }
        ],
        "nextPageToken": "abc"
    }"#;
    let page: ObjectPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.objects.len(), 2);
    assert_eq!(page.objects[1].path, "/input.csv");
    assert_eq!(page.objects[1].size, 1024);
    assert!(page.objects[1].last_modified.is_some());
    assert_eq!(page.next_page_token.as_deref(), Some("abc"));

    let last: ObjectPage = serde_json::from_str(r#"{"objects": []}"#).unwrap();
    assert!(last.next_page_token.is_none());
}

#[test]
fn test_presigned_upload_payloads() {
    let s3: PresignedUpload =
        serde_json::from_str(r#"{"provider": "S3", "uploadId": "u-1"}"#).unwrap();
    assert_eq!(s3.provider, StorageProvider::S3);
    assert_eq!(s3.upload_id.as_deref(), Some("u-1"));

    let gcs: PresignedUpload =
        serde_json::from_str(r#"{"provider": "GCS", "url": "https://storage/session"}"#).unwrap();
    assert_eq!(gcs.provider, StorageProvider::Gcs);
    assert_eq!(gcs.url.as_deref(), Some("https://storage/session"));
}

#[test]
fn test_environment_execution_payload() {
    let json = r#"{
        "id": "5f1a0d6e-8a3b-4a6e-9d0b-1f2e3d4c5b6a",
        "status": "failure",
        "environments": [
            {
                "environmentId": "0d1f29b4-2e4b-4d42-9e8a-1f63bce0c84a",
                "steps": [
                    {
                        "id": "7ab1c7f8-5e35-4bcb-a1f1-c1d0d1e4c6a2",
                        "command": ["pip", "install", "numpy"],
                        "status": "success"
                    },
                    {
                        "id": "c4f3a1d2-0b9e-4c8d-a7f6-e5d4c3b2a190",
                        "command": ["bash", "-c", "exit 1"],
                        "status": "failure"
                    }
                ]
            }
        ]
    }"#;
    let execution: EnvironmentExecution = serde_json::from_str(json).unwrap();
    assert_eq!(execution.status, ExecutionStatus::Failure);
    let statuses: Vec<_> = execution.steps().map(|step| step.status).collect();
    assert_eq!(statuses, vec![ExecutionStatus::Success, ExecutionStatus::Failure]);
}
