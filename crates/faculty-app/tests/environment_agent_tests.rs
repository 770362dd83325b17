// Rust guideline compliant 2026-10-16

mod support;

use faculty_app::error::EXIT_USAGE;
use faculty_app::{
    agent_url, execution_summary, latest_execution, stream_step_logs, AppError, ErrorCode,
    Platform,
};
use faculty_core::{
    EnvironmentApplication, EnvironmentExecution, ExecutionStatus, ExecutionStep, ServerStatus,
    Service,
};
use support::{server, FakePlatform};
use uuid::Uuid;

fn step(id: u128, command: &[&str], status: ExecutionStatus) -> ExecutionStep {
    ExecutionStep {
        id: Uuid::from_u128(id),
        command: command.iter().map(ToString::to_string).collect(),
        status,
    }
}

fn execution() -> EnvironmentExecution {
    EnvironmentExecution {
        id: Uuid::from_u128(0xe0),
        status: ExecutionStatus::Running,
        environments: vec![
            EnvironmentApplication {
                environment_id: Some(Uuid::from_u128(0xe1)),
                steps: vec![step(
                    0x51,
                    &["pip", "install", "numpy"],
                    ExecutionStatus::Success,
                )],
            },
            EnvironmentApplication {
                environment_id: None,
                steps: vec![
                    step(0x52, &["bash", "-c", "echo hello world"], ExecutionStatus::Running),
                    step(0x53, &["make"], ExecutionStatus::Queued),
                ],
            },
        ],
    }
}

fn platform_with_execution() -> FakePlatform {
    let mut platform = FakePlatform::new();
    platform.execution = Some(execution());
    platform.step_logs.insert(
        Uuid::from_u128(0x51),
        vec!["Collecting numpy".to_string(), "Installed".to_string()],
    );
    platform
        .step_logs
        .insert(Uuid::from_u128(0x52), vec!["hello world".to_string()]);
    platform
}

#[test]
fn test_agent_url_from_hound_service() {
    let mut notebook = server(5, "notebook", ServerStatus::Running);
    notebook.services.push(Service {
        name: "hound".to_string(),
        host: "cube-5.example.com".to_string(),
        port: 5000,
        scheme: "https".to_string(),
        uri: "https://cube-5.example.com:5000".to_string(),
    });
    assert_eq!(agent_url(&notebook).unwrap(), "https://cube-5.example.com:5000");
}

#[test]
fn test_agent_url_without_hound_service() {
    let notebook = server(5, "notebook", ServerStatus::Running);
    let err = agent_url(&notebook).unwrap_err();
    assert!(matches!(err, AppError::MissingService(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_status_summary() {
    let platform = platform_with_execution();
    let agent = platform.server_agent("https://agent");
    let execution = latest_execution(agent.as_ref()).unwrap();

    assert_eq!(
        execution_summary(&execution),
        vec![
            "Latest environment execution:",
            "  Status: running",
            "",
            "Environment 0",
            "",
            "Step 0:",
            "  Status:  success",
            "  Command: pip install numpy",
            "",
            "Environment 1",
            "",
            "Step 0:",
            "  Status:  running",
            "  Command: bash -c 'echo hello world'",
            "",
            "Step 1:",
            "  Status:  queued",
            "  Command: make",
        ]
    );
    assert_eq!(
        platform.calls(),
        vec!["server_agent https://agent", "latest_environment_execution"]
    );
}

#[test]
fn test_no_environment_applied() {
    let platform = FakePlatform::new();
    let agent = platform.server_agent("https://agent");

    let err = latest_execution(agent.as_ref()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No environment has yet been applied to this server."
    );
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[test]
fn test_logs_of_every_step_in_order() {
    let platform = platform_with_execution();
    let agent = platform.server_agent("https://agent");
    let execution = latest_execution(agent.as_ref()).unwrap();

    let mut lines = Vec::new();
    stream_step_logs(agent.as_ref(), &execution, None, &mut |line: &str| {
        lines.push(line.to_string());
    })
    .unwrap();
    assert_eq!(lines, vec!["Collecting numpy", "Installed", "hello world"]);
}

#[test]
fn test_logs_of_one_step_across_environments() {
    let platform = platform_with_execution();
    let agent = platform.server_agent("https://agent");
    let execution = latest_execution(agent.as_ref()).unwrap();

    let mut lines = Vec::new();
    stream_step_logs(agent.as_ref(), &execution, Some(1), &mut |line: &str| {
        lines.push(line.to_string());
    })
    .unwrap();
    assert_eq!(lines, vec!["hello world"]);
    assert_eq!(
        platform.calls().last().map(String::as_str),
        Some(format!("stream_environment_step_logs {}", Uuid::from_u128(0x52)).as_str())
    );
}

#[test]
fn test_logs_step_out_of_range() {
    let platform = platform_with_execution();
    let agent = platform.server_agent("https://agent");
    let execution = latest_execution(agent.as_ref()).unwrap();

    let err = stream_step_logs(agent.as_ref(), &execution, Some(3), &mut |_: &str| {}).unwrap_err();
    assert_eq!(err.to_string(), "step 3 out of range");
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert_eq!(err.exit_code(), EXIT_USAGE);
}
