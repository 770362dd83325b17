// Rust guideline compliant 2026-10-16

//! Server creation requests and display formatting.

use crate::error::{AppError, Result};
use crate::platform::Platform;
use faculty_core::{NodeType, Server, ServerResources, ServerStatus, SshDetails};
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// Machine type that requests shared resources.
pub const CUSTOM_MACHINE_TYPE: &str = "custom";

/// Works out the resources for a new server.
///
/// Any machine type other than `custom` requests a dedicated node of that
/// type; otherwise a share of `cores` CPUs and `memory_gb` GB is requested.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn requested_resources(
    cores: f64,
    memory_gb: f64,
    machine_type: Option<&str>,
) -> ServerResources {
    match machine_type {
        Some(node_type) if node_type != CUSTOM_MACHINE_TYPE => ServerResources::Dedicated {
            node_type: node_type.to_string(),
        },
        _ => ServerResources::Shared {
            milli_cpus: (cores * 1000.0) as u64,
            memory_mb: (memory_gb * 1000.0) as u64,
        },
    }
}

/// Formats a number with three significant digits, dropping trailing zeros.
#[must_use]
pub fn significant(value: f64) -> String {
    const PRECISION: i32 = 3;

    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", strip_zeros(mantissa), exponent.abs());
    }

    #[allow(clippy::cast_sign_loss)]
    let decimals = (PRECISION - 1 - exponent).max(0) as usize;
    strip_zeros(&format!("{value:.decimals$}")).to_string()
}

fn strip_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Formats the machine type, CPU count and memory of a server.
///
/// Shared servers have no machine type; dedicated servers show only their
/// node type.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn server_spec(server: &Server) -> (String, String, String) {
    match &server.resources {
        ServerResources::Shared {
            milli_cpus,
            memory_mb,
        } => (
            "-".to_string(),
            significant(*milli_cpus as f64 / 1000.0),
            format!("{}GB", significant(*memory_mb as f64 / 1000.0)),
        ),
        ServerResources::Dedicated { node_type } => {
            (node_type.clone(), "-".to_string(), "-".to_string())
        }
    }
}

/// Formats the row of a dedicated machine type: name, CPUs, RAM, GPUs, GPU
/// name and hourly cost.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn node_type_row(node_type: &NodeType) -> [String; 6] {
    [
        node_type.name.clone(),
        significant(node_type.milli_cpus as f64 / 1000.0),
        format!("{} GB", significant(node_type.memory_mb as f64 / 1000.0)),
        node_type
            .num_gpus
            .filter(|n| *n > 0)
            .map_or_else(|| "-".to_string(), |n| n.to_string()),
        node_type.gpu_name.clone().unwrap_or_else(|| "-".to_string()),
        format!("$ {:.3} / hour", node_type.cost_usd_per_hour),
    ]
}

/// Formats an OpenSSH client configuration entry for a server.
///
/// The host alias is `{server}-{project}`, with the project name lowercased
/// and spaces replaced by underscores.
#[must_use]
pub fn ssh_config_entry(server_name: &str, project_name: &str, details: &SshDetails) -> String {
    let host = format!("{server_name}-{}", project_name.to_lowercase().replace(' ', "_"));
    format!(
        "Host {host}\n    HostName {}\n    User {}\n    Port {}",
        details.hostname, details.username, details.port
    )
}

/// Returns the browser URL of a server's `https` service.
///
/// # Errors
///
/// Returns `AppError::MissingService` if the server exposes no such service.
pub fn browser_url(server: &Server) -> Result<String> {
    let service = server.service("https").ok_or_else(|| {
        AppError::MissingService(format!(
            "Server {} is not running an application that can be opened in a web browser",
            server.name
        ))
    })?;
    Ok(format!("{}://{}", service.scheme, service.host))
}

/// Polls the server list until a new server is running.
///
/// # Errors
///
/// Returns [`AppError::ServerFailed`] if the server enters the error state
/// or is no longer listed, or any error from listing servers.
pub fn wait_until_running(
    platform: &dyn Platform,
    project_id: Uuid,
    server_id: Uuid,
    interval: Duration,
) -> Result<()> {
    loop {
        let servers = platform.list_servers(project_id, None)?;
        let Some(server) = servers.iter().find(|s| s.id == server_id) else {
            return Err(AppError::ServerFailed(format!(
                "Server {server_id} was deleted before it started"
            )));
        };
        match server.status {
            ServerStatus::Running => return Ok(()),
            ServerStatus::Error => {
                return Err(AppError::ServerFailed(format!(
                    "Server {} failed to start",
                    server.name
                )))
            }
            ServerStatus::Creating | ServerStatus::Pending => {
                tracing::debug!(
                    %server_id,
                    status = %server.status,
                    "waiting for server to start"
                );
                thread::sleep(interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use faculty_core::{ServerStatus, Service};
    use uuid::Uuid;

    #[test]
    fn test_significant_matches_general_format() {
        assert_eq!(significant(1.0), "1");
        assert_eq!(significant(4.0), "4");
        assert_eq!(significant(0.5), "0.5");
        assert_eq!(significant(1.234), "1.23");
        assert_eq!(significant(15.26), "15.3");
        assert_eq!(significant(122.88), "123");
        assert_eq!(significant(1234.0), "1.23e+03");
        assert_eq!(significant(0.000_012_3), "1.23e-05");
    }

    #[test]
    fn test_requested_resources() {
        assert_eq!(
            requested_resources(1.5, 4.0, None),
            ServerResources::Shared {
                milli_cpus: 1500,
                memory_mb: 4000
            }
        );
        assert_eq!(
            requested_resources(1.0, 4.0, Some("custom")),
            ServerResources::Shared {
                milli_cpus: 1000,
                memory_mb: 4000
            }
        );
        assert_eq!(
            requested_resources(1.0, 4.0, Some("m5.xlarge")),
            ServerResources::Dedicated {
                node_type: "m5.xlarge".to_string()
            }
        );
    }

    #[test]
    fn test_ssh_config_entry() {
        let details = SshDetails {
            hostname: "cube.example.com".to_string(),
            port: 2222,
            username: "faculty".to_string(),
            key: String::new(),
        };
        assert_eq!(
            ssh_config_entry("notebook", "My Project", &details),
            "Host notebook-my_project\n    \
             HostName cube.example.com\n    \
             User faculty\n    \
             Port 2222"
        );
    }

    #[test]
    fn test_node_type_row() {
        let node_type = NodeType {
            name: "p2.xlarge".to_string(),
            milli_cpus: 4000,
            memory_mb: 61000,
            num_gpus: Some(1),
            gpu_name: Some("K80".to_string()),
            cost_usd_per_hour: 0.9,
        };
        assert_eq!(
            node_type_row(&node_type),
            ["p2.xlarge", "4", "61 GB", "1", "K80", "$ 0.900 / hour"].map(String::from)
        );
    }

    fn server_with_services(services: Vec<Service>) -> Server {
        Server {
            id: Uuid::from_u128(1),
            project_id: Uuid::from_u128(2),
            owner_id: Uuid::from_u128(3),
            name: "notebook".to_string(),
            server_type: "jupyter".to_string(),
            resources: ServerResources::Shared {
                milli_cpus: 1000,
                memory_mb: 4000,
            },
            created_at: Utc::now(),
            status: ServerStatus::Running,
            services,
        }
    }

    #[test]
    fn test_browser_url() {
        let server = server_with_services(vec![Service {
            name: "https".to_string(),
            host: "cube.example.com".to_string(),
            port: 443,
            scheme: "https".to_string(),
            uri: "https://cube.example.com".to_string(),
        }]);
        assert_eq!(browser_url(&server).unwrap(), "https://cube.example.com");
    }

    #[test]
    fn test_browser_url_without_web_service_exits_one() {
        let err = browser_url(&server_with_services(Vec::new())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server notebook is not running an application that can be opened in a web browser"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
