//! Container management for the DynamoDB Local test dependency.
//!
//! Pure functions build command arguments and environment; I/O functions run
//! the container runtime and poll health.

use std::time::Duration;

use tokio::process::Command;

use super::error::{IntegrationError, Result};

/// Container runtime (Docker or Podman).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerRuntime {
    #[default]
    Docker,
    Podman,
}

/// Specification for a container.
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    pub name: &'static str,
    pub image: &'static str,
    pub port: u16,
    pub command: Option<&'static str>,
    /// Status an HTTP GET on `/` returns once the service accepts requests.
    pub healthy_status: u16,
}

/// DynamoDB Local, kept in memory so every run starts from an empty table.
pub const DYNAMODB_SPEC: ContainerSpec = ContainerSpec {
    name: "catalog-dynamodb",
    image: "amazon/dynamodb-local:latest",
    port: 8000,
    command: Some("-jar DynamoDBLocal.jar -inMemory -sharedDb"),
    // DynamoDB answers a bare GET with 400 when it is up.
    healthy_status: 400,
};

// ============================================================================
// Pure Functions (Functional Core)
// ============================================================================

/// Builds arguments for `docker run` / `podman run`.
pub fn container_run_args(spec: &ContainerSpec) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "--rm".to_string(),
        "--name".to_string(),
        spec.name.to_string(),
        "-d".to_string(),
        "-p".to_string(),
        format!("{}:{}", spec.port, spec.port),
        spec.image.to_string(),
    ];

    if let Some(cmd) = spec.command {
        args.extend(cmd.split_whitespace().map(String::from));
    }

    args
}

/// Environment pointing the server and its tests at a local DynamoDB.
pub fn dynamodb_env(endpoint: &str, table_name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("DYNAMODB_ENDPOINT", endpoint.to_string()),
        ("AWS_ENDPOINT_URL", endpoint.to_string()),
        ("AWS_REGION", "us-east-1".to_string()),
        ("AWS_ACCESS_KEY_ID", "test".to_string()),
        ("AWS_SECRET_ACCESS_KEY", "test".to_string()),
        ("TABLE_NAME", table_name.to_string()),
    ]
}

/// Endpoint URL for a container published on localhost.
pub fn local_endpoint(spec: &ContainerSpec) -> String {
    format!("http://localhost:{}", spec.port)
}

/// Returns the command name for the container runtime.
pub fn runtime_command(runtime: ContainerRuntime) -> &'static str {
    match runtime {
        ContainerRuntime::Docker => "docker",
        ContainerRuntime::Podman => "podman",
    }
}

// ============================================================================
// I/O Functions (Imperative Shell)
// ============================================================================

/// Detects which container runtime is available, Docker first.
pub async fn detect_runtime() -> Result<ContainerRuntime> {
    for runtime in [ContainerRuntime::Docker, ContainerRuntime::Podman] {
        let output = Command::new(runtime_command(runtime))
            .arg("--version")
            .output()
            .await;

        if matches!(output, Ok(output) if output.status.success()) {
            return Ok(runtime);
        }
    }

    Err(IntegrationError::DockerNotAvailable(
        "Neither docker nor podman found in PATH".to_string(),
    ))
}

/// Returns true if a container with the given name is running.
pub async fn is_running(runtime: ContainerRuntime, name: &str) -> Result<bool> {
    let output = Command::new(runtime_command(runtime))
        .args(["ps", "-q", "-f", &format!("name={}", name)])
        .output()
        .await?;

    Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
}

/// Stops and removes a container.
///
/// Errors are ignored since the container might not exist.
pub async fn stop_container(runtime: ContainerRuntime, name: &str) {
    let cmd = runtime_command(runtime);

    let _ = Command::new(cmd).args(["stop", name]).output().await;
    let _ = Command::new(cmd).args(["rm", "-f", name]).output().await;
}

/// Starts a container, replacing any stopped container with the same name.
pub async fn start_container(runtime: ContainerRuntime, spec: &ContainerSpec) -> Result<()> {
    stop_container(runtime, spec.name).await;

    let output = Command::new(runtime_command(runtime))
        .args(container_run_args(spec))
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IntegrationError::ContainerFailed(format!(
            "Failed to start container '{}': {}",
            spec.name, stderr
        )));
    }

    Ok(())
}

/// Polls the container's HTTP endpoint until it answers or the timeout passes.
pub async fn wait_for_health(spec: &ContainerSpec, timeout: Duration) -> Result<()> {
    let start = std::time::Instant::now();
    let poll_interval = Duration::from_millis(500);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(|e| IntegrationError::ContainerFailed(e.to_string()))?;
    let url = format!("{}/", local_endpoint(spec));

    while start.elapsed() < timeout {
        if let Ok(response) = client.get(&url).send().await {
            if response.status().as_u16() == spec.healthy_status {
                return Ok(());
            }
        }

        tokio::time::sleep(poll_interval).await;
    }

    Err(IntegrationError::ContainerNotHealthy {
        name: spec.name.to_string(),
        timeout_secs: timeout.as_secs(),
    })
}
