//! Integration test infrastructure.
//!
//! Runs the DynamoDB-backed repository tests (marked `#[ignore]`) against
//! DynamoDB Local.
//!
//! # Usage
//!
//! ```bash
//! # Start DynamoDB Local, deploy the table, run the tests, stop the container
//! cargo xtask integration
//!
//! # Skip container management (assumes DynamoDB Local is already running)
//! cargo xtask integration --no-docker
//! ```

mod containers;
pub mod error;

pub use error::{IntegrationError, Result};

use std::time::Duration;

use containers::{
    detect_runtime, dynamodb_env, is_running, local_endpoint, start_container, stop_container,
    wait_for_health, ContainerRuntime, DYNAMODB_SPEC,
};

use crate::prelude::*;

/// Integration test command.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Run integration tests against DynamoDB Local.

The command starts a DynamoDB Local container, creates the products table
with `cargo xtask dynamodb deploy`, runs the ignored DynamoDB tests of the
catalog crate, and stops the container afterward.")]
pub struct IntegrationCommand {
    /// Skip Docker container management (assume DynamoDB Local is already running).
    #[arg(long)]
    pub no_docker: bool,

    /// Keep containers running after tests complete.
    #[arg(long)]
    pub keep_containers: bool,

    /// Timeout in seconds for container health checks.
    #[arg(long, default_value = "30")]
    pub health_timeout: u64,

    /// Table name used by the tests.
    #[arg(long, default_value = "products")]
    pub table_name: String,
}

/// Main entry point for integration command.
pub async fn run(command: IntegrationCommand, global: crate::Global) -> Result<()> {
    if !global.is_silent() {
        aprintln!("{}", p_b("Integration Tests"));
        aprintln!();
    }

    let runtime = if command.no_docker {
        if !global.is_silent() {
            aprintln!(
                "{} {}",
                p_y("⚠️"),
                "Skipping DynamoDB container management (--no-docker)"
            );
        }
        None
    } else {
        Some(detect_runtime().await?)
    };

    let started = match runtime {
        Some(rt) => start_dynamodb_container(command.health_timeout, &global, rt).await?,
        None => false,
    };

    let env_vars = dynamodb_env(&local_endpoint(&DYNAMODB_SPEC), &command.table_name);

    // Run setup and tests before cleanup so the container never outlives a failure.
    let outcome = setup_and_test(&env_vars, &command.table_name, &global).await;

    if let Some(rt) = runtime.filter(|_| started) {
        if command.keep_containers {
            if !global.is_silent() {
                aprintln!("{} {}", p_y("⚠️"), "Containers left running (--keep-containers)");
            }
        } else {
            stop_dynamodb_container(&global, rt).await;
        }
    }

    aprintln!();
    match outcome {
        Ok(()) => {
            aprintln!("{} {}", p_g("✅"), p_g("All integration tests passed!"));
            Ok(())
        }
        Err(e) => {
            aprintln!("{} {}", p_r("❌"), p_r("Some integration tests failed"));
            Err(e)
        }
    }
}

async fn setup_and_test(
    env_vars: &[(&'static str, String)],
    table_name: &str,
    global: &crate::Global,
) -> Result<()> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("📦"), "Setting up test table...");
    }
    setup_test_table(env_vars, table_name, global).await?;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running DynamoDB integration tests..."));
    }
    run_tests(env_vars, global).await
}

/// Run the ignored tests of the catalog crate against the local table.
async fn run_tests(env_vars: &[(&'static str, String)], global: &crate::Global) -> Result<()> {
    let mut cmd = tokio::process::Command::new("cargo");
    cmd.args(["test", "-p", "catalog", "--", "--ignored"]);

    if global.is_verbose() {
        cmd.arg("--nocapture");
    }

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let status = cmd.status().await?;

    if status.success() {
        Ok(())
    } else {
        Err(IntegrationError::TestFailed(
            "DynamoDB test suite failed".to_string(),
        ))
    }
}

/// Start the DynamoDB Local container.
///
/// Returns false when a container was already running, so it is left alone on cleanup.
async fn start_dynamodb_container(
    timeout_secs: u64,
    global: &crate::Global,
    runtime: ContainerRuntime,
) -> Result<bool> {
    if is_running(runtime, DYNAMODB_SPEC.name).await? {
        if !global.is_silent() {
            aprintln!(
                "{} {}",
                p_y("⚠️"),
                "DynamoDB Local container already running"
            );
        }
        return Ok(false);
    }

    if !global.is_silent() {
        aprintln!("{} {}", p_b("🐳"), "Starting DynamoDB Local container...");
    }

    start_container(runtime, &DYNAMODB_SPEC).await?;

    if !global.is_silent() {
        aprintln!(
            "{} {}",
            p_b("⏳"),
            format!("Waiting for container health (max {}s)...", timeout_secs)
        );
    }

    if let Err(e) = wait_for_health(&DYNAMODB_SPEC, Duration::from_secs(timeout_secs)).await {
        stop_container(runtime, DYNAMODB_SPEC.name).await;
        return Err(e);
    }

    if !global.is_silent() {
        aprintln!("{} {}", p_g("✅"), "DynamoDB Local is ready");
    }

    Ok(true)
}

/// Stop the DynamoDB Local container.
async fn stop_dynamodb_container(global: &crate::Global, runtime: ContainerRuntime) {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🐳"), "Stopping DynamoDB Local container...");
    }

    stop_container(runtime, DYNAMODB_SPEC.name).await;

    if !global.is_silent() {
        aprintln!("{} {}", p_g("✅"), "DynamoDB container stopped");
    }
}

/// Set up the test table in DynamoDB Local.
async fn setup_test_table(
    env_vars: &[(&'static str, String)],
    table_name: &str,
    global: &crate::Global,
) -> Result<()> {
    let mut cmd = tokio::process::Command::new("cargo");
    cmd.args([
        "xtask",
        "--silent",
        "dynamodb",
        "deploy",
        "--force",
        "--table-name",
        table_name,
    ]);

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let status = cmd.status().await?;

    if !status.success() {
        return Err(IntegrationError::TableSetupFailed(
            "Failed to deploy test table".to_string(),
        ));
    }

    if !global.is_silent() {
        aprintln!("{} {}", p_g("✅"), "Test table ready");
    }

    Ok(())
}
