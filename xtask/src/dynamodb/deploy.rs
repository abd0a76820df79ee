//! Table deployment operations (Imperative Shell).

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode as SdkBillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use super::client;
use super::config::{AttributeType, BillingMode, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan, TableStatus};

const POLL_ATTEMPTS: u32 = 60;
const POLL_DELAY: Duration = Duration::from_secs(2);

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            // A table in DELETING state must be gone before it can be recreated.
            wait_for_table_deleted(client, &config.table_name).await?;
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
        }
        DeployPlan::WaitForActive { table_name } => {
            wait_for_table_active(client, table_name).await?;
        }
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => {
            return Err(DynamodbError::KeyMismatch {
                table_name: table_name.clone(),
                expected: expected.clone(),
                found: found.clone(),
            });
        }
        DeployPlan::Unusable { table_name, status } => {
            return Err(DynamodbError::TableUnusable {
                table_name: table_name.clone(),
                status: status.clone(),
            });
        }
        DeployPlan::NoChanges { .. } => {}
    }
    Ok(())
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    if let DestroyPlan::DeleteTable { table_name } = plan {
        client
            .delete_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(DynamodbError::sdk)?;
        wait_for_table_deleted(client, table_name).await?;
    }
    Ok(())
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(DynamodbError::sdk)?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key.name)
        .attribute_type(to_scalar_type(config.partition_key.attribute_type))
        .build()
        .map_err(DynamodbError::sdk)?;

    client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(to_sdk_billing_mode(config.billing_mode))
        .send()
        .await
        .map_err(DynamodbError::sdk)?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..POLL_ATTEMPTS {
        if let Some(state) = client::get_table_state(client, table_name).await? {
            match state.status {
                TableStatus::Active => return Ok(()),
                TableStatus::Unusable(status) => {
                    return Err(DynamodbError::TableUnusable {
                        table_name: table_name.to_string(),
                        status,
                    });
                }
                _ => {}
            }
        }
        tokio::time::sleep(POLL_DELAY).await;
    }

    Err(DynamodbError::TableTimeout(table_name.to_string()))
}

async fn wait_for_table_deleted(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..POLL_ATTEMPTS {
        if client::get_table_state(client, table_name).await?.is_none() {
            return Ok(());
        }
        tokio::time::sleep(POLL_DELAY).await;
    }

    Err(DynamodbError::TableTimeout(table_name.to_string()))
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_sdk_billing_mode(billing_mode: BillingMode) -> SdkBillingMode {
    match billing_mode {
        BillingMode::PayPerRequest => SdkBillingMode::PayPerRequest,
    }
}
