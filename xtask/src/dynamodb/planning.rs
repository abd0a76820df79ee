//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the HASH key attribute, if the table reported one.
    pub partition_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Any other reported status (archived, lost encryption key, ...), kept verbatim.
    Unusable(String),
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists but is still being created or updated.
    WaitForActive { table_name: String },
    /// Table exists with a different partition key and cannot be reused.
    KeyMismatch {
        table_name: String,
        expected: String,
        found: String,
    },
    /// Table exists in a status that cannot serve requests.
    Unusable { table_name: String, status: String },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let table_name = desired.table_name.clone();

    if let Some(found) = &state.partition_key {
        if found != &desired.partition_key.name {
            return DeployPlan::KeyMismatch {
                table_name,
                expected: desired.partition_key.name.clone(),
                found: found.clone(),
            };
        }
    }

    match &state.status {
        TableStatus::Active => DeployPlan::NoChanges { table_name },
        // A table being deleted will be gone by the time we act; treat it as missing.
        TableStatus::Deleting => DeployPlan::CreateTable {
            config: desired.clone(),
        },
        TableStatus::Creating | TableStatus::Updating => DeployPlan::WaitForActive { table_name },
        TableStatus::Unusable(status) => DeployPlan::Unusable {
            table_name,
            status: status.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(state) if state.status != TableStatus::Deleting => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        _ => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!(
                "  Partition key: {} ({})",
                config.partition_key.name,
                config.partition_key.attribute_type.code()
            ),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::WaitForActive { table_name } => {
            vec![format!("~ Wait for table '{}' to become active", table_name)]
        }
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => vec![format!(
            "- Table '{}' is keyed by '{}', expected '{}' (destroy it first)",
            table_name, found, expected
        )],
        DeployPlan::Unusable { table_name, status } => vec![format!(
            "- Table '{}' is {} and cannot be used (destroy it first)",
            table_name, status
        )],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::products_table_config;

    fn state(status: TableStatus, partition_key: &str) -> TableState {
        TableState {
            status,
            partition_key: Some(partition_key.to_string()),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let config = products_table_config();
        let plan = calculate_deploy_plan(None, &config);

        assert_eq!(plan, DeployPlan::CreateTable { config });
    }

    #[test]
    fn test_active_table_needs_no_changes() {
        let plan = calculate_deploy_plan(
            Some(&state(TableStatus::Active, "id")),
            &products_table_config(),
        );

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "products".to_string()
            }
        );
    }

    #[test]
    fn test_creating_table_is_awaited() {
        let plan = calculate_deploy_plan(
            Some(&state(TableStatus::Creating, "id")),
            &products_table_config(),
        );

        assert!(matches!(plan, DeployPlan::WaitForActive { .. }));
    }

    #[test]
    fn test_deleting_table_is_recreated() {
        let plan = calculate_deploy_plan(
            Some(&state(TableStatus::Deleting, "id")),
            &products_table_config(),
        );

        assert!(matches!(plan, DeployPlan::CreateTable { .. }));
    }

    #[test]
    fn test_unusable_table_is_reported() {
        let plan = calculate_deploy_plan(
            Some(&state(TableStatus::Unusable("ARCHIVED".to_string()), "id")),
            &products_table_config(),
        );

        assert_eq!(
            plan,
            DeployPlan::Unusable {
                table_name: "products".to_string(),
                status: "ARCHIVED".to_string(),
            }
        );
        assert!(format_deploy_plan(&plan)[0].contains("ARCHIVED"));
    }

    #[test]
    fn test_unusable_table_can_be_destroyed() {
        assert_eq!(
            calculate_destroy_plan(
                Some(&state(TableStatus::Unusable("ARCHIVED".to_string()), "id")),
                "products"
            ),
            DestroyPlan::DeleteTable {
                table_name: "products".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_partition_key_is_reported() {
        let plan = calculate_deploy_plan(
            Some(&state(TableStatus::Active, "PK")),
            &products_table_config(),
        );

        assert_eq!(
            plan,
            DeployPlan::KeyMismatch {
                table_name: "products".to_string(),
                expected: "id".to_string(),
                found: "PK".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_partition_key_is_trusted() {
        let current = TableState {
            status: TableStatus::Active,
            partition_key: None,
        };
        let plan = calculate_deploy_plan(Some(&current), &products_table_config());

        assert!(matches!(plan, DeployPlan::NoChanges { .. }));
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(Some(&state(TableStatus::Active, "id")), "products"),
            DestroyPlan::DeleteTable {
                table_name: "products".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "products"),
            DestroyPlan::AlreadyGone {
                table_name: "products".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(Some(&state(TableStatus::Deleting, "id")), "products"),
            DestroyPlan::AlreadyGone {
                table_name: "products".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let lines = format_deploy_plan(&DeployPlan::CreateTable {
            config: products_table_config(),
        });

        assert_eq!(
            lines,
            vec![
                "+ Create table: products".to_string(),
                "  Partition key: id (S)".to_string(),
                "  Billing: PAY_PER_REQUEST".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_destroy_plan() {
        let lines = format_destroy_plan(&DestroyPlan::DeleteTable {
            table_name: "products".to_string(),
        });

        assert_eq!(
            lines,
            vec!["- Delete table: products (ALL DATA WILL BE LOST)".to_string()]
        );
    }
}
