//! Partial-update expression builder.
//!
//! Pure functions that turn a [`ProductPatch`] into a store-agnostic `SET`
//! expression with name and value placeholders. The storage backend only has
//! to convert the bound [`FieldValue`]s into its own attribute type.

use super::{FieldValue, ProductField, ProductPatch};

/// Prefix for attribute name placeholders (`#name`).
pub const NAME_PLACEHOLDER_PREFIX: &str = "#";

/// Prefix for attribute value placeholders (`:value0`).
pub const VALUE_PLACEHOLDER_PREFIX: &str = ":value";

/// One `<name-placeholder> = <value-placeholder>` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub field: ProductField,
    pub name_placeholder: String,
    pub value_placeholder: String,
    pub value: FieldValue,
}

impl SetClause {
    /// Builds the clause for `field` at position `index` of the patch.
    pub fn new(field: ProductField, index: usize, value: FieldValue) -> Self {
        Self {
            field,
            name_placeholder: name_placeholder(field),
            value_placeholder: value_placeholder(index),
            value,
        }
    }

    /// Renders the clause as `#field = :valueN`.
    pub fn render(&self) -> String {
        format!("{} = {}", self.name_placeholder, self.value_placeholder)
    }
}

/// A complete partial-update mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    clauses: Vec<SetClause>,
}

impl UpdateExpression {
    /// Builds the mutation for the supplied fields of `patch`.
    ///
    /// Returns `None` for an empty patch; callers fall back to a plain read.
    pub fn from_patch(patch: &ProductPatch) -> Option<Self> {
        let clauses: Vec<SetClause> = patch
            .fields()
            .into_iter()
            .enumerate()
            .map(|(index, (field, value))| SetClause::new(field, index, value))
            .collect();

        if clauses.is_empty() {
            None
        } else {
            Some(Self { clauses })
        }
    }

    pub fn clauses(&self) -> &[SetClause] {
        &self.clauses
    }

    /// The `SET ...` expression string.
    pub fn expression(&self) -> String {
        let assignments: Vec<String> = self.clauses.iter().map(SetClause::render).collect();
        format!("SET {}", assignments.join(", "))
    }

    /// Name placeholder to attribute name bindings.
    pub fn attribute_names(&self) -> Vec<(String, String)> {
        self.clauses
            .iter()
            .map(|clause| {
                (
                    clause.name_placeholder.clone(),
                    clause.field.attribute_name().to_string(),
                )
            })
            .collect()
    }

    /// Value placeholder to new value bindings.
    pub fn attribute_values(&self) -> Vec<(String, FieldValue)> {
        self.clauses
            .iter()
            .map(|clause| (clause.value_placeholder.clone(), clause.value.clone()))
            .collect()
    }
}

fn name_placeholder(field: ProductField) -> String {
    format!("{NAME_PLACEHOLDER_PREFIX}{}", field.attribute_name())
}

fn value_placeholder(index: usize) -> String {
    format!("{VALUE_PLACEHOLDER_PREFIX}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_subsets() -> Vec<ProductPatch> {
        let mut patches = Vec::new();
        for mask in 1u8..8 {
            let mut patch = ProductPatch::default();
            if mask & 1 != 0 {
                patch = patch.with_name("New name");
            }
            if mask & 2 != 0 {
                patch = patch.with_description("New description");
            }
            if mask & 4 != 0 {
                patch = patch.with_price(12.5);
            }
            patches.push(patch);
        }
        patches
    }

    #[test]
    fn test_empty_patch_builds_nothing() {
        assert!(UpdateExpression::from_patch(&ProductPatch::default()).is_none());
    }

    #[test]
    fn test_single_field_expression() {
        let patch = ProductPatch::default().with_price(12.5);
        let update = UpdateExpression::from_patch(&patch).unwrap();

        assert_eq!(update.expression(), "SET #price = :value0");
        assert_eq!(
            update.attribute_names(),
            vec![("#price".to_string(), "price".to_string())]
        );
        assert_eq!(
            update.attribute_values(),
            vec![(":value0".to_string(), FieldValue::Number(12.5))]
        );
    }

    #[test]
    fn test_all_fields_expression() {
        let patch = ProductPatch::default()
            .with_name("Gadget")
            .with_description("A gadget")
            .with_price(3.0);
        let update = UpdateExpression::from_patch(&patch).unwrap();

        assert_eq!(
            update.expression(),
            "SET #name = :value0, #description = :value1, #price = :value2"
        );
        assert_eq!(
            update.attribute_values(),
            vec![
                (":value0".to_string(), FieldValue::Text("Gadget".to_string())),
                (
                    ":value1".to_string(),
                    FieldValue::Text("A gadget".to_string())
                ),
                (":value2".to_string(), FieldValue::Number(3.0)),
            ]
        );
    }

    #[test]
    fn test_value_indexes_follow_supplied_fields_only() {
        let patch = ProductPatch::default()
            .with_description("Only this")
            .with_price(1.0);
        let update = UpdateExpression::from_patch(&patch).unwrap();

        assert_eq!(
            update.expression(),
            "SET #description = :value0, #price = :value1"
        );
    }

    #[test]
    fn test_clause_count_matches_supplied_fields() {
        for patch in all_subsets() {
            let update = UpdateExpression::from_patch(&patch).unwrap();
            assert_eq!(update.clauses().len(), patch.fields().len());
        }
    }

    #[test]
    fn test_placeholders_are_unique_for_every_subset() {
        for patch in all_subsets() {
            let update = UpdateExpression::from_patch(&patch).unwrap();

            let names: HashSet<String> =
                update.attribute_names().into_iter().map(|(p, _)| p).collect();
            let values: HashSet<String> =
                update.attribute_values().into_iter().map(|(p, _)| p).collect();

            assert_eq!(names.len(), update.clauses().len());
            assert_eq!(values.len(), update.clauses().len());
        }
    }

    #[test]
    fn test_untouched_fields_are_not_named() {
        let patch = ProductPatch::default().with_name("X");
        let update = UpdateExpression::from_patch(&patch).unwrap();

        let expression = update.expression();
        assert!(!expression.contains("#description"));
        assert!(!expression.contains("#price"));
    }
}
