//! Policy merging

use crate::policy::Policy;
use crate::types::{ResourceMap, Statement};

/// Merge two policies into one.
///
/// Grants from non-deny statements are unioned per resource type and
/// resource pattern: action names are de-duplicated with first-seen order
/// preserved, and keys present in only one input carry through unchanged.
/// The union always forms exactly one allow statement, so merging two
/// structurally empty policies yields one statement with an empty
/// resource map.
///
/// Deny statements from both inputs pass through unchanged, in input
/// order, after the merged grant statement. Merging is total and never
/// fails.
///
/// # Example
///
/// ```
/// use keygrid_policies::{merge_policies, Policy, Statement};
///
/// let a = Policy::from(Statement::allow().with_resource("link", "x", ["create"]));
/// let b = Policy::from(Statement::allow().with_resource("link", "x", ["create", "read"]));
///
/// let merged = merge_policies(&a, &b);
/// assert_eq!(merged.statements.len(), 1);
/// assert_eq!(
///     merged.statements[0].resources["link"]["x"],
///     vec!["create".to_string(), "read".to_string()]
/// );
/// ```
pub fn merge_policies(a: &Policy, b: &Policy) -> Policy {
    let mut resources = ResourceMap::new();

    for statement in a.statements.iter().chain(&b.statements) {
        if statement.is_deny() {
            continue;
        }

        for (resource_type, patterns) in &statement.resources {
            let merged = resources.entry(resource_type.clone()).or_default();
            for (pattern, actions) in patterns {
                let merged_actions = merged.entry(pattern.clone()).or_default();
                for action in actions {
                    if !merged_actions.contains(action) {
                        merged_actions.push(action.clone());
                    }
                }
            }
        }
    }

    let mut statements = vec![Statement {
        deny: None,
        resources,
    }];

    statements.extend(
        a.statements
            .iter()
            .chain(&b.statements)
            .filter(|statement| statement.is_deny())
            .cloned(),
    );

    Policy::new(statements)
}
