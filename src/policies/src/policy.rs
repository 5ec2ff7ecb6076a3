//! Policy definition, serialization, and evaluation

use crate::error::{PolicyError, Result};
use crate::types::{Statement, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The only supported policy document version
pub const POLICY_VERSION: &str = "v1";

/// An ordered, versioned sequence of statements evaluated together to
/// produce one verdict.
///
/// Policies are immutable after construction; merging produces a new
/// policy. Serialization is canonical: identical policies always produce
/// byte-identical text.
///
/// # Example
///
/// ```
/// use keygrid_policies::{Policy, Statement};
///
/// let policy = Policy::from(
///     Statement::allow().with_resource("channel", "channel-*", ["read"]),
/// );
///
/// assert!(policy.validate(&["channel:read"], "channel-42").is_valid());
/// assert!(!policy.validate(&["channel:update"], "channel-42").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Format version tag, always `"v1"`
    pub version: String,

    /// Statements in authored order
    pub statements: Vec<Statement>,
}

impl Policy {
    /// Create a policy from an ordered sequence of statements
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statements,
        }
    }

    /// Parse a policy from its textual form.
    ///
    /// Fails with [`PolicyError::Malformed`] on invalid text and with
    /// [`PolicyError::UnsupportedVersion`] when the document version is
    /// anything other than `"v1"`.
    pub fn parse(text: &str) -> Result<Self> {
        let policy: Self =
            serde_json::from_str(text).map_err(|err| PolicyError::Malformed(err.to_string()))?;

        if policy.version != POLICY_VERSION {
            return Err(PolicyError::UnsupportedVersion(policy.version));
        }

        Ok(policy)
    }

    /// Serialize to the canonical `v1` wire form.
    ///
    /// Field order is `version` then `statements`; map insertion order is
    /// preserved, so `parse(policy.to_text())` reconstructs an equal
    /// policy and re-serializing it yields identical bytes.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Validate requested actions against this policy.
    ///
    /// Every action must independently be permitted. Deny statements are
    /// evaluated first and veto the request outright; afterwards only the
    /// first allow statement is consulted for all requested actions.
    pub fn validate<A: AsRef<str>>(&self, actions: &[A], resource_id: &str) -> Validation {
        // Deny statements have precedence over allow statements.
        for statement in self.statements.iter().filter(|s| s.is_deny()) {
            for action in actions {
                let action = action.as_ref();
                if statement.matches_action(action, resource_id) {
                    debug!(
                        "Denied action {} on resource {} by deny statement",
                        action, resource_id
                    );
                    return Validation::invalid(format!("Action {} is not allowed", action));
                }
            }
        }

        for statement in self.statements.iter().filter(|s| !s.is_deny()) {
            for action in actions {
                let action = action.as_ref();
                if !statement.matches_action(action, resource_id) {
                    debug!(
                        "Action {} did not match on resource {}",
                        action, resource_id
                    );
                    return Validation::invalid(format!(
                        "Action \"{}\" not allowed on resource \"{}\"",
                        action, resource_id
                    ));
                }
            }
            // Only the first allow statement is consulted.
            return Validation::Valid;
        }

        Validation::invalid("No matching statement found")
    }

    /// Validate a single requested action against this policy
    pub fn validate_action(&self, action: &str, resource_id: &str) -> Validation {
        self.validate(&[action], resource_id)
    }
}

impl From<Statement> for Policy {
    fn from(statement: Statement) -> Self {
        Self::new(vec![statement])
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Policy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
