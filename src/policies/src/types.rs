//! Core policy data model

use crate::error::{PolicyError, Result};
use crate::wildcard;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from resource pattern to the action names granted on it.
///
/// Insertion order is preserved so serialized policies are deterministic.
pub type PatternActions = IndexMap<String, Vec<String>>;

/// Mapping from resource type to its pattern grants
pub type ResourceMap = IndexMap<String, PatternActions>;

/// The atomic unit of policy: a grant or denial of actions on resource
/// patterns, grouped by resource type.
///
/// Statements are immutable value objects; equality is structural.
///
/// # Example
///
/// ```
/// use keygrid_policies::Statement;
///
/// let statement = Statement::allow()
///     .with_resource("channel", "channel-*", ["read", "ingest"])
///     .with_resource("user", "user-123", ["read"]);
///
/// assert!(statement.matches_action("channel:read", "channel-42"));
/// assert!(!statement.matches_action("channel:update", "channel-42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Denies the listed actions instead of granting them.
    ///
    /// Serialized form preserves exactly what was authored: a statement
    /// built without the field round-trips without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny: Option<bool>,

    /// Resource type → resource pattern → allowed action names
    pub resources: ResourceMap,
}

impl Statement {
    /// Create an empty allow statement
    pub fn allow() -> Self {
        Self::default()
    }

    /// Create an empty deny statement
    pub fn deny() -> Self {
        Self {
            deny: Some(true),
            resources: ResourceMap::new(),
        }
    }

    /// Add a resource pattern with its action names under a resource type
    pub fn with_resource<I, S>(
        mut self,
        resource_type: impl Into<String>,
        pattern: impl Into<String>,
        actions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources
            .entry(resource_type.into())
            .or_default()
            .insert(pattern.into(), actions.into_iter().map(Into::into).collect());
        self
    }

    /// Add a resource type with no patterns.
    ///
    /// Such an entry is valid and grants or denies nothing.
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resources.entry(resource_type.into()).or_default();
        self
    }

    /// Whether this statement denies rather than grants
    pub fn is_deny(&self) -> bool {
        self.deny.unwrap_or(false)
    }

    /// Check whether this statement applies to `action` on `resource_id`.
    ///
    /// The action is split on its first colon into resource type and
    /// action name. The statement matches when it has an entry for the
    /// resource type with a pattern that matches `resource_id` and lists
    /// the action name. Malformed actions and unknown resource types
    /// never match.
    pub fn matches_action(&self, action: &str, resource_id: &str) -> bool {
        let Some((resource_type, action_name)) = action.split_once(':') else {
            return false;
        };

        let Some(patterns) = self.resources.get(resource_type) else {
            return false;
        };

        for (pattern, allowed_actions) in patterns {
            if allowed_actions.iter().any(|allowed| allowed == action_name)
                && wildcard::matches(resource_id, pattern)
            {
                return true;
            }
        }

        false
    }
}

/// Outcome of validating requested actions against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Validation {
    /// Every requested action is permitted
    Valid,

    /// At least one requested action is not permitted
    Invalid {
        /// Human-readable reason for the rejection
        reason: String,
    },
}

impl Validation {
    /// Create an invalid verdict with the given reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// Whether the verdict permits the request
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

/// Registered resource-type vocabulary: which action names are valid for
/// which resource types.
///
/// The statement model itself is fully dynamic; the vocabulary is an
/// opt-in schema for embedding applications that want well-formedness
/// checks at authoring time. It never affects the wire format.
///
/// # Example
///
/// ```
/// use keygrid_policies::Vocabulary;
///
/// let vocabulary = Vocabulary::new()
///     .register("channel", ["read", "ingest", "update"])
///     .register("user", ["read", "update"]);
///
/// assert!(vocabulary.permits("channel", "ingest"));
/// assert!(!vocabulary.permits("channel", "delete"));
/// assert_eq!(vocabulary.action("user", "read").unwrap(), "user:read");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    types: IndexMap<String, Vec<String>>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource type with its permitted action names
    pub fn register<I, S>(mut self, resource_type: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.insert(
            resource_type.into(),
            actions.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Whether the vocabulary permits `action_name` on `resource_type`
    pub fn permits(&self, resource_type: &str, action_name: &str) -> bool {
        self.types
            .get(resource_type)
            .is_some_and(|actions| actions.iter().any(|action| action == action_name))
    }

    /// Format a well-formed `"type:action"` string, rejecting pairs
    /// outside the vocabulary
    pub fn action(&self, resource_type: &str, action_name: &str) -> Result<String> {
        let Some(actions) = self.types.get(resource_type) else {
            return Err(PolicyError::UnknownResourceType {
                resource_type: resource_type.to_string(),
            });
        };

        if !actions.iter().any(|action| action == action_name) {
            return Err(PolicyError::UnknownAction {
                resource_type: resource_type.to_string(),
                action: action_name.to_string(),
            });
        }

        Ok(format!("{}:{}", resource_type, action_name))
    }

    /// Validate every `(resource type, action)` pair a statement mentions
    pub fn check_statement(&self, statement: &Statement) -> Result<()> {
        for (resource_type, patterns) in &statement.resources {
            if !self.types.contains_key(resource_type) {
                return Err(PolicyError::UnknownResourceType {
                    resource_type: resource_type.clone(),
                });
            }

            for actions in patterns.values() {
                for action in actions {
                    if !self.permits(resource_type, action) {
                        return Err(PolicyError::UnknownAction {
                            resource_type: resource_type.clone(),
                            action: action.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
