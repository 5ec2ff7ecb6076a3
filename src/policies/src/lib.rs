//! # Keygrid policy engine
//!
//! Declarative access-control evaluation for the Keygrid credential
//! system:
//! - Statements granting or denying actions on wildcard resource patterns
//! - Deny-overrides-allow evaluation with multi-action AND semantics
//! - Versioned, byte-deterministic serialization (`v1` JSON documents)
//! - Policy merging with stable grant unions
//! - Opt-in runtime vocabulary for resource/action well-formedness
//!
//! The engine is purely functional over immutable values: no I/O, no
//! shared state, safe to call concurrently without locking.
//!
//! ## Example
//!
//! ```rust
//! use keygrid_policies::{Policy, Statement};
//!
//! let policy = Policy::from(
//!     Statement::allow().with_resource("channel", "chronark-*", ["read"]),
//! );
//!
//! assert_eq!(
//!     policy.to_text(),
//!     r#"{"version":"v1","statements":[{"resources":{"channel":{"chronark-*":["read"]}}}]}"#
//! );
//!
//! let verdict = policy.validate(&["channel:read"], "chronark-channel1");
//! assert!(verdict.is_valid());
//!
//! let verdict = policy.validate(&["channel:update"], "chronark-channel1");
//! assert_eq!(
//!     verdict.reason(),
//!     Some(r#"Action "channel:update" not allowed on resource "chronark-channel1""#)
//! );
//! ```

pub mod error;
pub mod merge;
pub mod policy;
pub mod types;
pub mod wildcard;

pub use error::{PolicyError, Result};
pub use merge::merge_policies;
pub use policy::{Policy, POLICY_VERSION};
pub use types::{PatternActions, ResourceMap, Statement, Validation, Vocabulary};
pub use wildcard::filter;
