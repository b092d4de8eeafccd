//! # Naming & Status Constants
//!
//! Defines the managed-name grammar tokens, the engine status prefixes, and
//! the engine identity tag. These constants are the **single source of truth**
//! for the naming convention shared by the encode and decode sides.
//!
//! ## Compatibility
//!
//! The grammar tokens are a wire contract: names written by one version of
//! the agent must decode under another. Changing a delimiter or the prefix
//! orphans every container created before the change.
//!
//! ## Cross-References
//!
//! - [`crate::naming`]: Implements the grammar built from these tokens
//! - [`crate::model`]: Uses the status prefixes and engine tag
//! - [`crate::convert`]: Uses the engine tag when minting identifiers

// =============================================================================
// Engine Identity
// =============================================================================

/// Engine tag for identifiers minted from Docker-engine listings.
///
/// Paired with the engine-native id in [`crate::model::ContainerId`] so ids
/// from different backends never collide.
pub const DOCKER_ENGINE: &str = "docker";

/// Separator in the `engine://native-id` string form of a container id.
pub const CONTAINER_ID_SEPARATOR: &str = "://";

// =============================================================================
// Managed-Name Grammar
// =============================================================================
//
// Encoded names look like:
//
//   pod_<cname>.<hash>_<pod-name>_<namespace>_<pod-uid>_<attempt>
//
// The engine itself prepends a `/` when reporting names; the decoder strips
// it. See `crate::naming` for the full grammar.
// =============================================================================

/// Leading token marking a container as managed by this agent.
///
/// Containers whose names lack this prefix belong to someone else and are
/// never decoded, stopped, or grouped into pods.
pub const MANAGED_NAME_PREFIX: &str = "pod";

/// Delimiter between encoded-name fields.
///
/// Field values must not contain this character; the launch layer enforces
/// that by restricting names to DNS-label characters.
pub const NAME_FIELD_DELIMITER: char = '_';

/// Delimiter between the logical container name and its hash token.
pub const NAME_HASH_DELIMITER: char = '.';

/// Minimum field count of a decodable name.
///
/// Prefix, name(.hash), pod name, namespace, pod UID, attempt. Names with
/// fewer fields cannot be attributed to a pod; extra trailing fields are
/// tolerated so future encoders can append without breaking this decoder.
pub const MANAGED_NAME_MIN_FIELDS: usize = 6;

// =============================================================================
// Status Prefixes
// =============================================================================
//
// The engine reports container status as free-form English ("Up 5 hours",
// "Exited (0) 2 hours ago"). Only the leading keyword is load-bearing.
// =============================================================================

/// Status strings beginning with this token classify as running.
pub const STATUS_RUNNING_PREFIX: &str = "Up";

/// Status strings beginning with this token classify as exited.
pub const STATUS_EXITED_PREFIX: &str = "Exited";
