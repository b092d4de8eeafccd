//! Runtime-agnostic container, image, and pod model.
//!
//! These are the types the orchestration agent consumes. They are plain
//! immutable value records: one engine query cycle produces them, the
//! reconciliation layer reads them, and they are dropped. Nothing here holds
//! state across calls or talks to the engine.

use crate::constants::{
    CONTAINER_ID_SEPARATOR, DOCKER_ENGINE, STATUS_EXITED_PREFIX, STATUS_RUNNING_PREFIX,
};
use crate::error::Error;
use crate::naming::build_pod_full_name;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Container Id
// =============================================================================

/// Identifier for a container, qualified by the engine that owns it.
///
/// The native id alone becomes ambiguous once more than one backend engine
/// is in play; pairing it with an engine tag keeps lookups unambiguous.
/// Equality is structural, so the pair works as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId {
    /// Engine that minted the native id (e.g. [`DOCKER_ENGINE`]).
    pub engine: String,
    /// Engine-native container id.
    pub id: String,
}

impl ContainerId {
    /// Creates an identifier under the Docker engine tag.
    pub fn docker(id: impl Into<String>) -> Self {
        Self {
            engine: DOCKER_ENGINE.to_string(),
            id: id.into(),
        }
    }

    /// Returns true if either half of the pair is missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty() || self.id.is_empty()
    }
}

impl fmt::Display for ContainerId {
    /// Renders the `engine://native-id` form used across API boundaries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.engine, CONTAINER_ID_SEPARATOR, self.id)
    }
}

impl FromStr for ContainerId {
    type Err = Error;

    /// Parses the `engine://native-id` form. Exactly one separator with two
    /// non-empty halves; anything else is rejected rather than guessed at.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(CONTAINER_ID_SEPARATOR) {
            Some((engine, id))
                if !engine.is_empty()
                    && !id.is_empty()
                    && !id.contains(CONTAINER_ID_SEPARATOR) =>
            {
                Ok(Self {
                    engine: engine.to_string(),
                    id: id.to_string(),
                })
            }
            _ => Err(Error::InvalidContainerId(s.to_string())),
        }
    }
}

// =============================================================================
// Container State
// =============================================================================

/// Coarse lifecycle state derived from the engine's status text.
///
/// The classification is total and closed: a status the classifier does not
/// recognize is `Unknown`, never an error and never a guess. An unreadable
/// status must not let a container masquerade as healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    /// The engine reports the container as up.
    Running,
    /// The engine reports the container as exited.
    Exited,
    /// Anything the classifier does not recognize.
    Unknown,
}

impl ContainerState {
    /// Classifies a free-form engine status string.
    ///
    /// Only the leading keyword matters; uptime and exit-code detail in the
    /// rest of the string is ignored. The match is case-sensitive, exactly
    /// as the engine emits it:
    ///
    /// - `"Up 5 hours"` → [`Running`](Self::Running)
    /// - `"Exited (0) 2 hours ago"` → [`Exited`](Self::Exited)
    /// - `"Created"`, `""`, anything else → [`Unknown`](Self::Unknown)
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        if status.starts_with(STATUS_RUNNING_PREFIX) {
            Self::Running
        } else if status.starts_with(STATUS_EXITED_PREFIX) {
            Self::Exited
        } else {
            Self::Unknown
        }
    }

    /// Returns true for [`Running`](Self::Running).
    #[must_use]
    pub fn is_running(&self) -> bool {
        *self == Self::Running
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Running => "running",
            Self::Exited => "exited",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

// =============================================================================
// Container
// =============================================================================

/// Normalized view of one engine container.
///
/// Built atomically from a single listing row by
/// [`to_runtime_container`](crate::convert::to_runtime_container); a decode
/// failure surfaces as an error, never as a half-filled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Engine-qualified identifier.
    pub id: ContainerId,
    /// Logical container name recovered from the encoded engine name.
    pub name: String,
    /// Image reference, passed through from the engine.
    pub image: String,
    /// Configuration fingerprint recovered from the encoded name
    /// (0 when the name carries none or the token is unreadable).
    pub hash: u32,
    /// Creation timestamp in the engine's native epoch unit, untouched.
    pub created: i64,
    /// Classified lifecycle state.
    pub state: ContainerState,
}

impl Container {
    /// Interprets [`created`](Self::created) as Unix seconds.
    ///
    /// Returns `None` when the value falls outside chrono's representable
    /// range. The stored integer itself is never reinterpreted or modified.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

// =============================================================================
// Image
// =============================================================================

/// Normalized view of one engine image.
///
/// A pure field rename of the listing row: tags keep their reported order
/// and multiplicity, nothing is deduplicated or privileged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Engine-native image id.
    pub id: String,
    /// Repository:tag names, in listing order.
    pub tags: Vec<String>,
    /// Image size in bytes.
    pub size: i64,
}

// =============================================================================
// Pod
// =============================================================================

/// A group of containers sharing decoded pod identity.
///
/// Produced by [`group_into_pods`](crate::convert::group_into_pods). The
/// name, namespace, and UID come from the encoded container names; the
/// engine itself has no pod concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// Pod UID (opaque string from the naming convention).
    pub id: String,
    /// Pod name.
    pub name: String,
    /// Pod namespace.
    pub namespace: String,
    /// Converted containers belonging to this pod, in listing order.
    pub containers: Vec<Container>,
}

impl Pod {
    /// Returns the `<name>_<namespace>` composite used by the naming scheme.
    #[must_use]
    pub fn full_name(&self) -> String {
        build_pod_full_name(&self.name, &self.namespace)
    }

    /// Finds a container by its logical name. First match wins when the pod
    /// carries duplicates (e.g. dead attempts alongside a live one).
    #[must_use]
    pub fn find_container_by_name(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }
}

/// One engine query cycle's worth of pods, with lookup helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pods(pub Vec<Pod>);

impl Pods {
    /// Finds a pod by UID.
    #[must_use]
    pub fn find_by_uid(&self, uid: &str) -> Option<&Pod> {
        self.0.iter().find(|p| p.id == uid)
    }

    /// Finds a pod by its `<name>_<namespace>` full name.
    #[must_use]
    pub fn find_by_full_name(&self, full_name: &str) -> Option<&Pod> {
        self.0.iter().find(|p| p.full_name() == full_name)
    }

    /// Combined finder: a non-empty full name wins, otherwise the UID is
    /// consulted.
    #[must_use]
    pub fn find(&self, full_name: &str, uid: &str) -> Option<&Pod> {
        if !full_name.is_empty() {
            self.find_by_full_name(full_name)
        } else {
            self.find_by_uid(uid)
        }
    }

    /// Number of pods in the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the cycle saw no managed pods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pods in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pod> {
        self.0.iter()
    }
}

impl IntoIterator for Pods {
    type Item = Pod;
    type IntoIter = std::vec::IntoIter<Pod>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pods {
    type Item = &'a Pod;
    type IntoIter = std::slice::Iter<'a, Pod>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Pod> for Pods {
    fn from_iter<I: IntoIterator<Item = Pod>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_prefix_classification() {
        assert_eq!(
            ContainerState::from_status("Up 5 hours"),
            ContainerState::Running
        );
        assert_eq!(
            ContainerState::from_status("Up About a minute"),
            ContainerState::Running
        );
        assert_eq!(
            ContainerState::from_status("Exited (0) 2 hours ago"),
            ContainerState::Exited
        );
        assert_eq!(
            ContainerState::from_status("Created"),
            ContainerState::Unknown
        );
        assert_eq!(ContainerState::from_status(""), ContainerState::Unknown);
    }

    #[test]
    fn classification_is_case_sensitive() {
        // The engine capitalizes its status keywords; lowercase text is
        // something else and must not classify.
        assert_eq!(ContainerState::from_status("up 5 hours"), ContainerState::Unknown);
        assert_eq!(ContainerState::from_status("exited (0)"), ContainerState::Unknown);
    }

    #[test]
    fn container_id_string_form_round_trips() {
        let id = ContainerId::docker("ab2cdf");
        assert_eq!(id.to_string(), "docker://ab2cdf");
        assert_eq!("docker://ab2cdf".parse::<ContainerId>().unwrap(), id);
    }

    #[test]
    fn container_id_rejects_malformed_strings() {
        for s in [
            "",
            "ab2cdf",
            "://ab2cdf",
            "docker://",
            "docker:ab2cdf",
            "docker://a://b",
        ] {
            assert!(s.parse::<ContainerId>().is_err(), "accepted {s:?}");
        }
    }
}
