//! Managed container-name grammar.
//!
//! The engine has no pod concept, so the agent's launch layer packs pod
//! identity into the one free-form field the engine preserves verbatim: the
//! container name. This module owns both directions of that convention.
//!
//! ```text
//! [/]pod_<cname>.<hash>_<pod-name>_<namespace>_<pod-uid>_<attempt>
//!     │    │       │        │          │           │        └─ decimal u32
//!     │    │       │        │          │           └─ opaque pod UID
//!     │    │       │        │          └─ pod namespace
//!     │    │       │        └─ pod name
//!     │    │       └─ config fingerprint, lowercase hex u32 (optional)
//!     │    └─ logical container name
//!     └─ managed-name prefix
//! ```
//!
//! The engine reports names with a leading `/`; the decoder strips it.
//! Trailing extra fields are tolerated so newer encoders can append fields
//! without breaking this decoder.
//!
//! # Failure Severity
//!
//! Decoding distinguishes two severities. Malformation that breaks identity
//! attribution (missing prefix, too few fields, unreadable attempt counter,
//! empty identity field) fails the decode with an [`Error`]. Malformation
//! that is merely cosmetic (missing or unreadable hash token) degrades to a
//! hash of 0 with a warning, because a container that cannot be attributed
//! is useless but a container with an unknown config fingerprint is still a
//! container worth tracking.

use crate::constants::{
    MANAGED_NAME_MIN_FIELDS, MANAGED_NAME_PREFIX, NAME_FIELD_DELIMITER, NAME_HASH_DELIMITER,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

// =============================================================================
// Managed Name
// =============================================================================

/// Identity metadata packed into (or recovered from) an encoded name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedName {
    /// Logical container name within the pod.
    pub container_name: String,
    /// Configuration fingerprint (0 when the name carries none).
    pub hash: u32,
    /// Pod name.
    pub pod_name: String,
    /// Pod namespace.
    pub pod_namespace: String,
    /// Pod UID. Opaque to this crate; uniqueness is the caller's contract.
    pub pod_uid: String,
    /// Restart attempt counter for this container within the pod.
    pub attempt: u32,
}

impl ManagedName {
    /// Decodes an engine-reported name into its identity fields.
    ///
    /// Accepts the name with or without the engine's leading `/`. The hash
    /// token is parsed as lowercase hex; an unreadable token degrades to 0
    /// with a warning instead of failing the decode.
    ///
    /// # Errors
    ///
    /// - [`Error::UnmanagedName`] if the managed prefix is absent
    /// - [`Error::TruncatedName`] if fewer than
    ///   [`MANAGED_NAME_MIN_FIELDS`] fields are present
    /// - [`Error::EmptyNameField`] if an identity field is empty
    /// - [`Error::InvalidAttempt`] if the attempt counter does not parse
    pub fn parse(encoded: &str) -> Result<Self> {
        // The engine prepends '/' to every name it reports.
        let name = encoded.strip_prefix('/').unwrap_or(encoded);

        let fields: Vec<&str> = name.split(NAME_FIELD_DELIMITER).collect();
        if fields[0] != MANAGED_NAME_PREFIX {
            return Err(Error::UnmanagedName {
                name: encoded.to_string(),
            });
        }
        if fields.len() < MANAGED_NAME_MIN_FIELDS {
            return Err(Error::TruncatedName {
                name: encoded.to_string(),
                fields: fields.len(),
                expected: MANAGED_NAME_MIN_FIELDS,
            });
        }

        let (container_name, hash) = match fields[1].split_once(NAME_HASH_DELIMITER) {
            Some((cname, token)) => {
                let hash = u32::from_str_radix(token, 16).unwrap_or_else(|_| {
                    warn!(
                        name = %encoded,
                        token = %token,
                        "unreadable hash token in container name, defaulting to 0"
                    );
                    0
                });
                (cname, hash)
            }
            None => (fields[1], 0),
        };

        let pod_name = fields[2];
        let pod_namespace = fields[3];
        let pod_uid = fields[4];
        for (field, value) in [
            ("container name", container_name),
            ("pod name", pod_name),
            ("pod namespace", pod_namespace),
            ("pod uid", pod_uid),
        ] {
            if value.is_empty() {
                return Err(Error::EmptyNameField {
                    name: encoded.to_string(),
                    field,
                });
            }
        }

        let attempt: u32 = fields[5].parse().map_err(|_| Error::InvalidAttempt {
            name: encoded.to_string(),
            value: fields[5].to_string(),
        })?;

        Ok(Self {
            container_name: container_name.to_string(),
            hash,
            pod_name: pod_name.to_string(),
            pod_namespace: pod_namespace.to_string(),
            pod_uid: pod_uid.to_string(),
            attempt,
        })
    }

    /// Encodes the identity fields into the wire name.
    ///
    /// The result never carries the engine's leading `/`; that is the
    /// engine's own decoration. Field values must not contain the grammar
    /// delimiters, which the launch layer guarantees by restricting names
    /// to DNS-label characters.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{prefix}{d}{cname}{h}{hash:x}{d}{pod}{d}{ns}{d}{uid}{d}{attempt}",
            prefix = MANAGED_NAME_PREFIX,
            d = NAME_FIELD_DELIMITER,
            h = NAME_HASH_DELIMITER,
            cname = self.container_name,
            hash = self.hash,
            pod = self.pod_name,
            ns = self.pod_namespace,
            uid = self.pod_uid,
            attempt = self.attempt,
        )
    }

    /// Returns the `<pod-name>_<namespace>` composite for this name.
    #[must_use]
    pub fn pod_full_name(&self) -> String {
        build_pod_full_name(&self.pod_name, &self.pod_namespace)
    }
}

impl fmt::Display for ManagedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

// =============================================================================
// Name Predicates
// =============================================================================

/// Returns true if an engine-reported name carries the managed prefix.
///
/// A cheap filter for separating this agent's containers from foreign ones
/// in a listing. It checks the prefix only and does not validate the rest of
/// the grammar; a name can pass this filter and still fail
/// [`ManagedName::parse`].
#[must_use]
pub fn is_managed_name(name: &str) -> bool {
    let name = name.strip_prefix('/').unwrap_or(name);
    match name.split_once(NAME_FIELD_DELIMITER) {
        Some((prefix, _)) => prefix == MANAGED_NAME_PREFIX,
        None => false,
    }
}

// =============================================================================
// Pod Full Names
// =============================================================================

/// Builds the `<name>_<namespace>` composite the naming scheme embeds.
#[must_use]
pub fn build_pod_full_name(name: &str, namespace: &str) -> String {
    format!("{name}{NAME_FIELD_DELIMITER}{namespace}")
}

/// Splits a pod full name back into `(name, namespace)`.
///
/// # Errors
///
/// [`Error::InvalidPodFullName`] unless the input is exactly two non-empty
/// fields around one delimiter.
pub fn parse_pod_full_name(full_name: &str) -> Result<(String, String)> {
    let mut fields = full_name.split(NAME_FIELD_DELIMITER);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(namespace), None) if !name.is_empty() && !namespace.is_empty() => {
            Ok((name.to_string(), namespace.to_string()))
        }
        _ => Err(Error::InvalidPodFullName(full_name.to_string())),
    }
}
