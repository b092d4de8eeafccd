//! Conversion from engine listing records to the runtime model.
//!
//! Single records convert through [`to_runtime_container`] and
//! [`to_runtime_image`]. Whole listings convert through the slice drivers,
//! which apply the skip-and-log policy: one container with an undecodable
//! name is dropped with a warning, never allowed to abort the enumeration
//! the reconciliation loop is waiting on.
//!
//! Everything here is a pure function of its arguments. The async entry
//! points at the bottom only stitch a [`EngineLister`] call to the pure
//! drivers.

use crate::engine::{EngineContainer, EngineImage, EngineLister};
use crate::error::Result;
use crate::model::{Container, ContainerId, ContainerState, Image, Pod, Pods};
use crate::naming::{is_managed_name, ManagedName};
use std::collections::HashMap;
use tracing::{debug, warn};

// =============================================================================
// Single-Record Mapping
// =============================================================================

/// Converts one engine container row into the runtime model.
///
/// The encoded name must decode; a format error propagates unchanged so the
/// caller decides whether to skip or abort. Status classification is total
/// and cannot fail, so the record is built atomically or not at all.
///
/// # Errors
///
/// Any name format error from [`ManagedName::parse`].
pub fn to_runtime_container(c: &EngineContainer) -> Result<Container> {
    let decoded = ManagedName::parse(&c.name)?;
    Ok(assemble_container(c, &decoded))
}

/// Converts one engine image row into the runtime model.
///
/// A pure field rename. The `Result` exists for symmetry with
/// [`to_runtime_container`] and leaves room for validation later.
pub fn to_runtime_image(image: &EngineImage) -> Result<Image> {
    Ok(Image {
        id: image.id.clone(),
        tags: image.repo_tags.clone(),
        size: image.size,
    })
}

/// Stitches one listing row and its already-decoded name into a container
/// record. Factored out so pod grouping can reuse a single decode.
fn assemble_container(c: &EngineContainer, decoded: &ManagedName) -> Container {
    Container {
        id: ContainerId::docker(c.id.clone()),
        name: decoded.container_name.clone(),
        image: c.image.clone(),
        hash: decoded.hash,
        created: c.created,
        state: ContainerState::from_status(&c.status),
    }
}

// =============================================================================
// Listing Drivers
// =============================================================================

/// Converts a container listing, skipping rows whose names fail to decode.
///
/// Skipped rows are logged with their reason; survivors keep listing order.
#[must_use]
pub fn to_runtime_containers(listing: &[EngineContainer]) -> Vec<Container> {
    let mut out = Vec::with_capacity(listing.len());
    for c in listing {
        match to_runtime_container(c) {
            Ok(container) => out.push(container),
            Err(e) => {
                warn!(id = %c.id, name = %c.name, error = %e, "skipping container with undecodable name");
            }
        }
    }
    out
}

/// Converts an image listing. Symmetric with [`to_runtime_containers`].
#[must_use]
pub fn to_runtime_images(listing: &[EngineImage]) -> Vec<Image> {
    let mut out = Vec::with_capacity(listing.len());
    for image in listing {
        match to_runtime_image(image) {
            Ok(converted) => out.push(converted),
            Err(e) => warn!(id = %image.id, error = %e, "skipping unconvertible image"),
        }
    }
    out
}

// =============================================================================
// Pod Grouping
// =============================================================================

/// Groups a container listing into pods by decoded pod identity.
///
/// Foreign containers (no managed prefix) are skipped quietly; managed
/// names that fail to decode are skipped with a warning. Pods come out in
/// first-appearance order and containers keep listing order within their
/// pod, so repeated cycles over the same listing yield identical results.
#[must_use]
pub fn group_into_pods(listing: &[EngineContainer]) -> Pods {
    let mut by_uid: HashMap<String, usize> = HashMap::new();
    let mut pods: Vec<Pod> = Vec::new();

    for c in listing {
        if !is_managed_name(&c.name) {
            debug!(id = %c.id, name = %c.name, "container not managed by this agent");
            continue;
        }
        let decoded = match ManagedName::parse(&c.name) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(id = %c.id, name = %c.name, error = %e, "skipping container with undecodable name");
                continue;
            }
        };

        let slot = *by_uid.entry(decoded.pod_uid.clone()).or_insert_with(|| {
            pods.push(Pod {
                id: decoded.pod_uid.clone(),
                name: decoded.pod_name.clone(),
                namespace: decoded.pod_namespace.clone(),
                containers: Vec::new(),
            });
            pods.len() - 1
        });
        pods[slot].containers.push(assemble_container(c, &decoded));
    }

    Pods(pods)
}

// =============================================================================
// Lister Entry Points
// =============================================================================

/// Fetches a container listing through the seam and groups it into pods.
///
/// Listing failure propagates; per-record conversion failure degrades per
/// the skip-and-log policy above.
///
/// # Errors
///
/// Whatever the lister reports for the enumeration itself.
pub async fn runtime_pods(lister: &dyn EngineLister, all: bool) -> Result<Pods> {
    let listing = lister.list_containers(all).await?;
    Ok(group_into_pods(&listing))
}

/// Fetches an image listing through the seam and converts it.
///
/// # Errors
///
/// Whatever the lister reports for the enumeration itself.
pub async fn runtime_images(lister: &dyn EngineLister) -> Result<Vec<Image>> {
    let listing = lister.list_images().await?;
    Ok(to_runtime_images(&listing))
}
