//! Engine-side input records and the listing seam.
//!
//! The records here mirror what the engine's list endpoints return, already
//! deserialized by the query collaborator. This crate never opens a socket:
//! [`EngineLister`] is the seam a real engine client (or a test fake)
//! implements, and the conversion drivers in [`crate::convert`] run over
//! whatever it yields.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// Raw Listing Records
// =============================================================================

/// One row of the engine's container listing, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineContainer {
    /// Engine-native container id.
    pub id: String,
    /// Encoded container name. The engine reports it with a leading `/`.
    pub name: String,
    /// Image reference the container was created from.
    pub image: String,
    /// Creation timestamp in the engine's native epoch unit.
    pub created: i64,
    /// Free-form status text, e.g. `"Up 5 hours"`.
    pub status: String,
}

/// One row of the engine's image listing, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineImage {
    /// Engine-native image id.
    pub id: String,
    /// Repository:tag names in the order the engine reports them.
    pub repo_tags: Vec<String>,
    /// Image size in bytes.
    pub size: i64,
}

// =============================================================================
// Listing Seam
// =============================================================================

/// Enumeration interface the engine-query collaborator implements.
///
/// Only listing lives behind this trait. Transport, timeouts, and retry
/// policy are the implementor's business; conversion stays pure and is
/// driven over the results by [`crate::convert::runtime_pods`] and
/// [`crate::convert::runtime_images`].
#[async_trait]
pub trait EngineLister: Send + Sync {
    /// Lists containers. With `all` set, stopped containers are included.
    async fn list_containers(&self, all: bool) -> Result<Vec<EngineContainer>>;

    /// Lists images.
    async fn list_images(&self) -> Result<Vec<EngineImage>>;
}
