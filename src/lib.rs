//! # dockmap
//!
//! **Engine-Listing → Runtime-Model Conversion Layer**
//!
//! This crate converts a Docker-style container engine's native listing
//! records into the runtime-agnostic model a pod orchestration agent
//! consumes. It is a pure in-process transformation layer: the engine-query
//! collaborator fetches listings, dockmap decodes and normalizes them, the
//! reconciliation loop reads the result. Nothing here performs I/O, retries,
//! or holds state between calls.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            dockmap                               │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────────────────────────────────────┐    │
//! │  │                 EngineLister Trait (seam)                │    │
//! │  │   list_containers(all) → [EngineContainer]               │    │
//! │  │   list_images()        → [EngineImage]                   │    │
//! │  └──────────────────────────────────────────────────────────┘    │
//! │                             │                                    │
//! │  ┌──────────────┐  ┌───────┴────────┐  ┌───────────────────┐    │
//! │  │ ManagedName  │  │ ContainerState │  │ to_runtime_*      │    │
//! │  │ ::parse()    │  │ ::from_status()│  │ group_into_pods   │    │
//! │  │ name grammar │  │ status prefix  │  │ skip-and-log      │    │
//! │  └──────────────┘  └────────────────┘  └───────────────────┘    │
//! │                             │                                    │
//! │  ┌──────────────────────────┴───────────────────────────────┐   │
//! │  │     Container · Image · Pod / Pods   (runtime model)     │   │
//! │  └──────────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # The Naming Convention
//!
//! The engine has no pod concept, so the agent's launch layer packs pod
//! identity into the container name field:
//!
//! ```text
//! pod_<cname>.<hash>_<pod-name>_<namespace>_<pod-uid>_<attempt>
//! ```
//!
//! [`naming`] defines the grammar once for both directions. The decoder
//! recovers the logical name, config fingerprint, pod name, namespace, pod
//! UID, and attempt counter from the opaque string the engine reports
//! (usually with a leading `/` the engine adds on its own).
//!
//! # Error Policy
//!
//! Malformation that breaks identity attribution (missing prefix, truncated
//! fields, unreadable attempt counter) fails that record's conversion with
//! an [`Error`]. Cosmetic malformation (unreadable hash token, unrecognized
//! status text) degrades to safe defaults: hash 0 and
//! [`ContainerState::Unknown`]. The listing drivers skip failed records
//! with a warning instead of aborting the enumeration.
//!
//! # Example
//!
//! ```rust
//! use dockmap::{to_runtime_container, ContainerState, EngineContainer};
//!
//! let raw = EngineContainer {
//!     id: "ab2cdf".to_string(),
//!     name: "/pod_bar.5678_foo_ns_1234_42".to_string(),
//!     image: "bar_image".to_string(),
//!     created: 12345,
//!     status: "Up 5 hours".to_string(),
//! };
//!
//! let container = to_runtime_container(&raw)?;
//! assert_eq!(container.name, "bar");
//! assert_eq!(container.hash, 0x5678);
//! assert_eq!(container.state, ContainerState::Running);
//! # Ok::<(), dockmap::Error>(())
//! ```

pub mod constants;
pub mod convert;
pub mod engine;
pub mod error;
pub mod model;
pub mod naming;

// Re-exports
pub use constants::*;
pub use convert::{
    group_into_pods, runtime_images, runtime_pods, to_runtime_container, to_runtime_containers,
    to_runtime_image, to_runtime_images,
};
pub use engine::{EngineContainer, EngineImage, EngineLister};
pub use error::{Error, Result};
pub use model::{Container, ContainerId, ContainerState, Image, Pod, Pods};
pub use naming::{build_pod_full_name, is_managed_name, parse_pod_full_name, ManagedName};
