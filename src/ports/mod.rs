//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the engine and the externally trained classifier artifacts the
//! host process loads and owns.

mod classifier;

pub use classifier::{ClassifierModel, ModelError};
