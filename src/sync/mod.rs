// Sync system: the input-source registry and the composite input handler
//
// This module provides the bookkeeping that unifies heterogeneous
// pointer/gesture sources behind one event interface.
//
// ## Architecture
//
// - `source`: the contracts a pluggable source satisfies (`InputSource`,
//   `SyncFactory`) and the options value propagated to sources
// - `registry`: process-wide, append-only key -> factory table
// - `aggregator`: `CompositeInput`, the per-instance facade that resolves
//   keys against the registry, owns the live sources, and forwards their
//   start/update/end events to subscribers
//
// ## Usage Example
//
// ```rust,ignore
// use gesture_sync::{register, CompositeInput, SyncSpec};
//
// // Once at startup, register the source factories the app ships with.
// register([("mouse", mouse_factory), ("touch", touch_factory)])?;
//
// // Per widget, compose the sources it cares about.
// let composite = CompositeInput::new(SyncSpec::keys(["mouse", "touch"]), None);
//
// // Listen for unified gesture events.
// composite.input().subscribe(|event| {
//     // start / update / end, regardless of which source produced it
// });
// ```

mod aggregator;
mod registry;
mod source;

pub use aggregator::{CompositeInput, SyncSpec};
pub use registry::{is_registered, lookup, register};
pub use source::{InputSource, SyncFactory, SyncOptions};

/// Sync registration errors
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Sync key already registered to a different sync class: {0}")]
    Conflict(String),
}
