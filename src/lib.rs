// gesture-sync: registry-backed aggregation of pointer/gesture input sources
//
// This crate unifies heterogeneous input sources (mouse, touch, scroll, ...)
// behind one event-emitting interface for UI widgets. Source implementations
// are registered once in a process-wide table; each widget then composes the
// sources it cares about into a `CompositeInput` and listens to a single
// stream of start/update/end gesture events.
//
// ## Architecture
//
// - `events`: the event capability - gesture lifecycle types and the
//   synchronous `EventEmitter` used for all subscription and dispatch
// - `sync`: the registry and the `CompositeInput` aggregator
//
// ## Usage Example
//
// ```rust,ignore
// use gesture_sync::{register, CompositeInput, SyncOptions, SyncSpec};
//
// // At startup, register the sync classes the application ships with.
// register([("mouse", mouse_factory), ("touch", touch_factory)])?;
//
// // Per widget, compose the desired sources.
// let composite = CompositeInput::new(
//     SyncSpec::keys(["mouse", "touch"]),
//     Some(&SyncOptions { rails: true, ..SyncOptions::default() }),
// );
//
// // Unified gesture events arrive on the input sink.
// composite.input().subscribe(|event| match event.phase {
//     _ => { /* start / update / end */ }
// });
//
// // Programmatic control events go in through the output sink.
// // composite.output().emit(&event);
// ```

pub mod events;
pub mod sync;

// Re-export commonly used types
pub use events::{EventEmitter, GestureEvent, GesturePayload, GesturePhase, ListenerId};
pub use sync::{
    is_registered, lookup, register, CompositeInput, InputSource, SyncError, SyncFactory,
    SyncOptions, SyncSpec,
};
