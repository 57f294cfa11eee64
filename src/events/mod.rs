// Event capability: gesture lifecycle events and the synchronous emitter
//
// Everything here is single-threaded by design. Emitters are shared via `Rc`
// and dispatch synchronously, in subscription order, on the thread that owns
// the UI event loop.

mod emitter;
mod gesture;

pub use emitter::{EventEmitter, ListenerId};
pub use gesture::{GestureEvent, GesturePayload, GesturePhase};
