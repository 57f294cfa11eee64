// Input source contracts and source configuration

use crate::events::{EventEmitter, GestureEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration propagated to input sources
///
/// The aggregator never inspects or validates these values; it forwards them
/// verbatim to sources at construction and through `set_options`. Which fields
/// a source honors is up to the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOptions {
    /// Restrict the source to a single axis (one of the `DIRECTION_*`
    /// constants on `CompositeInput`); `None` reports all axes
    pub direction: Option<usize>,

    /// Snap movement to the dominant axis of the gesture
    pub rails: bool,

    /// Multiplier applied by the source to deltas and velocities
    pub scale: f64,

    /// Whether the source lets the raw platform event continue to other
    /// handlers after consuming it
    pub propagate: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            direction: None,
            rails: false,
            scale: 1.0,
            propagate: false,
        }
    }
}

/// A live input source owned by a single aggregator
///
/// Implementations translate a raw interaction channel (pointer, touch,
/// wheel) into standardized start/update/end events published on their
/// emitter. How the raw channel is captured is outside this crate.
pub trait InputSource {
    /// The emitter this source publishes its lifecycle events on
    ///
    /// The aggregator subscribes here to forward events to its input sink.
    fn emitter(&self) -> Rc<EventEmitter>;

    /// Apply a new set of options to the live source
    fn set_options(&mut self, options: &SyncOptions);

    /// Receive an event pushed through the owning aggregator's output sink
    ///
    /// Supports sources that accept external control, e.g. programmatic
    /// updates. Sources that do not may ignore the event.
    fn handle_event(&mut self, event: &GestureEvent);
}

/// Factory producing input-source instances for the registry
///
/// Registered once per key in the process-wide registry and shared by every
/// aggregator, hence `Send + Sync`. The instances it produces are owned by a
/// single aggregator and stay on the UI thread.
pub trait SyncFactory: Send + Sync {
    /// Construct a new source instance
    ///
    /// `options` is the per-key configuration given to `add_input`, or
    /// `None` when the key was listed without options.
    fn produce(&self, options: Option<&SyncOptions>) -> Rc<RefCell<dyn InputSource>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SyncOptions::default();

        assert_eq!(options.direction, None);
        assert!(!options.rails);
        assert_eq!(options.scale, 1.0);
        assert!(!options.propagate);
    }

    #[test]
    fn test_options_equality() {
        let a = SyncOptions {
            propagate: true,
            ..SyncOptions::default()
        };
        let b = SyncOptions {
            propagate: true,
            ..SyncOptions::default()
        };

        assert_eq!(a, b);
        assert_ne!(a, SyncOptions::default());
    }
}
