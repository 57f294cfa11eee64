// Gesture lifecycle event types

/// Phase of a gesture interaction
///
/// A well-behaved source emits zero or one `Start`, any number of `Update`s,
/// then exactly one `End`. An abandoned interaction may never emit `End`;
/// the aggregator does not enforce sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Start,
    Update,
    End,
}

/// Data carried by a gesture lifecycle event
///
/// Produced by input sources and forwarded by the aggregator without
/// transformation. All values are in logical pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GesturePayload {
    /// Absolute pointer position
    pub position: [f64; 2],

    /// Movement since the previous event of this interaction
    pub delta: [f64; 2],

    /// Instantaneous velocity in pixels per second
    pub velocity: [f64; 2],
}

impl GesturePayload {
    /// Create a payload with only a delta (position and velocity zeroed)
    pub fn from_delta(dx: f64, dy: f64) -> Self {
        Self {
            delta: [dx, dy],
            ..Self::default()
        }
    }

    /// Return a copy with delta and velocity multiplied by `scale`
    ///
    /// Convenience for sources honoring the `scale` option; position is
    /// left untouched since it is an absolute coordinate.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            position: self.position,
            delta: [self.delta[0] * scale, self.delta[1] * scale],
            velocity: [self.velocity[0] * scale, self.velocity[1] * scale],
        }
    }
}

/// A single event in a gesture's lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    /// Which phase of the interaction this event marks
    pub phase: GesturePhase,

    /// The payload, passed through untouched by the aggregator
    pub payload: GesturePayload,
}

impl GestureEvent {
    /// Create an event with an explicit phase
    pub fn new(phase: GesturePhase, payload: GesturePayload) -> Self {
        Self { phase, payload }
    }

    /// Create a `Start` event
    pub fn start(payload: GesturePayload) -> Self {
        Self::new(GesturePhase::Start, payload)
    }

    /// Create an `Update` event
    pub fn update(payload: GesturePayload) -> Self {
        Self::new(GesturePhase::Update, payload)
    }

    /// Create an `End` event
    pub fn end(payload: GesturePayload) -> Self {
        Self::new(GesturePhase::End, payload)
    }
}
