// Composite input handler - per-instance aggregation of registered sources

use super::registry;
use super::source::{InputSource, SyncOptions};
use crate::events::{EventEmitter, ListenerId};
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Selection of sync keys for an aggregator
///
/// Either a plain list of keys, each constructed without options, or a
/// mapping from key to per-source options. Key order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncSpec {
    /// Keys constructed without explicit options
    Keys(Vec<String>),

    /// Keys constructed with per-source options
    Configured(HashMap<String, SyncOptions>),
}

impl SyncSpec {
    /// Build a spec from a list of keys
    pub fn keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Build a spec from key/options pairs
    pub fn configured<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, SyncOptions)>,
        K: Into<String>,
    {
        Self::Configured(
            entries
                .into_iter()
                .map(|(key, options)| (key.into(), options))
                .collect(),
        )
    }

    /// Flatten into (key, options) pairs for the add loop
    fn into_entries(self) -> Vec<(String, Option<SyncOptions>)> {
        match self {
            Self::Keys(keys) => keys.into_iter().map(|key| (key, None)).collect(),
            Self::Configured(entries) => entries
                .into_iter()
                .map(|(key, options)| (key, Some(options)))
                .collect(),
        }
    }
}

impl Default for SyncSpec {
    fn default() -> Self {
        Self::Keys(Vec::new())
    }
}

/// Listener handles for one wired source
struct Wiring {
    /// Subscription on the source's emitter forwarding into the input sink
    forward: ListenerId,

    /// Subscription on the output sink feeding events back to the source
    control: ListenerId,
}

/// A source owned by the aggregator, plus its wiring state
///
/// A source can be attached but unwired after `unsubscribe_input`.
struct AttachedSource {
    source: Rc<RefCell<dyn InputSource>>,
    wiring: Option<Wiring>,
}

/// Composite input handler unifying registered sources behind one interface
///
/// Resolves keys against the process-wide registry, owns the source
/// instances it creates, and passes their start/update/end events through
/// unchanged:
///
/// - the **input sink** ([`CompositeInput::input`]) emits the unified events;
///   external listeners subscribe here
/// - the **output sink** ([`CompositeInput::output`]) accepts externally
///   pushed events and broadcasts them to every wired source
///
/// The aggregator is a pure pass-through multiplexer: it neither validates
/// event sequencing nor transforms payloads.
pub struct CompositeInput {
    /// Unified outbound events from all wired sources
    input: Rc<EventEmitter>,

    /// Inbound control events, broadcast to all wired sources
    output: Rc<EventEmitter>,

    /// Live sources owned by this aggregator, by sync key
    sources: HashMap<String, AttachedSource>,
}

impl CompositeInput {
    /// Horizontal axis tag for axis-specific source data
    pub const DIRECTION_X: usize = 0;

    /// Vertical axis tag for axis-specific source data
    pub const DIRECTION_Y: usize = 1;

    /// Depth axis tag for axis-specific source data
    pub const DIRECTION_Z: usize = 2;

    /// Create an aggregator for the given sync keys
    ///
    /// Keys are resolved against the registry immediately; unregistered keys
    /// are skipped without error. If `options` is given it is forwarded to
    /// every source attached by `syncs`, after their per-key construction
    /// options.
    pub fn new(syncs: SyncSpec, options: Option<&SyncOptions>) -> Self {
        let mut composite = Self {
            input: Rc::new(EventEmitter::new()),
            output: Rc::new(EventEmitter::new()),
            sources: HashMap::new(),
        };

        composite.add_input(syncs);
        if let Some(options) = options {
            composite.set_options(options);
        }

        composite
    }

    /// The sink on which this aggregator emits unified gesture events
    pub fn input(&self) -> &Rc<EventEmitter> {
        &self.input
    }

    /// The sink through which external events reach the wired sources
    pub fn output(&self) -> &Rc<EventEmitter> {
        &self.output
    }

    /// Forward `options` to every currently attached source
    ///
    /// Sources attached later do not receive them retroactively. A no-op
    /// with zero attached sources.
    pub fn set_options(&mut self, options: &SyncOptions) {
        for attached in self.sources.values() {
            attached.source.borrow_mut().set_options(options);
        }
    }

    /// Resolve keys against the registry, construct sources, and wire them
    ///
    /// Keys with no registry entry are skipped silently; a missing
    /// registration is not an error. Adding a key that is already attached
    /// unwires and drops the previous instance before the replacement is
    /// constructed.
    pub fn add_input(&mut self, syncs: SyncSpec) {
        for (key, options) in syncs.into_entries() {
            self.add_source(key, options.as_ref());
        }
    }

    fn add_source(&mut self, key: String, options: Option<&SyncOptions>) {
        let Some(factory) = registry::lookup(&key) else {
            debug!("ignoring sync key `{key}`: not registered");
            return;
        };

        if self.sources.contains_key(&key) {
            // Sever the old instance's wiring so it cannot keep feeding the
            // sinks after it is replaced
            self.unsubscribe_input(&key);
        }

        let source = factory.produce(options);
        self.sources
            .insert(key.clone(), AttachedSource { source, wiring: None });
        self.subscribe_input(&key);
    }

    /// Wire the bidirectional event flow for an attached source
    ///
    /// Events the source emits flow into the input sink; events emitted on
    /// the output sink flow into the source. A no-op if the key has no
    /// attached source or is already wired.
    pub fn subscribe_input(&mut self, key: &str) {
        let Some(attached) = self.sources.get_mut(key) else {
            debug!("subscribe_input: no attached source for `{key}`");
            return;
        };
        if attached.wiring.is_some() {
            return;
        }

        let input = Rc::clone(&self.input);
        let forward = attached
            .source
            .borrow()
            .emitter()
            .subscribe(move |event| input.emit(event));

        let source = Rc::clone(&attached.source);
        let control = self
            .output
            .subscribe(move |event| source.borrow_mut().handle_event(event));

        trace!("wired sync `{key}`");
        attached.wiring = Some(Wiring { forward, control });
    }

    /// Sever the bidirectional event flow for an attached source
    ///
    /// The source stays attached and owned; it can be rewired with
    /// [`CompositeInput::subscribe_input`]. A no-op if the key has no
    /// attached source or is already unwired.
    pub fn unsubscribe_input(&mut self, key: &str) {
        let Some(attached) = self.sources.get_mut(key) else {
            debug!("unsubscribe_input: no attached source for `{key}`");
            return;
        };

        if let Some(wiring) = attached.wiring.take() {
            attached.source.borrow().emitter().unsubscribe(wiring.forward);
            self.output.unsubscribe(wiring.control);
            trace!("unwired sync `{key}`");
        }
    }

    /// Get the attached source for a key, if any
    pub fn source(&self, key: &str) -> Option<Rc<RefCell<dyn InputSource>>> {
        self.sources
            .get(key)
            .map(|attached| Rc::clone(&attached.source))
    }

    /// Check whether a source is attached under `key`
    pub fn has_source(&self, key: &str) -> bool {
        self.sources.contains_key(key)
    }

    /// Number of attached sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl Default for CompositeInput {
    fn default() -> Self {
        Self::new(SyncSpec::default(), None)
    }
}

impl std::fmt::Debug for CompositeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeInput")
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .finish()
    }
}
