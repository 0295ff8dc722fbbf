//! Registry of theming participants.
//!
//! Registration appends; each registration gets its own [`ParticipantId`], so
//! registering the same callback twice yields two entries that dispose
//! independently. Ids are never reused.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Weak};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::{ColorTheme, RuleSet, StyleCollector};


/// Callback invoked with the active theme whenever the theme changes.
pub type ThemingParticipant = Arc<dyn Fn(&dyn ColorTheme, &mut dyn StyleCollector) + Send + Sync>;

/// Callback invoked with every newly registered participant.
pub type AddedListener = Arc<dyn Fn(&ThemingParticipant) + Send + Sync>;

/// Unique token of one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(u64);

/// Unique token of one added-listener subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Inner {
	next_id: AtomicU64,
	participants: RwLock<IndexMap<ParticipantId, ThemingParticipant>>,
	listeners: RwLock<IndexMap<ListenerId, AddedListener>>,
}

impl Inner {
	fn next_id(&self) -> u64 {
		self.next_id.fetch_add(1, Ordering::Relaxed)
	}

	fn remove(&self, id: ParticipantId) -> bool {
		self.participants.write().shift_remove(&id).is_some()
	}
}

/// Ordered collection of theming participants.
#[derive(Clone, Default)]
pub struct ThemingRegistry {
	inner: Arc<Inner>,
}

impl std::fmt::Debug for ThemingRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ThemingRegistry")
			.field("participants", &self.len())
			.field("listeners", &self.inner.listeners.read().len())
			.finish()
	}
}

impl ThemingRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a participant closure.
	pub fn register<F>(&self, participant: F) -> ParticipantHandle
	where
		F: Fn(&dyn ColorTheme, &mut dyn StyleCollector) + Send + Sync + 'static,
	{
		self.register_shared(Arc::new(participant))
	}

	/// Registers an already shared participant.
	///
	/// The same `Arc` may be registered more than once; every call creates a
	/// separate entry with its own handle.
	pub fn register_shared(&self, participant: ThemingParticipant) -> ParticipantHandle {
		let id = ParticipantId(self.inner.next_id());
		self.inner.participants.write().insert(id, participant.clone());
		debug!(participant = id.0, "registered theming participant");

		let listeners: Vec<AddedListener> = self.inner.listeners.read().values().cloned().collect();
		for listener in listeners {
			listener(&participant);
		}

		ParticipantHandle {
			id,
			registry: Arc::downgrade(&self.inner),
		}
	}

	/// Subscribes to participant registrations.
	pub fn on_participant_added<F>(&self, listener: F) -> ListenerId
	where
		F: Fn(&ThemingParticipant) + Send + Sync + 'static,
	{
		let id = ListenerId(self.inner.next_id());
		self.inner.listeners.write().insert(id, Arc::new(listener));
		id
	}

	/// Removes an added-listener. Returns false if it was already removed.
	pub fn remove_listener(&self, id: ListenerId) -> bool {
		self.inner.listeners.write().shift_remove(&id).is_some()
	}

	/// Snapshot of the current participants in registration order.
	pub fn participants(&self) -> Vec<ThemingParticipant> {
		self.inner.participants.read().values().cloned().collect()
	}

	/// Ids of the current registrations in registration order.
	pub fn ids(&self) -> Vec<ParticipantId> {
		self.inner.participants.read().keys().copied().collect()
	}

	/// Number of registered participants.
	pub fn len(&self) -> usize {
		self.inner.participants.read().len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Runs every participant against `theme` and returns the collected rules.
	///
	/// Participants run against a snapshot taken on entry, so a participant
	/// may register or dispose others. A participant that panics is logged
	/// and skipped.
	pub fn render(&self, theme: &dyn ColorTheme) -> RuleSet {
		let mut rules = RuleSet::new();
		self.render_into(theme, &mut rules);
		rules
	}

	/// Like [`Self::render`], writing into a caller-supplied collector.
	pub fn render_into(&self, theme: &dyn ColorTheme, collector: &mut dyn StyleCollector) {
		let snapshot: Vec<(ParticipantId, ThemingParticipant)> =
			self.inner.participants.read().iter().map(|(id, p)| (*id, p.clone())).collect();
		debug!(theme = theme.label(), scheme = %theme.scheme(), participants = snapshot.len(), "applying theme");

		for (id, participant) in snapshot {
			if catch_unwind(AssertUnwindSafe(|| participant(theme, &mut *collector))).is_err() {
				warn!(participant = id.0, theme = theme.label(), "theming participant panicked");
			}
		}
	}
}

/// Disposes one registration.
///
/// Dropping the handle leaves the participant registered.
#[must_use = "dropping the handle leaves the participant registered forever"]
#[derive(Debug, Clone)]
pub struct ParticipantHandle {
	id: ParticipantId,
	registry: Weak<Inner>,
}

impl ParticipantHandle {
	/// Id of the registration this handle removes.
	pub fn id(&self) -> ParticipantId {
		self.id
	}

	/// Removes the registration. Returns false if it was already removed or the
	/// registry no longer exists.
	pub fn dispose(&self) -> bool {
		let removed = self.registry.upgrade().is_some_and(|inner| inner.remove(self.id));
		if removed {
			debug!(participant = self.id.0, "disposed theming participant");
		}
		removed
	}
}

static THEMING: LazyLock<ThemingRegistry> = LazyLock::new(ThemingRegistry::new);

/// Process-wide theming registry.
pub fn theming_registry() -> &'static ThemingRegistry {
	&THEMING
}

/// Registers a participant with the process-wide registry.
pub fn register_theming_participant<F>(participant: F) -> ParticipantHandle
where
	F: Fn(&dyn ColorTheme, &mut dyn StyleCollector) + Send + Sync + 'static,
{
	theming_registry().register(participant)
}
