use std::time::{Duration, Instant};
use ulid::Ulid;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(2200);

/// Severity tag controlling the toast's accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Ok,
    Err,
    Info,
}

/// A transient status message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Ulid,
    pub message: String,
    pub kind: ToastKind,
    created: Instant,
}

impl Toast {
    /// Time left before this toast expires, zero once it is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.created + TOAST_DURATION).saturating_duration_since(now)
    }
}

/// Append-only toast list with timed eviction.
///
/// The queue never deduplicates: every `push` yields a new entry, and
/// several toasts can be visible at once. The owner sweeps it once per
/// frame; an entry is evicted exactly `TOAST_DURATION` after creation,
/// never earlier. Evicting or dismissing an already-removed id is a safe
/// no-op.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message, stamping it with the current instant.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> Ulid {
        self.push_at(message, kind, Instant::now())
    }

    /// Enqueue with an explicit creation instant (the testable entry point).
    pub fn push_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> Ulid {
        let id = Ulid::new();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            created: now,
        });
        id
    }

    /// Drop every toast whose lifetime has fully elapsed.
    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    pub fn sweep_at(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.duration_since(t.created) < TOAST_DURATION);
    }

    /// Remove one toast by id; idempotent.
    pub fn dismiss(&mut self, id: Ulid) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_sweep_before_expiry_keeps_toast() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at("Object removed", ToastKind::Err, t0);

        queue.sweep_at(t0 + Duration::from_millis(2199));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_sweep_evicts_exactly_at_duration() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at("Created scene", ToastKind::Ok, t0);

        queue.sweep_at(t0 + TOAST_DURATION);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_concurrent_toasts_expire_independently() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at("first", ToastKind::Info, t0);
        queue.push_at("second", ToastKind::Info, t0 + Duration::from_millis(1000));

        queue.sweep_at(t0 + Duration::from_millis(2500));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().message, "second");

        queue.sweep_at(t0 + Duration::from_millis(3300));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_repeated_messages_are_not_coalesced() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at("Added Sprite", ToastKind::Ok, t0);
        queue.push_at("Added Sprite", ToastKind::Ok, t0);
        queue.push_at("Added Sprite", ToastKind::Ok, t0);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new();
        let id = queue.push_at("gone", ToastKind::Info, t0);

        queue.dismiss(id);
        assert!(queue.is_empty());
        queue.dismiss(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let t0 = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at("late", ToastKind::Info, t0);
        let toast = queue.iter().next().unwrap().clone();

        assert_eq!(toast.remaining(t0), TOAST_DURATION);
        assert_eq!(
            toast.remaining(t0 + Duration::from_secs(10)),
            Duration::ZERO
        );
    }
}
