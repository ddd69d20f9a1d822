// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-click subscription service.
//!
//! Rows that become active via keyboard focus need to notice the next click
//! that lands somewhere else. Rather than a process-global listener, this is
//! an explicit registry the host owns (typically one per window): widgets
//! acquire a subscription with their container bounds, the host forwards
//! every global click to [`OutsideClickRegistry::global_click`], and the
//! registry fires — and removes — every subscription whose bounds do not
//! contain the click point. Subscriptions are one-shot on firing; a click
//! inside a subscription's bounds leaves it registered.
//!
//! Several rows may hold subscriptions at once. There is no deduplication;
//! each subscriber releases independently, either by being fired or via
//! [`OutsideClickRegistry::unsubscribe`].

use core::num::NonZeroU64;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Identifier for a held outside-click subscription.
///
/// Ids are unique for the lifetime of a registry and are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(NonZeroU64);

/// Registry of one-shot outside-click subscriptions.
///
/// The host owns the registry and forwards global clicks to it; see the
/// module docs for the protocol.
#[derive(Clone, Debug, Default)]
pub struct OutsideClickRegistry {
    subs: HashMap<SubscriptionId, Rect>,
    next_id: u64,
}

impl OutsideClickRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a subscription covering `bounds`.
    ///
    /// The subscription stays registered until it fires from a click outside
    /// `bounds` or is released via [`Self::unsubscribe`].
    pub fn subscribe(&mut self, bounds: Rect) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(NonZeroU64::new(self.next_id).expect("counter starts at one"));
        self.subs.insert(id, bounds);
        id
    }

    /// Replace the bounds of a held subscription.
    ///
    /// Returns `false` if the subscription has already fired or been
    /// released, in which case nothing changes.
    pub fn set_bounds(&mut self, id: SubscriptionId, bounds: Rect) -> bool {
        match self.subs.get_mut(&id) {
            Some(slot) => {
                *slot = bounds;
                true
            }
            None => false,
        }
    }

    /// Release a subscription.
    ///
    /// Idempotent: releasing an id that already fired or was already
    /// released returns `false` and is otherwise a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subs.remove(&id).is_some()
    }

    /// Process a global click at `point`.
    ///
    /// Every subscription whose bounds do not contain `point` fires: it is
    /// removed from the registry and its id is returned so the host can
    /// notify the owning widget. Subscriptions containing `point` are left
    /// registered. Fired ids are returned in ascending order so dispatch is
    /// deterministic.
    pub fn global_click(&mut self, point: Point) -> SmallVec<[SubscriptionId; 4]> {
        let mut fired: SmallVec<[SubscriptionId; 4]> = self
            .subs
            .iter()
            .filter(|(_, bounds)| !bounds.contains(point))
            .map(|(id, _)| *id)
            .collect();
        fired.sort_unstable();
        for id in &fired {
            self.subs.remove(id);
        }
        fired
    }

    /// Whether `id` is currently registered.
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.subs.contains_key(&id)
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    /// Whether the registry holds no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(i: f64) -> Rect {
        Rect::new(0.0, i * 48.0, 200.0, (i + 1.0) * 48.0)
    }

    #[test]
    fn outside_click_fires_and_removes() {
        let mut registry = OutsideClickRegistry::new();
        let id = registry.subscribe(row(0.0));

        let fired = registry.global_click(Point::new(300.0, 300.0));
        assert_eq!(fired.as_slice(), &[id]);
        assert!(registry.is_empty());
    }

    #[test]
    fn inside_click_leaves_subscription_registered() {
        let mut registry = OutsideClickRegistry::new();
        let id = registry.subscribe(row(0.0));

        let fired = registry.global_click(Point::new(100.0, 24.0));
        assert!(fired.is_empty());
        assert!(registry.contains(id));
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut registry = OutsideClickRegistry::new();
        let id = registry.subscribe(row(0.0));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn fired_subscription_cannot_be_released_again() {
        let mut registry = OutsideClickRegistry::new();
        let id = registry.subscribe(row(0.0));

        let fired = registry.global_click(Point::new(300.0, 300.0));
        assert_eq!(fired.len(), 1);
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn only_out_of_bounds_subscriptions_fire() {
        let mut registry = OutsideClickRegistry::new();
        let a = registry.subscribe(row(0.0));
        let b = registry.subscribe(row(1.0));
        let c = registry.subscribe(row(2.0));

        // Click inside row 1: rows 0 and 2 fire, row 1 stays.
        let fired = registry.global_click(Point::new(100.0, 72.0));
        assert_eq!(fired.as_slice(), &[a, c]);
        assert!(registry.contains(b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut registry = OutsideClickRegistry::new();
        let a = registry.subscribe(row(0.0));
        registry.unsubscribe(a);
        let b = registry.subscribe(row(0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn set_bounds_moves_the_subscription() {
        let mut registry = OutsideClickRegistry::new();
        let id = registry.subscribe(row(0.0));
        assert!(registry.set_bounds(id, row(5.0)));

        // A click inside the old bounds is now outside.
        let fired = registry.global_click(Point::new(100.0, 24.0));
        assert_eq!(fired.as_slice(), &[id]);
        assert!(!registry.set_bounds(id, row(0.0)));
    }
}
