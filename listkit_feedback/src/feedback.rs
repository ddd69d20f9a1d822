// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-row active-state machine.
//!
//! [`FeedbackState`] owns one row's `active` flag and applies the rules for
//! each input modality. Every operation is infallible and idempotent under
//! redundant invocation; callers may replay events freely.
//!
//! ## Touch origin
//!
//! Platforms commonly synthesize a hover sequence after a tap. From
//! touch-start until the debounced clear fires, the interaction counts as
//! touch-originated and pointer enter/leave are ignored, so the synthetic
//! hover of the same gesture can neither re-set nor prematurely clear the
//! flag.
//!
//! ## Disabled rows
//!
//! Pointer enter/leave honor the `disabled` flag; touch-start does not.
//! Touch feedback is applied even on disabled rows — an intentional
//! asymmetry that callers rely on, pinned by
//! `tests::touch_start_ignores_disabled_flag`.

use kurbo::Rect;

use crate::outside_click::{OutsideClickRegistry, SubscriptionId};

/// Minimum duration, in milliseconds, that touch feedback stays visible,
/// measured from touch-start.
pub const MIN_TOUCH_FEEDBACK_MS: u64 = 450;

/// Keyboard key classification for feedback tracking.
///
/// Only Tab participates in the state machine; every other key is routed as
/// [`Key::Other`] and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Tab key: key-up activates, key-down deactivates.
    Tab,
    /// Any other key; a no-op for feedback purposes.
    Other,
}

/// Active-state machine for a single row.
///
/// See the [module docs](self) for the per-modality rules and the
/// [crate docs](crate) for a worked example.
#[derive(Clone, Debug, Default)]
pub struct FeedbackState {
    active: bool,
    touched_at: Option<u64>,
    clear_deadline: Option<u64>,
    subscription: Option<SubscriptionId>,
}

impl FeedbackState {
    /// Create an inactive state with no pending deadline or subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the row currently shows active feedback.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the current interaction is touch-originated.
    ///
    /// True from touch-start until the debounced clear fires; pointer
    /// enter/leave are ignored while this holds.
    pub fn touch_originated(&self) -> bool {
        self.touched_at.is_some() || self.clear_deadline.is_some()
    }

    /// The pending clear deadline, if a touch-end has scheduled one.
    ///
    /// Hosts can arm a timer for this instant and then call [`Self::poll`].
    pub fn next_deadline(&self) -> Option<u64> {
        self.clear_deadline
    }

    /// Whether an outside-click subscription is currently held.
    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    /// Pointer entered the row: set `active` unless the row is disabled or
    /// the interaction is touch-originated.
    pub fn pointer_enter(&mut self, disabled: bool) {
        if !disabled && !self.touch_originated() {
            self.active = true;
        }
    }

    /// Pointer left the row: clear `active` under the same guards as
    /// [`Self::pointer_enter`].
    pub fn pointer_leave(&mut self, disabled: bool) {
        if !disabled && !self.touch_originated() {
            self.active = false;
        }
    }

    /// Touch began at `now`: set `active` and record the start time.
    ///
    /// Applied regardless of any disabled flag (see the module docs). Any
    /// previously pending clear is cancelled; the gesture owns the flag
    /// until its own touch-end reschedules one.
    pub fn touch_start(&mut self, now: u64) {
        self.active = true;
        self.touched_at = Some(now);
        self.clear_deadline = None;
    }

    /// Touch ended at `now`: schedule the clear.
    ///
    /// The returned deadline is `max(now, touch_start + 450)`, so feedback
    /// stays visible for at least [`MIN_TOUCH_FEEDBACK_MS`] from touch-start
    /// no matter how quickly the finger lifted. A touch-end with no recorded
    /// touch-start clears at `now`.
    pub fn touch_end(&mut self, now: u64) -> u64 {
        let clear_at = match self.touched_at {
            Some(started) => now.max(started + MIN_TOUCH_FEEDBACK_MS),
            None => now,
        };
        self.clear_deadline = Some(clear_at);
        clear_at
    }

    /// Apply the pending clear if its deadline has passed.
    ///
    /// Returns `true` if the clear fired. Safe to call at any time; with no
    /// due deadline this is a no-op.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.clear_deadline {
            Some(deadline) if now >= deadline => {
                self.active = false;
                self.touched_at = None;
                self.clear_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Key released over the row.
    ///
    /// A Tab key-up means the row just received keyboard focus: set
    /// `active` and acquire an outside-click subscription covering
    /// `bounds`. If a subscription is already held — Tab can arrive
    /// repeatedly while focus cycles back — its bounds are replaced; the
    /// row never holds more than one. Other keys are ignored.
    pub fn key_up(&mut self, key: Key, registry: &mut OutsideClickRegistry, bounds: Rect) {
        if key != Key::Tab {
            return;
        }
        self.active = true;
        match self.subscription {
            Some(id) => {
                // A fired id no longer lives in the registry; re-acquire.
                if !registry.set_bounds(id, bounds) {
                    self.subscription = Some(registry.subscribe(bounds));
                }
            }
            None => self.subscription = Some(registry.subscribe(bounds)),
        }
    }

    /// Key pressed over the row.
    ///
    /// A Tab key-down means focus is about to move on: clear `active` and
    /// release the subscription if one is held. Other keys are ignored.
    pub fn key_down(&mut self, key: Key, registry: &mut OutsideClickRegistry) {
        if key != Key::Tab {
            return;
        }
        self.active = false;
        if let Some(id) = self.subscription.take() {
            registry.unsubscribe(id);
        }
    }

    /// Route a batch of fired subscription ids from
    /// [`OutsideClickRegistry::global_click`].
    ///
    /// If the held subscription is among them, the click landed outside this
    /// row: clear `active`, drop the id, and return `true`. The registry has
    /// already removed fired ids, so nothing is released here.
    pub fn outside_click(&mut self, fired: &[SubscriptionId]) -> bool {
        match self.subscription {
            Some(id) if fired.contains(&id) => {
                self.subscription = None;
                self.active = false;
                true
            }
            _ => false,
        }
    }

    /// Tear the state down: cancel any pending clear and release the
    /// subscription, unconditionally.
    ///
    /// Idempotent. After teardown the state is inactive and holds no
    /// registry entry, whatever path led here.
    pub fn teardown(&mut self, registry: &mut OutsideClickRegistry) {
        self.active = false;
        self.touched_at = None;
        self.clear_deadline = None;
        if let Some(id) = self.subscription.take() {
            registry.unsubscribe(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 48.0)
    }

    #[test]
    fn pointer_tracks_most_recent_event() {
        let mut state = FeedbackState::new();

        state.pointer_enter(false);
        assert!(state.is_active());
        state.pointer_leave(false);
        assert!(!state.is_active());
        state.pointer_enter(false);
        state.pointer_enter(false);
        assert!(state.is_active());
    }

    #[test]
    fn disabled_row_never_activates_from_pointer() {
        let mut state = FeedbackState::new();

        state.pointer_enter(true);
        assert!(!state.is_active());
        state.pointer_leave(true);
        assert!(!state.is_active());
    }

    #[test]
    fn disabled_leave_does_not_clear() {
        let mut state = FeedbackState::new();

        state.pointer_enter(false);
        state.pointer_leave(true);
        assert!(state.is_active());
    }

    // Touch feedback bypasses the disabled guard that pointer events honor.
    // Intentional asymmetry, preserved from the original behavior.
    #[test]
    fn touch_start_ignores_disabled_flag() {
        let mut state = FeedbackState::new();

        state.touch_start(1000);
        assert!(state.is_active());
        assert!(state.touch_originated());
    }

    #[test]
    fn quick_tap_keeps_feedback_for_minimum_duration() {
        let mut state = FeedbackState::new();

        state.touch_start(1000);
        let clear_at = state.touch_end(1100);
        assert_eq!(clear_at, 1450);
        assert_eq!(state.next_deadline(), Some(1450));

        assert!(!state.poll(1449));
        assert!(state.is_active());
        assert!(state.poll(1450));
        assert!(!state.is_active());
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn slow_press_clears_immediately_after_lift() {
        let mut state = FeedbackState::new();

        state.touch_start(1000);
        let clear_at = state.touch_end(2000);
        assert_eq!(clear_at, 2000);
        assert!(state.poll(2000));
        assert!(!state.is_active());
    }

    #[test]
    fn touch_end_without_start_clears_at_now() {
        let mut state = FeedbackState::new();

        assert_eq!(state.touch_end(500), 500);
        assert!(state.poll(500));
    }

    #[test]
    fn synthetic_hover_during_touch_is_ignored() {
        let mut state = FeedbackState::new();

        state.touch_start(1000);
        state.touch_end(1050);

        // The tap's synthetic hover sequence must not disturb the flag.
        state.pointer_leave(false);
        assert!(state.is_active());
        state.pointer_enter(false);
        state.pointer_leave(false);
        assert!(state.is_active());

        // After the debounced clear the pointer rules apply again.
        assert!(state.poll(1450));
        state.pointer_enter(false);
        assert!(state.is_active());
    }

    #[test]
    fn new_touch_cancels_pending_clear() {
        let mut state = FeedbackState::new();

        state.touch_start(1000);
        state.touch_end(1100);
        state.touch_start(1200);
        assert_eq!(state.next_deadline(), None);

        // The second gesture schedules from its own start time.
        assert_eq!(state.touch_end(1250), 1650);
    }

    #[test]
    fn tab_key_up_activates_and_subscribes_once() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.key_up(Key::Tab, &mut registry, bounds());
        assert!(state.is_active());
        assert!(state.has_subscription());
        assert_eq!(registry.len(), 1);

        // Repeat key-ups replace the bounds, never stack a second entry.
        state.key_up(Key::Tab, &mut registry, bounds());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn non_tab_keys_are_ignored() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.key_up(Key::Other, &mut registry, bounds());
        assert!(!state.is_active());
        assert!(registry.is_empty());

        state.key_up(Key::Tab, &mut registry, bounds());
        state.key_down(Key::Other, &mut registry);
        assert!(state.is_active());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn outside_click_clears_active_and_subscription() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.key_up(Key::Tab, &mut registry, bounds());
        let fired = registry.global_click(Point::new(500.0, 500.0));
        assert!(state.outside_click(&fired));
        assert!(!state.is_active());
        assert!(!state.has_subscription());
        assert!(registry.is_empty());
    }

    #[test]
    fn inside_click_changes_nothing() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.key_up(Key::Tab, &mut registry, bounds());
        let fired = registry.global_click(Point::new(100.0, 24.0));
        assert!(!state.outside_click(&fired));
        assert!(state.is_active());
        assert!(state.has_subscription());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn tab_key_down_clears_before_any_outside_click() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.key_up(Key::Tab, &mut registry, bounds());
        state.key_down(Key::Tab, &mut registry);
        assert!(!state.is_active());
        assert!(!state.has_subscription());
        assert!(registry.is_empty());
    }

    #[test]
    fn key_up_after_fired_subscription_reacquires() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.key_up(Key::Tab, &mut registry, bounds());
        // Fire the subscription but have the host drop the batch on the
        // floor; the held id is now stale.
        let _ = registry.global_click(Point::new(500.0, 500.0));
        assert!(registry.is_empty());

        state.key_up(Key::Tab, &mut registry, bounds());
        assert_eq!(registry.len(), 1);
        let fired = registry.global_click(Point::new(500.0, 500.0));
        assert!(state.outside_click(&fired));
    }

    #[test]
    fn two_rows_subscribe_independently() {
        let mut first = FeedbackState::new();
        let mut second = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        let first_bounds = Rect::new(0.0, 0.0, 200.0, 48.0);
        let second_bounds = Rect::new(0.0, 48.0, 200.0, 96.0);
        first.key_up(Key::Tab, &mut registry, first_bounds);
        second.key_up(Key::Tab, &mut registry, second_bounds);
        assert_eq!(registry.len(), 2);

        // Click inside the second row: only the first row's subscription
        // fires.
        let fired = registry.global_click(Point::new(100.0, 72.0));
        assert!(first.outside_click(&fired));
        assert!(!second.outside_click(&fired));
        assert!(!first.is_active());
        assert!(second.is_active());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn teardown_cancels_timer_and_subscription() {
        let mut state = FeedbackState::new();
        let mut registry = OutsideClickRegistry::new();

        state.touch_start(1000);
        state.touch_end(1100);
        state.key_up(Key::Tab, &mut registry, bounds());

        state.teardown(&mut registry);
        assert!(!state.is_active());
        assert_eq!(state.next_deadline(), None);
        assert!(!state.has_subscription());
        assert!(registry.is_empty());

        // Redundant teardown is a no-op.
        state.teardown(&mut registry);
        assert!(registry.is_empty());
    }
}
