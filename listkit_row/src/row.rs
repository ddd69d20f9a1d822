// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row composition: feedback + disclosure + render planning behind one
//! event surface.
//!
//! [`ListRow`] wires the three state slices together and exposes one entry
//! point per raw input event. Every entry point invokes the externally
//! supplied hook for that event FIRST and unconditionally — before any
//! internal mutation, disabled or not — so callers can observe every event.
//! There is no veto: hooks see events, they cannot cancel them.
//!
//! The row is generic over the raw event payload `E`; it threads `&E`
//! through to hooks untouched and attaches no meaning to it.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;
use listkit_disclosure::{DisclosureState, Ownership, ToggleEffect, VisibilityInputs};
use listkit_feedback::{FeedbackState, Key, OutsideClickRegistry, SubscriptionId};

use crate::context::AncestorContext;
use crate::plan::{Decorations, RowPlan, plan_row};

/// Static row configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowConfig {
    /// Whether the row is disabled. Gates pointer feedback; touch feedback
    /// is applied regardless (see `listkit_feedback`).
    pub disabled: bool,
    /// Whether the row has nested content to disclose.
    pub nested_content: bool,
    /// Prefer the left decoration slot for the expander affordance.
    pub expander_left: bool,
    /// Whether inline disclosure should animate.
    pub animate: bool,
    /// Which decoration slots are already occupied.
    pub decorations: Decorations,
    /// Ordinal passthrough: this row's position within its set.
    pub position_in_set: Option<u32>,
    /// Ordinal passthrough: the number of rows in the set.
    pub set_size: Option<u32>,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            nested_content: false,
            expander_left: false,
            animate: true,
            decorations: Decorations::empty(),
            position_in_set: None,
            set_size: None,
        }
    }
}

/// Externally supplied per-event hooks.
///
/// Each hook, when present, fires before the row's internal handling of the
/// same event. `on_activate` additionally serves as the toggle request
/// channel for delegated rows: it receives the raw triggering event, and
/// the owner is expected to push the next value via
/// [`ListRow::set_visible`].
pub struct RowHooks<E> {
    /// Fired on primary activation, before the toggle.
    pub on_activate: Option<Box<dyn FnMut(&E)>>,
    /// Fired on pointer enter.
    pub on_pointer_enter: Option<Box<dyn FnMut(&E)>>,
    /// Fired on pointer leave.
    pub on_pointer_leave: Option<Box<dyn FnMut(&E)>>,
    /// Fired on touch start.
    pub on_touch_start: Option<Box<dyn FnMut(&E)>>,
    /// Fired on touch end.
    pub on_touch_end: Option<Box<dyn FnMut(&E)>>,
    /// Fired on key down.
    pub on_key_down: Option<Box<dyn FnMut(&E)>>,
    /// Fired on key up.
    pub on_key_up: Option<Box<dyn FnMut(&E)>>,
}

impl<E> Default for RowHooks<E> {
    fn default() -> Self {
        Self {
            on_activate: None,
            on_pointer_enter: None,
            on_pointer_leave: None,
            on_touch_start: None,
            on_touch_end: None,
            on_key_down: None,
            on_key_up: None,
        }
    }
}

impl<E> fmt::Debug for RowHooks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowHooks")
            .field("on_activate", &self.on_activate.is_some())
            .field("on_pointer_enter", &self.on_pointer_enter.is_some())
            .field("on_pointer_leave", &self.on_pointer_leave.is_some())
            .field("on_touch_start", &self.on_touch_start.is_some())
            .field("on_touch_end", &self.on_touch_end.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("on_key_up", &self.on_key_up.is_some())
            .finish()
    }
}

/// A single list row: one widget instance's state and event surface.
///
/// The whole-widget state machine has two orthogonal axes, {closed, open} ×
/// {inactive, active}. Open/closed transitions happen only through the
/// toggle path ([`Self::activate`] / [`Self::popup_close_request`] /
/// [`Self::set_visible`]); inactive/active transitions happen only through
/// the feedback rules. Inline vs. cascading is not a state at all — it is
/// re-derived on every [`Self::plan`] call from the ancestor context.
pub struct ListRow<E> {
    config: RowConfig,
    bounds: Rect,
    feedback: FeedbackState,
    disclosure: DisclosureState,
    hooks: RowHooks<E>,
}

impl<E> fmt::Debug for ListRow<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRow")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("feedback", &self.feedback)
            .field("disclosure", &self.disclosure)
            .field("hooks", &self.hooks)
            .finish()
    }
}

impl<E> ListRow<E> {
    /// Build a row, resolving visibility ownership once from `visibility`.
    ///
    /// A delegated row without an `on_activate` hook can never communicate
    /// toggle requests to its owner, so its disclosure is permanently
    /// stuck; debug builds assert on that misconfiguration, release builds
    /// accept it as a caller contract violation.
    pub fn new(config: RowConfig, visibility: &VisibilityInputs, hooks: RowHooks<E>) -> Self {
        let disclosure = DisclosureState::from_inputs(visibility);
        debug_assert!(
            disclosure.ownership() != Ownership::Delegated || hooks.on_activate.is_some(),
            "delegated visibility without an on_activate hook leaves the disclosure stuck"
        );
        Self {
            config,
            bounds: Rect::ZERO,
            feedback: FeedbackState::new(),
            disclosure,
            hooks,
        }
    }

    /// The row's configuration.
    pub fn config(&self) -> &RowConfig {
        &self.config
    }

    /// The resolved disclosure value.
    pub fn visible(&self) -> bool {
        self.disclosure.visible()
    }

    /// Which visibility mode the row was constructed in.
    pub fn ownership(&self) -> Ownership {
        self.disclosure.ownership()
    }

    /// Whether the row currently shows active feedback.
    pub fn is_active(&self) -> bool {
        self.feedback.is_active()
    }

    /// The container bounds used for outside-click subscriptions.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Update the container bounds after layout.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The pending touch-feedback clear deadline, for host timer scheduling.
    pub fn next_deadline(&self) -> Option<u64> {
        self.feedback.next_deadline()
    }

    fn fire(hook: &mut Option<Box<dyn FnMut(&E)>>, event: &E) {
        if let Some(hook) = hook {
            hook(event);
        }
    }

    /// Pointer entered the row.
    pub fn pointer_enter(&mut self, event: &E) {
        Self::fire(&mut self.hooks.on_pointer_enter, event);
        self.feedback.pointer_enter(self.config.disabled);
    }

    /// Pointer left the row.
    pub fn pointer_leave(&mut self, event: &E) {
        Self::fire(&mut self.hooks.on_pointer_leave, event);
        self.feedback.pointer_leave(self.config.disabled);
    }

    /// Touch began at `now`.
    pub fn touch_start(&mut self, event: &E, now: u64) {
        Self::fire(&mut self.hooks.on_touch_start, event);
        self.feedback.touch_start(now);
    }

    /// Touch ended at `now`; returns the scheduled clear deadline.
    pub fn touch_end(&mut self, event: &E, now: u64) -> u64 {
        Self::fire(&mut self.hooks.on_touch_end, event);
        self.feedback.touch_end(now)
    }

    /// Key released over the row. A Tab acquires the outside-click
    /// subscription using the current bounds.
    pub fn key_up(&mut self, event: &E, key: Key, registry: &mut OutsideClickRegistry) {
        Self::fire(&mut self.hooks.on_key_up, event);
        self.feedback.key_up(key, registry, self.bounds);
    }

    /// Key pressed over the row.
    pub fn key_down(&mut self, event: &E, key: Key, registry: &mut OutsideClickRegistry) {
        Self::fire(&mut self.hooks.on_key_down, event);
        self.feedback.key_down(key, registry);
    }

    /// Primary activation: click or equivalent.
    ///
    /// Invokes `on_activate` with the raw event unconditionally, then
    /// toggles. Owned rows flip; delegated rows mutate nothing and wait for
    /// the owner's [`Self::set_visible`].
    pub fn activate(&mut self, event: &E) -> ToggleEffect {
        Self::fire(&mut self.hooks.on_activate, event);
        self.disclosure.toggle()
    }

    /// Close request from the cascading popup (outside click, escape, …).
    ///
    /// Routed through the same path as [`Self::activate`] so controlled and
    /// uncontrolled semantics are uniform across both render modes.
    pub fn popup_close_request(&mut self, event: &E) -> ToggleEffect {
        self.activate(event)
    }

    /// Owner push of the next delegated value; `false` for owned rows.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.disclosure.set_delegated(visible)
    }

    /// Apply a due touch-feedback clear, if any.
    pub fn poll(&mut self, now: u64) -> bool {
        self.feedback.poll(now)
    }

    /// Route fired outside-click subscription ids from the registry.
    pub fn outside_click(&mut self, fired: &[SubscriptionId]) -> bool {
        self.feedback.outside_click(fired)
    }

    /// Tear the row down: cancel the pending clear and release the
    /// subscription, unconditionally.
    pub fn teardown(&mut self, registry: &mut OutsideClickRegistry) {
        self.feedback.teardown(registry);
    }

    /// Assemble the render plan for this frame.
    pub fn plan(&self, ancestor: Option<&AncestorContext>) -> RowPlan {
        plan_row(&self.config, self.disclosure.visible(), ancestor)
    }
}
