// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listkit Disclosure: show/hide ownership for a row's nested content.
//!
//! A row either **owns** its disclosure state and flips it on every toggle,
//! or **delegates** it to an external owner and only requests changes. The
//! mode is fixed at construction by which inputs are present; it never
//! changes afterwards.
//!
//! ## Initial-value precedence
//!
//! [`VisibilityInputs`] carries the current input (`default_visible`), two
//! legacy aliases kept for migration (`is_open`, `default_open`), and the
//! externally delegated value. The initial value is resolved exactly once,
//! highest-present wins:
//!
//! 1. `delegated` — also fixes [`Ownership::Delegated`]
//! 2. `is_open`
//! 3. `default_open`
//! 4. `default_visible`
//! 5. `false`
//!
//! Later changes to lower-precedence inputs are never re-observed.
//!
//! ## Example
//!
//! ```
//! use listkit_disclosure::{DisclosureState, ToggleEffect, VisibilityInputs};
//!
//! // An owned row, initially visible.
//! let mut owned = DisclosureState::from_inputs(&VisibilityInputs {
//!     default_visible: Some(true),
//!     ..VisibilityInputs::default()
//! });
//! assert!(owned.visible());
//! assert_eq!(owned.toggle(), ToggleEffect::Toggled(false));
//! assert_eq!(owned.toggle(), ToggleEffect::Toggled(true));
//!
//! // A delegated row never mutates itself on toggle.
//! let mut delegated = DisclosureState::delegated(false);
//! assert_eq!(delegated.toggle(), ToggleEffect::Requested);
//! assert!(!delegated.visible());
//! // The owner supplies the next value.
//! assert!(delegated.set_delegated(true));
//! assert!(delegated.visible());
//! ```
//!
//! This crate is `no_std` and dependency-free.

#![no_std]

/// Visibility inputs supplied at construction.
///
/// All fields are optional; see the [crate docs](crate) for the precedence
/// among them. The legacy aliases are a one-time migration shim — they
/// participate only in initial resolution and are never consulted again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityInputs {
    /// Externally delegated current value. Present fixes
    /// [`Ownership::Delegated`]; the widget then never mutates visibility
    /// itself.
    pub delegated: Option<bool>,
    /// Legacy "is-open" alias.
    pub is_open: Option<bool>,
    /// Legacy "default-open" alias.
    pub default_open: Option<bool>,
    /// The current input: initial visibility for an owned row.
    pub default_visible: Option<bool>,
}

/// Who owns the disclosure state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The row owns the state and flips it on toggle.
    Owned,
    /// An external owner holds the state; toggles only request a change.
    Delegated,
}

/// What a toggle did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleEffect {
    /// The row owned the state and flipped it; carries the new value.
    Toggled(bool),
    /// The row delegates; the external owner must supply the next value.
    /// Nothing was mutated.
    Requested,
}

/// Disclosure state for one row: the resolved value plus its ownership.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    ownership: Ownership,
    visible: bool,
}

impl DisclosureState {
    /// Resolve inputs into an initial state. See the [crate docs](crate)
    /// for the precedence.
    pub fn from_inputs(inputs: &VisibilityInputs) -> Self {
        if let Some(current) = inputs.delegated {
            return Self::delegated(current);
        }
        let initial = inputs
            .is_open
            .or(inputs.default_open)
            .or(inputs.default_visible)
            .unwrap_or(false);
        Self::owned(initial)
    }

    /// An owned state with the given initial value.
    pub fn owned(initial: bool) -> Self {
        Self {
            ownership: Ownership::Owned,
            visible: initial,
        }
    }

    /// A delegated state mirroring the owner's current value.
    pub fn delegated(current: bool) -> Self {
        Self {
            ownership: Ownership::Delegated,
            visible: current,
        }
    }

    /// Which mode this state was constructed in.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// The resolved current value, in both modes.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Toggle on primary activation.
    ///
    /// Owned: flips the value and reports the new one. Delegated: mutates
    /// nothing and reports [`ToggleEffect::Requested`]; if the owner never
    /// pushes a new value via [`Self::set_delegated`], the displayed state
    /// simply stays put.
    pub fn toggle(&mut self) -> ToggleEffect {
        match self.ownership {
            Ownership::Owned => {
                self.visible = !self.visible;
                ToggleEffect::Toggled(self.visible)
            }
            Ownership::Delegated => ToggleEffect::Requested,
        }
    }

    /// Owner push of the next delegated value.
    ///
    /// Returns `false` without mutating for owned states, which manage
    /// their own value through [`Self::toggle`].
    pub fn set_delegated(&mut self, visible: bool) -> bool {
        match self.ownership {
            Ownership::Delegated => {
                self.visible = visible;
                true
            }
            Ownership::Owned => false,
        }
    }
}
