// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listkit Row: the list-row widget core.
//!
//! This crate assembles the two state slices from `listkit_feedback`
//! (pointer/touch/keyboard active feedback) and `listkit_disclosure`
//! (owned vs. delegated visibility) behind a single event surface,
//! [`ListRow`], and decides per render how nested content is disclosed:
//!
//! - **Inline**: with no active cascading ancestor, nested content renders
//!   as a collapsible block immediately following the row, collapsed iff
//!   the row is not visible.
//! - **Cascading**: inside an active cascading menu, the inline block is
//!   suppressed and the row becomes a popup trigger anchored below itself,
//!   open iff the row is visible. Popup close requests route through the
//!   same toggle path as a direct click.
//!
//! The output of [`ListRow::plan`] (or the standalone [`plan_row`]) is
//! plain data — contracts for a collapsible panel, a popup menu, and a
//! rotating indicator — that the host renders with its own collaborators.
//! Styling, animation timing, and decoration rendering stay with the host.
//!
//! ## Example
//!
//! An owned row with nested content, initially visible, toggled once:
//!
//! ```
//! use listkit_disclosure::{ToggleEffect, VisibilityInputs};
//! use listkit_row::{DisclosurePlan, ListRow, RowConfig, RowHooks};
//!
//! let mut row: ListRow<()> = ListRow::new(
//!     RowConfig {
//!         nested_content: true,
//!         ..RowConfig::default()
//!     },
//!     &VisibilityInputs {
//!         default_visible: Some(true),
//!         ..VisibilityInputs::default()
//!     },
//!     RowHooks::default(),
//! );
//!
//! assert!(row.visible());
//! let DisclosurePlan::Inline(panel) = row.plan(None).disclosure else {
//!     panic!("top-level rows disclose inline");
//! };
//! assert!(!panel.collapsed);
//!
//! assert_eq!(row.activate(&()), ToggleEffect::Toggled(false));
//! let DisclosurePlan::Inline(panel) = row.plan(None).disclosure else {
//!     panic!("top-level rows disclose inline");
//! };
//! assert!(panel.collapsed);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod plan;
mod row;

pub use context::{Anchor, AnchorX, AnchorY, AncestorContext, FixedTo};
pub use plan::{
    CollapsiblePanel, Decorations, DisclosurePlan, Expander, ExpanderSide, PopupMenu,
    PopupPosition, RotatingIndicator, RowPlan, plan_row,
};
pub use row::{ListRow, RowConfig, RowHooks};
