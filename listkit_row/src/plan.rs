// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-mode selection: from row state to a render plan.
//!
//! [`plan_row`] decides, per render, how a row's nested content is
//! disclosed — as an inline collapsible block or as a cascading popup — and
//! which side gets the expander affordance. The result is plain data; the
//! host owns the actual collapsible panel, popup menu, and rotating
//! indicator implementations and renders the plan however it likes.
//!
//! ## Expander placement
//!
//! The expander prefers the right side, or the left when
//! [`RowConfig::expander_left`] is set. If the preferred side already
//! carries a decoration, the other side is used when free; when both sides
//! are occupied the expander is omitted — existing decorations always win.

use bitflags::bitflags;

use crate::context::{Anchor, AncestorContext, FixedTo};
use crate::row::RowConfig;

bitflags! {
    /// Which decoration slots of a row are occupied.
    ///
    /// Decorations themselves (icons, avatars) are rendered by the host;
    /// the planner only needs to know which sides are taken.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Decorations: u8 {
        /// An icon occupies the left slot.
        const LEFT_ICON = 1 << 0;
        /// An avatar occupies the left slot.
        const LEFT_AVATAR = 1 << 1;
        /// An icon occupies the right slot.
        const RIGHT_ICON = 1 << 2;
        /// An avatar occupies the right slot.
        const RIGHT_AVATAR = 1 << 3;
    }
}

impl Decorations {
    /// Whether anything occupies the left slot.
    pub fn left_occupied(self) -> bool {
        self.intersects(Self::LEFT_ICON | Self::LEFT_AVATAR)
    }

    /// Whether anything occupies the right slot.
    pub fn right_occupied(self) -> bool {
        self.intersects(Self::RIGHT_ICON | Self::RIGHT_AVATAR)
    }
}

/// Which side of the row hosts the expander affordance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExpanderSide {
    /// The left decoration slot.
    Left,
    /// The right decoration slot.
    Right,
}

/// Contract for the rotating expand/collapse indicator.
///
/// `flipped` always equals the resolved visibility; the presentation
/// collaborator owns the actual rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RotatingIndicator {
    /// Whether the indicator points at its expanded orientation.
    pub flipped: bool,
}

/// The expander affordance: a side plus its indicator state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Expander {
    /// Which decoration slot the expander occupies.
    pub side: ExpanderSide,
    /// Indicator state to hand to the presentation collaborator.
    pub indicator: RotatingIndicator,
}

/// Contract for the inline collapsible block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CollapsiblePanel {
    /// Whether the block is collapsed; always `!visible`.
    pub collapsed: bool,
    /// Whether show/hide should animate.
    pub animate: bool,
}

/// Popup position relative to its toggle row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PopupPosition {
    /// Anchored below the row.
    #[default]
    Below,
}

/// Contract for the cascading popup menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PopupMenu {
    /// Id assigned by the enclosing cascade.
    pub id: u64,
    /// Whether the popup is open; always equals the resolved visibility.
    pub open: bool,
    /// Anchor, copied from the ancestor context.
    pub anchor: Anchor,
    /// Position relative to the row.
    pub position: PopupPosition,
    /// Fixation, copied from the ancestor context.
    pub fixed_to: FixedTo,
}

/// How the row's nested content is disclosed this render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisclosurePlan {
    /// No nested content; nothing to disclose.
    None,
    /// Inline collapsible block immediately following the row.
    Inline(CollapsiblePanel),
    /// Cascading popup; the row acts as its toggle.
    Cascading(PopupMenu),
}

/// The assembled per-render plan for one row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowPlan {
    /// Expander affordance, if one fits.
    pub expander: Option<Expander>,
    /// How nested content is disclosed.
    pub disclosure: DisclosurePlan,
    /// Expanded-state passthrough for assistive tech; `Some` only in
    /// inline mode.
    pub expanded: Option<bool>,
    /// Ordinal passthrough: this row's position within its set.
    pub position_in_set: Option<u32>,
    /// Ordinal passthrough: the number of rows in the set.
    pub set_size: Option<u32>,
}

/// Pick the expander side, honoring decoration priority.
fn expander_side(expander_left: bool, decorations: Decorations) -> Option<ExpanderSide> {
    let (preferred, other, preferred_occupied, other_occupied) = if expander_left {
        (
            ExpanderSide::Left,
            ExpanderSide::Right,
            decorations.left_occupied(),
            decorations.right_occupied(),
        )
    } else {
        (
            ExpanderSide::Right,
            ExpanderSide::Left,
            decorations.right_occupied(),
            decorations.left_occupied(),
        )
    };
    if !preferred_occupied {
        Some(preferred)
    } else if !other_occupied {
        Some(other)
    } else {
        None
    }
}

/// Decide the render mode for one row.
///
/// With no nested content the plan is empty. Otherwise an active cascading
/// ancestor switches the row into popup mode (`open == visible`, anchored
/// below, anchor and fixation copied through); without one the nested
/// content renders as an inline block (`collapsed == !visible`). The
/// expander is planned in both modes, with `flipped == visible`.
pub fn plan_row(config: &RowConfig, visible: bool, ancestor: Option<&AncestorContext>) -> RowPlan {
    let mut plan = RowPlan {
        expander: None,
        disclosure: DisclosurePlan::None,
        expanded: None,
        position_in_set: config.position_in_set,
        set_size: config.set_size,
    };
    if !config.nested_content {
        return plan;
    }

    plan.expander = expander_side(config.expander_left, config.decorations).map(|side| Expander {
        side,
        indicator: RotatingIndicator { flipped: visible },
    });

    match ancestor {
        Some(ctx) if ctx.cascading_menu => {
            plan.disclosure = DisclosurePlan::Cascading(PopupMenu {
                id: ctx.cascading_id,
                open: visible,
                anchor: ctx.anchor,
                position: PopupPosition::Below,
                fixed_to: ctx.fixed_to,
            });
        }
        _ => {
            plan.disclosure = DisclosurePlan::Inline(CollapsiblePanel {
                collapsed: !visible,
                animate: config.animate,
            });
            plan.expanded = Some(visible);
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_config() -> RowConfig {
        RowConfig {
            nested_content: true,
            ..RowConfig::default()
        }
    }

    #[test]
    fn no_nested_content_produces_empty_plan() {
        let config = RowConfig::default();
        let plan = plan_row(&config, true, None);
        assert_eq!(plan.expander, None);
        assert_eq!(plan.disclosure, DisclosurePlan::None);
        assert_eq!(plan.expanded, None);
    }

    #[test]
    fn inline_block_tracks_visibility() {
        let config = nested_config();

        let open = plan_row(&config, true, None);
        assert_eq!(
            open.disclosure,
            DisclosurePlan::Inline(CollapsiblePanel {
                collapsed: false,
                animate: true,
            })
        );
        assert_eq!(open.expanded, Some(true));

        let closed = plan_row(&config, false, None);
        assert_eq!(
            closed.disclosure,
            DisclosurePlan::Inline(CollapsiblePanel {
                collapsed: true,
                animate: true,
            })
        );
        assert_eq!(closed.expanded, Some(false));
    }

    #[test]
    fn active_cascade_suppresses_inline_block() {
        let config = nested_config();
        let ctx = AncestorContext::active(7);

        let plan = plan_row(&config, true, Some(&ctx));
        match plan.disclosure {
            DisclosurePlan::Cascading(menu) => {
                assert_eq!(menu.id, 7);
                assert!(menu.open);
                assert_eq!(menu.position, PopupPosition::Below);
                assert_eq!(menu.anchor, ctx.anchor);
                assert_eq!(menu.fixed_to, ctx.fixed_to);
            }
            other => panic!("expected a cascading plan, got {other:?}"),
        }
        assert_eq!(plan.expanded, None);
    }

    #[test]
    fn inactive_cascade_context_stays_inline() {
        let config = nested_config();
        let ctx = AncestorContext {
            cascading_menu: false,
            ..AncestorContext::active(7)
        };

        let plan = plan_row(&config, false, Some(&ctx));
        assert!(matches!(plan.disclosure, DisclosurePlan::Inline(_)));
    }

    #[test]
    fn popup_open_tracks_visibility() {
        let config = nested_config();
        let ctx = AncestorContext::active(3);

        let closed = plan_row(&config, false, Some(&ctx));
        assert!(matches!(
            closed.disclosure,
            DisclosurePlan::Cascading(PopupMenu { open: false, .. })
        ));
    }

    #[test]
    fn expander_defaults_to_the_right() {
        let plan = plan_row(&nested_config(), false, None);
        let expander = plan.expander.expect("free row should get an expander");
        assert_eq!(expander.side, ExpanderSide::Right);
        assert!(!expander.indicator.flipped);
    }

    #[test]
    fn indicator_flips_with_visibility() {
        let plan = plan_row(&nested_config(), true, None);
        assert!(plan.expander.expect("expander planned").indicator.flipped);
    }

    #[test]
    fn expander_left_preference_honored_when_free() {
        let config = RowConfig {
            expander_left: true,
            ..nested_config()
        };
        let plan = plan_row(&config, false, None);
        assert_eq!(
            plan.expander.expect("expander planned").side,
            ExpanderSide::Left
        );
    }

    #[test]
    fn occupied_preferred_side_falls_back_to_the_other() {
        // Left preferred but a left avatar sits there: fall back right.
        let config = RowConfig {
            expander_left: true,
            decorations: Decorations::LEFT_AVATAR,
            ..nested_config()
        };
        let plan = plan_row(&config, false, None);
        assert_eq!(
            plan.expander.expect("expander planned").side,
            ExpanderSide::Right
        );

        // Right preferred but a right icon sits there: fall back left.
        let config = RowConfig {
            decorations: Decorations::RIGHT_ICON,
            ..nested_config()
        };
        let plan = plan_row(&config, false, None);
        assert_eq!(
            plan.expander.expect("expander planned").side,
            ExpanderSide::Left
        );
    }

    #[test]
    fn both_sides_occupied_omits_expander() {
        let config = RowConfig {
            decorations: Decorations::LEFT_ICON | Decorations::RIGHT_AVATAR,
            ..nested_config()
        };
        let plan = plan_row(&config, true, None);
        assert_eq!(plan.expander, None);
        // Disclosure itself is unaffected by the missing affordance.
        assert!(matches!(plan.disclosure, DisclosurePlan::Inline(_)));
    }

    #[test]
    fn ordinals_pass_through() {
        let config = RowConfig {
            position_in_set: Some(2),
            set_size: Some(9),
            ..RowConfig::default()
        };
        let plan = plan_row(&config, false, None);
        assert_eq!(plan.position_in_set, Some(2));
        assert_eq!(plan.set_size, Some(9));
    }
}
