// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted walkthrough of one owned and one delegated list row.
//!
//! This example shows how a host drives the row surface:
//! - pointer hover and a quick tap with the debounced feedback clear,
//! - Tab focus with the outside-click registry,
//! - an owned toggle collapsing the inline block,
//! - a delegated row whose owner answers toggle requests,
//! - a cascading context switching the same row into popup mode.
//!
//! Run:
//! - `cargo run -p listkit_demos --example row_walkthrough`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use listkit_disclosure::{ToggleEffect, VisibilityInputs};
use listkit_feedback::{Key, OutsideClickRegistry};
use listkit_row::{AncestorContext, DisclosurePlan, ListRow, RowConfig, RowHooks};

/// Raw event payload the host would normally get from its input layer.
#[derive(Clone, Copy, Debug)]
struct InputEvent {
    timestamp: u64,
}

fn describe(label: &str, row: &ListRow<InputEvent>, ancestor: Option<&AncestorContext>) {
    let plan = row.plan(ancestor);
    let disclosure = match plan.disclosure {
        DisclosurePlan::None => "no nested content".to_string(),
        DisclosurePlan::Inline(panel) => format!("inline, collapsed={}", panel.collapsed),
        DisclosurePlan::Cascading(menu) => format!("popup #{}, open={}", menu.id, menu.open),
    };
    println!(
        "{label}: active={} visible={} disclosure=[{disclosure}]",
        row.is_active(),
        row.visible(),
    );
}

fn main() {
    let mut registry = OutsideClickRegistry::new();

    // An owned row with nested content, initially visible.
    let mut owned: ListRow<InputEvent> = ListRow::new(
        RowConfig {
            nested_content: true,
            ..RowConfig::default()
        },
        &VisibilityInputs {
            default_visible: Some(true),
            ..VisibilityInputs::default()
        },
        RowHooks::default(),
    );
    owned.set_bounds(Rect::new(0.0, 0.0, 240.0, 48.0));

    println!("== Owned row ==");
    describe("initial", &owned, None);

    // Hover in and out.
    owned.pointer_enter(&InputEvent { timestamp: 100 });
    describe("after pointer enter", &owned, None);
    owned.pointer_leave(&InputEvent { timestamp: 200 });
    describe("after pointer leave", &owned, None);

    // A quick tap: feedback must survive until 450 ms after touch-start.
    owned.touch_start(&InputEvent { timestamp: 1000 }, 1000);
    let deadline = owned.touch_end(&InputEvent { timestamp: 1080 }, 1080);
    println!("tap lifted at 1080, clear scheduled for {deadline}");
    owned.poll(1200);
    describe("at t=1200 (still debouncing)", &owned, None);
    owned.poll(deadline);
    describe("at the deadline", &owned, None);

    // Toggle the disclosure closed.
    let effect = owned.activate(&InputEvent { timestamp: 1500 });
    println!("click toggled: {effect:?}");
    describe("after toggle", &owned, None);

    // Tab focus, then a click elsewhere clears it.
    owned.key_up(&InputEvent { timestamp: 2000 }, Key::Tab, &mut registry);
    describe("after Tab key-up", &owned, None);
    let fired = registry.global_click(Point::new(500.0, 500.0));
    owned.outside_click(&fired);
    describe("after outside click", &owned, None);

    // A delegated row: the owner holds the value and answers requests.
    println!("\n== Delegated row ==");
    let requested = Rc::new(Cell::new(false));
    let request_flag = Rc::clone(&requested);
    let mut delegated: ListRow<InputEvent> = ListRow::new(
        RowConfig {
            nested_content: true,
            ..RowConfig::default()
        },
        &VisibilityInputs {
            delegated: Some(false),
            ..VisibilityInputs::default()
        },
        RowHooks {
            on_activate: Some(Box::new(move |event: &InputEvent| {
                println!("owner saw activation at t={}", event.timestamp);
                request_flag.set(true);
            })),
            ..RowHooks::default()
        },
    );

    describe("initial", &delegated, None);
    let effect = delegated.activate(&InputEvent { timestamp: 3000 });
    assert_eq!(effect, ToggleEffect::Requested);
    describe("after click (owner not yet answered)", &delegated, None);
    if requested.replace(false) {
        delegated.set_visible(true);
    }
    describe("after the owner pushes the next value", &delegated, None);

    // The same row inside an active cascading menu renders as a popup, and
    // the popup's close request goes through the regular toggle path.
    println!("\n== Cascading mode ==");
    let ctx = AncestorContext::active(42);
    describe("inside the cascade", &delegated, Some(&ctx));
    delegated.popup_close_request(&InputEvent { timestamp: 4000 });
    if requested.replace(false) {
        delegated.set_visible(false);
    }
    describe("after the popup close request", &delegated, Some(&ctx));

    // Always tear rows down so the registry ends empty.
    owned.teardown(&mut registry);
    delegated.teardown(&mut registry);
    println!("\nregistry empty at exit: {}", registry.is_empty());
}
