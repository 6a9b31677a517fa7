// Host-side tests for the mount/unmount bookkeeping.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mount_slot {
    include!("../src/mount_slot.rs");
}

use mount_slot::*;

#[test]
fn mount_then_unmount() {
    let mut slot = MountSlot::new();
    let ticket = slot.begin().expect("idle slot accepts a mount");
    assert!(slot.is_pending());
    assert_eq!(slot.finish(ticket, "host"), None);
    assert!(slot.is_live());
    assert_eq!(slot.take(), Teardown::Live("host"));
    assert_eq!(slot.take(), Teardown::Idle);
}

#[test]
fn second_mount_is_refused() {
    let mut slot = MountSlot::new();
    let ticket = slot.begin().expect("first mount");
    assert_eq!(slot.begin(), None, "refused while mounting");
    slot.finish(ticket, 1);
    assert_eq!(slot.begin(), None, "refused while mounted");
}

#[test]
fn unmount_during_mount_discards_the_result() {
    let mut slot = MountSlot::new();
    let ticket = slot.begin().expect("mount");
    // Teardown arrives while the GPU is still being requested
    assert_eq!(slot.take(), Teardown::Cancelled);
    assert!(!slot.is_pending());

    // The finished host comes back to the caller instead of landing
    assert_eq!(slot.finish(ticket, "late host"), Some("late host"));
    assert!(!slot.is_live());
    assert_eq!(slot.take(), Teardown::Idle);
}

#[test]
fn stale_mount_does_not_replace_a_newer_one() {
    let mut slot = MountSlot::new();
    let first = slot.begin().expect("first mount");
    assert_eq!(slot.take(), Teardown::Cancelled);
    let second = slot.begin().expect("remount after cancel");
    assert_ne!(first, second);

    assert_eq!(slot.finish(first, "old"), Some("old"));
    assert!(slot.is_pending());
    assert_eq!(slot.finish(second, "new"), None);
    assert_eq!(slot.take(), Teardown::Live("new"));
}

#[test]
fn failed_mount_frees_the_slot() {
    let mut slot: MountSlot<u8> = MountSlot::default();
    let ticket = slot.begin().expect("mount");
    slot.abort(ticket);
    assert!(!slot.is_pending());
    assert!(slot.begin().is_some());
}

#[test]
fn stale_abort_leaves_a_newer_mount_pending() {
    let mut slot: MountSlot<u8> = MountSlot::new();
    let first = slot.begin().expect("first mount");
    slot.take();
    let _second = slot.begin().expect("second mount");
    slot.abort(first);
    assert!(slot.is_pending());
}
