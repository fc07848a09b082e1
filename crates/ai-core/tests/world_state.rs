use ai_core::{EffectKind, WorldState, WorldStateError};

const HAS_A: usize = 0;
const HAS_B: usize = 1;
const COUNT: usize = 2;

#[test]
fn plan_only_writes_roll_back_to_recorded_depth() {
    let mut ws = WorldState::from_values(vec![0, 7, 3]);
    let depth = ws.change_depth();

    ws.set_plan_only(HAS_A, 1);
    ws.set_plan_only(HAS_B, 9);
    ws.set_plan_only(HAS_A, 2);
    ws.set_plan_only(COUNT, 4);
    assert_eq!(ws.values(), &[2, 9, 4]);
    assert_eq!(ws.change_depth(), depth + 4);

    ws.trim_to_depth(depth);
    assert_eq!(ws.values(), &[0, 7, 3]);
    assert_eq!(ws.change_depth(), depth);
}

#[test]
fn nested_trims_restore_intermediate_states() {
    let mut ws = WorldState::new(3);
    ws.set_plan_only(HAS_A, 1);
    let outer = ws.change_depth();

    ws.set_plan_only(HAS_B, 1);
    ws.set_plan_only(HAS_A, 5);
    ws.trim_to_depth(outer);
    assert_eq!(ws.values(), &[1, 0, 0], "inner branch undone, outer kept");

    ws.trim_to_depth(0);
    assert_eq!(ws.values(), &[0, 0, 0]);
}

#[test]
fn permanent_writes_survive_trimming() {
    let mut ws = WorldState::new(3);
    ws.set_plan_only(HAS_A, 1);
    ws.set_permanent(COUNT, 42);
    ws.set(HAS_B, 1, EffectKind::Permanent);
    assert_eq!(ws.change_depth(), 1);

    ws.reset_changes();
    assert_eq!(ws.get(HAS_A), 0);
    assert_eq!(ws.get(HAS_B), 1);
    assert_eq!(ws.get(COUNT), 42);
}

#[test]
fn trimming_past_recorded_depth_is_an_error() {
    let mut ws = WorldState::new(2);
    ws.set_plan_only(HAS_A, 1);

    assert_eq!(
        ws.try_trim_to_depth(3),
        Err(WorldStateError::DepthOutOfRange {
            requested: 3,
            depth: 1
        })
    );
    assert_eq!(ws.get(HAS_A), 1, "failed trim must not touch values");
}

#[test]
#[should_panic(expected = "world state change log corrupted")]
fn trim_to_depth_panics_on_mismatched_accounting() {
    let mut ws = WorldState::new(1);
    ws.trim_to_depth(1);
}

#[test]
fn checked_access_reports_out_of_range() {
    let mut ws = WorldState::new(2);
    assert_eq!(ws.try_get(5), None);
    assert_eq!(
        ws.try_set(5, 1, EffectKind::PlanOnly),
        Err(WorldStateError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(ws.change_depth(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn serde_keeps_values_and_drops_change_log() {
    let mut ws = WorldState::from_values(vec![1, 2, 3]);
    ws.set_plan_only(HAS_A, 9);

    let json = serde_json::to_string(&ws).unwrap();
    let back: WorldState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.values(), &[9, 2, 3]);
    assert_eq!(back.change_depth(), 0);
}
