use ai_core::WorldState;
use ai_goap::{search, GoapCandidate, GoapOutcome, GoapSearcher, Goal};

const HAS_A: usize = 0;
const HAS_B: usize = 1;
const HAS_C: usize = 2;

#[derive(Debug, Clone)]
struct Step {
    name: &'static str,
    requires: &'static [usize],
    sets: usize,
    cost: f32,
}

impl GoapCandidate for Step {
    fn is_valid(&self, world: &WorldState) -> bool {
        self.requires.iter().all(|&i| world.has(i)) && !world.has(self.sets)
    }

    fn apply_effects(&self, world: &mut WorldState) {
        world.set_plan_only(self.sets, 1);
    }

    fn cost(&self, _world: &WorldState) -> f32 {
        self.cost
    }
}

fn step(name: &'static str, requires: &'static [usize], sets: usize) -> Step {
    Step {
        name,
        requires,
        sets,
        cost: 1.0,
    }
}

fn names(steps: &[Step], plan: &[usize]) -> Vec<&'static str> {
    plan.iter().map(|&i| steps[i].name).collect()
}

#[test]
fn chained_preconditions_order_the_plan_regardless_of_declaration() {
    let goal = Goal::new().with(HAS_C, 1);
    let declared = [
        step("get_c", &[HAS_B], HAS_C),
        step("get_a", &[], HAS_A),
        step("get_b", &[HAS_A], HAS_B),
    ];

    let mut rotations = Vec::new();
    for shift in 0..declared.len() {
        let mut steps = declared.to_vec();
        steps.rotate_left(shift);
        rotations.push(steps);
    }

    for steps in rotations {
        let mut world = WorldState::new(3);
        let path = search(&mut world, &steps, &goal).expect("plan");
        assert_eq!(names(&steps, &path.plan.steps), vec!["get_a", "get_b", "get_c"]);
        assert_eq!(path.cost, 3.0);
        assert_eq!(world.values(), &[0, 0, 0], "search leaves no trace");
        assert_eq!(world.change_depth(), 0);
    }
}

#[test]
fn cheaper_route_wins() {
    let goal = Goal::new().with(HAS_C, 1);
    let steps = vec![
        Step {
            name: "get_c",
            requires: &[],
            sets: HAS_C,
            cost: 1.0,
        },
        Step {
            name: "get_b",
            requires: &[],
            sets: HAS_B,
            cost: 10.0,
        },
        step("get_a", &[], HAS_A),
    ];
    // get_c needs A or B; express it with a dedicated candidate type below.
    #[derive(Clone)]
    struct Either(Step);
    impl GoapCandidate for Either {
        fn is_valid(&self, world: &WorldState) -> bool {
            if self.0.sets == HAS_C {
                (world.has(HAS_A) || world.has(HAS_B)) && !world.has(HAS_C)
            } else {
                self.0.is_valid(world)
            }
        }
        fn apply_effects(&self, world: &mut WorldState) {
            self.0.apply_effects(world);
        }
        fn cost(&self, world: &WorldState) -> f32 {
            self.0.cost(world)
        }
    }
    let candidates: Vec<Either> = steps.iter().cloned().map(Either).collect();

    let mut world = WorldState::new(3);
    let path = search(&mut world, &candidates, &goal).expect("plan");
    let chosen: Vec<_> = path.plan.iter().map(|&i| steps[i].name).collect();
    assert_eq!(chosen, vec!["get_a", "get_c"]);
    assert_eq!(path.cost, 2.0);
}

#[test]
fn equal_cost_leaves_keep_the_first_found() {
    let goal = Goal::new().with(HAS_C, 1);
    let steps = vec![step("first_c", &[], HAS_C), step("second_c", &[], HAS_C)];

    let mut world = WorldState::new(3);
    let path = search(&mut world, &steps, &goal).expect("plan");
    assert_eq!(names(&steps, &path.plan.steps), vec!["first_c"]);
}

#[test]
fn unreachable_goal_fails_and_restores_world() {
    let goal = Goal::new().with(HAS_C, 1);
    let steps = vec![step("get_a", &[], HAS_A), step("get_b", &[HAS_A], HAS_B)];

    let mut world = WorldState::new(3);
    world.set_plan_only(HAS_B, 0);
    let depth = world.change_depth();

    let mut searcher = GoapSearcher::new();
    assert!(searcher.search(&mut world, &steps, &goal, None).is_none());
    assert_eq!(world.change_depth(), depth);
    assert_eq!(world.values(), &[0, 0, 0]);
    // root, a, a->b, b is invalid without a
    assert_eq!(searcher.last_stats().nodes, 3);
    assert_eq!(searcher.last_stats().leaves, 0);
}

#[test]
fn candidates_are_not_reused_on_one_path() {
    #[derive(Clone)]
    struct Counter;
    impl GoapCandidate for Counter {
        fn is_valid(&self, _world: &WorldState) -> bool {
            true
        }
        fn apply_effects(&self, world: &mut WorldState) {
            let n = world.get(0);
            world.set_plan_only(0, n + 1);
        }
    }

    let goal = Goal::new().with(0, 2);
    let mut world = WorldState::new(1);
    assert!(search(&mut world, &[Counter], &goal).is_none());

    let path = search(&mut world, &[Counter, Counter], &goal).expect("two distinct steps");
    assert_eq!(path.plan.steps, vec![0, 1]);
}

#[test]
fn satisfied_goal_yields_empty_path() {
    let goal = Goal::new().with(HAS_A, 1);
    let mut world = WorldState::from_values(vec![1, 0, 0]);
    let path = search(&mut world, &[step("get_a", &[], HAS_A)], &goal).expect("plan");
    assert!(path.plan.is_empty());
    assert_eq!(path.cost, 0.0);
}

#[test]
fn goal_on_missing_index_never_holds() {
    let goal = Goal::new().with(99, 0);
    let world = WorldState::new(3);
    assert!(!goal.is_satisfied(&world));
}

#[test]
fn abort_stops_the_search_and_restores_world() {
    let goal = Goal::new().with(HAS_C, 1);
    let steps = vec![
        step("get_a", &[], HAS_A),
        step("get_b", &[HAS_A], HAS_B),
        step("get_c", &[HAS_B], HAS_C),
    ];

    let mut world = WorldState::new(3);
    let mut searcher = GoapSearcher::new();
    let reached_b = |w: &WorldState| w.has(HAS_B);
    let outcome = searcher.search_until(&mut world, &steps, &goal, &reached_b, None);

    assert_eq!(outcome, GoapOutcome::Aborted);
    assert_eq!(world.values(), &[0, 0, 0]);
    assert_eq!(world.change_depth(), 0);
    // root, a, a->b; c is never tried
    assert_eq!(searcher.last_stats().nodes, 3);
}

#[test]
fn abort_that_never_fires_keeps_the_full_search() {
    let goal = Goal::new().with(HAS_B, 1);
    let steps = vec![step("get_b", &[HAS_A], HAS_B), step("get_a", &[], HAS_A)];

    let mut world = WorldState::new(3);
    let outcome =
        GoapSearcher::new().search_until(&mut world, &steps, &goal, &|_: &WorldState| false, None);

    let path = outcome.into_path().expect("plan");
    assert_eq!(path.plan.steps, vec![1, 0]);

    let goal = Goal::new().with(HAS_C, 1);
    let outcome =
        GoapSearcher::new().search_until(&mut world, &steps, &goal, &|_: &WorldState| false, None);
    assert_eq!(outcome, GoapOutcome::Unreachable);
}
