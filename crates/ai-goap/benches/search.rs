use ai_core::WorldState;
use ai_goap::{GoapCandidate, GoapSearcher, Goal};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct SetSlot(usize);

impl GoapCandidate for SetSlot {
    fn is_valid(&self, world: &WorldState) -> bool {
        // Slots must be filled in index order.
        (self.0 == 0 || world.has(self.0 - 1)) && !world.has(self.0)
    }

    fn apply_effects(&self, world: &mut WorldState) {
        world.set_plan_only(self.0, 1);
    }
}

fn bench_goap_search(c: &mut Criterion) {
    let slots = 6;
    let candidates: Vec<SetSlot> = (0..slots).rev().map(SetSlot).collect();
    let goal = Goal::new().with(slots - 1, 1);
    let mut world = WorldState::new(slots);
    let mut searcher = GoapSearcher::new();

    c.bench_function("ai-goap/search(chain=6)", |b| {
        b.iter(|| {
            let path = searcher
                .search(&mut world, &candidates, &goal, None)
                .expect("plan");
            black_box(path.plan.len());
        })
    });
}

criterion_group!(benches, bench_goap_search);
criterion_main!(benches);
