use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    neighbors8, AiTargeting, Coord, ManualTargeting, Move, MoveSource, ShotOutcome,
    TargetingStrategy,
};

fn ai(size: u8, seed: u64) -> AiTargeting {
    AiTargeting::new(size, SmallRng::seed_from_u64(seed))
}

fn fire(strategy: &mut AiTargeting) -> Coord {
    match strategy.select_target() {
        Move::Fire(c) => c,
        Move::Forfeit => panic!("automated strategy never forfeits"),
    }
}

#[test]
fn test_single_hit_candidates_are_orthogonal() {
    let mut strategy = ai(10, 0);
    strategy.record_outcome(Coord::new(2, 3), ShotOutcome::Hit);
    assert_eq!(
        strategy.chase_candidates(),
        vec![
            Coord::new(1, 3),
            Coord::new(2, 2),
            Coord::new(2, 4),
            Coord::new(3, 3)
        ]
    );
}

#[test]
fn test_corner_hit_clips_candidates() {
    let mut strategy = ai(6, 0);
    strategy.record_outcome(Coord::new(0, 0), ShotOutcome::Hit);
    assert_eq!(
        strategy.chase_candidates(),
        vec![Coord::new(0, 1), Coord::new(1, 0)]
    );
}

#[test]
fn test_vertical_inference_restricts_to_column() {
    let mut strategy = ai(10, 0);
    strategy.record_outcome(Coord::new(2, 3), ShotOutcome::Hit);
    strategy.record_outcome(Coord::new(3, 3), ShotOutcome::Hit);
    assert_eq!(
        strategy.chase_candidates(),
        vec![Coord::new(1, 3), Coord::new(4, 3)]
    );
}

#[test]
fn test_horizontal_inference_restricts_to_row() {
    let mut strategy = ai(10, 0);
    strategy.record_outcome(Coord::new(5, 5), ShotOutcome::Hit);
    strategy.record_outcome(Coord::new(5, 4), ShotOutcome::Hit);
    assert_eq!(
        strategy.chase_candidates(),
        vec![Coord::new(5, 3), Coord::new(5, 6)]
    );
}

#[test]
fn test_miss_stays_in_chase() {
    let mut strategy = ai(10, 0);
    strategy.record_outcome(Coord::new(2, 3), ShotOutcome::Hit);
    strategy.record_outcome(Coord::new(2, 4), ShotOutcome::Miss);
    assert_eq!(strategy.active_hits(), &[Coord::new(2, 3)]);
    let candidates = strategy.chase_candidates();
    assert!(!candidates.contains(&Coord::new(2, 4)));
    assert!(candidates.contains(&Coord::new(2, 2)));
}

#[test]
fn test_sink_returns_to_hunt() {
    let mut strategy = ai(10, 0);
    strategy.record_outcome(Coord::new(2, 3), ShotOutcome::Hit);
    strategy.record_outcome(Coord::new(3, 3), ShotOutcome::Sink);
    assert!(strategy.active_hits().is_empty());
    assert!(strategy.chase_candidates().is_empty());
    assert_eq!(
        strategy.history(),
        &[Coord::new(2, 3), Coord::new(3, 3)]
    );
}

#[test]
fn test_chase_skips_cells_next_to_other_wrecks() {
    let mut strategy = ai(10, 0);
    // an already-sunk wreck at (1, 1)
    strategy.record_outcome(Coord::new(1, 1), ShotOutcome::Sink);
    // fresh hit at (3, 1): its upward extension (2, 1) borders the wreck
    strategy.record_outcome(Coord::new(3, 1), ShotOutcome::Hit);

    let candidates = strategy.chase_candidates();
    assert!(!candidates.contains(&Coord::new(2, 1)));
    assert!(candidates.contains(&Coord::new(4, 1)));
    assert!(candidates.contains(&Coord::new(3, 0)));
    assert!(candidates.contains(&Coord::new(3, 2)));
}

#[test]
fn test_hunt_avoids_wreck_neighborhoods() {
    let mut strategy = ai(6, 42);
    strategy.record_outcome(Coord::new(2, 2), ShotOutcome::Hit);
    strategy.record_outcome(Coord::new(2, 3), ShotOutcome::Sink);
    let wreck = [Coord::new(2, 2), Coord::new(2, 3)];

    // selection has no side effects on the bookkeeping, so we can sample
    // the hunt repeatedly
    for _ in 0..200 {
        let c = fire(&mut strategy);
        assert!(c.in_bounds(6));
        assert!(!wreck.contains(&c), "hunt re-fired at a wreck cell {}", c);
        for n in neighbors8(c, 6) {
            assert!(!wreck.contains(&n), "hunt fired next to a wreck at {}", c);
        }
    }
}

#[test]
fn test_manual_delegates_and_forfeits() {
    struct Script(Vec<Coord>);
    impl MoveSource for Script {
        fn next_move(&mut self) -> Option<Coord> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    let mut manual = ManualTargeting::new(Script(vec![Coord::new(9, 9)]));
    assert_eq!(manual.select_target(), Move::Fire(Coord::new(9, 9)));
    assert_eq!(manual.select_target(), Move::Forfeit);
}
