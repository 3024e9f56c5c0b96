//! Targeting: who picks the next shot and how.
//!
//! Two variants sit behind the [`TargetingStrategy`] trait: manual
//! targeting forwards moves produced by an external input collaborator,
//! while [`AiTargeting`] implements the automated hunt/chase search over
//! the revealed view of the enemy board.

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::common::ShotOutcome;
use crate::coord::{self, Coord};
use crate::mask::BoardMask;

/// A move produced by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Fire at the coordinate.
    Fire(Coord),
    /// Give up the match.
    Forfeit,
}

/// Chooses target coordinates for one side and digests shot feedback.
///
/// Dispatched by the match orchestrator without any type inspection.
pub trait TargetingStrategy {
    /// Produce the next move. Selection must not mutate targeting
    /// bookkeeping; only [`TargetingStrategy::record_outcome`] does, once
    /// the shot has actually been resolved.
    fn select_target(&mut self) -> Move;

    /// Feed back the outcome of a resolved shot at `coord`.
    fn record_outcome(&mut self, coord: Coord, outcome: ShotOutcome);
}

/// Supplies decoded moves from outside the core (stdin, a script, a UI).
///
/// Returning `None` is a voluntary forfeit. Malformed raw input should be
/// surfaced as an off-board coordinate so the match rejects it and
/// re-prompts without advancing the turn.
pub trait MoveSource {
    fn next_move(&mut self) -> Option<Coord>;
}

/// Manual variant: every decision is delegated to the move source.
pub struct ManualTargeting<S: MoveSource> {
    source: S,
}

impl<S: MoveSource> ManualTargeting<S> {
    pub fn new(source: S) -> Self {
        ManualTargeting { source }
    }
}

impl<S: MoveSource> TargetingStrategy for ManualTargeting<S> {
    fn select_target(&mut self) -> Move {
        match self.source.next_move() {
            Some(c) => Move::Fire(c),
            None => Move::Forfeit,
        }
    }

    fn record_outcome(&mut self, _coord: Coord, _outcome: ShotOutcome) {}
}

/// Automated variant: random hunting until a vessel is wounded, then a
/// directional chase along its inferred orientation.
///
/// The strategy sees only what its own shots revealed (hit and miss marks);
/// it never consults true occupancy it has not fired on.
pub struct AiTargeting {
    size: u8,
    rng: SmallRng,
    move_history: Vec<Coord>,
    active_hits: Vec<Coord>,
    hits: BoardMask,
    misses: BoardMask,
}

impl AiTargeting {
    /// Strategy for a `size`×`size` enemy board. The RNG is supplied here
    /// so games replay exactly from a fixed seed.
    pub fn new(size: u8, rng: SmallRng) -> Self {
        AiTargeting {
            size,
            rng,
            move_history: Vec::new(),
            active_hits: Vec::new(),
            hits: BoardMask::new(size),
            misses: BoardMask::new(size),
        }
    }

    /// Every shot made so far, in firing order.
    pub fn history(&self) -> &[Coord] {
        &self.move_history
    }

    /// Confirmed hits on the vessel currently being chased.
    pub fn active_hits(&self) -> &[Coord] {
        &self.active_hits
    }

    /// Revealed view of the enemy board as (hits, misses).
    pub fn revealed(&self) -> (&BoardMask, &BoardMask) {
        (&self.hits, &self.misses)
    }

    fn shot(&self, c: Coord) -> bool {
        self.hits.contains(c) || self.misses.contains(c)
    }

    /// A cell the hunt may fire at: unshot, and not next to any revealed
    /// hit. Cells bordering a hit cannot hold a different vessel, so shots
    /// there would be wasted.
    fn hunt_legal(&self, c: Coord) -> bool {
        !self.shot(c)
            && coord::neighbors8(c, self.size)
                .iter()
                .all(|n| !self.hits.contains(*n))
    }

    fn all_cells(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| Coord::new(r, c)))
    }

    fn hunt(&mut self) -> Coord {
        let candidates: Vec<Coord> = self.all_cells().filter(|&c| self.hunt_legal(c)).collect();
        if let Some(&c) = candidates.choose(&mut self.rng) {
            return c;
        }
        // Only reachable when every open cell borders a wreck, which means
        // no vessel is left to find; fall back to any unshot cell so a
        // caller stepping a finished board still gets a legal coordinate.
        let leftovers: Vec<Coord> = self.all_cells().filter(|&c| !self.shot(c)).collect();
        *leftovers
            .choose(&mut self.rng)
            .expect("hunt invoked on a fully shot board")
    }

    /// Candidate cells for the chase mode, in `(row, col)` order.
    ///
    /// With a single active hit the orientation is unknown and all four
    /// orthogonal neighbors qualify. From two hits on, the orientation is
    /// inferred from the row delta of the first two recorded hits — later
    /// hits never revise it — and only the matching orthogonal neighbors of
    /// every active hit qualify. Cells already fired upon are dropped, as
    /// are cells touching a revealed hit that is not part of the chase.
    pub fn chase_candidates(&self) -> Vec<Coord> {
        let mut candidates: Vec<Coord> = Vec::new();
        if self.active_hits.len() == 1 {
            let only = self.active_hits[0];
            candidates.extend(coord::neighbors_vertical(only, self.size));
            candidates.extend(coord::neighbors_horizontal(only, self.size));
        } else if self.active_hits.len() >= 2 {
            let vertical = self.active_hits[0].row != self.active_hits[1].row;
            for &h in &self.active_hits {
                if vertical {
                    candidates.extend(coord::neighbors_vertical(h, self.size));
                } else {
                    candidates.extend(coord::neighbors_horizontal(h, self.size));
                }
            }
        }
        candidates.sort_unstable();
        candidates.dedup();
        candidates.retain(|&c| !self.move_history.contains(&c) && self.clear_of_other_wrecks(c));
        candidates
    }

    /// Reject cells adjacent to a revealed hit that does not belong to the
    /// vessel currently being chased: those border an already-found wreck.
    fn clear_of_other_wrecks(&self, c: Coord) -> bool {
        coord::neighbors8(c, self.size)
            .iter()
            .all(|n| !self.hits.contains(*n) || self.active_hits.contains(n))
    }

    fn chase(&mut self) -> Coord {
        let candidates = self.chase_candidates();
        // A wounded vessel always leaves an open orthogonal extension, so
        // an empty candidate set means the board invariants were broken.
        *candidates
            .choose(&mut self.rng)
            .expect("wounded vessel with no open orthogonal extension")
    }
}

impl TargetingStrategy for AiTargeting {
    fn select_target(&mut self) -> Move {
        let coord = if self.active_hits.is_empty() {
            self.hunt()
        } else {
            self.chase()
        };
        debug!("ai targets {}", coord);
        Move::Fire(coord)
    }

    fn record_outcome(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.move_history.push(coord);
        match outcome {
            ShotOutcome::Hit => {
                let _ = self.hits.set(coord);
                self.active_hits.push(coord);
            }
            ShotOutcome::Sink => {
                let _ = self.hits.set(coord);
                self.active_hits.clear();
                debug!("ai sank a vessel, back to hunting");
            }
            ShotOutcome::Miss => {
                let _ = self.misses.set(coord);
            }
        }
    }
}
