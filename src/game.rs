//! Match orchestration: the turn state machine over two sides.

use core::fmt;

use log::info;

use crate::common::{BoardError, ShotOutcome};
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::mask::BoardMask;
use crate::placer::FleetPlacer;
use crate::strategy::{Move, TargetingStrategy};

/// One of the two opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given side to produce a move.
    AwaitingMove(Side),
    /// One fleet is fully destroyed, or a side forfeited.
    Finished { winner: Side },
}

/// What a single [`Match::step`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// A shot was resolved against the enemy board.
    Fired {
        side: Side,
        coord: Coord,
        outcome: ShotOutcome,
    },
    /// The move was rejected; nothing changed and the same side goes again.
    Rejected { side: Side, reason: BoardError },
    /// The side gave up; its opponent wins.
    Forfeited { side: Side },
    /// The match was already over when `step` was called.
    Over { winner: Side },
}

struct SideState {
    grid: Grid,
    strategy: Box<dyn TargetingStrategy>,
    tracking_hits: BoardMask,
    tracking_misses: BoardMask,
}

/// Turn-based match between two strategies over two hidden fleets.
///
/// Each side owns its grid and fires at the opponent's; all cross-side
/// traffic goes through [`Grid::shoot`] and
/// [`TargetingStrategy::record_outcome`]. A side keeps the turn on `Hit`
/// and `Sink` and passes it on `Miss`.
pub struct Match {
    sides: [SideState; 2],
    turn: TurnState,
}

impl Match {
    /// Validate `config`, build both boards, let `placer` lay out both
    /// fleets, and start with side A to move.
    pub fn new(
        config: &GameConfig,
        strategy_a: Box<dyn TargetingStrategy>,
        strategy_b: Box<dyn TargetingStrategy>,
        placer: &mut FleetPlacer,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let mut build = |strategy: Box<dyn TargetingStrategy>| -> Result<SideState, BoardError> {
            let mut grid = Grid::new(config.board_size)?;
            placer.place(&mut grid, &config.fleet)?;
            Ok(SideState {
                grid,
                strategy,
                tracking_hits: BoardMask::new(config.board_size),
                tracking_misses: BoardMask::new(config.board_size),
            })
        };
        let a = build(strategy_a)?;
        let b = build(strategy_b)?;
        Ok(Match {
            sides: [a, b],
            turn: TurnState::AwaitingMove(Side::A),
        })
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The given side's own board.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.sides[side.index()].grid
    }

    /// The given side's record of its shots at the enemy, as
    /// (hits, misses). This is the self-view a renderer displays next to
    /// the side's own board.
    pub fn tracking(&self, side: Side) -> (&BoardMask, &BoardMask) {
        let state = &self.sides[side.index()];
        (&state.tracking_hits, &state.tracking_misses)
    }

    fn finish(&mut self, winner: Side) {
        for side in self.sides.iter_mut() {
            side.grid.set_reveal(true);
        }
        self.turn = TurnState::Finished { winner };
        info!("match finished, side {} wins", winner);
    }

    /// Resolve one move of the active side.
    ///
    /// `OutOfBounds` and `AlreadyShot` moves yield a `Rejected` event: no
    /// state mutates and the turn stays with the same side, so a re-prompt
    /// is all the caller needs to do. Every resolved shot is fed back to
    /// the shooter via `record_outcome` and mirrored onto its tracking
    /// masks.
    pub fn step(&mut self) -> Result<TurnEvent, BoardError> {
        let side = match self.turn {
            TurnState::AwaitingMove(s) => s,
            TurnState::Finished { winner } => return Ok(TurnEvent::Over { winner }),
        };
        let coord = match self.sides[side.index()].strategy.select_target() {
            Move::Fire(c) => c,
            Move::Forfeit => {
                info!("side {} forfeits", side);
                self.finish(side.opponent());
                return Ok(TurnEvent::Forfeited { side });
            }
        };
        let enemy = side.opponent();
        let outcome = match self.sides[enemy.index()].grid.shoot(coord) {
            Ok(outcome) => outcome,
            Err(reason @ (BoardError::OutOfBounds(_) | BoardError::AlreadyShot(_))) => {
                info!("side {} move rejected: {}", side, reason);
                return Ok(TurnEvent::Rejected { side, reason });
            }
            Err(e) => return Err(e),
        };
        let fleet_sunk = self.sides[enemy.index()].grid.fleet_sunk();
        {
            let shooter = &mut self.sides[side.index()];
            shooter.strategy.record_outcome(coord, outcome);
            let mark = match outcome {
                ShotOutcome::Miss => &mut shooter.tracking_misses,
                _ => &mut shooter.tracking_hits,
            };
            mark.set(coord)?;
        }
        info!("side {} fires {}: {:?}", side, coord, outcome);
        if fleet_sunk {
            self.finish(side);
        } else if outcome == ShotOutcome::Miss {
            self.turn = TurnState::AwaitingMove(enemy);
        }
        Ok(TurnEvent::Fired {
            side,
            coord,
            outcome,
        })
    }

    /// Drive the match to completion and return the winner.
    ///
    /// Guards against a strategy that repeats rejected moves forever by
    /// surfacing the rejection after a board's worth of consecutive
    /// retries.
    pub fn run(&mut self) -> Result<Side, BoardError> {
        let board_cells = (self.sides[0].grid.size() as u32).pow(2);
        let mut stalled = 0u32;
        loop {
            match self.step()? {
                TurnEvent::Over { winner } => return Ok(winner),
                TurnEvent::Rejected { reason, .. } => {
                    stalled += 1;
                    if stalled > board_cells {
                        return Err(reason);
                    }
                }
                _ => stalled = 0,
            }
            if let TurnState::Finished { winner } = self.turn {
                return Ok(winner);
            }
        }
    }
}
