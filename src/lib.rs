//! Rules engine and automated opponent for a grid-based naval combat game.
//!
//! Two hidden fleets face off on square boards of up to 10×10 cells. Vessels
//! are placed at random under a no-touch rule (no two vessels may be
//! 8-neighbors, diagonals included), shots are resolved one at a time, and
//! the automated opponent hunts randomly until it wounds a vessel, then
//! chases along the inferred orientation.
//!
//! Rendering, parsing of raw move input and session flow live outside this
//! crate; the engine deals only in already-decoded [`Coord`]s.

mod common;
mod config;
mod coord;
mod game;
mod grid;
mod logging;
mod mask;
mod placer;
mod strategy;
mod vessel;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use mask::*;
pub use placer::*;
pub use strategy::*;
pub use vessel::*;
