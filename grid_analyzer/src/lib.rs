//! Shared grid analysis for the 2024 puzzle solvers.
//!
//! Every analysis works on an immutable [`Map`] built row by row from text,
//! and returns plain numbers or position sets. Reading files and printing
//! answers is left to the day crates.

mod error;
pub mod logging;
mod map;
mod patrol;
mod position;
mod projection;
mod region;
mod trail;
mod word_search;

pub use error::Error;
pub use map::{parse_map, read_map, Map, MapBuilder};
pub use patrol::{Guard, Lab, LabTile, PatrolEnd, PatrolRecord};
pub use position::{Direction, Position, Vector};
pub use projection::{Antennas, Projection};
pub use region::{EdgeRecord, Pricing, Region};
pub use trail::{TopoMap, SUMMIT_HEIGHT, TRAILHEAD_HEIGHT};
pub use word_search::WordSearch;
