/**
* Conway's Game of Life on a bounded grid.
*
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Neighbors outside the grid are always dead; the edges do not wrap.
*/

pub mod cell;
pub mod grid;
pub mod pattern;
pub mod simulation;
pub mod speed;

pub use cell::Cell;
pub use grid::{Brush, Grid};
pub use pattern::{Catalog, PatternError, StructurePattern};
pub use simulation::{RunState, Simulation, SimulationConfig};
pub use speed::Speed;
