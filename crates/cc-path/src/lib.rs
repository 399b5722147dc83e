//! `cc-path` — weighted adjacency lists and shortest-path search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`adjacency`] | `AdjacencyList`, `Neighbor`                           |
//! | [`dijkstra`]  | `dijkstra`, `ShortestPath`                            |
//! | [`error`]     | `PathError`, `PathResult<T>`                          |
//!
//! Both the indoor floor graph and the outdoor footpath network lower into
//! an [`AdjacencyList`] and share the same solver.

pub mod adjacency;
pub mod dijkstra;
pub mod error;

#[cfg(test)]
mod tests;

pub use adjacency::{AdjacencyList, Neighbor};
pub use dijkstra::{ShortestPath, dijkstra};
pub use error::{PathError, PathResult};
