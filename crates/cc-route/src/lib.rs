//! `cc-route` — one entry point for indoor and outdoor campus routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`builder`] | `RoutePlannerBuilder`                                     |
//! | [`planner`] | `RoutePlanner::route`, floor loading                      |
//! | [`floor`]   | `FloorGraph` (graph + adjacency), indoor routing          |
//! | [`error`]   | `RouteError`, `PlanResult<T>`                             |
//!
//! # Dispatch
//!
//! ```text
//! route(start, end):
//!   ① reject blank ids
//!   ② both ids resolve on the active floor → Dijkstra over FloorGraph
//!   ③ otherwise                             → outdoor engine
//! ```

pub mod builder;
pub mod error;
pub mod floor;
pub mod planner;

#[cfg(test)]
mod tests;

pub use builder::RoutePlannerBuilder;
pub use error::{PlanResult, RouteError};
pub use floor::FloorGraph;
pub use planner::RoutePlanner;
