pub mod bellman;
pub mod config;
pub mod convergence;
mod dense;
pub mod error;
pub mod ids;
mod interner;
pub mod metrics;
pub mod model;
pub mod policy_iteration;
pub mod solution;
pub mod value_iteration;

#[cfg(test)]
mod tests;
