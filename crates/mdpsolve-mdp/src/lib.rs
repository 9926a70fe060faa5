mod builder;
mod compiled;
mod error;
mod io;
pub mod report;
mod simulator;
mod spec;

pub use builder::MdpBuilder;
pub use compiled::TableMdp;
pub use error::MdpError;
pub use io::{compile_yaml, load_yaml, save_yaml, write_solution_json};
pub use mdpsolve_core::StateKey;
pub use simulator::MdpSimulator;
pub use spec::{ActionSpec, MdpSpec, OutcomeSpec, StateSpec};
