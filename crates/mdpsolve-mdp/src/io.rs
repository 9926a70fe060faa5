use std::{fs, hash::Hash, path::Path};

use mdpsolve_core::Solution;
use serde::Serialize;

use crate::{MdpError, MdpSpec, TableMdp};

/// Load an MDP spec from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<MdpSpec, MdpError> {
    let yaml = fs::read_to_string(path)?;
    let spec: MdpSpec = serde_yaml::from_str(&yaml)?;
    Ok(spec)
}

/// Load and compile an MDP from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<TableMdp, MdpError> {
    let spec = load_yaml(path)?;
    spec.compile()
}

/// Serialize and write an MDP spec to YAML.
pub fn save_yaml(path: impl AsRef<Path>, spec: &MdpSpec) -> Result<(), MdpError> {
    let yaml = serde_yaml::to_string(spec)?;
    fs::write(path, yaml)?;
    Ok(())
}

/// Write a solver result as pretty JSON.
pub fn write_solution_json<S, A>(
    path: impl AsRef<Path>,
    solution: &Solution<S, A>,
) -> Result<(), MdpError>
where
    S: Clone + Eq + Hash + Serialize,
    A: Clone + Serialize,
{
    let json = solution.snapshot().to_json_pretty()?;
    fs::write(path, json)?;
    Ok(())
}
