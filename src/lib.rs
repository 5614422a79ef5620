use crate::api::simulation_dto::SimulationDto;
use crate::domain::report::SimulationReport;
use crate::domain::simulation::SimulationConfig;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

pub use domain::process::{Process, ProcessId, Ticks};
pub use domain::process_table::ProcessTable;
pub use domain::scheduler::{CpuScheduler, FcfsScheduler, RoundRobinScheduler, SchedulerType};

/// Loads a simulation description from a JSON file and runs it.
pub fn run_simulation_from_file(file_path: &str) -> Result<SimulationReport> {
    let dto: SimulationDto = parse_json_file::<SimulationDto>(file_path)?;
    log::info!("Simulation file '{}' parsed successfully.", file_path);

    let config = SimulationConfig::try_from(dto)?;
    config.run()
}
