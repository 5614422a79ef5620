use crate::api::simulation_dto::SimulationDto;
use crate::domain::process::Ticks;
use crate::domain::process_table::ProcessTable;
use crate::domain::report::SimulationReport;
use crate::domain::scheduler::SchedulerType;
use crate::error::{ConversionError, Result};

/// Validated input for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub bursts: Vec<Ticks>,
    pub scheduler_type: SchedulerType,
    pub quantum: Option<Ticks>,
}

impl TryFrom<SimulationDto> for SimulationConfig {
    type Error = ConversionError;

    fn try_from(dto: SimulationDto) -> std::result::Result<Self, Self::Error> {
        let scheduler_type: SchedulerType = dto.scheduler_typ.parse()?;

        if scheduler_type == SchedulerType::RoundRobin && dto.quantum.is_none() {
            return Err(ConversionError::MissingQuantum);
        }

        Ok(SimulationConfig { bursts: dto.bursts, scheduler_type, quantum: dto.quantum })
    }
}

impl SimulationConfig {
    /// Builds the process table, runs the selected scheduler over it and reports the result.
    pub fn run(&self) -> Result<SimulationReport> {
        let scheduler = self.scheduler_type.get_instance(self.quantum)?;
        let mut table = ProcessTable::new(&self.bursts)?;

        let total_elapsed_time = scheduler.run(&mut table)?;
        table.print_summary();

        SimulationReport::new(scheduler.as_ref(), &table, total_elapsed_time)
    }
}
