use std::io::Write;

use serde::Serialize;

use crate::domain::process::{ProcessId, Ticks};
use crate::domain::process_table::ProcessTable;
use crate::domain::scheduler::CpuScheduler;
use crate::error::{Error, Result};

/// Final outcome of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    pub id: ProcessId,
    pub burst: Ticks,
    pub wait: Ticks,
    pub turnaround: Ticks,
}

/// Summary of a completed scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub scheduler: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub total_elapsed_time: Ticks,
    pub total_wait: Ticks,
    pub average_wait: f64,
    pub average_turnaround: f64,
    pub processes: Vec<ProcessReport>,
}

impl SimulationReport {
    /// Builds the report from a table the scheduler has driven to completion.
    pub fn new(scheduler: &dyn CpuScheduler, table: &ProcessTable, total_elapsed_time: Ticks) -> Result<Self> {
        if let Some(process) = table.iter().find(|p| !p.is_complete()) {
            return Err(Error::ContractViolation(format!(
                "Cannot report on an unfinished run: process {} has {} ticks left",
                process.id(),
                process.remaining_burst()
            )));
        }

        let processes: Vec<ProcessReport> = table
            .iter()
            .map(|p| ProcessReport { id: p.id(), burst: p.burst(), wait: p.accumulated_wait(), turnaround: p.turnaround() })
            .collect();

        let total_wait = table.total_wait()?;
        let total_turnaround = processes
            .iter()
            .try_fold(0 as Ticks, |total, p| total.checked_add(p.turnaround))
            .ok_or_else(|| Error::ContractViolation("Total turnaround overflows the tick counter".to_string()))?;

        Ok(SimulationReport {
            scheduler: scheduler.name().to_string(),
            quantum: scheduler.quantum(),
            total_elapsed_time,
            total_wait,
            average_wait: average(total_wait, processes.len()),
            average_turnaround: average(total_turnaround, processes.len()),
            processes,
        })
    }

    pub fn log_summary(&self) {
        match self.quantum {
            Some(quantum) => log::info!("Scheduler: {} (quantum {})", self.scheduler, quantum),
            None => log::info!("Scheduler: {}", self.scheduler),
        }
        log::info!("Total elapsed time: {}", self.total_elapsed_time);
        log::info!("Average wait: {:.2}, average turnaround: {:.2}", self.average_wait, self.average_turnaround);
    }
}

fn average(total: Ticks, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total as f64 / count as f64 }
}

/// Writes one `;`-separated row per process, preceded by a header row.
pub fn write_csv<W: Write>(report: &SimulationReport, writer: W) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_wtr.write_record(["id", "burst", "wait", "turnaround"])?;
    for process in &report.processes {
        csv_wtr.write_record(&[process.id.to_string(), process.burst.to_string(), process.wait.to_string(), process.turnaround.to_string()])?;
    }
    csv_wtr.flush()?;

    Ok(())
}
