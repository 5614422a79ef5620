use crate::domain::process::Ticks;
use crate::domain::process_table::ProcessTable;
use crate::domain::scheduler::CpuScheduler;
use crate::error::{Error, Result};

/// First-Come-First-Served: processes run to completion in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, table: &mut ProcessTable) -> Result<Ticks> {
        log::info!("Starting FCFS run over {} processes.", table.len());
        let mut current_time: Ticks = 0;

        for id in 0..table.len() {
            let burst = table[id].remaining_burst();
            // Zero-length bursts are already complete, nothing to run.
            if burst == 0 {
                continue;
            }

            table.advance(id, burst)?;
            current_time = current_time.checked_add(burst).ok_or_else(|| Error::ContractViolation("Elapsed time overflows the tick counter".to_string()))?;
            log::debug!("t={} PID {} ran {} ticks to completion.", current_time, id, burst);
        }

        log::info!("FCFS run finished after {} ticks.", current_time);
        Ok(current_time)
    }
}
