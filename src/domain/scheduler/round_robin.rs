use crate::domain::process::{ProcessId, Ticks};
use crate::domain::process_table::ProcessTable;
use crate::domain::scheduler::CpuScheduler;
use crate::error::{Error, Result};

/// Round-Robin: circular order, each turn bounded by a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    /// Returns `Error::ContractViolation` for a zero quantum.
    pub fn new(quantum: Ticks) -> Result<Self> {
        if quantum == 0 {
            return Err(Error::ContractViolation("Round-Robin quantum must be at least 1 tick".to_string()));
        }
        Ok(RoundRobinScheduler { quantum })
    }

    /// Finds the next process after `current` (circularly) that still has burst left.
    ///
    /// The scan starts at `current + 1` and gives up once it is back at that start position.
    /// With a single live process this revisits `current` itself, which is then returned.
    pub fn next_candidate(table: &ProcessTable, current: ProcessId) -> Option<ProcessId> {
        if table.is_empty() {
            return None;
        }

        let start = (current + 1) % table.len();
        let mut next = start;

        while table[next].is_complete() {
            next = (next + 1) % table.len();
            if next == start {
                return None;
            }
        }

        Some(next)
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn quantum(&self) -> Option<Ticks> {
        Some(self.quantum)
    }

    fn run(&self, table: &mut ProcessTable) -> Result<Ticks> {
        log::info!("Starting RR run over {} processes with quantum {}.", table.len(), self.quantum);
        if table.is_empty() {
            log::info!("RR run finished after 0 ticks.");
            return Ok(0);
        }

        let mut current_time: Ticks = 0;
        let mut current: ProcessId = 0;

        loop {
            let remaining = table[current].remaining_burst();
            if remaining > 0 {
                let amount = self.quantum.min(remaining);
                table.advance(current, amount)?;
                current_time = current_time.checked_add(amount).ok_or_else(|| Error::ContractViolation("Elapsed time overflows the tick counter".to_string()))?;
                log::debug!("t={} PID {} ran {} ticks, {} left.", current_time, current, amount, remaining - amount);
            }

            match Self::next_candidate(table, current) {
                Some(next) => current = next,
                None => break,
            }
        }

        log::info!("RR run finished after {} ticks.", current_time);
        Ok(current_time)
    }
}
