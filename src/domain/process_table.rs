use std::ops::Index;

use crate::domain::process::{Process, ProcessId, Ticks};
use crate::error::{Error, Result};

/// Ordered, fixed-length set of processes for a single scheduling run.
///
/// The table owns all mutable simulation state. Schedulers borrow it mutably and move time
/// forward exclusively through [`ProcessTable::advance`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates one process per burst, in input order, with `id == index`.
    ///
    /// Returns `Error::AllocationError` if the storage can not be reserved and
    /// `Error::ContractViolation` if the total work does not fit into `Ticks`.
    pub fn new(bursts: &[Ticks]) -> Result<Self> {
        if bursts.iter().try_fold(0 as Ticks, |total, &burst| total.checked_add(burst)).is_none() {
            return Err(Error::ContractViolation(format!("Total burst length of {} processes overflows the tick counter", bursts.len())));
        }

        let mut processes = Vec::new();
        processes.try_reserve_exact(bursts.len()).map_err(|source| Error::AllocationError { requested: bursts.len(), source })?;

        processes.extend(bursts.iter().enumerate().map(|(id, &burst)| Process::new(id, burst)));

        log::debug!("Created ProcessTable with {} processes.", processes.len());
        Ok(ProcessTable { processes })
    }

    /// Runs process `target` for `amount` ticks.
    ///
    /// Every other process that is still incomplete waits for the same `amount`. Finished
    /// processes never accrue wait. On a contract violation the table is left untouched.
    pub fn advance(&mut self, target: ProcessId, amount: Ticks) -> Result<()> {
        let process = self.processes.get(target).ok_or_else(|| {
            Error::ContractViolation(format!("Process index {} out of range for table of length {}", target, self.processes.len()))
        })?;

        if amount == 0 {
            return Err(Error::ContractViolation(format!("Process {} advanced by zero ticks", target)));
        }

        if amount > process.remaining_burst() {
            return Err(Error::ContractViolation(format!(
                "Process {} advanced by {} ticks but only {} remain",
                target,
                amount,
                process.remaining_burst()
            )));
        }

        for (index, process) in self.processes.iter_mut().enumerate() {
            if index == target {
                process.consume(amount);
            } else if !process.is_complete() {
                process.wait(amount);
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn all_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }

    /// Sum of all remaining bursts, i.e. the work still to be done.
    pub fn remaining_work(&self) -> Ticks {
        self.processes.iter().map(Process::remaining_burst).sum()
    }

    /// Sum of all accumulated waits. Fails if the sum does not fit into `Ticks`.
    pub fn total_wait(&self) -> Result<Ticks> {
        self.processes
            .iter()
            .try_fold(0 as Ticks, |total, p| total.checked_add(p.accumulated_wait()))
            .ok_or_else(|| Error::ContractViolation("Total wait overflows the tick counter".to_string()))
    }

    /// Logs the state of every process.
    pub fn print_summary(&self) {
        log::info!("--- ProcessTable Summary ({} processes) ---", self.processes.len());
        for process in &self.processes {
            log::info!("PID {}: burst_left={}, wait={}", process.id(), process.remaining_burst(), process.accumulated_wait());
        }
    }
}

impl Index<ProcessId> for ProcessTable {
    type Output = Process;

    fn index(&self, id: ProcessId) -> &Self::Output {
        &self.processes[id]
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
