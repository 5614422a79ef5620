use std::fmt::Debug;

use crate::domain::process::Ticks;
use crate::domain::process_table::ProcessTable;
use crate::error::Result;

pub mod fcfs;
pub mod round_robin;
pub mod scheduler_type;

pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;
pub use scheduler_type::SchedulerType;

/// A single-core scheduling discipline.
///
/// `run` drives the table until every process is complete and returns the total elapsed time.
pub trait CpuScheduler: Debug {
    fn name(&self) -> &'static str;

    /// Time slice granted per turn, if the discipline is preemptive.
    fn quantum(&self) -> Option<Ticks> {
        None
    }

    fn run(&self, table: &mut ProcessTable) -> Result<Ticks>;
}
