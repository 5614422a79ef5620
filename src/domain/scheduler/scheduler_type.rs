use std::fmt;
use std::str::FromStr;

use crate::domain::process::Ticks;
use crate::domain::scheduler::{CpuScheduler, FcfsScheduler, RoundRobinScheduler};
use crate::error::{ConversionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerType {
    Fcfs,
    RoundRobin,
}

impl FromStr for SchedulerType {
    type Err = ConversionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "FCFS" | "Fcfs" | "fcfs" => Ok(SchedulerType::Fcfs),
            "RR" | "RoundRobin" | "rr" | "round-robin" => Ok(SchedulerType::RoundRobin),
            _ => Err(ConversionError::UnknownSchedulerType(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerType::Fcfs => write!(f, "FCFS"),
            SchedulerType::RoundRobin => write!(f, "RR"),
        }
    }
}

impl SchedulerType {
    // Factory method to create a concrete CpuScheduler implementation
    pub fn get_instance(&self, quantum: Option<Ticks>) -> Result<Box<dyn CpuScheduler>> {
        match self {
            SchedulerType::Fcfs => {
                if quantum.is_some() {
                    log::warn!("Quantum is ignored by the FCFS scheduler.");
                }
                Ok(Box::new(FcfsScheduler))
            }
            SchedulerType::RoundRobin => {
                let quantum = quantum.ok_or(ConversionError::MissingQuantum)?;
                Ok(Box::new(RoundRobinScheduler::new(quantum)?))
            }
        }
    }
}
