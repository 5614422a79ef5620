pub mod process;
pub mod process_table;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod workload;
