use std::fs::File;

use anyhow::Context;
use clap::Parser;

use cpu_burst_scheduler::api::simulation_dto::SimulationDto;
use cpu_burst_scheduler::domain::report::write_csv;
use cpu_burst_scheduler::domain::simulation::SimulationConfig;
use cpu_burst_scheduler::domain::workload::random_bursts;
use cpu_burst_scheduler::error::ConversionError;
use cpu_burst_scheduler::loader::parser::{parse_bursts_file, parse_json_file};
use cpu_burst_scheduler::{SchedulerType, Ticks, logger};

/// Simulates FCFS and Round-Robin scheduling of single-burst processes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON simulation file (`bursts`, `schedulerTyp`, `quantum`).
    #[arg(short, long)]
    config: Option<String>,

    /// Comma separated burst lengths, e.g. `5,3,8`.
    #[arg(short, long, value_delimiter = ',', conflicts_with_all = ["bursts_file", "random"])]
    bursts: Option<Vec<Ticks>>,

    /// Plain-text file with burst lengths separated by commas or whitespace.
    #[arg(long, conflicts_with = "random")]
    bursts_file: Option<String>,

    /// Generate this many random bursts instead of reading them.
    #[arg(long)]
    random: Option<usize>,

    /// Upper bound for randomly generated bursts.
    #[arg(long, default_value_t = 10)]
    max_burst: Ticks,

    /// Seed for the random workload.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Scheduling discipline: `FCFS` or `RR`.
    #[arg(short, long)]
    scheduler: Option<SchedulerType>,

    /// Round-Robin time slice.
    #[arg(short, long)]
    quantum: Option<Ticks>,

    /// Also write the per-process results as CSV to this path.
    #[arg(long)]
    csv: Option<String>,
}

impl Cli {
    /// Merges the optional config file with the command line. Command line values win.
    fn resolve(&self) -> anyhow::Result<SimulationConfig> {
        let file_dto = match &self.config {
            Some(path) => {
                log::info!("Loading simulation from path: '{}'...", path);
                Some(parse_json_file::<SimulationDto>(path)?)
            }
            None => None,
        };

        let bursts = if let Some(bursts) = &self.bursts {
            bursts.clone()
        } else if let Some(path) = &self.bursts_file {
            parse_bursts_file(path)?
        } else if let Some(count) = self.random {
            random_bursts(count, self.max_burst, self.seed)?
        } else if let Some(dto) = &file_dto {
            dto.bursts.clone()
        } else {
            return Err(ConversionError::MissingBursts.into());
        };

        let scheduler_typ = match (&self.scheduler, &file_dto) {
            (Some(scheduler), _) => scheduler.to_string(),
            (None, Some(dto)) => dto.scheduler_typ.clone(),
            (None, None) => SchedulerType::Fcfs.to_string(),
        };

        let quantum = self.quantum.or(file_dto.as_ref().and_then(|dto| dto.quantum));

        Ok(SimulationConfig::try_from(SimulationDto { bursts, scheduler_typ, quantum })?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    let config = cli.resolve().context("Invalid simulation input")?;
    log::info!("Simulating {} processes with {}.", config.bursts.len(), config.scheduler_type);

    let report = config.run().context("Simulation failed")?;
    report.log_summary();

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("Could not create CSV file '{}'", path))?;
        write_csv(&report, file)?;
        log::info!("CSV report written to '{}'.", path);
    }

    Ok(())
}
