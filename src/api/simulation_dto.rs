use serde::{Deserialize, Serialize};

/// On-disk description of one simulation run.
///
/// ```json
/// { "bursts": [5, 3, 8], "schedulerTyp": "RR", "quantum": 3 }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDto {
    pub bursts: Vec<u64>,

    #[serde(default = "default_scheduler_typ")]
    pub scheduler_typ: String,

    #[serde(default)]
    pub quantum: Option<u64>,
}

fn default_scheduler_typ() -> String {
    "FCFS".to_string()
}
