/// Index of a process inside its [`ProcessTable`](super::process_table::ProcessTable).
pub type ProcessId = usize;

/// Simulated CPU time.
pub type Ticks = u64;

/// One schedulable unit of work with a single CPU burst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: ProcessId,

    /// Initial burst length, never modified.
    burst: Ticks,

    /// CPU time still required. Reaches exactly 0 on completion.
    remaining_burst: Ticks,

    /// Time spent ready but not running while incomplete.
    accumulated_wait: Ticks,
}

impl Process {
    pub fn new(id: ProcessId, burst: Ticks) -> Self {
        Process { id, burst, remaining_burst: burst, accumulated_wait: 0 }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn burst(&self) -> Ticks {
        self.burst
    }

    pub fn remaining_burst(&self) -> Ticks {
        self.remaining_burst
    }

    pub fn accumulated_wait(&self) -> Ticks {
        self.accumulated_wait
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Completion time measured from the start of the run. Only meaningful once complete.
    /// Never exceeds the table's total work, which `ProcessTable::new` keeps within `Ticks`.
    pub fn turnaround(&self) -> Ticks {
        self.burst + self.accumulated_wait
    }

    pub(super) fn consume(&mut self, amount: Ticks) {
        debug_assert!(amount <= self.remaining_burst, "Process {} overrun", self.id);
        self.remaining_burst -= amount;
    }

    pub(super) fn wait(&mut self, amount: Ticks) {
        debug_assert!(!self.is_complete(), "Completed process {} must not accrue wait", self.id);
        self.accumulated_wait += amount;
    }
}
