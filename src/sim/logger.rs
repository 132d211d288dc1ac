//! Structured logging for simulation runs.

// =============================================================================
// Verbosity
// =============================================================================

/// How much the simulator reports while running.
///
/// Levels are ordered: `Silent < Info < Debug`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Run-level summaries.
    Info,
    /// Per-trial detail.
    Debug,
}

// =============================================================================
// SimulationLogger
// =============================================================================

/// Verbosity-gated logger for simulation progress.
///
/// Writes to stderr so presentation layers can keep stdout for their own
/// output.
#[derive(Clone, Debug)]
pub struct SimulationLogger {
    verbosity: Verbosity,
}

impl SimulationLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log a run-level message at `Info`.
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Info {
            eprintln!("[sim] {}", message);
        }
    }

    /// Log per-trial metrics at `Debug`.
    pub fn log_trial(&self, trial: usize, metrics: &[(&str, f64)]) {
        if self.verbosity >= Verbosity::Debug {
            let formatted: Vec<String> =
                metrics.iter().map(|(name, value)| format!("{}={:.4}", name, value)).collect();
            eprintln!("[sim] trial {:>4}  {}", trial, formatted.join("  "));
        }
    }
}
