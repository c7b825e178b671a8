//! Simulation configuration.

/// Number of equal steps between accessibility 0 and 1 in a sweep.
pub const SWEEP_STEPS: u32 = 100;

/// Execution mode as chosen on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// 'A': traverse a map typed in by the user and show the explored regions.
    ShowPaths,
    /// 'B': estimate the crossing probability for one accessibility.
    Estimate,
    /// 'C': run the estimate for every accessibility in 1% steps.
    Sweep,
}

impl ExecMode {
    /// Parse a mode letter. Lowercase letters are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(ExecMode::ShowPaths),
            'B' => Some(ExecMode::Estimate),
            'C' => Some(ExecMode::Sweep),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ExecMode::ShowPaths => 'A',
            ExecMode::Estimate => 'B',
            ExecMode::Sweep => 'C',
        }
    }
}

/// Mode together with the data only that mode needs.
#[derive(Debug, Clone, PartialEq)]
pub enum SimMode {
    /// Obstruction flags, row-major; `true` is obstructed.
    ShowPaths { layout: Vec<Vec<bool>> },
    Estimate { accessibility: f64 },
    Sweep,
}

impl SimMode {
    pub fn exec_mode(&self) -> ExecMode {
        match self {
            SimMode::ShowPaths { .. } => ExecMode::ShowPaths,
            SimMode::Estimate { .. } => ExecMode::Estimate,
            SimMode::Sweep => ExecMode::Sweep,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Side length of every cave in the run
    pub cave_size: usize,

    /// Caves generated per accessibility value (ignored for ShowPaths)
    pub sample_size: u32,

    pub mode: SimMode,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cave_size: 10,
            sample_size: 1000,
            mode: SimMode::Estimate { accessibility: 0.6 },
            seed: None,
        }
    }
}

impl SimConfig {
    /// Config for traversing a fixed, user-supplied map
    pub fn show_paths(layout: Vec<Vec<bool>>) -> Self {
        Self {
            cave_size: layout.len(),
            sample_size: 1,
            mode: SimMode::ShowPaths { layout },
            ..Default::default()
        }
    }

    /// Config for a single-accessibility estimate
    pub fn estimate(cave_size: usize, accessibility: f64, sample_size: u32) -> Self {
        Self {
            cave_size,
            sample_size,
            mode: SimMode::Estimate { accessibility },
            ..Default::default()
        }
    }

    /// Config for the full accessibility sweep
    pub fn sweep(cave_size: usize, sample_size: u32) -> Self {
        Self {
            cave_size,
            sample_size,
            mode: SimMode::Sweep,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_mode_from_char() {
        assert_eq!(ExecMode::from_char('A'), Some(ExecMode::ShowPaths));
        assert_eq!(ExecMode::from_char('b'), Some(ExecMode::Estimate));
        assert_eq!(ExecMode::from_char('C'), Some(ExecMode::Sweep));
        assert_eq!(ExecMode::from_char('D'), None);
        assert_eq!(ExecMode::from_char('1'), None);
    }

    #[test]
    fn test_exec_mode_char_roundtrip() {
        for mode in [ExecMode::ShowPaths, ExecMode::Estimate, ExecMode::Sweep] {
            assert_eq!(ExecMode::from_char(mode.as_char()), Some(mode));
        }
    }

    #[test]
    fn test_presets() {
        let config = SimConfig::show_paths(vec![vec![false; 3]; 3]);
        assert_eq!(config.cave_size, 3);
        assert_eq!(config.mode.exec_mode(), ExecMode::ShowPaths);

        let config = SimConfig::estimate(20, 0.55, 500).with_seed(Some(9));
        assert_eq!(config.cave_size, 20);
        assert_eq!(config.sample_size, 500);
        assert_eq!(config.mode, SimMode::Estimate { accessibility: 0.55 });
        assert_eq!(config.seed, Some(9));

        let config = SimConfig::sweep(15, 200);
        assert_eq!(config.mode.exec_mode(), ExecMode::Sweep);
        assert!(config.seed.is_none());
    }
}
