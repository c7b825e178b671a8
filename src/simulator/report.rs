//! Simulation report generation.

use serde::Serialize;

use super::config::ExecMode;
use crate::cave::Position;

/// Result of traversing one fixed cave in display mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub exit_found: bool,
    pub exits_reached: u32,
    pub regions_visited: usize,
    /// Visited regions in row-major order.
    pub visited: Vec<Position>,
    /// Rendered map: `1` unvisited, `0` visited.
    pub paths: String,
}

/// Crossing tally for one accessibility value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingEstimate {
    pub accessibility: f64,
    pub samples: u32,
    pub successes: u32,
}

impl CrossingEstimate {
    pub fn success_rate(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.successes as f64 / self.samples as f64
    }

    pub fn to_line(&self) -> String {
        format!(
            "Success for accessibility {:.4} is {:.4}",
            self.accessibility,
            self.success_rate()
        )
    }
}

// The derived rate is included so the JSON can be plotted directly.
impl Serialize for CrossingEstimate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CrossingEstimate", 4)?;
        state.serialize_field("accessibility", &self.accessibility)?;
        state.serialize_field("samples", &self.samples)?;
        state.serialize_field("successes", &self.successes)?;
        state.serialize_field("success_rate", &self.success_rate())?;
        state.end()
    }
}

/// Estimates over the whole accessibility range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub cave_size: usize,
    pub samples: u32,
    pub points: Vec<CrossingEstimate>,
}

impl SweepReport {
    /// Smallest accessibility at which at least half of the caves were crossed.
    pub fn threshold_estimate(&self) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.success_rate() >= 0.5)
            .map(|point| point.accessibility)
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();
        for point in &self.points {
            report.push_str(&point.to_line());
            report.push('\n');
        }
        report
    }
}

/// Output of [`run_simulation`](super::run_simulation), one variant per mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SimReport {
    Paths(PathReport),
    Estimate(CrossingEstimate),
    Sweep(SweepReport),
}

impl SimReport {
    pub fn exec_mode(&self) -> ExecMode {
        match self {
            SimReport::Paths(_) => ExecMode::ShowPaths,
            SimReport::Estimate(_) => ExecMode::Estimate,
            SimReport::Sweep(_) => ExecMode::Sweep,
        }
    }

    /// Console output, exactly as printed by the binary.
    pub fn to_text(&self) -> String {
        match self {
            SimReport::Paths(paths) => {
                let verdict = if paths.exit_found {
                    "Exit found"
                } else {
                    "Exit NOT found"
                };
                format!("{}\n{}", verdict, paths.paths)
            }
            SimReport::Estimate(estimate) => format!("{}\n", estimate.to_line()),
            SimReport::Sweep(sweep) => sweep.to_text(),
        }
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(accessibility: f64, successes: u32) -> CrossingEstimate {
        CrossingEstimate {
            accessibility,
            samples: 10,
            successes,
        }
    }

    #[test]
    fn test_success_rate() {
        assert!((point(0.5, 3).success_rate() - 0.3).abs() < 1e-12);
        let empty = CrossingEstimate {
            accessibility: 0.5,
            samples: 0,
            successes: 0,
        };
        assert_eq!(empty.success_rate(), 0.0);
    }

    #[test]
    fn test_estimate_line_uses_four_decimals() {
        assert_eq!(
            point(0.25, 1).to_line(),
            "Success for accessibility 0.2500 is 0.1000"
        );
    }

    #[test]
    fn test_paths_text() {
        let found = SimReport::Paths(PathReport {
            exit_found: true,
            exits_reached: 1,
            regions_visited: 2,
            visited: vec![Position::new(0, 1), Position::new(1, 1)],
            paths: "1 0\n1 0\n".to_string(),
        });
        assert_eq!(found.to_text(), "Exit found\n1 0\n1 0\n");

        let missed = SimReport::Paths(PathReport {
            exit_found: false,
            exits_reached: 0,
            regions_visited: 0,
            visited: Vec::new(),
            paths: "1\n".to_string(),
        });
        assert_eq!(missed.to_text(), "Exit NOT found\n1\n");
    }

    #[test]
    fn test_threshold_estimate() {
        let sweep = SweepReport {
            cave_size: 10,
            samples: 10,
            points: vec![point(0.0, 0), point(0.5, 4), point(0.6, 5), point(0.7, 9)],
        };
        assert_eq!(sweep.threshold_estimate(), Some(0.6));

        let never = SweepReport {
            cave_size: 10,
            samples: 10,
            points: vec![point(0.0, 0), point(0.1, 1)],
        };
        assert_eq!(never.threshold_estimate(), None);
    }

    #[test]
    fn test_sweep_text_one_line_per_point() {
        let sweep = SweepReport {
            cave_size: 4,
            samples: 10,
            points: vec![point(0.0, 0), point(1.0, 10)],
        };
        let report = SimReport::Sweep(sweep);
        assert_eq!(
            report.to_text(),
            "Success for accessibility 0.0000 is 0.0000\n\
             Success for accessibility 1.0000 is 1.0000\n"
        );
        assert_eq!(report.exec_mode(), ExecMode::Sweep);
    }

    #[test]
    fn test_json_includes_mode_and_rate() {
        let report = SimReport::Estimate(point(0.5, 7));
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"], "estimate");
        assert_eq!(value["successes"], 7);
        assert!((value["success_rate"].as_f64().unwrap() - 0.7).abs() < 1e-12);
    }
}
