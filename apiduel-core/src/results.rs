// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Raw sample persistence.
//!
//! The on-disk artifact is a JSON array of scenario records, each holding
//! two named sample groups with parallel `times` and `sizes` lists. Saving
//! produces timestamped files so successive runs never clobber each other;
//! `analyze` defaults to the most recent one.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult, StatsError};
use crate::types::{ScenarioName, Trial};

/// Parallel sample lists for one API style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Elapsed times in milliseconds.
    pub times: Vec<f64>,
    /// Response body lengths in bytes.
    pub sizes: Vec<u64>,
}

impl SampleSet {
    /// Append one trial to both lists.
    pub fn push(&mut self, trial: Trial) {
        self.times.push(trial.elapsed_ms);
        self.sizes.push(trial.size_bytes);
    }

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sizes as reals, for the statistical procedures.
    pub fn sizes_f64(&self) -> Vec<f64> {
        self.sizes.iter().map(|&s| s as f64).collect()
    }

    /// The parallel-lists invariant. Violated only by hand-edited or
    /// corrupted artifacts.
    fn check_parallel(&self) -> Result<(), StatsError> {
        if self.times.len() != self.sizes.len() {
            return Err(StatsError::ParallelLengthMismatch {
                times: self.times.len(),
                sizes: self.sizes.len(),
            });
        }
        Ok(())
    }
}

/// One scenario's measurement output: both API styles, positionally paired
/// by run index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSamples {
    pub scenario: ScenarioName,
    pub rest: SampleSet,
    pub graphql: SampleSet,
}

impl ScenarioSamples {
    pub fn new(scenario: ScenarioName) -> Self {
        Self {
            scenario,
            rest: SampleSet::default(),
            graphql: SampleSet::default(),
        }
    }
}

/// JSON store for measurement results.
pub struct ResultsStore {
    output_dir: PathBuf,
}

impl ResultsStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> BenchResult<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).map_err(|e| BenchError::Io {
            context: "creating output directory",
            source: e,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save a measurement run to a timestamped JSON file.
    ///
    /// Returns the path to the created file.
    pub fn save(&self, results: &[ScenarioSamples]) -> BenchResult<PathBuf> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ");
        let filename = format!("results_{}.json", timestamp);
        let filepath = self.output_dir.join(&filename);

        let file = File::create(&filepath).map_err(|e| BenchError::Io {
            context: "creating results file",
            source: e,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, results).map_err(|e| BenchError::ResultsParse {
            path: filepath.clone(),
            message: e.to_string(),
        })?;

        Ok(filepath)
    }

    /// List existing results files, oldest first.
    pub fn list(&self) -> BenchResult<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.output_dir).map_err(|e| BenchError::Io {
            context: "reading output directory",
            source: e,
        })?;

        let mut results = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BenchError::Io {
                context: "reading output directory entry",
                source: e,
            })?;
            let path = entry.path();
            let is_results = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("results_") && n.ends_with(".json"))
                .unwrap_or(false);
            if is_results {
                results.push(path);
            }
        }
        results.sort();
        Ok(results)
    }

    /// The most recent results file, if any.
    pub fn latest(&self) -> BenchResult<PathBuf> {
        self.list()?
            .pop()
            .ok_or_else(|| BenchError::NoResults {
                dir: self.output_dir.clone(),
            })
    }

    /// Load a results file, failing fast on a missing file, malformed
    /// JSON, missing fields, or broken parallel-lists invariant.
    pub fn load(path: impl AsRef<Path>) -> BenchResult<Vec<ScenarioSamples>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ResultsNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| BenchError::Io {
            context: "opening results file",
            source: e,
        })?;
        let results: Vec<ScenarioSamples> =
            serde_json::from_reader(file).map_err(|e| BenchError::ResultsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for samples in &results {
            samples.rest.check_parallel().map_err(|e| {
                BenchError::ResultsParse {
                    path: path.to_path_buf(),
                    message: format!("scenario {}, rest group: {}", samples.scenario, e),
                }
            })?;
            samples.graphql.check_parallel().map_err(|e| {
                BenchError::ResultsParse {
                    path: path.to_path_buf(),
                    message: format!("scenario {}, graphql group: {}", samples.scenario, e),
                }
            })?;
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_run() -> Vec<ScenarioSamples> {
        let mut samples = ScenarioSamples::new(ScenarioName::new("simple_user").unwrap());
        samples.rest.push(Trial {
            elapsed_ms: 10.5,
            size_bytes: 512,
        });
        samples.rest.push(Trial {
            elapsed_ms: 11.25,
            size_bytes: 512,
        });
        samples.graphql.push(Trial {
            elapsed_ms: 4.0,
            size_bytes: 96,
        });
        samples.graphql.push(Trial {
            elapsed_ms: 4.5,
            size_bytes: 96,
        });
        vec![samples]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultsStore::new(temp_dir.path()).unwrap();

        let run = sample_run();
        let path = store.save(&run).unwrap();
        assert!(path.exists());

        let loaded = ResultsStore::load(&path).unwrap();
        assert_eq!(loaded, run);
        assert_eq!(loaded[0].rest.times, vec![10.5, 11.25]);
        assert_eq!(loaded[0].graphql.sizes, vec![96, 96]);
    }

    #[test]
    fn test_artifact_field_names() {
        let run = sample_run();
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"scenario\":\"simple_user\""));
        assert!(json.contains("\"rest\""));
        assert!(json.contains("\"graphql\""));
        assert!(json.contains("\"times\""));
        assert!(json.contains("\"sizes\""));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = ResultsStore::load(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(BenchError::ResultsNotFound { .. })));
    }

    #[test]
    fn test_load_missing_field_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"[{"scenario": "simple_user", "rest": {"times": [1.0], "sizes": [10]}}]"#,
        )
        .unwrap();
        let result = ResultsStore::load(&path);
        assert!(matches!(result, Err(BenchError::ResultsParse { .. })));
    }

    #[test]
    fn test_load_unparallel_lists_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("skewed.json");
        std::fs::write(
            &path,
            r#"[{"scenario": "simple_user",
                 "rest": {"times": [1.0, 2.0], "sizes": [10]},
                 "graphql": {"times": [1.0], "sizes": [10]}}]"#,
        )
        .unwrap();
        let err = ResultsStore::load(&path).unwrap_err();
        assert!(err.to_string().contains("rest group"));
    }

    #[test]
    fn test_latest_picks_newest() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultsStore::new(temp_dir.path()).unwrap();

        let run = sample_run();
        store.save(&run).unwrap();
        // Timestamps have second resolution; make the second file sort later.
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = store.save(&run).unwrap();

        assert_eq!(store.latest().unwrap(), second);
    }

    #[test]
    fn test_latest_with_no_runs_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultsStore::new(temp_dir.path()).unwrap();
        assert!(matches!(
            store.latest(),
            Err(BenchError::NoResults { .. })
        ));
    }
}
