//! Report storage API.

use crate::types::ReportManifest;
use crate::{ReportError, ReportResult};
use rl_sim::ActionLogEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes action-log reports under a root directory.
#[derive(Clone)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ReportResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Default store rooted at `<base>/Reports`.
    pub fn for_base_dir(base: &Path) -> ReportResult<Self> {
        Self::new(base.join("Reports"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn report_path(&self, experiment: &str) -> PathBuf {
        self.root_dir.join(format!("{experiment}.csv"))
    }

    fn manifest_path(&self, experiment: &str) -> PathBuf {
        self.root_dir.join(format!("{experiment}.manifest.json"))
    }

    /// Write the report and its manifest, overwriting any previous
    /// export of the same experiment. Returns the report path.
    pub fn save_report(
        &self,
        experiment: &str,
        entries: &[ActionLogEntry],
        written_at: &str,
    ) -> ReportResult<PathBuf> {
        check_report_name(experiment)?;

        let mut content = String::from("Time,Action,Status\n");
        for entry in entries {
            content.push_str(&format!(
                "{},{},{}\n",
                entry.timestamp.format("%H:%M:%S"),
                csv_field(&entry.action),
                entry.status,
            ));
        }
        let report_path = self.report_path(experiment);
        fs::write(&report_path, content)?;

        let manifest = ReportManifest {
            experiment: experiment.to_string(),
            written_at: written_at.to_string(),
            rows: entries.len(),
        };
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.manifest_path(experiment), manifest_json)?;

        Ok(report_path)
    }

    pub fn load_manifest(&self, experiment: &str) -> ReportResult<ReportManifest> {
        let content = fs::read_to_string(self.manifest_path(experiment))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// The experiment name becomes a filename; refuse separators and empties
/// rather than scatter files around.
fn check_report_name(experiment: &str) -> ReportResult<()> {
    if experiment.trim().is_empty()
        || experiment.contains(['/', '\\'])
        || experiment.contains("..")
    {
        return Err(ReportError::InvalidName {
            name: experiment.to_string(),
        });
    }
    Ok(())
}

/// Quote a CSV field when it needs it.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
