// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use vigil_app::{ScreenAction, ViewLabel};
use vigil_tui::{AppRuntime, VisibleRows};

/// Host side of screen actions: exports land on disk, the rest are
/// acknowledged.
pub struct ActionRuntime {
    export_dir: PathBuf,
    now: fn() -> OffsetDateTime,
}

#[derive(Debug, Serialize)]
struct ExportFile<'a> {
    view: &'static str,
    title: &'static str,
    exported_at: String,
    columns: &'a [&'static str],
    rows: &'a [Vec<String>],
}

impl ActionRuntime {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            now: OffsetDateTime::now_utc,
        }
    }

    fn export(&self, view: ViewLabel, rows: &VisibleRows) -> Result<PathBuf> {
        fs::create_dir_all(&self.export_dir)
            .with_context(|| format!("create export directory {}", self.export_dir.display()))?;

        let now = (self.now)();
        let path = unused_export_path(&self.export_dir, view, now.unix_timestamp());
        let file = ExportFile {
            view: view.as_str(),
            title: rows.title,
            exported_at: now.format(&Rfc3339).context("format export timestamp")?,
            columns: &rows.columns,
            rows: &rows.rows,
        };
        let body = serde_json::to_string_pretty(&file).context("encode export")?;
        fs::write(&path, body).with_context(|| format!("write export {}", path.display()))?;
        info!(view = view.as_str(), rows = rows.rows.len(), path = %path.display(), "rows exported");
        Ok(path)
    }
}

/// `<view>-<unix-seconds>.json`, suffixed when an export from the same
/// second already exists.
fn unused_export_path(dir: &Path, view: ViewLabel, unix_seconds: i64) -> PathBuf {
    let stem = format!("{}-{unix_seconds}", view.as_str());
    let mut path = dir.join(format!("{stem}.json"));
    let mut attempt = 1;
    while path.exists() {
        attempt += 1;
        path = dir.join(format!("{stem}-{attempt}.json"));
    }
    path
}

impl AppRuntime for ActionRuntime {
    fn request_action(
        &mut self,
        view: ViewLabel,
        action: ScreenAction,
        rows: &VisibleRows,
    ) -> Result<String> {
        match action {
            ScreenAction::Export => {
                let path = self.export(view, rows)?;
                Ok(format!(
                    "exported {} rows to {}",
                    rows.rows.len(),
                    path.display()
                ))
            }
            ScreenAction::Create | ScreenAction::Upload | ScreenAction::Schedule => {
                info!(
                    view = view.as_str(),
                    action = action.label(),
                    "action acknowledged"
                );
                Ok(format!("{} requested for {}", action.label(), rows.title))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ActionRuntime;
    use anyhow::Result;
    use time::OffsetDateTime;
    use time::macros::datetime;
    use vigil_app::{ListView, ScreenAction, TableCell, ViewLabel};
    use vigil_testkit::{scenario_list, temp_export_dir};
    use vigil_tui::{AppRuntime, VisibleRows};

    fn fixed_now() -> OffsetDateTime {
        datetime!(2026-03-01 12:00:00 UTC)
    }

    fn scenario_rows(query: &str) -> VisibleRows {
        let mut list = scenario_list();
        list.set_query(query);
        VisibleRows {
            view: ViewLabel::RiskRegister,
            title: "Fixtures",
            columns: ListView::columns(&list).to_vec(),
            rows: ListView::rows(&list)
                .iter()
                .map(|row| row.cells.iter().map(TableCell::display).collect())
                .collect(),
        }
    }

    fn runtime_in(dir: std::path::PathBuf) -> ActionRuntime {
        ActionRuntime {
            export_dir: dir,
            now: fixed_now,
        }
    }

    #[test]
    fn export_writes_visible_rows_as_json() -> Result<()> {
        let (_temp, dir) = temp_export_dir()?;
        let mut runtime = runtime_in(dir.clone());

        let message =
            runtime.request_action(ViewLabel::RiskRegister, ScreenAction::Export, &scenario_rows("alp"))?;
        let path = dir.join(format!("risk-register-{}.json", fixed_now().unix_timestamp()));
        assert_eq!(
            message,
            format!("exported 1 rows to {}", path.display())
        );

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written["view"], "risk-register");
        assert_eq!(written["exported_at"], "2026-03-01T12:00:00Z");
        assert_eq!(written["columns"][1], "name");
        assert_eq!(written["rows"].as_array().map(Vec::len), Some(1));
        assert_eq!(written["rows"][0][1], "Alpha");
        Ok(())
    }

    #[test]
    fn exports_in_the_same_second_do_not_overwrite() -> Result<()> {
        let (_temp, dir) = temp_export_dir()?;
        let mut runtime = runtime_in(dir.clone());
        let rows = scenario_rows("");

        runtime.request_action(ViewLabel::RiskRegister, ScreenAction::Export, &rows)?;
        let second =
            runtime.request_action(ViewLabel::RiskRegister, ScreenAction::Export, &rows)?;
        assert!(second.ends_with("-2.json"), "got {second}");
        assert_eq!(std::fs::read_dir(&dir)?.count(), 2);
        Ok(())
    }

    #[test]
    fn other_actions_are_acknowledged_without_writing() -> Result<()> {
        let (_temp, dir) = temp_export_dir()?;
        let mut runtime = runtime_in(dir.clone());

        let message =
            runtime.request_action(ViewLabel::VendorRisk, ScreenAction::Schedule, &scenario_rows(""))?;
        assert_eq!(message, "schedule requested for Fixtures");
        assert!(!dir.exists());
        Ok(())
    }

    #[test]
    fn export_reports_unwritable_directory() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "file")?;
        let mut runtime = runtime_in(blocker.join("exports"));

        let error = runtime
            .request_action(ViewLabel::RiskRegister, ScreenAction::Export, &scenario_rows(""))
            .expect_err("export under a file should fail");
        assert!(error.to_string().contains("create export directory"));
        Ok(())
    }
}
