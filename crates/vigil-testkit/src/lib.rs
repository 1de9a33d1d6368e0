// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::path::PathBuf;
use vigil_app::{CategoryFilter, FilterableList, RowKey, TableCell, TableRow};

pub const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];
pub const SEVERITIES: [&str; 4] = ["Critical", "High", "Medium", "Low"];

pub const STATUS_SENTINEL: &str = "All Status";
pub const SEVERITY_SENTINEL: &str = "All Severities";

const ADJECTIVES: [&str; 10] = [
    "Legacy", "Shared", "Primary", "Remote", "Backup", "Public", "Internal", "Guest", "Cloud",
    "Edge",
];
const NOUNS: [&str; 10] = [
    "Firewall", "Gateway", "Database", "Laptop", "Portal", "Vault", "Router", "Mailbox", "Ledger",
    "Archive",
];
const FIRST_NAMES: [&str; 8] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Quinn", "Rowan",
];
const LAST_NAMES: [&str; 8] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Reed", "Brooks",
];

/// Generic record used to exercise the filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub status: &'static str,
    pub severity: &'static str,
}

impl FixtureRecord {
    pub fn new(id: i64, name: &str, owner: &str, status: &'static str, severity: &'static str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            owner: owner.to_owned(),
            status,
            severity,
        }
    }
}

impl TableRow for FixtureRecord {
    fn columns() -> &'static [&'static str] {
        &["id", "name", "owner", "status", "severity"]
    }

    fn row_key(&self) -> RowKey {
        RowKey::new("FIX", self.id)
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.row_key().to_string()),
            TableCell::text(self.name.as_str()),
            TableCell::text(self.owner.as_str()),
            TableCell::Badge(self.status),
            TableCell::Badge(self.severity),
        ]
    }
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator of fixture records: same seed, same records.
#[derive(Debug, Clone)]
pub struct RecordFaker {
    rng: DeterministicRng,
    next_id: i64,
}

impl RecordFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn record(&mut self) -> FixtureRecord {
        let id = self.next_id;
        self.next_id += 1;
        let name = format!("{} {}", self.pick(&ADJECTIVES), self.pick(&NOUNS));
        let owner = format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES));
        FixtureRecord {
            id,
            name,
            owner,
            status: self.pick(&STATUSES),
            severity: self.pick(&SEVERITIES),
        }
    }

    pub fn records(&mut self, count: usize) -> Vec<FixtureRecord> {
        (0..count).map(|_| self.record()).collect()
    }

    /// A short lowercase fragment of a name or owner word, for queries that
    /// hit some records and miss others.
    pub fn query(&mut self) -> String {
        let word = match self.rng.int_n(3) {
            0 => self.pick(&ADJECTIVES),
            1 => self.pick(&NOUNS),
            _ => self.pick(&LAST_NAMES),
        };
        let len = 2 + self.rng.int_n(word.len() - 1);
        word[..len].to_lowercase()
    }

    pub fn status(&mut self) -> &'static str {
        self.pick(&STATUSES)
    }

    pub fn severity(&mut self) -> &'static str {
        self.pick(&SEVERITIES)
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.int_n(items.len())]
    }
}

/// Filterable list over fixture records: search on name and owner, filters
/// on status (index 0) and severity (index 1).
pub fn fixture_list(records: Vec<FixtureRecord>) -> FilterableList<FixtureRecord> {
    FilterableList::new("Fixtures", records)
        .search_on("name", |record: &FixtureRecord| record.name.as_str())
        .search_on("owner", |record: &FixtureRecord| record.owner.as_str())
        .filter_by(CategoryFilter::new(
            "Status",
            STATUS_SENTINEL,
            STATUSES,
            |record: &FixtureRecord| record.status,
        ))
        .filter_by(CategoryFilter::new(
            "Severity",
            SEVERITY_SENTINEL,
            SEVERITIES,
            |record: &FixtureRecord| record.severity,
        ))
}

/// The two-record dataset: Alpha (Active) and Beta (Inactive).
pub fn scenario_records() -> Vec<FixtureRecord> {
    vec![
        FixtureRecord::new(1, "Alpha", "Avery Walker", "Active", "High"),
        FixtureRecord::new(2, "Beta", "Jordan Hill", "Inactive", "Low"),
    ]
}

pub fn scenario_list() -> FilterableList<FixtureRecord> {
    fixture_list(scenario_records())
}

pub fn temp_export_dir() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let export_dir = dir.path().join("exports");
    Ok((dir, export_dir))
}

#[cfg(test)]
mod tests {
    use super::{RecordFaker, SEVERITIES, STATUSES, scenario_list};
    use std::collections::BTreeSet;

    #[test]
    fn same_seed_same_records() {
        let mut left = RecordFaker::new(42);
        let mut right = RecordFaker::new(42);
        assert_eq!(left.records(20), right.records(20));
    }

    #[test]
    fn records_draw_from_closed_sets_with_unique_ids() {
        let mut faker = RecordFaker::new(7);
        let records = faker.records(50);
        let ids = records.iter().map(|record| record.id).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), 50);
        for record in &records {
            assert!(STATUSES.contains(&record.status));
            assert!(SEVERITIES.contains(&record.severity));
            assert!(!record.name.is_empty());
        }
    }

    #[test]
    fn variety_across_seeds() {
        let names = (0_u64..10)
            .map(|seed| RecordFaker::new(seed).record().name)
            .collect::<BTreeSet<_>>();
        assert!(names.len() > 1);
    }

    #[test]
    fn queries_are_short_lowercase_fragments() {
        let mut faker = RecordFaker::new(3);
        for _ in 0..50 {
            let query = faker.query();
            assert!(query.len() >= 2);
            assert_eq!(query, query.to_lowercase());
        }
    }

    #[test]
    fn scenario_list_starts_unfiltered() {
        let list = scenario_list();
        assert_eq!(list.records().len(), 2);
        assert_eq!(list.summary().count_label(), "2 of 2");
    }
}
