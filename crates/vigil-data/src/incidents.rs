// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{CategoryFilter, FilterableList, IncidentId, PlaybookId, RowKey, TableCell, TableRow};

use crate::{DocumentStatus, IncidentCategory, IncidentStatus, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    pub id: IncidentId,
    pub title: &'static str,
    pub reporter: &'static str,
    pub assignee: &'static str,
    pub category: IncidentCategory,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub reported: Date,
    pub systems: &'static [&'static str],
}

impl TableRow for Incident {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "incident", "category", "severity", "status", "assignee", "reported",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.title),
            TableCell::text(self.category.as_str()),
            TableCell::Badge(self.severity.as_str()),
            TableCell::Badge(self.status.as_str()),
            TableCell::text(self.assignee),
            TableCell::Date(Some(self.reported)),
        ]
    }

    fn details(&self) -> Vec<String> {
        let mut lines = vec![format!("reported by {}", self.reporter)];
        lines.extend(
            self.systems
                .iter()
                .map(|system| format!("affected: {system}")),
        );
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playbook {
    pub id: PlaybookId,
    pub name: &'static str,
    pub scenario: IncidentCategory,
    pub owner: &'static str,
    pub status: DocumentStatus,
    pub steps: i64,
    pub last_exercised: Option<Date>,
}

impl TableRow for Playbook {
    fn columns() -> &'static [&'static str] {
        &["id", "playbook", "scenario", "owner", "status", "steps", "exercised"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.name),
            TableCell::text(self.scenario.as_str()),
            TableCell::text(self.owner),
            TableCell::Badge(self.status.as_str()),
            TableCell::Count(self.steps),
            TableCell::Date(self.last_exercised),
        ]
    }
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: IncidentId::new(1),
            title: "CFO wire-transfer phishing email",
            reporter: "Jane Porter",
            assignee: "Marcus Lee",
            category: IncidentCategory::Phishing,
            severity: Severity::High,
            status: IncidentStatus::Resolved,
            reported: date!(2026 - 08 - 04),
            systems: &["Exchange Online"],
        },
        Incident {
            id: IncidentId::new(2),
            title: "Cryptominer on build agent",
            reporter: "CI monitoring",
            assignee: "Priya Shah",
            category: IncidentCategory::Malware,
            severity: Severity::Critical,
            status: IncidentStatus::Contained,
            reported: date!(2026 - 09 - 12),
            systems: &["build-agent-03", "artifact cache"],
        },
        Incident {
            id: IncidentId::new(3),
            title: "Customer list shared publicly",
            reporter: "Tom Becker",
            assignee: "Elena Garcia",
            category: IncidentCategory::DataLeak,
            severity: Severity::High,
            status: IncidentStatus::Investigating,
            reported: date!(2026 - 10 - 01),
            systems: &["Google Drive"],
        },
        Incident {
            id: IncidentId::new(4),
            title: "Former contractor VPN login",
            reporter: "SIEM alert",
            assignee: "Aisha Khan",
            category: IncidentCategory::UnauthorizedAccess,
            severity: Severity::Medium,
            status: IncidentStatus::Open,
            reported: date!(2026 - 10 - 09),
            systems: &["VPN concentrator", "HR directory"],
        },
        Incident {
            id: IncidentId::new(5),
            title: "Ticketing portal outage",
            reporter: "Status page",
            assignee: "Aisha Khan",
            category: IncidentCategory::Outage,
            severity: Severity::Low,
            status: IncidentStatus::Resolved,
            reported: date!(2026 - 07 - 22),
            systems: &[],
        },
        Incident {
            id: IncidentId::new(6),
            title: "Invoice malware attachment",
            reporter: "Jane Porter",
            assignee: "Marcus Lee",
            category: IncidentCategory::Phishing,
            severity: Severity::Medium,
            status: IncidentStatus::Open,
            reported: date!(2026 - 10 - 14),
            systems: &["Exchange Online", "finance-laptop-12"],
        },
    ]
}

pub fn incident_log() -> FilterableList<Incident> {
    FilterableList::new("Incident Log", incidents())
        .search_on("incident", |incident: &Incident| incident.title)
        .search_on("reporter", |incident: &Incident| incident.reporter)
        .search_on("assignee", |incident: &Incident| incident.assignee)
        .filter_by(CategoryFilter::new(
            "Severity",
            "All Severities",
            Severity::options(),
            |incident: &Incident| incident.severity.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            IncidentStatus::options(),
            |incident: &Incident| incident.status.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Category",
            "All Categories",
            IncidentCategory::options(),
            |incident: &Incident| incident.category.as_str(),
        ))
}

pub fn playbooks() -> Vec<Playbook> {
    vec![
        Playbook {
            id: PlaybookId::new(1),
            name: "Phishing triage",
            scenario: IncidentCategory::Phishing,
            owner: "Marcus Lee",
            status: DocumentStatus::Published,
            steps: 9,
            last_exercised: Some(date!(2026 - 06 - 18)),
        },
        Playbook {
            id: PlaybookId::new(2),
            name: "Ransomware containment",
            scenario: IncidentCategory::Malware,
            owner: "Priya Shah",
            status: DocumentStatus::Approved,
            steps: 14,
            last_exercised: Some(date!(2026 - 03 - 09)),
        },
        Playbook {
            id: PlaybookId::new(3),
            name: "Data breach notification",
            scenario: IncidentCategory::DataLeak,
            owner: "Elena Garcia",
            status: DocumentStatus::UnderReview,
            steps: 11,
            last_exercised: None,
        },
        Playbook {
            id: PlaybookId::new(4),
            name: "Compromised account lockout",
            scenario: IncidentCategory::UnauthorizedAccess,
            owner: "Aisha Khan",
            status: DocumentStatus::Draft,
            steps: 6,
            last_exercised: None,
        },
    ]
}

pub fn playbook_library() -> FilterableList<Playbook> {
    FilterableList::new("Playbooks", playbooks())
        .search_on("playbook", |playbook: &Playbook| playbook.name)
        .search_on("owner", |playbook: &Playbook| playbook.owner)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            DocumentStatus::options(),
            |playbook: &Playbook| playbook.status.as_str(),
        ))
}

#[cfg(test)]
mod tests {
    use super::{incident_log, incidents};
    use vigil_app::TableRow;

    #[test]
    fn details_name_reporter_and_affected_systems() {
        let records = incidents();
        assert_eq!(
            records[1].details(),
            vec![
                "reported by CI monitoring".to_owned(),
                "affected: build-agent-03".to_owned(),
                "affected: artifact cache".to_owned(),
            ]
        );
    }

    #[test]
    fn severity_and_category_filters_combine() {
        let mut list = incident_log();
        list.select(2, "Phishing").expect("category option");
        assert_eq!(list.summary().visible, 2);
        list.select(0, "High").expect("severity option");
        let titles = list.visible().map(|incident| incident.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["CFO wire-transfer phishing email"]);
    }
}
