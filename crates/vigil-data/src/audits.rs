// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{CategoryFilter, ControlId, FilterableList, FindingId, RowKey, TableCell, TableRow};

use crate::{Effectiveness, FindingStatus, Framework, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub id: FindingId,
    pub title: &'static str,
    pub framework: Framework,
    pub control: &'static str,
    pub owner: &'static str,
    pub severity: Severity,
    pub status: FindingStatus,
    pub due: Date,
}

impl TableRow for Finding {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "finding", "framework", "control", "owner", "severity", "status", "due",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.title),
            TableCell::text(self.framework.as_str()),
            TableCell::text(self.control),
            TableCell::text(self.owner),
            TableCell::Badge(self.severity.as_str()),
            TableCell::Badge(self.status.as_str()),
            TableCell::Date(Some(self.due)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    pub code: &'static str,
    pub name: &'static str,
    pub framework: Framework,
    pub owner: &'static str,
    pub effectiveness: Effectiveness,
    pub last_tested: Option<Date>,
    pub evidence: &'static [&'static str],
}

impl TableRow for Control {
    fn columns() -> &'static [&'static str] {
        &["id", "code", "control", "framework", "owner", "effectiveness", "tested"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.code),
            TableCell::text(self.name),
            TableCell::text(self.framework.as_str()),
            TableCell::text(self.owner),
            TableCell::Badge(self.effectiveness.as_str()),
            TableCell::Date(self.last_tested),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.evidence
            .iter()
            .map(|item| format!("evidence: {item}"))
            .collect()
    }
}

pub fn findings() -> Vec<Finding> {
    vec![
        Finding {
            id: FindingId::new(1),
            title: "Terminated users retain SSO access",
            framework: Framework::Soc2,
            control: "CC6.2",
            owner: "Aisha Khan",
            severity: Severity::High,
            status: FindingStatus::InProgress,
            due: date!(2026 - 11 - 20),
        },
        Finding {
            id: FindingId::new(2),
            title: "No annual restore test",
            framework: Framework::Iso27001,
            control: "A.8.13",
            owner: "Priya Shah",
            severity: Severity::Medium,
            status: FindingStatus::Open,
            due: date!(2026 - 12 - 31),
        },
        Finding {
            id: FindingId::new(3),
            title: "PHI in application logs",
            framework: Framework::Hipaa,
            control: "164.312(b)",
            owner: "Marcus Lee",
            severity: Severity::Critical,
            status: FindingStatus::Open,
            due: date!(2026 - 10 - 31),
        },
        Finding {
            id: FindingId::new(4),
            title: "Quarterly ASV scan missed",
            framework: Framework::PciDss,
            control: "11.3.2",
            owner: "Priya Shah",
            severity: Severity::High,
            status: FindingStatus::Resolved,
            due: date!(2026 - 08 - 15),
        },
        Finding {
            id: FindingId::new(5),
            title: "Asset inventory lacks owners",
            framework: Framework::NistCsf,
            control: "ID.AM-1",
            owner: "Tom Becker",
            severity: Severity::Low,
            status: FindingStatus::Accepted,
            due: date!(2027 - 03 - 31),
        },
    ]
}

pub fn audit_findings() -> FilterableList<Finding> {
    FilterableList::new("Audit Findings", findings())
        .search_on("finding", |finding: &Finding| finding.title)
        .search_on("control", |finding: &Finding| finding.control)
        .search_on("owner", |finding: &Finding| finding.owner)
        .filter_by(CategoryFilter::new(
            "Framework",
            "All Frameworks",
            Framework::options(),
            |finding: &Finding| finding.framework.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Severity",
            "All Severities",
            Severity::options(),
            |finding: &Finding| finding.severity.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            FindingStatus::options(),
            |finding: &Finding| finding.status.as_str(),
        ))
}

pub fn controls() -> Vec<Control> {
    vec![
        Control {
            id: ControlId::new(1),
            code: "AC-2",
            name: "Account management",
            framework: Framework::NistCsf,
            owner: "Aisha Khan",
            effectiveness: Effectiveness::PartiallyEffective,
            last_tested: Some(date!(2026 - 09 - 01)),
            evidence: &["Quarterly access review export", "Offboarding tickets sample"],
        },
        Control {
            id: ControlId::new(2),
            code: "CC7.2",
            name: "Security event monitoring",
            framework: Framework::Soc2,
            owner: "Marcus Lee",
            effectiveness: Effectiveness::Effective,
            last_tested: Some(date!(2026 - 07 - 14)),
            evidence: &["SIEM alert runbook"],
        },
        Control {
            id: ControlId::new(3),
            code: "A.8.13",
            name: "Information backup",
            framework: Framework::Iso27001,
            owner: "Priya Shah",
            effectiveness: Effectiveness::Ineffective,
            last_tested: Some(date!(2026 - 05 - 22)),
            evidence: &[],
        },
        Control {
            id: ControlId::new(4),
            code: "3.5.1",
            name: "Key management for stored card data",
            framework: Framework::PciDss,
            owner: "Elena Garcia",
            effectiveness: Effectiveness::NotTested,
            last_tested: None,
            evidence: &[],
        },
        Control {
            id: ControlId::new(5),
            code: "164.308(a)(5)",
            name: "Security awareness training",
            framework: Framework::Hipaa,
            owner: "Tom Becker",
            effectiveness: Effectiveness::Effective,
            last_tested: Some(date!(2026 - 06 - 30)),
            evidence: &["LMS completion report"],
        },
    ]
}

pub fn control_library() -> FilterableList<Control> {
    FilterableList::new("Control Library", controls())
        .search_on("code", |control: &Control| control.code)
        .search_on("control", |control: &Control| control.name)
        .filter_by(CategoryFilter::new(
            "Framework",
            "All Frameworks",
            Framework::options(),
            |control: &Control| control.framework.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Effectiveness",
            "All Ratings",
            Effectiveness::options(),
            |control: &Control| control.effectiveness.as_str(),
        ))
}

#[cfg(test)]
mod tests {
    use super::{audit_findings, control_library};

    #[test]
    fn findings_search_control_references() {
        let mut list = audit_findings();
        list.set_query("cc6");
        let titles = list.visible().map(|finding| finding.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Terminated users retain SSO access"]);
    }

    #[test]
    fn controls_filter_by_framework() {
        let mut list = control_library();
        assert_eq!(list.cycle(0), Ok("SOC 2"));
        assert_eq!(list.summary().count_label(), "1 of 5");
    }
}
