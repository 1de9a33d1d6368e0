// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{CategoryFilter, FilterableList, RiskId, RowKey, TableCell, TableRow, TreatmentId};

use crate::{RiskCategory, RiskStatus, Severity, TreatmentStrategy, WorkStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Risk {
    pub id: RiskId,
    pub title: &'static str,
    pub owner: &'static str,
    pub category: RiskCategory,
    pub likelihood: Severity,
    pub impact: Severity,
    pub status: RiskStatus,
    pub next_review: Date,
}

impl Risk {
    /// Likelihood times impact on a 1..=16 scale.
    pub fn score(&self) -> i64 {
        severity_weight(self.likelihood) * severity_weight(self.impact)
    }
}

fn severity_weight(severity: Severity) -> i64 {
    match severity {
        Severity::Critical => 4,
        Severity::High => 3,
        Severity::Medium => 2,
        Severity::Low => 1,
    }
}

impl TableRow for Risk {
    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "risk",
            "owner",
            "category",
            "likelihood",
            "impact",
            "score",
            "status",
            "review",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.title),
            TableCell::text(self.owner),
            TableCell::text(self.category.as_str()),
            TableCell::Badge(self.likelihood.as_str()),
            TableCell::Badge(self.impact.as_str()),
            TableCell::Count(self.score()),
            TableCell::Badge(self.status.as_str()),
            TableCell::Date(Some(self.next_review)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treatment {
    pub id: TreatmentId,
    pub risk: &'static str,
    pub action: &'static str,
    pub owner: &'static str,
    pub strategy: TreatmentStrategy,
    pub status: WorkStatus,
    pub progress: u8,
    pub due: Date,
    pub budget_cents: Option<i64>,
}

impl TableRow for Treatment {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "action", "risk", "owner", "strategy", "status", "progress", "due", "budget",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.action),
            TableCell::text(self.risk),
            TableCell::text(self.owner),
            TableCell::text(self.strategy.as_str()),
            TableCell::Badge(self.status.as_str()),
            TableCell::Percent(self.progress),
            TableCell::Date(Some(self.due)),
            TableCell::Money(self.budget_cents),
        ]
    }
}

pub fn risks() -> Vec<Risk> {
    vec![
        Risk {
            id: RiskId::new(1),
            title: "Ransomware on file servers",
            owner: "Priya Shah",
            category: RiskCategory::Technical,
            likelihood: Severity::High,
            impact: Severity::Critical,
            status: RiskStatus::Mitigating,
            next_review: date!(2026 - 11 - 02),
        },
        Risk {
            id: RiskId::new(2),
            title: "Phishing credential theft",
            owner: "Marcus Lee",
            category: RiskCategory::Operational,
            likelihood: Severity::Critical,
            impact: Severity::High,
            status: RiskStatus::Open,
            next_review: date!(2026 - 10 - 28),
        },
        Risk {
            id: RiskId::new(3),
            title: "Payroll vendor breach",
            owner: "Elena Garcia",
            category: RiskCategory::ThirdParty,
            likelihood: Severity::Medium,
            impact: Severity::High,
            status: RiskStatus::Open,
            next_review: date!(2026 - 12 - 15),
        },
        Risk {
            id: RiskId::new(4),
            title: "Unencrypted backups offsite",
            owner: "Priya Shah",
            category: RiskCategory::Technical,
            likelihood: Severity::Low,
            impact: Severity::High,
            status: RiskStatus::Accepted,
            next_review: date!(2027 - 01 - 20),
        },
        Risk {
            id: RiskId::new(5),
            title: "GDPR data subject request backlog",
            owner: "Tom Becker",
            category: RiskCategory::Compliance,
            likelihood: Severity::Medium,
            impact: Severity::Medium,
            status: RiskStatus::Mitigating,
            next_review: date!(2026 - 11 - 30),
        },
        Risk {
            id: RiskId::new(6),
            title: "Single cloud region outage",
            owner: "Aisha Khan",
            category: RiskCategory::Operational,
            likelihood: Severity::Low,
            impact: Severity::Critical,
            status: RiskStatus::Open,
            next_review: date!(2027 - 02 - 10),
        },
        Risk {
            id: RiskId::new(7),
            title: "Cyber insurance coverage gap",
            owner: "Elena Garcia",
            category: RiskCategory::Financial,
            likelihood: Severity::Medium,
            impact: Severity::Medium,
            status: RiskStatus::Closed,
            next_review: date!(2027 - 03 - 01),
        },
        Risk {
            id: RiskId::new(8),
            title: "Shadow IT SaaS sign-ups",
            owner: "Marcus Lee",
            category: RiskCategory::Compliance,
            likelihood: Severity::High,
            impact: Severity::Low,
            status: RiskStatus::Open,
            next_review: date!(2026 - 11 - 12),
        },
    ]
}

pub fn risk_register() -> FilterableList<Risk> {
    FilterableList::new("Risk Register", risks())
        .search_on("risk", |risk: &Risk| risk.title)
        .search_on("owner", |risk: &Risk| risk.owner)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            RiskStatus::options(),
            |risk: &Risk| risk.status.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Impact",
            "All Impact",
            Severity::options(),
            |risk: &Risk| risk.impact.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Category",
            "All Categories",
            RiskCategory::options(),
            |risk: &Risk| risk.category.as_str(),
        ))
}

pub fn treatments() -> Vec<Treatment> {
    vec![
        Treatment {
            id: TreatmentId::new(1),
            risk: "Ransomware on file servers",
            action: "Deploy EDR to all servers",
            owner: "Priya Shah",
            strategy: TreatmentStrategy::Mitigate,
            status: WorkStatus::InProgress,
            progress: 65,
            due: date!(2026 - 11 - 15),
            budget_cents: Some(4_800_000),
        },
        Treatment {
            id: TreatmentId::new(2),
            risk: "Phishing credential theft",
            action: "Enforce phishing-resistant MFA",
            owner: "Marcus Lee",
            strategy: TreatmentStrategy::Mitigate,
            status: WorkStatus::Overdue,
            progress: 40,
            due: date!(2026 - 09 - 30),
            budget_cents: Some(1_250_000),
        },
        Treatment {
            id: TreatmentId::new(3),
            risk: "Payroll vendor breach",
            action: "Add breach notification clause",
            owner: "Elena Garcia",
            strategy: TreatmentStrategy::Transfer,
            status: WorkStatus::Planned,
            progress: 0,
            due: date!(2027 - 01 - 31),
            budget_cents: None,
        },
        Treatment {
            id: TreatmentId::new(4),
            risk: "Unencrypted backups offsite",
            action: "Document risk acceptance",
            owner: "Priya Shah",
            strategy: TreatmentStrategy::Accept,
            status: WorkStatus::Completed,
            progress: 100,
            due: date!(2026 - 06 - 30),
            budget_cents: None,
        },
        Treatment {
            id: TreatmentId::new(5),
            risk: "Cyber insurance coverage gap",
            action: "Purchase excess cyber policy",
            owner: "Elena Garcia",
            strategy: TreatmentStrategy::Transfer,
            status: WorkStatus::Completed,
            progress: 100,
            due: date!(2026 - 05 - 01),
            budget_cents: Some(9_500_000),
        },
        Treatment {
            id: TreatmentId::new(6),
            risk: "Shadow IT SaaS sign-ups",
            action: "Block unsanctioned OAuth apps",
            owner: "Marcus Lee",
            strategy: TreatmentStrategy::Avoid,
            status: WorkStatus::NotStarted,
            progress: 0,
            due: date!(2026 - 12 - 20),
            budget_cents: Some(300_000),
        },
    ]
}

pub fn treatment_plan() -> FilterableList<Treatment> {
    FilterableList::new("Treatments", treatments())
        .search_on("action", |treatment: &Treatment| treatment.action)
        .search_on("risk", |treatment: &Treatment| treatment.risk)
        .search_on("owner", |treatment: &Treatment| treatment.owner)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            WorkStatus::options(),
            |treatment: &Treatment| treatment.status.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Strategy",
            "All Strategies",
            TreatmentStrategy::options(),
            |treatment: &Treatment| treatment.strategy.as_str(),
        ))
}
