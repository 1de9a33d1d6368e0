// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{
    CategoryFilter, ExceptionId, FilterableList, PolicyId, RowKey, TableCell, TableRow,
};

use crate::{ApprovalStatus, DocumentStatus, PolicyCategory, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskArea {
    pub name: &'static str,
    pub rating: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub id: PolicyId,
    pub title: &'static str,
    pub owner: &'static str,
    pub category: PolicyCategory,
    pub status: DocumentStatus,
    pub version: &'static str,
    pub acknowledged: u8,
    pub next_review: Date,
    pub risk_areas: &'static [RiskArea],
}

impl TableRow for Policy {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "policy", "category", "owner", "version", "status", "acknowledged", "review",
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
            TableCell::text(self.owner),
            TableCell::text(self.version),
            TableCell::Badge(self.status.as_str()),
            TableCell::Percent(self.acknowledged),
            TableCell::Date(Some(self.next_review)),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.risk_areas
            .iter()
            .map(|area| format!("{} ({})", area.name, area.rating.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyException {
    pub id: ExceptionId,
    pub policy: &'static str,
    pub requester: &'static str,
    pub justification: &'static str,
    pub risk: Severity,
    pub status: ApprovalStatus,
    pub expires: Date,
}

impl TableRow for PolicyException {
    fn columns() -> &'static [&'static str] {
        &["id", "policy", "requester", "justification", "risk", "status", "expires"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.policy),
            TableCell::text(self.requester),
            TableCell::text(self.justification),
            TableCell::Badge(self.risk.as_str()),
            TableCell::Badge(self.status.as_str()),
            TableCell::Date(Some(self.expires)),
        ]
    }
}

pub fn policies() -> Vec<Policy> {
    vec![
        Policy {
            id: PolicyId::new(1),
            title: "Access Control Policy",
            owner: "Aisha Khan",
            category: PolicyCategory::AccessControl,
            status: DocumentStatus::Published,
            version: "3.2",
            acknowledged: 94,
            next_review: date!(2027 - 01 - 15),
            risk_areas: &[
                RiskArea {
                    name: "Privileged accounts",
                    rating: Severity::High,
                },
                RiskArea {
                    name: "Joiner-mover-leaver",
                    rating: Severity::Medium,
                },
            ],
        },
        Policy {
            id: PolicyId::new(2),
            title: "Data Classification Standard",
            owner: "Elena Garcia",
            category: PolicyCategory::DataProtection,
            status: DocumentStatus::UnderReview,
            version: "2.0",
            acknowledged: 61,
            next_review: date!(2026 - 11 - 01),
            risk_areas: &[
                RiskArea {
                    name: "Customer PII",
                    rating: Severity::Critical,
                },
                RiskArea {
                    name: "Source code",
                    rating: Severity::High,
                },
                RiskArea {
                    name: "Marketing assets",
                    rating: Severity::Low,
                },
            ],
        },
        Policy {
            id: PolicyId::new(3),
            title: "Incident Response Plan",
            owner: "Marcus Lee",
            category: PolicyCategory::IncidentResponse,
            status: DocumentStatus::Published,
            version: "4.1",
            acknowledged: 88,
            next_review: date!(2027 - 03 - 30),
            risk_areas: &[RiskArea {
                name: "Breach notification deadlines",
                rating: Severity::High,
            }],
        },
        Policy {
            id: PolicyId::new(4),
            title: "Acceptable Use Policy",
            owner: "Tom Becker",
            category: PolicyCategory::AcceptableUse,
            status: DocumentStatus::Expired,
            version: "1.7",
            acknowledged: 72,
            next_review: date!(2026 - 08 - 31),
            risk_areas: &[],
        },
        Policy {
            id: PolicyId::new(5),
            title: "Business Continuity Plan",
            owner: "Priya Shah",
            category: PolicyCategory::BusinessContinuity,
            status: DocumentStatus::Draft,
            version: "0.9",
            acknowledged: 0,
            next_review: date!(2026 - 12 - 01),
            risk_areas: &[
                RiskArea {
                    name: "Primary data center loss",
                    rating: Severity::Critical,
                },
                RiskArea {
                    name: "Key staff unavailability",
                    rating: Severity::Medium,
                },
            ],
        },
    ]
}

pub fn policy_tracker() -> FilterableList<Policy> {
    FilterableList::new("Policy Tracker", policies())
        .search_on("policy", |policy: &Policy| policy.title)
        .search_on("owner", |policy: &Policy| policy.owner)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            DocumentStatus::options(),
            |policy: &Policy| policy.status.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Category",
            "All Categories",
            PolicyCategory::options(),
            |policy: &Policy| policy.category.as_str(),
        ))
}

pub fn policy_exceptions() -> Vec<PolicyException> {
    vec![
        PolicyException {
            id: ExceptionId::new(1),
            policy: "Access Control Policy",
            requester: "Dev Patel",
            justification: "Shared admin for legacy ERP",
            risk: Severity::High,
            status: ApprovalStatus::Approved,
            expires: date!(2026 - 12 - 31),
        },
        PolicyException {
            id: ExceptionId::new(2),
            policy: "Acceptable Use Policy",
            requester: "Nora Wilson",
            justification: "Personal phone for on-call paging",
            risk: Severity::Low,
            status: ApprovalStatus::Pending,
            expires: date!(2027 - 02 - 28),
        },
        PolicyException {
            id: ExceptionId::new(3),
            policy: "Data Classification Standard",
            requester: "Sam Ortiz",
            justification: "Unlabelled analytics exports",
            risk: Severity::Medium,
            status: ApprovalStatus::Rejected,
            expires: date!(2026 - 10 - 31),
        },
        PolicyException {
            id: ExceptionId::new(4),
            policy: "Access Control Policy",
            requester: "Lina Chen",
            justification: "Break-glass account without MFA",
            risk: Severity::Critical,
            status: ApprovalStatus::Expired,
            expires: date!(2026 - 06 - 30),
        },
    ]
}

pub fn exception_register() -> FilterableList<PolicyException> {
    FilterableList::new("Policy Exceptions", policy_exceptions())
        .search_on("policy", |exception: &PolicyException| exception.policy)
        .search_on("requester", |exception: &PolicyException| exception.requester)
        .search_on("justification", |exception: &PolicyException| {
            exception.justification
        })
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            ApprovalStatus::options(),
            |exception: &PolicyException| exception.status.as_str(),
        ))
}
