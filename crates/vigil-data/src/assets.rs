// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{
    AssetId, CategoryFilter, FilterableList, RowKey, TableCell, TableRow, VulnerabilityId,
};

use crate::{AssetType, Compliance, FindingStatus, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: AssetId,
    pub hostname: &'static str,
    pub asset_type: AssetType,
    pub owner: &'static str,
    pub location: &'static str,
    pub compliance: Compliance,
    pub last_seen: Date,
    pub issues: &'static [&'static str],
}

impl TableRow for Asset {
    fn columns() -> &'static [&'static str] {
        &["id", "asset", "type", "owner", "location", "compliance", "last seen"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.hostname),
            TableCell::text(self.asset_type.as_str()),
            TableCell::text(self.owner),
            TableCell::text(self.location),
            TableCell::Badge(self.compliance.as_str()),
            TableCell::Date(Some(self.last_seen)),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.issues.iter().map(|issue| format!("issue: {issue}")).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vulnerability {
    pub id: VulnerabilityId,
    pub cve: &'static str,
    pub title: &'static str,
    pub asset: &'static str,
    pub cvss: &'static str,
    pub severity: Severity,
    pub status: FindingStatus,
    pub discovered: Date,
}

impl TableRow for Vulnerability {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "cve", "vulnerability", "asset", "cvss", "severity", "status", "discovered",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.cve),
            TableCell::text(self.title),
            TableCell::text(self.asset),
            TableCell::text(self.cvss),
            TableCell::Badge(self.severity.as_str()),
            TableCell::Badge(self.status.as_str()),
            TableCell::Date(Some(self.discovered)),
        ]
    }
}

pub fn assets() -> Vec<Asset> {
    vec![
        Asset {
            id: AssetId::new(1),
            hostname: "fin-laptop-12",
            asset_type: AssetType::Laptop,
            owner: "Jane Porter",
            location: "Chicago",
            compliance: Compliance::NonCompliant,
            last_seen: date!(2026 - 10 - 17),
            issues: &["Disk encryption disabled", "OS two versions behind"],
        },
        Asset {
            id: AssetId::new(2),
            hostname: "db-prod-01",
            asset_type: AssetType::Server,
            owner: "Priya Shah",
            location: "us-east-1",
            compliance: Compliance::Compliant,
            last_seen: date!(2026 - 10 - 19),
            issues: &[],
        },
        Asset {
            id: AssetId::new(3),
            hostname: "edge-fw-02",
            asset_type: AssetType::Network,
            owner: "Aisha Khan",
            location: "Chicago",
            compliance: Compliance::Compliant,
            last_seen: date!(2026 - 10 - 19),
            issues: &[],
        },
        Asset {
            id: AssetId::new(4),
            hostname: "crm.example-saas.com",
            asset_type: AssetType::Saas,
            owner: "Tom Becker",
            location: "Vendor hosted",
            compliance: Compliance::NonCompliant,
            last_seen: date!(2026 - 10 - 18),
            issues: &["SSO not enforced"],
        },
        Asset {
            id: AssetId::new(5),
            hostname: "sales-iphone-07",
            asset_type: AssetType::Mobile,
            owner: "Nora Wilson",
            location: "Remote",
            compliance: Compliance::Compliant,
            last_seen: date!(2026 - 10 - 11),
            issues: &[],
        },
        Asset {
            id: AssetId::new(6),
            hostname: "build-agent-03",
            asset_type: AssetType::Server,
            owner: "Priya Shah",
            location: "us-east-1",
            compliance: Compliance::NonCompliant,
            last_seen: date!(2026 - 10 - 19),
            issues: &["Unapproved mining binary removed", "Agent missing EDR sensor"],
        },
    ]
}

pub fn asset_inventory() -> FilterableList<Asset> {
    FilterableList::new("Asset Inventory", assets())
        .search_on("asset", |asset: &Asset| asset.hostname)
        .search_on("owner", |asset: &Asset| asset.owner)
        .search_on("location", |asset: &Asset| asset.location)
        .filter_by(CategoryFilter::new(
            "Type",
            "All Types",
            AssetType::options(),
            |asset: &Asset| asset.asset_type.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Compliance",
            "All Compliance",
            Compliance::options(),
            |asset: &Asset| asset.compliance.as_str(),
        ))
}

pub fn vulnerabilities() -> Vec<Vulnerability> {
    vec![
        Vulnerability {
            id: VulnerabilityId::new(1),
            cve: "CVE-2026-21412",
            title: "OpenSSH pre-auth race condition",
            asset: "db-prod-01",
            cvss: "8.1",
            severity: Severity::High,
            status: FindingStatus::InProgress,
            discovered: date!(2026 - 09 - 28),
        },
        Vulnerability {
            id: VulnerabilityId::new(2),
            cve: "CVE-2026-10033",
            title: "Firewall admin UI auth bypass",
            asset: "edge-fw-02",
            cvss: "9.8",
            severity: Severity::Critical,
            status: FindingStatus::Open,
            discovered: date!(2026 - 10 - 15),
        },
        Vulnerability {
            id: VulnerabilityId::new(3),
            cve: "CVE-2025-48811",
            title: "Outdated browser engine",
            asset: "fin-laptop-12",
            cvss: "6.5",
            severity: Severity::Medium,
            status: FindingStatus::Open,
            discovered: date!(2026 - 08 - 02),
        },
        Vulnerability {
            id: VulnerabilityId::new(4),
            cve: "CVE-2025-30150",
            title: "Container runtime escape",
            asset: "build-agent-03",
            cvss: "7.8",
            severity: Severity::High,
            status: FindingStatus::Resolved,
            discovered: date!(2026 - 09 - 12),
        },
        Vulnerability {
            id: VulnerabilityId::new(5),
            cve: "CVE-2024-99120",
            title: "Verbose TLS error pages",
            asset: "crm.example-saas.com",
            cvss: "3.1",
            severity: Severity::Low,
            status: FindingStatus::Accepted,
            discovered: date!(2026 - 03 - 19),
        },
    ]
}

pub fn vulnerability_list() -> FilterableList<Vulnerability> {
    FilterableList::new("Vulnerabilities", vulnerabilities())
        .search_on("cve", |vulnerability: &Vulnerability| vulnerability.cve)
        .search_on("vulnerability", |vulnerability: &Vulnerability| {
            vulnerability.title
        })
        .search_on("asset", |vulnerability: &Vulnerability| vulnerability.asset)
        .filter_by(CategoryFilter::new(
            "Severity",
            "All Severities",
            Severity::options(),
            |vulnerability: &Vulnerability| vulnerability.severity.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            FindingStatus::options(),
            |vulnerability: &Vulnerability| vulnerability.status.as_str(),
        ))
}
