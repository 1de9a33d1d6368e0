// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{CategoryFilter, ContractId, FilterableList, RowKey, TableCell, TableRow, VendorId};

use crate::{ContractStatus, Severity, VendorStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: &'static str,
    pub service: &'static str,
    pub contact: &'static str,
    pub risk: Severity,
    pub status: VendorStatus,
    pub assessment_score: u8,
    pub last_assessed: Option<Date>,
    pub data_access: &'static [&'static str],
}

impl TableRow for Vendor {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "vendor", "service", "contact", "risk", "status", "score", "assessed",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.name),
            TableCell::text(self.service),
            TableCell::text(self.contact),
            TableCell::Badge(self.risk.as_str()),
            TableCell::Badge(self.status.as_str()),
            TableCell::Percent(self.assessment_score),
            TableCell::Date(self.last_assessed),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.data_access
            .iter()
            .map(|data| format!("data access: {data}"))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub id: ContractId,
    pub vendor: &'static str,
    pub title: &'static str,
    pub status: ContractStatus,
    pub annual_value_cents: Option<i64>,
    pub renews: Date,
    pub dpa_signed: bool,
}

impl TableRow for Contract {
    fn columns() -> &'static [&'static str] {
        &["id", "vendor", "contract", "status", "annual value", "renews", "dpa"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.vendor),
            TableCell::text(self.title),
            TableCell::Badge(self.status.as_str()),
            TableCell::Money(self.annual_value_cents),
            TableCell::Date(Some(self.renews)),
            TableCell::text(if self.dpa_signed { "signed" } else { "missing" }),
        ]
    }
}

pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: VendorId::new(1),
            name: "Northwind Payroll",
            service: "Payroll processing",
            contact: "Helen Brooks",
            risk: Severity::Critical,
            status: VendorStatus::Active,
            assessment_score: 72,
            last_assessed: Some(date!(2026 - 04 - 11)),
            data_access: &["Employee SSNs", "Bank details"],
        },
        Vendor {
            id: VendorId::new(2),
            name: "Skyline Hosting",
            service: "Cloud infrastructure",
            contact: "Ravi Menon",
            risk: Severity::High,
            status: VendorStatus::Active,
            assessment_score: 88,
            last_assessed: Some(date!(2026 - 07 - 02)),
            data_access: &["Production databases"],
        },
        Vendor {
            id: VendorId::new(3),
            name: "Brightdesk",
            service: "Customer support desk",
            contact: "Olivia Hart",
            risk: Severity::Medium,
            status: VendorStatus::UnderReview,
            assessment_score: 55,
            last_assessed: None,
            data_access: &["Customer emails"],
        },
        Vendor {
            id: VendorId::new(4),
            name: "Paperleaf Print",
            service: "Marketing print runs",
            contact: "Gus Moreno",
            risk: Severity::Low,
            status: VendorStatus::Active,
            assessment_score: 91,
            last_assessed: Some(date!(2026 - 02 - 20)),
            data_access: &[],
        },
        Vendor {
            id: VendorId::new(5),
            name: "Quantex Analytics",
            service: "Product analytics",
            contact: "Mei Tanaka",
            risk: Severity::High,
            status: VendorStatus::Terminated,
            assessment_score: 40,
            last_assessed: Some(date!(2025 - 11 - 05)),
            data_access: &["Usage telemetry", "Customer emails"],
        },
    ]
}

pub fn vendor_risk() -> FilterableList<Vendor> {
    FilterableList::new("Vendor Risk", vendors())
        .search_on("vendor", |vendor: &Vendor| vendor.name)
        .search_on("service", |vendor: &Vendor| vendor.service)
        .search_on("contact", |vendor: &Vendor| vendor.contact)
        .filter_by(CategoryFilter::new(
            "Risk",
            "All Risk Levels",
            Severity::options(),
            |vendor: &Vendor| vendor.risk.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            VendorStatus::options(),
            |vendor: &Vendor| vendor.status.as_str(),
        ))
}

pub fn contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: ContractId::new(1),
            vendor: "Northwind Payroll",
            title: "Master services agreement",
            status: ContractStatus::Active,
            annual_value_cents: Some(8_400_000),
            renews: date!(2027 - 06 - 30),
            dpa_signed: true,
        },
        Contract {
            id: ContractId::new(2),
            vendor: "Skyline Hosting",
            title: "Enterprise hosting plan",
            status: ContractStatus::Renewal,
            annual_value_cents: Some(31_200_000),
            renews: date!(2026 - 12 - 01),
            dpa_signed: true,
        },
        Contract {
            id: ContractId::new(3),
            vendor: "Brightdesk",
            title: "Support seats",
            status: ContractStatus::Expiring,
            annual_value_cents: Some(1_980_000),
            renews: date!(2026 - 11 - 05),
            dpa_signed: false,
        },
        Contract {
            id: ContractId::new(4),
            vendor: "Quantex Analytics",
            title: "Analytics subscription",
            status: ContractStatus::Expired,
            annual_value_cents: None,
            renews: date!(2026 - 01 - 31),
            dpa_signed: false,
        },
    ]
}

pub fn contract_list() -> FilterableList<Contract> {
    FilterableList::new("Contracts", contracts())
        .search_on("vendor", |contract: &Contract| contract.vendor)
        .search_on("contract", |contract: &Contract| contract.title)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            ContractStatus::options(),
            |contract: &Contract| contract.status.as_str(),
        ))
}

#[cfg(test)]
mod tests {
    use super::{contracts, vendor_risk};
    use vigil_app::TableRow;

    #[test]
    fn vendor_search_covers_service_and_contact() {
        let mut list = vendor_risk();
        list.set_query("analytics");
        assert_eq!(list.summary().visible, 1);
        list.set_query("mei");
        assert_eq!(list.summary().visible, 1);
        list.select(1, "Active").expect("status option");
        assert!(list.summary().is_empty_result());
    }

    #[test]
    fn contract_cells_show_money_and_dpa() {
        let cells = contracts()[2]
            .cells()
            .iter()
            .map(|cell| cell.display())
            .collect::<Vec<_>>();
        assert_eq!(cells[4], "$19.8k");
        assert_eq!(cells[6], "missing");
    }
}
