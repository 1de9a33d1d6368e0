// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use time::macros::date;
use vigil_app::{CampaignId, CategoryFilter, CourseId, FilterableList, RowKey, TableCell, TableRow};

use crate::{CampaignStatus, WorkStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseAssignment {
    pub id: CourseId,
    pub course: &'static str,
    pub department: &'static str,
    pub assigned: i64,
    pub completion: u8,
    pub status: WorkStatus,
    pub due: Date,
}

impl TableRow for CourseAssignment {
    fn columns() -> &'static [&'static str] {
        &["id", "course", "department", "assigned", "completion", "status", "due"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.course),
            TableCell::text(self.department),
            TableCell::Count(self.assigned),
            TableCell::Percent(self.completion),
            TableCell::Badge(self.status.as_str()),
            TableCell::Date(Some(self.due)),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentResult {
    pub department: &'static str,
    pub sent: i64,
    pub clicked: i64,
    pub reported: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: &'static str,
    pub template: &'static str,
    pub status: CampaignStatus,
    pub launched: Option<Date>,
    pub results: &'static [DepartmentResult],
}

impl Campaign {
    pub fn sent(&self) -> i64 {
        self.results.iter().map(|result| result.sent).sum()
    }

    pub fn click_rate(&self) -> u8 {
        rate(self.results.iter().map(|result| result.clicked).sum(), self.sent())
    }

    pub fn report_rate(&self) -> u8 {
        rate(self.results.iter().map(|result| result.reported).sum(), self.sent())
    }
}

fn rate(part: i64, whole: i64) -> u8 {
    if whole <= 0 {
        return 0;
    }
    ((part * 100 + whole / 2) / whole).clamp(0, 100) as u8
}

impl TableRow for Campaign {
    fn columns() -> &'static [&'static str] {
        &[
            "id", "campaign", "template", "status", "launched", "sent", "clicked", "reported",
        ]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.name),
            TableCell::text(self.template),
            TableCell::Badge(self.status.as_str()),
            TableCell::Date(self.launched),
            TableCell::Count(self.sent()),
            TableCell::Percent(self.click_rate()),
            TableCell::Percent(self.report_rate()),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|result| {
                format!(
                    "{}: {} sent, {} clicked ({}%), {} reported",
                    result.department,
                    result.sent,
                    result.clicked,
                    rate(result.clicked, result.sent),
                    result.reported,
                )
            })
            .collect()
    }
}

pub fn course_assignments() -> Vec<CourseAssignment> {
    vec![
        CourseAssignment {
            id: CourseId::new(1),
            course: "Security Awareness 2026",
            department: "Engineering",
            assigned: 48,
            completion: 92,
            status: WorkStatus::InProgress,
            due: date!(2026 - 11 - 30),
        },
        CourseAssignment {
            id: CourseId::new(2),
            course: "Security Awareness 2026",
            department: "Sales",
            assigned: 35,
            completion: 54,
            status: WorkStatus::Overdue,
            due: date!(2026 - 09 - 30),
        },
        CourseAssignment {
            id: CourseId::new(3),
            course: "HIPAA Privacy Basics",
            department: "Customer Success",
            assigned: 22,
            completion: 100,
            status: WorkStatus::Completed,
            due: date!(2026 - 06 - 15),
        },
        CourseAssignment {
            id: CourseId::new(4),
            course: "Secure Coding Fundamentals",
            department: "Engineering",
            assigned: 31,
            completion: 0,
            status: WorkStatus::NotStarted,
            due: date!(2027 - 01 - 31),
        },
        CourseAssignment {
            id: CourseId::new(5),
            course: "PCI Cardholder Data Handling",
            department: "Finance",
            assigned: 9,
            completion: 78,
            status: WorkStatus::InProgress,
            due: date!(2026 - 12 - 15),
        },
    ]
}

pub fn training_tracker() -> FilterableList<CourseAssignment> {
    FilterableList::new("Training Tracker", course_assignments())
        .search_on("course", |assignment: &CourseAssignment| assignment.course)
        .search_on("department", |assignment: &CourseAssignment| {
            assignment.department
        })
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            WorkStatus::options(),
            |assignment: &CourseAssignment| assignment.status.as_str(),
        ))
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: CampaignId::new(1),
            name: "Q2 payroll lure",
            template: "Updated direct deposit form",
            status: CampaignStatus::Completed,
            launched: Some(date!(2026 - 05 - 06)),
            results: &[
                DepartmentResult {
                    department: "Engineering",
                    sent: 48,
                    clicked: 3,
                    reported: 30,
                },
                DepartmentResult {
                    department: "Sales",
                    sent: 35,
                    clicked: 9,
                    reported: 12,
                },
                DepartmentResult {
                    department: "Finance",
                    sent: 9,
                    clicked: 2,
                    reported: 5,
                },
            ],
        },
        Campaign {
            id: CampaignId::new(2),
            name: "Shared document notice",
            template: "A file was shared with you",
            status: CampaignStatus::Active,
            launched: Some(date!(2026 - 10 - 13)),
            results: &[
                DepartmentResult {
                    department: "Customer Success",
                    sent: 22,
                    clicked: 4,
                    reported: 6,
                },
                DepartmentResult {
                    department: "Sales",
                    sent: 35,
                    clicked: 5,
                    reported: 14,
                },
            ],
        },
        Campaign {
            id: CampaignId::new(3),
            name: "Holiday gift card",
            template: "Claim your holiday bonus",
            status: CampaignStatus::Planned,
            launched: None,
            results: &[],
        },
    ]
}

pub fn phishing_campaigns() -> FilterableList<Campaign> {
    FilterableList::new("Phishing Campaigns", campaigns())
        .search_on("campaign", |campaign: &Campaign| campaign.name)
        .search_on("template", |campaign: &Campaign| campaign.template)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            CampaignStatus::options(),
            |campaign: &Campaign| campaign.status.as_str(),
        ))
}

#[cfg(test)]
mod tests {
    use super::{campaigns, training_tracker};
    use vigil_app::TableRow;

    #[test]
    fn campaign_rates_roll_up_department_results() {
        let records = campaigns();
        assert_eq!(records[0].sent(), 92);
        assert_eq!(records[0].click_rate(), 15);
        assert_eq!(records[0].report_rate(), 51);
        assert_eq!(records[2].click_rate(), 0);
    }

    #[test]
    fn department_results_become_detail_lines() {
        let details = campaigns()[1].details();
        assert_eq!(
            details[0],
            "Customer Success: 22 sent, 4 clicked (18%), 6 reported"
        );
        assert_eq!(details.len(), 2);
    }

    #[test]
    fn tracker_searches_department() {
        let mut list = training_tracker();
        list.set_query("engineering");
        assert_eq!(list.summary().count_label(), "2 of 5");
    }
}
