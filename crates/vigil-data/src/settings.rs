// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use vigil_app::{
    CategoryFilter, CustomFieldId, DepartmentId, FilterableList, RowKey, SettingId, TableCell,
    TableRow,
};

use crate::{Activity, Enforcement, FieldType, Requirement, Toggle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub id: SettingId,
    pub section: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

impl TableRow for Setting {
    fn columns() -> &'static [&'static str] {
        &["section", "setting", "value"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.section),
            TableCell::text(self.name),
            TableCell::text(self.value),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubDepartment {
    pub name: &'static str,
    pub head: &'static str,
    pub headcount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: &'static str,
    pub head: &'static str,
    pub headcount: i64,
    pub status: Activity,
    pub children: &'static [SubDepartment],
}

impl TableRow for Department {
    fn columns() -> &'static [&'static str] {
        &["id", "department", "head", "headcount", "teams", "status"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.name),
            TableCell::text(self.head),
            TableCell::Count(self.headcount),
            TableCell::Count(self.children.len() as i64),
            TableCell::Badge(self.status.as_str()),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|child| format!("{}: {} ({} people)", child.name, child.head, child.headcount))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub id: CustomFieldId,
    pub name: &'static str,
    pub applies_to: &'static str,
    pub field_type: FieldType,
    pub requirement: Requirement,
    pub choices: &'static [&'static str],
}

impl TableRow for CustomField {
    fn columns() -> &'static [&'static str] {
        &["id", "field", "applies to", "type", "required"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.id.to_string()),
            TableCell::text(self.name),
            TableCell::text(self.applies_to),
            TableCell::text(self.field_type.as_str()),
            TableCell::Badge(self.requirement.as_str()),
        ]
    }

    fn details(&self) -> Vec<String> {
        self.choices
            .iter()
            .map(|choice| format!("choice: {choice}"))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MfaRule {
    pub id: SettingId,
    pub group: &'static str,
    pub method: &'static str,
    pub enforcement: Enforcement,
    pub members: i64,
    pub enrolled: u8,
}

impl TableRow for MfaRule {
    fn columns() -> &'static [&'static str] {
        &["group", "method", "enforcement", "members", "enrolled"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.group),
            TableCell::text(self.method),
            TableCell::Badge(self.enforcement.as_str()),
            TableCell::Count(self.members),
            TableCell::Percent(self.enrolled),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaasIntegration {
    pub id: SettingId,
    pub application: &'static str,
    pub owner: &'static str,
    pub sso: Toggle,
    pub provisioning: Toggle,
    pub seats: i64,
}

impl TableRow for SaasIntegration {
    fn columns() -> &'static [&'static str] {
        &["application", "owner", "sso", "provisioning", "seats"]
    }

    fn row_key(&self) -> RowKey {
        self.id.row_key()
    }

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::text(self.application),
            TableCell::text(self.owner),
            TableCell::Badge(self.sso.as_str()),
            TableCell::Badge(self.provisioning.as_str()),
            TableCell::Count(self.seats),
        ]
    }
}

pub fn general_settings() -> Vec<Setting> {
    let rows = [
        ("Organization", "Name", "Acme Health Partners"),
        ("Organization", "Primary framework", "SOC 2"),
        ("Organization", "Time zone", "America/Chicago"),
        ("Reviews", "Risk review cadence", "Quarterly"),
        ("Reviews", "Policy review cadence", "Annual"),
        ("Notifications", "Overdue digest", "Weekly, Monday 09:00"),
        ("Notifications", "Critical incident page", "Security on-call"),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(index, (section, name, value))| Setting {
            id: SettingId::new(index as i64 + 1),
            section,
            name,
            value,
        })
        .collect()
}

/// Read-only settings form: no criteria.
pub fn general_settings_list() -> FilterableList<Setting> {
    FilterableList::new("General Settings", general_settings())
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            id: DepartmentId::new(1),
            name: "Engineering",
            head: "Priya Shah",
            headcount: 79,
            status: Activity::Active,
            children: &[
                SubDepartment {
                    name: "Platform",
                    head: "Owen Clarke",
                    headcount: 24,
                },
                SubDepartment {
                    name: "Product Engineering",
                    head: "Lina Chen",
                    headcount: 43,
                },
                SubDepartment {
                    name: "Security Engineering",
                    head: "Marcus Lee",
                    headcount: 12,
                },
            ],
        },
        Department {
            id: DepartmentId::new(2),
            name: "Sales",
            head: "Nora Wilson",
            headcount: 35,
            status: Activity::Active,
            children: &[
                SubDepartment {
                    name: "Enterprise",
                    head: "Carl Dunn",
                    headcount: 14,
                },
                SubDepartment {
                    name: "Mid-Market",
                    head: "Bea Ramos",
                    headcount: 21,
                },
            ],
        },
        Department {
            id: DepartmentId::new(3),
            name: "Customer Success",
            head: "Tom Becker",
            headcount: 22,
            status: Activity::Active,
            children: &[],
        },
        Department {
            id: DepartmentId::new(4),
            name: "Finance",
            head: "Elena Garcia",
            headcount: 9,
            status: Activity::Active,
            children: &[SubDepartment {
                name: "Payroll",
                head: "Jane Porter",
                headcount: 3,
            }],
        },
        Department {
            id: DepartmentId::new(5),
            name: "Field Services",
            head: "Sam Ortiz",
            headcount: 0,
            status: Activity::Inactive,
            children: &[],
        },
    ]
}

pub fn department_tree() -> FilterableList<Department> {
    FilterableList::new("Departments", departments())
        .search_on("department", |department: &Department| department.name)
        .search_on("head", |department: &Department| department.head)
        .filter_by(CategoryFilter::new(
            "Status",
            "All Status",
            Activity::options(),
            |department: &Department| department.status.as_str(),
        ))
}

pub fn custom_fields() -> Vec<CustomField> {
    vec![
        CustomField {
            id: CustomFieldId::new(1),
            name: "Business unit",
            applies_to: "Risk",
            field_type: FieldType::Select,
            requirement: Requirement::Required,
            choices: &["Clinical", "Corporate", "Research"],
        },
        CustomField {
            id: CustomFieldId::new(2),
            name: "Data residency",
            applies_to: "Vendor",
            field_type: FieldType::Select,
            requirement: Requirement::Optional,
            choices: &["US", "EU", "APAC"],
        },
        CustomField {
            id: CustomFieldId::new(3),
            name: "Estimated loss",
            applies_to: "Risk",
            field_type: FieldType::Number,
            requirement: Requirement::Optional,
            choices: &[],
        },
        CustomField {
            id: CustomFieldId::new(4),
            name: "Regulator notified on",
            applies_to: "Incident",
            field_type: FieldType::Date,
            requirement: Requirement::Optional,
            choices: &[],
        },
        CustomField {
            id: CustomFieldId::new(5),
            name: "Evidence link",
            applies_to: "Control",
            field_type: FieldType::Text,
            requirement: Requirement::Required,
            choices: &[],
        },
    ]
}

pub fn custom_field_list() -> FilterableList<CustomField> {
    FilterableList::new("Custom Fields", custom_fields())
        .search_on("field", |field: &CustomField| field.name)
        .search_on("applies to", |field: &CustomField| field.applies_to)
        .filter_by(CategoryFilter::new(
            "Type",
            "All Types",
            FieldType::options(),
            |field: &CustomField| field.field_type.as_str(),
        ))
        .filter_by(CategoryFilter::new(
            "Required",
            "All Fields",
            Requirement::options(),
            |field: &CustomField| field.requirement.as_str(),
        ))
}

pub fn mfa_rules() -> Vec<MfaRule> {
    vec![
        MfaRule {
            id: SettingId::new(101),
            group: "Administrators",
            method: "Hardware key",
            enforcement: Enforcement::Enforced,
            members: 14,
            enrolled: 100,
        },
        MfaRule {
            id: SettingId::new(102),
            group: "All employees",
            method: "Authenticator app",
            enforcement: Enforcement::Enforced,
            members: 152,
            enrolled: 91,
        },
        MfaRule {
            id: SettingId::new(103),
            group: "Contractors",
            method: "Authenticator app",
            enforcement: Enforcement::Optional,
            members: 27,
            enrolled: 48,
        },
        MfaRule {
            id: SettingId::new(104),
            group: "Service accounts",
            method: "None",
            enforcement: Enforcement::Disabled,
            members: 8,
            enrolled: 0,
        },
    ]
}

pub fn mfa_management() -> FilterableList<MfaRule> {
    FilterableList::new("MFA Management", mfa_rules())
        .search_on("group", |rule: &MfaRule| rule.group)
        .filter_by(CategoryFilter::new(
            "Enforcement",
            "All Enforcement",
            Enforcement::options(),
            |rule: &MfaRule| rule.enforcement.as_str(),
        ))
}

pub fn saas_integrations() -> Vec<SaasIntegration> {
    vec![
        SaasIntegration {
            id: SettingId::new(201),
            application: "Google Workspace",
            owner: "Aisha Khan",
            sso: Toggle::Enabled,
            provisioning: Toggle::Enabled,
            seats: 180,
        },
        SaasIntegration {
            id: SettingId::new(202),
            application: "Salesforce",
            owner: "Nora Wilson",
            sso: Toggle::Enabled,
            provisioning: Toggle::Pending,
            seats: 40,
        },
        SaasIntegration {
            id: SettingId::new(203),
            application: "GitHub",
            owner: "Priya Shah",
            sso: Toggle::Enabled,
            provisioning: Toggle::Enabled,
            seats: 85,
        },
        SaasIntegration {
            id: SettingId::new(204),
            application: "Brightdesk",
            owner: "Tom Becker",
            sso: Toggle::Disabled,
            provisioning: Toggle::Disabled,
            seats: 25,
        },
    ]
}

pub fn saas_settings() -> FilterableList<SaasIntegration> {
    FilterableList::new("SaaS Settings", saas_integrations())
        .search_on("application", |integration: &SaasIntegration| {
            integration.application
        })
        .search_on("owner", |integration: &SaasIntegration| integration.owner)
        .filter_by(CategoryFilter::new(
            "SSO",
            "All SSO",
            Toggle::options(),
            |integration: &SaasIntegration| integration.sso.as_str(),
        ))
}

#[cfg(test)]
mod tests {
    use super::{departments, general_settings_list, saas_settings};
    use vigil_app::{ListView, TableRow};

    #[test]
    fn child_departments_render_as_details() {
        let records = departments();
        assert_eq!(
            records[1].details(),
            vec![
                "Enterprise: Carl Dunn (14 people)".to_owned(),
                "Mid-Market: Bea Ramos (21 people)".to_owned(),
            ]
        );
        assert!(records[2].details().is_empty());
    }

    #[test]
    fn general_settings_have_no_criteria() {
        let list = general_settings_list();
        assert!(ListView::search_labels(&list).is_empty());
        assert!(ListView::category_states(&list).is_empty());
        assert_eq!(list.summary().count_label(), "7 of 7");
    }

    #[test]
    fn saas_view_lists_applications_not_mfa_rules() {
        let list = saas_settings();
        assert_eq!(ListView::columns(&list)[0], "application");
        assert_eq!(list.summary().total, 4);
    }
}
