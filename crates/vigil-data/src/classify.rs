// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Closed classification sets the datasets draw from. The display string of
//! each variant is what badges look up and what category filters compare.

macro_rules! classification {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Display strings in declaration order, for filter options.
            pub fn options() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|value| value.as_str())
            }
        }
    };
}

classification!(Severity {
    Critical => "Critical",
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

classification!(RiskStatus {
    Open => "Open",
    Mitigating => "Mitigating",
    Accepted => "Accepted",
    Closed => "Closed",
});

classification!(RiskCategory {
    Operational => "Operational",
    Technical => "Technical",
    Compliance => "Compliance",
    ThirdParty => "Third Party",
    Financial => "Financial",
});

classification!(TreatmentStrategy {
    Mitigate => "Mitigate",
    Transfer => "Transfer",
    Avoid => "Avoid",
    Accept => "Accept",
});

classification!(
    /// Progress of a piece of assigned work.
    WorkStatus {
        NotStarted => "Not Started",
        Planned => "Planned",
        InProgress => "In Progress",
        Completed => "Completed",
        Overdue => "Overdue",
    }
);

classification!(IncidentStatus {
    Open => "Open",
    Investigating => "Investigating",
    Contained => "Contained",
    Resolved => "Resolved",
});

classification!(IncidentCategory {
    Phishing => "Phishing",
    Malware => "Malware",
    DataLeak => "Data Leak",
    UnauthorizedAccess => "Unauthorized Access",
    Outage => "Outage",
});

classification!(DocumentStatus {
    Draft => "Draft",
    UnderReview => "Under Review",
    Approved => "Approved",
    Published => "Published",
    Expired => "Expired",
});

classification!(PolicyCategory {
    AccessControl => "Access Control",
    DataProtection => "Data Protection",
    IncidentResponse => "Incident Response",
    AcceptableUse => "Acceptable Use",
    BusinessContinuity => "Business Continuity",
});

classification!(ApprovalStatus {
    Pending => "Pending",
    Approved => "Approved",
    Rejected => "Rejected",
    Expired => "Expired",
});

classification!(VendorStatus {
    Active => "Active",
    UnderReview => "Under Review",
    Terminated => "Terminated",
});

classification!(ContractStatus {
    Active => "Active",
    Renewal => "Renewal",
    Expiring => "Expiring",
    Expired => "Expired",
});

classification!(CampaignStatus {
    Planned => "Planned",
    Active => "Active",
    Completed => "Completed",
});

classification!(Framework {
    Soc2 => "SOC 2",
    Iso27001 => "ISO 27001",
    Hipaa => "HIPAA",
    PciDss => "PCI DSS",
    NistCsf => "NIST CSF",
});

classification!(FindingStatus {
    Open => "Open",
    InProgress => "In Progress",
    Resolved => "Resolved",
    Accepted => "Accepted",
});

classification!(Effectiveness {
    Effective => "Effective",
    PartiallyEffective => "Partially Effective",
    Ineffective => "Ineffective",
    NotTested => "Not Tested",
});

classification!(AssetType {
    Laptop => "Laptop",
    Server => "Server",
    Network => "Network",
    Saas => "SaaS",
    Mobile => "Mobile",
});

classification!(Compliance {
    Compliant => "Compliant",
    NonCompliant => "Non-Compliant",
});

classification!(Activity {
    Active => "Active",
    Inactive => "Inactive",
});

classification!(FieldType {
    Text => "Text",
    Number => "Number",
    Date => "Date",
    Select => "Select",
});

classification!(Requirement {
    Required => "Required",
    Optional => "Optional",
});

classification!(Enforcement {
    Enforced => "Enforced",
    Optional => "Optional",
    Disabled => "Disabled",
});

classification!(Toggle {
    Enabled => "Enabled",
    Disabled => "Disabled",
    Pending => "Pending",
});

#[cfg(test)]
mod tests {
    use super::{Framework, Severity, WorkStatus};

    #[test]
    fn parse_round_trips_display_strings() {
        for severity in Severity::ALL {
            assert_eq!(Severity::parse(severity.as_str()), Some(*severity));
        }
        assert_eq!(Framework::parse("ISO 27001"), Some(Framework::Iso27001));
        assert_eq!(WorkStatus::parse("in progress"), None);
    }

    #[test]
    fn options_follow_declaration_order() {
        assert_eq!(
            Severity::options().collect::<Vec<_>>(),
            vec!["Critical", "High", "Medium", "Low"]
        );
    }
}
