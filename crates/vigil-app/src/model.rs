// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Closed set of every view the dashboard can mount, top-level shells and
/// leaves alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViewLabel {
    Overview,
    Risk,
    RiskRegister,
    RiskTreatments,
    Incidents,
    IncidentLog,
    Playbooks,
    Policies,
    PolicyTracker,
    PolicyExceptions,
    Vendors,
    VendorRisk,
    VendorContracts,
    Training,
    TrainingTracker,
    PhishingCampaigns,
    Audits,
    AuditFindings,
    ControlLibrary,
    Assets,
    AssetInventory,
    Vulnerabilities,
    Settings,
    GeneralSettings,
    Departments,
    CustomFields,
    MfaManagement,
    SaasSettings,
}

impl ViewLabel {
    pub const ALL: [Self; 28] = [
        Self::Overview,
        Self::Risk,
        Self::RiskRegister,
        Self::RiskTreatments,
        Self::Incidents,
        Self::IncidentLog,
        Self::Playbooks,
        Self::Policies,
        Self::PolicyTracker,
        Self::PolicyExceptions,
        Self::Vendors,
        Self::VendorRisk,
        Self::VendorContracts,
        Self::Training,
        Self::TrainingTracker,
        Self::PhishingCampaigns,
        Self::Audits,
        Self::AuditFindings,
        Self::ControlLibrary,
        Self::Assets,
        Self::AssetInventory,
        Self::Vulnerabilities,
        Self::Settings,
        Self::GeneralSettings,
        Self::Departments,
        Self::CustomFields,
        Self::MfaManagement,
        Self::SaasSettings,
    ];

    /// Tabs of the top-level shell, in strip order.
    pub const ROOT: [Self; 9] = [
        Self::Overview,
        Self::Risk,
        Self::Incidents,
        Self::Policies,
        Self::Vendors,
        Self::Training,
        Self::Audits,
        Self::Assets,
        Self::Settings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Risk => "risk",
            Self::RiskRegister => "risk-register",
            Self::RiskTreatments => "risk-treatments",
            Self::Incidents => "incidents",
            Self::IncidentLog => "incident-log",
            Self::Playbooks => "playbooks",
            Self::Policies => "policies",
            Self::PolicyTracker => "policy-tracker",
            Self::PolicyExceptions => "policy-exceptions",
            Self::Vendors => "vendors",
            Self::VendorRisk => "vendor-risk",
            Self::VendorContracts => "vendor-contracts",
            Self::Training => "training",
            Self::TrainingTracker => "training-tracker",
            Self::PhishingCampaigns => "phishing-campaigns",
            Self::Audits => "audits",
            Self::AuditFindings => "audit-findings",
            Self::ControlLibrary => "control-library",
            Self::Assets => "assets",
            Self::AssetInventory => "asset-inventory",
            Self::Vulnerabilities => "vulnerabilities",
            Self::Settings => "settings",
            Self::GeneralSettings => "general-settings",
            Self::Departments => "departments",
            Self::CustomFields => "custom-fields",
            Self::MfaManagement => "mfa-management",
            Self::SaasSettings => "saas-settings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(value))
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Risk => "Risk",
            Self::RiskRegister => "Risk Register",
            Self::RiskTreatments => "Treatments",
            Self::Incidents => "Incidents",
            Self::IncidentLog => "Incident Log",
            Self::Playbooks => "Playbooks",
            Self::Policies => "Policies",
            Self::PolicyTracker => "Policy Tracker",
            Self::PolicyExceptions => "Exceptions",
            Self::Vendors => "Vendors",
            Self::VendorRisk => "Vendor Risk",
            Self::VendorContracts => "Contracts",
            Self::Training => "Training",
            Self::TrainingTracker => "Training Tracker",
            Self::PhishingCampaigns => "Phishing",
            Self::Audits => "Audits",
            Self::AuditFindings => "Findings",
            Self::ControlLibrary => "Controls",
            Self::Assets => "Assets",
            Self::AssetInventory => "Inventory",
            Self::Vulnerabilities => "Vulnerabilities",
            Self::Settings => "Settings",
            Self::GeneralSettings => "General",
            Self::Departments => "Departments",
            Self::CustomFields => "Custom Fields",
            Self::MfaManagement => "MFA",
            Self::SaasSettings => "SaaS Settings",
        }
    }
}

/// Host-handled actions a screen may offer. The dashboard only raises the
/// request; the runtime decides what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenAction {
    Export,
    Upload,
    Create,
    Schedule,
}

impl ScreenAction {
    pub const ALL: [Self; 4] = [Self::Export, Self::Upload, Self::Create, Self::Schedule];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Upload => "upload",
            Self::Create => "new",
            Self::Schedule => "schedule",
        }
    }

    pub const fn key(self) -> char {
        match self {
            Self::Export => 'e',
            Self::Upload => 'u',
            Self::Create => 'a',
            Self::Schedule => 's',
        }
    }

    pub fn for_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Search,
    Chips,
}

#[cfg(test)]
mod tests {
    use super::{ScreenAction, ViewLabel};
    use std::collections::BTreeSet;

    #[test]
    fn label_slugs_round_trip_and_are_unique() {
        let mut seen = BTreeSet::new();
        for label in ViewLabel::ALL {
            assert!(seen.insert(label.as_str()), "duplicate slug {}", label.as_str());
            assert_eq!(ViewLabel::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(
            ViewLabel::parse("  Risk-Register "),
            Some(ViewLabel::RiskRegister)
        );
        assert_eq!(ViewLabel::parse("dashboard"), None);
    }

    #[test]
    fn action_keys_are_distinct() {
        for action in ScreenAction::ALL {
            assert_eq!(ScreenAction::for_key(action.key()), Some(action));
        }
        assert_eq!(ScreenAction::for_key('z'), None);
    }
}
