// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Label to view wiring for the whole dashboard.

use std::rc::Rc;
use tracing::info;
use vigil_app::{
    ListScreen, ListView, MissingViewPolicy, RouterError, Screen, ScreenAction, ScreenRegistry,
    ScreenRouter, ViewLabel,
};

use crate::{assets, audits, incidents, overview, policies, risk, settings, training, vendors};

use ScreenAction::{Create, Export, Schedule, Upload};

/// Sub-tabs of each top-level shell; `None` for leaf views.
pub fn shell_tabs(label: ViewLabel) -> Option<&'static [ViewLabel]> {
    let tabs: &'static [ViewLabel] = match label {
        ViewLabel::Risk => &[ViewLabel::RiskRegister, ViewLabel::RiskTreatments],
        ViewLabel::Incidents => &[ViewLabel::IncidentLog, ViewLabel::Playbooks],
        ViewLabel::Policies => &[ViewLabel::PolicyTracker, ViewLabel::PolicyExceptions],
        ViewLabel::Vendors => &[ViewLabel::VendorRisk, ViewLabel::VendorContracts],
        ViewLabel::Training => &[ViewLabel::TrainingTracker, ViewLabel::PhishingCampaigns],
        ViewLabel::Audits => &[ViewLabel::AuditFindings, ViewLabel::ControlLibrary],
        ViewLabel::Assets => &[ViewLabel::AssetInventory, ViewLabel::Vulnerabilities],
        ViewLabel::Settings => &[
            ViewLabel::GeneralSettings,
            ViewLabel::Departments,
            ViewLabel::CustomFields,
            ViewLabel::MfaManagement,
            ViewLabel::SaasSettings,
        ],
        _ => return None,
    };
    Some(tabs)
}

/// Top-level tabs with their sub-tabs, in strip order.
pub fn outline() -> Vec<(ViewLabel, &'static [ViewLabel])> {
    ViewLabel::ROOT
        .into_iter()
        .map(|label| (label, shell_tabs(label).unwrap_or(&[])))
        .collect()
}

pub fn registry(policy: MissingViewPolicy) -> Rc<ScreenRegistry> {
    let mut registry = ScreenRegistry::new(policy);
    registry
        .register(ViewLabel::Overview, |_| {
            Ok(Screen::Summary(overview::overview()))
        })
        .register(ViewLabel::RiskRegister, |_| {
            list(risk::risk_register(), &[Export, Create])
        })
        .register(ViewLabel::RiskTreatments, |_| {
            list(risk::treatment_plan(), &[Export, Create])
        })
        .register(ViewLabel::IncidentLog, |_| {
            list(incidents::incident_log(), &[Export, Create])
        })
        .register(ViewLabel::Playbooks, |_| {
            list(incidents::playbook_library(), &[Create, Upload])
        })
        .register(ViewLabel::PolicyTracker, |_| {
            list(policies::policy_tracker(), &[Export, Upload, Create])
        })
        .register(ViewLabel::PolicyExceptions, |_| {
            list(policies::exception_register(), &[Create])
        })
        .register(ViewLabel::VendorRisk, |_| {
            list(vendors::vendor_risk(), &[Export, Create, Schedule])
        })
        .register(ViewLabel::VendorContracts, |_| {
            list(vendors::contract_list(), &[Upload])
        })
        .register(ViewLabel::TrainingTracker, |_| {
            list(training::training_tracker(), &[Export, Schedule])
        })
        .register(ViewLabel::PhishingCampaigns, |_| {
            list(training::phishing_campaigns(), &[Schedule, Export])
        })
        .register(ViewLabel::AuditFindings, |_| {
            list(audits::audit_findings(), &[Export, Create])
        })
        .register(ViewLabel::ControlLibrary, |_| {
            list(audits::control_library(), &[Export])
        })
        .register(ViewLabel::AssetInventory, |_| {
            list(assets::asset_inventory(), &[Export, Upload])
        })
        .register(ViewLabel::Vulnerabilities, |_| {
            list(assets::vulnerability_list(), &[Export])
        })
        .register(ViewLabel::GeneralSettings, |_| {
            list(settings::general_settings_list(), &[])
        })
        .register(ViewLabel::Departments, |_| {
            list(settings::department_tree(), &[Create])
        })
        .register(ViewLabel::CustomFields, |_| {
            list(settings::custom_field_list(), &[Create])
        })
        .register(ViewLabel::MfaManagement, |_| {
            list(settings::mfa_management(), &[Export])
        })
        .register(ViewLabel::SaasSettings, |_| {
            list(settings::saas_settings(), &[])
        });

    for label in ViewLabel::ROOT {
        if let Some(tabs) = shell_tabs(label) {
            registry.register(label, move |registry| shell(registry, tabs));
        }
    }
    Rc::new(registry)
}

pub fn root_router(
    registry: Rc<ScreenRegistry>,
    start: Option<ViewLabel>,
) -> Result<ScreenRouter, RouterError> {
    ScreenRouter::with_initial(registry, ViewLabel::ROOT.to_vec(), start)
}

/// Visits every tab of every shell under the fail-fast policy, so each
/// view is built at least once. Returns how many views were checked.
pub fn check_catalog() -> Result<usize, RouterError> {
    let mut root = root_router(registry(MissingViewPolicy::FailFast), None)?;
    let mut checked = 0;
    for label in ViewLabel::ROOT {
        root.select(label)?;
        checked += 1;
        if let Some(Screen::Shell(shell)) = root.active_view_mut() {
            for tab in shell.tabs().to_vec() {
                shell.select(tab)?;
                checked += 1;
            }
        }
    }
    info!(checked, "view catalog checked");
    Ok(checked)
}

fn list(
    list: impl ListView + 'static,
    actions: &'static [ScreenAction],
) -> Result<Screen, RouterError> {
    Ok(Screen::List(ListScreen::new(list, actions)))
}

fn shell(registry: &Rc<ScreenRegistry>, tabs: &'static [ViewLabel]) -> Result<Screen, RouterError> {
    let router = ScreenRouter::new(Rc::clone(registry), tabs.to_vec())?;
    Ok(Screen::Shell(Box::new(router)))
}

#[cfg(test)]
mod tests {
    use super::{check_catalog, outline, registry, root_router, shell_tabs};
    use vigil_app::{
        MissingViewPolicy, RouterError, Screen, ScreenAction, ViewLabel, focused_label,
        focused_screen,
    };

    #[test]
    fn check_visits_every_label_once() -> Result<(), RouterError> {
        assert_eq!(check_catalog()?, ViewLabel::ALL.len());
        Ok(())
    }

    #[test]
    fn outline_lists_root_tabs_in_order() {
        let labels = outline()
            .into_iter()
            .map(|(label, _)| label)
            .collect::<Vec<_>>();
        assert_eq!(labels, ViewLabel::ROOT.to_vec());
        assert!(shell_tabs(ViewLabel::Overview).is_none());
    }

    #[test]
    fn start_view_selects_shell_and_its_first_subtab() -> Result<(), RouterError> {
        let root = root_router(
            registry(MissingViewPolicy::FailFast),
            Some(ViewLabel::Vendors),
        )?;
        assert_eq!(root.active_label(), ViewLabel::Vendors);
        assert_eq!(focused_label(&root), ViewLabel::VendorRisk);
        let screen = focused_screen(&root).expect("vendor risk mounted");
        assert!(screen.offers(ScreenAction::Schedule));
        Ok(())
    }

    #[test]
    fn saas_tab_mounts_the_saas_view() -> Result<(), RouterError> {
        let registry = registry(MissingViewPolicy::FailFast);
        let screen = registry
            .build(ViewLabel::SaasSettings)
            .expect("saas registered")?;
        let list = screen.list().expect("saas is a list");
        assert_eq!(list.title(), "SaaS Settings");
        assert!(matches!(screen, Screen::List(_)));
        Ok(())
    }
}
