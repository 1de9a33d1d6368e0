// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use vigil_app::{BadgeTone, ScreenAction, SummaryCard, SummaryScreen};

use crate::{
    DocumentStatus, Effectiveness, FindingStatus, IncidentStatus, RiskStatus, Severity,
    VendorStatus, WorkStatus, audits, incidents, policies, risk, training, vendors,
};

pub const OVERVIEW_ACTIONS: &[ScreenAction] = &[ScreenAction::Export];

/// Headline metrics rolled up from every dataset.
pub fn overview() -> SummaryScreen {
    SummaryScreen {
        title: "Compliance Overview",
        cards: vec![
            open_risks(),
            active_incidents(),
            policy_acknowledgement(),
            training_completion(),
            vendor_exposure(),
            open_findings(),
            control_effectiveness(),
        ],
        actions: OVERVIEW_ACTIONS,
    }
}

fn open_risks() -> SummaryCard {
    let risks = risk::risks();
    let open = risks
        .iter()
        .filter(|risk| matches!(risk.status, RiskStatus::Open | RiskStatus::Mitigating))
        .collect::<Vec<_>>();
    let high = open
        .iter()
        .filter(|risk| matches!(risk.impact, Severity::Critical | Severity::High))
        .count();
    SummaryCard {
        label: "Open risks",
        value: open.len().to_string(),
        detail: format!("{high} high impact of {} registered", risks.len()),
        progress: None,
        tone: tone_for_count(high),
    }
}

fn active_incidents() -> SummaryCard {
    let incidents = incidents::incidents();
    let active = incidents
        .iter()
        .filter(|incident| incident.status != IncidentStatus::Resolved)
        .collect::<Vec<_>>();
    let critical = active
        .iter()
        .filter(|incident| incident.severity == Severity::Critical)
        .count();
    SummaryCard {
        label: "Active incidents",
        value: active.len().to_string(),
        detail: format!("{critical} critical"),
        progress: None,
        tone: if critical > 0 {
            BadgeTone::Danger
        } else {
            tone_for_count(active.len())
        },
    }
}

fn policy_acknowledgement() -> SummaryCard {
    let published = policies::policies()
        .into_iter()
        .filter(|policy| policy.status == DocumentStatus::Published)
        .map(|policy| policy.acknowledged)
        .collect::<Vec<_>>();
    let average = average_percent(&published);
    SummaryCard {
        label: "Policy acknowledgement",
        value: format!("{average}%"),
        detail: format!("across {} published policies", published.len()),
        progress: Some(average),
        tone: tone_for_percent(average),
    }
}

fn training_completion() -> SummaryCard {
    let assignments = training::course_assignments();
    let assigned = assignments
        .iter()
        .map(|assignment| assignment.assigned)
        .sum::<i64>();
    let completed = assignments
        .iter()
        .map(|assignment| assignment.assigned * i64::from(assignment.completion))
        .sum::<i64>();
    let percent = if assigned == 0 {
        0
    } else {
        (completed / assigned).clamp(0, 100) as u8
    };
    let overdue = assignments
        .iter()
        .filter(|assignment| assignment.status == WorkStatus::Overdue)
        .count();
    SummaryCard {
        label: "Training completion",
        value: format!("{percent}%"),
        detail: format!("{overdue} overdue assignments"),
        progress: Some(percent),
        tone: tone_for_percent(percent),
    }
}

fn vendor_exposure() -> SummaryCard {
    let active = vendors::vendors()
        .into_iter()
        .filter(|vendor| vendor.status != VendorStatus::Terminated)
        .collect::<Vec<_>>();
    let high = active
        .iter()
        .filter(|vendor| matches!(vendor.risk, Severity::Critical | Severity::High))
        .count();
    SummaryCard {
        label: "High-risk vendors",
        value: high.to_string(),
        detail: format!("of {} active vendors", active.len()),
        progress: None,
        tone: tone_for_count(high),
    }
}

fn open_findings() -> SummaryCard {
    let findings = audits::findings();
    let open = findings
        .iter()
        .filter(|finding| matches!(finding.status, FindingStatus::Open | FindingStatus::InProgress))
        .count();
    SummaryCard {
        label: "Open audit findings",
        value: open.to_string(),
        detail: format!("of {} raised", findings.len()),
        progress: None,
        tone: tone_for_count(open),
    }
}

fn control_effectiveness() -> SummaryCard {
    let controls = audits::controls();
    let effective = controls
        .iter()
        .filter(|control| control.effectiveness == Effectiveness::Effective)
        .count();
    let percent = if controls.is_empty() {
        0
    } else {
        (effective * 100 / controls.len()) as u8
    };
    SummaryCard {
        label: "Effective controls",
        value: format!("{effective}/{}", controls.len()),
        detail: "tested and rated effective".to_owned(),
        progress: Some(percent),
        tone: tone_for_percent(percent),
    }
}

fn average_percent(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let total = values.iter().map(|value| u32::from(*value)).sum::<u32>();
    (total / values.len() as u32) as u8
}

fn tone_for_percent(percent: u8) -> BadgeTone {
    match percent {
        90..=100 => BadgeTone::Success,
        70..=89 => BadgeTone::Caution,
        _ => BadgeTone::Danger,
    }
}

fn tone_for_count(count: usize) -> BadgeTone {
    match count {
        0 => BadgeTone::Success,
        1..=2 => BadgeTone::Caution,
        _ => BadgeTone::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::{average_percent, overview};
    use vigil_app::BadgeTone;

    #[test]
    fn cards_roll_up_the_datasets() {
        let screen = overview();
        let cards = screen
            .cards
            .iter()
            .map(|card| (card.label, card.value.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            cards,
            vec![
                ("Open risks", "6"),
                ("Active incidents", "4"),
                ("Policy acknowledgement", "91%"),
                ("Training completion", "63%"),
                ("High-risk vendors", "2"),
                ("Open audit findings", "3"),
                ("Effective controls", "2/5"),
            ]
        );
        assert_eq!(screen.cards[1].tone, BadgeTone::Danger);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average_percent(&[]), 0);
        assert_eq!(average_percent(&[90, 95]), 92);
    }
}
