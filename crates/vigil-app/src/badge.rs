// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeTone {
    Danger,
    Warning,
    Caution,
    Success,
    Info,
    Neutral,
}

/// Classification value to tone. Keys are the exact strings the datasets
/// classify with; unknown values render neutral.
const BADGE_TONES: &[(&str, BadgeTone)] = &[
    // severity / likelihood
    ("Critical", BadgeTone::Danger),
    ("High", BadgeTone::Warning),
    ("Medium", BadgeTone::Caution),
    ("Low", BadgeTone::Success),
    ("Informational", BadgeTone::Info),
    // lifecycle status
    ("Open", BadgeTone::Danger),
    ("Investigating", BadgeTone::Warning),
    ("Contained", BadgeTone::Caution),
    ("In Progress", BadgeTone::Caution),
    ("Mitigating", BadgeTone::Caution),
    ("Resolved", BadgeTone::Success),
    ("Closed", BadgeTone::Success),
    ("Accepted", BadgeTone::Info),
    ("Planned", BadgeTone::Info),
    ("Overdue", BadgeTone::Danger),
    ("Not Started", BadgeTone::Neutral),
    ("Completed", BadgeTone::Success),
    // policy and control posture
    ("Draft", BadgeTone::Neutral),
    ("Under Review", BadgeTone::Caution),
    ("Approved", BadgeTone::Success),
    ("Published", BadgeTone::Success),
    ("Retired", BadgeTone::Neutral),
    ("Expired", BadgeTone::Danger),
    ("Pending", BadgeTone::Caution),
    ("Rejected", BadgeTone::Danger),
    ("Effective", BadgeTone::Success),
    ("Partially Effective", BadgeTone::Caution),
    ("Ineffective", BadgeTone::Danger),
    ("Not Tested", BadgeTone::Neutral),
    ("Compliant", BadgeTone::Success),
    ("Non-Compliant", BadgeTone::Danger),
    // vendor and contract state
    ("Active", BadgeTone::Success),
    ("Inactive", BadgeTone::Neutral),
    ("Expiring", BadgeTone::Warning),
    ("Renewal", BadgeTone::Caution),
    ("Terminated", BadgeTone::Neutral),
    // toggles
    ("Enabled", BadgeTone::Success),
    ("Disabled", BadgeTone::Neutral),
    ("Enforced", BadgeTone::Success),
    ("Optional", BadgeTone::Caution),
    ("Required", BadgeTone::Info),
];

pub fn badge_tone(value: &str) -> BadgeTone {
    BADGE_TONES
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, tone)| *tone)
        .unwrap_or(BadgeTone::Neutral)
}

#[cfg(test)]
mod tests {
    use super::{BADGE_TONES, BadgeTone, badge_tone};
    use std::collections::BTreeSet;

    #[test]
    fn known_values_map_to_their_tone() {
        assert_eq!(badge_tone("Critical"), BadgeTone::Danger);
        assert_eq!(badge_tone("Resolved"), BadgeTone::Success);
        assert_eq!(badge_tone("Under Review"), BadgeTone::Caution);
    }

    #[test]
    fn unknown_and_differently_cased_values_are_neutral() {
        assert_eq!(badge_tone("critical"), BadgeTone::Neutral);
        assert_eq!(badge_tone("Quarantined"), BadgeTone::Neutral);
    }

    #[test]
    fn table_keys_are_unique() {
        let keys: BTreeSet<&str> = BADGE_TONES.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), BADGE_TONES.len());
    }
}
