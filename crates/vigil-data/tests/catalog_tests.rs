// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use vigil_app::{CriterionSlot, MissingViewPolicy, Screen, ViewLabel};
use vigil_data::{outline, registry};

fn leaf_labels() -> Vec<ViewLabel> {
    outline()
        .into_iter()
        .flat_map(|(root, tabs)| {
            if tabs.is_empty() {
                vec![root]
            } else {
                tabs.to_vec()
            }
        })
        .collect()
}

#[test]
fn every_label_belongs_to_the_outline_once() {
    let mut seen = BTreeSet::new();
    for (root, tabs) in outline() {
        assert!(seen.insert(root), "{root:?} listed twice");
        for tab in tabs {
            assert!(seen.insert(*tab), "{tab:?} listed twice");
        }
    }
    assert_eq!(seen.len(), ViewLabel::ALL.len());
}

#[test]
fn row_keys_are_unique_within_each_list() -> Result<()> {
    let registry = registry(MissingViewPolicy::FailFast);
    for label in leaf_labels() {
        let screen = registry
            .build(label)
            .with_context(|| format!("{label:?} not registered"))??;
        let Some(list) = screen.list() else {
            continue;
        };
        let rows = list.rows();
        let keys = rows.iter().map(|row| row.key).collect::<BTreeSet<_>>();
        assert_eq!(keys.len(), rows.len(), "{label:?} repeats a row key");
        assert!(!rows.is_empty(), "{label:?} has no records");
    }
    Ok(())
}

#[test]
fn category_options_partition_each_dataset() -> Result<()> {
    let registry = registry(MissingViewPolicy::FailFast);
    for label in leaf_labels() {
        let mut screen = registry
            .build(label)
            .with_context(|| format!("{label:?} not registered"))??;
        let Some(list) = screen.list_mut() else {
            continue;
        };
        let total = list.summary().total;
        for (index, state) in list.category_states().into_iter().enumerate() {
            let mut covered = 0;
            for option in &state.options {
                list.select_category(index, option)?;
                covered += list.summary().visible;
            }
            list.clear(CriterionSlot::Category(index))?;
            assert_eq!(
                covered, total,
                "{label:?} {} options miss some records",
                state.label
            );
        }
    }
    Ok(())
}

#[test]
fn every_leaf_is_a_list_except_the_overview() -> Result<()> {
    let registry = registry(MissingViewPolicy::FailFast);
    let overview = registry
        .build(ViewLabel::Overview)
        .context("overview not registered")??;
    assert!(matches!(overview, Screen::Summary(_)));

    for label in leaf_labels()
        .into_iter()
        .filter(|label| *label != ViewLabel::Overview)
    {
        let screen = registry
            .build(label)
            .with_context(|| format!("{label:?} not registered"))??;
        assert!(screen.list().is_some(), "{label:?} is not a list");
    }
    Ok(())
}

#[test]
fn placeholder_policy_still_builds_the_full_tree() -> Result<()> {
    let registry = registry(MissingViewPolicy::Placeholder);
    let mut root = vigil_data::root_router(registry, Some(ViewLabel::Settings))?;
    assert_eq!(vigil_app::focused_label(&root), ViewLabel::GeneralSettings);
    root.select_prev()?;
    assert_eq!(root.active_label(), ViewLabel::Assets);
    Ok(())
}
