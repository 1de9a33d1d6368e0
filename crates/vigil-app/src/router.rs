// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Tab shell: a fixed list of labels, one of them active, and exactly one
//! mounted view built from the label's registered factory.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::RouterError;

/// What a router does with a label that has no registered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingViewPolicy {
    /// Refuse to build the router.
    FailFast,
    /// Build it and show a "view not found" placeholder for that tab.
    Placeholder,
}

impl MissingViewPolicy {
    /// Fail fast in debug builds, degrade to the placeholder in release.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::FailFast
        } else {
            Self::Placeholder
        }
    }
}

pub type ViewFactory<L, V> = Box<dyn Fn(&Rc<ViewRegistry<L, V>>) -> Result<V, RouterError>>;

/// Label to view-factory map shared by every router in one view tree.
/// Factories receive the registry so a view can host a nested router.
pub struct ViewRegistry<L, V> {
    policy: MissingViewPolicy,
    factories: BTreeMap<L, ViewFactory<L, V>>,
}

impl<L: Copy + Ord + fmt::Debug, V> ViewRegistry<L, V> {
    pub fn new(policy: MissingViewPolicy) -> Self {
        Self {
            policy,
            factories: BTreeMap::new(),
        }
    }

    pub fn register<F>(&mut self, label: L, factory: F) -> &mut Self
    where
        F: Fn(&Rc<ViewRegistry<L, V>>) -> Result<V, RouterError> + 'static,
    {
        self.factories.insert(label, Box::new(factory));
        self
    }

    pub fn policy(&self) -> MissingViewPolicy {
        self.policy
    }

    pub fn contains(&self, label: L) -> bool {
        self.factories.contains_key(&label)
    }

    pub fn labels(&self) -> impl Iterator<Item = L> + '_ {
        self.factories.keys().copied()
    }

    pub fn build(self: &Rc<Self>, label: L) -> Option<Result<V, RouterError>> {
        self.factories.get(&label).map(|factory| factory(self))
    }
}

pub enum Mounted<V> {
    View(V),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterEvent<L> {
    Unmounted(L),
    Mounted(L),
    PlaceholderShown(L),
}

pub struct ViewRouter<L, V> {
    registry: Rc<ViewRegistry<L, V>>,
    tabs: Vec<L>,
    active: usize,
    mounted: Mounted<V>,
}

impl<L: Copy + Ord + fmt::Debug, V> ViewRouter<L, V> {
    /// Builds a router that starts on the first tab.
    pub fn new(registry: Rc<ViewRegistry<L, V>>, tabs: Vec<L>) -> Result<Self, RouterError> {
        Self::with_initial(registry, tabs, None)
    }

    pub fn with_initial(
        registry: Rc<ViewRegistry<L, V>>,
        tabs: Vec<L>,
        initial: Option<L>,
    ) -> Result<Self, RouterError> {
        if tabs.is_empty() {
            return Err(RouterError::NoTabs);
        }
        for (index, label) in tabs.iter().enumerate() {
            if tabs[..index].contains(label) {
                return Err(RouterError::DuplicateTab {
                    label: format!("{label:?}"),
                });
            }
            if !registry.contains(*label) {
                match registry.policy() {
                    MissingViewPolicy::FailFast => {
                        return Err(RouterError::UnregisteredView {
                            label: format!("{label:?}"),
                        });
                    }
                    MissingViewPolicy::Placeholder => {
                        warn!(tab = ?label, "tab has no registered view; placeholder shown");
                    }
                }
            }
        }

        let active = match initial {
            None => 0,
            Some(label) => match tabs.iter().position(|tab| *tab == label) {
                Some(index) => index,
                None if registry.policy() == MissingViewPolicy::FailFast => {
                    return Err(RouterError::InitialNotInTabs {
                        label: format!("{label:?}"),
                    });
                }
                None => {
                    warn!(tab = ?label, "initial tab not in tab list; using first tab");
                    0
                }
            },
        };

        let mounted = mount(&registry, tabs[active])?;
        Ok(Self {
            registry,
            tabs,
            active,
            mounted,
        })
    }

    pub fn tabs(&self) -> &[L] {
        &self.tabs
    }

    pub fn active_label(&self) -> L {
        self.tabs[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, label: L) -> bool {
        self.active_label() == label
    }

    /// The mounted view, or `None` when the placeholder is showing.
    pub fn active_view(&self) -> Option<&V> {
        match &self.mounted {
            Mounted::View(view) => Some(view),
            Mounted::Missing => None,
        }
    }

    pub fn active_view_mut(&mut self) -> Option<&mut V> {
        match &mut self.mounted {
            Mounted::View(view) => Some(view),
            Mounted::Missing => None,
        }
    }

    /// Makes `label` the active tab, dropping the previous view and mounting
    /// a fresh one. Selecting the active tab again changes nothing.
    pub fn select(&mut self, label: L) -> Result<Vec<RouterEvent<L>>, RouterError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| *tab == label)
            .ok_or_else(|| RouterError::NotATab {
                label: format!("{label:?}"),
            })?;
        self.activate(index)
    }

    pub fn select_next(&mut self) -> Result<Vec<RouterEvent<L>>, RouterError> {
        self.rotate(1)
    }

    pub fn select_prev(&mut self) -> Result<Vec<RouterEvent<L>>, RouterError> {
        self.rotate(-1)
    }

    fn rotate(&mut self, delta: isize) -> Result<Vec<RouterEvent<L>>, RouterError> {
        let len = self.tabs.len() as isize;
        let next = (self.active as isize + delta).rem_euclid(len) as usize;
        self.activate(next)
    }

    fn activate(&mut self, index: usize) -> Result<Vec<RouterEvent<L>>, RouterError> {
        if index == self.active {
            return Ok(Vec::new());
        }

        let previous = self.active_label();
        let next = self.tabs[index];
        let mounted = mount(&self.registry, next)?;
        let shown = match mounted {
            Mounted::View(_) => RouterEvent::Mounted(next),
            Mounted::Missing => RouterEvent::PlaceholderShown(next),
        };
        self.mounted = mounted;
        self.active = index;
        debug!(from = ?previous, to = ?next, "tab selected");
        Ok(vec![RouterEvent::Unmounted(previous), shown])
    }
}

fn mount<L: Copy + Ord + fmt::Debug, V>(
    registry: &Rc<ViewRegistry<L, V>>,
    label: L,
) -> Result<Mounted<V>, RouterError> {
    match registry.build(label) {
        Some(view) => view.map(Mounted::View),
        None => match registry.policy() {
            MissingViewPolicy::FailFast => Err(RouterError::UnregisteredView {
                label: format!("{label:?}"),
            }),
            MissingViewPolicy::Placeholder => Ok(Mounted::Missing),
        },
    }
}
