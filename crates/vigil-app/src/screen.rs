// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{BadgeTone, ListView, ScreenAction, ViewLabel, ViewRegistry, ViewRouter};

pub type ScreenRouter = ViewRouter<ViewLabel, Screen>;
pub type ScreenRegistry = ViewRegistry<ViewLabel, Screen>;

/// A mountable view: a filterable table, a static summary, or a nested tab
/// shell hosting further screens.
pub enum Screen {
    List(ListScreen),
    Summary(SummaryScreen),
    Shell(Box<ScreenRouter>),
}

pub struct ListScreen {
    pub list: Box<dyn ListView>,
    pub actions: &'static [ScreenAction],
}

impl ListScreen {
    pub fn new(list: impl ListView + 'static, actions: &'static [ScreenAction]) -> Self {
        Self {
            list: Box::new(list),
            actions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryScreen {
    pub title: &'static str,
    pub cards: Vec<SummaryCard>,
    pub actions: &'static [ScreenAction],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
    pub progress: Option<u8>,
    pub tone: BadgeTone,
}

impl Screen {
    pub fn actions(&self) -> &'static [ScreenAction] {
        match self {
            Self::List(screen) => screen.actions,
            Self::Summary(screen) => screen.actions,
            Self::Shell(_) => &[],
        }
    }

    pub fn offers(&self, action: ScreenAction) -> bool {
        self.actions().contains(&action)
    }

    pub fn list(&self) -> Option<&dyn ListView> {
        match self {
            Self::List(screen) => Some(screen.list.as_ref()),
            _ => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut (dyn ListView + 'static)> {
        match self {
            Self::List(screen) => Some(screen.list.as_mut()),
            _ => None,
        }
    }
}

/// Label of the deepest active tab, following nested shells.
pub fn focused_label(router: &ScreenRouter) -> ViewLabel {
    match router.active_view() {
        Some(Screen::Shell(inner)) => focused_label(inner),
        _ => router.active_label(),
    }
}

/// The deepest active non-shell screen; `None` while a placeholder shows.
pub fn focused_screen(router: &ScreenRouter) -> Option<&Screen> {
    match router.active_view() {
        Some(Screen::Shell(inner)) => focused_screen(inner),
        other => other,
    }
}

pub fn focused_screen_mut(router: &mut ScreenRouter) -> Option<&mut Screen> {
    match router.active_view_mut() {
        Some(Screen::Shell(inner)) => focused_screen_mut(inner),
        Some(screen) => Some(screen),
        None => None,
    }
}

/// Routers from the root down to the innermost active shell.
pub fn router_chain(router: &ScreenRouter) -> Vec<&ScreenRouter> {
    let mut chain = vec![router];
    let mut current = router;
    while let Some(Screen::Shell(inner)) = current.active_view() {
        chain.push(inner);
        current = inner;
    }
    chain
}

/// The innermost nested shell below the root, if the active tab is a shell.
pub fn active_shell_mut(router: &mut ScreenRouter) -> Option<&mut ScreenRouter> {
    let depth = router_chain(router).len() - 1;
    if depth == 0 {
        return None;
    }
    router_at_depth_mut(router, depth)
}

fn router_at_depth_mut(router: &mut ScreenRouter, depth: usize) -> Option<&mut ScreenRouter> {
    if depth == 0 {
        return Some(router);
    }
    match router.active_view_mut() {
        Some(Screen::Shell(inner)) => router_at_depth_mut(inner, depth - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Screen, ScreenRegistry, ScreenRouter, SummaryScreen, active_shell_mut, focused_label,
        focused_screen, router_chain,
    };
    use crate::{MissingViewPolicy, RouterError, ScreenAction, ViewLabel};
    use std::rc::Rc;

    fn summary(title: &'static str) -> Screen {
        Screen::Summary(SummaryScreen {
            title,
            cards: Vec::new(),
            actions: &[ScreenAction::Export],
        })
    }

    fn registry() -> Rc<ScreenRegistry> {
        let mut registry = ScreenRegistry::new(MissingViewPolicy::FailFast);
        registry
            .register(ViewLabel::Overview, |_| Ok(summary("overview")))
            .register(ViewLabel::RiskRegister, |_| Ok(summary("register")))
            .register(ViewLabel::RiskTreatments, |_| Ok(summary("treatments")))
            .register(ViewLabel::Risk, |registry| {
                let shell = ScreenRouter::new(
                    Rc::clone(registry),
                    vec![ViewLabel::RiskRegister, ViewLabel::RiskTreatments],
                )?;
                Ok(Screen::Shell(Box::new(shell)))
            });
        Rc::new(registry)
    }

    #[test]
    fn focus_follows_nested_shells() -> Result<(), RouterError> {
        let mut root = ScreenRouter::new(registry(), vec![ViewLabel::Overview, ViewLabel::Risk])?;
        assert_eq!(focused_label(&root), ViewLabel::Overview);
        assert_eq!(router_chain(&root).len(), 1);
        assert!(active_shell_mut(&mut root).is_none());

        root.select(ViewLabel::Risk)?;
        assert_eq!(focused_label(&root), ViewLabel::RiskRegister);
        assert_eq!(router_chain(&root).len(), 2);

        let shell = active_shell_mut(&mut root).expect("risk shell mounted");
        shell.select_next()?;
        assert_eq!(focused_label(&root), ViewLabel::RiskTreatments);
        assert!(matches!(
            focused_screen(&root),
            Some(Screen::Summary(SummaryScreen {
                title: "treatments",
                ..
            }))
        ));
        Ok(())
    }

    #[test]
    fn leaving_a_shell_resets_its_subtab() -> Result<(), RouterError> {
        let mut root = ScreenRouter::new(registry(), vec![ViewLabel::Overview, ViewLabel::Risk])?;
        root.select(ViewLabel::Risk)?;
        if let Some(shell) = active_shell_mut(&mut root) {
            shell.select(ViewLabel::RiskTreatments)?;
        }
        root.select(ViewLabel::Overview)?;
        root.select(ViewLabel::Risk)?;
        assert_eq!(focused_label(&root), ViewLabel::RiskRegister);
        Ok(())
    }

    #[test]
    fn shells_offer_no_actions() -> Result<(), RouterError> {
        let registry = registry();
        let shell = registry
            .build(ViewLabel::Risk)
            .expect("risk registered")?;
        assert!(shell.actions().is_empty());
        assert!(summary("x").offers(ScreenAction::Export));
        assert!(!summary("x").offers(ScreenAction::Upload));
        Ok(())
    }
}
