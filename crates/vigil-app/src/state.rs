// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::AppMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub help_visible: bool,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            help_visible: false,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    EnterSearch,
    EnterChips,
    ExitToNav,
    ToggleHelp,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    HelpToggled(bool),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::EnterSearch => self.enter(AppMode::Search),
            AppCommand::EnterChips => self.enter(AppMode::Chips),
            AppCommand::ExitToNav => {
                if self.mode == AppMode::Nav {
                    return Vec::new();
                }
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ToggleHelp => {
                self.help_visible = !self.help_visible;
                vec![AppEvent::HelpToggled(self.help_visible)]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn enter(&mut self, mode: AppMode) -> Vec<AppEvent> {
        self.mode = mode;
        self.help_visible = false;
        vec![AppEvent::ModeChanged(mode)]
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::AppMode;

    #[test]
    fn mode_transitions() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::EnterSearch);
        assert_eq!(state.mode, AppMode::Search);
        assert_eq!(events, vec![AppEvent::ModeChanged(AppMode::Search)]);

        state.dispatch(AppCommand::EnterChips);
        assert_eq!(state.mode, AppMode::Chips);

        state.dispatch(AppCommand::ExitToNav);
        assert_eq!(state.mode, AppMode::Nav);
        assert!(state.dispatch(AppCommand::ExitToNav).is_empty());
    }

    #[test]
    fn entering_a_mode_hides_help() {
        let mut state = AppState::default();
        assert_eq!(
            state.dispatch(AppCommand::ToggleHelp),
            vec![AppEvent::HelpToggled(true)]
        );

        state.dispatch(AppCommand::EnterSearch);
        assert!(!state.help_visible);
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::SetStatus("exported".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("exported"));
        assert_eq!(events, vec![AppEvent::StatusUpdated("exported".to_owned())]);

        state.dispatch(AppCommand::ClearStatus);
        assert_eq!(state.status_line, None);
    }
}
