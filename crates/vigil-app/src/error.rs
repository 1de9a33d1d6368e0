// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("router needs at least one tab")]
    NoTabs,

    #[error("tab {label} is listed more than once")]
    DuplicateTab { label: String },

    #[error("tab {label} has no registered view")]
    UnregisteredView { label: String },

    #[error("initial tab {label} is not one of this router's tabs")]
    InitialNotInTabs { label: String },

    #[error("tab {label} is not one of this router's tabs")]
    NotATab { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("no category filter at position {index}")]
    UnknownFilter { index: usize },

    #[error("{value:?} is not a {filter} option")]
    UnknownValue { filter: &'static str, value: String },
}
