// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod assets;
pub mod audits;
pub mod catalog;
pub mod classify;
pub mod incidents;
pub mod overview;
pub mod policies;
pub mod risk;
pub mod settings;
pub mod training;
pub mod vendors;

pub use catalog::{check_catalog, outline, registry, root_router, shell_tabs};
pub use classify::*;
