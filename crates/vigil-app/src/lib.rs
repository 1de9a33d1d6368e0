// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod badge;
pub mod error;
pub mod expand;
pub mod filter;
pub mod ids;
pub mod model;
pub mod router;
pub mod screen;
pub mod state;
pub mod table;

pub use badge::*;
pub use error::*;
pub use expand::*;
pub use filter::*;
pub use ids::*;
pub use model::*;
pub use router::*;
pub use screen::*;
pub use state::*;
pub use table::*;
