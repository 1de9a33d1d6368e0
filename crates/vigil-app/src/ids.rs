// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(i64);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }

            pub fn row_key(self) -> RowKey {
                RowKey::new(Self::PREFIX, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{:03}", Self::PREFIX, self.0)
            }
        }
    };
}

record_id!(RiskId, "RSK");
record_id!(TreatmentId, "TRT");
record_id!(IncidentId, "INC");
record_id!(PlaybookId, "PBK");
record_id!(PolicyId, "POL");
record_id!(ExceptionId, "EXC");
record_id!(VendorId, "VND");
record_id!(ContractId, "CTR");
record_id!(CourseId, "TRN");
record_id!(CampaignId, "PHI");
record_id!(FindingId, "FND");
record_id!(ControlId, "CTL");
record_id!(AssetId, "AST");
record_id!(VulnerabilityId, "VUL");
record_id!(DepartmentId, "DEP");
record_id!(CustomFieldId, "CFD");
record_id!(SettingId, "SET");

/// Rendering key for a row. Unique within one dataset; never used to join
/// records across datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    prefix: &'static str,
    value: i64,
}

impl RowKey {
    pub const fn new(prefix: &'static str, value: i64) -> Self {
        Self { prefix, value }
    }

    pub const fn value(self) -> i64 {
        self.value
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.prefix, self.value)
    }
}
