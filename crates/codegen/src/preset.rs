//! Built-in generation presets.
//!
//! A preset fixes which regions are generated, with which template and over
//! which capability group. There are two, matching the two styles of type
//! switch found in the helper sources:
//!
//! - [`Preset::AssertOperands`]: `switch a.(type)`, operands stay untyped.
//! - [`Preset::BoundOperand`]: `switch a := a.(type)`, the operand is bound.

use crate::template::{CaseClause, ClauseTemplate, generate_cases, render_lines};
use crate::types::CapabilityGroup;
use casegen_inject::RegionKey;
use serde::Serialize;
use std::fmt;

const ASSERT_OPERANDS_NEGATABLE: &[&str] = &[
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "int8",
    "int16",
    "int32",
    "int64",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "int",
    "uint",
];

const BOUND_OPERAND_NUMERIC: &[&str] = &[
    "uint8", "uint16", "uint32", "uint64", "int8", "int16", "int32", "int64", "float32", "float64",
    "int", "uint",
];

const COMPLEX: &[&str] = &["complex64", "complex128"];

/// Types that support `+` on top of everything negatable.
const ADDABLE_EXTRA: &[&str] = &["string", "uintptr"];

/// A generation preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Untyped operands: `add` asserts both sides; regions `add`, `neg`.
    AssertOperands,
    /// Bound operand: `add` asserts only `b`; regions `add`, `neg`, `int64`,
    /// `uint64`, `float64`.
    BoundOperand,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Self; 2] = [Self::AssertOperands, Self::BoundOperand];

    /// Name as used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AssertOperands => "assert-operands",
            Self::BoundOperand => "bound-operand",
        }
    }

    /// Build the region plan for this preset.
    #[must_use]
    pub fn plan(self) -> Plan {
        let regions = match self {
            Self::AssertOperands => {
                let negatable = CapabilityGroup::new("negatable", ASSERT_OPERANDS_NEGATABLE);
                let addable = negatable.extend("addable", ADDABLE_EXTRA);
                vec![
                    RegionSpec::new("add", ClauseTemplate::AddAssertOperands, addable),
                    RegionSpec::new("neg", ClauseTemplate::Negate, negatable),
                ]
            }
            Self::BoundOperand => {
                let numeric = CapabilityGroup::new("numeric", BOUND_OPERAND_NUMERIC);
                let negatable = numeric.extend("negatable", COMPLEX);
                let addable = negatable.extend("addable", ADDABLE_EXTRA);
                vec![
                    RegionSpec::new("add", ClauseTemplate::AddBoundOperand, addable),
                    RegionSpec::new("neg", ClauseTemplate::Negate, negatable),
                    RegionSpec::new("int64", ClauseTemplate::ConvertInt64, numeric.clone()),
                    RegionSpec::new("uint64", ClauseTemplate::ConvertUint64, numeric.clone()),
                    RegionSpec::new("float64", ClauseTemplate::ConvertFloat64, numeric),
                ]
            }
        };

        Plan {
            preset: self,
            regions,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One region to generate: which key, with which template, over which types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSpec {
    /// Region key as written in the preset (lower case).
    pub key: &'static str,
    /// Clause template.
    pub template: ClauseTemplate,
    /// Types to generate a clause for.
    pub group: CapabilityGroup,
}

impl RegionSpec {
    /// Create a region spec.
    #[must_use]
    pub fn new(key: &'static str, template: ClauseTemplate, group: CapabilityGroup) -> Self {
        Self {
            key,
            template,
            group,
        }
    }

    /// Normalized key used to find the sentinels.
    #[must_use]
    pub fn region_key(&self) -> RegionKey {
        RegionKey::new(self.key)
    }

    /// Clauses for this region.
    #[must_use]
    pub fn clauses(&self) -> Vec<CaseClause> {
        generate_cases(self.template, &self.group)
    }

    /// Lines to place between the sentinels.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        render_lines(&self.clauses())
    }
}

/// The ordered list of regions a preset generates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Preset the plan was built from.
    pub preset: Preset,
    /// Regions, in injection order.
    pub regions: Vec<RegionSpec>,
}

impl Plan {
    /// Look up a region by key, case-insensitively.
    #[must_use]
    pub fn region(&self, key: &str) -> Option<&RegionSpec> {
        self.regions.iter().find(|r| r.key.eq_ignore_ascii_case(key))
    }
}
