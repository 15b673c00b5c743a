//! Case clause templates.
//!
//! Each template turns a single type name into one `case` clause of a Go
//! type switch. The two addition templates are kept apart on purpose: one
//! targets switches that do not bind the operand, so both operands need a
//! type assertion, the other targets `switch a := a.(type)` where only `b`
//! does.

use crate::types::{CapabilityGroup, TypeName};
use serde::Serialize;
use std::fmt;

/// Body template for a generated case clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseTemplate {
    /// `return a.(T) + b.(T), nil`
    AddAssertOperands,
    /// `return a + b.(T), nil`
    AddBoundOperand,
    /// `return -a, nil`
    Negate,
    /// `return int64(v), nil`
    ConvertInt64,
    /// `return uint64(v), nil`
    ConvertUint64,
    /// `return float64(v), nil`
    ConvertFloat64,
}

impl ClauseTemplate {
    /// The `return` statement for `ty`.
    #[must_use]
    pub fn statement(self, ty: TypeName) -> String {
        match self {
            Self::AddAssertOperands => format!("return a.({ty}) + b.({ty}), nil"),
            Self::AddBoundOperand => format!("return a + b.({ty}), nil"),
            Self::Negate => "return -a, nil".to_string(),
            Self::ConvertInt64 => "return int64(v), nil".to_string(),
            Self::ConvertUint64 => "return uint64(v), nil".to_string(),
            Self::ConvertFloat64 => "return float64(v), nil".to_string(),
        }
    }

    /// Render the clause for `ty`.
    #[must_use]
    pub fn render(self, ty: TypeName) -> CaseClause {
        CaseClause {
            type_name: ty,
            statement: self.statement(ty),
        }
    }

    /// Template name as used on the command line and in plan output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AddAssertOperands => "add-assert-operands",
            Self::AddBoundOperand => "add-bound-operand",
            Self::Negate => "negate",
            Self::ConvertInt64 => "convert-int64",
            Self::ConvertUint64 => "convert-uint64",
            Self::ConvertFloat64 => "convert-float64",
        }
    }
}

impl fmt::Display for ClauseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One generated `case` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseClause {
    /// Type matched by the clause.
    pub type_name: TypeName,
    /// The clause body.
    pub statement: String,
}

impl CaseClause {
    /// `case T:`
    #[must_use]
    pub fn header(&self) -> String {
        format!("case {}:", self.type_name)
    }

    /// The clause as source lines: the header, then the tab-indented body.
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        [self.header(), format!("\t{}", self.statement)]
    }
}

/// One clause per member of `group`, in group order.
#[must_use]
pub fn generate_cases(template: ClauseTemplate, group: &CapabilityGroup) -> Vec<CaseClause> {
    group
        .types()
        .iter()
        .map(|&ty| template.render(ty))
        .collect()
}

/// Flatten clauses into the lines injected into a region.
#[must_use]
pub fn render_lines(clauses: &[CaseClause]) -> Vec<String> {
    clauses.iter().flat_map(CaseClause::lines).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements() {
        let ty = TypeName::new("uint16");
        assert_eq!(
            ClauseTemplate::AddAssertOperands.statement(ty),
            "return a.(uint16) + b.(uint16), nil"
        );
        assert_eq!(
            ClauseTemplate::AddBoundOperand.statement(ty),
            "return a + b.(uint16), nil"
        );
        assert_eq!(ClauseTemplate::Negate.statement(ty), "return -a, nil");
        assert_eq!(ClauseTemplate::ConvertInt64.statement(ty), "return int64(v), nil");
        assert_eq!(ClauseTemplate::ConvertUint64.statement(ty), "return uint64(v), nil");
        assert_eq!(
            ClauseTemplate::ConvertFloat64.statement(ty),
            "return float64(v), nil"
        );
    }

    #[test]
    fn test_clause_lines() {
        let clause = ClauseTemplate::AddBoundOperand.render(TypeName::new("uint8"));
        assert_eq!(
            clause.lines(),
            ["case uint8:".to_string(), "\treturn a + b.(uint8), nil".to_string()]
        );
    }

    #[test]
    fn test_generate_cases_follows_group_order() {
        let group = CapabilityGroup::new("test", &["uint8", "int8", "string"]);
        let clauses = generate_cases(ClauseTemplate::AddBoundOperand, &group);

        assert_eq!(clauses.len(), group.len());
        let names: Vec<_> = clauses.iter().map(|c| c.type_name.as_str()).collect();
        assert_eq!(names, vec!["uint8", "int8", "string"]);
    }

    #[test]
    fn test_render_lines() {
        let group = CapabilityGroup::new("test", &["uint8", "string"]);
        let lines = render_lines(&generate_cases(ClauseTemplate::AddBoundOperand, &group));
        assert_eq!(
            lines,
            vec![
                "case uint8:",
                "\treturn a + b.(uint8), nil",
                "case string:",
                "\treturn a + b.(string), nil",
            ]
        );
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let group = CapabilityGroup::new("none", &[]);
        assert!(render_lines(&generate_cases(ClauseTemplate::Negate, &group)).is_empty());
    }

    #[test]
    fn test_template_display() {
        assert_eq!(ClauseTemplate::ConvertUint64.to_string(), "convert-uint64");
        assert_eq!(ClauseTemplate::AddAssertOperands.to_string(), "add-assert-operands");
    }
}
