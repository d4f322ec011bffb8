use super::Query;
use crate::{Error, Result};

/// Cross-operand rules checked when two queries are combined with `UNION`.
///
/// Both rules describe valid SQL but are not required for a union to be
/// built. The default enables neither: operands only have to be consistent
/// on their own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnionRules {
    /// Both operands must select the same number of columns.
    pub require_matching_width: bool,

    /// Neither operand may carry an `ORDER BY`. Order the union through an
    /// outer query instead.
    pub reject_ordered_operands: bool,
}

impl UnionRules {
    /// Enables every rule.
    pub fn strict() -> UnionRules {
        UnionRules {
            require_matching_width: true,
            reject_ordered_operands: true,
        }
    }

    pub fn check(&self, lhs: &Query, rhs: &Query) -> Result<()> {
        if self.require_matching_width && lhs.width() != rhs.width() {
            return Err(Error::invalid_combination(format!(
                "UNION operands select a different number of columns ({} vs {})",
                lhs.width(),
                rhs.width()
            )));
        }

        if self.reject_ordered_operands {
            for (side, operand) in [("left", lhs), ("right", rhs)] {
                if operand.order_by.is_some() {
                    return Err(Error::invalid_combination(format!(
                        "{side} operand of UNION has an ORDER BY"
                    )));
                }
            }
        }

        Ok(())
    }
}
