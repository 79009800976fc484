//! Compensation mode — fixed salary or salary range, never both.

use serde::{Deserialize, Serialize};

use jobdesk_core::AppError;

/// How a job advertises pay. Exactly one mode is ever populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compensation {
    /// A single fixed salary figure.
    Fixed(i64),
    /// An inclusive salary range.
    Range {
        /// Lower bound.
        from: i64,
        /// Upper bound.
        to: i64,
    },
}

impl Compensation {
    /// Builds a compensation mode from the three raw posting fields,
    /// enforcing the exactly-one-mode invariant.
    pub fn from_parts(
        fixed_salary: Option<i64>,
        salary_from: Option<i64>,
        salary_to: Option<i64>,
    ) -> Result<Self, AppError> {
        match (fixed_salary, salary_from, salary_to) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(AppError::validation(
                "Cannot enter fixed and ranged salary together",
            )),
            (Some(fixed), None, None) => Ok(Self::Fixed(fixed)),
            (None, Some(from), Some(to)) => {
                if from > to {
                    return Err(AppError::validation(
                        "Salary range lower bound exceeds upper bound",
                    ));
                }
                Ok(Self::Range { from, to })
            }
            _ => Err(AppError::validation(
                "Please either provide fixed salary or ranged salary",
            )),
        }
    }

    /// Splits the mode back into the three raw columns.
    pub fn into_parts(self) -> (Option<i64>, Option<i64>, Option<i64>) {
        match self {
            Self::Fixed(fixed) => (Some(fixed), None, None),
            Self::Range { from, to } => (None, Some(from), Some(to)),
        }
    }
}
