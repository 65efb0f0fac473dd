use crate::{
    stmt::{Id, PivotRow},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Pivot rows returned by the operation
    Values(Vec<PivotRow>),

    /// Identifiers returned by the operation
    Ids(Vec<Id>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<PivotRow>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }

    pub fn ids(ids: Vec<Id>) -> Self {
        Self {
            rows: Rows::Ids(ids),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        self.rows.into_count()
    }

    pub fn into_values(self) -> Result<Vec<PivotRow>> {
        self.rows.into_values()
    }

    pub fn into_ids(self) -> Result<Vec<Id>> {
        self.rows.into_ids()
    }
}

impl Rows {
    fn kind(&self) -> &'static str {
        match self {
            Self::Count(_) => "Count",
            Self::Values(_) => "Values",
            Self::Ids(_) => "Ids",
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            _ => Err(Error::invalid_result(format!(
                "expected Count, got {}",
                self.kind()
            ))),
        }
    }

    pub fn into_values(self) -> Result<Vec<PivotRow>> {
        match self {
            Self::Values(values) => Ok(values),
            _ => Err(Error::invalid_result(format!(
                "expected Values, got {}",
                self.kind()
            ))),
        }
    }

    pub fn into_ids(self) -> Result<Vec<Id>> {
        match self {
            Self::Ids(ids) => Ok(ids),
            _ => Err(Error::invalid_result(format!(
                "expected Ids, got {}",
                self.kind()
            ))),
        }
    }
}
