use {
    crate::{
        config::BootstrapConfig,
        domain::{LimitField, Period, ValidationError},
        utils::TimeUtils,
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    thiserror::Error,
    uuid::Uuid,
};

/// One row of the wire format. Limits travel as strings, dates as `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LimitEntry {
    pub lower_limit: String,
    pub upper_limit: String,
    pub start_date: NaiveDate,
}

/// `{ "limits": [...] }`, the shape the bootstrap source returns and the
/// submit hand-off sends back.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitsSnapshot {
    pub limits: Vec<LimitEntry>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot contains no periods")]
    Empty,
    #[error("period {index}: {field} {source}")]
    InvalidLimit {
        index: usize,
        field: &'static str,
        source: ValidationError,
    },
    #[error("period {index}: invalid start date '{text}'")]
    InvalidDate { index: usize, text: String },
}

impl LimitsSnapshot {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_periods(periods: &[Period]) -> Self {
        Self {
            limits: periods
                .iter()
                .map(|p| LimitEntry {
                    lower_limit: p.lower().to_string(),
                    upper_limit: p.upper().to_string(),
                    start_date: p.start_date,
                })
                .collect(),
        }
    }

    /// Built-in demo rows, the data the simulated fetch resolves with.
    pub fn from_config(config: &BootstrapConfig) -> Result<Self, SnapshotError> {
        let limits = config
            .demo_limits
            .iter()
            .enumerate()
            .map(|(index, row)| -> Result<LimitEntry, SnapshotError> {
                let start_date =
                    TimeUtils::parse_date(row.start_date).ok_or_else(|| SnapshotError::InvalidDate {
                        index,
                        text: row.start_date.to_string(),
                    })?;
                Ok(LimitEntry {
                    lower_limit: row.lower_limit.to_string(),
                    upper_limit: row.upper_limit.to_string(),
                    start_date,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { limits })
    }

    /// Parse every row into a [`Period`]. Ordering is not checked.
    pub fn into_periods(self) -> Result<Vec<Period>, SnapshotError> {
        if self.limits.is_empty() {
            return Err(SnapshotError::Empty);
        }
        self.limits
            .into_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<Period, SnapshotError> {
                let limit = |field: &'static str, text: &str| {
                    LimitField::new(text).map_err(|source| SnapshotError::InvalidLimit {
                        index,
                        field,
                        source,
                    })
                };
                Ok(Period {
                    id: Uuid::new_v4(),
                    lower_limit: limit("lowerLimit", &entry.lower_limit)?,
                    upper_limit: limit("upperLimit", &entry.upper_limit)?,
                    start_date: entry.start_date,
                })
            })
            .collect()
    }
}
