use std::fmt;

/// Errors surfaced by the hull algorithms and the median selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    InvalidInput { reason: String },
}

impl HullError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}

/// Reject empty point sets and non-finite coordinates.
pub(crate) fn check_points(points: &[crate::Point]) -> Result<(), HullError> {
    if points.is_empty() {
        return Err(HullError::invalid("point set is empty"));
    }
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::invalid(format!(
            "point {i} has a non-finite coordinate"
        )));
    }
    Ok(())
}
