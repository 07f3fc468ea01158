use std::fmt;

/// A scenario precondition that prevents computing a result.
///
/// The calculators and path simulators never surface this directly: a
/// violated precondition degrades to `None` (or an empty series), which the
/// caller renders as "insufficient input", not as an error. Callers that
/// want to tell the user *which* input is missing call `validate()` on the
/// scenario and inspect the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// A monetary/price/horizon field is NaN or infinite
    NonFinite(&'static str),
    /// A monetary field is negative
    NegativeAmount(&'static str),
    /// A price that must be strictly positive is zero or negative
    NonPositivePrice(&'static str),
    /// The projection horizon is zero or negative
    NonPositiveHorizon,
    /// Both the lump sum and the periodic contribution are zero
    NoContribution,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NonFinite(field) => write!(f, "{field} is not a finite number"),
            InvalidInput::NegativeAmount(field) => write!(f, "{field} cannot be negative"),
            InvalidInput::NonPositivePrice(field) => {
                write!(f, "{field} must be greater than zero")
            }
            InvalidInput::NonPositiveHorizon => {
                write!(f, "the projection horizon must be at least one period")
            }
            InvalidInput::NoContribution => {
                write!(f, "either an initial amount or a periodic amount is required")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
