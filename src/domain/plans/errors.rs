//! Plan-specific error types.
//!
//! A free viewer trying to buy credits is not an error: it produces an
//! error-severity notification instead. These variants cover requests the
//! page should never have sent.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UnknownTier | 400 |
//! | UnknownCreditPackage | 400 |
//! | ValidationFailed | 400 |
//! | AlreadyOnPlan | 409 |
//! | StillLoading | 409 |

use crate::domain::foundation::ErrorCode;

/// Plan-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Requested tier is not in the catalog.
    UnknownTier(String),

    /// Requested credit amount is not an offered package.
    UnknownCreditPackage(u32),

    /// Plan change requested towards the viewer's own plan.
    AlreadyOnPlan(String),

    /// The viewer's plan has not been loaded yet.
    StillLoading,

    /// Validation failed.
    ValidationFailed { field: String, message: String },
}

impl PlanError {
    pub fn unknown_tier(tier: impl Into<String>) -> Self {
        PlanError::UnknownTier(tier.into())
    }

    pub fn unknown_credit_package(amount: u32) -> Self {
        PlanError::UnknownCreditPackage(amount)
    }

    pub fn already_on_plan(plan: impl Into<String>) -> Self {
        PlanError::AlreadyOnPlan(plan.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::UnknownTier(_) => ErrorCode::UnknownTier,
            PlanError::UnknownCreditPackage(_) => ErrorCode::UnknownCreditPackage,
            PlanError::AlreadyOnPlan(_) => ErrorCode::AlreadyOnPlan,
            PlanError::StillLoading => ErrorCode::PlanStillLoading,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PlanError::UnknownTier(tier) => format!("Unknown plan tier: {}", tier),
            PlanError::UnknownCreditPackage(amount) => {
                format!("No credit package of {} tokens is offered", amount)
            }
            PlanError::AlreadyOnPlan(plan) => format!("Already on the {} plan", plan),
            PlanError::StillLoading => "The current plan is still loading".to_string(),
            PlanError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PlanError {}
