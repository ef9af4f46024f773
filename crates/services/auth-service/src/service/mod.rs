//! Email verification business logic.

mod verification_service;

pub use verification_service::{
    LookupFaultPolicy, VerificationService, VerificationWorkflow, WorkflowConfig, WorkflowState,
};

#[cfg(any(test, feature = "test-utils"))]
pub use verification_service::MockVerificationService;
