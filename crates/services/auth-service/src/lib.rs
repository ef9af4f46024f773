//! Auth Service Library
//!
//! This crate provides the university email verification workflow.
//! It checks the Firestore user directory and asks Firebase Authentication
//! to email a passwordless sign-in link.

pub mod client;
pub mod config;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::client::{build_http_client, FirestoreDirectory, IdentityToolkitIssuer};
use crate::config::AuthServiceConfig;
use crate::service::VerificationWorkflow;
use common::AppResult;

/// Build the workflow wired to the Firebase REST adapters.
pub fn build_workflow(config: &AuthServiceConfig) -> AppResult<VerificationWorkflow> {
    let http = build_http_client(&config.http)?;

    let directory = Arc::new(FirestoreDirectory::new(http.clone(), config.firebase.clone()));
    let issuer = Arc::new(IdentityToolkitIssuer::new(http, config.firebase.clone()));

    let workflow = VerificationWorkflow::new(directory, issuer, config.workflow.clone());

    info!(
        project = %config.firebase.project_id,
        collection = %config.firebase.users_collection,
        redirect_url = %workflow.config().redirect_url,
        lookup_fault_policy = ?workflow.config().lookup_fault_policy,
        "Verification workflow ready"
    );

    Ok(workflow)
}
