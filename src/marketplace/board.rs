//! Session-local listing board
//!
//! Accepts finished job postings and partner profiles and keeps them for the
//! listing views. Nothing is written to disk.

use super::traits::{SubmissionError, SubmissionReceipt, Submitter};
use crate::state::{JobForm, PartnerProfile};
use serde::Serialize;
use uuid::Uuid;

/// A submitted form together with its receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted<T> {
    pub receipt: SubmissionReceipt,
    pub listing: T,
}

/// In-memory board of everything posted during this session
#[derive(Debug, Default)]
pub struct ListingBoard {
    jobs: Vec<Posted<JobForm>>,
    partners: Vec<Posted<PartnerProfile>>,
}

impl ListingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posted jobs, newest first
    pub fn jobs(&self) -> impl Iterator<Item = &Posted<JobForm>> {
        self.jobs.iter().rev()
    }

    /// Posted partner profiles, newest first
    pub fn partners(&self) -> impl Iterator<Item = &Posted<PartnerProfile>> {
        self.partners.iter().rev()
    }

    pub fn job(&self, reference: Uuid) -> Option<&Posted<JobForm>> {
        self.jobs.iter().find(|p| p.receipt.reference == reference)
    }

    pub fn partner(&self, reference: Uuid) -> Option<&Posted<PartnerProfile>> {
        self.partners.iter().find(|p| p.receipt.reference == reference)
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn partner_count(&self) -> usize {
        self.partners.len()
    }
}

/// Serialize the payload the way it would go over the wire
fn payload<T: Serialize>(listing: &T) -> Result<String, SubmissionError> {
    serde_json::to_string(listing)
        .map_err(|e| SubmissionError(format!("Failed to encode listing: {e}")))
}

impl Submitter<JobForm> for ListingBoard {
    fn submit(&mut self, form: &JobForm) -> Result<SubmissionReceipt, SubmissionError> {
        let payload = payload(form)?;
        let receipt = SubmissionReceipt::issue();
        tracing::info!(
            reference = %receipt.reference,
            title = %form.basic_info.title,
            "job posted"
        );
        tracing::debug!(%payload, "job payload");
        self.jobs.push(Posted {
            receipt: receipt.clone(),
            listing: form.clone(),
        });
        Ok(receipt)
    }
}

impl Submitter<PartnerProfile> for ListingBoard {
    fn submit(&mut self, form: &PartnerProfile) -> Result<SubmissionReceipt, SubmissionError> {
        let payload = payload(form)?;
        let receipt = SubmissionReceipt::issue();
        tracing::info!(
            reference = %receipt.reference,
            company = %form.basic.company_name,
            "partner profile created"
        );
        tracing::debug!(%payload, "partner payload");
        self.partners.push(Posted {
            receipt: receipt.clone(),
            listing: form.clone(),
        });
        Ok(receipt)
    }
}
