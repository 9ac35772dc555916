pub mod database_encryption;
pub mod identity_mfa;
pub mod network_ingress;
pub mod public_access;
pub mod storage_encryption;

use crate::configuration::models::engine_settings::EngineSettings;
use crate::contracts::finding::{Finding, Pillar};
use crate::contracts::mode::PillarPolicy;
use crate::contracts::pillar_outcome::PillarOutcome;
use crate::services::clients::account_clients::AccountClients;
use crate::services::clients::client_error::ClientError;
use crate::services::pillars::database_encryption::DatabaseEncryptionPillar;
use crate::services::pillars::identity_mfa::IdentityMfaPillar;
use crate::services::pillars::network_ingress::NetworkIngressPillar;
use crate::services::pillars::public_access::PublicAccessPillar;
use crate::services::pillars::storage_encryption::StorageEncryptionPillar;
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

/// Non-compliant targets found by one inspection pass, in upstream order,
/// plus per-resource errors that did not stop the pass.
pub struct Inspection<T> {
    pub targets: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> Inspection<T> {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> Default for Inspection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
/// Finds non-compliant resources of one pillar
pub trait Inspector: Send + Sync {
    /// Everything a remediation needs to act on one finding
    type Target: Send + Sync;

    fn pillar(&self) -> Pillar;

    /// Fails only when the resources cannot be enumerated at all
    async fn inspect(&self) -> Result<Inspection<Self::Target>, ClientError>;

    fn finding(&self, target: &Self::Target) -> Finding;
}

#[async_trait]
/// An inspector whose findings have a safe, idempotent automated fix
pub trait Remediator: Inspector {
    async fn remediate(&self, target: &Self::Target) -> Result<(), ClientError>;
}

#[async_trait]
/// A registry entry the dispatcher can drive without knowing the pillar
pub trait PosturePillar: Send + Sync {
    fn pillar(&self) -> Pillar;

    /// Never fails: enumeration errors end up in the outcome's error notes
    async fn run(&self, policy: PillarPolicy) -> PillarOutcome;
}

pub trait AsScanOnlyPillar {
    fn scan_only(self: Arc<Self>) -> Arc<dyn PosturePillar>;
}

impl<I> AsScanOnlyPillar for I
where
    I: Inspector + 'static,
{
    fn scan_only(self: Arc<Self>) -> Arc<dyn PosturePillar> {
        Arc::new(ScanOnly { inspector: self })
    }
}

pub trait WithRemediation {
    fn with_remediation(self: Arc<Self>) -> Arc<dyn PosturePillar>;
}

impl<R> WithRemediation for R
where
    R: Remediator + 'static,
{
    fn with_remediation(self: Arc<Self>) -> Arc<dyn PosturePillar> {
        Arc::new(Remediable { remediator: self })
    }
}

struct ScanOnly<I: Inspector> {
    inspector: Arc<I>,
}

#[async_trait]
impl<I> PosturePillar for ScanOnly<I>
where
    I: Inspector + 'static,
{
    fn pillar(&self) -> Pillar {
        self.inspector.pillar()
    }

    async fn run(&self, policy: PillarPolicy) -> PillarOutcome {
        let pillar = self.inspector.pillar();
        if policy == PillarPolicy::Remediate {
            warn!(pillar = pillar.as_str(); "Pillar has no remediation, running scan only");
        }
        match self.inspector.inspect().await {
            Ok(inspection) => {
                let mut outcome = PillarOutcome::new(pillar, PillarPolicy::ScanOnly);
                outcome.findings = inspection.targets.iter().map(|t| self.inspector.finding(t)).collect();
                outcome.errors = inspection.errors;
                outcome
            }
            Err(e) => enumeration_failed(pillar, PillarPolicy::ScanOnly, e),
        }
    }
}

struct Remediable<R: Remediator> {
    remediator: Arc<R>,
}

#[async_trait]
impl<R> PosturePillar for Remediable<R>
where
    R: Remediator + 'static,
{
    fn pillar(&self) -> Pillar {
        self.remediator.pillar()
    }

    async fn run(&self, policy: PillarPolicy) -> PillarOutcome {
        let pillar = self.remediator.pillar();
        let inspection = match self.remediator.inspect().await {
            Ok(inspection) => inspection,
            Err(e) => return enumeration_failed(pillar, policy, e),
        };

        let mut outcome = PillarOutcome::new(pillar, policy);
        outcome.errors = inspection.errors;

        for target in &inspection.targets {
            let finding = self.remediator.finding(target);
            if policy == PillarPolicy::ScanOnly {
                outcome.findings.push(finding);
                continue;
            }
            match self.remediator.remediate(target).await {
                Ok(()) => {
                    debug!(pillar = pillar.as_str(), resource = finding.resource_id.as_str(); "Remediated");
                    outcome.findings.push(finding.remediated());
                }
                Err(e) => warn!(
                    pillar = pillar.as_str(),
                    resource = finding.resource_id.as_str();
                    "Remediation failed: {}", e),
            }
        }
        outcome
    }
}

fn enumeration_failed(pillar: Pillar, policy: PillarPolicy, error: ClientError) -> PillarOutcome {
    warn!(pillar = pillar.as_str(); "Pillar inspection aborted: {}", error);
    PillarOutcome::failed(pillar, policy, error.to_string())
}

/// The fixed pillar order. It matches the section order of the report.
pub fn registry(clients: &AccountClients, settings: &EngineSettings) -> Vec<Arc<dyn PosturePillar>> {
    vec![
        Arc::new(StorageEncryptionPillar::new(
            clients.storage.clone(),
            settings.sse_algorithm.clone(),
        ))
        .with_remediation(),
        Arc::new(DatabaseEncryptionPillar::new(clients.database.clone())).scan_only(),
        Arc::new(NetworkIngressPillar::new(clients.network.clone())).with_remediation(),
        Arc::new(IdentityMfaPillar::new(clients.identity.clone())).scan_only(),
        Arc::new(PublicAccessPillar::new(clients.storage.clone())).with_remediation(),
    ]
}
