
use crate::configuration::models::engine_settings::EngineSettings;
use crate::contracts::audit_record::{AuditCategory, AuditRecord};
use crate::contracts::mode::Mode;
use crate::contracts::pillar_outcome::PillarOutcome;
use crate::services::audit::AuditSink;
use crate::services::clients::account_clients::AccountClients;
use crate::services::pillars::{PosturePillar, registry};
use crate::services::report::synthesize;
use log::{info, warn};
use std::sync::Arc;

/// Runs every pillar of an account under one mode and turns the outcomes into
/// a single audit record.
pub struct PostureEngine {
    pillars: Vec<Arc<dyn PosturePillar>>,
    settings: EngineSettings,
}

impl PostureEngine {
    pub fn new(clients: AccountClients, settings: EngineSettings) -> Self {
        let pillars = registry(&clients, &settings);
        Self { pillars, settings }
    }

    /// Uses a custom pillar registry; pillars run in the given order.
    pub fn with_pillars(pillars: Vec<Arc<dyn PosturePillar>>, settings: EngineSettings) -> Self {
        Self { pillars, settings }
    }

    /// Unrecognized modes run as `scan`.
    pub async fn run(&self, mode: &str) -> anyhow::Result<AuditRecord> {
        self.run_mode(Mode::parse(mode)).await
    }

    pub async fn run_mode(&self, mode: Mode) -> anyhow::Result<AuditRecord> {
        let outcomes = self.evaluate(mode).await;
        let report = synthesize(mode, &outcomes, self.settings.max_listed_identifiers);

        let (event_name, category) = if mode.is_scan() {
            (self.settings.scan_event_name.clone(), AuditCategory::Scan)
        } else {
            (self.settings.remediation_event_name.clone(), AuditCategory::Remediation)
        };

        let record = AuditRecord::builder()
            .event_name(event_name)
            .status(report.status)
            .details(report.details)
            .category(category)
            .metrics(report.metrics)
            .build()?;

        info!(
            mode = mode.as_str(),
            log_id = record.id(),
            status = record.status().as_str();
            "Posture run complete");
        Ok(record)
    }

    /// Runs the pillars one after another. A pillar that fails contributes an
    /// empty outcome with an error note and the rest still run.
    pub async fn evaluate(&self, mode: Mode) -> Vec<PillarOutcome> {
        let mut outcomes = Vec::with_capacity(self.pillars.len());
        for pillar in &self.pillars {
            let policy = mode.policy_for(pillar.pillar());
            let outcome = pillar.run(policy).await;
            if outcome.errors.is_empty() {
                info!(
                    pillar = outcome.pillar.as_str(),
                    policy = outcome.policy.as_str(),
                    count = outcome.count();
                    "Pillar evaluated");
            } else {
                warn!(
                    pillar = outcome.pillar.as_str(),
                    policy = outcome.policy.as_str(),
                    count = outcome.count(),
                    errors = outcome.errors.len();
                    "Pillar evaluated with errors");
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Runs and hands the record to the sink. A sink failure is returned to the
    /// caller as is; there is no retry here.
    pub async fn run_and_record(&self, mode: &str, sink: &dyn AuditSink) -> anyhow::Result<AuditRecord> {
        let record = self.run(mode).await?;
        sink.record(&record)?;
        Ok(record)
    }
}
