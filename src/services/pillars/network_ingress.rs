use crate::contracts::finding::{Finding, Pillar, ResourceKind, Severity};
use crate::services::clients::NetworkClient;
use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::{ALL_TRAFFIC_PROTOCOL, IngressRule, SecurityGroup};
use crate::services::pillars::{Inspection, Inspector, Remediator};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub const SSH_PORT: i32 = 22;
pub const UNRESTRICTED_IPV4: &str = "0.0.0.0/0";
pub const UNRESTRICTED_IPV6: &str = "::/0";

/// One ingress rule that opens SSH or all traffic to the whole internet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exposure {
    pub group_id: String,
    pub identifier: String,
    pub rule: IngressRule,
}

/// All traffic, or a bounded port range that includes SSH.
pub fn is_at_risk(rule: &IngressRule) -> bool {
    if rule.protocol == ALL_TRAFFIC_PROTOCOL {
        return true;
    }
    match (rule.from_port, rule.to_port) {
        (Some(from), Some(to)) => from <= SSH_PORT && SSH_PORT <= to,
        _ => false,
    }
}

pub fn is_open_to_internet(rule: &IngressRule) -> bool {
    rule.ipv4_ranges.iter().any(|cidr| cidr == UNRESTRICTED_IPV4)
        || rule.ipv6_ranges.iter().any(|cidr| cidr == UNRESTRICTED_IPV6)
}

/// `"<group-id> (<group-name>)"`, with `?` for unnamed groups.
pub fn exposure_identifier(group: &SecurityGroup) -> String {
    format!("{} ({})", group.group_id, group.group_name.as_deref().unwrap_or("?"))
}

pub fn exposures(group: &SecurityGroup) -> Vec<Exposure> {
    let mut found: Vec<Exposure> = Vec::new();
    for rule in group.ingress.iter().filter(|r| is_at_risk(r) && is_open_to_internet(r)) {
        if found.iter().any(|e| &e.rule == rule) {
            continue;
        }
        found.push(Exposure {
            group_id: group.group_id.clone(),
            identifier: exposure_identifier(group),
            rule: rule.clone(),
        });
    }
    found
}

pub struct NetworkIngressPillar {
    client: Arc<dyn NetworkClient>,
}

impl NetworkIngressPillar {
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Inspector for NetworkIngressPillar {
    type Target = Exposure;

    fn pillar(&self) -> Pillar {
        Pillar::NetworkIngress
    }

    async fn inspect(&self) -> Result<Inspection<Exposure>, ClientError> {
        let groups = self.client.describe_security_groups().await?;
        let mut inspection = Inspection::new();
        for group in &groups {
            let found = exposures(group);
            if !found.is_empty() {
                debug!(group = group.group_id.as_str(), rules = found.len(); "Security group exposed");
            }
            inspection.targets.extend(found);
        }
        Ok(inspection)
    }

    fn finding(&self, target: &Exposure) -> Finding {
        Finding::new(
            Pillar::NetworkIngress,
            ResourceKind::SecurityGroup,
            target.identifier.clone(),
            Severity::Critical,
        )
    }
}

#[async_trait]
impl Remediator for NetworkIngressPillar {
    /// Revokes only the offending rule, exactly as it was described.
    async fn remediate(&self, target: &Exposure) -> Result<(), ClientError> {
        self.client.revoke_ingress(&target.group_id, &target.rule).await
    }
}
