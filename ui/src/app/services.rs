use std::rc::Rc;

use crate::services::config::HynsConfig;
use crate::services::decision::{BrowserRandom, DecisionSource};
use crate::services::registry::{DeviceRegistry, SimulatedRegistry};

/// Shared handles every screen reaches through context.
#[derive(Clone)]
pub struct AppServices {
    pub config: HynsConfig,
    pub registry: Rc<dyn DeviceRegistry>,
    pub decisions: Rc<dyn DecisionSource>,
}

impl AppServices {
    /// Simulated registry with outcomes drawn from `Math.random`.
    pub fn simulated(config: HynsConfig) -> Self {
        let decisions: Rc<dyn DecisionSource> = Rc::new(BrowserRandom);
        Self::with_decisions(config, decisions)
    }

    pub fn with_decisions(config: HynsConfig, decisions: Rc<dyn DecisionSource>) -> Self {
        let registry = Rc::new(SimulatedRegistry::new(config.clone(), decisions.clone()));
        Self {
            config,
            registry,
            decisions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::Role;
    use crate::features::verification::{Imei, VerificationResult};
    use crate::services::decision::{assign_role, ScriptedDecisions};

    #[tokio::test]
    async fn test_services_share_one_decision_source() {
        let decisions: Rc<dyn DecisionSource> = Rc::new(ScriptedDecisions::new(vec![0.1, 0.9]));
        let services = AppServices::with_decisions(HynsConfig::instant(), decisions);

        assert_eq!(
            assign_role(services.decisions.as_ref(), &services.config.outcomes),
            Role::Admin
        );

        let imei = Imei::parse("356789012345679").unwrap();
        let result = services.registry.verify_imei(&imei).await.unwrap();
        assert_eq!(result, VerificationResult::Stolen);
    }
}
