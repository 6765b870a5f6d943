//! # Cross-Subsystem Integration Scenarios
//!
//! Each module builds a fully wired engine over mock collaborators and
//! exercises one slice of the outward operation surface.

pub mod certified_assets;
pub mod review_lifecycle;
pub mod sync_flows;

#[cfg(test)]
pub(crate) mod fixtures {
    use gr_01_authorization::MockProfileDirectory;
    use gr_02_proposals::{NewProposal, Topic};
    use gr_03_proposal_sync::MockGovernanceClient;
    use gr_05_certified_assets::NetworkIdentity;
    use gr_runtime::{Engine, EngineConfig};
    use shared_types::Principal;
    use std::sync::Arc;

    /// Reviewer profile id 1.
    pub fn alice() -> Principal {
        Principal::new("alice")
    }

    /// Reviewer profile id 2.
    pub fn bob() -> Principal {
        Principal::new("bob")
    }

    /// Admin profile id 3.
    pub fn admin() -> Principal {
        Principal::new("root")
    }

    /// A principal with no profile at all.
    pub fn stranger() -> Principal {
        Principal::new("mallory")
    }

    /// Engine wired over mock collaborators with the given config.
    pub fn make_engine_with(config: EngineConfig) -> (Engine, Arc<MockGovernanceClient>) {
        let dir = MockProfileDirectory::new();
        dir.register_reviewer(alice(), 1);
        dir.register_reviewer(bob(), 2);
        dir.register_admin(admin(), 3);

        let governance = Arc::new(MockGovernanceClient::new());
        let engine = Engine::new(
            config,
            Arc::new(dir),
            governance.clone(),
            NetworkIdentity::from_seed([23u8; 32]),
        );
        (engine, governance)
    }

    /// Engine with the testing config (60s review period, 5-item pages).
    pub fn make_engine() -> (Engine, Arc<MockGovernanceClient>) {
        make_engine_with(EngineConfig::for_testing())
    }

    /// A backlog of allow-listed proposals, all submitted at `proposed_at`.
    pub fn make_backlog(count: u64, proposed_at: u64) -> Vec<NewProposal> {
        (0..count)
            .map(|i| NewProposal {
                external_id: 100 + i,
                topic: Topic::SystemUpgrade,
                proposer: "authority-node-7".to_string(),
                title: format!("proposal {i}"),
                summary: "summary".to_string(),
                proposed_at,
            })
            .collect()
    }

    /// Sync the backlog and return the id of the first listed proposal.
    pub async fn sync_one_proposal(
        engine: &Engine,
        governance: &MockGovernanceClient,
        proposed_at: u64,
    ) -> u64 {
        governance.set_backlog(make_backlog(1, proposed_at));
        engine.sync_proposals(&admin(), proposed_at).await.unwrap();
        engine
            .list_proposals(gr_02_proposals::StateFilter::Any)
            .unwrap()[0]
            .id
    }
}
