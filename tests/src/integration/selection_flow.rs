//! # Selection Flow
//!
//! Validator selection across independent nodes.
//!
//! ## Flow Tested:
//!
//! 1. **Hash-only agreement**: nodes with the same peer set pick the same validators
//! 2. **Key registration**: agents publish SPKI PEM keys before the seed is known
//! 3. **Claims**: each agent proves its own score; claims travel as JSON
//! 4. **Verification**: coordinators check every claim and agree on the result
//! 5. **Fraud**: inflated or misattributed claims are rejected, not selected

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use swarm_crypto::{vrf, VrfProof};
    use swarm_discovery::{
        select_validators, ManualTimeSource, RejectReason, ValidatorSelector, VerifiedScores,
    };
    use swarm_node::{NodeConfig, SwarmNode};

    const SEED: &str = "paper-2024-0042";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn node(agent_id: &str) -> SwarmNode {
        let config = NodeConfig {
            agent_id: agent_id.to_string(),
            ..NodeConfig::default()
        };
        SwarmNode::new(config, Arc::new(ManualTimeSource::new(1_000))).unwrap()
    }

    fn agents(count: usize) -> Vec<SwarmNode> {
        (0..count).map(|i| node(&format!("reviewer-{}", i))).collect()
    }

    /// Key registration happens before the seed is published.
    fn register_keys(agents: &[SwarmNode]) -> VerifiedScores {
        let mut scores = VerifiedScores::new();
        for agent in agents {
            scores
                .register_pem(agent.config().agent_id.clone(), &agent.public_key_pem().unwrap())
                .unwrap();
        }
        scores
    }

    /// Each agent proves its own claim; the coordinator receives JSON.
    fn collect_claims(agents: &[SwarmNode], scores: &mut VerifiedScores) {
        for agent in agents {
            let wire = serde_json::to_string(&agent.prove(SEED).unwrap()).unwrap();
            let claim: VrfProof = serde_json::from_str(&wire).unwrap();
            scores.submit_claim(agent.config().agent_id.clone(), claim);
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: HASH-ONLY
    // =============================================================================

    #[test]
    fn test_nodes_with_same_peers_agree_on_validators() {
        let first = node("observer-a");
        let second = node("observer-b");
        for i in 0..20 {
            let descriptor = swarm_discovery::RawPeerDescriptor {
                source_id: Some(format!("reviewer-{}", i)),
                ..Default::default()
            };
            first.handle_announce(descriptor.clone());
            second.handle_announce(descriptor);
        }

        let a: Vec<_> = first.select_validators(SEED, 5).into_iter().map(|p| p.source_id).collect();
        let b: Vec<_> = second.select_validators(SEED, 5).into_iter().map(|p| p.source_id).collect();

        assert_eq!(a.len(), 5);
        assert_eq!(a, b);

        let direct = select_validators((0..20).map(|i| format!("reviewer-{}", i)), SEED, 5);
        assert_eq!(a, direct);
    }

    #[test]
    fn test_different_seeds_pick_different_committees() {
        let ids: Vec<String> = (0..50).map(|i| format!("reviewer-{}", i)).collect();

        let committees: Vec<Vec<String>> = (0..10)
            .map(|round| select_validators(ids.clone(), &format!("paper-{}", round), 5))
            .collect();

        let distinct = committees
            .iter()
            .filter(|c| **c != committees[0])
            .count();
        assert!(distinct > 0);
    }

    // =============================================================================
    // INTEGRATION TESTS: VERIFIED
    // =============================================================================

    #[test]
    fn test_coordinators_agree_on_verified_selection() {
        let agents = agents(8);
        let ids: Vec<String> = agents.iter().map(|a| a.config().agent_id.clone()).collect();

        let mut left = register_keys(&agents);
        let mut right = register_keys(&agents);
        collect_claims(&agents, &mut left);
        collect_claims(&agents, &mut right);

        let left = ValidatorSelector::verified(left).select(ids.clone(), SEED, 3);
        let right = ValidatorSelector::verified(right).select(ids.clone(), SEED, 3);

        assert_eq!(left.len(), 3);
        assert!(left.rejected.is_empty());
        assert_eq!(left.ids(), right.ids());

        // Winners are the agents with the highest proven y.
        let mut by_y: Vec<(f64, String)> = agents
            .iter()
            .map(|a| (a.prove(SEED).unwrap().y, a.config().agent_id.clone()))
            .collect();
        by_y.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        let expected: Vec<&str> = by_y.iter().take(3).map(|(_, id)| id.as_str()).collect();
        assert_eq!(left.ids(), expected);
    }

    #[test]
    fn test_inflated_score_is_rejected() {
        let agents = agents(4);
        let ids: Vec<String> = agents.iter().map(|a| a.config().agent_id.clone()).collect();
        let mut scores = register_keys(&agents);
        collect_claims(&agents, &mut scores);

        let cheater = &agents[0];
        let mut claim = cheater.prove(SEED).unwrap();
        claim.y = 0.999_999;
        scores.submit_claim(cheater.config().agent_id.clone(), claim);

        let selection = ValidatorSelector::verified(scores).select(ids, SEED, 4);

        assert_eq!(selection.len(), 3);
        assert!(!selection.ids().contains(&"reviewer-0"));
        assert_eq!(selection.rejected.len(), 1);
        assert_eq!(selection.rejected[0].candidate_id, "reviewer-0");
        assert_eq!(selection.rejected[0].reason, RejectReason::VerificationFailed);
    }

    #[test]
    fn test_claim_replayed_under_another_identity_is_rejected() {
        let agents = agents(3);
        let mut scores = register_keys(&agents);

        // reviewer-1 submits reviewer-0's proof as its own.
        let stolen = agents[0].prove(SEED).unwrap();
        scores.submit_claim("reviewer-1", stolen);

        assert_eq!(
            ValidatorSelector::verified(scores).score("reviewer-1", SEED),
            Err(RejectReason::VerificationFailed)
        );
    }

    #[test]
    fn test_claim_for_another_seed_is_rejected() {
        let agents = agents(1);
        let mut scores = register_keys(&agents);
        scores.submit_claim("reviewer-0", agents[0].prove("some-other-paper").unwrap());

        assert_eq!(
            ValidatorSelector::verified(scores).score("reviewer-0", SEED),
            Err(RejectReason::VerificationFailed)
        );
    }

    #[test]
    fn test_unregistered_and_silent_agents_are_reported() {
        let agents = agents(2);
        let mut scores = register_keys(&agents[..1]);
        collect_claims(&agents[..1], &mut scores);
        scores.register_pem("reviewer-9", &agents[1].public_key_pem().unwrap()).unwrap();

        let candidates = vec!["reviewer-0", "reviewer-1", "reviewer-9"];
        let selection = ValidatorSelector::verified(scores).select(candidates, SEED, 3);

        assert_eq!(selection.ids(), vec!["reviewer-0"]);
        let reasons: Vec<_> = selection
            .rejected
            .iter()
            .map(|r| (r.candidate_id.as_str(), r.reason.clone()))
            .collect();
        assert_eq!(
            reasons,
            vec![
                ("reviewer-1", RejectReason::UnknownIdentity),
                ("reviewer-9", RejectReason::MissingProof),
            ]
        );
    }

    #[test]
    fn test_claim_verifies_from_transport_forms() {
        let agent = node("reviewer-0");
        let claim = agent.prove(SEED).unwrap();
        let rebuilt = VrfProof::from_base64(claim.y, &claim.proof_base64()).unwrap();

        assert_eq!(
            vrf::verify_encoded("reviewer-0", SEED, &rebuilt, &agent.public_key_pem().unwrap()),
            Ok(true)
        );
    }

    #[test]
    fn test_node_selection_with_locally_held_keys() {
        let coordinator = node("coordinator");
        let keys = coordinator.keys();
        let ids: Vec<String> = (0..6).map(|i| format!("local-{}", i)).collect();
        for id in &ids {
            keys.generate_for(id).unwrap();
        }

        let scores = VerifiedScores::collect_local(&keys, ids.iter().map(String::as_str), SEED).unwrap();
        let verified = ValidatorSelector::verified(scores).select(ids.clone(), SEED, 6);

        assert_eq!(verified.len(), 6);
        assert!(verified.rejected.is_empty());
        assert!(verified
            .validators
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }
}
