//! # Announce Flow
//!
//! Presence announces travelling between nodes and landing in each node's
//! routing table.
//!
//! ## Flow Tested:
//!
//! 1. **Node → Node**: `self_descriptor` of one node is announced to another
//! 2. **JSON transport**: the same payload survives a JSON hop
//! 3. **Lookup**: `find_closest` on a fully meshed swarm returns the target first
//! 4. **Staleness**: the node's background task drops silent peers

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;

    use swarm_discovery::{
        node_id_for, xor_distance, AddPeerOutcome, AnnounceOutcome, KademliaConfig,
        ManualTimeSource, PeerDiscoveryApi, RawPeerDescriptor, NUM_BUCKETS,
    };
    use swarm_node::{NodeConfig, SwarmNode};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn node_with(agent_id: &str, kademlia: KademliaConfig, clock: &Arc<ManualTimeSource>) -> SwarmNode {
        let config = NodeConfig {
            agent_id: agent_id.to_string(),
            display_name: Some(format!("Agent {}", agent_id)),
            address: Some(format!("http://{}.swarm.local", agent_id)),
            kademlia,
            ..NodeConfig::default()
        };
        SwarmNode::new(config, clock.clone()).unwrap()
    }

    /// Five nodes that have all heard from each other.
    fn meshed_swarm(clock: &Arc<ManualTimeSource>) -> Vec<SwarmNode> {
        let nodes: Vec<_> = (0..5)
            .map(|i| node_with(&format!("agent-{}", i), KademliaConfig::default(), clock))
            .collect();

        for from in &nodes {
            for to in &nodes {
                to.handle_announce(from.self_descriptor());
            }
        }
        nodes
    }

    fn announce(id: &str) -> RawPeerDescriptor {
        RawPeerDescriptor {
            source_id: Some(id.to_string()),
            ..RawPeerDescriptor::default()
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: NODE TO NODE
    // =============================================================================

    #[test]
    fn test_meshed_nodes_know_every_other_node() {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let nodes = meshed_swarm(&clock);

        for node in &nodes {
            let stats = node.service().stats();
            assert_eq!(stats.total_peers, nodes.len() - 1);
            assert!(!node.service().contains(&node.config().agent_id));
        }
    }

    #[test]
    fn test_announced_metadata_is_kept() {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let nodes = meshed_swarm(&clock);

        let peer = nodes[0].service().get_peer("agent-3").unwrap();
        assert_eq!(peer.display_name.as_deref(), Some("Agent agent-3"));
        assert_eq!(peer.address.as_deref(), Some("http://agent-3.swarm.local"));
        assert_eq!(peer.last_seen, 10_000);
    }

    #[test]
    fn test_find_closest_on_mesh_returns_target_first() {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let nodes = meshed_swarm(&clock);
        let target = node_id_for("agent-4");

        let closest = nodes[0].service().find_closest(&target, 3);

        assert_eq!(closest.len(), 3);
        assert_eq!(closest[0].source_id, "agent-4");
        let distances: Vec<_> = closest
            .iter()
            .map(|p| xor_distance(&node_id_for(&p.source_id), &target))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_announce_over_json_transport() {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let alice = node_with("alice", KademliaConfig::default(), &clock);
        let bob = node_with("bob", KademliaConfig::default(), &clock);

        let payload = serde_json::to_string(&alice.self_descriptor()).unwrap();
        let outcome = bob.service().announce_json(&payload);

        assert!(matches!(
            outcome,
            AnnounceOutcome::Applied(AddPeerOutcome::Inserted { .. })
        ));
        assert_eq!(
            bob.service().get_peer("alice").unwrap().display_name.as_deref(),
            Some("Agent alice")
        );
    }

    #[test]
    fn test_reannounce_refreshes_instead_of_duplicating() {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let alice = node_with("alice", KademliaConfig::default(), &clock);

        alice.handle_announce(announce("bob"));
        clock.advance(500);
        let outcome = alice.handle_announce(announce("bob"));

        assert!(matches!(
            outcome,
            AnnounceOutcome::Applied(AddPeerOutcome::Refreshed { .. })
        ));
        assert_eq!(alice.service().stats().total_peers, 1);
        assert_eq!(alice.service().get_peer("bob").unwrap().last_seen, 10_500);
    }

    #[test]
    fn test_node_built_from_config_file_honours_bucket_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[node]\nagent_id = \"file-agent\"\n\n[kademlia]\nk = 2\nstale_after_ms = 60000\n"
        )
        .unwrap();
        let config = NodeConfig::load(file.path()).unwrap();
        let node = SwarmNode::new(config, Arc::new(ManualTimeSource::new(0))).unwrap();

        for i in 0..200 {
            node.handle_announce(announce(&format!("peer-{}", i)));
        }

        let service = node.service();
        service.with_table(|table| {
            for index in 0..NUM_BUCKETS {
                assert!(table.bucket(index).unwrap().len() <= 2);
            }
        });
        // Half of all ids land in bucket 0, so it must have overflowed.
        assert!(service.stats().total_peers < 200);
    }

    // =============================================================================
    // INTEGRATION TESTS: STALENESS
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_silent_peers_are_evicted_by_running_node() {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let kademlia = KademliaConfig {
            stale_after_ms: 2_000,
            eviction_interval_secs: 5,
            ..KademliaConfig::default()
        };
        let node = node_with("watcher", kademlia, &clock);
        node.handle_announce(announce("chatty"));
        node.handle_announce(announce("silent"));
        node.start().unwrap();
        tokio::task::yield_now().await;

        // Only "chatty" keeps announcing.
        for _ in 0..3 {
            clock.advance(1_000);
            node.handle_announce(announce("chatty"));
        }
        tokio::time::sleep(Duration::from_secs(6)).await;

        let service = node.service();
        assert!(service.contains("chatty"));
        assert!(!service.contains("silent"));

        node.shutdown().await;
    }
}
