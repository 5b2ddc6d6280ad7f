//! # Validation Swarm Benchmarks
//!
//! | Area | Operation | Target |
//! |------|-----------|--------|
//! | Routing table | `add_peer` into a populated table | < 10µs |
//! | Routing table | `find_closest` over a full table | < 1ms |
//! | Selection | hash-only top-N over 1000 candidates | < 1ms |
//! | VRF | prove / verify | < 100µs |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swarm_crypto::{vrf, KeyPair};
use swarm_discovery::{
    node_id_for, select_validators, KademliaConfig, PeerDescriptor, RoutingTable, Timestamp,
    ValidatorSelector, VerifiedScores,
};

fn populated_table(peers: usize) -> RoutingTable {
    let mut table = RoutingTable::for_agent("bench-local", KademliaConfig::default());
    let now = Timestamp::from_millis(0);
    for i in 0..peers {
        if let Ok(descriptor) = PeerDescriptor::new(format!("peer-{}", i)) {
            table.add_peer(descriptor, now);
        }
    }
    table
}

// ============================================================================
// Routing table
// ============================================================================

fn bench_routing_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing-table");
    group.measurement_time(Duration::from_secs(5));

    for size in [100usize, 1_000, 5_000] {
        let table = populated_table(size);
        let target = node_id_for("lookup-target");

        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(BenchmarkId::new("find_closest_20", size), &table, |b, table| {
            b.iter(|| black_box(table.find_closest(&target, 20)))
        });
    }

    group.bench_function("add_peer_refresh", |b| {
        let mut table = populated_table(1_000);
        let mut tick = 0u64;
        b.iter(|| {
            tick += 1;
            let descriptor = PeerDescriptor::new("peer-7").map(|d| d.with_contributions(tick));
            if let Ok(descriptor) = descriptor {
                black_box(table.add_peer(descriptor, Timestamp::from_millis(tick)));
            }
        })
    });

    group.bench_function("evict_stale_full_sweep", |b| {
        b.iter_batched(
            || populated_table(1_000),
            |mut table| black_box(table.evict_stale(Timestamp::from_millis(u64::MAX))),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

// ============================================================================
// Validator selection
// ============================================================================

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    let ids: Vec<String> = (0..1_000).map(|i| format!("reviewer-{}", i)).collect();
    group.throughput(Throughput::Elements(ids.len() as u64));
    group.bench_function("hash_only_top_5_of_1000", |b| {
        b.iter(|| black_box(select_validators(ids.iter().map(String::as_str), "paper-1", 5)))
    });

    let keys: Vec<KeyPair> = (0..50u8).map(|i| KeyPair::from_seed([i; 32])).collect();
    let mut scores = VerifiedScores::new();
    let verified_ids: Vec<String> = (0..keys.len()).map(|i| format!("verified-{}", i)).collect();
    for (id, key) in verified_ids.iter().zip(&keys) {
        scores.register_key(id.clone(), key.public_key());
        scores.submit_claim(id.clone(), vrf::prove(id, "paper-1", key));
    }
    let selector = ValidatorSelector::verified(scores);
    group.throughput(Throughput::Elements(verified_ids.len() as u64));
    group.bench_function("verified_top_5_of_50", |b| {
        b.iter(|| black_box(selector.select(verified_ids.iter().map(String::as_str), "paper-1", 5)))
    });

    group.finish();
}

// ============================================================================
// VRF
// ============================================================================

fn bench_vrf(c: &mut Criterion) {
    let mut group = c.benchmark_group("vrf");
    let keypair = KeyPair::from_seed([42u8; 32]);
    let public_key = keypair.public_key();
    let claim = vrf::prove("reviewer-0", "paper-1", &keypair);

    group.bench_function("prove", |b| {
        b.iter(|| black_box(vrf::prove(black_box("reviewer-0"), "paper-1", &keypair)))
    });
    group.bench_function("verify", |b| {
        b.iter(|| {
            black_box(vrf::verify(
                "reviewer-0",
                "paper-1",
                claim.y,
                &claim.proof,
                &public_key,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_routing_table, bench_selection, bench_vrf);
criterion_main!(benches);
