use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ballot_engine::Ballot;
use ballot_types::{Identity, ProposalName};

fn id(n: u64) -> Identity {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&n.to_be_bytes());
    Identity::new(bytes)
}

fn flavor_names(count: usize) -> Vec<ProposalName> {
    (0..count)
        .map(|i| ProposalName::new(&format!("P{}", i)).unwrap())
        .collect()
}

const CHAIR: u64 = u64::MAX;

/// A ballot whose voters 0..len form one delegation chain ending at len-1,
/// with one extra authorized voter left uncommitted.
fn make_chained_ballot(len: u64) -> Ballot {
    let mut ballot = Ballot::new(flavor_names(3), id(CHAIR)).unwrap();
    for n in 0..=len {
        ballot.authorize(id(CHAIR), id(n)).unwrap();
    }
    for n in 0..len - 1 {
        ballot.delegate(id(n), id(n + 1)).unwrap();
    }
    ballot
}

fn bench_delegate_chain_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("delegate_chain");

    for chain_len in [1u64, 10, 100, 1000] {
        let ballot = make_chained_ballot(chain_len);

        group.bench_with_input(
            BenchmarkId::new("resolve_and_forward", chain_len),
            &chain_len,
            |b, &len| {
                b.iter_batched(
                    || ballot.clone(),
                    |mut ballot| {
                        // The spare voter delegates into the chain head,
                        // walking the full chain to its end.
                        ballot.delegate(black_box(id(len)), black_box(id(0))).unwrap();
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_winning_proposal(c: &mut Criterion) {
    let mut group = c.benchmark_group("winning_proposal");

    for proposal_count in [1usize, 10, 100, 1000] {
        let mut ballot = Ballot::new(flavor_names(proposal_count), id(CHAIR)).unwrap();
        ballot.vote(id(CHAIR), proposal_count / 2).unwrap();

        group.bench_with_input(
            BenchmarkId::new("scan", proposal_count),
            &proposal_count,
            |b, _| {
                b.iter(|| black_box(ballot.winning_proposal()));
            },
        );
    }

    group.finish();
}

fn bench_vote(c: &mut Criterion) {
    let mut ballot = Ballot::new(flavor_names(3), id(CHAIR)).unwrap();
    ballot.authorize(id(CHAIR), id(1)).unwrap();

    c.bench_function("engine_vote", |b| {
        b.iter_batched(
            || ballot.clone(),
            |mut ballot| {
                ballot.vote(black_box(id(1)), black_box(1)).unwrap();
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_authorize(c: &mut Criterion) {
    let ballot = Ballot::new(flavor_names(3), id(CHAIR)).unwrap();

    c.bench_function("engine_authorize", |b| {
        b.iter_batched(
            || ballot.clone(),
            |mut ballot| {
                ballot.authorize(black_box(id(CHAIR)), black_box(id(1))).unwrap();
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_delegate_chain_resolution,
    bench_winning_proposal,
    bench_vote,
    bench_authorize,
);
criterion_main!(benches);
