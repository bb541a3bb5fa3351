use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A single cursor-list operation, for randomized runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(u32),
    Advance,
    Retreat,
    Select(usize),
}

/// Generates a reproducible operation sequence from a seed.
///
/// Select offsets deliberately run past any realistic list length so the
/// wrap-around path gets exercised.
#[allow(dead_code)]
pub fn random_ops(count: usize, seed: usize) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed as u64);

    (0..count)
        .map(|_| match rng.random_range(0..4) {
            0 => Op::Push(rng.random_range(0..1000)),
            1 => Op::Advance,
            2 => Op::Retreat,
            _ => Op::Select(rng.random_range(0..64)),
        })
        .collect()
}
