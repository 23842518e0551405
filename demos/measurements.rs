//! Binomial heap measurement driver
//!
//! For `m` in 1000, 2000, 3000: inserts the keys `1..m` into an empty heap,
//! then deletes the minimum once. Prints one line per `m`:
//!
//! ```text
//! m links binary_rep_before binary_rep_after elapsed
//! ```
//!
//! where `links` is the number of tree links the inserts performed and the
//! binary representations are printed most significant bit first.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example measurements
//!
//! # With hardware counters (requires Linux)
//! sudo sysctl kernel.perf_event_paranoid=1
//! cargo run --release --features perf-counters --example measurements
//! ```

use binomial_heap::binomial::BinomialHeap;
use binomial_heap::Key;
use std::time::{Duration, Instant};

/// Result of one measurement round
struct Round {
    m: Key,
    links: u64,
    before: String,
    after: String,
    elapsed: Duration,
}

/// Formats a root occupancy vector most significant bit first
fn binary_rep_to_string(bits: &[bool]) -> String {
    bits.iter()
        .rev()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

fn run_round(m: Key) -> Round {
    let start = Instant::now();

    let mut heap = BinomialHeap::new();
    for value in 1..m {
        heap.insert(value);
    }
    let links = heap.link_count();

    let before = binary_rep_to_string(&heap.binary_rep());
    heap.delete_min();
    let after = binary_rep_to_string(&heap.binary_rep());

    Round {
        m,
        links,
        before,
        after,
        elapsed: start.elapsed(),
    }
}

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
mod perf {
    use perf_event::events::Hardware;
    use perf_event::{Builder, Group};
    use std::io;

    #[derive(Debug, Clone)]
    pub struct PerfMetrics {
        pub instructions: u64,
        pub cycles: u64,
    }

    impl PerfMetrics {
        pub fn ipc(&self) -> f64 {
            if self.cycles == 0 {
                0.0
            } else {
                self.instructions as f64 / self.cycles as f64
            }
        }
    }

    pub fn measure_perf<F, R>(f: F) -> io::Result<(R, PerfMetrics)>
    where
        F: FnOnce() -> R,
    {
        let mut group = Group::new()?;
        let cycles = Builder::new()
            .group(&mut group)
            .kind(Hardware::CPU_CYCLES)
            .build()?;
        let instructions = Builder::new()
            .group(&mut group)
            .kind(Hardware::INSTRUCTIONS)
            .build()?;

        group.enable()?;
        let result = f();
        group.disable()?;

        let counts = group.read()?;
        let metrics = PerfMetrics {
            instructions: counts[&instructions],
            cycles: counts[&cycles],
        };

        Ok((result, metrics))
    }
}

#[cfg(all(feature = "perf-counters", target_os = "linux"))]
fn main() {
    for m in (1000..=3000).step_by(1000) {
        let (round, metrics) = perf::measure_perf(|| run_round(m)).unwrap_or_else(|e| {
            eprintln!("\nError: Failed to read hardware counters: {}", e);
            eprintln!("To fix this, run: sudo sysctl kernel.perf_event_paranoid=1");
            std::process::exit(1);
        });

        println!(
            "{} {} {} {} {:?} instructions={} cycles={} ipc={:.2}",
            round.m,
            round.links,
            round.before,
            round.after,
            round.elapsed,
            metrics.instructions,
            metrics.cycles,
            metrics.ipc()
        );
    }
}

#[cfg(not(all(feature = "perf-counters", target_os = "linux")))]
fn main() {
    for m in (1000..=3000).step_by(1000) {
        let round = run_round(m);
        println!(
            "{} {} {} {} {:?}",
            round.m, round.links, round.before, round.after, round.elapsed
        );
    }
}
