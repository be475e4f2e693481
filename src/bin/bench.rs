/// Profile rendering micro-benchmarks.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for domain
/// state generation, and std::hint::black_box to prevent dead-code
/// elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use wetfront::domain::Domain;
use wetfront::profile::render_into;
use wetfront::retention::{RetentionCurve, SoilBins, VanGenuchten};

const REPEATS: usize = 7;

fn sandy_loam(num_bins: usize) -> SoilBins {
    let curve = RetentionCurve::VanGenuchten(VanGenuchten::new(7.5, 1.89).unwrap());
    SoilBins::discretize(curve, num_bins, 0.41, 0.065).unwrap()
}

/// Generate a mid-infiltration domain: descending surface fronts for every
/// active bin and a scattering of slugs in the wetter bins.
fn make_domain(bins: &SoilBins, seed: u64) -> Domain {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let n = bins.num_bins();
    let mut domain = Domain::new(bins, 0.0, 1.0, false, 0.08, 1.0);

    // Drier bins run deeper.
    let mut fronts: Vec<f64> = (2..=n).map(|_| next_f64()).collect();
    fronts.sort_by(|a, b| b.partial_cmp(a).unwrap());
    for (k, front) in fronts.iter().enumerate() {
        domain.surface_front[k + 2] = *front;
    }

    for ii in (n / 2..n).step_by(7) {
        let top = 0.9 * next_f64();
        domain.push_slug(ii, top, top + 0.01);
    }

    domain
}

fn uniform_mesh(num_elements: usize) -> Vec<f64> {
    (1..=num_elements)
        .map(|jj| jj as f64 / num_elements as f64)
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_bins(bin_counts: &[usize]) -> Vec<(String, Duration)> {
    let mesh = uniform_mesh(1000);
    let mut results = Vec::new();

    for &n in bin_counts {
        let bins = sandy_loam(n);
        let domain = make_domain(&bins, 42);
        let mut wc = vec![0.0; mesh.len()];
        let mut ph = vec![0.0; mesh.len()];

        // Warmup
        black_box(render_into(&domain, &bins, &mesh, &mut wc, &mut ph).unwrap());

        let dur = median_time(|| {
            black_box(render_into(&domain, &bins, &mesh, &mut wc, &mut ph).unwrap());
        });
        results.push((format!("render {n} bins / 1000 elems"), dur));
    }
    results
}

fn bench_mesh(mesh_sizes: &[usize]) -> Vec<(String, Duration)> {
    let bins = sandy_loam(300);
    let domain = make_domain(&bins, 42);
    let mut results = Vec::new();

    for &m in mesh_sizes {
        let mesh = uniform_mesh(m);
        let mut wc = vec![0.0; m];
        let mut ph = vec![0.0; m];

        // Warmup
        black_box(render_into(&domain, &bins, &mesh, &mut wc, &mut ph).unwrap());

        let dur = median_time(|| {
            black_box(render_into(&domain, &bins, &mesh, &mut wc, &mut ph).unwrap());
        });
        results.push((format!("render 300 bins / {m} elems"), dur));
    }
    results
}

fn main() {
    println!("Profile Rendering Benchmarks");
    println!("============================================");
    println!("{:<32} {:>10}", "Case", "Median (µs)");
    println!("--------------------------------------------");

    let mut all_results = Vec::new();
    all_results.extend(bench_bins(&[100, 300, 1000]));
    all_results.extend(bench_mesh(&[100, 1000, 10000]));

    for (case, dur) in &all_results {
        let us = dur.as_secs_f64() * 1e6;
        println!("{:<32} {:>10.2}", case, us);
    }

    println!("============================================");
}
