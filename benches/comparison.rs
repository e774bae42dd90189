//! Benchmarks comparing in-place view operations with gathering the strided
//! elements into a `Vec`, operating there and scattering them back, using divan.
//!
//! Run with: `cargo bench`

use strided_view::{SliceRange, View};

fn main() {
    divan::main();
}

const STEP: isize = 3;

fn strided() -> SliceRange {
    SliceRange::new(Some(1), None, Some(STEP))
}

// Trait to abstract over the two strategies for generic benchmarks
trait Strategy {
    fn get_sum(origin: &mut Vec<i32>) -> i32;
    fn reverse(origin: &mut Vec<i32>);
    fn sort(origin: &mut Vec<i32>);
    fn partial_sort(origin: &mut Vec<i32>, k: usize);
}

/// Works on the origin through a view.
struct ThroughView;

/// Copies the strided elements out, works on the copy and copies them back.
struct GatherScatter;

fn positions(len: usize) -> impl Iterator<Item = usize> {
    (1..len).step_by(STEP as usize)
}

fn gather(origin: &[i32]) -> Vec<i32> {
    positions(origin.len()).map(|p| origin[p]).collect()
}

fn scatter(origin: &mut [i32], values: Vec<i32>) {
    for (p, v) in positions(origin.len()).zip(values) {
        origin[p] = v;
    }
}

impl Strategy for ThroughView {
    fn get_sum(origin: &mut Vec<i32>) -> i32 {
        let view = View::with_range(origin, strided()).unwrap();
        let mut sum = 0i32;
        for i in 0..view.len() {
            sum = sum.wrapping_add(view[i]);
        }
        sum
    }
    fn reverse(origin: &mut Vec<i32>) {
        View::with_range(origin, strided()).unwrap().reverse().unwrap();
    }
    fn sort(origin: &mut Vec<i32>) {
        View::with_range(origin, strided()).unwrap().sort().unwrap();
    }
    fn partial_sort(origin: &mut Vec<i32>, k: usize) {
        let mut view = View::with_range(origin, strided()).unwrap();
        let k = k.min(view.len());
        view.partial_sort(k).unwrap();
    }
}

impl Strategy for GatherScatter {
    fn get_sum(origin: &mut Vec<i32>) -> i32 {
        gather(origin).iter().fold(0i32, |sum, &x| sum.wrapping_add(x))
    }
    fn reverse(origin: &mut Vec<i32>) {
        let mut values = gather(origin);
        values.reverse();
        scatter(origin, values);
    }
    fn sort(origin: &mut Vec<i32>) {
        let mut values = gather(origin);
        values.sort_unstable();
        scatter(origin, values);
    }
    fn partial_sort(origin: &mut Vec<i32>, k: usize) {
        let mut values = gather(origin);
        let k = k.min(values.len());
        if k > 0 {
            values.select_nth_unstable(k - 1);
            values[..k].sort_unstable();
        }
        scatter(origin, values);
    }
}

fn random_data(n: usize) -> Vec<i32> {
    use rand::prelude::*;
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random()).collect()
}

// ============================================================================
// Access Benchmarks
// ============================================================================

#[divan::bench(types = [ThroughView, GatherScatter], consts = [100, 1000, 10000])]
fn sequential_read<S: Strategy, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| (0..N as i32).collect::<Vec<i32>>())
        .bench_local_refs(|v| S::get_sum(v));
}

#[divan::bench(consts = [100, 1000, 10000])]
fn random_read<const N: usize>(bencher: divan::Bencher) {
    use rand::prelude::*;
    let mut rng = rand::rng();
    let view_len = (N - 1).div_ceil(STEP as usize);
    let indices: Vec<isize> = (0..N)
        .map(|_| rng.random_range(0..view_len) as isize)
        .collect();

    bencher
        .with_inputs(|| (0..N as i32).collect::<Vec<i32>>())
        .bench_local_refs(|v| {
            let view = View::with_range(v, strided()).unwrap();
            let mut sum = 0i32;
            for &i in &indices {
                sum = sum.wrapping_add(*view.get(i).unwrap());
            }
            sum
        });
}

#[divan::bench(consts = [100, 1000, 10000])]
fn iterate<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| (0..N as i32).collect::<Vec<i32>>())
        .bench_local_refs(|v| {
            let view = View::with_range(v, strided()).unwrap();
            view.iter().fold(0i32, |sum, &x| sum.wrapping_add(x))
        });
}

// ============================================================================
// Reordering Benchmarks
// ============================================================================

#[divan::bench(types = [ThroughView, GatherScatter], consts = [100, 1000, 10000])]
fn reverse<S: Strategy, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| (0..N as i32).collect::<Vec<i32>>())
        .bench_local_values(|mut v| {
            S::reverse(&mut v);
            v
        });
}

#[divan::bench(types = [ThroughView, GatherScatter], consts = [100, 1000, 10000])]
fn sort<S: Strategy, const N: usize>(bencher: divan::Bencher) {
    let data = random_data(N);

    bencher
        .with_inputs(|| data.clone())
        .bench_local_values(|mut v| {
            S::sort(&mut v);
            v
        });
}

#[divan::bench(types = [ThroughView, GatherScatter], consts = [100, 1000, 10000])]
fn partial_sort<S: Strategy, const N: usize>(bencher: divan::Bencher) {
    let data = random_data(N);

    bencher
        .with_inputs(|| data.clone())
        .bench_local_values(|mut v| {
            S::partial_sort(&mut v, 10);
            v
        });
}

#[divan::bench(consts = [6, 8])]
fn next_permutation_cycle<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| (0..2 * N as i32).collect::<Vec<i32>>())
        .bench_local_values(|mut v| {
            let mut view = View::with_range(&mut v, SliceRange::full().step_by(2)).unwrap();
            let mut count = 0usize;
            while view.next_permutation().unwrap() {
                count += 1;
            }
            drop(view);
            (v, count)
        });
}

// ============================================================================
// Structural Benchmarks
// ============================================================================

#[divan::bench(consts = [100, 1000, 10000])]
fn insert_delete<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| (0..N as i32).collect::<Vec<i32>>())
        .bench_local_values(|mut v| {
            let mut view = View::with_range(&mut v, strided()).unwrap();
            for i in 0..100 {
                view.insert(0, i).unwrap();
                view.delete(-1).unwrap();
            }
            drop(view);
            v
        });
}
