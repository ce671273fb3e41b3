use std::collections::VecDeque;
use std::panic;

use rand::{thread_rng, Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

use circular_array::CircularArray;

#[test]
fn matches_vecdeque_model() {
    let mut rng = thread_rng();
    for i in 0..500 {
        let seed = rng.next_u64();
        let ops = rng.gen_range(1..=64);

        let result = panic::catch_unwind(|| model_iter(ops, seed));
        if result.is_err() {
            dbg!(i, ops, seed);
            panic!();
        }
    }
}

fn model_iter(ops: usize, seed: u64) {
    let mut rng = Pcg64::seed_from_u64(seed);

    let mut circ = CircularArray::new();
    let mut model = VecDeque::new();

    for op in 0..ops {
        if rng.gen_bool(0.6) {
            circ.append(op);
            model.push_back(op);
        } else {
            let delta: isize = rng.gen_range(-100..=100);
            circ.rotate(delta);
            if !model.is_empty() {
                let steps = delta.rem_euclid(model.len() as isize) as usize;
                model.rotate_left(steps);
            }
        }

        assert_eq!(circ.len(), model.len());
        for i in 0..model.len() {
            assert_eq!(circ.get(i), model.get(i));
        }
        assert_eq!(circ.get(model.len()), None);
        assert!(circ.iter().eq(model.iter()));
        assert!(circ.iter().rev().eq(model.iter().rev()));
    }

    let owned: Vec<_> = circ.into_iter().collect();
    let expected: Vec<_> = model.into_iter().collect();
    assert_eq!(owned, expected);
}

#[test]
fn rotation_is_additive() {
    let mut rng = Pcg64::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let len = rng.gen_range(1..=20);
        let a: isize = rng.gen_range(-1000..=1000);
        let b: isize = rng.gen_range(-1000..=1000);

        let base: CircularArray<usize> = (0..len).collect();

        let mut split = base.clone();
        split.rotate(a);
        split.rotate(b);

        let mut joined = base.clone();
        joined.rotate(a + b);

        assert_eq!(split, joined, "len={} a={} b={}", len, a, b);

        let mut lap = base.clone();
        lap.rotate(a * len as isize);
        assert_eq!(lap, base);
    }
}
