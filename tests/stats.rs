use follower::stats::{StreakSnapshot, StreamTracker};
use follower::utils::bits;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Geometric};

fn track(input: &[bool]) -> StreakSnapshot {
    let mut tracker = StreamTracker::new();
    for bit in input {
        tracker.record(*bit);
    }
    tracker.snapshot()
}

/// A run of 'len' zero bits between two set bits.
fn single_run(len: usize) -> StreakSnapshot {
    let mut input = vec![true];
    input.extend(std::iter::repeat(false).take(len));
    input.push(true);
    track(&input)
}

#[test]
fn test_single_runs() {
    let expect = |s2, s3, s4, s5| (s2, s3, s4, s5);
    let buckets = |s: StreakSnapshot| (s.streak2, s.streak3, s.streak4, s.streak5plus);

    assert_eq!(buckets(single_run(1)), expect(0, 0, 0, 0));
    assert_eq!(buckets(single_run(2)), expect(1, 0, 0, 0));
    assert_eq!(buckets(single_run(3)), expect(0, 1, 0, 0));
    assert_eq!(buckets(single_run(4)), expect(0, 0, 1, 0));
    assert_eq!(buckets(single_run(5)), expect(0, 0, 0, 1));
    // Longer runs are only counted once.
    assert_eq!(buckets(single_run(6)), expect(0, 0, 0, 1));
    assert_eq!(buckets(single_run(10)), expect(0, 0, 0, 1));

    let s = single_run(10);
    assert_eq!(s.total, 12);
    assert_eq!(s.zero_bits, 10);
    assert_eq!(s.ones(), 2);
}

#[test]
fn test_mixed_runs() {
    let s = track(&bits::parse("1 00 11 000 1111 00000 1"));
    assert_eq!(s.streak2, 2);
    assert_eq!(s.streak3, 1);
    assert_eq!(s.streak4, 1);
    assert_eq!(s.streak5plus, 1);
    assert_eq!(s.total, 18);
    assert_eq!(s.zero_bits, 10);
}

#[test]
fn test_leading_zeros_are_absorbed() {
    // The window starts as five zero bits, so leading zeros extend a streak
    // that is already long.
    let s = track(&bits::parse("00000000"));
    assert_eq!(s.streaks(), 0);
    assert_eq!(s.total, 8);
    assert_eq!(s.zero_bits, 8);
    assert_eq!(s.zero_ratio(), 1.0);
}

#[test]
fn test_empty_snapshot() {
    let s = track(&[]);
    assert_eq!(s, StreakSnapshot::default());
    assert_eq!(s.zero_ratio(), 0.0);
}

#[test]
fn test_display() {
    let s = track(&bits::parse("1 00 1"));
    let text = format!("{}", s);
    assert_eq!(
        text,
        "Total: 4\nZero bits: 2\nRepeating 2 : 1\nRepeating 3 : 0\nRepeating 4 : 0\nRepeating 5 : 0"
    );
}

#[test]
fn test_random_runs_match_histogram() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let geo = Geometric::new(0.3).unwrap();

    for _ in 0..50 {
        // Start with a set bit so that no run extends the initial zeros.
        let mut input = Vec::new();
        let mut expected = [0i64; 6];
        let mut bit = true;
        for _ in 0..rng.gen_range(1..40) {
            let len = 1 + geo.sample(&mut rng) as usize;
            input.extend(std::iter::repeat(bit).take(len));
            expected[len.min(5)] += 1;
            bit = !bit;
        }

        let s = track(&input);
        assert_eq!(s.streak2, expected[2]);
        assert_eq!(s.streak3, expected[3]);
        assert_eq!(s.streak4, expected[4]);
        assert_eq!(s.streak5plus, expected[5]);
        assert_eq!(s.total, input.len() as i64);
        assert_eq!(s.zero_bits, input.iter().filter(|b| !**b).count() as i64);
    }
}
