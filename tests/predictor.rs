use follower::history::RecentHistory;
use follower::predictor::{predict, FollowerPredictor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a window from 'pattern', where bit 0 is the most recent bit.
fn window(pattern: u32) -> RecentHistory {
    let mut h = RecentHistory::new();
    for i in (0..5).rev() {
        h.push((pattern >> i) & 1 == 1);
    }
    h
}

#[test]
fn test_prediction_table() {
    for pattern in 0..32 {
        let h = window(pattern);
        let (b1, b2, b3) = (h.get(0), h.get(1), h.get(2));
        let expected = if b1 != b2 {
            b1
        } else if b2 == b3 {
            !b1
        } else {
            // A streak of exactly two falls through to zero.
            false
        };
        assert_eq!(predict(&h), expected, "pattern {:05b}", pattern);
        // No hidden state.
        assert_eq!(predict(&h), predict(&h));
    }
}

#[test]
fn test_streak_of_two_predicts_zero() {
    // Most recent first: 1, 1, 0.
    let h = window(0b00011);
    assert!(h.is_repeating_two() && !h.is_repeating_three());
    assert!(!predict(&h));

    let h = window(0b00100);
    assert!(h.is_repeating_two() && !h.is_repeating_three());
    assert!(!predict(&h));
}

#[test]
fn test_encode_decode_lock_step() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut encoder = FollowerPredictor::new();
    let mut decoder = FollowerPredictor::new();

    for i in 0..10_000 {
        // Mix long runs and noise.
        let bit = if (i / 64) % 2 == 0 {
            rng.gen_bool(0.5)
        } else {
            (i / 7) % 2 == 0
        };
        assert_eq!(encoder.prediction(), decoder.prediction());
        let encoded = encoder.encode_bit(bit);
        assert_eq!(decoder.decode_bit(encoded), bit);
        assert_eq!(encoder.history(), decoder.history());
    }

    assert_eq!(encoder.raw_stats(), decoder.raw_stats());
    assert_eq!(decoder.prediction_stats().total, 0);
    assert_eq!(decoder.correct_prediction_stats().total, 0);
    assert_eq!(encoder.prediction_stats().total, 10_000);
}

#[test]
fn test_encoded_bit_is_the_hit_flag() {
    let mut p = FollowerPredictor::new();
    for bit in [true, false, true, true, true, true, false, false] {
        let prediction = p.prediction();
        assert_eq!(p.encode_bit(bit), prediction == bit);
    }
    let c = p.correct_prediction_stats();
    assert_eq!(c.total, 8);
}

#[test]
fn test_statistics_do_not_drive_prediction() {
    // Two predictors with the same window but different histories of counters
    // make the same predictions.
    let mut a = FollowerPredictor::new();
    let mut b = FollowerPredictor::new();
    for _ in 0..100 {
        let _ = a.encode_bit(true);
        let _ = a.encode_bit(false);
    }
    for bit in [true, false, true, true, false] {
        a.seed(bit);
        b.seed(bit);
    }
    assert_eq!(a.history(), b.history());
    assert_ne!(a.raw_stats(), b.raw_stats());
    for bit in [false, false, false, true, true, false] {
        assert_eq!(a.encode_bit(bit), b.encode_bit(bit));
    }
}
