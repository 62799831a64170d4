//! A short sliding window over the most recently processed bits.

/// The number of bits that the window remembers.
pub const HISTORY_DEPTH: usize = 5;

/// Keeps the last five bits that were pushed, most recent first.
/// All slots start as zero bits.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RecentHistory {
    slots: [bool; HISTORY_DEPTH],
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the window by one and insert 'bit' as the most recent bit. The
    /// oldest bit falls off the end.
    pub fn push(&mut self, bit: bool) {
        self.slots.copy_within(0..HISTORY_DEPTH - 1, 1);
        self.slots[0] = bit;
    }

    #[must_use]
    pub fn most_recent(&self) -> bool {
        self.slots[0]
    }

    /// Returns the bit that was pushed 'age' pushes ago (zero is the most
    /// recent). Panics if 'age' is not below 'HISTORY_DEPTH'.
    #[must_use]
    pub fn get(&self, age: usize) -> bool {
        self.slots[age]
    }

    /// Returns true if the last 'n' bits are all equal. Values of 'n' above the
    /// depth of the window are treated as the full window.
    #[must_use]
    pub fn is_repeating(&self, n: usize) -> bool {
        let n = n.clamp(1, HISTORY_DEPTH);
        (1..n).all(|i| self.slots[i] == self.slots[i - 1])
    }

    pub fn is_repeating_two(&self) -> bool {
        self.is_repeating(2)
    }

    pub fn is_repeating_three(&self) -> bool {
        self.is_repeating(3)
    }

    pub fn is_repeating_four(&self) -> bool {
        self.is_repeating(4)
    }

    pub fn is_repeating_five(&self) -> bool {
        self.is_repeating(5)
    }
}

#[test]
fn test_history_push_order() {
    let mut h = RecentHistory::new();
    assert!(h.is_repeating_five());
    assert!(!h.most_recent());

    h.push(true);
    h.push(false);
    h.push(true);
    assert!(h.get(0));
    assert!(!h.get(1));
    assert!(h.get(2));
    assert!(!h.get(3));
    assert!(!h.get(4));

    // Push enough bits to flush the initial zeros.
    for _ in 0..HISTORY_DEPTH {
        h.push(true);
    }
    assert_eq!(h, RecentHistory { slots: [true; 5] });
}

#[test]
fn test_history_streaks() {
    let mut h = RecentHistory::new();
    for bit in [true, false, true, true, true] {
        h.push(bit);
    }
    assert!(h.is_repeating(1));
    assert!(h.is_repeating_two());
    assert!(h.is_repeating_three());
    assert!(!h.is_repeating_four());
    assert!(!h.is_repeating_five());

    h.push(false);
    assert!(!h.is_repeating_two());
    assert!(!h.is_repeating_three());
    assert!(h.is_repeating(1));

    for _ in 0..4 {
        h.push(false);
    }
    assert!(h.is_repeating_five());
    assert!(h.is_repeating(6));
}

#[test]
fn test_history_repeating_is_nested() {
    // Every window of five bits: a longer streak implies all shorter ones.
    for pattern in 0..32u32 {
        let mut h = RecentHistory::new();
        for i in (0..5).rev() {
            h.push((pattern >> i) & 1 == 1);
        }
        for n in 2..=5 {
            if h.is_repeating(n) {
                assert!(h.is_repeating(n - 1));
            }
        }
    }
}

#[test]
#[should_panic]
fn test_history_get_past_depth() {
    let h = RecentHistory::new();
    let _ = h.get(HISTORY_DEPTH);
}
