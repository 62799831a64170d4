//! The follower predictor guesses the next bit from the last few bits, and
//! replaces each bit with a flag that says if the guess was right. Decoding
//! runs the same guess over the reconstructed bits and flips it back.

use crate::history::RecentHistory;
use crate::stats::{StreakSnapshot, StreamTracker};

/// Predict the next bit from the window of recent bits.
/// A streak of three or more predicts a flip. Two bits that differ predict
/// that the last bit repeats. A streak of exactly two predicts a zero bit.
#[must_use]
pub fn predict(history: &RecentHistory) -> bool {
    let mut prediction = false;

    if history.is_repeating_three() {
        prediction = !history.most_recent();
    }

    // This check overrides the one above.
    if !history.is_repeating_two() {
        prediction = history.most_recent();
    }

    prediction
}

/// Encodes or decodes one logical stream. A new predictor must be used for
/// each pass.
#[derive(Clone, Debug, Default)]
pub struct FollowerPredictor {
    /// The original bits: the input of the encoder or the output of the
    /// decoder. This is the only tracker that drives the predictions.
    raw: StreamTracker,
    /// The predictions that the encoder made.
    predictions: StreamTracker,
    /// The encoded bits.
    correct: StreamTracker,
}

impl FollowerPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a bit that is copied verbatim (the header) into the window without
    /// predicting it.
    pub fn seed(&mut self, bit: bool) {
        self.raw.record(bit);
    }

    /// Returns the prediction for the next original bit.
    #[must_use]
    pub fn prediction(&self) -> bool {
        predict(self.raw.history())
    }

    /// Encode the original bit 'bit' and return true if it was predicted
    /// correctly.
    pub fn encode_bit(&mut self, bit: bool) -> bool {
        let prediction = self.prediction();
        self.raw.record(bit);
        self.predictions.record(prediction);

        let encoded = prediction == bit;
        self.correct.record(encoded);
        encoded
    }

    /// Decode the bit 'encoded' that was produced by 'encode_bit' and return
    /// the original bit.
    pub fn decode_bit(&mut self, encoded: bool) -> bool {
        let prediction = self.prediction();
        let original = if encoded { prediction } else { !prediction };
        self.raw.record(original);
        original
    }

    /// Returns the window of the original bits.
    pub fn history(&self) -> &RecentHistory {
        self.raw.history()
    }

    /// Statistics of the original bits.
    pub fn raw_stats(&self) -> StreakSnapshot {
        self.raw.snapshot()
    }

    /// Statistics of the predicted bits. Only collected when encoding.
    pub fn prediction_stats(&self) -> StreakSnapshot {
        self.predictions.snapshot()
    }

    /// Statistics of the encoded bits (the prediction hits). Only collected
    /// when encoding.
    pub fn correct_prediction_stats(&self) -> StreakSnapshot {
        self.correct.snapshot()
    }
}
