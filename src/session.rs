// File: src/session.rs
use crate::core::codec;
use crate::core::engine::PredictiveEngine;
use crate::core::types::Digit;
use crate::error::Result;

/// The word currently being typed: its key presses and their predictions.
///
/// One session per input field, owned by the caller. The engine is only
/// borrowed for the duration of each call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    digits: Vec<Digit>,
    predictions: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn predictions(&self) -> &[String] {
        &self.predictions
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Adds a key press. A press that leaves no predictions is dropped and
    /// the session stays as it was; returns whether the press was kept.
    pub fn press(&mut self, engine: &PredictiveEngine, digit: Digit) -> bool {
        self.digits.push(digit);
        let predictions = engine.get_suggestions(&self.digits);
        if predictions.is_empty() {
            self.digits.pop();
            return false;
        }
        self.predictions = predictions;
        true
    }

    /// Removes the last key press.
    pub fn backspace(&mut self, engine: &PredictiveEngine) {
        if self.digits.pop().is_some() {
            self.refresh(engine);
        }
    }

    /// Re-derives the key presses from letters already in the text field,
    /// e.g. after the cursor moves back into a word.
    pub fn reload(&mut self, engine: &PredictiveEngine, word: &str) -> Result<()> {
        self.digits = codec::encode(&word.to_lowercase())?;
        self.refresh(engine);
        Ok(())
    }

    /// The top prediction cut to the number of keys pressed so far.
    pub fn word_in_progress(&self) -> Option<String> {
        self.predictions
            .first()
            .map(|word| word.chars().take(self.digits.len()).collect())
    }

    /// Takes the top prediction and resets the session.
    pub fn commit(&mut self) -> Option<String> {
        let word = self.predictions.first().cloned();
        self.clear();
        word
    }

    /// Takes prediction `index` and resets the session.
    pub fn commit_at(&mut self, index: usize) -> Option<String> {
        let word = self.predictions.get(index).cloned()?;
        self.clear();
        Some(word)
    }

    pub fn clear(&mut self) {
        self.digits.clear();
        self.predictions.clear();
    }

    fn refresh(&mut self, engine: &PredictiveEngine) {
        self.predictions = if self.digits.is_empty() {
            Vec::new()
        } else {
            engine.get_suggestions(&self.digits)
        };
    }
}
