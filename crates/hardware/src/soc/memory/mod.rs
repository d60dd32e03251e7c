//! Word-Addressed Memory.
//!
//! A fixed-capacity array of 32-bit words used for both the instruction
//! store and the data store. Reads outside the array return zero (the idle
//! word, for the instruction store); writes outside it are dropped.
//! Stores are committed in pairs with the same port-1 priority as the
//! register file.

use tracing::warn;

use crate::common::{SimError, SimResult};

/// Fixed-size array of 32-bit words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMemory {
    words: Vec<u32>,
}

impl WordMemory {
    /// Creates a zero-filled memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Reads the word at `addr`, or 0 outside the array.
    #[inline]
    pub fn read(&self, addr: u32) -> u32 {
        self.words.get(addr as usize).copied().unwrap_or(0)
    }

    /// Writes the word at `addr`; out-of-range writes are dropped.
    pub fn write(&mut self, addr: u32, value: u32) {
        match self.words.get_mut(addr as usize) {
            Some(slot) => *slot = value,
            None => warn!(addr, value, "store outside data memory dropped"),
        }
    }

    /// Commits the stores of one cycle.
    ///
    /// Slot 2's store is applied first so that slot 1 wins when both
    /// target the same word.
    pub fn commit_stores(&mut self, slot1: Option<(u32, u32)>, slot2: Option<(u32, u32)>) {
        for (addr, value) in [slot2, slot1].into_iter().flatten() {
            self.write(addr, value);
        }
    }

    /// Copies `image` into memory starting at word `base`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image does not fit.
    pub fn load(&mut self, base: usize, image: &[u32]) -> SimResult<()> {
        let capacity = self.words.len();
        let Some(end) = base.checked_add(image.len()).filter(|&end| end <= capacity) else {
            return Err(SimError::ImageTooLarge {
                words: base.saturating_add(image.len()),
                capacity,
            });
        };
        self.words[base..end].copy_from_slice(image);
        Ok(())
    }

    /// Returns the first `count` words (fewer if the memory is smaller).
    pub fn head(&self, count: usize) -> &[u32] {
        &self.words[..count.min(self.words.len())]
    }

    /// Returns every word.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }

    /// Clears every word to zero.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
