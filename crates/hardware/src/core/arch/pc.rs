//! Program Counter.
//!
//! Holds the slot address of the next fetch bundle. The counter is a
//! synchronous register: it changes only on a clock event.
//! 1. **Reset:** While reset is asserted the counter is forced to its reset value.
//! 2. **Enable:** With enable low the counter keeps its value.
//! 3. **Advance:** Otherwise it loads the next address chosen by the fetch unit.

/// Synchronous program counter register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramCounter {
    value: u32,
    reset_value: u32,
}

impl ProgramCounter {
    /// Creates a counter holding `reset_value`.
    pub const fn new(reset_value: u32) -> Self {
        Self {
            value: reset_value,
            reset_value,
        }
    }

    /// Returns the current fetch address.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Applies one clock event.
    ///
    /// # Arguments
    ///
    /// * `reset`  - Synchronous reset; takes precedence over `enable`.
    /// * `enable` - When low the counter holds.
    /// * `next`   - Address loaded when enabled and not in reset.
    pub const fn clock(&mut self, reset: bool, enable: bool, next: u32) {
        if reset {
            self.value = self.reset_value;
        } else if enable {
            self.value = next;
        }
    }
}
