//! Operand Selector (2-to-1 multiplexer with enable and hold).
//!
//! When enabled the selector is transparent: it passes `b` if the select
//! line is high and `a` otherwise. When disabled it keeps driving the value
//! it produced last, so it behaves like a latch rather than a combinational
//! pass-through. The retained value starts at zero.

/// 32-bit two-input selector that holds its output while disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperandSelector {
    out: u32,
}

impl OperandSelector {
    /// Creates a selector whose retained output is zero.
    pub const fn new() -> Self {
        Self { out: 0 }
    }

    /// Evaluates the selector and updates its retained output.
    ///
    /// # Arguments
    ///
    /// * `a`  - Input driven when `s` is low.
    /// * `b`  - Input driven when `s` is high.
    /// * `s`  - Select line.
    /// * `en` - Enable line; when low, the previous output is held.
    ///
    /// # Returns
    ///
    /// The selector's output after this evaluation.
    #[inline]
    pub const fn select(&mut self, a: u32, b: u32, s: bool, en: bool) -> u32 {
        if en {
            self.out = if s { b } else { a };
        }
        self.out
    }

    /// Returns the currently retained output without evaluating.
    #[inline]
    pub const fn output(&self) -> u32 {
        self.out
    }

    /// Clears the retained output back to zero.
    pub const fn reset(&mut self) {
        self.out = 0;
    }
}
