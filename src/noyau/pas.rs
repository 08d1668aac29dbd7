// src/noyau/pas.rs
//
// Dénominateur symbolique (dh)^n.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepPower {
    exponent: u32,
}

impl Default for StepPower {
    fn default() -> Self {
        Self { exponent: 1 }
    }
}

impl StepPower {
    pub fn new(exponent: u32) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }
}

impl fmt::Display for StepPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(dh)^{}", self.exponent)
    }
}
