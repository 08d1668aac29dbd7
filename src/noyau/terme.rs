// src/noyau/terme.rs
//
// Terme de grille : coeff * f(i + offset).
// Valeur immuable (pas de setter) : on reconstruit un nouveau terme à chaque fusion.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use std::fmt;

use super::erreurs::{DiffError, Result};
use super::format::{format_coeff, Rendu};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridTerm {
    coefficient: BigRational,
    offset: i64,
}

impl Default for GridTerm {
    /// Point de base : 1*f(i).
    fn default() -> Self {
        Self {
            coefficient: BigRational::one(),
            offset: 0,
        }
    }
}

impl GridTerm {
    pub fn new(coefficient: BigRational, offset: i64) -> Self {
        Self {
            coefficient,
            offset,
        }
    }

    /// Raccourci : coefficient entier.
    pub fn entier(coefficient: i64, offset: i64) -> Self {
        Self::new(BigRational::from_integer(BigInt::from(coefficient)), offset)
    }

    pub fn coefficient(&self) -> &BigRational {
        &self.coefficient
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Même échantillon, coefficient opposé.
    pub fn oppose(&self) -> Self {
        Self::new(-self.coefficient.clone(), self.offset)
    }

    /// Même coefficient, échantillon décalé de `delta` (addition vérifiée).
    pub fn decale(&self, delta: i64) -> Result<Self> {
        let offset = self
            .offset
            .checked_add(delta)
            .ok_or(DiffError::OffsetOverflow {
                offset: self.offset,
                delta,
            })?;
        Ok(Self::new(self.coefficient.clone(), offset))
    }

    /// "f(i)", "f(i+2)", "f(i-1)"
    pub fn echantillon(&self) -> String {
        match self.offset {
            0 => "f(i)".to_string(),
            k if k < 0 => format!("f(i-{})", k.unsigned_abs()),
            k => format!("f(i+{k})"),
        }
    }

    pub fn render(&self, rendu: Rendu) -> String {
        format!("{}*{}", format_coeff(&self.coefficient, rendu), self.echantillon())
    }
}

impl fmt::Display for GridTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Rendu::Decimal))
    }
}
