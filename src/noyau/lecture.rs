// src/noyau/lecture.rs
//
// Lecture d'un coefficient saisi au clavier -> rationnel exact.
// Formes acceptées : "3", "-0.25", ".5", "3/4", "-1.5/2".
// Tout le reste (ou dénominateur nul) => DiffError::InvalidCoefficient.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use std::str::FromStr;

use super::erreurs::{DiffError, Result};

pub fn lire_coefficient(texte: &str) -> Result<BigRational> {
    let s = texte.trim();
    let invalide = || DiffError::InvalidCoefficient(s.to_string());

    match s.split_once('/') {
        Some((num, den)) => {
            let num = lire_decimal(num).ok_or_else(invalide)?;
            let den = lire_decimal(den).ok_or_else(invalide)?;
            if den.is_zero() {
                return Err(invalide());
            }
            Ok(num / den)
        }
        None => lire_decimal(s).ok_or_else(invalide),
    }
}

/// Décimal signé sans exposant. None si illisible.
fn lire_decimal(s: &str) -> Option<BigRational> {
    let s = s.trim();
    let (neg, corps) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let chiffres = BigInt::from_str(&format!("{ent}{frac}")).ok()?;
    let echelle = BigInt::from(10).pow(u32::try_from(frac.len()).ok()?);
    let r = BigRational::new(chiffres, echelle);

    Some(if neg { -r } else { r })
}
