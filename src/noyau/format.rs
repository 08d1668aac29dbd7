// src/noyau/format.rs
//
// Rendu texte des coefficients.
// - Décimal : une décimale, largeur 5, alignée à droite (colonnes de termes empilés)
// - Exact   : p/q (ou entier)
//
// Le signe affiché suit TOUJOURS le signe du rationnel exact :
// -1/100 s'affiche " -0.0" (pas " 0.0"), sinon le rendu du stencil
// perdrait son séparateur et deviendrait ambigu.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Largeur du champ coefficient en mode décimal.
pub const LARGEUR_COEFF: usize = 5;

/// Mode de rendu des coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rendu {
    #[default]
    Decimal,
    Exact,
}

/* ------------------------ Helpers rationnels ------------------------ */

/// r -> entier “scalé” = round(|r| * 10), demi vers l'infini.
/// Volontaire : 1/4 donne 0.3 (un `%5.1f` sur flottant donnerait 0.2).
fn dixiemes_arrondis(r: &BigRational) -> BigInt {
    let abs = r.abs();
    let deux_d = abs.denom() * BigInt::from(2);
    (abs.numer() * BigInt::from(20) + abs.denom()) / deux_d
}

/// Coefficient en décimal fixe : `%5.1f` (ex: "  0.5", " -1.0", " 12.3").
pub fn format_coeff_fixe(r: &BigRational) -> String {
    let dixiemes = dixiemes_arrondis(r);
    let dix = BigInt::from(10);
    let int_part = &dixiemes / &dix;
    let frac_part = &dixiemes % &dix;

    let s = if r.is_negative() {
        format!("-{int_part}.{frac_part}")
    } else {
        format!("{int_part}.{frac_part}")
    };
    format!("{s:>width$}", width = LARGEUR_COEFF)
}

/// Coefficient exact : "3", "-1/2", "0".
pub fn format_coeff_exact(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

pub fn format_coeff(r: &BigRational, rendu: Rendu) -> String {
    match rendu {
        Rendu::Decimal => format_coeff_fixe(r),
        Rendu::Exact => format_coeff_exact(r),
    }
}
