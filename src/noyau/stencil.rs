// src/noyau/stencil.rs
//
// Stencil : somme ordonnée de termes de grille.
//
// Invariant (après construction) : jamais deux termes au même offset.
// La simplification fusionne les offsets égaux (somme exacte des coefficients)
// en gardant l'ordre de PREMIÈRE apparition (rendu déterministe).
//
// Un stencil vide n'existe que comme neutre de l'addition (Default) :
// `Stencil::new` refuse une suite vide (DiffError::EmptyStencil).

use num_rational::BigRational;
use num_traits::Zero;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

use super::erreurs::{DiffError, Result};
use super::format::Rendu;
use super::terme::GridTerm;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stencil {
    terms: Vec<GridTerm>,
}

impl Stencil {
    /// Construit puis simplifie. Suite vide => erreur (jamais de simplification à vide).
    pub fn new(terms: Vec<GridTerm>) -> Result<Self> {
        if terms.is_empty() {
            return Err(DiffError::EmptyStencil);
        }
        Ok(Self {
            terms: simplifier(terms),
        })
    }

    pub fn terms(&self) -> &[GridTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient à un offset donné (None si l'offset n'apparaît pas).
    pub fn coefficient_at(&self, offset: i64) -> Option<&BigRational> {
        self.terms
            .iter()
            .find(|t| t.offset() == offset)
            .map(GridTerm::coefficient)
    }

    /// Σ coefficients (conservée par la simplification).
    pub fn coefficient_sum(&self) -> BigRational {
        self.terms
            .iter()
            .fold(BigRational::zero(), |acc, t| acc + t.coefficient())
    }

    /// Vue indépendante de l'ordre : offset -> coefficient.
    pub fn as_map(&self) -> BTreeMap<i64, BigRational> {
        self.terms
            .iter()
            .map(|t| (t.offset(), t.coefficient().clone()))
            .collect()
    }

    /// Rendu : "+" devant chaque terme suivant de coefficient >= 0,
    /// les négatifs portent déjà leur "-".
    pub fn render(&self, rendu: Rendu) -> String {
        let mut out = String::new();
        for (k, t) in self.terms.iter().enumerate() {
            if k > 0 && !t.is_negative() {
                out.push('+');
            }
            out.push_str(&t.render(rendu));
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

/// Fusion stable O(n²) : pour chaque terme entrant, on cherche un terme de même offset
/// déjà retenu ; trouvé => remplacé par la somme, sinon => ajouté en fin.
/// Précondition : `terms` non vide (vérifiée par l'appelant).
fn simplifier(terms: Vec<GridTerm>) -> Vec<GridTerm> {
    let mut out: Vec<GridTerm> = Vec::with_capacity(terms.len());
    for t in terms {
        match out.iter_mut().find(|r| r.offset() == t.offset()) {
            Some(r) => {
                let somme = r.coefficient() + t.coefficient();
                *r = GridTerm::new(somme, t.offset());
            }
            None => out.push(t),
        }
    }
    out
}

impl Add<&Stencil> for &Stencil {
    type Output = Stencil;

    /// Concaténation puis simplification (commutative au sens offset -> coefficient).
    fn add(self, rhs: &Stencil) -> Stencil {
        let mut terms = Vec::with_capacity(self.len() + rhs.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&rhs.terms);

        // vide + vide reste le neutre : pas de simplification à vide
        if terms.is_empty() {
            return Stencil::default();
        }
        Stencil {
            terms: simplifier(terms),
        }
    }
}

impl Add for Stencil {
    type Output = Stencil;

    fn add(self, rhs: Stencil) -> Stencil {
        &self + &rhs
    }
}

impl fmt::Display for Stencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Rendu::Decimal))
    }
}
