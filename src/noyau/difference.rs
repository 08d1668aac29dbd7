//! Noyau — construction des différences finies
//!
//! point -> stencil graine -> opérateur de différence appliqué `order` fois
//!       -> (central : deux demi-graines, forward + backward, sommées) -> simplification
//!
//! Les expansions sont des COMPOSITIONS d'opérateurs (pas de binomiaux) :
//! les listes intermédiaires gardent des offsets en double,
//! fusionnés seulement quand le Stencil final est construit.

use log::{debug, trace, warn};
use num_bigint::BigInt;
use num_rational::BigRational;

use std::fmt;
use std::str::FromStr;

use super::erreurs::{DiffError, Result};
use super::format::Rendu;
use super::pas::StepPower;
use super::stencil::Stencil;
use super::terme::GridTerm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Forward,
    Backward,
    Central,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Forward, Method::Backward, Method::Central];

    pub fn nom(self) -> &'static str {
        match self {
            Method::Forward => "forward",
            Method::Backward => "backward",
            Method::Central => "central",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Method {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "forward" => Ok(Method::Forward),
            "backward" => Ok(Method::Backward),
            "central" => Ok(Method::Central),
            autre => {
                warn!("méthode de différence rejetée: {autre:?}");
                Err(DiffError::InvalidMethod(autre.to_string()))
            }
        }
    }
}

/* ------------------------ Opérateurs élémentaires ------------------------ */

/// Différence avant : c*f(i+k) -> c*f(i+k+1), -c*f(i+k), appliquée `order` fois.
pub fn forward_expand(order: u32, terms: &[GridTerm]) -> Result<Vec<GridTerm>> {
    match order {
        0 => Ok(terms.to_vec()),
        1 => {
            let mut out = Vec::with_capacity(2 * terms.len());
            for t in terms {
                out.push(t.decale(1)?);
                out.push(t.oppose());
            }
            trace!("forward: {} -> {} termes", terms.len(), out.len());
            Ok(out)
        }
        _ => forward_expand(order - 1, &forward_expand(1, terms)?),
    }
}

/// Différence arrière : c*f(i+k) -> c*f(i+k), -c*f(i+k-1), appliquée `order` fois.
pub fn backward_expand(order: u32, terms: &[GridTerm]) -> Result<Vec<GridTerm>> {
    match order {
        0 => Ok(terms.to_vec()),
        1 => {
            let mut out = Vec::with_capacity(2 * terms.len());
            for t in terms {
                out.push(t.clone());
                out.push(t.oppose().decale(-1)?);
            }
            trace!("backward: {} -> {} termes", terms.len(), out.len());
            Ok(out)
        }
        _ => backward_expand(order - 1, &backward_expand(1, terms)?),
    }
}

/// Central : demi-graines à point.offset ∓ order/2 (ordre impair : (order-1)/2),
/// forward sur la gauche + backward sur la droite.
fn central_stencil(order: u32, point: &GridTerm) -> Result<Stencil> {
    let demi_coeff = point.coefficient() * BigRational::new(BigInt::from(1), BigInt::from(2));
    // division entière : order/2 si pair, (order-1)/2 si impair
    let demi_offset = i64::from(order / 2);

    let centre = GridTerm::new(demi_coeff, point.offset());
    let gauche = centre.decale(-demi_offset)?;
    let droite = centre.decale(demi_offset)?;

    let avant = Stencil::new(forward_expand(order, &[gauche])?)?;
    let arriere = Stencil::new(backward_expand(order, &[droite])?)?;
    Ok(avant + arriere)
}

/* ------------------------ Expression complète ------------------------ */

/// Résultat immuable : numérateur (stencil simplifié) / dénominateur (dh)^order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifferenceExpression {
    method: Method,
    order: u32,
    point: GridTerm,
    numerator: Stencil,
    denominator: StepPower,
}

impl DifferenceExpression {
    pub fn new(method: Method, order: u32, point: GridTerm) -> Result<Self> {
        let graine = [point.clone()];
        let numerator = match method {
            Method::Forward => Stencil::new(forward_expand(order, &graine)?)?,
            Method::Backward => Stencil::new(backward_expand(order, &graine)?)?,
            Method::Central => central_stencil(order, &point)?,
        };

        debug!(
            "différence {method} d'ordre {order} en {}: {} termes",
            point.echantillon(),
            numerator.len()
        );

        Ok(Self {
            method,
            order,
            point,
            numerator,
            denominator: StepPower::new(order),
        })
    }

    /// Variante texte : la méthode est lue par nom (erreur typée si inconnue).
    pub fn from_name(method: &str, order: u32, point: GridTerm) -> Result<Self> {
        Self::new(method.parse()?, order, point)
    }

    /// Le dénominateur ne dépend que de l'ordre (jamais du succès du numérateur).
    pub fn denominator_for(order: u32) -> StepPower {
        StepPower::new(order)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn point(&self) -> &GridTerm {
        &self.point
    }

    pub fn numerator(&self) -> &Stencil {
        &self.numerator
    }

    pub fn denominator(&self) -> StepPower {
        self.denominator
    }

    pub fn render(&self, rendu: Rendu) -> String {
        format!("{} / {}", self.numerator.render(rendu), self.denominator)
    }
}

impl fmt::Display for DifferenceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Rendu::Decimal))
    }
}
