// src/noyau/erreurs.rs
//
// Erreurs du noyau (typées, récupérables).
// - Aucune erreur n'est “imprimée puis avalée” : tout remonte par Result.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Méthode hors de {forward, backward, central} (on garde le texte fautif).
    #[error("méthode invalide: {0:?} (attendu: forward, backward, central)")]
    InvalidMethod(String),

    /// Un stencil ne se construit jamais à partir d'une suite vide.
    #[error("stencil vide: au moins un terme est requis")]
    EmptyStencil,

    /// Offset hors de la plage i64 (point de base trop près des bornes).
    #[error("offset hors plage: {offset} + {delta} dépasse i64")]
    OffsetOverflow { offset: i64, delta: i64 },

    /// Coefficient illisible (entier, décimal ou fraction attendus).
    #[error("coefficient invalide: {0:?}")]
    InvalidCoefficient(String),
}

pub type Result<T, E = DiffError> = std::result::Result<T, E>;
