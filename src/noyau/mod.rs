//! Noyau exact des différences finies
//!
//! Organisation interne :
//! - terme.rs      : GridTerm (coeff * f(i + offset))
//! - stencil.rs    : Stencil + simplification + addition
//! - pas.rs        : StepPower ((dh)^n)
//! - difference.rs : méthodes forward/backward/central + DifferenceExpression
//! - format.rs     : rendu des coefficients (décimal fixe ou exact)
//! - lecture.rs    : coefficient texte -> rationnel
//! - erreurs.rs    : DiffError

pub mod difference;
pub mod erreurs;
pub mod format;
pub mod lecture;
pub mod pas;
pub mod stencil;
pub mod terme;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use difference::{backward_expand, forward_expand, DifferenceExpression, Method};
pub use erreurs::{DiffError, Result};
pub use format::Rendu;
pub use lecture::lire_coefficient;
pub use pas::StepPower;
pub use stencil::Stencil;
pub use terme::GridTerm;
