//! Différences finies symboliques sur grille uniforme.
//!
//! `noyau` construit, pour une méthode (forward, backward, central), un ordre
//! et un point de base, le stencil simplifié et la puissance du pas :
//!
//! ```
//! use differences_finies::noyau::{DifferenceExpression, GridTerm, Method};
//!
//! let e = DifferenceExpression::new(Method::Forward, 1, GridTerm::default()).unwrap();
//! assert_eq!(e.to_string(), "  1.0*f(i+1) -1.0*f(i) / (dh)^1");
//! ```

pub mod noyau;
