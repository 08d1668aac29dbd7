//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler simplification / addition / construction sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées (termes, ordres)
//! - budget temps global
//! - invariant clé : jamais deux termes au même offset après construction

use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::{DiffError, DifferenceExpression, GridTerm, Method, Stencil};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    /// entier dans [-r, r]
    fn signed(&mut self, r: u32) -> i64 {
        i64::from(self.pick(2 * r + 1)) - i64::from(r)
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

fn gen_coeff(rng: &mut Rng) -> BigRational {
    let n = rng.signed(9);
    let d = i64::from(rng.pick(4)) + 1;
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn gen_terme(rng: &mut Rng) -> GridTerm {
    GridTerm::new(gen_coeff(rng), rng.signed(4))
}

fn gen_termes(rng: &mut Rng, max: u32) -> Vec<GridTerm> {
    let n = rng.pick(max) + 1;
    (0..n).map(|_| gen_terme(rng)).collect()
}

fn sans_doublon(s: &Stencil) -> bool {
    let mut vus = HashSet::new();
    s.terms().iter().all(|t| vus.insert(t.offset()))
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_simplification() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5EED_D1FF);

    for _ in 0..2_000 {
        budget(start, Duration::from_secs(5));

        let entree = gen_termes(&mut rng, 24);

        let mut attendu: BTreeMap<i64, BigRational> = BTreeMap::new();
        let mut ordre_vu: Vec<i64> = Vec::new();
        for t in &entree {
            if !attendu.contains_key(&t.offset()) {
                ordre_vu.push(t.offset());
            }
            *attendu.entry(t.offset()).or_insert_with(BigRational::zero) += t.coefficient();
        }

        let s = Stencil::new(entree).expect("entrée non vide");

        assert!(sans_doublon(&s));
        assert_eq!(s.as_map(), attendu);

        // ordre de première apparition
        let offsets: Vec<i64> = s.terms().iter().map(GridTerm::offset).collect();
        assert_eq!(offsets, ordre_vu);

        // idempotence
        let again = Stencil::new(s.terms().to_vec()).expect("non vide");
        assert_eq!(again, s);
    }
}

#[test]
fn fuzz_addition() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..1_000 {
        budget(start, Duration::from_secs(5));

        let a = Stencil::new(gen_termes(&mut rng, 12)).expect("non vide");
        let b = Stencil::new(gen_termes(&mut rng, 12)).expect("non vide");
        let c = Stencil::new(gen_termes(&mut rng, 12)).expect("non vide");

        let ab = &a + &b;
        let ba = &b + &a;
        assert!(sans_doublon(&ab));
        assert_eq!(ab.as_map(), ba.as_map());
        assert_eq!(
            ab.coefficient_sum(),
            a.coefficient_sum() + b.coefficient_sum()
        );

        // associativité (au sens offset -> coefficient)
        let g = &(&a + &b) + &c;
        let d = &a + &(&b + &c);
        assert_eq!(g.as_map(), d.as_map());
    }
}

#[test]
fn fuzz_construction() {
    let start = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..300 {
        budget(start, Duration::from_secs(5));

        let method = Method::ALL[rng.pick(3) as usize];
        let order = rng.pick(7);
        let point = gen_terme(&mut rng);

        let e = DifferenceExpression::new(method, order, point.clone())
            .unwrap_or_else(|err| panic!("method={method} order={order} err={err}"));

        assert!(sans_doublon(e.numerator()));
        assert!(!e.numerator().is_empty());
        assert_eq!(e.denominator().exponent(), order);

        // Σ coefficients : nulle dès qu'on dérive, sinon le point lui-même
        if order == 0 {
            assert_eq!(&e.numerator().coefficient_sum(), point.coefficient());
        } else {
            assert!(e.numerator().coefficient_sum().is_zero());
        }

        // déterminisme : même entrée => même rendu
        let bis = DifferenceExpression::new(method, order, point).expect("déjà construit");
        assert_eq!(bis.to_string(), e.to_string());
    }
}

#[test]
fn fuzz_noms_de_methode() {
    let mut rng = Rng::new(99);
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz -".chars().collect();

    for _ in 0..500 {
        let n = rng.pick(10) as usize;
        let nom: String = (0..n)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        match DifferenceExpression::from_name(&nom, 2, GridTerm::default()) {
            Ok(e) => assert_eq!(e.method().nom(), nom.trim()),
            Err(DiffError::InvalidMethod(m)) => assert_eq!(m, nom.trim()),
            Err(autre) => panic!("nom={nom:?} erreur inattendue: {autre}"),
        }
    }
}
