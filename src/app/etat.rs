//! src/app/etat.rs
//!
//! État UI (sans vue ; lit les résultats du noyau, n’en construit aucun).
//!
//! Rôle : contenir l’état du visualiseur (méthode, ordre, point de base, rendu,
//! résultats, erreur) et offrir des opérations simples (CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune construction de stencil ici : on dépose seulement ce que vue.rs a obtenu.
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou sur l’ordre : l’expansion brute double à chaque passe.

use differences_finies::noyau::format::format_coeff;
use differences_finies::noyau::{DifferenceExpression, Method, Rendu, StepPower};

/// Ordre par défaut au lancement.
pub const ORDRE_DEFAUT: u32 = 2;

/// Garde-fou : au-delà, l’expansion brute (2^ordre termes) devient inutilement lourde.
pub const ORDRE_MAX: u32 = 12;

/// Borne des offsets saisis pour le point de base.
pub const OFFSET_MAX: i64 = 1_000;

/// Une ligne du tableau des termes.
#[derive(Clone, Debug, Default)]
pub struct LigneTerme {
    pub offset: i64,
    pub echantillon: String,
    pub coefficient: String,
}

#[derive(Clone, Debug)]
pub struct AppDiff {
    // --- entrée utilisateur ---
    pub methode: String,
    pub ordre: u32,
    pub coeff: String,
    pub offset: i64,
    pub rendu: Rendu,

    // --- sorties ---
    pub numerateur: String,
    pub denominateur: String,
    pub termes: Vec<LigneTerme>,
    pub erreur: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppDiff {
    fn default() -> Self {
        Self {
            methode: Method::Central.nom().to_string(),
            ordre: ORDRE_DEFAUT,
            coeff: "1".to_string(),
            offset: 0,
            rendu: Rendu::Decimal,
            numerateur: String::new(),
            denominateur: String::new(),
            termes: Vec::new(),
            erreur: String::new(),
            focus_entree: true,
        }
    }
}

impl AppDiff {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées par défaut + résultats effacés).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// CLR : effacer résultats + erreur (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.numerateur.clear();
        self.denominateur.clear();
        self.termes.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Erreur : le numérateur est invalide, le dénominateur reste affiché
    /// (il ne dépend que de l’ordre).
    pub fn set_erreur(&mut self, msg: impl Into<String>, denominateur: StepPower) {
        self.erreur = msg.into();
        self.numerateur.clear();
        self.termes.clear();
        self.denominateur = denominateur.to_string();
        self.focus_entree = true;
    }

    /// Dépose une expression complète (numérateur, dénominateur, tableau des termes).
    pub fn set_resultats(&mut self, e: &DifferenceExpression) {
        self.erreur.clear();
        self.numerateur = e.numerator().render(self.rendu);
        self.denominateur = e.denominator().to_string();
        self.termes = e
            .numerator()
            .terms()
            .iter()
            .map(|t| LigneTerme {
                offset: t.offset(),
                echantillon: t.echantillon(),
                coefficient: format_coeff(t.coefficient(), self.rendu).trim().to_string(),
            })
            .collect();
        self.focus_entree = true;
    }

    /// Garde-fou : ordre borné.
    pub fn set_ordre(&mut self, ordre: u32) {
        self.ordre = ordre.min(ORDRE_MAX);
    }

    pub fn set_offset(&mut self, offset: i64) {
        self.offset = offset.clamp(-OFFSET_MAX, OFFSET_MAX);
    }

    pub fn set_methode(&mut self, m: Method) {
        self.methode = m.nom().to_string();
        self.focus_entree = true;
    }
}
