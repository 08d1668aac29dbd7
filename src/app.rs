// src/app.rs
//
// Visualiseur de différences finies — module App (racine)
// ------------------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppDiff (pour main.rs: use crate::app::AppDiff;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppDiff;

use eframe::egui;

impl eframe::App for AppDiff {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer les résultats (comme bouton "CLR").
        // Enter est géré dans vue.rs (seulement quand un champ a le focus).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_resultats();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
