// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppDiff (etat.rs) pour natif + wasm
// - Clavier : Enter construit (quand un champ texte est focus)
// - Tactile : boutons méthode, focus redonné après clic (focus_entree)
// - Le dénominateur reste visible même si la méthode est refusée

use eframe::egui;

use differences_finies::noyau::{lire_coefficient, DifferenceExpression, GridTerm, Method, Rendu};

use super::etat::{AppDiff, ORDRE_MAX, OFFSET_MAX};

impl AppDiff {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Différences finies");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_termes(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // --- Méthode (texte libre + raccourcis) ---
        ui.label("Méthode :");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.methode)
                .desired_width(ui.available_width())
                .hint_text("forward, backward, central")
                .id_salt("methode_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let mut construire = resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.horizontal_wrapped(|ui| {
            for m in Method::ALL {
                if ui.add_sized([84.0, 28.0], egui::Button::new(m.nom())).clicked() {
                    self.set_methode(m);
                    construire = true;
                }
            }
        });

        ui.add_space(6.0);

        // --- Ordre + point de base ---
        egui::Grid::new("parametres_diff")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Ordre :");
                let mut n = self.ordre;
                if ui
                    .add(egui::DragValue::new(&mut n).speed(1).range(0..=ORDRE_MAX))
                    .changed()
                {
                    self.set_ordre(n);
                    construire = true;
                }
                ui.end_row();

                ui.label("Coefficient :");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.coeff)
                        .desired_width(120.0)
                        .hint_text("1, -0.5, 3/4")
                        .id_salt("coeff_edit")
                        .code_editor(),
                );
                if resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    construire = true;
                }
                ui.end_row();

                ui.label("Offset :");
                let mut k = self.offset;
                if ui
                    .add(egui::DragValue::new(&mut k).speed(1).range(-OFFSET_MAX..=OFFSET_MAX))
                    .changed()
                {
                    self.set_offset(k);
                    construire = true;
                }
                ui.end_row();

                ui.label("Rendu :");
                ui.horizontal(|ui| {
                    let avant = self.rendu;
                    ui.radio_value(&mut self.rendu, Rendu::Decimal, "décimal");
                    ui.radio_value(&mut self.rendu, Rendu::Exact, "exact");
                    if self.rendu != avant {
                        construire = true;
                    }
                });
                ui.end_row();
            });

        ui.add_space(8.0);

        // Contrat: CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            if ui.add_sized([64.0, 30.0], egui::Button::new("=")).clicked() {
                construire = true;
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("CLR"))
                .on_hover_text("Efface résultats + erreur")
                .clicked()
            {
                self.clear_resultats();
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale")
                .clicked()
            {
                self.reset_total();
            }
        });

        if construire {
            self.construire_via_noyau();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Numérateur :");
        if self.numerateur.is_empty() {
            ui.monospace("indisponible");
        } else {
            Self::champ_monospace(ui, "numerateur_out", &self.numerateur, 2);
        }

        ui.add_space(6.0);

        ui.label("Dénominateur :");
        Self::champ_monospace(ui, "denominateur_out", &self.denominateur, 1);
    }

    fn ui_termes(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Termes")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("termes_diff")
                    .num_columns(3)
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong("offset");
                        ui.strong("échantillon");
                        ui.strong("coefficient");
                        ui.end_row();

                        for t in &self.termes {
                            ui.monospace(t.offset.to_string());
                            ui.monospace(&t.echantillon);
                            ui.monospace(&t.coefficient);
                            ui.end_row();
                        }
                    });
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Construit l’expression via le noyau, puis dépose le résultat dans l’état UI.
    /// En cas d’erreur, le dénominateur (ordre seul) reste affiché.
    fn construire_via_noyau(&mut self) {
        let denominateur = DifferenceExpression::denominator_for(self.ordre);

        let coeff = match lire_coefficient(&self.coeff) {
            Ok(c) => c,
            Err(e) => {
                self.set_erreur(e.to_string(), denominateur);
                return;
            }
        };

        let point = GridTerm::new(coeff, self.offset);
        match DifferenceExpression::from_name(&self.methode, self.ordre, point) {
            Ok(e) => self.set_resultats(&e),
            Err(e) => self.set_erreur(e.to_string(), denominateur),
        }
    }
}
