// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran en lecture seule, aligné à droite
// - Pavé 4 colonnes : 7 8 9 / | 4 5 6 * | 1 2 3 - | 0 . = + | C
// - Chaque bouton fabrique un Evenement ; l’état fait le reste

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Evenement;

/// Ordre du pavé, ligne par ligne.
const PAVE: [&[&str]; 5] = [
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C"],
];

const COLONNES: usize = 4;
const ESPACEMENT: f32 = 6.0;
const HAUTEUR_ECRAN: f32 = 48.0;
const TAILLE_TEXTE_ECRAN: f32 = 22.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.est_en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(TAILLE_TEXTE_ECRAN)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = (ui.available_width() - ESPACEMENT * (COLONNES as f32 - 1.0)) / COLONNES as f32;
        let lignes = PAVE.len() as f32;
        let hauteur = ((ui.available_height() - ESPACEMENT * (lignes - 1.0)) / lignes).max(28.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(COLONNES)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche, [largeur, hauteur]);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str, taille: [f32; 2]) {
        let resp = ui.add_sized(
            taille,
            egui::Button::new(egui::RichText::new(touche).size(18.0)),
        );
        if !resp.clicked() {
            return;
        }
        if let Some(ev) = Evenement::from_touche(touche) {
            self.envoyer(ev);
        }
    }
}
