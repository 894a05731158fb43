// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en Evenement (même chemin que les boutons)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Evenement;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for ev in evenements_clavier(ctx) {
            self.envoyer(ev);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Clavier :
/// - texte tapé : chiffres, ".", "+ - * /", "=" (et "c" = effacer)
/// - Enter = évaluer ; Escape / Delete = effacer
fn evenements_clavier(ctx: &egui::Context) -> Vec<Evenement> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for e in &i.events {
            match e {
                egui::Event::Text(t) => {
                    out.extend(t.chars().filter_map(|c| Evenement::from_touche(&c.to_string())));
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Evenement::Evaluer),
                    egui::Key::Escape | egui::Key::Delete => out.push(Evenement::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}
