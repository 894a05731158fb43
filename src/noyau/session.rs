//! Session : une fonction de transition unique pour tous les événements de l’UI.
//!
//! L’UI ne touche jamais à l’affichage : elle fabrique un `Evenement`,
//! appelle `appliquer`, puis affiche la chaîne rendue.
//!
//! Affichage après chaque événement :
//! - chiffre / point accepté      : le nombre en cours
//! - opérateur accepté            : le texte de l’expression ("3 + ")
//! - frappe ignorée               : inchangé
//! - "=" sans opérateur saisi     : inchangé
//! - "=" réussi                   : "<expression> = <valeur>"
//! - "=" en échec                 : "Error"
//! - effacer                      : vide

use tracing::debug;

use super::eval::evaluate;
use super::format::{format_resultat, ERREUR_AFFICHAGE};
use super::jetons::Operateur;
use super::saisie::Saisie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(char),
    Virgule,
    Operateur(Operateur),
    Evaluer,
    Effacer,
}

impl Evenement {
    /// Lecture d’une touche de pavé / clavier ("7", ".", "+", "=", "C").
    pub fn from_touche(touche: &str) -> Option<Self> {
        let mut chars = touche.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c {
            '0'..='9' => Some(Evenement::Chiffre(c)),
            '.' => Some(Evenement::Virgule),
            '=' => Some(Evenement::Evaluer),
            'C' | 'c' => Some(Evenement::Effacer),
            _ => Operateur::from_char(c).map(Evenement::Operateur),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    saisie: Saisie,
    affichage: String,
    en_erreur: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaîne à afficher dans l’écran de la calculatrice.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Vrai si l’écran montre "Error" (dernière évaluation en échec).
    pub fn est_en_erreur(&self) -> bool {
        self.en_erreur
    }

    /// Transition unique : applique l’événement et rend l’affichage.
    pub fn appliquer(&mut self, ev: Evenement) -> &str {
        match ev {
            Evenement::Chiffre(d) => {
                if self.saisie.append_digit(d) {
                    self.montrer_en_cours();
                }
            }
            Evenement::Virgule => {
                if self.saisie.append_decimal_point() {
                    self.montrer_en_cours();
                }
            }
            Evenement::Operateur(op) => {
                if self.saisie.append_operator(op) {
                    self.affichage = self.saisie.texte().to_string();
                    self.en_erreur = false;
                }
            }
            Evenement::Evaluer => self.evaluer(),
            Evenement::Effacer => {
                self.saisie.clear();
                self.affichage.clear();
                self.en_erreur = false;
            }
        }
        &self.affichage
    }

    fn montrer_en_cours(&mut self) {
        self.affichage = self.saisie.en_cours().to_string();
        self.en_erreur = false;
    }

    fn evaluer(&mut self) {
        let Some(fin) = self.saisie.finish() else {
            return;
        };

        let rendu = fin.and_then(|e| evaluate(&e.jetons).map(|v| format_resultat(&e.texte, v)));

        match rendu {
            Ok(texte) => {
                self.affichage = texte;
                self.en_erreur = false;
            }
            Err(err) => {
                debug!(%err, "évaluation refusée");
                self.affichage = ERREUR_AFFICHAGE.to_string();
                self.en_erreur = true;
            }
        }
    }
}
