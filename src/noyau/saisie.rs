//! Saisie : accumulateur de frappes (nombre en cours + jetons déjà validés).
//!
//! Contrats :
//! - un seul point décimal par nombre (le second est ignoré, sans erreur) ;
//! - un opérateur sans nombre avant est ignoré (pas d’erreur non plus) ;
//! - `finish` ne rend rien tant qu’aucun opérateur n’a été saisi.
//!
//! Le texte de l’expression garde les nombres tels que tapés ("007", "3.")
//! et entoure chaque opérateur d’un espace : "3 + 4 * ".

use tracing::trace;

use super::erreur::EvalError;
use super::jetons::{Jeton, Operateur};

/// Expression terminée, prête pour `evaluate`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub jetons: Vec<Jeton>,
    /// Texte lisible, ex: "3 + 4 * 2".
    pub texte: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Saisie {
    en_cours: String,
    jetons: Vec<Jeton>,
    texte: String,
    // premier littéral illisible rencontré (ex: ".") ; fera échouer finish()
    invalide: Option<String>,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nombre en cours de frappe (peut être vide).
    pub fn en_cours(&self) -> &str {
        &self.en_cours
    }

    /// Jetons déjà validés (sans le nombre en cours).
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    /// Texte de l’expression validée jusqu’ici.
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Ajoute un chiffre ASCII. Retourne false si `d` n’est pas un chiffre.
    pub fn append_digit(&mut self, d: char) -> bool {
        if !d.is_ascii_digit() {
            return false;
        }
        self.en_cours.push(d);
        true
    }

    /// Ajoute "." si le nombre en cours n’en a pas déjà un.
    pub fn append_decimal_point(&mut self) -> bool {
        if self.en_cours.contains('.') {
            return false;
        }
        self.en_cours.push('.');
        true
    }

    /// Valide le nombre en cours puis l’opérateur. Sans nombre en cours : ignoré.
    pub fn append_operator(&mut self, op: Operateur) -> bool {
        if self.en_cours.is_empty() {
            return false;
        }
        self.vider_en_cours();
        self.jetons.push(Jeton::Op(op));
        self.texte.push(' ');
        self.texte.push(op.symbole());
        self.texte.push(' ');
        true
    }

    /// Remise à zéro complète (état identique à `Saisie::default()`).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Termine l’expression.
    ///
    /// - `None` : aucun opérateur saisi, rien à évaluer, état inchangé.
    /// - `Some(..)` : l’accumulateur est remis à zéro, que l’expression soit
    ///   lisible ou non.
    pub fn finish(&mut self) -> Option<Result<Expression, EvalError>> {
        if self.texte.is_empty() {
            return None;
        }

        if !self.en_cours.is_empty() {
            self.vider_en_cours();
        }

        let fini = std::mem::take(self);
        if let Some(litteral) = fini.invalide {
            return Some(Err(EvalError::InvalidNumber(litteral)));
        }

        Some(Ok(Expression {
            jetons: fini.jetons,
            texte: fini.texte,
        }))
    }

    /// Le nombre en cours devient un jeton (et rejoint le texte tel que tapé).
    fn vider_en_cours(&mut self) {
        let litteral = std::mem::take(&mut self.en_cours);
        match litteral.parse::<f64>() {
            Ok(v) => {
                trace!(litteral = %litteral, valeur = v, "nombre validé");
                self.jetons.push(Jeton::Nombre(v));
            }
            Err(_) => {
                trace!(litteral = %litteral, "nombre illisible");
                if self.invalide.is_none() {
                    self.invalide = Some(litteral.clone());
                }
            }
        }
        self.texte.push_str(&litteral);
    }
}
