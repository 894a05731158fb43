//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session du noyau et la seule action que l’UI a le droit
//! de faire dessus : lui passer un événement.
//!
//! Contrats :
//! - Aucune évaluation ici (tout passe par `Session::appliquer`).
//! - L’affichage vient toujours de la session, jamais d’une édition directe.

use tracing::trace;

use crate::noyau::{Evenement, Session};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    session: Session,
}

impl AppCalc {
    /// Toute entrée (bouton ou clavier) finit ici.
    pub fn envoyer(&mut self, ev: Evenement) {
        trace!(?ev, "événement");
        self.session.appliquer(ev);
    }

    pub fn affichage(&self) -> &str {
        self.session.affichage()
    }

    pub fn est_en_erreur(&self) -> bool {
        self.session.est_en_erreur()
    }
}
