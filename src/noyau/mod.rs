//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - jetons.rs  : Jeton (nombre / opérateur) + précédences
//! - saisie.rs  : accumulateur de frappes -> suite de jetons
//! - eval.rs    : évaluation à deux piles
//! - format.rs  : affichage des résultats
//! - session.rs : événements UI + transition unique + affichage
//! - erreur.rs  : erreurs typées

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;
pub mod session;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use session::{Evenement, Session};
