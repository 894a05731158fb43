// src/noyau/erreur.rs
//
// Erreurs du noyau (typées).
// Toutes finissent en "Error" à l’écran ; le détail sert aux logs et aux tests.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Opérande droit d’une division exactement nul.
    #[error("division par zéro")]
    DivisionByZero,

    /// Piles vides au mauvais moment : la suite de jetons n’alterne pas
    /// nombre / opérateur / nombre.
    #[error("expression mal formée")]
    MalformedExpression,

    /// Littéral saisi qui ne se lit pas comme un nombre (ex: ".").
    #[error("nombre invalide: {0:?}")]
    InvalidNumber(String),
}
