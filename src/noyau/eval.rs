//! Noyau — évaluation à deux piles (valeurs + opérateurs)
//!
//! Même règle de dépilement que le shunting-yard classique, mais on applique
//! directement au lieu de sortir une RPN :
//! - nombre    => pile des valeurs
//! - opérateur => tant que précédence(op) <= précédence(sommet), on réduit ; puis on empile op
//! - fin       => on réduit jusqu’à vider la pile des opérateurs
//!
//! `<=` (et pas `<`) : associativité à gauche, 8 - 3 - 2 = (8 - 3) - 2.
//! Aucun état entre deux appels.

use tracing::debug;

use super::erreur::EvalError;
use super::jetons::{format_jetons, Jeton, Operateur};

/// API publique : évalue une suite de jetons déjà terminée.
pub fn evaluate(jetons: &[Jeton]) -> Result<f64, EvalError> {
    let mut valeurs: Vec<f64> = Vec::with_capacity(jetons.len() / 2 + 1);
    let mut ops: Vec<Operateur> = Vec::with_capacity(jetons.len() / 2);

    for jeton in jetons {
        match *jeton {
            Jeton::Nombre(v) => valeurs.push(v),

            Jeton::Op(op) => {
                while let Some(&sommet) = ops.last() {
                    if op.precedence() > sommet.precedence() {
                        break;
                    }
                    ops.pop();
                    reduire(&mut valeurs, sommet)?;
                }
                ops.push(op);
            }
        }
    }

    while let Some(op) = ops.pop() {
        reduire(&mut valeurs, op)?;
    }

    let resultat = valeurs.pop().ok_or(EvalError::MalformedExpression)?;

    // deux nombres collés (aucun opérateur entre eux) => reste sur la pile
    if !valeurs.is_empty() {
        return Err(EvalError::MalformedExpression);
    }

    debug!(jetons = %format_jetons(jetons), resultat, "évaluation");
    Ok(resultat)
}

/// Dépile b puis a (dans cet ordre), empile a op b.
fn reduire(valeurs: &mut Vec<f64>, op: Operateur) -> Result<(), EvalError> {
    let b = valeurs.pop().ok_or(EvalError::MalformedExpression)?;
    let a = valeurs.pop().ok_or(EvalError::MalformedExpression)?;
    valeurs.push(appliquer(op, a, b)?);
    Ok(())
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => {
            // -0.0 == 0.0 aussi
            if b == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}
