//! Tests de propriétés (proptest) : l’évaluateur à deux piles contre une
//! référence en descente récursive, écrite indépendamment.
//!
//! Les deux appliquent les mêmes opérations dans le même ordre, donc on
//! compare les f64 à l’égalité stricte.

use proptest::prelude::*;

use super::erreur::EvalError;
use super::eval::evaluate;
use super::jetons::{Jeton, Operateur};
use super::session::{Evenement, Session};

/* ------------------------ Référence : descente récursive ------------------------ */

struct Reference<'a> {
    jetons: &'a [Jeton],
    pos: usize,
}

impl Reference<'_> {
    fn nombre(&mut self) -> f64 {
        match self.jetons[self.pos] {
            Jeton::Nombre(v) => {
                self.pos += 1;
                v
            }
            Jeton::Op(op) => panic!("nombre attendu, trouvé {op}"),
        }
    }

    fn op_si(&mut self, rang: u8) -> Option<Operateur> {
        match self.jetons.get(self.pos) {
            Some(Jeton::Op(op)) if op.precedence() == rang => {
                self.pos += 1;
                Some(*op)
            }
            _ => None,
        }
    }

    // terme := nombre (('*' | '/') nombre)*
    fn terme(&mut self) -> f64 {
        let mut acc = self.nombre();
        while let Some(op) = self.op_si(2) {
            let b = self.nombre();
            acc = match op {
                Operateur::Fois => acc * b,
                _ => acc / b,
            };
        }
        acc
    }

    // somme := terme (('+' | '-') terme)*
    fn somme(&mut self) -> f64 {
        let mut acc = self.terme();
        while let Some(op) = self.op_si(1) {
            let b = self.terme();
            acc = match op {
                Operateur::Plus => acc + b,
                _ => acc - b,
            };
        }
        acc
    }
}

fn reference(jetons: &[Jeton]) -> f64 {
    let mut r = Reference { jetons, pos: 0 };
    let v = r.somme();
    assert_eq!(r.pos, jetons.len(), "référence: jetons non consommés");
    v
}

/* ------------------------ Stratégies ------------------------ */

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

/// Nombres non nuls, entiers ou au quart près (comme tapés au pavé).
fn nombre_non_nul() -> impl Strategy<Value = f64> {
    (1u32..10_000).prop_map(|n| f64::from(n) / 4.0)
}

/// n1 op1 n2 ... opk n(k+1)
fn suite_bien_formee() -> impl Strategy<Value = Vec<Jeton>> {
    (
        nombre_non_nul(),
        prop::collection::vec((operateur(), nombre_non_nul()), 0..12),
    )
        .prop_map(|(premier, reste)| {
            let mut jetons = vec![Jeton::Nombre(premier)];
            for (op, n) in reste {
                jetons.push(Jeton::Op(op));
                jetons.push(Jeton::Nombre(n));
            }
            jetons
        })
}

fn jeton_quelconque() -> impl Strategy<Value = Jeton> {
    prop_oneof![
        (-3i32..=3).prop_map(|n| Jeton::Nombre(f64::from(n))),
        operateur().prop_map(Jeton::Op),
    ]
}

fn evenement() -> impl Strategy<Value = Evenement> {
    prop_oneof![
        (0u32..10).prop_map(|d| Evenement::Chiffre(char::from_digit(d, 10).unwrap_or('0'))),
        Just(Evenement::Virgule),
        operateur().prop_map(Evenement::Operateur),
        Just(Evenement::Evaluer),
    ]
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn concorde_avec_la_reference(jetons in suite_bien_formee()) {
        prop_assert_eq!(evaluate(&jetons), Ok(reference(&jetons)));
    }

    #[test]
    fn jamais_de_panique(jetons in prop::collection::vec(jeton_quelconque(), 0..16)) {
        match evaluate(&jetons) {
            Ok(_) => {}
            Err(EvalError::DivisionByZero) | Err(EvalError::MalformedExpression) => {}
            Err(autre) => prop_assert!(false, "erreur inattendue: {autre:?}"),
        }
    }

    #[test]
    fn suite_bien_formee_jamais_mal_formee(jetons in suite_bien_formee()) {
        prop_assert_ne!(evaluate(&jetons), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn effacer_rend_une_session_neuve(evenements in prop::collection::vec(evenement(), 0..30)) {
        let mut s = Session::new();
        for ev in evenements {
            s.appliquer(ev);
        }
        s.appliquer(Evenement::Effacer);
        prop_assert_eq!(s, Session::default());
    }
}
