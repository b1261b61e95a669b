//! Tests de propriétés (campagne) : ordre des opérandes, variadiques,
//! cas nullaire, taxonomie des échecs, idempotence.
//!
//! proptest pour les familles "a b OP", exemples fixes pour le reste.

use num_bigint::BigInt;
use num_rational::BigRational;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::erreur::{ErreurCalcul, ErreurDomaine};
use super::eval::compute;
use super::nombre::Nombre;

fn ok(expr: &str) -> Nombre {
    compute(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn rat(n: i64, d: i64) -> Nombre {
    Nombre::Exact(BigRational::new(BigInt::from(n), BigInt::from(d)))
}

/* ------------------------ Ordre gauche -> droite ------------------------ */

#[test]
fn prop_non_commutativite_visible() {
    assert_eq!(ok("8 2 /"), Nombre::entier(4));
    assert_eq!(ok("2 8 /"), rat(1, 4));
    assert_eq!(ok("2 3 **"), Nombre::entier(8));
    assert_eq!(ok("3 2 ^"), Nombre::entier(9));
    assert_eq!(ok("10 4 -"), Nombre::entier(6));
}

proptest! {
    #[test]
    fn prop_binaire_gauche_op_droite(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(compute(&format!("{a} {b} +")), Ok(Nombre::entier(a + b)));
        prop_assert_eq!(compute(&format!("{a} {b} -")), Ok(Nombre::entier(a - b)));
        prop_assert_eq!(compute(&format!("{a} {b} *")), Ok(Nombre::entier(a * b)));
        if b == 0 {
            prop_assert_eq!(
                compute(&format!("{a} {b} /")),
                Err(ErreurCalcul::Domaine(ErreurDomaine::DivisionParZero))
            );
        } else {
            prop_assert_eq!(compute(&format!("{a} {b} /")), Ok(rat(a, b)));
        }
    }

    #[test]
    fn prop_max_min_proj_sur_toute_la_serie(v in proptest::collection::vec(-500i64..500, 1..12)) {
        let serie = v.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        let max = v.iter().copied().max().unwrap_or_default();
        let min = v.iter().copied().min().unwrap_or_default();
        prop_assert_eq!(compute(&format!("{serie} MAX")), Ok(Nombre::entier(max)));
        prop_assert_eq!(compute(&format!("{serie} MIN")), Ok(Nombre::entier(min)));
        prop_assert_eq!(compute(&format!("{serie} PROJ")), Ok(Nombre::entier(v[0])));
    }

    #[test]
    fn prop_serie_de_constantes_garde_la_derniere(v in proptest::collection::vec(-99i64..99, 1..10)) {
        let serie = v.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(compute(&serie), Ok(Nombre::entier(v[v.len() - 1])));
    }
}

/* ------------------------ Variadiques ------------------------ */

#[test]
fn prop_variadiques_exemples() {
    assert_eq!(ok("3 5 7 MAX"), Nombre::entier(7));
    assert_eq!(ok("3 5 7 MIN"), Nombre::entier(3));
    assert_eq!(ok("3 5 7 PROJ"), Nombre::entier(3));
    // la série consommée inclut un résultat déjà réduit
    assert_eq!(ok("1 1 + 5 MIN"), Nombre::entier(2));
}

/* ------------------------ Cas nullaire ------------------------ */

#[test]
fn prop_nullaire() {
    assert_eq!(ok("2 2"), Nombre::entier(2));
    assert_eq!(ok("2 2 + 3 3 *"), Nombre::entier(9));
}

/* ------------------------ Taxonomie des échecs ------------------------ */

#[test]
fn prop_echecs() {
    assert!(matches!(compute("2 @"), Err(ErreurCalcul::JetonInvalide { .. })));
    assert!(matches!(
        compute("+ 1"),
        Err(ErreurCalcul::OperandesInsuffisantes { .. })
    ));
    assert!(matches!(
        compute("1 +"),
        Err(ErreurCalcul::OperandesInsuffisantes { requis: 2, disponibles: 1, .. })
    ));
    assert_eq!(compute(""), Err(ErreurCalcul::ExpressionVide));
    assert_eq!(
        compute("-4 SQRT"),
        Err(ErreurCalcul::Domaine(ErreurDomaine::RacineNegative))
    );
    assert_eq!(
        compute("5 0 /"),
        Err(ErreurCalcul::Domaine(ErreurDomaine::DivisionParZero))
    );
}

#[test]
fn prop_ordre_des_echecs_gauche_droite() {
    // l’opérateur mal placé est atteint avant le jeton invalide
    assert!(matches!(
        compute("+ @"),
        Err(ErreurCalcul::OperandesInsuffisantes { .. })
    ));
    assert!(matches!(compute("@ +"), Err(ErreurCalcul::JetonInvalide { .. })));
    // la division par zéro se produit avant d’atteindre "@"
    assert_eq!(
        compute("1 0 / @"),
        Err(ErreurCalcul::Domaine(ErreurDomaine::DivisionParZero))
    );
}

/* ------------------------ Taxicab ------------------------ */

#[test]
fn prop_taxicab() {
    let e = compute("10 3 ** 9 3 ** +");
    let f = compute("12 3 ** 1 3 ** +");
    assert_eq!(e, Ok(Nombre::entier(1729)));
    assert_eq!(e, f);
}

#[test]
fn prop_puissances_exposant_extreme() {
    assert_eq!(ok("2 -9223372036854775808 **"), Nombre::entier(0));
    assert_eq!(
        compute("0 -9223372036854775808 **"),
        Err(ErreurCalcul::Domaine(ErreurDomaine::DivisionParZero))
    );
    assert_eq!(ok("-1 99999999999999999999 **"), Nombre::entier(-1));
    assert_eq!(ok("-1 99999999999999999998 ^"), Nombre::entier(1));
}

#[test]
fn prop_racines() {
    assert_eq!(ok("4 SQRT"), Nombre::entier(2));
    assert_eq!(ok("4 sqrt"), Nombre::entier(2));
    match ok("2 SQRT") {
        Nombre::Reel(x) => assert!((x - 1.414_213_56).abs() < 1e-8, "{x}"),
        autre => panic!("attendu un réel, obtenu {autre:?}"),
    }
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["10 3 ** 9 3 ** +", "2 SQRT", "2 @", "1 3 / 2 MAX", ""] {
        let a = compute(expr);
        let b = compute(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

#[test]
fn prop_appels_concurrents() {
    let fils: Vec<_> = (0..4)
        .map(|k| std::thread::spawn(move || compute(&format!("{k} 3 ** 1 +"))))
        .collect();
    for (k, fil) in fils.into_iter().enumerate() {
        let r = fil.join().unwrap_or_else(|_| panic!("fil {k} a paniqué"));
        let k = k as i64;
        assert_eq!(r, Ok(Nombre::entier(k * k * k + 1)));
    }
}
