//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la réduction sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - toute erreur doit rester dans la taxonomie, jamais de panique
//! - invariant clé : une étape raccourcit toujours la bande

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::{compute, eval_expression};
use super::jetons::tokenize;
use super::nombre::Nombre;
use super::options::Alphabet;
use super::reduction::Bande;
use super::registre::Registre;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de jetons (bornée) ------------------------ */

const OPERATEURS: [&str; 12] = [
    "+", "-", "*", "/", "**", "^", "SQRT", "sqrt", "MAX", "MIN", "PROJ", "√",
];

fn gen_jeton(rng: &mut Rng) -> String {
    match rng.pick(10) {
        0..=4 => {
            // petits entiers, 0 inclus (utile pour / et **)
            let n = rng.pick(13) as i64 - 4;
            format!("{n}")
        }
        5..=8 => OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize].to_string(),
        _ => match rng.pick(4) {
            0 => "@".to_string(),
            1 => "1.5".to_string(),
            2 => "x".to_string(),
            _ => String::new(),
        },
    }
}

fn gen_expr(rng: &mut Rng, longueur: usize) -> String {
    (0..longueur)
        .map(|_| gen_jeton(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expression bien formée : série de constantes suivie d’opérateurs binaires.
fn gen_expr_saine(rng: &mut Rng, n: usize) -> String {
    let mut s = format!("{}", rng.pick(9) + 1);
    for _ in 1..n {
        let k = rng.pick(9) + 1;
        let op = ["+", "-", "*"][rng.pick(3) as usize];
        s.push_str(&format!(" {k} {op}"));
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_taxonomie() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(8) as usize;
        let expr = gen_expr(&mut rng, longueur);

        let a = compute(&expr);
        assert_eq!(a, compute(&expr), "non déterministe: expr={expr:?}");

        match a {
            Ok(Nombre::Reel(x)) => {
                assert!(x.is_finite(), "réel non fini: expr={expr:?}");
                seen_ok += 1;
            }
            Ok(Nombre::Exact(_)) => seen_ok += 1,
            Err(
                ErreurCalcul::ExpressionVide
                | ErreurCalcul::JetonInvalide { .. }
                | ErreurCalcul::OperandesInsuffisantes { .. }
                | ErreurCalcul::Domaine(_),
            ) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_bande_raccourcit() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let longueur = 1 + rng.pick(10) as usize;
        let expr = gen_expr(&mut rng, longueur);
        let mut b = Bande::new(tokenize(&expr, Registre::global(), Alphabet::Strict));

        let mut etapes = 0usize;
        while b.len() > 1 {
            let avant = b.len();
            if b.etape().is_err() {
                break;
            }
            assert!(b.len() < avant, "bande non raccourcie: expr={expr:?}");
            etapes += 1;
        }
        assert!(etapes < longueur, "trop d’étapes: expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_expressions_saines() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let n = 1 + rng.pick(12) as usize;
        let expr = gen_expr_saine(&mut rng, n);
        let (exact, lecture, d) =
            eval_expression(&expr, 10).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        // que des entiers : EXACT sans '/', ΣLocal = EXACT + ".0000000000"
        assert!(!exact.contains('/'), "expr={expr:?} exact={exact}");
        assert_eq!(lecture, format!("{exact}.0000000000"), "expr={expr:?}");
        if let Some(derniere) = d.etapes.last() {
            assert_eq!(derniere, &exact, "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_longue_serie_variadique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    // 2000 constantes puis MAX : une seule étape
    let serie = (1..=2000).map(|k| k.to_string()).collect::<Vec<_>>().join(" ");
    let expr = format!("{serie} MAX");

    let r = compute(&expr);
    budget(t0, max);
    assert_eq!(r, Ok(Nombre::entier(2000)));
}

#[test]
fn fuzz_safe_longue_chaine_binaire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 1 1 + 1 + ... : 800 additions
    let mut expr = "1".to_string();
    for _ in 0..800 {
        expr.push_str(" 1 +");
    }

    let r = compute(&expr);
    budget(t0, max);
    assert_eq!(r, Ok(Nombre::entier(801)));
}
