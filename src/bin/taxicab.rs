// src/bin/taxicab.rs
//
// Démo en ligne de commande : le nombre taxicab.
//
//   taxicab [N]     (N = nombre de répétitions chronométrées, 1000 par défaut)
//
// 1729 = 10³ + 9³ = 12³ + 1³

use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;

use calculatrice_rpn::noyau::{compute, ErreurCalcul, Evaluateur, Nombre};
use calculatrice_rpn::traces::init_tracing;

const E: &str = "10 3 ** 9 3 ** +";
const F: &str = "12 3 ** 1 3 ** +";

const REPETITIONS_DEFAUT: u32 = 1000;

fn afficher(r: &Result<Nombre, ErreurCalcul>) -> String {
    match r {
        Ok(n) => n.to_string(),
        Err(e) => format!("échec ({e})"),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let n = match std::env::args().nth(1) {
        None => REPETITIONS_DEFAUT,
        Some(s) => match s.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("usage: taxicab [N]   (N entier > 0, reçu {s:?})");
                return ExitCode::FAILURE;
            }
        },
    };

    let (e, d) = Evaluateur::default().evaluer_avec_demarche(E);
    let f = compute(F);

    println!("Le saviez-vous ?");
    println!("  {E}  =  {}", afficher(&e));
    println!("  {F}  =  {}", afficher(&f));
    for etape in &d.etapes {
        println!("    → {etape}");
    }

    let egaux = matches!((&e, &f), (Ok(a), Ok(b)) if a == b);
    if egaux {
        println!("{} est la somme de deux cubes de deux façons différentes.", afficher(&e));
    } else {
        println!("Les deux expressions ne coïncident pas.");
    }

    let t0 = Instant::now();
    for _ in 0..n {
        let a = compute(black_box(E));
        let b = compute(black_box(F));
        black_box(a == b);
    }
    let moyenne = t0.elapsed().as_secs_f64() * 1e6 / f64::from(n);
    println!("Temps moyen d’une comparaison ({n} essais) : {moyenne:.3} µs");

    if egaux {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
