// src/bin/banc.rs
//
// Banc de régression en ligne de commande.
//
//   banc <confirmation.json> <refutation.json> [dossier_sortie]
//
// Écrit output_confirmation_errors.json et output_refutation_errors.json
// (dossier "sorties" par défaut), puis affiche les deux rapports.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use calculatrice_rpn::noyau::banc::{self, ErreurBanc, Preuve, Rapport};
use calculatrice_rpn::noyau::registre::Registre;
use calculatrice_rpn::noyau::{Evaluateur, Options};
use calculatrice_rpn::traces::init_tracing;

const DOSSIER_DEFAUT: &str = "sorties";

fn passer(
    entree: &Path,
    preuve: Preuve,
    sortie: &Path,
    ev: &Evaluateur<'_>,
) -> Result<Rapport, ErreurBanc> {
    let fiches = banc::charger(entree)?;
    let rapport = banc::verifier(&fiches, preuve, ev);
    banc::ecrire(&rapport, &sortie.join(format!("output_{preuve}_errors.json")))?;
    Ok(rapport)
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: banc <confirmation.json> <refutation.json> [dossier_sortie]");
        return ExitCode::FAILURE;
    }

    let sortie = PathBuf::from(args.get(2).map_or(DOSSIER_DEFAUT, String::as_str));
    if let Err(e) = std::fs::create_dir_all(&sortie) {
        eprintln!("impossible de créer {} : {e}", sortie.display());
        return ExitCode::FAILURE;
    }

    let ev = Evaluateur::new(Registre::global(), Options::depuis_env());

    let passes = [
        (Path::new(&args[0]), Preuve::Confirmation),
        (Path::new(&args[1]), Preuve::Refutation),
    ];
    for (entree, preuve) in passes {
        match passer(entree, preuve, &sortie, &ev) {
            Ok(rapport) => println!("{rapport}"),
            Err(e) => {
                eprintln!("banc {preuve} : {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
