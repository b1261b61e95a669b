//! Noyau RPN
//!
//! Organisation interne :
//! - registre.rs  : symboles -> opérateur + arité (figé)
//! - nombre.rs    : scalaire exact (rationnel) ou f64
//! - jetons.rs    : découpage + classification en termes
//! - arite.rs     : un évaluateur par arité (nullaire, unaire, binaire, variadique)
//! - reduction.rs : bande + balayage + épissure
//! - erreur.rs    : taxonomie des échecs
//! - options.rs   : alphabet des constantes + digits ΣLocal
//! - lecture.rs   : ΣLocal (décimal tronqué)
//! - format.rs    : affichage nombres / bandes
//! - eval.rs      : pipeline complet
//! - banc.rs      : banc de régression JSON

pub mod arite;
pub mod banc;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod nombre;
pub mod options;
pub mod reduction;
pub mod registre;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, ErreurDomaine};
pub use eval::{compute, eval_avec_options, eval_expression, DemarcheNoyau, Evaluateur};
pub use nombre::Nombre;
pub use options::{Alphabet, Options};
