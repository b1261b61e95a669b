// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::One;

use super::jetons::Terme;

/* ------------------------ Helpers rationnels ------------------------ */

pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Bande ------------------------ */

fn format_terme(t: &Terme) -> String {
    match t {
        Terme::Constante(n) => n.to_string(),
        Terme::Operateur(op) => op.symbole().to_string(),
        Terme::Invalide(brut) => format!("⟨{brut}⟩"),
    }
}

/// Bande en texte (démarche / traces) : termes séparés par un espace.
pub fn format_bande(termes: &[Terme]) -> String {
    termes
        .iter()
        .map(format_terme)
        .collect::<Vec<_>>()
        .join(" ")
}
