// src/noyau/banc.rs
//
// Banc de régression sur fichiers JSON.
//
// Fiche : { "expression": { "rpn": "3 4 +" }, "result": 7 }   (result peut valoir "NaN")
//
// Deux preuves :
// - Confirmation : résultats justes, un ÉCHEC = une fiche dont le calcul diffère
// - Réfutation   : résultats volontairement faux, un ÉCHEC = une fiche retrouvée
//
// Convention : tout échec de calcul est identifié à "NaN" (une faute est une faute).
// Comparaison : exacte si les deux valeurs sont entières, sinon tolérance relative
// TOLERANCE. Une fiche de réfutation fausse de moins de 1e-12 (relatif) et non
// entière est donc retrouvée.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::erreur::ErreurCalcul;
use super::eval::Evaluateur;
use super::nombre::Nombre;

/// Tolérance relative pour comparer deux flottants.
const TOLERANCE: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum ErreurBanc {
    #[error("fichier {chemin} : {source}")]
    Io {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON invalide dans {chemin} : {source}")]
    Json {
        chemin: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressionFiche {
    #[serde(alias = "pofix")]
    pub rpn: String,
}

/// Résultat attendu : un nombre, ou un texte ("NaN" pour un échec).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attendu {
    Nombre(f64),
    Texte(String),
}

impl Attendu {
    fn est_nan(&self) -> bool {
        match self {
            Attendu::Nombre(x) => x.is_nan(),
            Attendu::Texte(s) => s.trim().eq_ignore_ascii_case("nan"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fiche {
    pub expression: ExpressionFiche,
    pub result: Attendu,
}

/// Ligne du fichier de sortie.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ligne {
    pub number: usize,
    pub rpn: String,
    pub result: Attendu,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preuve {
    Confirmation,
    Refutation,
}

impl fmt::Display for Preuve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preuve::Confirmation => f.write_str("confirmation"),
            Preuve::Refutation => f.write_str("refutation"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rapport {
    pub preuve: Preuve,
    pub total: usize,
    pub echecs: Vec<Ligne>,
}

impl Rapport {
    /// Taux de réussite en %, arrondi à 2 décimales.
    pub fn taux(&self) -> f64 {
        if self.echecs.is_empty() {
            return 100.0;
        }
        if self.total == 0 || self.echecs.len() == self.total {
            return 0.0;
        }
        let s = (100.0 * (self.total - self.echecs.len()) as f64) / self.total as f64;
        (s * 100.0).round() / 100.0
    }

    pub fn refutee(&self) -> bool {
        !self.echecs.is_empty()
    }
}

impl fmt::Display for Rapport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Taux de réussite ({}) : {} %", self.preuve, self.taux())?;
        write!(
            f,
            "Implémentation {}réfutée.",
            if self.refutee() { "" } else { "non " }
        )
    }
}

/// Calcul et attendu coïncident (NaN ≡ échec de calcul).
pub fn concorde(calcul: &Result<Nombre, ErreurCalcul>, attendu: &Attendu) -> bool {
    match (calcul, attendu.est_nan()) {
        (Err(_), true) => true,
        (Err(_), false) | (Ok(_), true) => false,
        (Ok(n), false) => match attendu {
            Attendu::Nombre(v) => proches(n.to_f64(), *v),
            Attendu::Texte(_) => false,
        },
    }
}

fn proches(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if a.fract() == 0.0 && b.fract() == 0.0 {
        return false;
    }
    let echelle = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= TOLERANCE * echelle
}

pub fn charger(chemin: &Path) -> Result<Vec<Fiche>, ErreurBanc> {
    let nom = chemin.display().to_string();
    let f = File::open(chemin).map_err(|source| ErreurBanc::Io {
        chemin: nom.clone(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(f)).map_err(|source| ErreurBanc::Json {
        chemin: nom,
        source,
    })
}

pub fn verifier(fiches: &[Fiche], preuve: Preuve, ev: &Evaluateur<'_>) -> Rapport {
    let echecs = fiches
        .iter()
        .filter(|fiche| {
            let ok = concorde(&ev.evaluer(&fiche.expression.rpn), &fiche.result);
            match preuve {
                Preuve::Confirmation => !ok,
                Preuve::Refutation => ok,
            }
        })
        .enumerate()
        .map(|(number, fiche)| Ligne {
            number,
            rpn: fiche.expression.rpn.clone(),
            result: fiche.result.clone(),
        })
        .collect::<Vec<_>>();

    let rapport = Rapport {
        preuve,
        total: fiches.len(),
        echecs,
    };
    info!(%preuve, total = rapport.total, echecs = rapport.echecs.len(), taux = rapport.taux(), "banc");
    rapport
}

pub fn ecrire(rapport: &Rapport, chemin: &Path) -> Result<(), ErreurBanc> {
    let nom = chemin.display().to_string();
    let f = File::create(chemin).map_err(|source| ErreurBanc::Io {
        chemin: nom.clone(),
        source,
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &rapport.echecs).map_err(|source| ErreurBanc::Json {
        chemin: nom.clone(),
        source,
    })?;
    w.flush().map_err(|source| ErreurBanc::Io { chemin: nom, source })
}
