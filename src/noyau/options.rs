// src/noyau/options.rs
//
// Paramètres d’évaluation.
// - alphabet : symboles acceptés pour écrire une constante
// - digits   : précision ΣLocal (lecture décimale tronquée)
//
// Environnement (lu par les binaires) :
//   RPN_ALPHABET=strict|etendu
//   RPN_DIGITS=<n>   (borné à DIGITS_MAX)

use std::fmt;
use std::str::FromStr;

/// Précision ΣLocal par défaut.
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Jeu de caractères accepté pour une constante.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// Chiffres + signes : `[+-]?[0-9]+`.
    #[default]
    Strict,
    /// Strict + lettres ASCII : autorise la syntaxe f64 (`1e3`, `2E-1`).
    Etendu,
}

impl Alphabet {
    pub fn accepte(self, c: char) -> bool {
        match self {
            Alphabet::Strict => c.is_ascii_digit() || c == '+' || c == '-',
            Alphabet::Etendu => c.is_ascii_alphanumeric() || c == '+' || c == '-',
        }
    }
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Alphabet::Strict),
            "etendu" | "étendu" => Ok(Alphabet::Etendu),
            autre => Err(format!("alphabet inconnu: {autre:?} (attendu: strict|etendu)")),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Strict => f.write_str("strict"),
            Alphabet::Etendu => f.write_str("etendu"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub alphabet: Alphabet,
    pub digits: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            digits: DIGITS_DEFAUT,
        }
    }
}

impl Options {
    pub fn avec_digits(mut self, digits: usize) -> Self {
        self.digits = digits.clamp(0, DIGITS_MAX);
        self
    }

    /// Lit RPN_ALPHABET / RPN_DIGITS ; une valeur illisible est signalée puis ignorée.
    pub fn depuis_env() -> Self {
        let mut o = Options::default();

        if let Ok(v) = std::env::var("RPN_ALPHABET") {
            match v.parse::<Alphabet>() {
                Ok(a) => o.alphabet = a,
                Err(e) => tracing::warn!("RPN_ALPHABET ignoré : {e}"),
            }
        }

        if let Ok(v) = std::env::var("RPN_DIGITS") {
            match v.trim().parse::<usize>() {
                Ok(d) => o = o.avec_digits(d),
                Err(e) => tracing::warn!("RPN_DIGITS ignoré ({v:?}) : {e}"),
            }
        }

        o
    }
}
