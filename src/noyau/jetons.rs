// src/noyau/jetons.rs
//
// Découpage + classification.
//
// Règles:
// - séparateur : UN espace (pas de normalisation ; "1  2" produit un jeton vide)
// - jeton présent dans le registre => Terme::Operateur
// - sinon, constante si chaque caractère est dans l’alphabet ET que le nombre se lit
// - sinon Terme::Invalide : la tokenisation continue, l’échec sera constaté
//   par la réduction au moment où le terme est atteint

use num_bigint::BigInt;
use num_rational::BigRational;

use super::nombre::Nombre;
use super::options::Alphabet;
use super::registre::{Operateur, Registre};

/// Unité de la bande.
#[derive(Clone, Debug, PartialEq)]
pub enum Terme {
    Constante(Nombre),
    Operateur(Operateur),
    /// Texte brut du jeton refusé.
    Invalide(String),
}

impl Terme {
    /// Mode “confiance” : résultat déjà calculé par le noyau, pas de re-validation.
    pub fn confiance(n: Nombre) -> Self {
        Terme::Constante(n)
    }

    pub fn constante(&self) -> Option<&Nombre> {
        match self {
            Terme::Constante(n) => Some(n),
            _ => None,
        }
    }
}

/// Classe un jeton.
pub fn classifier(jeton: &str, registre: &Registre, alphabet: Alphabet) -> Terme {
    if let Some(op) = registre.chercher(jeton) {
        return Terme::Operateur(op);
    }

    match lire_constante(jeton, alphabet) {
        Some(n) => Terme::Constante(n),
        None => Terme::Invalide(jeton.to_string()),
    }
}

/// Tokenize une expression RPN en termes classés.
/// Une chaîne vide donne une bande vide.
pub fn tokenize(s: &str, registre: &Registre, alphabet: Alphabet) -> Vec<Terme> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(' ')
        .map(|jeton| classifier(jeton, registre, alphabet))
        .collect()
}

/// Lecture d’une constante : None si un caractère sort de l’alphabet
/// ou si le texte ne forme pas un nombre.
fn lire_constante(jeton: &str, alphabet: Alphabet) -> Option<Nombre> {
    if jeton.is_empty() || !jeton.chars().all(|c| alphabet.accepte(c)) {
        return None;
    }

    if let Some(n) = lire_entier(jeton) {
        return Some(Nombre::Exact(BigRational::from_integer(n)));
    }

    match alphabet {
        Alphabet::Strict => None,
        // syntaxe f64 ("1e3", "25E-1") ; "inf"/"nan" refusés car non finis
        Alphabet::Etendu => {
            let x = jeton.parse::<f64>().ok()?;
            Nombre::depuis_f64(x).ok()
        }
    }
}

/// `[+-]?[0-9]+` en entier exact (taille arbitraire).
fn lire_entier(jeton: &str) -> Option<BigInt> {
    let (negatif, chiffres) = match jeton.as_bytes().first()? {
        b'-' => (true, &jeton[1..]),
        b'+' => (false, &jeton[1..]),
        _ => (false, jeton),
    };

    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(if negatif { -n } else { n })
}
