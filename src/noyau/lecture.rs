// src/noyau/lecture.rs
//
// ΣLocal : lecture décimale TRONQUÉE d’un Nombre (jamais arrondie).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::erreur::ErreurDomaine;
use super::nombre::Nombre;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits) (division entière : vers zéro)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Lecture ΣLocal : les Reel passent par leur valeur binaire exacte.
pub fn lecture_decimale(n: &Nombre, digits: usize) -> Result<String, ErreurDomaine> {
    let r = match n {
        Nombre::Exact(r) => r.clone(),
        Nombre::Reel(x) => BigRational::from_float(*x).ok_or(ErreurDomaine::NonReel)?,
    };
    Ok(scaled_to_decimal(rational_scaled(&r, digits), digits))
}
