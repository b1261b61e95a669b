// src/noyau/nombre.rs
//
// Scalaire du noyau : rationnel exact tant que possible, f64 sinon.
//
// Règles:
// - Exact ⊕ Exact reste exact pour + - * /
// - Puissance exacte seulement si l’exposant est entier, |e| <= PUISSANCE_EXACTE_MAX
//   et le résultat reste sous BITS_EXACTS_MAX
// - Bases 0, 1, -1 : puissance exacte pour tout exposant entier (0^0 = 1)
// - √ exacte seulement sur un carré parfait (numérateur ET dénominateur)
// - Tout f64 non fini => ErreurDomaine::NonReel (jamais d’infini/NaN qui circule)

use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurDomaine;
use super::format::format_rat_pretty;

/// Au-delà, la puissance passe en f64 (garde-fou mémoire).
pub const PUISSANCE_EXACTE_MAX: i64 = 4096;

/// Taille max (en bits) d’un résultat de puissance exacte.
const BITS_EXACTS_MAX: u64 = 1 << 20;

/// 2^53 : plus grand entier représenté exactement en f64.
const ENTIER_F64_MAX: f64 = 9_007_199_254_740_992.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Exact(BigRational),
    Reel(f64),
}

impl Nombre {
    pub fn entier(n: i64) -> Self {
        Nombre::Exact(BigRational::from_integer(BigInt::from(n)))
    }

    /// Mode “confiance” : valeur produite par le noyau lui-même.
    /// Un f64 entier (fini, < 2^53) redevient exact.
    pub fn depuis_f64(x: f64) -> Result<Self, ErreurDomaine> {
        if !x.is_finite() {
            return Err(ErreurDomaine::NonReel);
        }
        if x.fract() == 0.0 && x.abs() < ENTIER_F64_MAX {
            return Ok(Nombre::entier(x as i64));
        }
        Ok(Nombre::Reel(x))
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Nombre::Exact(r) => r.to_f64().unwrap_or(f64::NAN),
            Nombre::Reel(x) => *x,
        }
    }

    pub fn est_zero(&self) -> bool {
        match self {
            Nombre::Exact(r) => r.is_zero(),
            Nombre::Reel(x) => *x == 0.0,
        }
    }

    pub fn est_negatif(&self) -> bool {
        match self {
            Nombre::Exact(r) => r.is_negative(),
            Nombre::Reel(x) => *x < 0.0,
        }
    }

    /// Ordre total pour MAX/MIN (les Reel sont toujours finis ici).
    pub fn comparer(&self, autre: &Nombre) -> Ordering {
        match (self, autre) {
            (Nombre::Exact(a), Nombre::Exact(b)) => a.cmp(b),
            _ => self
                .to_f64()
                .partial_cmp(&autre.to_f64())
                .unwrap_or(Ordering::Equal),
        }
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn plus(&self, autre: &Nombre) -> Result<Nombre, ErreurDomaine> {
        match (self, autre) {
            (Nombre::Exact(a), Nombre::Exact(b)) => Ok(Nombre::Exact(a + b)),
            _ => Nombre::depuis_f64(self.to_f64() + autre.to_f64()),
        }
    }

    pub fn moins(&self, autre: &Nombre) -> Result<Nombre, ErreurDomaine> {
        match (self, autre) {
            (Nombre::Exact(a), Nombre::Exact(b)) => Ok(Nombre::Exact(a - b)),
            _ => Nombre::depuis_f64(self.to_f64() - autre.to_f64()),
        }
    }

    pub fn fois(&self, autre: &Nombre) -> Result<Nombre, ErreurDomaine> {
        match (self, autre) {
            (Nombre::Exact(a), Nombre::Exact(b)) => Ok(Nombre::Exact(a * b)),
            _ => Nombre::depuis_f64(self.to_f64() * autre.to_f64()),
        }
    }

    pub fn divise(&self, autre: &Nombre) -> Result<Nombre, ErreurDomaine> {
        if autre.est_zero() {
            return Err(ErreurDomaine::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Exact(a), Nombre::Exact(b)) => Ok(Nombre::Exact(a / b)),
            _ => Nombre::depuis_f64(self.to_f64() / autre.to_f64()),
        }
    }

    /// self ** exposant (ordre gauche -> droite de la bande).
    pub fn puissance(&self, exposant: &Nombre) -> Result<Nombre, ErreurDomaine> {
        if let (Nombre::Exact(base), Some(n)) = (self, exposant_entier(exposant)) {
            // bases 0, 1, -1 : résultat borné quel que soit l’exposant
            if let Some(r) = puissance_triviale(base, &n) {
                return r;
            }
            if let Some(n) = n.to_i64() {
                let bits = base.numer().bits().max(base.denom().bits());
                if n.unsigned_abs() <= PUISSANCE_EXACTE_MAX as u64
                    && bits.saturating_mul(n.unsigned_abs()) <= BITS_EXACTS_MAX
                {
                    return Ok(Nombre::Exact(rational_pow_int(base.clone(), n)));
                }
            }
        }

        let (b, e) = (self.to_f64(), exposant.to_f64());
        if b == 0.0 && e < 0.0 {
            return Err(ErreurDomaine::DivisionParZero);
        }
        Nombre::depuis_f64(b.powf(e))
    }

    pub fn racine(&self) -> Result<Nombre, ErreurDomaine> {
        if self.est_negatif() {
            return Err(ErreurDomaine::RacineNegative);
        }
        if let Nombre::Exact(r) = self {
            let (n, d) = (r.numer(), r.denom());
            let (rn, rd) = (n.sqrt(), d.sqrt());
            if &rn * &rn == *n && &rd * &rd == *d {
                return Ok(Nombre::Exact(BigRational::new(rn, rd)));
            }
        }
        Nombre::depuis_f64(self.to_f64().sqrt())
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Exact(r) => f.write_str(&format_rat_pretty(r)),
            Nombre::Reel(x) => write!(f, "{x}"),
        }
    }
}

/// Exposant exact et entier, sinon None.
fn exposant_entier(e: &Nombre) -> Option<BigInt> {
    match e {
        Nombre::Exact(r) if r.is_integer() => Some(r.to_integer()),
        _ => None,
    }
}

/// 0^n, 1^n, (-1)^n décidés sur le signe et la parité de n (même hors i64).
fn puissance_triviale(
    base: &BigRational,
    n: &BigInt,
) -> Option<Result<Nombre, ErreurDomaine>> {
    if base.is_zero() {
        return Some(match n.sign() {
            Sign::Minus => Err(ErreurDomaine::DivisionParZero),
            Sign::NoSign => Ok(Nombre::entier(1)),
            Sign::Plus => Ok(Nombre::entier(0)),
        });
    }
    if base.is_one() {
        return Some(Ok(Nombre::entier(1)));
    }
    if *base == -BigRational::one() {
        let pair = (n % 2u32).is_zero();
        return Some(Ok(Nombre::entier(if pair { 1 } else { -1 })));
    }
    None
}

fn rational_pow_int(base: BigRational, exp: i64) -> BigRational {
    if exp == 0 {
        return BigRational::one();
    }
    if exp < 0 {
        let pos = rational_pow_int(base, -exp);
        return BigRational::one() / pos;
    }

    let mut e = exp as u64;
    let mut acc = BigRational::one();
    let mut b = base;

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Nombre {
        Nombre::Exact(BigRational::new(BigInt::from(n), BigInt::from(d)))
    }

    #[test]
    fn confiance_normalise_les_entiers() {
        assert_eq!(Nombre::depuis_f64(4.0), Ok(Nombre::entier(4)));
        assert_eq!(Nombre::depuis_f64(-3.0), Ok(Nombre::entier(-3)));
        assert_eq!(Nombre::depuis_f64(0.5), Ok(Nombre::Reel(0.5)));
        assert_eq!(Nombre::depuis_f64(f64::INFINITY), Err(ErreurDomaine::NonReel));
        assert_eq!(Nombre::depuis_f64(f64::NAN), Err(ErreurDomaine::NonReel));
    }

    #[test]
    fn division_exacte_et_par_zero() {
        assert_eq!(Nombre::entier(8).divise(&Nombre::entier(2)), Ok(Nombre::entier(4)));
        assert_eq!(Nombre::entier(1).divise(&Nombre::entier(3)), Ok(rat(1, 3)));
        assert_eq!(
            Nombre::entier(1).divise(&Nombre::entier(0)),
            Err(ErreurDomaine::DivisionParZero)
        );
        assert_eq!(
            Nombre::Reel(1.5).divise(&Nombre::Reel(0.0)),
            Err(ErreurDomaine::DivisionParZero)
        );
    }

    #[test]
    fn puissances() {
        assert_eq!(Nombre::entier(10).puissance(&Nombre::entier(3)), Ok(Nombre::entier(1000)));
        assert_eq!(Nombre::entier(2).puissance(&Nombre::entier(-2)), Ok(rat(1, 4)));
        assert_eq!(Nombre::entier(7).puissance(&Nombre::entier(0)), Ok(Nombre::entier(1)));
        assert_eq!(
            Nombre::entier(0).puissance(&Nombre::entier(-1)),
            Err(ErreurDomaine::DivisionParZero)
        );
        // exposant non entier => f64
        let r = Nombre::entier(2).puissance(&Nombre::Reel(0.5));
        assert!(matches!(r, Ok(Nombre::Reel(x)) if (x - 2f64.sqrt()).abs() < 1e-15));
        // base négative, exposant fractionnaire => pas de réel
        assert_eq!(
            Nombre::entier(-8).puissance(&Nombre::Reel(0.5)),
            Err(ErreurDomaine::NonReel)
        );
    }

    #[test]
    fn puissance_hors_borne_exacte() {
        // 10^5000 : f64 => infini => NonReel
        assert_eq!(
            Nombre::entier(10).puissance(&Nombre::entier(5000)),
            Err(ErreurDomaine::NonReel)
        );
        // 1^5000 reste 1 (via f64, normalisé)
        assert_eq!(Nombre::entier(1).puissance(&Nombre::entier(5000)), Ok(Nombre::entier(1)));
    }

    #[test]
    fn exposant_i64_min() {
        let n = Nombre::entier(i64::MIN);
        // 2^(-2^63) : sous-dépassement f64, normalisé en 0 exact
        assert_eq!(Nombre::entier(2).puissance(&n), Ok(Nombre::entier(0)));
        assert_eq!(Nombre::entier(0).puissance(&n), Err(ErreurDomaine::DivisionParZero));
    }

    #[test]
    fn exposant_hors_i64_garde_la_parite() {
        let grand = |s: &str| {
            let n: BigInt = s.parse().unwrap_or_else(|e| panic!("{e}"));
            Nombre::Exact(BigRational::from_integer(n))
        };
        let impair = grand("99999999999999999999");
        let pair = grand("100000000000000000000");
        assert_eq!(Nombre::entier(-1).puissance(&impair), Ok(Nombre::entier(-1)));
        assert_eq!(Nombre::entier(-1).puissance(&pair), Ok(Nombre::entier(1)));
        assert_eq!(Nombre::entier(1).puissance(&impair), Ok(Nombre::entier(1)));
        assert_eq!(Nombre::entier(0).puissance(&pair), Ok(Nombre::entier(0)));
        assert_eq!(
            Nombre::entier(-1).puissance(&grand("-99999999999999999999")),
            Ok(Nombre::entier(-1))
        );
        assert_eq!(
            Nombre::entier(0).puissance(&grand("-100000000000000000000")),
            Err(ErreurDomaine::DivisionParZero)
        );
    }

    #[test]
    fn racines() {
        assert_eq!(Nombre::entier(4).racine(), Ok(Nombre::entier(2)));
        assert_eq!(rat(9, 16).racine(), Ok(rat(3, 4)));
        assert_eq!(Nombre::entier(-1).racine(), Err(ErreurDomaine::RacineNegative));
        let r = Nombre::entier(2).racine();
        assert!(matches!(r, Ok(Nombre::Reel(x)) if (x - 1.414_213_56).abs() < 1e-8));
    }

    #[test]
    fn comparaison_mixte() {
        assert_eq!(Nombre::entier(3).comparer(&Nombre::Reel(2.5)), Ordering::Greater);
        assert_eq!(rat(1, 3).comparer(&rat(1, 2)), Ordering::Less);
    }

    #[test]
    fn affichage() {
        assert_eq!(Nombre::entier(1729).to_string(), "1729");
        assert_eq!(rat(-5, 6).to_string(), "-5/6");
        assert_eq!(Nombre::Reel(0.25).to_string(), "0.25");
    }
}
