//! Noyau : évaluation (pipeline réel)
//!
//! texte -> jetons -> termes classés (bande) -> réductions successives -> Nombre
//!
//! Aucun état partagé entre deux appels, hormis le registre (lecture seule) :
//! deux appels sur la même chaîne donnent toujours le même résultat.

use super::erreur::ErreurCalcul;
use super::format::format_bande;
use super::jetons::tokenize;
use super::lecture::lecture_decimale;
use super::nombre::Nombre;
use super::options::Options;
use super::reduction::Bande;
use super::registre::Registre;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    /// Bande après chaque réduction, dans l’ordre.
    pub etapes: Vec<String>,
    pub note: String,
}

/// Évaluateur configuré : registre + options.
#[derive(Clone, Copy, Debug)]
pub struct Evaluateur<'r> {
    registre: &'r Registre,
    options: Options,
}

impl Default for Evaluateur<'static> {
    fn default() -> Self {
        Self::new(Registre::global(), Options::default())
    }
}

impl<'r> Evaluateur<'r> {
    pub fn new(registre: &'r Registre, options: Options) -> Self {
        Self { registre, options }
    }

    pub fn evaluer(&self, expression: &str) -> Result<Nombre, ErreurCalcul> {
        self.bande(expression)?.reduire(None)
    }

    /// Comme `evaluer`, en gardant la trace des bandes successives.
    /// La démarche est rendue même en cas d’échec (jusqu’à l’étape fautive).
    pub fn evaluer_avec_demarche(
        &self,
        expression: &str,
    ) -> (Result<Nombre, ErreurCalcul>, DemarcheNoyau) {
        let mut d = DemarcheNoyau {
            note: format!(
                "Pipeline: jetons → bande → réductions gauche→droite → valeur (alphabet {}).",
                self.options.alphabet
            ),
            ..Default::default()
        };

        let bande = match self.bande(expression) {
            Ok(b) => b,
            Err(e) => return (Err(e), d),
        };
        d.jetons = format_bande(bande.termes());

        let r = bande.reduire(Some(&mut d.etapes));
        (r, d)
    }

    fn bande(&self, expression: &str) -> Result<Bande, ErreurCalcul> {
        let termes = tokenize(expression, self.registre, self.options.alphabet);
        if termes.is_empty() {
            return Err(ErreurCalcul::ExpressionVide);
        }
        Ok(Bande::new(termes))
    }
}

/// API principale : valeur d’une expression RPN (alphabet strict).
pub fn compute(expression: &str) -> Result<Nombre, ErreurCalcul> {
    Evaluateur::default().evaluer(expression)
}

/// API UI : évalue et retourne
/// - EXACT (rationnel n/d ou flottant)
/// - ΣLocal (lecture décimale tronquée à `digits`)
/// - Démarche (jetons + bandes successives)
pub fn eval_expression(
    expr_str: &str,
    digits: usize,
) -> Result<(String, String, DemarcheNoyau), ErreurCalcul> {
    let options = Options::default().avec_digits(digits);
    eval_avec_options(expr_str, options)
}

pub fn eval_avec_options(
    expr_str: &str,
    options: Options,
) -> Result<(String, String, DemarcheNoyau), ErreurCalcul> {
    let ev = Evaluateur::new(Registre::global(), options);
    let (r, d) = ev.evaluer_avec_demarche(expr_str);
    let n = r?;

    let lecture = lecture_decimale(&n, options.digits)?;
    Ok((n.to_string(), lecture, d))
}
