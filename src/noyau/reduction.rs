// src/noyau/reduction.rs
//
// Moteur de réduction : réécriture gauche -> droite de la bande.
//
// Boucle:
// 1) balayage : on saute les constantes, le premier terme non constant décide
//    - Unaire k=1, Binaire k=2, Variadique k=i (tout ce qui précède), Invalide => échec
//    - il faut i >= k, sinon expression mal formée
//    - aucun opérateur => cas nullaire sur toute la bande (la dernière constante reste)
// 2) épissure : bande[0..i-k] ++ [résultat] ++ bande[i+1..]
//
// Arrêt : bande de longueur 1 (succès) ou erreur au balayage / à l’évaluation.
// Chaque étape retire au moins un terme => terminaison en au plus len-1 étapes.

use tracing::{debug, trace};

use super::arite::{eval_binaire, eval_nullaire, eval_unaire, eval_variadique};
use super::erreur::ErreurCalcul;
use super::format::format_bande;
use super::jetons::Terme;
use super::nombre::Nombre;
use super::registre::{Arite, Operateur};

/// Prochaine réduction trouvée par le balayage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Que des constantes : la bande entière se réduit à sa dernière valeur.
    Nullaire { fin: usize },
    /// Opérateur en `position`, qui consomme les `operandes` termes précédents.
    Operateur {
        operateur: Operateur,
        position: usize,
        operandes: usize,
    },
}

impl Selection {
    /// Plage remplacée par le résultat (fin exclusive).
    fn plage(self) -> std::ops::Range<usize> {
        match self {
            Selection::Nullaire { fin } => 0..fin,
            Selection::Operateur {
                position,
                operandes,
                ..
            } => (position - operandes)..(position + 1),
        }
    }
}

/// État courant de la réduction.
#[derive(Clone, Debug, PartialEq)]
pub struct Bande {
    termes: Vec<Terme>,
}

impl Bande {
    pub fn new(termes: Vec<Terme>) -> Self {
        Self { termes }
    }

    pub fn termes(&self) -> &[Terme] {
        &self.termes
    }

    pub fn len(&self) -> usize {
        self.termes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.termes.is_empty()
    }

    /// Balayage gauche -> droite.
    pub fn prochain_operateur(&self) -> Result<Selection, ErreurCalcul> {
        for (i, terme) in self.termes.iter().enumerate() {
            let operateur = match terme {
                Terme::Constante(_) => continue,
                Terme::Invalide(brut) => {
                    return Err(ErreurCalcul::JetonInvalide {
                        jeton: brut.clone(),
                        position: i,
                    })
                }
                Terme::Operateur(op) => *op,
            };

            // variadique : au moins un opérande, sinon rien à réduire
            let (requis, operandes) = match operateur.arite() {
                Arite::Unaire => (1, 1),
                Arite::Binaire => (2, 2),
                Arite::Variadique => (1, i),
            };

            trace!(position = i, %operateur, requis, disponibles = i, "opérateur trouvé");

            if i < requis {
                return Err(ErreurCalcul::OperandesInsuffisantes {
                    operateur,
                    position: i,
                    requis,
                    disponibles: i,
                });
            }

            return Ok(Selection::Operateur {
                operateur,
                position: i,
                operandes,
            });
        }

        if self.termes.is_empty() {
            return Err(ErreurCalcul::ExpressionVide);
        }
        Ok(Selection::Nullaire {
            fin: self.termes.len(),
        })
    }

    fn evaluer(&self, sel: Selection) -> Result<Nombre, ErreurCalcul> {
        match sel {
            Selection::Nullaire { fin } => eval_nullaire(&self.termes, fin),
            Selection::Operateur {
                operateur,
                position,
                ..
            } => match operateur.arite() {
                Arite::Unaire => eval_unaire(operateur, &self.termes, position),
                Arite::Binaire => eval_binaire(operateur, &self.termes, position),
                Arite::Variadique => eval_variadique(operateur, &self.termes, position),
            },
        }
    }

    /// Une étape complète : balayage, évaluation, épissure.
    pub fn etape(&mut self) -> Result<Selection, ErreurCalcul> {
        let sel = self.prochain_operateur()?;
        let resultat = self.evaluer(sel)?;

        // préfixe et suffixe restent en place, seule la plage change
        self.termes
            .splice(sel.plage(), std::iter::once(Terme::confiance(resultat)));

        Ok(sel)
    }

    /// Réduit jusqu’à une seule valeur.
    /// `demarche` reçoit la bande (texte) après chaque étape.
    pub fn reduire(mut self, mut demarche: Option<&mut Vec<String>>) -> Result<Nombre, ErreurCalcul> {
        let mut n_etape = 0usize;

        loop {
            if let [Terme::Constante(n)] = self.termes.as_slice() {
                debug!(etapes = n_etape, resultat = %n, "bande réduite");
                return Ok(n.clone());
            }

            let sel = self.etape().inspect_err(|e| {
                debug!(etape = n_etape, erreur = %e, "échec de la réduction");
            })?;
            n_etape += 1;

            let texte = format_bande(&self.termes);
            debug!(etape = n_etape, ?sel, bande = %texte, "réduction");
            if let Some(d) = demarche.as_deref_mut() {
                d.push(texte);
            }
        }
    }
}
