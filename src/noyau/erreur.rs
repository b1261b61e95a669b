// src/noyau/erreur.rs
//
// Taxonomie des échecs. Toute erreur fait échouer l’expression entière
// (pas de résultat partiel).

use thiserror::Error;

use super::registre::Operateur;

/// Un opérateur ne peut pas produire de réel pour ses opérandes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurDomaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine carrée d’un nombre négatif")]
    RacineNegative,

    #[error("résultat non réel ou hors bornes")]
    NonReel,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("expression vide")]
    ExpressionVide,

    /// `position` : index dans la bande au moment du balayage.
    #[error("jeton invalide « {jeton} » (position {position})")]
    JetonInvalide { jeton: String, position: usize },

    #[error(
        "opérandes insuffisantes pour « {operateur} » (position {position}) : \
         {requis} requis, {disponibles} disponible(s)"
    )]
    OperandesInsuffisantes {
        operateur: Operateur,
        position: usize,
        requis: usize,
        disponibles: usize,
    },

    #[error(transparent)]
    Domaine(#[from] ErreurDomaine),
}
