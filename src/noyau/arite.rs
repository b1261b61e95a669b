// src/noyau/arite.rs
//
// Un évaluateur par classe d’arité.
// Chacun reçoit l’opérateur, la bande courante et l’index `i` de l’opérateur ;
// les opérandes sont lus par valeur dans les termes qui précèdent `i`.

use super::erreur::{ErreurCalcul, ErreurDomaine};
use super::jetons::Terme;
use super::nombre::Nombre;
use super::registre::Operateur;

/// Valeur du terme `j`, qui doit être une constante.
fn valeur(bande: &[Terme], j: usize, op: Operateur, i: usize) -> Result<&Nombre, ErreurCalcul> {
    bande
        .get(j)
        .and_then(Terme::constante)
        .ok_or(ErreurCalcul::OperandesInsuffisantes {
            operateur: op,
            position: i,
            requis: i.saturating_sub(j),
            disponibles: j.min(i),
        })
}

/// Cas sans opérateur : `fin` pointe juste après la série de constantes,
/// la plus à droite gagne ("2 2" => 2).
pub fn eval_nullaire(bande: &[Terme], fin: usize) -> Result<Nombre, ErreurCalcul> {
    fin.checked_sub(1)
        .and_then(|j| bande.get(j))
        .and_then(Terme::constante)
        .cloned()
        .ok_or(ErreurCalcul::ExpressionVide)
}

pub fn eval_unaire(op: Operateur, bande: &[Terme], i: usize) -> Result<Nombre, ErreurCalcul> {
    let j = i.checked_sub(1).ok_or(ErreurCalcul::OperandesInsuffisantes {
        operateur: op,
        position: i,
        requis: 1,
        disponibles: 0,
    })?;
    let x = valeur(bande, j, op, i)?;

    let r = match op {
        Operateur::Racine => x.racine()?,
        _ => return Err(ErreurDomaine::NonReel.into()),
    };
    Ok(r)
}

/// `gauche OP droite` : gauche = i-2, droite = i-1 (l’ordre compte pour - / **).
pub fn eval_binaire(op: Operateur, bande: &[Terme], i: usize) -> Result<Nombre, ErreurCalcul> {
    if i < 2 {
        return Err(ErreurCalcul::OperandesInsuffisantes {
            operateur: op,
            position: i,
            requis: 2,
            disponibles: i,
        });
    }
    let a = valeur(bande, i - 2, op, i)?;
    let b = valeur(bande, i - 1, op, i)?;

    let r = match op {
        Operateur::Plus => a.plus(b)?,
        Operateur::Moins => a.moins(b)?,
        Operateur::Fois => a.fois(b)?,
        Operateur::Divise => a.divise(b)?,
        Operateur::Puissance => a.puissance(b)?,
        _ => return Err(ErreurDomaine::NonReel.into()),
    };
    Ok(r)
}

/// Opérandes = TOUS les termes d’index 0..i.
/// - MAX / MIN : extrême de la série
/// - PROJ      : premier terme (le plus à gauche), le reste est jeté
pub fn eval_variadique(op: Operateur, bande: &[Terme], i: usize) -> Result<Nombre, ErreurCalcul> {
    let operandes = (0..i)
        .map(|j| valeur(bande, j, op, i))
        .collect::<Result<Vec<&Nombre>, _>>()?;

    let insuffisant = ErreurCalcul::OperandesInsuffisantes {
        operateur: op,
        position: i,
        requis: 1,
        disponibles: 0,
    };

    let r = match op {
        Operateur::Max => operandes
            .into_iter()
            .max_by(|a, b| a.comparer(b))
            .ok_or(insuffisant)?,
        Operateur::Min => operandes
            .into_iter()
            .min_by(|a, b| a.comparer(b))
            .ok_or(insuffisant)?,
        Operateur::Proj => operandes.first().copied().ok_or(insuffisant)?,
        _ => return Err(ErreurDomaine::NonReel.into()),
    };
    Ok(r.clone())
}
