// src/noyau/registre.rs
//
// Registre des opérateurs (figé au démarrage, lecture seule ensuite).
//
// - Unaires     : SQRT (alias sqrt, √)
// - Binaires    : + - * / ** ^   (** et ^ = puissance)
// - Variadiques : MAX MIN PROJ   (consomment tout ce qui précède dans la bande)

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Classe d’arité d’un opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arite {
    Unaire,
    Binaire,
    /// Nombre d’opérandes = position de l’opérateur dans la bande courante.
    Variadique,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Racine,

    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,

    Max,
    Min,
    Proj,
}

impl Operateur {
    pub fn arite(self) -> Arite {
        use Operateur::*;
        match self {
            Racine => Arite::Unaire,
            Plus | Moins | Fois | Divise | Puissance => Arite::Binaire,
            Max | Min | Proj => Arite::Variadique,
        }
    }

    /// Symbole canonique (affichage démarche / erreurs).
    pub fn symbole(self) -> &'static str {
        use Operateur::*;
        match self {
            Racine => "SQRT",
            Plus => "+",
            Moins => "-",
            Fois => "*",
            Divise => "/",
            Puissance => "**",
            Max => "MAX",
            Min => "MIN",
            Proj => "PROJ",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Table symbole -> opérateur.
#[derive(Clone, Debug)]
pub struct Registre {
    symboles: HashMap<&'static str, Operateur>,
}

const TABLE_STANDARD: [(&str, Operateur); 12] = [
    ("SQRT", Operateur::Racine),
    ("sqrt", Operateur::Racine),
    ("√", Operateur::Racine),
    ("+", Operateur::Plus),
    ("-", Operateur::Moins),
    ("*", Operateur::Fois),
    ("/", Operateur::Divise),
    ("**", Operateur::Puissance),
    ("^", Operateur::Puissance),
    ("MAX", Operateur::Max),
    ("MIN", Operateur::Min),
    ("PROJ", Operateur::Proj),
];

static REGISTRE_GLOBAL: OnceLock<Registre> = OnceLock::new();

impl Registre {
    pub fn standard() -> Self {
        Self {
            symboles: TABLE_STANDARD.iter().copied().collect(),
        }
    }

    /// Registre partagé, construit au premier appel.
    pub fn global() -> &'static Registre {
        REGISTRE_GLOBAL.get_or_init(Registre::standard)
    }

    /// Comparaison par valeur (jamais par identité).
    pub fn chercher(&self, symbole: &str) -> Option<Operateur> {
        self.symboles.get(symbole).copied()
    }

    /// Symboles enregistrés pour une arité donnée (ordre stable, pour l’UI).
    pub fn symboles_par_arite(&self, arite: Arite) -> Vec<&'static str> {
        let mut v: Vec<&'static str> = self
            .symboles
            .iter()
            .filter(|(_, op)| op.arite() == arite)
            .map(|(s, _)| *s)
            .collect();
        v.sort_unstable();
        v
    }
}

impl Default for Registre {
    fn default() -> Self {
        Self::standard()
    }
}
