//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée RPN, résultats, erreur,
//! digits, alphabet, démarche) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur ΣLocal (digits) : celles du noyau.

use calculatrice_rpn::noyau::options::{Alphabet, Options, DIGITS_DEFAUT, DIGITS_MAX};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    /// Une bande par ligne, dans l’ordre des réductions.
    pub etapes: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,       // affichage EXACT (n/d ou flottant)
    pub lecture: String,     // ΣLocal (décimal tronqué)
    pub erreur: String,      // message d’erreur (si l’évaluation échoue)
    pub lecture_dispo: bool, // false si échec / vide

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,         // précision ΣLocal
    pub alphabet_etendu: bool, // constantes avec lettres (1e3)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_options(Options::default())
    }
}

impl AppCalc {
    /// État initial à partir des options (env au lancement).
    pub fn depuis_options(options: Options) -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            digits: options.digits,
            alphabet_etendu: options.alphabet == Alphabet::Etendu,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /// Options courantes, passées au noyau.
    pub fn options(&self) -> Options {
        Options {
            alphabet: if self.alphabet_etendu {
                Alphabet::Etendu
            } else {
                Alphabet::Strict
            },
            digits: self.digits,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Placer une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// La démarche reçue reste affichée : elle montre jusqu’où la bande s’est réduite.
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Déposer un résultat complet (EXACT + lecture + démarche).
    pub fn set_resultats(&mut self, exact: impl Into<String>, lecture: String, demarche: Demarche) {
        self.erreur.clear();
        self.exact = exact.into();
        self.lecture = lecture;
        self.lecture_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits (évite abus / gel plus tard).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        self.focus_entree = true;
    }
}
