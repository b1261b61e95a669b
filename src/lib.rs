//! Calculatrice RPN : bibliothèque
//!
//! - noyau  : évaluation RPN (registre, jetons, bande, réduction)
//! - traces : initialisation tracing (RUST_LOG)

pub mod noyau;
pub mod traces;

pub use noyau::{compute, eval_expression, ErreurCalcul, Nombre};
