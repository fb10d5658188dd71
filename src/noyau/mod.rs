//! Noyau postfixe (f64)
//!
//! Organisation interne :
//! - erreur.rs      : Invalide / DivisionParZero (+ raison du rejet)
//! - jetons.rs      : Tok, Op, classes de caractères
//! - validation.rs  : refus AVANT conversion
//! - rpn.rs         : shunting-yard + moins unaire + accumulation des nombres
//! - eval.rs        : pile postfixe + pipeline complet
//! - format.rs      : affichage court + lecture décimale

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_corpus;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, Demarche};
pub use validation::is_valid;
