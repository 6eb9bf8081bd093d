//! Noyau de la calculatrice (gare de triage)
//!
//! Organisation interne :
//! - erreurs.rs  : ParseError / EvalError / CalcError
//! - jetons.rs   : tokenisation (Lexer paresseux + tokenize)
//! - rpn.rs      : shunting-yard (reorder) + évaluation RPN (evaluate)
//! - format.rs   : lecture décimale exacte (28 chiffres, normalisée)
//! - eval.rs     : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;



// API publique minimale
pub use erreurs::CalcError;
pub use eval::{eval_expression, Demarche};
