// src/noyau/erreurs.rs
//
// Erreurs du noyau.
// - ParseError : échec de la tokenisation (caractère inconnu, nombre illisible)
// - EvalError  : échec du triage (parenthèses) ou de l’évaluation (arguments)
// - CalcError  : surface unique pour le pipeline complet (console + UI)
//
// Les messages “mismatched parentheses” / “wrong number of arguments” font
// partie du contrat : la console et l’UI les affichent tels quels.

use thiserror::Error;

/// Échec de la lecture du texte en jetons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Caractère hors alphabet (position = indice en caractères, base 0).
    #[error("unexpected character at position {position}: {character}")]
    UnexpectedCharacter { character: char, position: usize },

    /// Suite de chiffres/points refusée par le parseur f64, ou non finie.
    #[error("invalid number at position {position}: {text}")]
    InvalidNumber { text: String, position: usize },
}

/// Échec du triage (shunting-yard) ou de l’évaluation RPN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("wrong number of arguments")]
    WrongArgumentCount,

    /// Division par zéro ou dépassement : le résultat n’est plus un nombre fini.
    #[error("non-finite result for operator '{operator}'")]
    NonFinite { operator: char },

    /// Une parenthèse a survécu au triage (défaut de l’étape précédente).
    #[error("unexpected parenthesis in RPN")]
    UnexpectedParenthesis,
}

/// Erreur du pipeline complet (texte -> nombre).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}
