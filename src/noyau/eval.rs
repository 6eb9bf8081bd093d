//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN (shunting-yard) -> f64 -> lecture décimale
//!
//! Chaque étape remonte sa propre erreur, sans reprise partielle.
//! Aucun état conservé entre deux appels.
//! Une entrée vide (ou blanche) n’a pas de cas spécial : zéro jeton,
//! pile vide à la fin => `wrong number of arguments`.

use super::erreurs::CalcError;
use super::format::format_decimal;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluate, reorder};

/// Démarche affichée par l’UI : jetons lus, RPN obtenue, note sur le pipeline.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// Résultat complet d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    /// Lecture décimale normalisée (ex: "14", "2E+1", "0.5").
    pub lecture: String,
    pub demarche: Demarche,
}

/// API publique : évalue une expression et retourne valeur + lecture + démarche.
pub fn eval_expression(expr_str: &str) -> Result<Evaluation, CalcError> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = reorder(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    log::debug!("rpn: {rpn_txt}");

    // 3) Pile (consomme la RPN)
    let valeur = evaluate(rpn)?;
    let lecture = format_decimal(valeur);
    log::debug!("valeur: {valeur} -> {lecture}");

    let demarche = Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        note: "Pipeline: jetons → RPN (shunting-yard) → pile → lecture décimale (28 chiffres)."
            .into(),
    };

    Ok(Evaluation {
        valeur,
        lecture,
        demarche,
    })
}
