// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> nombre
// Objectif:
// - Trier une suite de Tok en RPN (postfix), parenthèses consommées
// - Puis évaluer la RPN avec une pile de f64
//
// Règles:
// - Associativité gauche : on dépile tant que rang(sommet) >= rang(op)
//   ("8-3-2" => "8 3 - 2 -")
// - Pas de moins unaire : "+5" ou "-5" échouent à l’évaluation (arguments)

use super::erreurs::EvalError;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(*), Op(+)]
///
/// Seule erreur possible : `MismatchedParentheses`.
pub fn reorder(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    let doit_pop = match top {
                        Tok::Op(t) => t.rang >= op.rang,
                        _ => false, // '(' bloque
                    };
                    if !doit_pop {
                        break;
                    }
                    out.push(top);
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        None => return Err(EvalError::MismatchedParentheses),
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                    }
                }
            }
        }
    }

    // vide la pile ops ; une '(' restante n’a jamais été fermée
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(EvalError::MismatchedParentheses);
        }
        out.push(top);
    }

    Ok(out)
}

/// Évalue une RPN (consommée depuis le début).
///
/// - Num : empile
/// - Op  : dépile b puis a, empile f(a, b)
/// - fin : exactement une valeur, sinon `WrongArgumentCount`
pub fn evaluate(rpn: Vec<Tok>) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Op(op) => {
                let b = st.pop().ok_or(EvalError::WrongArgumentCount)?;
                let a = st.pop().ok_or(EvalError::WrongArgumentCount)?;

                let r = (op.appliquer)(a, b);
                if !r.is_finite() {
                    return Err(EvalError::NonFinite {
                        operator: op.symbole,
                    });
                }
                log::trace!("{a} {} {b} = {r}", op.symbole);
                st.push(r);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::UnexpectedParenthesis),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::WrongArgumentCount),
    }
}
