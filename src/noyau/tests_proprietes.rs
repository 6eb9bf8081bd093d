//! Tests de propriétés : précédence, associativité, parenthèses, arguments,
//! caractères inconnus, déterminisme de la lecture, insensibilité aux blancs.
//!
//! Notes :
//! - La table de rangs ["-", "+", "/", "*"] est volontairement non scolaire :
//!   les cas "6-2+1" et "8/4*2" verrouillent ce comportement.
//! - Les comparaisons de f64 portent sur des résultats exacts en binaire.

use super::erreurs::{CalcError, EvalError, ParseError};
use super::eval_expression;
use super::jetons::{format_tokens, tokenize, Lexer, Operateur, Tok};
use super::rpn::{evaluate, reorder};

fn calcul(expr: &str) -> Result<f64, CalcError> {
    let jetons = tokenize(expr)?;
    let rpn = reorder(&jetons)?;
    Ok(evaluate(rpn)?)
}

fn calcul_ok(expr: &str) -> f64 {
    calcul(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn op(c: char) -> Tok {
    Tok::Op(Operateur::depuis_symbole(c).expect("opérateur connu"))
}

/* ------------------------ Jetons ------------------------ */

#[test]
fn jetons_rangs_selon_table() {
    let rangs: Vec<usize> = "-+/*"
        .chars()
        .map(|c| Operateur::depuis_symbole(c).map(|o| o.rang))
        .collect::<Option<_>>()
        .expect("quatre opérateurs");
    assert_eq!(rangs, vec![0, 1, 2, 3]);
    assert!(Operateur::depuis_symbole('^').is_none());
}

#[test]
fn jetons_fonctions_ordre_des_operandes() {
    let moins = Operateur::depuis_symbole('-').unwrap();
    let div = Operateur::depuis_symbole('/').unwrap();
    assert_eq!((moins.appliquer)(8.0, 3.0), 5.0);
    assert_eq!((div.appliquer)(8.0, 2.0), 4.0);
}

#[test]
fn jetons_suite_simple() {
    let t = tokenize("(12.5+3)*2").unwrap();
    assert_eq!(
        t,
        vec![
            Tok::LPar,
            Tok::Num(12.5),
            op('+'),
            Tok::Num(3.0),
            Tok::RPar,
            op('*'),
            Tok::Num(2.0),
        ]
    );
    assert_eq!(format_tokens(&t), "( 12.5 + 3 ) * 2");
}

#[test]
fn jetons_caractere_inconnu() {
    assert_eq!(
        tokenize("2+x"),
        Err(ParseError::UnexpectedCharacter {
            character: 'x',
            position: 2
        })
    );
    // position en caractères (pas en octets)
    assert_eq!(
        tokenize("1 + π"),
        Err(ParseError::UnexpectedCharacter {
            character: 'π',
            position: 4
        })
    );
    // un point seul n’ouvre pas un nombre
    assert!(matches!(
        tokenize(".5"),
        Err(ParseError::UnexpectedCharacter { character: '.', position: 0 })
    ));
}

#[test]
fn jetons_nombre_malforme() {
    assert_eq!(
        tokenize("1+1.2.3"),
        Err(ParseError::InvalidNumber {
            text: "1.2.3".into(),
            position: 2
        })
    );
    // trop grand pour un f64 fini
    let enorme = "9".repeat(400);
    assert!(matches!(
        tokenize(&enorme),
        Err(ParseError::InvalidNumber { position: 0, .. })
    ));
    // "3." reste accepté par le parseur f64
    assert_eq!(tokenize("3."), Ok(vec![Tok::Num(3.0)]));
}

#[test]
fn jetons_lexer_paresseux_s_arrete_sur_erreur() {
    let mut lx = Lexer::new("1 ? 2");
    assert_eq!(lx.next(), Some(Ok(Tok::Num(1.0))));
    assert_eq!(lx.curseur(), 1);
    assert!(matches!(lx.next(), Some(Err(_))));
    assert_eq!(lx.next(), None);
}

#[test]
fn jetons_curseur_avance_pendant_l_iteration() {
    // le Lexer reste un Iterator : le curseur ne doit pas se confondre
    // avec Iterator::position
    let mut lx = Lexer::new("12 + (3)");
    let mut curseurs = Vec::new();
    while let Some(Ok(_)) = lx.next() {
        curseurs.push(lx.curseur());
    }
    assert_eq!(curseurs, vec![2, 4, 6, 7, 8]);

    let idx = Lexer::new("1 + 2").position(|t| matches!(t, Ok(Tok::Op(_))));
    assert_eq!(idx, Some(1));
}

#[test]
fn jetons_idempotents() {
    let e = " (1.5 + 2) * 3 / 4 - 0.25 ";
    assert_eq!(tokenize(e), tokenize(e));
}

#[test]
fn jetons_insensibles_aux_blancs() {
    assert_eq!(tokenize("2 + 3"), tokenize("2+3"));
    assert_eq!(tokenize("\t2\n+\r3\x0b\x0c"), tokenize("2+3"));
    assert_eq!(calcul_ok("2 + 3"), calcul_ok("2+3"));
}

/* ------------------------ Triage (shunting-yard) ------------------------ */

#[test]
fn triage_ordre_rpn() {
    let rpn = reorder(&tokenize("2+3*4").unwrap()).unwrap();
    assert_eq!(format_tokens(&rpn), "2 3 4 * +");

    let rpn = reorder(&tokenize("(2+3)*4").unwrap()).unwrap();
    assert_eq!(format_tokens(&rpn), "2 3 + 4 *");

    let rpn = reorder(&tokenize("8-3-2").unwrap()).unwrap();
    assert_eq!(format_tokens(&rpn), "8 3 - 2 -");
}

#[test]
fn triage_parentheses_mal_appariees() {
    for e in ["(1+2", "1+2)", ")(", "((1)", "(1))"] {
        let t = tokenize(e).unwrap();
        assert_eq!(
            reorder(&t),
            Err(EvalError::MismatchedParentheses),
            "expr={e:?}"
        );
    }
}

#[test]
fn triage_ne_calcule_rien() {
    // "+" seul : le triage réussit, c’est l’évaluation qui échoue
    let rpn = reorder(&tokenize("+").unwrap()).unwrap();
    assert_eq!(rpn, vec![op('+')]);
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn eval_precedence() {
    assert_eq!(calcul_ok("2+3*4"), 14.0);
    assert_eq!(calcul_ok("(2+3)*4"), 20.0);
}

#[test]
fn eval_associativite_gauche() {
    assert_eq!(calcul_ok("8-3-2"), 3.0);
    assert_eq!(calcul_ok("8/4/2"), 1.0);
}

#[test]
fn eval_table_de_rangs_non_scolaire() {
    // '+' au-dessus de '-' : 6-(2+1)
    assert_eq!(calcul_ok("6-2+1"), 3.0);
    // '*' au-dessus de '/' : 8/(4*2)
    assert_eq!(calcul_ok("8/4*2"), 1.0);
    // dans l’autre sens, rien ne change
    assert_eq!(calcul_ok("2*3/4"), 1.5);
}

#[test]
fn eval_arguments_insuffisants() {
    for e in ["+", "+5", "5+", "2 3", "()"] {
        assert_eq!(
            calcul(e),
            Err(CalcError::Eval(EvalError::WrongArgumentCount)),
            "expr={e:?}"
        );
    }
    assert_eq!(evaluate(Vec::new()), Err(EvalError::WrongArgumentCount));
}

#[test]
fn eval_non_fini() {
    assert_eq!(
        calcul("1/0"),
        Err(CalcError::Eval(EvalError::NonFinite { operator: '/' }))
    );
    assert_eq!(
        calcul("0/0"),
        Err(CalcError::Eval(EvalError::NonFinite { operator: '/' }))
    );
}

#[test]
fn eval_parenthese_residuelle() {
    let rpn = vec![Tok::Num(1.0), Tok::LPar];
    assert_eq!(evaluate(rpn), Err(EvalError::UnexpectedParenthesis));
}

#[test]
fn eval_decimaux() {
    assert_eq!(calcul_ok("0.5 * (3 + 1)"), 2.0);
    assert_eq!(calcul_ok("((((7))))"), 7.0);
}

/* ------------------------ Pipeline ------------------------ */

#[test]
fn pipeline_resultat_et_demarche() {
    let ev = eval_expression("  2 + 3 * 4 ").unwrap();
    assert_eq!(ev.valeur, 14.0);
    assert_eq!(ev.lecture, "14");
    assert_eq!(ev.demarche.jetons, "2 + 3 * 4");
    assert_eq!(ev.demarche.rpn, "2 3 4 * +");
}

#[test]
fn pipeline_erreurs_typees() {
    let e = eval_expression("2+x").unwrap_err();
    assert_eq!(e.to_string(), "parse error: unexpected character at position 2: x");
    let e = eval_expression("(1+2").unwrap_err();
    assert_eq!(e.to_string(), "evaluation error: mismatched parentheses");
    let e = eval_expression("+5").unwrap_err();
    assert_eq!(e.to_string(), "evaluation error: wrong number of arguments");
}

#[test]
fn pipeline_entree_vide_manque_d_arguments() {
    for e in ["", "   ", "\t\n"] {
        assert_eq!(
            eval_expression(e),
            Err(CalcError::Eval(EvalError::WrongArgumentCount)),
            "expr={e:?}"
        );
    }
    let e = eval_expression("").unwrap_err();
    assert_eq!(e.to_string(), "evaluation error: wrong number of arguments");
}

#[test]
fn pipeline_sans_etat_entre_appels() {
    assert!(eval_expression("(1+").is_err());
    assert_eq!(eval_expression("1+1").unwrap().valeur, 2.0);
}
