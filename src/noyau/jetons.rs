// src/noyau/jetons.rs

use std::ops::{Add, Div, Mul, Sub};

use super::erreurs::ParseError;

/// Table de précédence : rang = indice dans la table (plus grand = plus “collant”).
///
/// NOTE: `-` et `+` n’ont PAS le même rang, et `/` passe sous `*`.
/// Ce n’est pas la convention scolaire, mais c’est le comportement défini :
/// "6-2+1" vaut 3, "8/4*2" vaut 1. Ne pas “corriger”.
pub const PRECEDENCE: [char; 4] = ['-', '+', '/', '*'];

/// Fonction binaire portée par un opérateur : f(gauche, droite).
pub type FnBinaire = fn(f64, f64) -> f64;

/// Opérateur binaire : symbole source + rang + fonction.
#[derive(Clone, Copy, Debug)]
pub struct Operateur {
    pub symbole: char,
    pub rang: usize,
    pub appliquer: FnBinaire,
}

impl Operateur {
    /// Construit l’opérateur associé à `+ - * /`, sinon None.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        let appliquer: FnBinaire = match c {
            '+' => <f64 as Add>::add,
            '-' => <f64 as Sub>::sub,
            '*' => <f64 as Mul>::mul,
            '/' => <f64 as Div>::div,
            _ => return None,
        };
        let rang = PRECEDENCE.iter().position(|&p| p == c)?;
        Some(Self {
            symbole: c,
            rang,
            appliquer,
        })
    }
}

// Égalité structurelle : on ne compare jamais des pointeurs de fonction.
// Le symbole détermine la fonction.
impl PartialEq for Operateur {
    fn eq(&self, other: &Self) -> bool {
        self.symbole == other.symbole && self.rang == other.rang
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Blancs reconnus (jeu ASCII : espace, \t, \n, \r, \x0b, \x0c).
fn est_blanc(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Lecteur paresseux : une seule passe, jeton par jeton.
///
/// S’arrête définitivement après la première erreur.
#[derive(Clone, Debug)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    fini: bool,
}

impl Lexer {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
            fini: false,
        }
    }

    /// Position courante du curseur (en caractères).
    pub fn curseur(&self) -> usize {
        self.pos
    }

    fn consume_while(&mut self, test: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.pos < self.chars.len() && test(self.chars[self.pos]) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Nombre : suite maximale de chiffres et de points.
    /// Lecture permissive : "1.2.3" est confié tel quel au parseur f64 (qui refuse).
    fn lire_nombre(&mut self) -> Result<Tok, ParseError> {
        let start = self.pos;
        let texte = self.consume_while(|c| c.is_ascii_digit() || c == '.');

        match texte.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Tok::Num(v)),
            _ => Err(ParseError::InvalidNumber {
                text: texte,
                position: start,
            }),
        }
    }

    fn suivant(&mut self) -> Option<Result<Tok, ParseError>> {
        while let Some(&c) = self.chars.get(self.pos) {
            if est_blanc(c) {
                self.pos += 1;
                continue;
            }

            if c.is_ascii_digit() {
                return Some(self.lire_nombre());
            }

            if let Some(op) = Operateur::depuis_symbole(c) {
                self.pos += 1;
                return Some(Ok(Tok::Op(op)));
            }

            let tok = match c {
                '(' => Tok::LPar,
                ')' => Tok::RPar,
                _ => {
                    return Some(Err(ParseError::UnexpectedCharacter {
                        character: c,
                        position: self.pos,
                    }))
                }
            };
            self.pos += 1;
            return Some(Ok(tok));
        }
        None
    }
}

impl Iterator for Lexer {
    type Item = Result<Tok, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fini {
            return None;
        }

        let item = self.suivant();
        match &item {
            Some(Ok(tok)) => log::trace!("jeton @{}: {:?}", self.curseur(), tok),
            Some(Err(e)) => {
                log::trace!("lecture interrompue: {e}");
                self.fini = true;
            }
            None => self.fini = true,
        }
        item
    }
}

/// Tokenize une chaîne en jetons (version matérialisée du Lexer).
/// Supporte:
/// - nombres décimaux (chiffres et points, ex: 12, 3.25)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - blancs ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ParseError> {
    Lexer::new(s).collect()
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
