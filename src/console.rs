// src/console.rs
//
// Boucle de lecture terminal (natif seulement).
// - une ligne = une expression (ligne vide comprise : manque d’arguments)
// - erreur affichée, puis on continue (aucun état conservé)
// - fin d’entrée (ctrl-d) => au revoir

use std::io::{self, BufRead, Write};

use crate::noyau::eval_expression;

const INVITE: &str = "> ";

/// Réponse à une ligne : lecture du résultat, ou message d’erreur.
pub fn repondre(ligne: &str) -> String {
    match eval_expression(ligne) {
        Ok(ev) => {
            log::debug!("{} -> {}", ev.valeur, ev.lecture);
            ev.lecture
        }
        Err(e) => e.to_string(),
    }
}

/// Lance la boucle sur des flux quelconques (stdin/stdout en vrai, tampons en test).
pub fn boucle<R: BufRead, W: Write>(entree: R, mut sortie: W) -> io::Result<()> {
    writeln!(sortie, "entrez une expression à évaluer")?;
    writeln!(sortie, "ctrl-d pour quitter")?;

    let mut lignes = entree.lines();
    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        let Some(ligne) = lignes.next() else {
            writeln!(sortie, "\nau revoir")?;
            return Ok(());
        };
        let ligne = ligne?;
        log::debug!("ligne lue: {ligne:?}");

        writeln!(sortie, "{}", repondre(&ligne))?;
    }
}

/// Boucle sur le terminal réel.
pub fn lancer() -> io::Result<()> {
    let stdin = io::stdin();
    boucle(stdin.lock(), io::stdout().lock())
}
