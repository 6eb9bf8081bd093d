//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC/DEL) sans logique d’affichage.
//!
//! Contrats :
//! - L’évaluation passe entièrement par le noyau (`evaluer`).
//! - Seule exception : une entrée blanche affiche “Entrée vide” sans appeler le noyau.
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur n’efface pas le dernier résultat affiché.

use crate::noyau::{eval_expression, Demarche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub lecture: String, // lecture décimale du dernier résultat
    pub erreur: String,  // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.lecture.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les blancs qui le précèdent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(char::is_whitespace) {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(char::is_whitespace) {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// Touche du pavé : ajoute un symbole en gardant une entrée lisible.
    /// - chiffres et '.' : collés
    /// - opérateur : entouré d’espaces ("12 + ")
    /// - '(' : séparée d’un nombre ou d’une ')' qui précède
    /// - ')' : collée à ce qui précède
    pub fn inserer(&mut self, symbole: char) {
        match symbole {
            '+' | '-' | '*' | '/' => {
                self.entree.truncate(self.entree.trim_end().len());
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push(symbole);
                self.entree.push(' ');
            }
            '(' => {
                let precedent = self.entree.trim_end().chars().last();
                if matches!(precedent, Some(c) if c.is_ascii_digit() || c == ')') {
                    self.entree.push(' ');
                }
                self.entree.push('(');
            }
            ')' => {
                self.entree.truncate(self.entree.trim_end().len());
                self.entree.push(')');
            }
            _ => self.entree.push(symbole),
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `lecture` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// La démarche, elle, ne correspond plus à rien : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (lecture + démarche).
    pub fn set_resultats(&mut self, lecture: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.lecture = lecture.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose lecture/démarche (ou l’erreur).
    pub fn evaluer(&mut self) {
        if self.entree.trim().is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match eval_expression(&self.entree) {
            Ok(ev) => self.set_resultats(ev.lecture, ev.demarche),
            Err(e) => {
                log::debug!("erreur UI: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}
