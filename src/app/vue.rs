// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Enter évalue quand le champ a le focus
// - Pavé piloté par une table (PAVE) : une rangée = une ligne de Grid
// - Toute modification de l’entrée passe par etat.rs (inserer, backspace, C/CLR/AC)
//
// Note : PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;

#[derive(Clone, Copy, Debug)]
enum Touche {
    Symbole(char),
    Del,
    Egal,
    Vide,
}

/// Pavé 4 colonnes : chiffres à gauche, opérateurs et parenthèses à droite.
const PAVE: [[Touche; 4]; 5] = {
    use Touche::*;
    [
        [Symbole('('), Symbole(')'), Del, Symbole('/')],
        [Symbole('7'), Symbole('8'), Symbole('9'), Symbole('*')],
        [Symbole('4'), Symbole('5'), Symbole('6'), Symbole('-')],
        [Symbole('1'), Symbole('2'), Symbole('3'), Symbole('+')],
        [Symbole('0'), Symbole('.'), Vide, Egal],
    ]
};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Triage");
                self.ui_entree(ui);
                ui.separator();
                self.ui_pave(ui);
                ui.separator();
                self.ui_sorties(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 8-3-2, 1.5/0.25")
                .id_source("entree_edit")
                .code_editor(),
        );

        if std::mem::take(&mut self.focus_entree) {
            resp.request_focus();
        }
        if resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.evaluer();
        }

        // C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            if ui.button("C").on_hover_text("Efface l’entrée").clicked() {
                self.clear_entree();
            }
            if ui.button("CLR").on_hover_text("Efface résultat et démarche").clicked() {
                self.clear_resultats();
            }
            if ui.button("AC").on_hover_text("Remise à zéro totale").clicked() {
                self.reset_total();
            }
        });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_triage")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        let label = match touche {
                            Touche::Symbole(c) => c.to_string(),
                            Touche::Del => "DEL".to_string(),
                            Touche::Egal => "=".to_string(),
                            Touche::Vide => {
                                ui.label("");
                                continue;
                            }
                        };
                        if ui.add_sized([52.0, 32.0], egui::Button::new(label)).clicked() {
                            match touche {
                                Touche::Symbole(c) => self.inserer(c),
                                Touche::Del => self.backspace_entree(),
                                Touche::Egal => self.evaluer(),
                                Touche::Vide => {}
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_sorties(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.monospace(&self.lecture);
        });

        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("demarche_triage")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for (titre, contenu) in [
                            ("Jetons", &self.demarche.jetons),
                            ("RPN", &self.demarche.rpn),
                            ("Note", &self.demarche.note),
                        ] {
                            ui.label(titre);
                            ui.monospace(contenu);
                            ui.end_row();
                        }
                    });
            });
    }
}
