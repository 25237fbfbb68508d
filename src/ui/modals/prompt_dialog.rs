//! Textprompt för biblioteksnamn (nytt bibliotek / byt namn)

use egui::{Align2, RichText};

use crate::ui::state::{AppState, PromptAction};

/// Modal med ett textfält och OK/Avbryt
///
/// `show` returnerar `None` medan dialogen är öppen, `Some(Some(namn))`
/// när användaren bekräftat med ett icke-tomt namn och `Some(None)` vid
/// avbrott eller tomt namn.
pub struct PromptDialog {
    input: String,
    initialized: bool,
}

impl Default for PromptDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDialog {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            initialized: false,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) -> Option<Option<String>> {
        if !state.show_prompt_dialog {
            return None;
        }
        let action = state.prompt_action?;

        let input_id = egui::Id::new("prompt_dialog_input");

        // Förifyll med nuvarande namn vid namnbyte och ge fältet fokus
        if !self.initialized {
            self.input = match action {
                PromptAction::RenameLibrary => {
                    state.active_name().unwrap_or_default().to_string()
                }
                PromptAction::CreateLibrary => String::new(),
            };
            self.initialized = true;
            ctx.memory_mut(|mem| mem.request_focus(input_id));
        }

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(match action {
            PromptAction::CreateLibrary => "Nytt bibliotek",
            PromptAction::RenameLibrary => "Byt namn",
        })
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.label(RichText::new(action.title()).strong());
            ui.add_space(4.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .id(input_id)
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                confirmed = true;
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Avbryt").clicked() {
                    cancelled = true;
                }
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
            });
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            cancelled = true;
        }

        if confirmed {
            let name = self.input.trim().to_string();
            self.reset();
            // Tomt namn behandlas som avbrott
            if name.is_empty() {
                return Some(None);
            }
            return Some(Some(name));
        }
        if cancelled {
            self.reset();
            return Some(None);
        }
        None
    }

    fn reset(&mut self) {
        self.input.clear();
        self.initialized = false;
    }
}
