use eframe::egui;

use crate::egui_app::login::SubmitState;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::validation::Field;

const FORM_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        let top_space = (ui.available_height() - 420.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        styles::card_frame().show(ui, |ui| {
            ui.set_width(FORM_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Anmelden").size(24.0).strong().color(colors::TEXT_LIGHT));
                ui.add_space(16.0);

                if let Some(message) = state.login.response_message() {
                    ui.label(egui::RichText::new(message).color(colors::SUCCESS));
                    ui.add_space(8.0);
                }
                if let Some(error) = state.login.error() {
                    ui.label(egui::RichText::new(error).color(colors::ERROR));
                    ui.add_space(8.0);
                }
            });

            ui.label(egui::RichText::new("Login").color(colors::TEXT_SECONDARY));
            let response = ui.add_sized(
                [FORM_WIDTH, 28.0],
                egui::TextEdit::singleline(state.login.login_mut()).text_color(colors::TEXT_LIGHT),
            );
            if response.changed() || response.lost_focus() {
                state.login.touch(Field::Login);
            }
            field_hints(ui, state, Field::Login);
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Passwort").color(colors::TEXT_SECONDARY));
            let response = ui.add_sized(
                [FORM_WIDTH, 28.0],
                egui::TextEdit::singleline(state.login.password_mut())
                    .password(true)
                    .text_color(colors::TEXT_LIGHT),
            );
            if response.changed() || response.lost_focus() {
                state.login.touch(Field::Password);
            }
            let submit_on_enter =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            field_hints(ui, state, Field::Password);
            ui.add_space(16.0);

            ui.vertical_centered(|ui| {
                let enabled = state.login.form().is_valid();
                let clicked = ui
                    .add_enabled(enabled, styles::primary_button("Anmelden"))
                    .clicked();
                if clicked || (enabled && submit_on_enter) {
                    state.handle_login();
                }

                if state.is_submitting() || state.login.state() == SubmitState::Submitting {
                    ui.add_space(8.0);
                    ui.spinner();
                }

                ui.add_space(12.0);
                if ui.add(styles::link_button("Konto erstellen")).clicked() {
                    state.login.register();
                }
                if ui.add(styles::link_button("Passwort vergessen?")).clicked() {
                    state.login.reset_password();
                }
            });
        });
    });
}

fn field_hints(ui: &mut egui::Ui, state: &AppState, field: Field) {
    for violation in state.login.form().visible_violations(field) {
        ui.label(egui::RichText::new(violation.message()).size(12.0).color(colors::ERROR));
    }
}
