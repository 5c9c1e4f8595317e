//! Registration and password-reset screens.
//!
//! Both flows live on the server side; these screens only tell the user
//! where they are and lead back to the login form.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render_register(ui: &mut egui::Ui, state: &mut AppState) {
    render_placeholder(
        ui,
        state,
        "Konto erstellen",
        "Die Registrierung neuer Mitarbeiter wird von Ihrem Administrator freigeschaltet.",
    );
}

pub fn render_reset_password(ui: &mut egui::Ui, state: &mut AppState) {
    render_placeholder(
        ui,
        state,
        "Passwort zurücksetzen",
        "Wenden Sie sich an Ihren Administrator, um ein neues Passwort zu erhalten.",
    );
}

fn render_placeholder(ui: &mut egui::Ui, state: &mut AppState, title: &str, body: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        styles::card_frame().show(ui, |ui| {
            ui.set_width(320.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).size(24.0).strong().color(colors::TEXT_LIGHT));
                ui.add_space(12.0);
                ui.label(egui::RichText::new(body).color(colors::TEXT_SECONDARY));
                ui.add_space(16.0);
                if ui.add(styles::link_button("Zurück zur Anmeldung")).clicked() {
                    state.show_login();
                }
            });
        });
    });
}
