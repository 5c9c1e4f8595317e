use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        let Some(user) = state.session.current_user() else {
            ui.colored_label(colors::TEXT_SECONDARY, "Keine aktive Sitzung");
            ui.add_space(12.0);
            if ui.add(styles::link_button("Zur Anmeldung")).clicked() {
                state.show_login();
            }
            return;
        };

        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new(format!("Willkommen, {}", user.login)).size(28.0).strong(),
        );
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, format!("Benutzer-ID {}", user.id));
        if let Some(at) = state.session.logged_in_at() {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("Angemeldet seit {}", at.format("%d.%m.%Y %H:%M UTC")),
            );
        }
        ui.add_space(24.0);

        if ui.add(styles::primary_button("Abmelden")).clicked() {
            state.logout();
        }
    });
}
