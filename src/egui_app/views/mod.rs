use eframe::egui;

use crate::egui_app::router::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod account_view;
pub mod login_view;
pub mod main_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Onboarding").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.session.is_logged_in() {
                        if ui.button("Abmelden").clicked() {
                            state.logout();
                        }
                        if let Some(user) = state.session.current_user() {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.login));
                        }
                    } else if state.is_submitting() {
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            format!("{} Anfrage(n) ausstehend", state.pending_logins()),
                        );
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_route() {
            Route::Login => login_view::render(ui, state),
            Route::Main => main_view::render(ui, state),
            Route::Register => account_view::render_register(ui, state),
            Route::ResetPassword => account_view::render_reset_password(ui, state),
        });
}
