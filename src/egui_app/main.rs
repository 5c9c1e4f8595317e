/**
 * Onboarding Desktop Client - Main Entry Point
 *
 * Loads the client configuration, installs tracing and runs the eframe app
 * that hosts the login flow.
 */
use eframe::egui;
use onboarding::egui_app::{theme::styles, views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load()?;
    tracing::info!(login_url = %config.login_url(), "starting onboarding client");
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Onboarding",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(OnboardingApp { state }))
        }),
    )?;
    Ok(())
}

struct OnboardingApp {
    state: AppState,
}

impl eframe::App for OnboardingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_auth_results();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.is_submitting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
