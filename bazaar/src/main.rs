use bazaar::app::App;
use bazaar::core::Config;
use bazaar::debug;
use bazaar::ui::{self, theme::Theme, widgets::notifications::NotificationManager};

struct BazaarApp {
    app: App,
    notifications: NotificationManager,
}

impl eframe::App for BazaarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications);

        // Task results arrive without input events; keep polling while idle.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    let _log_guard = debug::init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start Tokio runtime");
            eprintln!("Failed to start Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };
    // Tasks spawned from the UI thread run on this runtime.
    let _enter = runtime.enter();

    tracing::info!(
        listing_api = %config.listing_api_url,
        purchases_enabled = config.purchases_enabled(),
        "Starting Bargain Bazaar"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bargain Bazaar")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bargain Bazaar",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(BazaarApp {
                app: App::new(&config),
                notifications: NotificationManager::new(),
            }))
        }),
    )
}
