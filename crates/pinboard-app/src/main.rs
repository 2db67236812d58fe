//! Main application entry point (native).

use pinboard_core::{HttpBackend, MemoryBackend, PinBackend};

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting Pinboard");

    let identity = match std::env::var("PINBOARD_USER") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            log::error!("PINBOARD_USER is not set");
            eprintln!("Pinboard requires PINBOARD_USER to be set to the acting user's identity.");
            std::process::exit(2);
        }
    };

    let backend: Box<dyn PinBackend> = match std::env::var("PINBOARD_API") {
        Ok(base) if !base.trim().is_empty() => match HttpBackend::new(base.trim()) {
            Ok(backend) => {
                log::info!("using HTTP collaborator at {base}");
                Box::new(backend)
            }
            Err(err) => {
                log::error!("invalid PINBOARD_API: {err}");
                eprintln!("Invalid PINBOARD_API: {err}");
                std::process::exit(2);
            }
        },
        _ => {
            log::info!("PINBOARD_API not set, pins persist in memory only");
            Box::new(MemoryBackend::new())
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Pinboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinboard",
        options,
        Box::new(move |cc| {
            let app = pinboard_app::PinboardApp::new(cc, backend, identity)?;
            Ok(Box::new(app))
        }),
    )
}
