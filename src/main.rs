mod app;
mod cli;
mod display;
mod media;
mod selection;
mod settings;
mod showcase;
mod state;
mod theme;
mod tour;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("wike_showcase v{} starting", env!("CARGO_PKG_VERSION"));

    let options = cli::LaunchOptions::parse(std::env::args().skip(1))?;
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Wike",
        native_options,
        Box::new(move |cc| Box::new(app::ShowcaseApp::new(cc, options))),
    )?;
    Ok(())
}
