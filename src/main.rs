mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use crate::config::AppPaths;
use crate::logging::init_logging;

fn main() {
    let paths = match AppPaths::resolve() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("lease-desk: {err:#}");
            return;
        }
    };
    init_logging(&paths.log_path);
    log::info!("starting with data directory {}", paths.data_dir.display());

    let webview_data_dir = match paths.webview_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("lease-desk: {err:#}");
            return;
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Lease Desk"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
