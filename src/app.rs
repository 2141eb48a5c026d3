use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use crossbeam_channel::Receiver;
use egui::ViewportCommand;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::data::filter::FilterState;
use crate::data::loader::spawn_loader;
use crate::data::{DataError, Dataset};
use crate::ui::plots::ScatterState;

/// The load is the only suspending operation: no view renders until the
/// loader thread reports in. A failed load parks the app on an error
/// screen; there are no retries.
enum LoadState {
    Loading(Receiver<Result<Dataset, DataError>>),
    Ready(Dataset),
    Failed(String),
}

pub struct App {
    cfg: AppConfig,
    load: LoadState,
    filters: FilterState,
    scatter: ScatterState,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cfg: AppConfig,
        data_path: PathBuf,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        cc.egui_ctx.set_pixels_per_point(cfg.ui.pixels_per_point);

        let rx = spawn_loader(data_path);
        Self {
            cfg,
            load: LoadState::Loading(rx),
            filters: FilterState::default(),
            scatter: ScatterState::default(),
            exiting: stop_flag,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            info!("SIGINT received: closing window");
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }

        if let LoadState::Loading(rx) = &self.load {
            match rx.try_recv() {
                Ok(Ok(dataset)) => self.load = LoadState::Ready(dataset),
                Ok(Err(err)) => {
                    error!(%err, "dataset load failed");
                    self.load = LoadState::Failed(err.to_string());
                }
                Err(_) => {}
            }
        }

        match &self.load {
            LoadState::Loading(_) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading dataset…");
                        });
                    });
                });
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            LoadState::Failed(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load dataset");
                    ui.label(message);
                });
            }
            LoadState::Ready(dataset) => {
                crate::ui::windows::main_window(
                    ctx,
                    &self.cfg,
                    dataset,
                    &mut self.filters,
                    &mut self.scatter,
                );
            }
        }
    }
}
