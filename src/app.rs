use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use eframe::CreationContext;
use eframe::egui::{self, RichText, TextureHandle, TextureOptions};

use crate::cli::LaunchOptions;
use crate::display::DisplayTarget;
use crate::media::MediaLibrary;
use crate::selection::{FeatureChoice, SelectableOption, ThemeChoice};
use crate::settings::{self, AppSettings, MAX_TOUR_INTERVAL_SECS, MIN_TOUR_INTERVAL_SECS, ThemeMode};
use crate::showcase::Showcase;
use crate::state::AppState;
use crate::theme::apply_visuals;

/// Decoded screenshot, or the reason it could not be shown.
enum CachedImage {
    Ready(TextureHandle),
    Failed(String),
}

pub struct ShowcaseApp {
    state: AppState,
    settings: AppSettings,
    showcase: Showcase,
    media: MediaLibrary,
    textures: HashMap<String, CachedImage>,
    interval_edit_pending: bool,
    status: String,
}

impl ShowcaseApp {
    pub fn new(cc: &CreationContext<'_>, options: LaunchOptions) -> Self {
        let settings = settings::load();
        let state = AppState::from_settings(&settings);
        apply_visuals(&cc.egui_ctx, state.theme);

        let media = MediaLibrary::new(media_root(&options, &state));
        log::info!("media root: {}", media.root().display());

        let showcase = Showcase::new(Duration::from_secs(state.tour_interval_secs));

        let mut app = Self {
            state,
            settings,
            showcase,
            media,
            textures: HashMap::new(),
            interval_edit_pending: false,
            status: "Ready".to_string(),
        };
        app.report_missing_assets();
        if options.start_tour || app.state.tour_on_start {
            app.start_tour();
        }
        app
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        self.showcase.drain_tour_events();
        if self.showcase.is_touring() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        for target in DisplayTarget::ALL.into_iter().filter(|t| t.is_image()) {
            if let Some(asset) = self.showcase.page().image(target).map(str::to_string) {
                self.ensure_texture(ctx, &asset);
            }
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading(RichText::new("Wike").strong());
            ui.label("Wikipedia reader for the GNOME desktop");
            ui.horizontal(|ui| {
                let previous = self.state.theme;
                egui::ComboBox::from_id_source("window_theme")
                    .selected_text(self.state.theme.label())
                    .show_ui(ui, |ui| {
                        for mode in ThemeMode::ALL {
                            ui.selectable_value(&mut self.state.theme, mode, mode.label());
                        }
                    });
                if self.state.theme != previous {
                    apply_visuals(ctx, self.state.theme);
                    self.persist();
                }
                if ui.button("Choose media folder…").clicked() {
                    if let Some(path) = rfd::FileDialog::new().pick_folder() {
                        self.change_media_root(path);
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().id_source("showcase").show(ui, |ui| {
                self.theme_section(ui);
                ui.separator();
                self.feature_section(ui);
                ui.separator();
                self.tour_controls(ui);
            });
        });
    }

    fn theme_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Adaptive style");
        let mut clicked: Option<SelectableOption> = None;
        ui.horizontal(|ui| {
            for choice in ThemeChoice::ALL {
                if ui
                    .selectable_label(self.showcase.current_theme() == choice, choice.label())
                    .clicked()
                {
                    clicked = Some(choice.value());
                }
            }
        });
        if let Some(value) = clicked {
            self.showcase.select_theme(value);
        }
        self.show_image(ui, DisplayTarget::ImageTheme);
    }

    fn feature_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Features");
        let mut clicked: Option<SelectableOption> = None;
        ui.horizontal(|ui| {
            for choice in FeatureChoice::ALL {
                let label = choice.asset().title.unwrap_or_default();
                if ui
                    .selectable_label(self.showcase.current_feature() == choice, label)
                    .clicked()
                {
                    clicked = Some(choice.value());
                }
            }
        });
        if let Some(value) = clicked {
            self.showcase.select_feature(value);
        }

        self.show_image(ui, DisplayTarget::ImageFeatures);
        let page = self.showcase.page();
        if let Some(title) = page.text(DisplayTarget::TitleFeatures) {
            ui.label(RichText::new(title).heading());
        }
        if let Some(text) = page.text(DisplayTarget::TextFeatures) {
            ui.label(text);
        }
    }

    fn tour_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.showcase.is_touring() {
                if ui.button("Stop tour").clicked() {
                    self.stop_tour();
                }
                if ui.button("Next").clicked() {
                    self.showcase.next_tour_step();
                }
            } else if ui.button("Start tour").clicked() {
                self.start_tour();
            }
        });

        let slider = egui::Slider::new(
            &mut self.state.tour_interval_secs,
            MIN_TOUR_INTERVAL_SECS..=MAX_TOUR_INTERVAL_SECS,
        )
        .text("seconds per feature");
        let response = ui.add(slider);
        if response.changed() {
            self.interval_edit_pending = true;
        }
        if commit_when_settled(&mut self.interval_edit_pending, response.dragged()) {
            self.showcase
                .set_tour_interval(Duration::from_secs(self.state.tour_interval_secs));
            self.persist();
        }
        if ui
            .checkbox(&mut self.state.tour_on_start, "Start tour on launch")
            .changed()
        {
            self.persist();
        }
    }

    fn show_image(&self, ui: &mut egui::Ui, target: DisplayTarget) {
        let Some(asset) = self.showcase.page().image(target) else {
            return;
        };
        match self.textures.get(asset) {
            Some(CachedImage::Ready(texture)) => {
                let width = ui.available_width();
                ui.add(egui::Image::from_texture(texture).max_width(width));
            }
            Some(CachedImage::Failed(reason)) => {
                ui.label(RichText::new(format!("{asset}: {reason}")).weak());
            }
            None => {
                // Texture is loaded at the start of the next frame.
                ui.spinner();
                ui.ctx().request_repaint();
            }
        }
    }

    fn ensure_texture(&mut self, ctx: &egui::Context, asset: &str) {
        if self.textures.contains_key(asset) {
            return;
        }
        let entry = match self.media.load_image(asset) {
            Ok(image) => CachedImage::Ready(ctx.load_texture(asset, image, TextureOptions::LINEAR)),
            Err(err) => {
                log::warn!("cannot display {asset}: {err:#}");
                CachedImage::Failed(format!("{err:#}"))
            }
        };
        self.textures.insert(asset.to_string(), entry);
    }

    fn change_media_root(&mut self, path: PathBuf) {
        self.media = MediaLibrary::new(&path);
        self.textures.clear();
        self.state.media_dir = Some(path);
        self.report_missing_assets();
        self.persist();
    }

    fn report_missing_assets(&mut self) {
        match self.media.scan() {
            Ok(found) => log::debug!("{} images under {}", found.len(), self.media.root().display()),
            Err(err) => log::warn!("{err:#}"),
        }
        let missing = self.media.missing_assets();
        for asset in &missing {
            log::warn!("missing asset {}", self.media.resolve(asset).display());
        }
        self.status = if missing.is_empty() {
            format!("Media loaded from {}", self.media.root().display())
        } else {
            format!("{} screenshots missing under {}", missing.len(), self.media.root().display())
        };
    }

    fn start_tour(&mut self) {
        self.showcase.start_tour();
        self.status = "Tour running".to_string();
    }

    fn stop_tour(&mut self) {
        if self.showcase.stop_tour() {
            self.status = "Tour stopped".to_string();
        }
    }

    fn persist(&mut self) {
        let mut next = self.settings.clone();
        self.state.apply_to_settings(&mut next);
        if let Err(err) = settings::save(&next) {
            log::error!("failed to save settings: {err:#}");
            self.status = error_status(&err);
            return;
        }
        self.settings = next;
    }
}

/// Media root for this run: command line, then settings, then the working directory.
fn media_root(options: &LaunchOptions, state: &AppState) -> PathBuf {
    options
        .media_dir
        .clone()
        .or_else(|| state.media_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Status line text for an error, keeping its context chain.
fn error_status(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// True once an edit is pending and the pointer has let go of the control.
fn commit_when_settled(pending: &mut bool, dragging: bool) -> bool {
    if *pending && !dragging {
        *pending = false;
        return true;
    }
    false
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
