use eframe::egui;

use crate::core::{AppConfig, PlayerSession};
use crate::gui::icons::{self, PlayerIcons};
use crate::gui::theme;
use crate::metadata::{MetadataFields, MetadataLoader};
use crate::player::{
    window_id, ColorControl, EngineError, EngineFactory, EngineOptions, MpvEngineFactory,
    ProgressPoller, SessionSwitcher, SurfaceBinding, Transport, POLL_INTERVAL, SEEK_STEP_MS,
};

pub struct PlayerApp {
    config: AppConfig,
    transport: Transport,
    factory: MpvEngineFactory,
    switcher: SessionSwitcher,
    poller: ProgressPoller,
    metadata_loader: MetadataLoader,
    metadata_text: String,
    icons: PlayerIcons,
    /// Progress indicator value, 0..100. Written by the poller, dragged by
    /// the user.
    progress: f32,
    brightness: f32,
    contrast: f32,
    saturation: f32,
    return_from_mini: bool,
}

impl PlayerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        theme::apply(&cc.egui_ctx, config.orange_theme);

        let factory = MpvEngineFactory;
        let options = EngineOptions::default();
        let engine = factory.create(&options)?;

        let primary = match window_id(cc) {
            Ok(wid) => SurfaceBinding::Embedded(wid),
            Err(err) => {
                log::warn!("No embeddable window id ({err}); the engine will own its own window");
                SurfaceBinding::fallback_window()
            }
        };

        let session = PlayerSession::new(config.volume, config.orange_theme);
        let mut transport = Transport::new(engine, options, primary.clone(), session);
        transport.set_volume(config.volume)?;

        let icons = PlayerIcons::load(&cc.egui_ctx, &icons::default_assets_dir());

        Ok(Self {
            config,
            transport,
            factory,
            switcher: SessionSwitcher::new(primary),
            poller: ProgressPoller::new(),
            metadata_loader: MetadataLoader::new(),
            metadata_text: "Metadatos: No cargados".to_string(),
            icons,
            progress: 0.0,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            return_from_mini: false,
        })
    }

    fn open_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Archivos multimedia", &["mp3", "mp4", "avi", "mkv"])
            .add_filter("Todos los archivos", &["*"])
            .pick_file();

        let Some(path) = picked else { return };

        self.metadata_loader.request(path.clone());
        self.metadata_text = "Metadatos: analizando...".to_string();
        match self.transport.load(path) {
            Ok(()) => self.poller.arm(),
            Err(err) => log::error!("load failed: {err}"),
        }
        self.progress = 0.0;
    }

    fn toggle_fullscreen(&mut self, ctx: &egui::Context) {
        let fullscreen = !self.transport.session.is_fullscreen;
        self.transport.session.is_fullscreen = fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        if !fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(900.0, 600.0)));
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.transport.session.is_orange = !self.transport.session.is_orange;
        theme::apply(ctx, self.transport.session.is_orange);
    }

    fn controls_row(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if icon_button(ui, &self.icons.backward, "⏪").clicked() {
                let result = self.transport.seek_relative(-SEEK_STEP_MS);
                report("seek backward", result);
            }
            if icon_button(ui, &self.icons.play, "⏵").clicked() {
                let result = self.transport.play();
                report("play", result);
                self.poller.arm();
            }
            if icon_button(ui, &self.icons.forward, "⏩").clicked() {
                let result = self.transport.seek_relative(SEEK_STEP_MS);
                report("seek forward", result);
            }
            if icon_button(ui, &self.icons.pause, "⏸").clicked() {
                let result = self.transport.pause();
                report("pause", result);
            }
            if icon_button(ui, &self.icons.stop, "⏹").clicked() {
                let result = self.transport.stop();
                report("stop", result);
                self.progress = 0.0;
            }
            if icon_button(ui, &self.icons.open, "Abrir").clicked() {
                self.open_file();
            }
            if icon_button(ui, &self.icons.mini, "Mini").clicked() {
                let result = self.switcher.show_mini(&mut self.transport, &self.factory);
                report("mini player", result);
                if self.switcher.is_mini() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                }
            }
            if icon_button(ui, &self.icons.fullscreen, "Pantalla").clicked() {
                self.toggle_fullscreen(ctx);
            }

            let is_orange = self.transport.session.is_orange;
            let theme_icon = if is_orange { &self.icons.theme_blue } else { &self.icons.theme_orange };
            let theme_label = if is_orange { "Azul" } else { "Naranja" };
            if icon_button(ui, theme_icon, theme_label).clicked() {
                self.toggle_theme(ctx);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let level = icons::volume_level(self.transport.session.current_volume);
                match self.icons.volume(level) {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(30.0, 30.0)));
                    }
                    None => {
                        ui.label(icons::volume_glyph(level));
                    }
                }

                let mut volume = self.transport.session.current_volume as f32;
                let response = ui.add(egui::Slider::new(&mut volume, 0.0..=100.0).show_value(false));
                if response.changed() {
                    let result = self.transport.set_volume(volume as i64);
                    report("set volume", result);
                }
            });
        });
    }

    fn effects_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Brillo:");
            let response = ui.add(egui::Slider::new(&mut self.brightness, 0.0..=2.0).show_value(false));
            if response.changed() {
                let result = self.transport.set_color(ColorControl::Brightness, f64::from(self.brightness));
                report("set brightness", result);
            }

            ui.label("Contraste:");
            let response = ui.add(egui::Slider::new(&mut self.contrast, 0.0..=2.0).show_value(false));
            if response.changed() {
                let result = self.transport.set_color(ColorControl::Contrast, f64::from(self.contrast));
                report("set contrast", result);
            }

            ui.label("Saturación:");
            let response = ui.add(egui::Slider::new(&mut self.saturation, 0.0..=2.0).show_value(false));
            if response.changed() {
                let result = self.transport.set_color(ColorControl::Saturation, f64::from(self.saturation));
                report("set saturation", result);
            }
        });
    }

    fn progress_row(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().slider_width = ui.available_width() - 16.0;
        let response = ui.add(egui::Slider::new(&mut self.progress, 0.0..=100.0).show_value(false));
        if response.changed() {
            let result = self.transport.seek_absolute(f64::from(self.progress));
            report("seek", result);
        }
        if let Some(pointer) = response.hover_pos() {
            if let Some(text) = self.hover_time(pointer.x, &response.rect) {
                response.on_hover_text_at_pointer(text);
            }
        }
    }

    /// Track time under the pointer, `M:SS`, for the progress tooltip.
    fn hover_time(&mut self, pointer_x: f32, rect: &egui::Rect) -> Option<String> {
        if self.transport.session.media.is_none() {
            return None;
        }
        let length = self.transport.length_ms().ok()?;
        if length <= 0 {
            return None;
        }
        let fraction = ((pointer_x - rect.left()) / rect.width()).clamp(0.0, 1.0);
        let position_secs = (f64::from(fraction) * length as f64 / 1000.0) as i64;
        Some(format!("{}:{:02}", position_secs / 60, position_secs % 60))
    }

    fn mini_player_viewport(&mut self, ctx: &egui::Context) {
        let viewport_id = egui::ViewportId::from_hash_of("mini_player");
        let builder = egui::ViewportBuilder::default()
            .with_title("Mini Player")
            .with_inner_size([300.0, 120.0])
            .with_always_on_top();

        ctx.show_viewport_immediate(viewport_id, builder, |ctx, _class| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let name = self
                    .transport
                    .session
                    .media
                    .as_ref()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned());
                if let Some(name) = name {
                    ui.label(name);
                }
                if ui.button("Volver").clicked() {
                    self.return_from_mini = true;
                }
            });
            if ctx.input(|i| i.viewport().close_requested()) {
                self.return_from_mini = true;
            }
        });

        if self.return_from_mini {
            self.return_from_mini = false;
            let result = self.switcher.hide_mini(&mut self.transport, &self.factory);
            report("mini player return", result);
            ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(false));
        }
    }

    fn on_close(&mut self, ctx: &egui::Context) {
        report("stop playback", self.transport.shutdown());

        self.config.volume = self.transport.session.current_volume;
        self.config.orange_theme = self.transport.session.is_orange;
        if !self.transport.session.is_fullscreen {
            let size = ctx.input(|i| i.screen_rect().size());
            self.config.window_width = size.x;
            self.config.window_height = size.y;
        }
        if let Err(err) = self.config.save() {
            log::warn!("Failed to save config: {err}");
        }
    }
}

impl eframe::App for PlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.metadata_loader.completed() {
            self.metadata_text = render_metadata(&result.fields);
        }

        self.poller.tick(&mut self.transport, &mut self.progress);
        if self.transport.session.is_playing {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        if self.switcher.is_mini() {
            self.mini_player_viewport(ctx);
        }

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.controls_row(ui, ctx);
        });

        // Fullscreen hides everything but the video region and the
        // transport row.
        if !self.transport.session.is_fullscreen {
            egui::TopBottomPanel::bottom("progress").show(ctx, |ui| {
                self.progress_row(ui);
            });
            egui::TopBottomPanel::bottom("effects").show(ctx, |ui| {
                self.effects_row(ui);
            });
            egui::TopBottomPanel::bottom("metadata").show(ctx, |ui| {
                ui.label(egui::RichText::new(&self.metadata_text).strong());
            });
        }

        // The engine renders into this region through the bound window id;
        // the shell only reserves the space and paints the backdrop.
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::SURFACE))
            .show(ctx, |ui| {
                ui.allocate_space(ui.available_size());
            });

        if ctx.input(|i| i.viewport().close_requested()) {
            self.on_close(ctx);
        }
    }
}

/// Event-wiring boundary for engine failures: the offending operation is
/// abandoned and the failure surfaces only in the log.
fn report(action: &str, result: Result<(), EngineError>) {
    if let Err(err) = result {
        log::error!("{action} failed: {err}");
    }
}

pub(crate) fn render_metadata(fields: &MetadataFields) -> String {
    let mut text = String::from("Metadatos:\n");
    for (label, value) in fields {
        text.push_str(label);
        text.push_str(": ");
        text.push_str(value);
        text.push('\n');
    }
    text
}

fn icon_button(ui: &mut egui::Ui, icon: &Option<egui::TextureHandle>, fallback: &str) -> egui::Response {
    match icon {
        Some(texture) => ui.add(egui::Button::image(
            egui::Image::new(texture).fit_to_exact_size(egui::vec2(30.0, 30.0)),
        )),
        None => ui.button(fallback),
    }
}
