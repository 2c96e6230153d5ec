use std::{
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
    time::{Duration, Instant},
};

use eframe::egui::{
    self, Align2, CornerRadius, FontId, Key, ViewportBuilder, ViewportCommand, WindowLevel,
};
use log::{info, warn};

use pip_player::{
    config::Config,
    overlay,
    pip::{
        remote_actions, ControlCode, ControlSignal, Coordinator, PipHost, PipParams, WindowRect,
        SEEK_STEP_MS,
    },
    player::{Playback, SimulatedPlayer},
};

/// Fallback miniature aspect when no ratio was declared.
const DEFAULT_PIP_ASPECT: f32 = 16.0 / 9.0;

/// Window-side half of the engine: records declared parameters and queues
/// one-shot entry commands for the shell to apply between frames.
#[derive(Default)]
struct WindowHost {
    in_pip: bool,
    declared: Option<PipParams>,
    pending_enter: Option<PipParams>,
}

impl PipHost for WindowHost {
    fn is_in_pip_mode(&self) -> bool {
        self.in_pip
    }

    fn enter_pip(&mut self, params: PipParams) {
        self.pending_enter = Some(params);
    }

    fn set_pip_params(&mut self, params: PipParams) {
        self.declared = Some(params);
    }
}

impl WindowHost {
    /// The host-driven side of auto-enter: on a user leave, enter from the
    /// declared parameters if the app opted in.
    fn auto_enter_params(&self) -> Option<PipParams> {
        self.declared
            .as_ref()
            .filter(|params| params.auto_enter == Some(true))
            .cloned()
    }
}

/// One mounted video screen: the player plus its coordination state.
struct Screen {
    player: SimulatedPlayer,
    coordinator: Coordinator,
    last_playing: bool,
}

impl Screen {
    fn mount(config: &Config, host: &WindowHost, resume_at_ms: u64) -> Self {
        let mut player =
            SimulatedPlayer::new(config.playback.duration_ms).with_position(resume_at_ms);
        player.set_video_size(config.playback.video_width, config.playback.video_height);
        player.set_play_when_ready(true);
        Self {
            player,
            coordinator: Coordinator::new(config.platform.version, host),
            last_playing: false,
        }
    }
}

struct App {
    config: Config,
    host: WindowHost,
    screen: Option<Screen>,
    saved_position_ms: u64,
    signal_tx: Sender<ControlSignal>,
    signal_rx: Option<Receiver<ControlSignal>>,
    last_window_level: Option<WindowLevel>,
    last_window_decorations: Option<bool>,
    restore_size: Option<egui::Vec2>,
    had_focus: bool,
}

impl App {
    fn new(config: Config) -> Self {
        let host = WindowHost::default();
        let screen = Screen::mount(&config, &host, 0);
        let (signal_tx, signal_rx) = mpsc::channel();
        Self {
            config,
            host,
            screen: Some(screen),
            saved_position_ms: 0,
            signal_tx,
            signal_rx: Some(signal_rx),
            last_window_level: None,
            last_window_decorations: None,
            restore_size: None,
            had_focus: true,
        }
    }

    /// Raised when the window loses focus (or on the shortcut), standing
    /// in for the platform's user-leave hint.
    fn user_leave(&mut self) {
        if self.host.in_pip {
            return;
        }
        if let Some(screen) = &mut self.screen {
            screen
                .coordinator
                .on_user_leave(&screen.player, &mut self.host);
        }
        if self.host.pending_enter.is_none() {
            self.host.pending_enter = self.host.auto_enter_params();
        }
    }

    fn drain_signals(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = self.signal_rx.as_ref() {
            loop {
                match rx.try_recv() {
                    Ok(signal) => pending.push(signal),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.signal_rx = None;
                        break;
                    }
                }
            }
        }
        for signal in pending {
            if let Some(screen) = &mut self.screen {
                screen
                    .coordinator
                    .on_control_signal(&signal, &mut screen.player);
            }
        }
    }

    fn enter_pip_window(&mut self, ctx: &egui::Context, params: &PipParams) {
        let aspect = params
            .aspect_ratio
            .map(|ratio| ratio.as_f32())
            .unwrap_or(DEFAULT_PIP_ASPECT);
        let width = self.config.ui.pip_window_width();
        let height = (width / aspect).max(90.0);

        self.restore_size = Some(ctx.screen_rect().size());
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(width, height)));
        self.host.in_pip = true;
        if let Some(screen) = &mut self.screen {
            screen.coordinator.on_pip_mode_changed(true);
        }
    }

    fn exit_pip_window(&mut self, ctx: &egui::Context) {
        if let Some(size) = self.restore_size.take() {
            ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
        }
        self.host.in_pip = false;
        self.host.pending_enter = None;
        if let Some(screen) = &mut self.screen {
            screen.coordinator.on_pip_mode_changed(false);
        }
    }

    /// Window chrome follows the miniature flag: borderless and
    /// always-on-top while small, normal otherwise. Commands are only sent
    /// on change.
    fn apply_window_chrome(&mut self, ctx: &egui::Context) {
        let desired_level = if self.host.in_pip {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        if self.last_window_level != Some(desired_level) {
            ctx.send_viewport_cmd(ViewportCommand::WindowLevel(desired_level));
            self.last_window_level = Some(desired_level);
        }

        let desired_decorations = !self.host.in_pip;
        if self.last_window_decorations != Some(desired_decorations) {
            ctx.send_viewport_cmd(ViewportCommand::Decorations(desired_decorations));
            self.last_window_decorations = Some(desired_decorations);
        }
    }

    fn unmount_screen(&mut self, ctx: &egui::Context) {
        if let Some(mut screen) = self.screen.take() {
            self.saved_position_ms = screen.coordinator.unmount(&screen.player);
            info!(
                "screen unmounted, position persisted at {} ms",
                self.saved_position_ms
            );
        }
        self.host.declared = None;
        self.host.pending_enter = None;
        if self.host.in_pip {
            self.exit_pip_window(ctx);
        }
    }

    fn remount_screen(&mut self) {
        if self.screen.is_none() {
            self.screen = Some(Screen::mount(
                &self.config,
                &self.host,
                self.saved_position_ms,
            ));
            info!("screen remounted at {} ms", self.saved_position_ms);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (space, leave, unmount, remount, escape) = ctx.input(|i| {
            (
                i.key_pressed(Key::Space),
                i.key_pressed(Key::L),
                i.key_pressed(Key::U),
                i.key_pressed(Key::M),
                i.key_pressed(Key::Escape),
            )
        });

        if space && !self.host.in_pip {
            if let Some(screen) = &mut self.screen {
                let playing = screen.player.is_playing();
                screen.player.set_play_when_ready(!playing);
            }
        }
        if leave {
            self.user_leave();
        }
        if unmount {
            self.unmount_screen(ctx);
        }
        if remount {
            self.remount_screen();
        }
        if escape && self.host.in_pip {
            self.exit_pip_window(ctx);
        }
    }

    /// Foreground controller action: acts on the player directly, unlike
    /// the miniature chrome which goes through the signal channel.
    fn apply_direct_control(&mut self, code: ControlCode) {
        let Some(screen) = &mut self.screen else {
            return;
        };
        match code {
            ControlCode::Play => screen.player.set_play_when_ready(true),
            ControlCode::Pause => screen.player.set_play_when_ready(false),
            ControlCode::SeekBack => {
                let target = screen.player.position_ms().saturating_sub(SEEK_STEP_MS);
                screen.player.seek_to(target);
            }
            ControlCode::SeekForward => {
                let target = screen.player.position_ms() + SEEK_STEP_MS;
                screen.player.seek_to(target);
            }
        }
    }

    fn draw_screen(&mut self, ui: &mut egui::Ui) {
        let surface_rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(surface_rect, CornerRadius::same(0), egui::Color32::from_rgb(12, 12, 16));

        let Some(screen) = &mut self.screen else {
            ui.painter().text(
                surface_rect.center(),
                Align2::CENTER_CENTER,
                "Screen unmounted — press M to remount",
                FontId::proportional(16.0),
                egui::Color32::GRAY,
            );
            return;
        };

        // Layout pass of the video surface: window-coordinate rectangle
        // delivered to the engine on every frame, like a geometry callback.
        let rect = WindowRect::new(
            surface_rect.min.x.round() as i32,
            surface_rect.min.y.round() as i32,
            surface_rect.max.x.round() as i32,
            surface_rect.max.y.round() as i32,
        );
        screen
            .coordinator
            .on_geometry_changed(rect, &screen.player, &mut self.host);

        let position = screen.player.position_ms() / 1_000;
        let duration = screen.player.duration_ms() / 1_000;
        let status = if screen.player.is_playing() {
            "Playing"
        } else {
            "Paused"
        };
        let label = format!(
            "{status}  {}:{:02} / {}:{:02}",
            position / 60,
            position % 60,
            duration / 60,
            duration % 60
        );
        let font_size = if self.host.in_pip { 12.0 } else { 18.0 };
        ui.painter().text(
            surface_rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(font_size),
            egui::Color32::WHITE,
        );
        if !self.host.in_pip {
            ui.painter().text(
                surface_rect.left_top() + egui::vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                "Space play/pause · L leave · U unmount · M remount",
                FontId::proportional(12.0),
                egui::Color32::from_gray(140),
            );
        }

        // Transport strip: foreground controller overlay, or the chrome
        // the host renders around the miniature window. Hidden in the
        // foreground while miniaturized (remote actions substitute).
        let controls_visible = screen.coordinator.controls_visible();
        let in_pip = self.host.in_pip;
        if !controls_visible && !in_pip {
            return;
        }

        let actions = if in_pip {
            // What the host chrome shows is whatever was last submitted.
            self.host
                .declared
                .as_ref()
                .or(self.host.pending_enter.as_ref())
                .map(|params| params.actions.clone())
                .unwrap_or_else(|| remote_actions(screen.player.is_playing()).to_vec())
        } else {
            remote_actions(screen.player.is_playing()).to_vec()
        };

        if let Some(geometry) = overlay::control_strip_geometry(surface_rect, actions.len()) {
            if let Some(code) = overlay::draw_control_strip(ui, geometry, &actions) {
                if in_pip {
                    // Simulated out-of-process delivery; routed next frame.
                    let _ = self.signal_tx.send(ControlSignal::new(code));
                } else {
                    self.apply_direct_control(code);
                }
            }
        }
    }

    fn desired_repaint_interval(&self) -> Duration {
        match &self.screen {
            Some(screen) if screen.player.is_playing() => Duration::from_millis(16),
            Some(_) => Duration::from_millis(120),
            None => Duration::from_millis(250),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(screen) = &mut self.screen {
            screen.player.tick(now);
            let playing = screen.player.is_playing();
            if playing != screen.last_playing {
                screen.last_playing = playing;
                screen.coordinator.on_playing_changed(playing);
            }
        }

        let focused = ctx.input(|i| i.raw.focused);
        if self.had_focus && !focused {
            self.user_leave();
        }
        self.had_focus = focused;

        self.handle_keys(ctx);
        self.drain_signals();

        if let Some(params) = self.host.pending_enter.take() {
            self.enter_pip_window(ctx, &params);
        }
        self.apply_window_chrome(ctx);

        let mut panel_frame = egui::Frame::central_panel(&ctx.style());
        panel_frame.fill = egui::Color32::TRANSPARENT;
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                self.draw_screen(ui);
            });

        ctx.request_repaint_after(self.desired_repaint_interval());
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|err| {
        warn!("falling back to default config: {err:#}");
        Config::default()
    });
    info!(
        "starting pip player on simulated platform version {:?}",
        config.platform.version
    );

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([200.0, 120.0]),
        ..Default::default()
    };
    let run_res = eframe::run_native(
        "PiP Player",
        native_options,
        Box::new(
            |_cc| -> std::result::Result<
                Box<dyn eframe::App>,
                Box<dyn std::error::Error + Send + Sync>,
            > { Ok(Box::new(App::new(config))) },
        ),
    );
    if let Err(e) = run_res {
        return Err(Box::new(e));
    }

    Ok(())
}
