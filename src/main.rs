//! Duel Pong entry point
//!
//! Native shell: window and keyboard handling, fixed-step frame pacing, and
//! dispatch of simulation events to the audio sink.

use std::sync::Arc;
use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use duel_pong::audio::{AudioManager, SoundEffect};
use duel_pong::consts::*;
use duel_pong::renderer;
use duel_pong::settings::Settings;
use duel_pong::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn print_usage() {
    println!(
        r"Usage: duel-pong [OPTIONS]

Options:
  --seed <N>    Seed the match RNG for a reproducible game
  --muted       Start with audio muted
  --help, -h    Show this help message

Controls:
  W / Up        Move paddle up
  S / Down      Move paddle down
  M             Toggle mute
  Escape        Quit
  Y / N         Restart / quit from the game-over screen"
    );
}

/// Configuration parsed from command line arguments
#[derive(Default)]
struct Options {
    seed: Option<u64>,
    muted: bool,
}

/// Parse command line arguments, or None if invalid/help requested
fn parse_args() -> Option<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let Some(value) = args.get(i).and_then(|arg| arg.parse().ok()) else {
                    eprintln!("Error: --seed requires an integer value");
                    return None;
                };
                opts.seed = Some(value);
            }
            "--muted" => opts.muted = true,
            "--help" | "-h" => {
                print_usage();
                return None;
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                return None;
            }
        }
        i += 1;
    }

    Some(opts)
}

/// Held-key snapshot plus one-shot latches, turned into a TickInput per frame
#[derive(Default)]
struct InputState {
    up_held: bool,
    down_held: bool,
    restart_pressed: bool,
}

/// Window and framebuffer, created once the event loop resumes
struct RenderContext {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

/// Application state: settings, audio, simulation, and platform handles
struct App {
    settings: Settings,
    audio: AudioManager,
    state: GameState,
    input: InputState,
    render: Option<RenderContext>,

    // Fixed-step pacing
    last_time: Instant,
    accumulator: f32,

    // Phase tracking for transition logging
    last_phase: GamePhase,

    // FPS counter
    frame_count: u32,
    fps: u32,
    fps_timer: Instant,
}

impl App {
    fn new(settings: Settings, seed: u64) -> Self {
        let audio = AudioManager::new(&settings);
        Self {
            audio,
            settings,
            state: GameState::new(seed),
            input: InputState::default(),
            render: None,
            last_time: Instant::now(),
            accumulator: 0.0,
            last_phase: GamePhase::Playing,
            frame_count: 0,
            fps: 0,
            fps_timer: Instant::now(),
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool, event_loop: &ActiveEventLoop) {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => self.input.up_held = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.input.down_held = pressed,
            KeyCode::KeyY if pressed => self.input.restart_pressed = true,
            KeyCode::KeyN if pressed && self.state.phase == GamePhase::GameOver => {
                event_loop.exit();
            }
            KeyCode::Escape if pressed => event_loop.exit(),
            KeyCode::KeyM if pressed => {
                self.settings.muted = !self.settings.muted;
                self.audio.set_muted(self.settings.muted);
                self.settings.save();
            }
            // Unrecognized keys are silently ignored
            _ => {}
        }
    }

    /// Run pending simulation steps, dispatch events, render the frame
    fn update_and_render(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_time).as_secs_f32().min(0.25);
        self.last_time = now;
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= FRAME_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                move_up: self.input.up_held,
                move_down: self.input.down_held,
                restart: self.input.restart_pressed,
            };
            tick(&mut self.state, &input);
            self.accumulator -= FRAME_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.restart_pressed = false;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::WallHit => self.audio.play(SoundEffect::WallHit),
                GameEvent::PaddleHit => self.audio.play(SoundEffect::PaddleHit),
                GameEvent::Score(side) => {
                    self.audio.play(SoundEffect::Score);
                    log::info!(
                        "point to {side:?}: player {} - ai {}",
                        self.state.score.player,
                        self.state.score.ai
                    );
                }
            }
        }

        if self.state.phase != self.last_phase {
            match self.state.winner {
                Some(winner) => log::info!("match over: {}", winner.winner_text()),
                None => log::info!("match restarted"),
            }
            self.last_phase = self.state.phase;
        }

        let Some(render) = self.render.as_mut() else {
            return;
        };
        let frame = render.pixels.frame_mut();
        match self.state.phase {
            GamePhase::Playing => renderer::draw_playing(frame, &self.state),
            GamePhase::GameOver => renderer::draw_game_over(frame, &self.state),
        }
        if self.settings.show_fps {
            renderer::draw_fps(frame, self.fps);
        }
        if let Err(err) = render.pixels.render() {
            log::error!("render failed: {err}");
        }

        self.frame_count += 1;
        let elapsed = self.fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            self.fps = (self.frame_count as f32 / elapsed).round() as u32;
            self.frame_count = 0;
            self.fps_timer = Instant::now();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("DUEL PONG: PLAYER vs AI")
            .with_inner_size(LogicalSize::new(FIELD_WIDTH, FIELD_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(FIELD_WIDTH as u32, FIELD_HEIGHT as u32, surface)
            .expect("failed to create framebuffer");
        log::info!("window created: {}x{} physical", size.width, size.height);

        self.last_time = Instant::now();
        self.fps_timer = Instant::now();
        self.render = Some(RenderContext { window, pixels });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                self.handle_key(code, state == ElementState::Pressed, event_loop);
            }
            WindowEvent::Resized(size) => {
                if let Some(render) = self.render.as_mut() {
                    if let Err(err) = render.pixels.resize_surface(size.width, size.height) {
                        log::error!("surface resize failed: {err}");
                    }
                }
            }
            WindowEvent::RedrawRequested => self.update_and_render(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(render) = &self.render {
            render.window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    let Some(opts) = parse_args() else {
        return;
    };

    let mut settings = Settings::load();
    if opts.muted {
        settings.muted = true;
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    log::info!("starting match with seed {seed}");

    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, seed);
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {err}");
    }
}
