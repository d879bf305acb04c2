// File: crates/calwall-preview/src/main.rs
// Summary: Live preview window: renders the wallpaper with the shared engine and blits it via winit + softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use calwall_core::{FontHandle, Frame, RenderOptions, Renderer, Wallpaper};
use calwall_preview::blit::{blit_scaled, display_size};
use calwall_preview::{Command, PreviewState};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Live preview of the calendar-progress wallpaper.
#[derive(Parser, Debug)]
#[command(name = "calwall-preview", version)]
struct Cli {
    /// Server base URL used when printing the equivalent request URL.
    #[arg(long, env = "CALWALL_SERVER_URL", default_value = "http://localhost:3000")]
    server_url: String,

    /// Start from a request query string or a full wallpaper URL.
    #[arg(long)]
    query: Option<String>,

    /// Directory holding the caption font files.
    #[arg(long = "font-dir", default_value = "fonts")]
    font_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const HELP: &str = "keys: M mode | Up/Down cols | [ ] dot size | Left/Right timezone | PgUp/PgDn top pad | Home/End bottom pad | T theme | D device | R reset | U url | S save";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose { 0 => "info", 1 => "debug", _ => "trace" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("calwall_preview={level},calwall_core={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let renderer = Renderer::new(&FontHandle::load_dir(&cli.font_dir));
    let mut state = match cli.query.as_deref() {
        Some(query) => PreviewState::from_query(query),
        None => PreviewState::default(),
    };
    let mut frame = render(&renderer, &state)?;
    println!("{HELP}");
    println!("{}", state.url(&cli.server_url));

    let event_loop = EventLoop::new();
    let (w, h) = display_size(state.params.width, state.params.height);
    let window = WindowBuilder::new()
        .with_title("CalWall Preview")
        .with_inner_size(winit::dpi::LogicalSize::new(w, h))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::U => println!("{}", state.url(&cli.server_url)),
                        VirtualKeyCode::S => save(&frame),
                        _ => {
                            let Some(cmd) = command_for(key) else { return };
                            let previous = state.clone();
                            if !state.apply(cmd) {
                                return;
                            }
                            match render(&renderer, &state) {
                                Ok(next) => {
                                    frame = next;
                                    tracing::info!("{}", state.describe());
                                    println!("{}", state.url(&cli.server_url));
                                    if matches!(cmd, Command::NextDevice | Command::Reset) {
                                        let (w, h) = display_size(frame.width, frame.height);
                                        window.set_inner_size(winit::dpi::LogicalSize::new(w, h));
                                    }
                                    window.request_redraw();
                                }
                                Err(err) => {
                                    // Keep the last good frame on screen.
                                    tracing::warn!(%err, "render failed, keeping previous preview");
                                    state = previous;
                                }
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else { return };
                if let Err(e) = surface.resize(w, h) {
                    tracing::warn!("resize error: {e:?}");
                    return;
                }
                match surface.buffer_mut() {
                    Ok(mut buf) => {
                        blit_scaled(&frame, &mut buf, size.width, size.height);
                        if let Err(e) = buf.present() {
                            tracing::warn!("present error: {e:?}");
                        }
                    }
                    Err(e) => tracing::warn!("frame error: {e:?}"),
                }
            }
            _ => {}
        }
    });
}

fn command_for(key: VirtualKeyCode) -> Option<Command> {
    Some(match key {
        VirtualKeyCode::M => Command::ToggleMode,
        VirtualKeyCode::Up => Command::MoreColumns,
        VirtualKeyCode::Down => Command::FewerColumns,
        VirtualKeyCode::RBracket => Command::LargerDots,
        VirtualKeyCode::LBracket => Command::SmallerDots,
        VirtualKeyCode::Right => Command::TimezoneEast,
        VirtualKeyCode::Left => Command::TimezoneWest,
        VirtualKeyCode::PageUp => Command::MorePaddingTop,
        VirtualKeyCode::PageDown => Command::LessPaddingTop,
        VirtualKeyCode::Home => Command::MorePaddingBottom,
        VirtualKeyCode::End => Command::LessPaddingBottom,
        VirtualKeyCode::T => Command::NextTheme,
        VirtualKeyCode::D => Command::NextDevice,
        VirtualKeyCode::R => Command::Reset,
        _ => return None,
    })
}

/// Full re-render at canvas resolution from the current clock.
fn render(renderer: &Renderer, state: &PreviewState) -> Result<Frame> {
    let wp = Wallpaper::plan(state.params, Utc::now())?;
    Ok(renderer.render_rgba8(&wp, &RenderOptions::default())?)
}

fn save(frame: &Frame) {
    let path = PathBuf::from(format!("calwall-{}.png", Utc::now().timestamp_millis()));
    let written = frame
        .encode_png()
        .map_err(anyhow::Error::from)
        .and_then(|bytes| std::fs::write(&path, bytes).map_err(anyhow::Error::from));
    match written {
        Ok(()) => println!("saved {}", path.display()),
        Err(err) => tracing::warn!(%err, "export failed"),
    }
}
