pub mod config;

use anyhow::{Context, Result};
use sdl2::{
    VideoSubsystem,
    event::{Event, WindowEvent},
    sys::SDL_WindowFlags,
    keyboard::Keycode,
    pixels::Color,
    render::Canvas,
    video::Window,
};

use libs::monitor::{self, Monitor};

const WINDOW_TITLE: &str = "Black Screen";

/// Every display SDL reports bounds for, in SDL order (0 = primary).
pub fn list_monitors(video: &VideoSubsystem) -> Result<Vec<Monitor>> {
    let count = video
        .num_video_displays()
        .map_err(anyhow::Error::msg)
        .context("count video displays")?;

    let mut monitors = Vec::with_capacity(usize::try_from(count).unwrap_or_default());
    for index in 0..count {
        match video.display_bounds(index) {
            Ok(rect) => {
                let mut m = Monitor::new(rect.x(), rect.y(), rect.width(), rect.height());
                if let Ok(name) = video.display_name(index) {
                    m = m.with_name(name);
                }
                monitors.push(m);
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping display without bounds");
            }
        }
    }
    Ok(monitors)
}

/// Print the detected monitors, one per line.
pub fn print_monitors() -> Result<()> {
    let sdl_context = sdl2::init().map_err(anyhow::Error::msg).context("init SDL")?;
    let video = sdl_context
        .video()
        .map_err(anyhow::Error::msg)
        .context("init SDL video")?;

    let monitors = list_monitors(&video)?;
    if monitors.is_empty() {
        println!("No monitors detected.");
    }
    for (i, m) in monitors.iter().enumerate() {
        let primary = if i == 0 { " [primary]" } else { "" };
        println!("{i}: {m}{primary}");
    }
    Ok(())
}

pub fn is_exit_key(keycode: Option<Keycode>) -> bool {
    matches!(keycode, Some(Keycode::Escape))
}

/// ESC, or a quit request from the window manager / SIGTERM.
pub fn is_exit_event(event: &Event) -> bool {
    match event {
        Event::Quit { .. } => true,
        Event::KeyDown { keycode, .. } => is_exit_key(*keycode),
        _ => false,
    }
}

fn needs_repaint(event: &Event) -> bool {
    matches!(
        event,
        Event::Window {
            win_event: WindowEvent::Exposed
                | WindowEvent::Shown
                | WindowEvent::Restored
                | WindowEvent::SizeChanged(..),
            ..
        }
    )
}

/// Borderless and above the taskbar and other top-level windows.
fn cover_window_flags() -> u32 {
    SDL_WindowFlags::SDL_WINDOW_BORDERLESS as u32 | SDL_WindowFlags::SDL_WINDOW_ALWAYS_ON_TOP as u32
}

fn fill_black(canvas: &mut Canvas<Window>) {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();
    canvas.present();
}

/// Cover monitor `requested` with a borderless black window and block until
/// ESC is pressed or the process is asked to quit.
pub fn cover_monitor(requested: i64) -> Result<()> {
    let sdl_context = sdl2::init().map_err(anyhow::Error::msg).context("init SDL")?;
    let video = sdl_context
        .video()
        .map_err(anyhow::Error::msg)
        .context("init SDL video")?;

    let monitors = list_monitors(&video)?;
    let placement = monitor::select(&monitors, requested)?;
    let (x, y, width, height) = placement.bounds();

    let window = video
        .window(WINDOW_TITLE, width, height)
        .position(x, y)
        .set_window_flags(cover_window_flags())
        .build()
        .context("create window")?;

    if window.position() != (x, y) || window.size() != (width, height) {
        let (actual_x, actual_y) = window.position();
        let (actual_w, actual_h) = window.size();
        tracing::warn!(
            expected = %placement.monitor,
            actual = %format!("{actual_x},{actual_y} {actual_w}x{actual_h}"),
            "window manager moved or resized the window"
        );
    }

    sdl_context.mouse().show_cursor(false);

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .context("create canvas")?;
    canvas.window_mut().raise();
    fill_black(&mut canvas);

    tracing::info!(
        monitor = placement.index,
        fell_back = placement.fell_back,
        "black screen shown"
    );
    println!(
        "Showing black fullscreen on monitor at {x},{y} {width}x{height}. Press ESC to close."
    );

    let mut event_pump = sdl_context
        .event_pump()
        .map_err(anyhow::Error::msg)
        .context("create event pump")?;

    for event in event_pump.wait_iter() {
        if is_exit_event(&event) {
            tracing::info!("exit requested");
            break;
        }
        if needs_repaint(&event) {
            fill_black(&mut canvas);
        }
    }

    Ok(())
}
