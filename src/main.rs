extern crate sdl2;
extern crate gl;
extern crate image;
extern crate env_logger;
extern crate backtrace;
#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;
#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

use std::env;
use std::io::Write;
use std::process;
use std::time::{Instant, Duration};

use log::LevelFilter;

pub mod v;
pub mod gx;
pub mod grx;
pub mod mesh;
pub mod atlas;
pub mod rng;
pub mod grid;
pub mod input;
pub mod movement;
pub mod platform;
pub mod game;

use game::Game;

const WINDOW_TITLE: &str = "Tilefield";
const WINDOW_WIDTH: u32 = 1920;
const WINDOW_HEIGHT: u32 = 1080;

fn main() {
    setup_env();
    setup_log();
    setup_panic_hook();

    if let Err(e) = run() {
        error!("Fatal startup error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut game = Game::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;

    /* See http://www.opengl-tutorial.org/miscellaneous/an-fps-counter/ */
    let mut last_time = Instant::now();
    let mut frame_accum = 0u64;
    let fps_counter_interval = 1000f64; /* Should be in [100, 1000] */

    'running: loop {
        game.pump_events();
        if game.should_quit() {
            break 'running;
        }
        game.tick();
        game.render();
        game.present();

        frame_accum += 1;
        let current_time = Instant::now();
        if current_time.duration_since(last_time) > Duration::from_millis(fps_counter_interval as _) {
            let fps = ((frame_accum as f64) * 1000f64 / fps_counter_interval).round() as u32;
            info!(concat!("{} frames under {} milliseconds = ",
                "{} milliseconds/frame = ",
                "{} FPS"),
                frame_accum,
                fps_counter_interval,
                fps_counter_interval / (frame_accum as f64),
                fps
            );
            frame_accum = 0;
            last_time += Duration::from_millis(fps_counter_interval as _);
        }
    }
    Ok(())
}

fn setup_env() {
    //env::set_var("RUST_LOG", "info");
    env::set_var("RUST_BACKTRACE", "full");
}

fn setup_log() {
    let mut builder = env_logger::Builder::new();

    builder.format(|buf, record| {
        let s = format!("{}", record.level());
        let s = s.chars().next().unwrap();
        writeln!(buf, "[{}] {}", s, record.args())
    }).filter(None, LevelFilter::Info);

    if let Ok(rust_log) = env::var("RUST_LOG") {
        builder.parse(&rust_log);
    }
    builder.init();
}

fn setup_panic_hook() {
    use std::panic;

    panic::set_hook(Box::new(|info| {

        let mut msg = match info.location() {
            Some(location) => format!("Panic occurred in file '{}' at line {}:\n", location.file(), location.line()),
            None => format!("Panic occurred in unknown location:\n"),
        };

        if let Some(payload) = info.payload().downcast_ref::<&str>() {
            msg += payload;
        } else {
            msg += "<unknown reason>";
        }

        error!("{}", &msg);

        info!("Backtrace:");
        ::backtrace::trace(|frame| {
            let ip = frame.ip();
            let _symbol_address = frame.symbol_address();

            ::backtrace::resolve(ip, |symbol| {
                let what = || "??".to_owned();
                let filename = if let Some(filename) = symbol.filename() { format!("{}", filename.display()) } else { what() };
                let lineno = if let Some(lineno) = symbol.lineno() { format!("{}", lineno) } else { what() };
                let addr = if let Some(addr) = symbol.addr() { format!("0x{:8x}", addr as usize) } else { what() };
                let name = if let Some(name) = symbol.name() { format!("{}", name) } else { what() };
                // NOTE: Do use the Display implementation for name. It demangles the symbol.
                info!("{}:{}: ({}) {}", &filename, &lineno, &addr, name);
            });

            true // keep going to the next frame
        });

        use sdl2::messagebox;
        let flags = messagebox::MESSAGEBOX_ERROR;
        let result = messagebox::show_simple_message_box(
            flags, "Fatal error", &msg, None
        );
        if let Err(e) = result {
            use sdl2::messagebox::ShowMessageError::*;
            let msg = "Couldn't display message box: ".to_owned() + &match e {
                InvalidTitle(nul_error) => format!("Invalid title: {:?}", nul_error),
                InvalidMessage(nul_error) => format!("Invalid message: {:?}", nul_error),
                InvalidButton(nul_error, i) => format!("Invalid button {}: {:?}", i, nul_error),
                SdlError(msg) => format!("SDL2 error: {}", &msg),
            };
            error!("{}", &msg);
        }
    }));
}
