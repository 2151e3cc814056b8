//! Host preview of both shows.
//!
//! Runs the real player against a trace and prints one line per display
//! write: the eight LEDs as `# . ` glyphs (end LED, six ring LEDs, end
//! LED) and the hold that follows. Handy for eyeballing a table edit
//! without flashing a board.
//!
//!     cargo run --bin preview --features preview

use atmega128_flasher::led::{Frame, Led};
use atmega128_flasher::player::Player;
use atmega128_flasher::show::{show_one, show_two};
use atmega128_flasher::trace::{Trace, TraceEvent};

const TRACE_CAPACITY: usize = 2048;

fn main() {
    render("show one", run_show_one());
    println!();
    render("show two", run_show_two());
}

fn run_show_one() -> Vec<TraceEvent> {
    let trace = Trace::<TRACE_CAPACITY>::new();
    {
        let mut player = Player::new(trace.port(), trace.delay());
        show_one(&mut player);
    }
    trace.into_events().into_iter().collect()
}

fn run_show_two() -> Vec<TraceEvent> {
    let trace = Trace::<TRACE_CAPACITY>::new();
    {
        let mut player = Player::new(trace.port(), trace.delay());
        show_two(&mut player);
    }
    trace.into_events().into_iter().collect()
}

fn render(title: &str, events: Vec<TraceEvent>) {
    println!("== {title} ==");
    let mut frames = 0u32;
    let mut total_ms = 0u32;
    let mut pending: Option<Frame> = None;
    for event in events {
        match event {
            TraceEvent::Frame(frame) => {
                if let Some(prev) = pending.take() {
                    print_step(prev, 0);
                }
                frames += 1;
                pending = Some(frame);
            }
            TraceEvent::Hold(ms) => {
                total_ms += u32::from(ms);
                match pending.take() {
                    Some(frame) => print_step(frame, ms),
                    None => println!("{:10}  {:>4} ms", "(pause)", ms),
                }
            }
        }
    }
    if let Some(frame) = pending {
        print_step(frame, 0);
    }
    println!("-- {} frames, {:.1} s", frames, f64::from(total_ms) / 1000.0);
}

fn print_step(frame: Frame, ms: u16) {
    let mut strip = String::new();
    strip.push(glyph(frame, Led::Led7));
    strip.push(' ');
    for led in [Led::Led1, Led::Led2, Led::Led3, Led::Led4, Led::Led5, Led::Led6] {
        strip.push(glyph(frame, led));
    }
    strip.push(' ');
    strip.push(glyph(frame, Led::Led8));
    println!("{strip}  {ms:>4} ms");
}

fn glyph(frame: Frame, led: Led) -> char {
    if frame.contains(led) {
        '#'
    } else {
        '.'
    }
}
