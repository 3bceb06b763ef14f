//! Flow onboarding screen simulator for desktop.
//!
//! Opens an SDL window via embedded-graphics-simulator and drives the
//! onboarding screen from a fixed-rate frame loop.
//!
//! # Controls
//!
//! - `R`: replay (dismiss the screen and mount a fresh instance)
//! - `Y`: toggle onboarding / debug page
//! - `Return` / `Space`: tap the call-to-action button

// Crate-level lints
#![allow(clippy::cast_precision_loss)]

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use flow_common::colors::BLACK;
use flow_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TITLE};
use flow_common::{DebugLog, FrameState, LayoutModel, OnboardingScreen, RevealTimeline, draw_onboarding};
use flow_simulator::pages::Page;
use flow_simulator::profiling::ProfilingMetrics;
use flow_simulator::screens::draw_debug_page;
use flow_simulator::timing::{FPS_WINDOW, FRAME_TIME};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new(TITLE, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // The renderer keeps its own copy so the observer closure does not
    // borrow the screen while it is being updated.
    let model = LayoutModel::flow();
    let timeline = RevealTimeline::default();
    let clock = Instant::now();

    let mut screen = OnboardingScreen::new(model.clone(), timeline);
    screen.on_mount(clock.elapsed());

    let mut current_page = Page::default();
    let mut page_just_switched = false;

    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("Simulator started");

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    screen.dismiss();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::R => {
                            screen.dismiss();
                            screen = OnboardingScreen::new(model.clone(), timeline);
                            screen.on_mount(clock.elapsed());
                            metrics.inc_restarts();
                            debug_log.push("Replay");
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            debug_log.push(current_page.log_line());
                        }
                        Keycode::Return | Keycode::Space if current_page == Page::Onboarding => {
                            screen.tap_button();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        fps_frame_count += 1;
        if last_fps_calc.elapsed() >= FPS_WINDOW {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        let now = clock.elapsed();
        match current_page {
            Page::Onboarding => {
                // The debug page painted over everything
                if page_just_switched {
                    screen.invalidate();
                }
                let mut render = |frame: &FrameState| {
                    draw_onboarding(&mut display, &model, frame).ok();
                };
                if screen.update(now, &mut render) {
                    metrics.inc_screen_redraws();
                }
            }
            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &screen, now, &debug_log, current_fps).ok();
                metrics.inc_debug_draws();
            }
        }

        let render_time = frame_start.elapsed();
        page_just_switched = false;

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.saturating_sub(pre_sleep));
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
