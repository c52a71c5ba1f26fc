use anyhow::Result;
use first_platformer::engine::game_loop::FrameClock;
use first_platformer::engine::input::{Action, InputManager};
use first_platformer::engine::physics::{CollisionMap, TILE_SIZE};
use first_platformer::game::GameSession;
use log::info;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

/// Ticks between HUD dumps to the log (two seconds of game time)
const HUD_LOG_INTERVAL: u64 = 120;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting First Platformer...");

    let mut session = GameSession::demo()?;
    let mut input = InputManager::default();
    let mut clock = FrameClock::new();
    let mut last_hud_tick = 0;

    let map_size = winit::dpi::LogicalSize::new(
        session.map().width() as u32 * TILE_SIZE,
        session.map().height() as u32 * TILE_SIZE,
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("First Platformer")
        .with_inner_size(map_size)
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);

                // Meta keys act immediately so they still work while paused
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match input.config().get_action(key) {
                            Some(Action::Pause) => clock.toggle_pause(),
                            Some(Action::Menu) => {
                                info!("Escape pressed, shutting down...");
                                elwt.exit();
                            }
                            _ => {}
                        }
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let ticks = clock.begin_frame();
                let dt = clock.fixed_timestep();

                for _ in 0..ticks {
                    session.update(dt, input.player());
                    input.update();
                }

                // Presses made while paused are dropped
                if clock.is_paused() {
                    input.update();
                }

                if clock.tick_count() - last_hud_tick >= HUD_LOG_INTERVAL {
                    last_hud_tick = clock.tick_count();
                    info!("\n{}", session.snapshot());
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
