use std::ops::{Deref, DerefMut};

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use sdl2::{
    event::Event,
    keyboard::Keycode,
    pixels::Color as SdlColor,
    render::Canvas,
    video::Window,
};

use crate::{
    config::Config,
    geom::{Color, Dir, Point},
    render::render_frame,
    surface::Surface,
    world::World,
};

/// `SdlSurface` は SDL のキャンバスに描画する `Surface`.
pub struct SdlSurface {
    canvas: Canvas<Window>,
}

impl Deref for SdlSurface {
    type Target = Canvas<Window>;

    fn deref(&self) -> &Self::Target {
        &self.canvas
    }
}

impl DerefMut for SdlSurface {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.canvas
    }
}

fn sdl_color(c: Color) -> SdlColor {
    SdlColor::RGBA(c.r, c.g, c.b, c.a)
}

impl Surface for SdlSurface {
    fn clear(&mut self, color: Color) -> Result<()> {
        let prev = self.canvas.draw_color();
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
        self.canvas.set_draw_color(prev);
        Ok(())
    }

    fn set_draw_color(&mut self, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
    }

    fn draw_point(&mut self, point: Point) -> Result<()> {
        self.canvas
            .draw_point((point.x, point.y))
            .map_err(|e| anyhow!("failed to draw point {:?}: {}", point, e))
    }
}


struct GuiState {
    running: bool,
    nudges: Vec<Dir>,
    was_colliding: bool,
}

impl GuiState {
    fn new() -> Self {
        Self {
            running: true,
            nudges: vec![],
            was_colliding: false,
        }
    }

    fn process_sdl_event(&mut self, event: &Event) {
        use Event::*;

        match event {
            Quit { .. }
            | KeyDown {
                keycode: Some(Keycode::Escape | Keycode::Q),
                ..
            } => {
                self.running = false;
            }

            KeyDown {
                keycode: Some(Keycode::Up),
                ..
            } => self.nudges.push(Dir::Up),
            KeyDown {
                keycode: Some(Keycode::Down),
                ..
            } => self.nudges.push(Dir::Down),
            KeyDown {
                keycode: Some(Keycode::Left),
                ..
            } => self.nudges.push(Dir::Left),
            KeyDown {
                keycode: Some(Keycode::Right),
                ..
            } => self.nudges.push(Dir::Right),

            _ => {}
        }
    }
}

/// ウィンドウを開き, 閉じられるまでフレームループを回す.
pub fn run(config: &Config) -> Result<()> {
    let sdl = sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize sdl")?;
    let video = sdl
        .video()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize video subsystem")?;

    let window = video
        .window(&config.title, config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .context("failed to create window")?;
    let canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .context("failed to create renderer")?;
    let mut surface = SdlSurface { canvas };

    let mut event_pump = sdl
        .event_pump()
        .map_err(anyhow::Error::msg)
        .context("failed to obtain event pump")?;

    info!(
        "window {}x{} opened, radius {} speed {}",
        config.screen_width, config.screen_height, config.radius, config.speed
    );

    let mut world = World::new(config);
    let mut state = GuiState::new();

    loop {
        for event in event_pump.poll_iter() {
            state.process_sdl_event(&event);
        }

        if !state.running {
            break;
        }

        let collision = world.step(state.nudges.drain(..));

        if collision != state.was_colliding {
            debug!(
                "collision {}: {:?} {:?}",
                if collision { "started" } else { "ended" },
                world.moving,
                world.controlled
            );
            state.was_colliding = collision;
        }

        render_frame(&mut surface, &world, collision)?;
        surface.present();
    }

    info!("quit");
    Ok(())
}
