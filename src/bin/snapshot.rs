use std::env;

use anyhow::{bail, Context, Result};
use log::info;

use circle_collision::{
    config::Config, geom::Dir, logging, render::render_frame, surface::ImageSurface,
    world::World,
};

#[derive(Debug, PartialEq)]
struct Args {
    frames: u32,
    output: String,
    /// 最初のフレームでまとめて適用する `U R D L` の列.
    moves: Vec<Dir>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let frames: u32 = args
        .next()
        .context("the number of frames must be provided")?
        .parse()
        .context("expected an integer")?;
    let output = args.next().context("the output png path must be provided")?;
    let moves = args
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| Dir::from_char(c).with_context(|| format!("unknown move {:?}", c)))
        .collect::<Result<Vec<_>>>()?;

    if frames == 0 {
        bail!("at least one frame must be rendered");
    }

    Ok(Args {
        frames,
        output,
        moves,
    })
}

fn main() -> Result<()> {
    logging::init();

    let Args {
        frames,
        output,
        moves,
    } = parse_args(env::args().skip(1))?;

    let config = Config::from_env().context("failed to load configuration")?;
    info!("config: {:?}", config);

    let mut world = World::new(&config);
    let mut collision = world.step(moves);
    for _ in 1..frames {
        collision = world.step(None::<Dir>);
    }

    let mut surface = ImageSurface::new(config.screen_width, config.screen_height);
    render_frame(&mut surface, &world, collision)?;
    surface.save(&output)?;

    println!(
        "frame {}: moving {:?}, controlled {:?}, collision: {}",
        frames, world.moving.center, world.controlled.center, collision
    );
    println!("saved snapshot to {}", output);

    Ok(())
}
