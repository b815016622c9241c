use anyhow::Result;

use crate::{geom::Color, raster::draw_circle, surface::Surface, world::World};

pub const BACKGROUND: Color = Color::rgba(100, 200, 55, 35);
pub const MOVING: Color = Color::rgba(255, 0, 255, 255);
pub const CONTROLLED: Color = Color::rgba(0, 0, 255, 255);
pub const COLLISION: Color = Color::rgba(255, 0, 0, 255);

/// 1 フレーム分を描く. 衝突中は両方の円を赤で描き直す.
pub fn render_frame(surface: &mut impl Surface, world: &World, collision: bool) -> Result<()> {
    surface.clear(BACKGROUND)?;

    surface.set_draw_color(MOVING);
    draw_circle(surface, &world.moving)?;

    surface.set_draw_color(CONTROLLED);
    draw_circle(surface, &world.controlled)?;

    if collision {
        surface.set_draw_color(COLLISION);
        draw_circle(surface, &world.moving)?;
        draw_circle(surface, &world.controlled)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        geom::{Circle, Point},
        surface::{DrawCall, ImageSurface, Recorder},
    };

    fn colors_in_order(calls: &[DrawCall]) -> Vec<Color> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::SetColor(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn separate_circles_are_drawn_once() {
        let world = World::new(&Config::default());
        assert!(!world.is_colliding());

        let mut rec = Recorder::default();
        render_frame(&mut rec, &world, false).unwrap();

        assert_eq!(rec.calls[0], DrawCall::Clear(BACKGROUND));
        assert_eq!(colors_in_order(&rec.calls), vec![MOVING, CONTROLLED]);

        let points = rec
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Point(_)))
            .count();
        assert_eq!(points, world.moving.outline().count() * 2);
    }

    #[test]
    fn colliding_circles_are_redrawn_in_red() {
        let mut world = World::new(&Config::default());
        world.controlled = Circle::new(world.moving.center.offset(5, 5), world.controlled.radius);
        assert!(world.is_colliding());

        let mut rec = Recorder::default();
        render_frame(&mut rec, &world, true).unwrap();

        assert_eq!(
            colors_in_order(&rec.calls),
            vec![MOVING, CONTROLLED, COLLISION]
        );

        let red_from = rec
            .calls
            .iter()
            .position(|c| *c == DrawCall::SetColor(COLLISION))
            .unwrap();
        let expected: Vec<_> = world
            .moving
            .outline()
            .chain(world.controlled.outline())
            .map(DrawCall::Point)
            .collect();
        assert_eq!(&rec.calls[red_from + 1..], &expected[..]);
    }

    #[test]
    fn renders_onto_an_image() {
        let config = Config::default();
        let world = World::new(&config);
        let mut surface = ImageSurface::new(config.screen_width, config.screen_height);

        render_frame(&mut surface, &world, false).unwrap();

        let right_of_moving = world.moving.center.offset(world.moving.radius, 0);
        assert_eq!(surface.pixel(right_of_moving), Some(MOVING));
        let below_controlled = world.controlled.center.offset(0, world.controlled.radius);
        assert_eq!(surface.pixel(below_controlled), Some(CONTROLLED));
        assert_eq!(surface.pixel(Point::new(400, 400)), Some(BACKGROUND));
    }
}
