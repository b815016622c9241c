use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use crate::geom::{Color, Point};

/// `Surface` は点を打てる描画先を表す. SDL のレンダラとメモリ上の画像の両方がこれを実装する.
pub trait Surface {
    /// 全体を `color` で塗りつぶす. 描画色は変更しない.
    fn clear(&mut self, color: Color) -> Result<()>;

    fn set_draw_color(&mut self, color: Color);

    fn draw_point(&mut self, point: Point) -> Result<()>;
}

/// `ImageSurface` は `RgbaImage` に描画する `Surface`. 範囲外の点は SDL と同じく黙って捨てる.
pub struct ImageSurface {
    image: RgbaImage,
    color: Color,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            color: Color::rgba(255, 255, 255, 255),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, point: Point) -> Option<Color> {
        let (x, y) = self.to_image_coords(point)?;
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Some(Color::rgba(r, g, b, a))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .with_context(|| format!("failed to save snapshot to {}", path.display()))
    }

    fn to_image_coords(&self, point: Point) -> Option<(u32, u32)> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x < self.image.width() && y < self.image.height() {
            Some((x, y))
        } else {
            None
        }
    }
}

fn to_rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, c.a])
}

impl Surface for ImageSurface {
    fn clear(&mut self, color: Color) -> Result<()> {
        let px = to_rgba(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
        Ok(())
    }

    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_point(&mut self, point: Point) -> Result<()> {
        if let Some((x, y)) = self.to_image_coords(point) {
            self.image.put_pixel(x, y, to_rgba(self.color));
        }
        Ok(())
    }
}

/// `Recorder` は描画呼び出しをそのまま記録するだけの `Surface`. テスト用.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DrawCall {
    Clear(Color),
    SetColor(Color),
    Point(Point),
}

#[cfg(test)]
impl Surface for Recorder {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn set_draw_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn draw_point(&mut self, point: Point) -> Result<()> {
        self.calls.push(DrawCall::Point(point));
        Ok(())
    }
}
