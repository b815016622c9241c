use anyhow::Result;

use crate::{
    geom::{Circle, Point},
    surface::Surface,
};


/// `MidpointCircle` は中点円アルゴリズムで円周のピクセル座標を遅延生成するイテレータ.
///
/// 1 ステップごとに 8 方向の対称点を `(x,y) (y,x) (-y,x) (-x,y) (-x,-y) (-y,-x) (y,-x) (x,-y)`
/// の順で返す. 八分円の境界では同じ座標が重複して返ることがある.
/// 中心からずらした結果が `i32` に収まらない点は返さない.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    center: Point,
    x: i32,
    y: i32,
    // 2x + 1 overflows i32 for radii above i32::MAX / 2
    err: i64,
    octant: u8,
}

impl MidpointCircle {
    /// `radius` が 0 以下の場合は何も返さない.
    pub fn new(center: Point, radius: i32) -> Self {
        let (x, y) = if radius > 0 { (radius, 0) } else { (-1, 0) };

        Self {
            center,
            x,
            y,
            err: 0,
            octant: 0,
        }
    }

    fn step(&mut self) {
        if self.err <= 0 {
            self.y += 1;
            self.err += 2 * self.y as i64 + 1;
        }
        // not an else branch: both axes may move in one step
        if self.err > 0 {
            self.x -= 1;
            self.err -= 2 * self.x as i64 + 1;
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.x < self.y {
                return None;
            }

            let (x, y) = (self.x, self.y);
            let (dx, dy) = match self.octant {
                0 => (x, y),
                1 => (y, x),
                2 => (-y, x),
                3 => (-x, y),
                4 => (-x, -y),
                5 => (-y, -x),
                6 => (y, -x),
                _ => (x, -y),
            };

            self.octant += 1;
            if self.octant == 8 {
                self.octant = 0;
                self.step();
            }

            if let Some(p) = self.center.checked_offset(dx, dy) {
                return Some(p);
            }
        }
    }
}

impl std::iter::FusedIterator for MidpointCircle {}

/// `circle` の円周を `surface` の現在の描画色で描く.
pub fn draw_circle(surface: &mut impl Surface, circle: &Circle) -> Result<()> {
    for point in circle.outline() {
        surface.draw_point(point)?;
    }
    Ok(())
}
