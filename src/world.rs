use std::convert::TryFrom;

use log::trace;

use crate::{
    config::Config,
    geom::{Circle, Dir, Point},
};


/// `World` は 2 つの円の状態を表す.
///
/// `moving` は毎フレーム右へ自動で進み, `controlled` はキー入力でのみ動く.
#[derive(Debug, Clone)]
pub struct World {
    pub moving: Circle,
    pub controlled: Circle,
    screen_width: i32,
    speed: i32,
}

impl World {
    pub fn new(config: &Config) -> Self {
        let width = i32::try_from(config.screen_width).unwrap_or(i32::MAX);
        let height = i32::try_from(config.screen_height).unwrap_or(i32::MAX);

        Self {
            moving: Circle::new(Point::new(0, height / 2), config.radius),
            controlled: Circle::new(Point::new(width / 2, 0), config.radius),
            screen_width: width,
            speed: config.speed,
        }
    }

    /// キー入力 1 回分だけ `controlled` を動かす. 画面外へ出ても制限しない.
    pub fn nudge(&mut self, dir: Dir) {
        let (dx, dy) = dir.delta();
        self.controlled.center = self
            .controlled
            .center
            .saturating_offset(dx * self.speed, dy * self.speed);
        trace!("nudged {:?} to {:?}", dir, self.controlled.center);
    }

    /// `moving` を 1 フレーム分進める. 右端を越えたら直径分だけ左の画面外へ戻す.
    pub fn advance(&mut self) {
        let center = &mut self.moving.center;
        center.x = center.x.saturating_add(self.speed);
        if center.x >= self.screen_width {
            center.x = 0i32.saturating_sub(self.moving.radius.saturating_mul(2));
            trace!("moving circle wrapped to x = {}", center.x);
        }
    }

    pub fn is_colliding(&self) -> bool {
        self.moving.collides_with(&self.controlled)
    }

    /// 1 フレーム分の更新. 入力を反映してから `moving` を進め, 衝突判定の結果を返す.
    pub fn step(&mut self, nudges: impl IntoIterator<Item = Dir>) -> bool {
        for dir in nudges {
            self.nudge(dir);
        }
        self.advance();
        self.is_colliding()
    }
}
