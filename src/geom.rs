/// `Point` は画面上のピクセル座標を表す. 画面外 (負の値を含む) も表現できる.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// `i32` の範囲に収まらない場合は `None`.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    #[inline]
    pub fn saturating_offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// 2 点間のユークリッド距離の二乗.
    ///
    /// 各軸の差は最大 2^32 - 1 なのでその二乗は `u64` に収まるが, 和は収まらないことがあるため飽和させる.
    pub fn distance_sq(self, other: Self) -> u64 {
        let dx = (other.x as i64 - self.x as i64).unsigned_abs();
        let dy = (other.y as i64 - self.y as i64).unsigned_abs();
        (dx * dx).saturating_add(dy * dy)
    }
}

/// `Circle` は中心 `center` と半径 `radius` で表される円を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// 円周を構成するピクセル座標を順に返すイテレータを作る.
    pub fn outline(&self) -> crate::raster::MidpointCircle {
        crate::raster::MidpointCircle::new(self.center, self.radius)
    }

    pub fn collides_with(&self, other: &Circle) -> bool {
        crate::collide::check_collision(self, other)
    }
}

/// `Dir` はキー入力による移動の向きを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// 画面座標系 (y 軸が下向き) での単位移動量.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'U' => Dir::Up,
            'R' => Dir::Right,
            'D' => Dir::Down,
            'L' => Dir::Left,
            _ => return None,
        })
    }
}

/// `Color` は 32 ビットの RGBA カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
