use crate::geom::Circle;


/// 2 つの円が重なっているかを判定する. 接しているだけの場合は重なりとみなさない.
///
/// 中心間距離 `d` と半径の和 `R` (整数) について `floor(d) < R` と `d < R` は同値なので,
/// 平方根を取らずに二乗同士を `u64` で比較する. `R` は高々 2^32 - 2 なので `R * R` は溢れない.
/// 距離の二乗が飽和した場合も `R * R` 以上なので結果は変わらない.
pub fn check_collision(a: &Circle, b: &Circle) -> bool {
    let sum = a.radius as i64 + b.radius as i64;
    if sum <= 0 {
        return false;
    }
    let sum = sum as u64;
    a.center.distance_sq(b.center) < sum * sum
}
