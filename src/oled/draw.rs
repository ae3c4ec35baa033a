//! Simple shapes, drawn pixel by pixel. Enable the `embedded-graphics` feature for anything
//! fancier, like text.

use super::{OledBitmap, HEIGHT, WIDTH};

/// Squared distance, wide enough for any pair of `i32` coordinates.
fn squared_distance(dx: i64, dy: i64) -> i128 {
    let (dx, dy) = (dx as i128, dy as i128);
    dx * dx + dy * dy
}

impl OledBitmap {
    /// Like [`OledBitmap::set_pixel`], for coordinates that may not fit an `i32`.
    fn set_pixel_wide(&mut self, x: i64, y: i64, on: bool) {
        if (0..WIDTH as i64).contains(&x) && (0..HEIGHT as i64).contains(&y) {
            self.set_pixel(x as i32, y as i32, on);
        }
    }

    /// Draws `length` pixels to the right, starting at `(x, y)`.
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, length: i32, on: bool) {
        if !(0..HEIGHT).contains(&y) {
            return;
        }
        for x in x.max(0)..x.saturating_add(length).min(WIDTH) {
            self.set_pixel(x, y, on);
        }
    }

    /// Draws `length` pixels downwards, starting at `(x, y)`.
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, length: i32, on: bool) {
        if !(0..WIDTH).contains(&x) {
            return;
        }
        for y in y.max(0)..y.saturating_add(length).min(HEIGHT) {
            self.set_pixel(x, y, on);
        }
    }

    /// Draws the one pixel wide outline of a rectangle whose top left corner is `(x, y)`.
    pub fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, on: bool) {
        let bottom = y.saturating_add(height).saturating_sub(1);
        let right = x.saturating_add(width).saturating_sub(1);

        self.draw_horizontal_line(x, y, width, on);
        self.draw_horizontal_line(x, bottom, width, on);
        self.draw_vertical_line(x, y, height, on);
        self.draw_vertical_line(right, y, height, on);
    }

    pub fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, on: bool) {
        for y in y.max(0)..y.saturating_add(height).min(HEIGHT) {
            self.draw_horizontal_line(x, y, width, on);
        }
    }

    /// Draws a circle outline around `(x0, y0)` using the midpoint circle algorithm.
    ///
    /// Circles whose outline misses the screen entirely return straight away, whatever their
    /// radius. Otherwise the work grows with the radius.
    pub fn draw_circle(&mut self, x0: i32, y0: i32, radius: i32, on: bool) {
        let (x0, y0, radius) = (x0 as i64, y0 as i64, radius as i64);

        let nearest = squared_distance(
            x0.clamp(0, WIDTH as i64 - 1) - x0,
            y0.clamp(0, HEIGHT as i64 - 1) - y0,
        );
        let farthest = squared_distance(
            x0.abs().max((x0 - (WIDTH as i64 - 1)).abs()),
            y0.abs().max((y0 - (HEIGHT as i64 - 1)).abs()),
        );
        let (inner, outer) = ((radius - 1).max(0) as i128, (radius + 1) as i128);
        if nearest > outer * outer || farthest < inner * inner {
            return;
        }

        let mut x = radius;
        let mut y = 0;
        let mut decision = 1 - x;

        while x >= y {
            // one point per octant
            for &(dx, dy) in &[
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.set_pixel_wide(x0 + dx, y0 + dy, on);
            }

            y += 1;
            if decision <= 0 {
                decision += 2 * y + 1;
            } else {
                x -= 1;
                decision += 2 * (y - x) + 1;
            }
        }
    }

    /// Fills every pixel whose distance to `(x0, y0)` is at most `radius`.
    pub fn fill_circle(&mut self, x0: i32, y0: i32, radius: i32, on: bool) {
        let (x0, y0, radius) = (x0 as i64, y0 as i64, radius as i64);
        let radius_squared = squared_distance(radius, 0);

        // only the part of the bounding box that is on screen
        for y in (y0 - radius).max(0)..=(y0 + radius).min(HEIGHT as i64 - 1) {
            for x in (x0 - radius).max(0)..=(x0 + radius).min(WIDTH as i64 - 1) {
                if squared_distance(x - x0, y - y0) <= radius_squared {
                    self.set_pixel_wide(x, y, on);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_clipped_at_the_edge() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_horizontal_line(-10, 10, 200, true);

        assert_eq!(bitmap.lit_pixels(), 128);
        assert!(bitmap.get_pixel(0, 10));
        assert!(bitmap.get_pixel(127, 10));
    }

    #[test]
    fn vertical_line() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_vertical_line(5, 60, 10, true);

        assert_eq!(bitmap.lit_pixels(), 4);
        assert!((60..64).all(|y| bitmap.get_pixel(5, y)));
    }

    #[test]
    fn rectangle_outline_has_hollow_inside() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_rectangle(0, 0, 128, 64, true);

        // corners are drawn twice, but only count once
        assert_eq!(bitmap.lit_pixels(), 2 * 128 + 2 * 64 - 4);
        assert!(bitmap.get_pixel(127, 63));
        assert!(!bitmap.get_pixel(1, 1));
    }

    #[test]
    fn filled_rectangle_can_be_erased() {
        let mut bitmap = OledBitmap::new();
        bitmap.fill_rectangle(10, 20, 30, 5, true);
        assert_eq!(bitmap.lit_pixels(), 150);

        bitmap.fill_rectangle(10, 20, 30, 5, false);
        assert_eq!(bitmap.lit_pixels(), 0);
    }

    #[test]
    fn circle_touches_its_extremes() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_circle(64, 32, 10, true);

        assert!(bitmap.get_pixel(74, 32));
        assert!(bitmap.get_pixel(54, 32));
        assert!(bitmap.get_pixel(64, 42));
        assert!(bitmap.get_pixel(64, 22));
        assert!(!bitmap.get_pixel(64, 32));
    }

    #[test]
    fn circle_overshooting_the_screen_is_fine() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_circle(0, 0, 100, true);
        bitmap.fill_circle(127, 63, 5, true);

        assert!(bitmap.get_pixel(127, 63));
        assert!(bitmap.get_pixel(122, 63));
        assert!(!bitmap.get_pixel(121, 63));
    }

    #[test]
    fn filled_circle_of_radius_one_is_a_plus() {
        let mut bitmap = OledBitmap::new();
        bitmap.fill_circle(20, 20, 1, true);

        assert_eq!(bitmap.lit_pixels(), 5);
        assert!(!bitmap.get_pixel(21, 21));
    }

    #[test]
    fn lines_near_the_integer_limits() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_horizontal_line(i32::MAX - 1, 0, 5, true);
        bitmap.draw_vertical_line(0, i32::MAX - 1, 5, true);
        bitmap.draw_horizontal_line(i32::MIN, 3, i32::MAX, true);
        bitmap.draw_vertical_line(3, i32::MIN, i32::MAX, true);
        bitmap.draw_horizontal_line(0, i32::MIN, i32::MAX, true);
        assert_eq!(bitmap.lit_pixels(), 0);

        bitmap.draw_horizontal_line(-5, 3, i32::MAX, true);
        assert_eq!(bitmap.lit_pixels(), 128);
        bitmap.draw_vertical_line(100, i32::MIN, i32::MAX, true);
        bitmap.draw_vertical_line(100, -5, i32::MAX, true);
        assert_eq!(bitmap.lit_pixels(), 128 + 63);
    }

    #[test]
    fn rectangles_near_the_integer_limits() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_rectangle(i32::MIN, i32::MIN, i32::MAX, i32::MAX, true);
        bitmap.draw_rectangle(i32::MAX, i32::MAX, i32::MAX, i32::MAX, true);
        bitmap.fill_rectangle(i32::MAX - 1, 0, 10, 10, true);
        assert_eq!(bitmap.lit_pixels(), 0);

        // the far edges are way off screen, the near ones are not
        bitmap.draw_rectangle(10, 10, i32::MAX, i32::MAX, true);
        assert_eq!(bitmap.lit_pixels(), 118 + 54 - 1);

        bitmap.fill_rectangle(-100, -100, i32::MAX, i32::MAX, true);
        assert_eq!(bitmap.lit_pixels(), 128 * 64);
    }

    #[test]
    fn huge_filled_circle_covers_the_screen() {
        let mut bitmap = OledBitmap::new();
        bitmap.fill_circle(64, 32, 50_000, true);
        assert_eq!(bitmap.lit_pixels(), 128 * 64);

        bitmap.fill_circle(0, 0, i32::MAX, false);
        assert_eq!(bitmap.lit_pixels(), 0);

        bitmap.fill_circle(i32::MIN, i32::MIN, i32::MAX, true);
        bitmap.fill_circle(i32::MAX, i32::MAX, i32::MAX, true);
        bitmap.fill_circle(64, 32, -3, true);
        assert_eq!(bitmap.lit_pixels(), 0);
    }

    #[test]
    fn outlines_missing_the_screen_draw_nothing() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_circle(64, 32, i32::MAX, true);
        bitmap.draw_circle(i32::MAX, 0, 10, true);
        bitmap.draw_circle(i32::MIN, i32::MIN, 1_000, true);
        bitmap.draw_circle(64, 32, 50_000, true);
        assert_eq!(bitmap.lit_pixels(), 0);

        // centre far off to the left, the arc passes through column 20
        bitmap.draw_circle(-100_000, 32, 100_020, true);
        assert!(bitmap.get_pixel(20, 32));
    }
}
