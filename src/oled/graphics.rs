use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, Pixel};

use super::{OledBitmap, HEIGHT, WIDTH};

impl OriginDimensions for OledBitmap {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

/// Lets `embedded-graphics` render shapes, text and images onto the OLED.
///
/// ```no_run
/// use akai_fire::OledBitmap;
/// use embedded_graphics::{
///     mono_font::{ascii::FONT_6X10, MonoTextStyle},
///     pixelcolor::BinaryColor,
///     prelude::*,
///     text::Text,
/// };
///
/// let mut bitmap = OledBitmap::new();
/// Text::new("Hello Fire", Point::new(20, 20), MonoTextStyle::new(&FONT_6X10, BinaryColor::On))
///     .draw(&mut bitmap)?;
/// # Ok::<(), core::convert::Infallible>(())
/// ```
impl DrawTarget for OledBitmap {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        match color {
            BinaryColor::Off => OledBitmap::clear(self),
            BinaryColor::On => self.fill_rectangle(0, 0, WIDTH, HEIGHT, true),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        primitives::{Line, PrimitiveStyle, Rectangle},
        prelude::*,
    };

    use super::*;

    #[test]
    fn primitives_land_on_the_bitmap() {
        let mut bitmap = OledBitmap::new();

        Line::new(Point::new(0, 0), Point::new(127, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut bitmap)
            .unwrap();
        assert_eq!(bitmap.lit_pixels(), 128);

        // partially off screen
        Rectangle::new(Point::new(120, 60), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut bitmap)
            .unwrap();
        assert_eq!(bitmap.lit_pixels(), 128 + 8 * 4);
    }

    #[test]
    fn clear_with_color() {
        let mut bitmap = OledBitmap::new();

        DrawTarget::clear(&mut bitmap, BinaryColor::On).unwrap();
        assert_eq!(bitmap.lit_pixels(), 128 * 64);

        DrawTarget::clear(&mut bitmap, BinaryColor::Off).unwrap();
        assert_eq!(bitmap.lit_pixels(), 0);
        assert_eq!(bitmap.size(), Size::new(128, 64));
    }
}
