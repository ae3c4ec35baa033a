//! Writes some text onto the OLED using embedded-graphics, then listens for pad presses and
//! draws a dot for each one.

use akai_fire::{Dispatcher, OledBitmap, Output, OutputDevice as _};
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut output = Output::guess()?;
    let mut bitmap = OledBitmap::new();

    Rectangle::new(Point::zero(), Size::new(128, 64))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut bitmap)?;
    Text::new("Hello Fire", Point::new(34, 20), MonoTextStyle::new(&FONT_6X10, BinaryColor::On))
        .draw(&mut bitmap)?;
    output.send_bitmap(&bitmap)?;

    let (sender, receiver) = std::sync::mpsc::channel();
    let mut dispatcher = Dispatcher::new();
    dispatcher.on_any_pad(move |pad| {
        let _ = sender.send(pad);
    });
    let _input = dispatcher.listen()?;

    for pad in receiver.iter() {
        // the pads are a 16x4 grid, so every pad gets an 8x8 cell below the text
        let x = pad.column() as i32 * 8 + 4;
        let y = 32 + pad.row() as i32 * 8;
        bitmap.toggle_pixel(x, y);
        output.send_bitmap(&bitmap)?;
    }

    Ok(())
}
