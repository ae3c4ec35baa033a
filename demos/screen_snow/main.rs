//! Lets snow fall on the OLED until interrupted.

use akai_fire::{oled, OledBitmap, Output, OutputDevice as _};
use nanorand::{Rng, WyRand};

const FLAKES: usize = 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut output = Output::guess()?;
    let mut rng = WyRand::new();
    let mut bitmap = OledBitmap::new();

    let mut flakes: Vec<(i32, i32)> = (0..FLAKES)
        .map(|_| (rng.generate_range(0..oled::WIDTH), rng.generate_range(0..oled::HEIGHT)))
        .collect();

    loop {
        bitmap.clear();
        for flake in &mut flakes {
            flake.1 += 1;
            flake.0 += rng.generate_range(-1_i32..=1);
            if flake.1 >= oled::HEIGHT {
                *flake = (rng.generate_range(0..oled::WIDTH), 0);
            }
            bitmap.set_pixel(flake.0, flake.1, true);
        }
        // a little pile of snow at the bottom
        bitmap.fill_rectangle(0, oled::HEIGHT - 2, oled::WIDTH, 2, true);

        output.send_bitmap(&bitmap)?;
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}
