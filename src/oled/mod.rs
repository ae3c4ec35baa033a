/*!
# The Fire's 128x64 monochrome OLED

The display controller doesn't take a plain row-major bitmap. Pixels are grouped into 8-row tall
bands (the controller's memory pages), every band is cut into 7 pixel wide strips, and the 56
pixels of a strip are scattered over 8 bytes of 7 bits each in a fixed diagonal order. The
[`OledBitmap`] hides all of that: draw with [`OledBitmap::set_pixel`] and ship the result with
[`OledBitmap::encode`], or hand the bitmap to [`Output::send_bitmap`](crate::Output::send_bitmap).

```no_run
use akai_fire::{OledBitmap, Output, OutputDevice as _};

let mut output = Output::guess()?;
let mut bitmap = OledBitmap::new();

// A frame around the screen
bitmap.draw_rectangle(0, 0, 128, 64, true);
output.send_bitmap(&bitmap)?;
# Ok::<(), akai_fire::MidiError>(())
```
*/

mod draw;

#[cfg(feature = "embedded-graphics")]
mod graphics;

/// Width of the OLED in pixels
pub const WIDTH: i32 = 128;
/// Height of the OLED in pixels
pub const HEIGHT: i32 = 64;

/// Number of bytes in the packed bitmap: `ceil(128 * 64 / 7)`, as every byte carries 7 pixels.
pub const BITMAP_SIZE: usize = 1171;

/// Number of bytes in an encoded OLED write message.
pub const FRAME_SIZE: usize = HEADER_SIZE + BITMAP_SIZE + 1;

/// Rows of a band. The display controller pages its memory in units of this height.
const BAND_HEIGHT: i32 = 8;

/// Width of the strips that the bits of a band are interleaved over.
const STRIP_WIDTH: i32 = 7;

/// Where the bit for a pixel lives within its strip, indexed by `[strip column][band row]`.
/// Fixed by the display firmware.
const BIT_MUTATE: [[u8; 8]; 7] = [
    [13, 0, 1, 2, 3, 4, 5, 6],
    [19, 20, 7, 8, 9, 10, 11, 12],
    [25, 26, 27, 14, 15, 16, 17, 18],
    [31, 32, 33, 34, 21, 22, 23, 24],
    [37, 38, 39, 40, 41, 28, 29, 30],
    [43, 44, 45, 46, 47, 48, 35, 36],
    [49, 50, 51, 52, 53, 54, 55, 42],
];

/// The bitmap plus the band and column extents it covers
const PAYLOAD_LENGTH: usize = BITMAP_SIZE + 4;

const HEADER_SIZE: usize = 11;

const HEADER: [u8; HEADER_SIZE] = [
    0xF0, // SysEx start
    0x47, // Akai manufacturer id
    0x7F, // all-call address
    0x43, // Fire product id
    0x0E, // OLED write
    ((PAYLOAD_LENGTH >> 7) & 0x7F) as u8,
    (PAYLOAD_LENGTH & 0x7F) as u8,
    0x00, // first band
    0x07, // last band
    0x00, // first column
    0x7F, // last column
];

const SYSEX_END: u8 = 0xF7;

/// A full-screen frame for the Fire's OLED, stored in the device's native packed format.
///
/// The bitmap always has exactly [`BITMAP_SIZE`] bytes, and only the lower 7 bits of each byte are
/// ever used. Drawing outside the screen is silently ignored, so rasterizers may overshoot the
/// edges freely.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OledBitmap {
    bytes: [u8; BITMAP_SIZE],
}

impl Default for OledBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OledBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OledBitmap")
            .field("lit_pixels", &self.lit_pixels())
            .finish()
    }
}

/// Byte index and bit index of the pixel at `(x, y)`. Coordinates must be on screen.
fn locate(x: i32, y: i32) -> (usize, u8) {
    debug_assert!(is_on_screen(x, y));

    // lay the bands out next to each other, so that the screen becomes 1024x8
    let x = (x + WIDTH * (y / BAND_HEIGHT)) as usize;
    let y = (y % BAND_HEIGHT) as usize;

    let remapped_bit = BIT_MUTATE[x % STRIP_WIDTH as usize][y] as usize;
    let index = (x / STRIP_WIDTH as usize) * 8 + remapped_bit / 7;

    (index, (remapped_bit % 7) as u8)
}

fn is_on_screen(x: i32, y: i32) -> bool {
    (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y)
}

impl OledBitmap {
    /// Creates a blank bitmap, all pixels off.
    pub fn new() -> Self {
        Self {
            bytes: [0; BITMAP_SIZE],
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.bytes = [0; BITMAP_SIZE];
    }

    /// Turns the pixel at `(x, y)` on or off. Coordinates outside of the 128x64 screen are
    /// ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if !is_on_screen(x, y) {
            return;
        }

        let (index, bit) = locate(x, y);
        if on {
            self.bytes[index] |= 1 << bit;
        } else {
            self.bytes[index] &= !(1 << bit);
        }
    }

    /// Returns whether the pixel at `(x, y)` is lit. Pixels off screen are never lit.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        if !is_on_screen(x, y) {
            return false;
        }

        let (index, bit) = locate(x, y);
        self.bytes[index] & (1 << bit) != 0
    }

    /// Flips the pixel at `(x, y)`. Coordinates outside of the screen are ignored.
    pub fn toggle_pixel(&mut self, x: i32, y: i32) {
        let lit = self.get_pixel(x, y);
        self.set_pixel(x, y, !lit);
    }

    /// Number of pixels that are currently on
    pub fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|byte| (byte & 0x7F).count_ones()).sum()
    }

    /// The packed pixel data, as it appears in the middle of an encoded frame.
    pub fn packed(&self) -> &[u8; BITMAP_SIZE] {
        &self.bytes
    }

    /// Builds the complete SysEx message that writes this bitmap to the whole screen.
    ///
    /// The returned frame is a copy; drawing the next frame into this bitmap doesn't affect it.
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        let mut frame = [0; FRAME_SIZE];

        frame[..HEADER_SIZE].copy_from_slice(&HEADER);
        frame[HEADER_SIZE..HEADER_SIZE + BITMAP_SIZE].copy_from_slice(&self.bytes);
        frame[FRAME_SIZE - 1] = SYSEX_END;

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(frame: &[u8; FRAME_SIZE]) -> &[u8] {
        &frame[11..1182]
    }

    #[test]
    fn frame_layout() {
        let frame = OledBitmap::new().encode();

        assert_eq!(frame.len(), 1183);
        assert_eq!(
            frame[..11],
            [0xF0_u8, 0x47, 0x7F, 0x43, 0x0E, 0x09, 0x17, 0x00, 0x07, 0x00, 0x7F]
        );
        assert_eq!(payload(&frame).len(), BITMAP_SIZE);
        assert!(payload(&frame).iter().all(|&byte| byte == 0));
        assert_eq!(frame[1182], 0xF7);
    }

    #[test]
    fn top_left_pixel() {
        let mut bitmap = OledBitmap::new();
        bitmap.set_pixel(0, 0, true);
        let frame = bitmap.encode();

        // BIT_MUTATE[0][0] is 13: byte 13 / 7 = 1, bit 13 % 7 = 6
        let payload = payload(&frame);
        assert_eq!(payload[1], 0b0100_0000);
        assert_eq!(payload.iter().filter(|&&byte| byte != 0).count(), 1);
    }

    #[test]
    fn second_band_starts_a_new_run_of_strips() {
        let mut bitmap = OledBitmap::new();
        bitmap.set_pixel(0, 8, true);

        // x' = 128, strip 18 (128 / 7), strip column 2, row 0 -> rb 25
        assert_eq!(bitmap.packed()[18 * 8 + 3], 1 << 4);
        assert_eq!(bitmap.lit_pixels(), 1);
    }

    #[test]
    fn bottom_right_pixel_stays_inside_the_buffer() {
        let mut bitmap = OledBitmap::new();
        bitmap.set_pixel(127, 63, true);

        // x' = 1023, strip 146, strip column 1, row 7 -> rb 12
        assert_eq!(bitmap.packed()[146 * 8 + 1], 1 << 5);
        assert!(bitmap.get_pixel(127, 63));
    }

    #[test]
    fn off_screen_pixels_are_ignored() {
        let mut bitmap = OledBitmap::new();
        let before = bitmap.encode();

        for &(x, y) in &[(-1, 0), (0, -1), (128, 0), (0, 64), (i32::MIN, i32::MAX), (500, 500)] {
            bitmap.set_pixel(x, y, true);
            bitmap.toggle_pixel(x, y);
            assert!(!bitmap.get_pixel(x, y));
        }

        assert_eq!(bitmap.encode()[..], before[..]);
    }

    #[test]
    fn clear_resets_everything() {
        let blank = OledBitmap::new().encode();

        let mut bitmap = OledBitmap::new();
        bitmap.fill_rectangle(10, 10, 50, 30, true);
        bitmap.clear();
        assert_eq!(bitmap.encode()[..], blank[..]);

        bitmap.clear();
        assert_eq!(bitmap.encode()[..], blank[..]);
    }

    #[test]
    fn set_then_unset_restores_blank_frame() {
        let blank = OledBitmap::new().encode();
        let mut bitmap = OledBitmap::new();

        for y in (0..HEIGHT).step_by(5) {
            for x in (0..WIDTH).step_by(3) {
                bitmap.set_pixel(x, y, true);
                assert!(bitmap.get_pixel(x, y));
                bitmap.set_pixel(x, y, false);
                assert_eq!(bitmap.encode()[..], blank[..], "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn unsetting_leaves_neighbours_alone() {
        let mut bitmap = OledBitmap::new();
        bitmap.fill_rectangle(0, 0, 14, 8, true);
        bitmap.set_pixel(3, 4, false);

        assert_eq!(bitmap.lit_pixels(), 14 * 8 - 1);
        assert!(!bitmap.get_pixel(3, 4));
        assert!(bitmap.get_pixel(2, 4));
        assert!(bitmap.get_pixel(3, 3));
    }

    #[test]
    fn every_pixel_gets_its_own_bit() {
        let mut bitmap = OledBitmap::new();

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert!(!bitmap.get_pixel(x, y), "pixel ({}, {}) collides", x, y);
                let lit_before = bitmap.lit_pixels();
                bitmap.set_pixel(x, y, true);
                assert_eq!(bitmap.lit_pixels(), lit_before + 1);
            }
        }

        let popcount: u32 = bitmap.packed().iter().map(|byte| (byte & 0x7F).count_ones()).sum();
        assert_eq!(popcount, 128 * 64);
    }

    #[test]
    fn full_frame_is_valid_sysex() {
        let mut bitmap = OledBitmap::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                bitmap.set_pixel(x, y, true);
            }
        }
        let frame = bitmap.encode();

        assert_eq!(frame[0], 0xF0);
        assert_eq!(frame[FRAME_SIZE - 1], 0xF7);
        assert!(frame[1..FRAME_SIZE - 1].iter().all(|&byte| byte <= 0x7F));
    }

    #[test]
    fn encoding_is_deterministic_and_detached() {
        let mut bitmap = OledBitmap::new();
        bitmap.draw_circle(64, 32, 20, true);

        let first = bitmap.encode();
        let second = bitmap.encode();
        assert_eq!(first[..], second[..]);

        bitmap.clear();
        assert_eq!(first[..], second[..]);
        assert_ne!(bitmap.encode()[..], first[..]);
    }

    #[test]
    fn mapping_table_is_a_permutation() {
        let mut seen = [false; 56];
        for row in BIT_MUTATE.iter() {
            for &rb in row.iter() {
                assert!(!seen[rb as usize]);
                seen[rb as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
