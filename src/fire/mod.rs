/*!
# Akai Fire low-level API

The Fire has 64 RGB pads in 4 rows of 16, 20 buttons with single or dual color LEDs, four
touch-sensitive rotary encoders plus the "Select" encoder, four track LEDs next to the pad rows,
the control bank LEDs and a 128x64 monochrome OLED (see [`crate::oled`]).

Every method of [`Output`] corresponds to exactly one MIDI message, unless noted otherwise.
*/

mod input;
pub use input::*;

mod output;
pub use output::*;

/// The note number of the top left pad. The other pads follow row by row.
const FIRST_PAD_NOTE: u8 = 54;

/// One of the 64 pads, indexed row by row from the top left.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pad(u8);

impl Pad {
    pub const COUNT: u8 = 64;
    pub const ROWS: u8 = 4;
    pub const COLUMNS: u8 = 16;

    /// Panics if `index` is not below 64.
    pub fn new(index: u8) -> Self {
        assert!(index < Self::COUNT, "Pad index {} out of range", index);
        Self(index)
    }

    /// Panics if the coordinates are outside of the 16x4 pad grid.
    pub fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < Self::COLUMNS && y < Self::ROWS, "Pad ({}|{}) out of range", x, y);
        Self(y * Self::COLUMNS + x)
    }

    /// The pad belonging to a MIDI note number, if any.
    pub fn from_note(note: u8) -> Option<Self> {
        match note.checked_sub(FIRST_PAD_NOTE) {
            Some(index) if index < Self::COUNT => Some(Self(index)),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn note(self) -> u8 {
        FIRST_PAD_NOTE + self.0
    }

    /// Row from the top, 0 to 3
    pub fn row(self) -> u8 {
        self.0 / Self::COLUMNS
    }

    /// Column from the left, 0 to 15
    pub fn column(self) -> u8 {
        self.0 % Self::COLUMNS
    }

    /// Iterates over all 64 pads, row by row
    pub fn all() -> impl Iterator<Item = Pad> {
        (0..Self::COUNT).map(Pad)
    }
}

/// The buttons that carry an LED. Their LEDs are addressed with the same number that their
/// presses are reported with.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Button {
    Step,
    Note,
    Drum,
    Perform,
    Shift,
    Alt,
    Pattern,
    Play,
    Stop,
    Rec,
    Bank,
    Browser,
    /// The mute/solo button next to one of the four pad rows, 0 being the top one.
    ///
    /// Only rows 0 to 3 exist. [`Button::solo`] checks that on construction, and
    /// [`Button::code`] panics on anything else.
    Solo(u8),
    PatternUp,
    PatternDown,
    GridLeft,
    GridRight,
}

impl Button {
    /// Every button, in the order the LEDs are cleared in
    pub const ALL: [Button; 20] = [
        Button::Step,
        Button::Note,
        Button::Drum,
        Button::Perform,
        Button::Shift,
        Button::Alt,
        Button::Pattern,
        Button::Play,
        Button::Stop,
        Button::Rec,
        Button::Bank,
        Button::Browser,
        Button::Solo(0),
        Button::Solo(1),
        Button::Solo(2),
        Button::Solo(3),
        Button::PatternUp,
        Button::PatternDown,
        Button::GridLeft,
        Button::GridRight,
    ];

    /// Panics if `row` is not below 4.
    pub fn solo(row: u8) -> Self {
        assert!(row < 4, "Solo button index {} out of range", row);
        Button::Solo(row)
    }

    /// The note (for presses) and controller number (for the LED) of this button.
    ///
    /// Panics for a [`Button::Solo`] row above 3.
    pub fn code(self) -> u8 {
        match self {
            Button::Bank => 0x1A,
            Button::PatternUp => 0x1F,
            Button::PatternDown => 0x20,
            Button::Browser => 0x21,
            Button::GridLeft => 0x22,
            Button::GridRight => 0x23,
            Button::Solo(row @ 0..=3) => 0x24 + row,
            Button::Solo(row) => panic!("Invalid solo button state (this is a bug) {}", row),
            Button::Step => 0x2C,
            Button::Note => 0x2D,
            Button::Drum => 0x2E,
            Button::Perform => 0x2F,
            Button::Shift => 0x30,
            Button::Alt => 0x31,
            Button::Pattern => 0x32,
            Button::Play => 0x33,
            Button::Stop => 0x34,
            Button::Rec => 0x35,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x1A => Button::Bank,
            0x1F => Button::PatternUp,
            0x20 => Button::PatternDown,
            0x21 => Button::Browser,
            0x22 => Button::GridLeft,
            0x23 => Button::GridRight,
            0x24..=0x27 => Button::Solo(code - 0x24),
            0x2C => Button::Step,
            0x2D => Button::Note,
            0x2E => Button::Drum,
            0x2F => Button::Perform,
            0x30 => Button::Shift,
            0x31 => Button::Alt,
            0x32 => Button::Pattern,
            0x33 => Button::Play,
            0x34 => Button::Stop,
            0x35 => Button::Rec,
            _ => return None,
        })
    }
}

/// The rotary encoders. Each of them reports turns as well as touches.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotary {
    Volume,
    Pan,
    Filter,
    Resonance,
    Select,
}

impl Rotary {
    pub const ALL: [Rotary; 5] = [
        Rotary::Volume,
        Rotary::Pan,
        Rotary::Filter,
        Rotary::Resonance,
        Rotary::Select,
    ];

    pub fn code(self) -> u8 {
        match self {
            Rotary::Volume => 0x10,
            Rotary::Pan => 0x11,
            Rotary::Filter => 0x12,
            Rotary::Resonance => 0x13,
            Rotary::Select => 0x76,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x10 => Some(Rotary::Volume),
            0x11 => Some(Rotary::Pan),
            0x12 => Some(Rotary::Filter),
            0x13 => Some(Rotary::Resonance),
            0x76 => Some(Rotary::Select),
            _ => None,
        }
    }
}
