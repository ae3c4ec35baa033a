use midir::MidiOutputConnection;

use super::Button;
use crate::{OledBitmap, OutputDevice};

const CONTROL_CHANGE: u8 = 0xB0;
/// Controller number of the first track LED; the other three follow
const FIRST_TRACK_LED: u8 = 0x28;
const CONTROL_BANK_LEDS: u8 = 0x1B;

/// The state of a button LED.
///
/// What the values look like depends on the button: single color buttons know [`Self::OFF`],
/// [`Self::DULL`] and [`Self::HIGH`], while dual color buttons (like Play or the pattern buttons)
/// also accept 3 and 4, which select their second color.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonLed(u8);

impl ButtonLed {
    pub const OFF: ButtonLed = ButtonLed(0);
    pub const DULL: ButtonLed = ButtonLed(1);
    pub const HIGH: ButtonLed = ButtonLed(2);

    /// Panics if `value` is above 4.
    pub fn new(value: u8) -> Self {
        assert!(value <= 4, "Invalid button LED value {}", value);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for ButtonLed {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

/// The state of one of the four track LEDs left of the pad rows.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackLed {
    Off,
    DullRed,
    DullGreen,
    HighRed,
    HighGreen,
}

impl TrackLed {
    fn code(self) -> u8 {
        match self {
            TrackLed::Off => 0,
            TrackLed::DullRed => 1,
            TrackLed::DullGreen => 2,
            TrackLed::HighRed => 3,
            TrackLed::HighGreen => 4,
        }
    }
}

/// Which of the control bank LEDs (Channel, Mixer, User 1, User 2) are lit.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlBankLeds(u8);

impl ControlBankLeds {
    pub const OFF: ControlBankLeds = ControlBankLeds(0x00);
    pub const CHANNEL: ControlBankLeds = ControlBankLeds(0x01);
    pub const MIXER: ControlBankLeds = ControlBankLeds(0x02);
    pub const USER_1: ControlBankLeds = ControlBankLeds(0x03);
    pub const USER_2: ControlBankLeds = ControlBankLeds(0x04);
    pub const ALL: ControlBankLeds = ControlBankLeds(0x1F);

    /// Panics if `state` is above 0x1F.
    pub fn from_byte(state: u8) -> Self {
        assert!(state <= 0x1F, "Invalid control bank LED state {}", state);
        Self(state)
    }

    pub fn byte(self) -> u8 {
        self.0
    }
}

fn button_led_message(button: Button, led: ButtonLed) -> [u8; 3] {
    [CONTROL_CHANGE, button.code(), led.value()]
}

fn track_led_message(track: u8, led: TrackLed) -> [u8; 3] {
    assert!(track < 4, "Track index {} out of range", track);
    [CONTROL_CHANGE, FIRST_TRACK_LED + track, led.code()]
}

fn control_bank_message(leds: ControlBankLeds) -> [u8; 3] {
    [CONTROL_CHANGE, CONTROL_BANK_LEDS, leds.byte()]
}

/// The Fire output connection handler.
pub struct Output {
    connection: MidiOutputConnection,
}

impl crate::OutputDevice for Output {
    const MIDI_CONNECTION_NAME: &'static str = "Akai Fire output";
    const MIDI_DEVICE_KEYWORD: &'static str = "FL STUDIO FIRE";

    fn from_connection(connection: MidiOutputConnection) -> Result<Self, crate::MidiError> {
        Ok(Self { connection })
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), crate::MidiError> {
        log::trace!("Sending {} bytes: {:02X?}", bytes.len(), &bytes[..bytes.len().min(11)]);
        self.connection
            .send(bytes)
            .map_err(|e| crate::MidiError::send_failed(bytes, e))
    }
}

impl Output {
    /// Sets the LED of `button`.
    ///
    /// For example to light the Play button brightly:
    /// ```no_run
    /// # use akai_fire::{Button, ButtonLed};
    /// # let mut output: akai_fire::Output = unimplemented!();
    /// output.set_button_led(Button::Play, ButtonLed::HIGH)?;
    /// # Ok::<(), akai_fire::MidiError>(())
    /// ```
    pub fn set_button_led(&mut self, button: Button, led: ButtonLed) -> Result<(), crate::MidiError> {
        self.send(&button_led_message(button, led))
    }

    /// Turns off the LEDs of all 20 buttons. Sends one message per button.
    pub fn clear_all_button_leds(&mut self) -> Result<(), crate::MidiError> {
        for &button in Button::ALL.iter() {
            self.set_button_led(button, ButtonLed::OFF)?;
        }
        Ok(())
    }

    /// Sets the rectangular LED next to a pad row. `track` is 0 for the top row, up to 3.
    pub fn set_track_led(&mut self, track: u8, led: TrackLed) -> Result<(), crate::MidiError> {
        self.send(&track_led_message(track, led))
    }

    /// Sets the control bank LEDs above the rotary encoders.
    pub fn set_control_bank_leds(&mut self, leds: ControlBankLeds) -> Result<(), crate::MidiError> {
        self.send(&control_bank_message(leds))
    }

    /// Writes `bitmap` to the entire OLED.
    pub fn send_bitmap(&mut self, bitmap: &OledBitmap) -> Result<(), crate::MidiError> {
        self.send(&bitmap.encode())
    }

    /// Turns off every LED this crate can address and blanks the OLED.
    pub fn reset(&mut self) -> Result<(), crate::MidiError> {
        self.clear_all_button_leds()?;
        for track in 0..4 {
            self.set_track_led(track, TrackLed::Off)?;
        }
        self.set_control_bank_leds(ControlBankLeds::OFF)?;
        self.send_bitmap(&OledBitmap::new())
    }
}
