/// Everything that can go wrong while talking to the Fire over MIDI.
///
/// Note that none of the OLED bitmap operations can fail; this error type only covers the
/// transport.
#[derive(Debug)]
pub enum MidiError {
    InputConnectError(midir::ConnectError<midir::MidiInput>),
    OutputConnectError(midir::ConnectError<midir::MidiOutput>),
    InitError(midir::InitError),
    PortInfoError(midir::PortInfoError),
    /// A message was refused by the MIDI backend. `status` is its first byte, which tells an
    /// OLED frame (`0xF0`) from an LED update (`0xB0`).
    SendError {
        status: Option<u8>,
        source: midir::SendError,
    },
    NoPortFound {
        // The keyword that was searched for
        keyword: String,
    },
}

impl std::fmt::Display for MidiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputConnectError(_) => f.write_str("connecting to MIDI input port failed"),
            Self::OutputConnectError(_) => f.write_str("connecting to MIDI output port failed"),
            Self::InitError(_) => f.write_str("MIDI context initialization failed"),
            Self::PortInfoError(_) => f.write_str("MIDI port retrieval failed"),
            Self::SendError { status, .. } => {
                let what = match *status {
                    Some(0xF0) => "OLED frame",
                    Some(status) if status & 0xF0 == 0xB0 => "LED update",
                    _ => "raw MIDI message",
                };
                match *status {
                    Some(status) => write!(f, "the Fire refused the {} ({:#04X} ...)", what, status),
                    None => write!(f, "the Fire refused an empty {}", what),
                }
            }
            Self::NoPortFound { keyword } => {
                write!(f, "couldn't find a MIDI port matching {:?} - is the Fire plugged in?", keyword)
            }
        }
    }
}

impl std::error::Error for MidiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputConnectError(e) => Some(e),
            Self::OutputConnectError(e) => Some(e),
            Self::InitError(e) => Some(e),
            Self::PortInfoError(e) => Some(e),
            Self::SendError { source, .. } => Some(source),
            Self::NoPortFound { .. } => None,
        }
    }
}

impl From<midir::ConnectError<midir::MidiInput>> for MidiError {
    fn from(e: midir::ConnectError<midir::MidiInput>) -> Self {
        Self::InputConnectError(e)
    }
}

impl From<midir::ConnectError<midir::MidiOutput>> for MidiError {
    fn from(e: midir::ConnectError<midir::MidiOutput>) -> Self {
        Self::OutputConnectError(e)
    }
}

impl From<midir::InitError> for MidiError {
    fn from(e: midir::InitError) -> Self {
        Self::InitError(e)
    }
}

impl From<midir::PortInfoError> for MidiError {
    fn from(e: midir::PortInfoError) -> Self {
        Self::PortInfoError(e)
    }
}

impl MidiError {
    /// Wraps a failed send of `bytes`.
    pub(crate) fn send_failed(bytes: &[u8], source: midir::SendError) -> Self {
        Self::SendError { status: bytes.first().copied(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_port_found_names_the_keyword() {
        let err = MidiError::NoPortFound { keyword: "FL STUDIO FIRE".to_owned() };
        assert!(err.to_string().contains("\"FL STUDIO FIRE\""));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn send_error_tells_which_message_failed() {
        let frame = crate::OledBitmap::new().encode();
        let err = MidiError::send_failed(&frame, midir::SendError::Other("gone"));
        assert_eq!(err.to_string(), "the Fire refused the OLED frame (0xF0 ...)");
        assert!(std::error::Error::source(&err).is_some());

        let err = MidiError::send_failed(&[0xB0, 0x1B, 0x10], midir::SendError::Other("gone"));
        assert_eq!(err.to_string(), "the Fire refused the LED update (0xB0 ...)");

        let err = MidiError::send_failed(&[], midir::SendError::InvalidData("empty"));
        assert_eq!(err.to_string(), "the Fire refused an empty raw MIDI message");
    }
}
