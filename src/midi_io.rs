use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};

use midir::{MidiInput, MidiInputConnection, MidiInputPort, MidiOutput, MidiOutputConnection};

use crate::MidiError;

/// Returns the first port whose name contains `keyword`. Ports whose name can't be read are
/// skipped.
fn guess_port<T: midir::MidiIO>(midi_io: &T, keyword: &str) -> Option<T::Port> {
    for port in midi_io.ports() {
        let name = match midi_io.port_name(&port) {
            Ok(name) => name,
            Err(_) => continue,
        };

        if name.contains(keyword) {
            log::debug!("Found MIDI port {:?} for keyword {:?}", name, keyword);
            return Some(port);
        }
    }

    None
}

/// A connection that MIDI bytes can be sent to.
pub trait OutputDevice
where
    Self: Sized,
{
    const MIDI_CONNECTION_NAME: &'static str;
    const MIDI_DEVICE_KEYWORD: &'static str;

    /// Initiate from an existing midir connection.
    fn from_connection(connection: MidiOutputConnection) -> Result<Self, MidiError>;

    /// Send a raw MIDI message, verbatim.
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError>;

    /// Search the MIDI devices and connect to the first output port matching
    /// `MIDI_DEVICE_KEYWORD`.
    fn guess() -> Result<Self, MidiError> {
        Self::guess_with_keyword(Self::MIDI_DEVICE_KEYWORD)
    }

    /// Like [`OutputDevice::guess`], but searches for a custom port name fragment. Useful when
    /// several Fires are connected, or the OS names the port differently.
    fn guess_with_keyword(keyword: &str) -> Result<Self, MidiError> {
        let midi_output = MidiOutput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_output, keyword).ok_or_else(|| MidiError::NoPortFound {
            keyword: keyword.to_owned(),
        })?;

        let connection = midi_output.connect(&port, Self::MIDI_CONNECTION_NAME)?;
        log::debug!("Connected output {:?}", Self::MIDI_CONNECTION_NAME);

        Self::from_connection(connection)
    }
}

/// Keeps a callback-driven input connection alive. Dropping it closes the connection.
pub struct InputDeviceHandler {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
}

/// Keeps a polling input connection alive, and hands out the messages that arrived on it.
pub struct InputDeviceHandlerPolling<Message> {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
    receiver: Receiver<Message>,
}

impl<Message> MsgPollingWrapper for InputDeviceHandlerPolling<Message> {
    type Message = Message;

    fn receiver(&self) -> &Receiver<Message> {
        &self.receiver
    }
}

/// Polling access to anything that receives messages over an mpsc channel.
///
/// All methods return `None` once the sender has hung up, i.e. when the MIDI connection is gone.
pub trait MsgPollingWrapper {
    type Message;

    fn receiver(&self) -> &Receiver<Self::Message>;

    /// Wait for a message to arrive, and return that. For a non-blocking variant, see
    /// `try_recv()`.
    fn recv(&self) -> Option<Self::Message> {
        self.receiver().recv().ok()
    }

    /// If there is a pending message, return that. Otherwise, return `None`.
    ///
    /// This function does not block.
    fn try_recv(&self) -> Option<Self::Message> {
        match self.receiver().try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("Polled a disconnected input channel");
                None
            }
        }
    }

    /// Receives a single message. If no message arrives within the timespan specified by
    /// `timeout`, `None` is returned.
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Self::Message> {
        match self.receiver().recv_timeout(timeout) {
            Ok(msg) => Some(msg),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                log::debug!("Polled a disconnected input channel");
                None
            }
        }
    }

    /// Returns an iterator over all arriving messages. The iterator will only return when the
    /// MIDI connection has been dropped.
    ///
    /// For an iteration method that doesn't block, see `iter_pending`.
    fn iter(&self) -> std::sync::mpsc::Iter<'_, Self::Message> {
        self.receiver().iter()
    }

    /// Returns an iterator over the currently pending messages.
    fn iter_pending(&self) -> std::sync::mpsc::TryIter<'_, Self::Message> {
        self.receiver().try_iter()
    }

    /// Discard any pending messages, e.g. pad presses that queued up before the application was
    /// ready. Returns the number of discarded messages.
    fn drain(&self) -> usize {
        self.iter_pending().count()
    }
}

/// A connection that MIDI messages arrive from, decoded into `Self::Message`.
pub trait InputDevice: 'static {
    const MIDI_CONNECTION_NAME: &'static str;
    const MIDI_DEVICE_KEYWORD: &'static str;
    type Message;

    fn decode_message(timestamp: u64, data: &[u8]) -> Self::Message;

    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn from_port<F>(
        midi_input: MidiInput,
        port: &MidiInputPort,
        mut user_callback: F,
    ) -> Result<InputDeviceHandler, MidiError>
    where
        F: FnMut(Self::Message) + Send + 'static,
    {
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut ()| {
            let msg = Self::decode_message(timestamp, data);
            (user_callback)(msg);
        };

        let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;
        log::debug!("Connected input {:?}", Self::MIDI_CONNECTION_NAME);

        Ok(InputDeviceHandler { connection })
    }

    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn from_port_polling(
        midi_input: MidiInput,
        port: &MidiInputPort,
    ) -> Result<InputDeviceHandlerPolling<Self::Message>, MidiError>
    where
        Self::Message: Send + 'static,
    {
        let (sender, receiver) = std::sync::mpsc::channel();
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut ()| {
            let msg = Self::decode_message(timestamp, data);
            if sender.send(msg).is_err() {
                log::debug!("Input poller was dropped, discarding message {:?}", data);
            }
        };

        let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;
        log::debug!("Connected polling input {:?}", Self::MIDI_CONNECTION_NAME);

        Ok(InputDeviceHandlerPolling { connection, receiver })
    }

    /// Search the MIDI devices and choose the first port matching `MIDI_DEVICE_KEYWORD`.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess<F>(user_callback: F) -> Result<InputDeviceHandler, MidiError>
    where
        F: FnMut(Self::Message) + Send + 'static,
    {
        Self::guess_with_keyword(Self::MIDI_DEVICE_KEYWORD, user_callback)
    }

    /// Like [`InputDevice::guess`], but searches for a custom port name fragment.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess_with_keyword<F>(keyword: &str, user_callback: F) -> Result<InputDeviceHandler, MidiError>
    where
        F: FnMut(Self::Message) + Send + 'static,
    {
        let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_input, keyword).ok_or_else(|| MidiError::NoPortFound {
            keyword: keyword.to_owned(),
        })?;

        Self::from_port(midi_input, &port, user_callback)
    }

    /// Search the MIDI devices and choose the first port matching `MIDI_DEVICE_KEYWORD`. Messages
    /// are retrieved through the returned handler.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess_polling() -> Result<InputDeviceHandlerPolling<Self::Message>, MidiError>
    where
        Self::Message: Send + 'static,
    {
        let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_input, Self::MIDI_DEVICE_KEYWORD).ok_or_else(|| {
            MidiError::NoPortFound {
                keyword: Self::MIDI_DEVICE_KEYWORD.to_owned(),
            }
        })?;

        Self::from_port_polling(midi_input, &port)
    }
}
