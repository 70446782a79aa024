#![cfg_attr(not(test), no_std)]
//! GXHT30 driver.
//!
//! Example:
//!
//!     # use embedded_hal_mock::eh1::delay::NoopDelay as MockDelay;
//!     # use embedded_hal_mock::eh1::i2c::Mock as I2cMock;
//!     # use embedded_hal_mock::eh1::i2c::Transaction;
//!     # use gxht30_driver::{Command, Gxht30, Repeatability, SENSOR_ADDRESS};
//!     # let expectations = vec![
//!     #     // Single-shot measurement, high repeatability, clock stretching
//!     #     // enabled (command word 0x2C06).
//!     #     Transaction::write(SENSOR_ADDRESS, vec![0x2C, 0x06]),
//!     #     // The sensor answers with six bytes: temperature word, CRC,
//!     #     // humidity word, CRC. These are taken from a run of the sensor.
//!     #     Transaction::read(
//!     #         SENSOR_ADDRESS,
//!     #         vec![
//!     #             0x65, // temperature MSB
//!     #             0x48, // temperature LSB - raw word 0x6548 is 24C
//!     #             0x27, // CRC over 0x65, 0x48
//!     #             0x9F, // humidity MSB
//!     #             0x5C, // humidity LSB - raw word 0x9F5C is 62%
//!     #             0x56, // CRC over 0x9F, 0x5C
//!     #         ],
//!     #     ),
//!     # ];
//!     # let mock_i2c = I2cMock::new(&expectations);
//!     # let mut mock_handle = mock_i2c.clone();
//!     # let mut delay = MockDelay::new();
//!     let mut gxht30 = Gxht30::new(mock_i2c, SENSOR_ADDRESS);
//!     gxht30.send(Command::SingleShot(Repeatability::High), &mut delay).unwrap();
//!     let measurement = gxht30.measure(&mut delay);
//!
//!     println!("temperature (gxht30): {}C", measurement.temperature.unwrap());
//!     println!("humidity (gxht30): {}%", measurement.humidity.unwrap());
//!     # mock_handle.done();
//!
//! The GXHT30 is a digital humidity and temperature sensor speaking the same
//! command vocabulary as the Sensirion SHT3x family: every request is a
//! 16-bit command word transmitted most-significant byte first, and every
//! answer is a sequence of 16-bit big-endian words, each followed by an
//! 8-bit CRC.
//!
//! The sensor has two acquisition modes and the driver tracks which one is
//! active, because the bus sequence for a measurement differs between them:
//!
//! ```text
//!                      ┌────────────────────────────┐
//!        ┌────────────►│            Idle            │
//!        │             └────────────────────────────┘
//!        │      periodic command │
//!        │   (stretching forced  │
//!        │              off)     ▼
//!        │             ┌────────────────────────────┐
//!        └─────────────│          Periodic          │◄────────────┐
//!  other command:      └────────────────────────────┘             │
//!  Break, settle 16 ms,             │ heater / status command:    │
//!  send command                     │ Break, settle 16 ms,        │
//!                                   │ send command,               │
//!                                   └─ re-send periodic command ──┘
//! ```
//!
//! In periodic (continuous acquisition) mode the sensor samples on its own
//! and a measurement is collected by first sending [`Command::FetchData`].
//! Outside periodic mode a single-shot command starts one conversion; with a
//! clock-stretched single-shot command (the `0x2C` family) the sensor holds
//! the clock line during the read until the conversion finishes, so no fetch
//! or polling step is needed.
//!
//! Periodic acquisition and clock stretching are mutually exclusive sensor
//! behaviors. Leaving periodic mode requires a [`Command::Break`] followed
//! by a short settle window before the sensor accepts the next command.
//! Heater and status register commands issued while periodic acquisition is
//! running are transient: the driver stops acquisition, issues them, and
//! re-arms the previous periodic command so acquisition continues
//! afterwards.
//!
//! Corrupted sensor data is not an error. Each 16-bit field is validated
//! against its CRC independently, and a field that fails validation is
//! reported as the invalid-data marker (`0xFFFF` raw, `None` converted). A
//! measurement can therefore come back with one usable field and one
//! invalid field. Only command transmission reports bus errors.

use crc_any::CRCu8;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// GXHT30 sensor's default I2C address, ADDR pin pulled low.
pub const SENSOR_ADDRESS: u8 = 0x44;

/// GXHT30 sensor's alternate I2C address, ADDR pin pulled high.
pub const SENSOR_ADDRESS_ALT: u8 = 0x45;

/// Marker for a 16-bit field that failed validation.
///
/// Raw readings carry this value in place of data that did not pass the CRC
/// check. The conversion accessors never convert it.
pub const INVALID_WORD: u16 = 0xFFFF;

/// Byte pattern the frame buffers are initialized to and overwritten with
/// when a field is invalidated.
const INVALID_BYTE: u8 = 0xFF;

/// Settle window after stopping periodic acquisition, in milliseconds.
///
/// The sensor ignores commands sent too soon after a Break; this window
/// gives it time to finish the mode change before the next command word
/// arrives.
const MODE_SWITCH_SETTLE_MS: u32 = 16;

/// Measurement repeatability of a conversion.
///
/// Higher repeatability means lower noise at the cost of a longer
/// conversion time and more energy per measurement. See the single-shot
/// command table in the datasheet.
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeatability {
    Low,
    Medium,
    High,
}

/// Sampling rate of periodic acquisition mode.
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    /// One measurement every two seconds.
    Half,
    /// One measurement per second.
    One,
    /// Two measurements per second.
    Two,
    /// Four measurements per second.
    Four,
    /// Ten measurements per second.
    Ten,
}

/// Commands understood by the GXHT30 sensor.
///
/// Every command is one 16-bit word from the datasheet's command tables.
/// The most significant byte selects the command family, the least
/// significant byte the variant within it. `SingleShot` commands (the
/// `0x2C` family) make the sensor stretch the clock during the following
/// read; `SingleShotPolling` commands (the `0x24` family) do not, the
/// caller waits out the conversion instead. `Periodic` and `PeriodicArt`
/// start continuous acquisition.
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One conversion, the sensor holds the clock until data is ready.
    SingleShot(Repeatability),
    /// One conversion, no clock stretching.
    SingleShotPolling(Repeatability),
    /// Start continuous acquisition at the given rate.
    Periodic(Rate, Repeatability),
    /// Start continuous acquisition at 4 measurements per second with
    /// accelerated response time.
    PeriodicArt,
    /// Collect the latest measurement while in continuous acquisition.
    FetchData,
    /// Stop continuous acquisition.
    Break,
    /// Turn the built-in heater on.
    HeaterEnable,
    /// Turn the built-in heater off.
    HeaterDisable,
    /// Read the status register.
    StatusRead,
    /// Clear the alert flags in the status register.
    StatusClear,
    /// Reload calibration data and return to the idle state.
    SoftReset,
}

impl Command {
    /// The 16-bit command word as transmitted on the bus.
    pub fn value(self) -> u16 {
        match self {
            Command::SingleShot(Repeatability::High) => 0x2C06,
            Command::SingleShot(Repeatability::Medium) => 0x2C0D,
            Command::SingleShot(Repeatability::Low) => 0x2C10,
            Command::SingleShotPolling(Repeatability::High) => 0x2400,
            Command::SingleShotPolling(Repeatability::Medium) => 0x240B,
            Command::SingleShotPolling(Repeatability::Low) => 0x2416,
            Command::Periodic(Rate::Half, Repeatability::High) => 0x2032,
            Command::Periodic(Rate::Half, Repeatability::Medium) => 0x2024,
            Command::Periodic(Rate::Half, Repeatability::Low) => 0x202F,
            Command::Periodic(Rate::One, Repeatability::High) => 0x2130,
            Command::Periodic(Rate::One, Repeatability::Medium) => 0x2126,
            Command::Periodic(Rate::One, Repeatability::Low) => 0x212D,
            Command::Periodic(Rate::Two, Repeatability::High) => 0x2236,
            Command::Periodic(Rate::Two, Repeatability::Medium) => 0x2220,
            Command::Periodic(Rate::Two, Repeatability::Low) => 0x222B,
            Command::Periodic(Rate::Four, Repeatability::High) => 0x2334,
            Command::Periodic(Rate::Four, Repeatability::Medium) => 0x2322,
            Command::Periodic(Rate::Four, Repeatability::Low) => 0x2329,
            Command::Periodic(Rate::Ten, Repeatability::High) => 0x2737,
            Command::Periodic(Rate::Ten, Repeatability::Medium) => 0x2721,
            Command::Periodic(Rate::Ten, Repeatability::Low) => 0x272A,
            Command::PeriodicArt => 0x2B32,
            Command::FetchData => 0xE000,
            Command::Break => 0x3093,
            Command::HeaterEnable => 0x306D,
            Command::HeaterDisable => 0x3066,
            Command::StatusRead => 0xF32D,
            Command::StatusClear => 0x3041,
            Command::SoftReset => 0x30A2,
        }
    }

    /// The two bytes of the command word in the order they go out on the
    /// bus, most significant first.
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.value().to_be_bytes()
    }

    /// Whether this command starts continuous acquisition.
    pub fn is_periodic(self) -> bool {
        matches!(self, Command::Periodic(..) | Command::PeriodicArt)
    }

    /// Whether the sensor stretches the clock on the read following this
    /// command. True only for the `0x2C` single-shot family.
    pub fn uses_clock_stretch(self) -> bool {
        matches!(self, Command::SingleShot(_))
    }

    /// Heater and status register commands do not end continuous
    /// acquisition; the driver re-arms the previous periodic command after
    /// issuing one of these.
    pub fn is_auxiliary(self) -> bool {
        matches!(
            self,
            Command::HeaterEnable
                | Command::HeaterDisable
                | Command::StatusRead
                | Command::StatusClear
        )
    }
}

/// Outcome of the CRC check over a received frame.
///
/// A measurement frame carries two independently checksummed fields, so a
/// frame can be partially valid. A status register frame carries only the
/// first field; its valid outcome is `HumidityOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Validity {
    All,
    HumidityOnly,
    TemperatureOnly,
    Neither,
}

/// Layout of a received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    /// Six bytes, humidity field and temperature field.
    Measurement,
    /// Three bytes, register content only.
    StatusRegister,
}

/// Acquisition mode the sensor is in, as tracked by the driver.
///
/// `Periodic` carries the command word that started continuous
/// acquisition, so it can be re-sent after a transient heater or status
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Periodic(Command),
}

/// Clock stretch preference derived from the most recent command.
///
/// `Unknown` only holds before the first command has been dispatched; a
/// measurement read in that state performs no bus traffic at all, because
/// the sensor has not been told to convert anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockStretch {
    Unknown,
    Enabled,
    Disabled,
}

/// One raw reading from the sensor, still in sensor units.
///
/// Each field is either the 16-bit word the sensor produced or
/// [`INVALID_WORD`] if that field failed its CRC check. The fields fail
/// independently; check both.
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMeasurement {
    pub humidity: u16,
    pub temperature: u16,
}

impl RawMeasurement {
    /// Relative humidity in percent, 0 to 100, or `None` if the humidity
    /// field is invalid.
    pub fn humidity_percent(&self) -> Option<u16> {
        (self.humidity != INVALID_WORD).then(|| convert_humidity(self.humidity))
    }

    /// Temperature in degrees Celsius, -45 to 130, or `None` if the
    /// temperature field is invalid.
    pub fn celsius(&self) -> Option<i16> {
        (self.temperature != INVALID_WORD).then(|| convert_celsius(self.temperature))
    }
}

/// One converted reading from the sensor.
///
/// Humidity in percent relative humidity, temperature in degrees Celsius.
/// An invalid field converts to `None`.
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub humidity: Option<u16>,
    pub temperature: Option<i16>,
}

impl From<RawMeasurement> for Measurement {
    fn from(raw: RawMeasurement) -> Self {
        Measurement {
            humidity: raw.humidity_percent(),
            temperature: raw.celsius(),
        }
    }
}

/// Decoded status register content.
///
/// See the status register table in the datasheet for the meaning of the
/// individual flags. Bits not listed there are reserved and only visible
/// through [`Status::raw`].
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    raw: u16,
    /// At least one alert is pending.
    pub alert_pending: bool,
    /// The built-in heater is on.
    pub heater_on: bool,
    /// Relative humidity tracking alert.
    pub humidity_alert: bool,
    /// Temperature tracking alert.
    pub temperature_alert: bool,
    /// A reset happened since the status register was last cleared.
    pub reset_detected: bool,
    /// The last command was not processed.
    pub command_failed: bool,
    /// The checksum of the last write transfer did not match.
    pub write_checksum_failed: bool,
}

impl Status {
    /// Decode a register word read with [`Gxht30::read_status_register`].
    ///
    /// Returns `None` for [`INVALID_WORD`], the value a failed register
    /// read produces.
    pub fn from_raw(raw: u16) -> Option<Self> {
        (raw != INVALID_WORD).then(|| Status {
            raw,
            alert_pending: raw & (1 << 15) != 0,
            heater_on: raw & (1 << 13) != 0,
            humidity_alert: raw & (1 << 11) != 0,
            temperature_alert: raw & (1 << 10) != 0,
            reset_detected: raw & (1 << 4) != 0,
            command_failed: raw & (1 << 1) != 0,
            write_checksum_failed: raw & 1 != 0,
        })
    }

    /// The raw register word, including reserved bits.
    pub fn raw(&self) -> u16 {
        self.raw
    }
}

/// Driver errors.
#[cfg_attr(feature = "use-defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// I2C bus error
    I2c(E),
}

/// A GXHT30 sensor on the I2C bus `I`.
///
/// The address is `SENSOR_ADDRESS` or `SENSOR_ADDRESS_ALT` depending on
/// the level of the sensor's ADDR pin.
pub struct Gxht30<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    mode: Mode,
    stretch: ClockStretch,
}

impl<E, I> Gxht30<I>
where
    I: I2c<Error = E>,
{
    /// Creates the GXHT30 driver.
    ///
    /// This consumes the I2C bus `I`. The driver starts out assuming the
    /// sensor is idle; send a measurement command before reading.
    pub fn new(i2c: I, address: u8) -> Self {
        Gxht30 {
            i2c,
            address,
            mode: Mode::Idle,
            stretch: ClockStretch::Unknown,
        }
    }

    /// Send a command to the sensor, sequencing the bus transactions the
    /// sensor's acquisition mode requires.
    ///
    /// Three cases, matching the mode diagram at the top of this file:
    ///
    /// * Idle and `command` starts continuous acquisition: the command
    ///   goes out directly and the driver remembers it. Clock stretching
    ///   is turned off, the sensor does not stretch while sampling on its
    ///   own.
    /// * Continuous acquisition running and `command` is neither a
    ///   periodic command nor [`Command::FetchData`]: acquisition has to
    ///   stop first. The driver sends [`Command::Break`], waits out the
    ///   settle window, then sends `command`. A heater or status register
    ///   command does not end acquisition; the remembered periodic command
    ///   is re-sent right after it. Any other command leaves the sensor
    ///   idle.
    /// * Everything else goes out directly. A periodic command sent while
    ///   acquisition is already running just replaces the remembered one.
    ///
    /// Bus errors are returned as-is and nothing is retried. A failed
    /// Break aborts the mode switch: `command` is not sent and the driver
    /// still considers acquisition active.
    pub fn send(&mut self, command: Command, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        match self.mode {
            Mode::Idle if command.is_periodic() => {
                self.mode = Mode::Periodic(command);
                self.stretch = ClockStretch::Disabled;
                self.transmit(command)
            }
            Mode::Periodic(active) if !command.is_periodic() && command != Command::FetchData => {
                self.transmit(Command::Break)?;
                self.set_clock_stretching(command);
                delay.delay_ms(MODE_SWITCH_SETTLE_MS);
                if command.is_auxiliary() {
                    self.transmit(command)?;
                    self.transmit(active)
                } else {
                    self.mode = Mode::Idle;
                    self.transmit(command)
                }
            }
            _ => {
                if command.is_periodic() {
                    self.mode = Mode::Periodic(command);
                }
                self.set_clock_stretching(command);
                self.transmit(command)
            }
        }
    }

    /// Collect a measurement and convert it to physical units.
    ///
    /// See [`Gxht30::measure_raw`] for how the measurement is collected.
    /// Humidity is percent relative humidity (0 to 100), temperature is
    /// degrees Celsius (-45 to 130). A field that failed validation is
    /// `None`; the fields fail independently.
    pub fn measure(&mut self, delay: &mut impl DelayNs) -> Measurement {
        self.measure_raw(delay).into()
    }

    /// Collect a measurement and return the raw sensor words.
    ///
    /// The bus sequence depends on the last command sent:
    ///
    /// * Nothing sent yet: the bus is left untouched and the reading
    ///   comes back fully invalid. The sensor has nothing to report.
    /// * Clock-stretched single-shot: a plain 6-byte read. The sensor
    ///   holds the clock until the conversion is done.
    /// * Continuous acquisition running: [`Command::FetchData`] first,
    ///   then the 6-byte read. The read only happens if the fetch went
    ///   out.
    /// * Otherwise: a direct 6-byte read.
    ///
    /// Each 16-bit field is validated against its own CRC and invalidated
    /// to [`INVALID_WORD`] on mismatch. A failed bus read invalidates the
    /// whole reading. Bus trouble during collection is therefore visible
    /// as invalid fields, not as an error.
    pub fn measure_raw(&mut self, delay: &mut impl DelayNs) -> RawMeasurement {
        let mut frame = [INVALID_BYTE; 6];
        let received = match self.stretch {
            ClockStretch::Unknown => false,
            ClockStretch::Enabled => self.read_frame(&mut frame),
            ClockStretch::Disabled => {
                if matches!(self.mode, Mode::Periodic(_)) {
                    self.send(Command::FetchData, delay).is_ok() && self.read_frame(&mut frame)
                } else {
                    self.read_frame(&mut frame)
                }
            }
        };
        let validity = if received {
            classify(&frame, FrameKind::Measurement)
        } else {
            Validity::Neither
        };
        mark_invalid(&mut frame, validity);
        RawMeasurement {
            humidity: u16::from_be_bytes([frame[2], frame[1]]),
            temperature: u16::from_be_bytes([frame[5], frame[4]]),
        }
    }

    /// Dispatch a status register command and return the register word.
    ///
    /// The command goes through [`Gxht30::send`], so issuing it while
    /// continuous acquisition is running stops and re-arms acquisition
    /// around it. Only [`Command::StatusRead`] produces an answer to read
    /// back; for every other command, and whenever the dispatch or the
    /// readback fails validation, the result is [`INVALID_WORD`]. The
    /// register word is never partially valid.
    pub fn read_status_register(&mut self, command: Command, delay: &mut impl DelayNs) -> u16 {
        let mut frame = [INVALID_BYTE; 3];
        if self.send(command, delay).is_ok() && command == Command::StatusRead {
            self.read_frame(&mut frame);
        }
        let validity = classify(&frame, FrameKind::StatusRegister);
        mark_invalid(&mut frame, validity);
        u16::from_be_bytes([frame[2], frame[1]])
    }

    /// Read and decode the status register.
    ///
    /// `None` if the register could not be read back intact.
    pub fn read_status(&mut self, delay: &mut impl DelayNs) -> Option<Status> {
        Status::from_raw(self.read_status_register(Command::StatusRead, delay))
    }

    /// Destroys this driver and lets you release the I2C bus `I`.
    pub fn destroy(self) -> Self {
        self
    }

    /// Transmit one command word.
    fn transmit(&mut self, command: Command) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &command.to_be_bytes())
            .map_err(Error::I2c)
    }

    /// Record whether the command just sent makes the sensor stretch the
    /// clock on the following read.
    fn set_clock_stretching(&mut self, command: Command) {
        self.stretch = if command.uses_clock_stretch() {
            ClockStretch::Enabled
        } else {
            ClockStretch::Disabled
        };
    }

    /// Read `N` bytes from the sensor into `frame`, last bus byte at
    /// index 0. Returns whether the read produced data; on failure
    /// `frame` is left untouched.
    fn read_frame<const N: usize>(&mut self, frame: &mut [u8; N]) -> bool {
        let mut incoming = [0u8; N];
        if self.i2c.read(self.address, &mut incoming).is_err() {
            return false;
        }
        for (slot, byte) in frame.iter_mut().zip(incoming.iter().rev()) {
            *slot = *byte;
        }
        true
    }
}

/// checksum runs the CRC-8 the GXHT30 appends to each 16-bit word it
/// transmits.
///
/// Polynomial 0x31, initial value 0xFF, no reflection, no final xor. The
/// sensor covers the most significant byte first; callers pass the bytes
/// in that order.
fn checksum(bytes: &[u8]) -> u8 {
    // Poly (0x31), bits (8), initial (0xff), final_xor (0x00), reflect (false).
    let mut crc = CRCu8::create_crc(0x31, 8, 0xff, 0x00, false);
    crc.digest(bytes);
    crc.get_crc()
}

/// Validate the checksummed fields of a received frame.
///
/// Frames are stored last-bus-byte-first: the humidity (or register) CRC
/// at index 0 covers bytes 2 and 1, the temperature CRC at index 3 covers
/// bytes 5 and 4. The temperature field is checked first, then the
/// humidity field; a status register frame has no temperature field and
/// skips that check. Validation runs over whatever is in the frame,
/// invalid-marker bytes included.
fn classify(frame: &[u8], kind: FrameKind) -> Validity {
    let humidity_ok = checksum(&[frame[2], frame[1]]) == frame[0];
    match kind {
        FrameKind::Measurement => {
            let temperature_ok = checksum(&[frame[5], frame[4]]) == frame[3];
            match (humidity_ok, temperature_ok) {
                (true, true) => Validity::All,
                (true, false) => Validity::HumidityOnly,
                (false, true) => Validity::TemperatureOnly,
                (false, false) => Validity::Neither,
            }
        }
        FrameKind::StatusRegister => {
            if humidity_ok {
                Validity::HumidityOnly
            } else {
                Validity::Neither
            }
        }
    }
}

/// Overwrite the bytes of invalid fields with the invalid-data marker.
///
/// The humidity (or register) field occupies bytes 0 to 2, the
/// temperature field bytes 3 to 5. A 3-byte register frame has no
/// temperature field, so there is nothing to mask for `HumidityOnly`. The
/// CRC bytes of a masked field are overwritten too and carry no
/// information afterwards.
fn mark_invalid(frame: &mut [u8], validity: Validity) {
    match validity {
        Validity::Neither => frame.fill(INVALID_BYTE),
        Validity::TemperatureOnly => frame[..3].fill(INVALID_BYTE),
        Validity::HumidityOnly => {
            if frame.len() > 3 {
                frame[3..6].fill(INVALID_BYTE);
            }
        }
        Validity::All => {}
    }
}

/// Relative humidity in percent from the raw sensor word.
///
/// Datasheet conversion formula in integer arithmetic:
/// RH = 100 * raw / 65535.
fn convert_humidity(raw: u16) -> u16 {
    (100 * raw as u32 / 65535) as u16
}

/// Temperature in degrees Celsius from the raw sensor word.
///
/// Datasheet conversion formula in integer arithmetic:
/// T = 175 * raw / 65535 - 45.
fn convert_celsius(raw: u16) -> i16 {
    (175 * raw as u32 / 65535) as i16 - 45
}
