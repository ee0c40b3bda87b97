#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Instance state**: Bus address, range and filter state live in the driver value, not in globals
//! - **Async-first**: Built on `embedded-hal-async` I2C traits
//! - **Signed data**: Axis registers are decoded as little-endian two's complement
//! - **Always restore**: Self-test clears the self-test bit on every exit path
//!
//! ## Module Organization
//!
//! - [`accel`]: Measurement range and acceleration data reading
//! - [`offset`]: User offset trim registers
//! - [`selftest`]: Self-test sampling
//! - [`filter`]: Low-pass filter applied to acceleration reads
//!
//! ## Basic Usage
//!
//! ```no_run
//! # async fn example(mut imu: adxl345::Adxl345<impl embedded_hal_async::i2c::I2c, impl embedded_hal_async::delay::DelayNs>) {
//! use adxl345::{AddressSelect, DEVICE_ID, accel::Range};
//!
//! // Select the bus address and range, then start measuring
//! imu.configure(AddressSelect::Low, Range::G16).await.unwrap();
//! imu.power_on().await.unwrap();
//!
//! assert_eq!(imu.get_id().await.unwrap(), DEVICE_ID);
//! let accel = imu.get_accel_data().await.unwrap();
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, i2c::*};

pub mod accel;
mod defs;
pub mod filter;
pub mod offset;
pub(crate) mod rw;
pub mod selftest;
mod types;

use accel::{DataFormat, Range};
use defs::*;
use filter::LowPass;
pub use types::*;

/// Value of the `DEVID` register on a genuine ADXL345.
pub const DEVICE_ID: u8 = 0xE5;

/// Driver error type.
///
/// Wraps the underlying I2C error. The driver does not validate register
/// contents (e.g. the device ID), so bus failures are the only runtime errors.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I2C communication error
  I2c(E),
  /// Self-test could not write `DATA_FORMAT` back to normal mode.
  ///
  /// The device may still be in self-test mode. `measure` holds the error from
  /// the self-test sample if that failed as well.
  SelfTestRestore { measure: Option<E>, restore: E },
  /// Register bytes could not be converted to or from their typed form.
  ///
  /// Reserved: every register type the driver currently decodes accepts all
  /// bit patterns, so this is never returned today.
  Data,
}

/// ADXL345 device driver instance.
///
/// Owns the I2C bus and delay provider together with the device
/// configuration (bus address, measurement range) and the low-pass filter
/// state. All methods take `&mut self`; sharing one instance between
/// execution contexts needs an external mutex around the whole driver.
///
/// # Type Parameters
///
/// - `I`: I2C implementation (must implement `embedded_hal_async::i2c::I2c`)
/// - `D`: Delay provider (must implement `embedded_hal_async::delay::DelayNs`)
pub struct Adxl345<I, D: DelayNs> {
  i2c: I,
  delay: D,
  address: SevenBitAddress,
  range: Range,
  filter: LowPass,
}

impl<I, D, E> Adxl345<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Create a new ADXL345 driver instance.
  ///
  /// No bus traffic happens here. The driver starts at the `0x53` address,
  /// the ±16g range and a zeroed filter; call [`configure`](Self::configure)
  /// before anything else so the device and the driver agree on the range.
  pub fn new(i2c: I, delay: D) -> Self {
    Self { i2c, delay, address: AddressSelect::Low.address(), range: Range::G16, filter: LowPass::new() }
  }

  /// Release the bus and delay provider.
  pub fn destroy(self) -> (I, D) {
    (self.i2c, self.delay)
  }

  /// Select the bus address, program the measurement range and reset the filter.
  ///
  /// Writes `DATA_FORMAT` with the range bits and the self-test bit clear.
  /// Calling it again re-initialises everything derived from the configuration.
  /// If the write fails the driver keeps its previous address, range and
  /// filter state.
  ///
  /// # Example
  ///
  /// ```no_run
  /// # async fn example(mut imu: adxl345::Adxl345<impl embedded_hal_async::i2c::I2c, impl embedded_hal_async::delay::DelayNs>) {
  /// use adxl345::{AddressSelect, accel::Range};
  ///
  /// imu.configure(AddressSelect::High, Range::G2).await.unwrap();
  /// assert_eq!(imu.address(), 0x1D);
  /// assert_eq!(imu.sensitivity(), 256.);
  /// # }
  /// ```
  pub async fn configure(&mut self, address: AddressSelect, range: Range) -> Result<(), Error<E>> {
    let previous = core::mem::replace(&mut self.address, address.address());
    if let Err(e) = self.set_data_format(DataFormat::new(range)).await {
      self.address = previous;
      return Err(e);
    }
    self.range = range;
    self.filter.reset();

    #[cfg(feature = "defmt")]
    defmt::debug!("ADXL345 at {=u8:#x} configured for {}", self.address, range);

    Ok(())
  }

  /// Put the device into measurement mode (`POWER_CTL.MEASURE`).
  pub async fn power_on(&mut self) -> Result<(), Error<E>> {
    self.write(Reg::PowerCtl, PowerCtl { measure: true }).await
  }

  /// Clear `POWER_CTL.MEASURE`, returning the device to standby.
  ///
  /// Register contents (range, offsets) are kept.
  pub async fn standby(&mut self) -> Result<(), Error<E>> {
    self.write(Reg::PowerCtl, PowerCtl { measure: false }).await
  }

  pub async fn get_power_ctl(&mut self) -> Result<PowerCtl, Error<E>> {
    self.read(Reg::PowerCtl).await
  }

  /// Read the device ID register.
  ///
  /// Returns the device ID (should be [`DEVICE_ID`], `0xE5`). The value is not
  /// checked by the driver; compare it yourself to verify communication.
  pub async fn get_id(&mut self) -> Result<u8, Error<E>> {
    self.read_u8(Reg::DevId).await
  }

  /// Restart the low-pass filter from zero without touching the device.
  pub fn reset_filter(&mut self) {
    self.filter.reset();
  }

  /// 7-bit bus address in use.
  pub fn address(&self) -> u8 {
    self.address
  }

  pub fn range(&self) -> Range {
    self.range
  }

  /// Scale factor in LSB/g for the configured range.
  pub fn sensitivity(&self) -> f32 {
    self.range.sensitivity()
  }
}

/// `POWER_CTL` register. Only the measure bit is driven; link, auto-sleep,
/// sleep and wakeup stay cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct PowerCtl {
  #[skip(3)]
  #[bits(1)]
  pub measure: bool,
}
