//! Measurement range and acceleration data reading.
//!
//! The ADXL345 reports each axis as a 16-bit two's-complement count in the
//! `DATAX0..DATAZ1` registers. The scale factor depends on the range written to
//! `DATA_FORMAT`; the driver keeps track of it so reads come back in g.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut imu: adxl345::Adxl345<impl embedded_hal_async::i2c::I2c, impl embedded_hal_async::delay::DelayNs>) {
//! use adxl345::{AddressSelect, accel::Range};
//!
//! imu.configure(AddressSelect::Low, Range::G4).await.unwrap();
//! imu.power_on().await.unwrap();
//!
//! // Low-pass filtered acceleration in g
//! let accel = imu.get_accel_data().await.unwrap();
//! println!("Accel: x={}, y={}, z={}", accel.x, accel.y, accel.z);
//! # }
//! ```

use embedded_hal_async::{delay::DelayNs, i2c::*};
use micromath::vector::Vector3d;

use super::{defs::*, Adxl345, Error};

impl<I, D, E> Adxl345<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Read the `DATA_FORMAT` register back from the device.
  pub async fn get_data_format(&mut self) -> Result<DataFormat, Error<E>> {
    self.read(Reg::DataFormat).await
  }

  pub(crate) async fn set_data_format(&mut self, fmt: DataFormat) -> Result<(), Error<E>> {
    self.write(Reg::DataFormat, fmt).await
  }

  /// Read raw accelerometer counts.
  ///
  /// Does not scale and does not touch the low-pass filter. Use
  /// [`get_accel_data`](Self::get_accel_data) for filtered values in g.
  pub async fn get_raw_accel_data(&mut self) -> Result<Vector3d<i16>, Error<E>> {
    let mut b = [0u8; 6];
    self.read_bytes(Reg::DataX0, &mut b).await?;
    Ok(crate::XYZ::from(b).into())
  }

  /// Read acceleration in g without feeding the low-pass filter.
  pub async fn get_unfiltered_accel_data(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    let raw = self.get_raw_accel_data().await?;
    Ok(self.range.scale(raw))
  }

  /// Read acceleration in g, smoothed by the low-pass filter.
  ///
  /// Every call advances the filter, so the returned value already includes
  /// this reading. The filter starts from zero after
  /// [`configure`](Self::configure), so the first few samples ramp up towards
  /// the true value.
  pub async fn get_accel_data(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    self.sample_filtered().await.map_err(Error::I2c)
  }

  /// Read, scale and filter one sample, keeping the bus error as-is.
  pub(crate) async fn sample_filtered(&mut self) -> Result<Vector3d<f32>, E> {
    let mut b = [0u8; 6];
    self.bus_read(Reg::DataX0, &mut b).await?;
    let accel = self.range.scale(crate::XYZ::from(b).into());
    Ok(self.filter.update(accel))
  }
}

/// `DATA_FORMAT` register.
///
/// Only the fields the driver drives are exposed; `FULL_RES`, `Justify`,
/// `INT_INVERT` and `SPI` are left at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct DataFormat {
  /// g range (±2g, ±4g, ±8g or ±16g).
  #[bits(2)]
  pub range: Range,
  /// Electrostatic force on the proof mass; shifts the output while set.
  #[skip(5)]
  #[bits(1)]
  pub self_test: bool,
}

impl DataFormat {
  pub fn new(range: Range) -> Self {
    DataFormat { range, self_test: false }
  }
}

/// Accelerometer measurement range.
///
/// Output is 10-bit, so a wider range trades resolution for headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Range {
  /// ±2g range
  G2 = 0x00,
  /// ±4g range
  G4 = 0x01,
  /// ±8g range
  G8 = 0x02,
  /// ±16g range
  #[default]
  G16 = 0x03,
}

impl Range {
  /// Scale factor in LSB/g.
  pub fn sensitivity(self) -> f32 {
    match self {
      Range::G2 => 256.,
      Range::G4 => 128.,
      Range::G8 => 64.,
      Range::G16 => 32.,
    }
  }

  pub(crate) fn scale(self, raw: Vector3d<i16>) -> Vector3d<f32> {
    let s = self.sensitivity();
    Vector3d { x: raw.x as f32 / s, y: raw.y as f32 / s, z: raw.z as f32 / s }
  }
}

impl From<Range> for u8 {
  fn from(value: Range) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for Range {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(Range::G2),
      0x01 => Ok(Range::G4),
      0x02 => Ok(Range::G8),
      0x03 => Ok(Range::G16),
      _ => Err(()),
    }
  }
}
