//! User offset trim registers (`OFSX`, `OFSY`, `OFSZ`).
//!
//! Each register holds a signed trim code that the device adds to the axis
//! output. The codes are written as-is; the driver does no unit conversion.

use embedded_hal_async::{delay::DelayNs, i2c::*};

use crate::{Adxl345, Error, defs::*};

impl<I, D, E> Adxl345<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  pub async fn get_offset(&mut self) -> Result<Offset, Error<E>> {
    self.read(Reg::OfsX).await
  }

  /// Write all three trim codes in a single burst starting at `OFSX`.
  pub async fn set_offset(&mut self, v: Offset) -> Result<(), Error<E>> {
    self.write(Reg::OfsX, v).await
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Offset {
  pub x: i8,
  pub y: i8,
  pub z: i8,
}

impl From<[u8; 3]> for Offset {
  fn from(b: [u8; 3]) -> Self {
    Offset { x: b[0] as i8, y: b[1] as i8, z: b[2] as i8 }
  }
}

impl From<Offset> for [u8; 3] {
  fn from(v: Offset) -> Self {
    [v.x as u8, v.y as u8, v.z as u8]
  }
}
