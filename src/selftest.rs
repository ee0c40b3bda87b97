//! Self-test: sample the output while the `SELF_TEST` bit deflects the proof mass.
//!
//! Compare the returned sample against a normal reading taken at the same
//! orientation; the datasheet lists the expected per-axis shift.

use embedded_hal_async::{delay::DelayNs, i2c::*};
use micromath::vector::Vector3d;

use crate::{Adxl345, Error, defs::*};

impl<I, D, E> Adxl345<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Take one sample with the self-test force enabled.
  ///
  /// Sequence:
  /// - Set `DATA_FORMAT.SELF_TEST` on top of the configured range.
  /// - Let the output settle, then read one sample. It is scaled and passed
  ///   through the low-pass filter like [`get_accel_data`](Self::get_accel_data).
  /// - Write `DATA_FORMAT` back to the plain range.
  ///
  /// The last write runs on every path, including when entering self-test
  /// or the read fails. If it fails the device may still be in self-test
  /// mode and [`Error::SelfTestRestore`] is returned, carrying the earlier
  /// failure too if there was one.
  pub async fn self_test(&mut self) -> Result<Vector3d<f32>, Error<E>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("ADXL345 self-test at {}", self.range);

    let measured = self.sample_self_test().await;
    let restored = self.bus_write(Reg::DataFormat, &[u8::from(self.range)]).await;

    match (measured, restored) {
      (Ok(accel), Ok(())) => Ok(accel),
      (Err(measure), Ok(())) => Err(Error::I2c(measure)),
      (measured, Err(restore)) => {
        #[cfg(feature = "defmt")]
        defmt::warn!("ADXL345 self-test bit could not be cleared");

        Err(Error::SelfTestRestore { measure: measured.err(), restore })
      }
    }
  }

  async fn sample_self_test(&mut self) -> Result<Vector3d<f32>, E> {
    self.bus_write(Reg::DataFormat, &[u8::from(self.range) | SELF_TEST]).await?;
    self.delay.delay_ms(SELF_TEST_SETTLE_MS).await;
    self.sample_filtered().await
  }
}
