use embedded_hal_async::{delay::DelayNs, i2c::*};

use crate::{Adxl345, Error, defs::Reg};

// Register byte plus the longest write, OFSX..OFSZ.
const MAX_BURST: usize = 4;

impl<I, D, E> Adxl345<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  pub(crate) async fn read<const N: usize, T: TryFrom<[u8; N]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let mut b = [0u8; N];
    self.read_bytes(reg, &mut b).await?;
    TryFrom::try_from(b).map_err(|_| Error::Data)
  }

  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.read_bytes(reg, &mut b).await?;
    Ok(b[0])
  }

  pub(crate) async fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    self.bus_read(reg, buf).await.map_err(Error::I2c)
  }

  /// Point the register cursor at `reg` and read `buf.len()` consecutive registers.
  pub(crate) async fn bus_read(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), E> {
    self.i2c.write_read(self.address, &[reg.into()], buf).await
  }

  pub(crate) async fn write<const N: usize, T: TryInto<[u8; N]>>(&mut self, reg: Reg, v: T) -> Result<(), Error<E>> {
    let b = v.try_into().map_err(|_| Error::Data)?;
    self.write_bytes(reg, &b).await
  }

  pub(crate) async fn write_bytes(&mut self, reg: Reg, data: &[u8]) -> Result<(), Error<E>> {
    self.bus_write(reg, data).await.map_err(Error::I2c)
  }

  /// Write `data` starting at `reg` in one transaction; the device auto-increments.
  pub(crate) async fn bus_write(&mut self, reg: Reg, data: &[u8]) -> Result<(), E> {
    debug_assert!(data.len() < MAX_BURST, "bus_write burst too long");
    let mut buf = [0u8; MAX_BURST];
    let len = 1 + data.len();
    buf[0] = reg.into();
    buf[1..len].copy_from_slice(data);
    self.i2c.write(self.address, &buf[..len]).await
  }
}
