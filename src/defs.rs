#![allow(dead_code)]

#[repr(u8)]
pub(crate) enum Reg {
  DevId = 0x00,
  OfsX = 0x1E,
  OfsY = 0x1F,
  OfsZ = 0x20,
  PowerCtl = 0x2D,
  DataFormat = 0x31,
  DataX0 = 0x32,
  DataX1 = 0x33,
  DataY0 = 0x34,
  DataY1 = 0x35,
  DataZ0 = 0x36,
  DataZ1 = 0x37,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

// POWER_CTL bits
pub(crate) const MEASURE: u8 = 0x08;

// DATA_FORMAT bits
pub(crate) const FULL_RES: u8 = 0x04;
pub(crate) const SELF_TEST: u8 = 0x80;

// I2C addresses, selected by the SDO/ALT ADDRESS pin
pub(crate) const ADDR_I2C_LOW: u8 = 0x53;
pub(crate) const ADDR_I2C_HIGH: u8 = 0x1D;

// Output needs a few samples to move after SELF_TEST is toggled.
pub(crate) const SELF_TEST_SETTLE_MS: u32 = 2;
