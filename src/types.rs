use micromath::vector::Vector3d;

/// Raw output of the six data registers, one signed count per axis.
///
/// Each axis is a low/high register pair holding a little-endian two's-complement
/// value, so negative accelerations come back negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XYZ {
  pub x: i16,
  pub y: i16,
  pub z: i16,
}

impl From<[u8; 6]> for XYZ {
  fn from(b: [u8; 6]) -> Self {
    XYZ {
      x: i16::from_le_bytes([b[0], b[1]]),
      y: i16::from_le_bytes([b[2], b[3]]),
      z: i16::from_le_bytes([b[4], b[5]]),
    }
  }
}

impl From<XYZ> for Vector3d<i16> {
  fn from(v: XYZ) -> Self {
    Vector3d { x: v.x, y: v.y, z: v.z }
  }
}

/// Level of the SDO/ALT ADDRESS pin, which picks the device's I2C address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressSelect {
  /// Pin tied low: address `0x53`.
  #[default]
  Low,
  /// Pin tied high: address `0x1D`.
  High,
}

impl AddressSelect {
  pub fn address(self) -> u8 {
    match self {
      AddressSelect::Low => crate::defs::ADDR_I2C_LOW,
      AddressSelect::High => crate::defs::ADDR_I2C_HIGH,
    }
  }
}

impl From<bool> for AddressSelect {
  fn from(high: bool) -> Self {
    if high { AddressSelect::High } else { AddressSelect::Low }
  }
}
