//! Register-file model of an ADXL345 behind an async I2C bus.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use adxl345::{Adxl345, DEVICE_ID};
use embedded_hal_async::i2c::{self, ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

pub const DEVID: u8 = 0x00;
pub const OFSX: u8 = 0x1E;
pub const POWER_CTL: u8 = 0x2D;
pub const DATA_FORMAT: u8 = 0x31;
pub const DATAX0: u8 = 0x32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
  Nack,
  Bus,
}

impl i2c::Error for MockError {
  fn kind(&self) -> ErrorKind {
    match self {
      MockError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
      MockError::Bus => ErrorKind::Bus,
    }
  }
}

pub struct Device {
  pub address: u8,
  pub regs: [u8; 64],
  /// Data registers served while `DATA_FORMAT.SELF_TEST` is set.
  pub self_test_data: Option<[u8; 6]>,
  /// Fail any read whose register pointer starts here.
  pub fail_read_at: Option<u8>,
  /// Fail a write when this returns true for `(register, payload)`.
  pub fail_write_if: Option<fn(u8, &[u8]) -> bool>,
  pub writes: Vec<(u8, Vec<u8>)>,
  pub transactions: usize,
}

/// Cloneable handle; clones share the same device state.
#[derive(Clone)]
pub struct MockI2c(pub Rc<RefCell<Device>>);

impl MockI2c {
  pub fn at(address: u8) -> Self {
    let mut regs = [0u8; 64];
    regs[DEVID as usize] = DEVICE_ID;
    MockI2c(Rc::new(RefCell::new(Device {
      address,
      regs,
      self_test_data: None,
      fail_read_at: None,
      fail_write_if: None,
      writes: Vec::new(),
      transactions: 0,
    })))
  }

  pub fn new() -> Self {
    Self::at(0x53)
  }

  pub fn reg(&self, reg: u8) -> u8 {
    self.0.borrow().regs[reg as usize]
  }

  pub fn set_data(&self, data: [u8; 6]) {
    self.0.borrow_mut().regs[DATAX0 as usize..DATAX0 as usize + 6].copy_from_slice(&data);
  }

  pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
    self.0.borrow().writes.clone()
  }

  pub fn transactions(&self) -> usize {
    self.0.borrow().transactions
  }
}

impl Device {
  fn read_reg(&self, reg: usize) -> u8 {
    let in_self_test = self.regs[DATA_FORMAT as usize] & 0x80 != 0;
    match self.self_test_data {
      Some(data) if in_self_test && (DATAX0 as usize..DATAX0 as usize + 6).contains(&reg) => {
        data[reg - DATAX0 as usize]
      }
      _ => self.regs[reg],
    }
  }
}

impl ErrorType for MockI2c {
  type Error = MockError;
}

impl i2c::I2c for MockI2c {
  async fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    let mut dev = self.0.borrow_mut();
    dev.transactions += 1;
    if address != dev.address {
      return Err(MockError::Nack);
    }

    let mut ptr: Option<usize> = None;
    for op in operations.iter_mut() {
      match op {
        Operation::Write(bytes) => {
          let (&reg, data) = bytes.split_first().ok_or(MockError::Bus)?;
          if dev.fail_write_if.is_some_and(|fail| fail(reg, data)) {
            return Err(MockError::Bus);
          }
          let start = reg as usize;
          dev.regs[start..start + data.len()].copy_from_slice(data);
          dev.writes.push((reg, data.to_vec()));
          ptr = Some(start + data.len());
        }
        Operation::Read(buf) => {
          let start = ptr.ok_or(MockError::Bus)?;
          if dev.fail_read_at == Some(start as u8) {
            return Err(MockError::Bus);
          }
          for (i, b) in buf.iter_mut().enumerate() {
            *b = dev.read_reg(start + i);
          }
          ptr = Some(start + buf.len());
        }
      }
    }
    Ok(())
  }
}

/// Delay provider that only records how long it was asked to wait.
#[derive(Debug, Default)]
pub struct MockDelay {
  pub waited_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
  async fn delay_ns(&mut self, ns: u32) {
    self.waited_ns += ns as u64;
  }
}

pub fn block_on<F: core::future::Future>(f: F) -> F::Output {
  futures::executor::block_on(f)
}

/// Driver on a fresh mock device at the low address, plus a handle to the device.
pub fn driver() -> (Adxl345<MockI2c, MockDelay>, MockI2c) {
  let bus = MockI2c::new();
  (Adxl345::new(bus.clone(), MockDelay::default()), bus)
}

pub fn assert_close(a: f32, b: f32) {
  assert!((a - b).abs() < 1e-5, "{a} != {b}");
}

// Write-failure predicates for `Device::fail_write_if`.

pub fn any_data_format(reg: u8, _: &[u8]) -> bool {
  reg == DATA_FORMAT
}

pub fn any_offset(reg: u8, _: &[u8]) -> bool {
  reg == OFSX
}

pub fn entering_self_test(reg: u8, data: &[u8]) -> bool {
  reg == DATA_FORMAT && data[0] & 0x80 != 0
}

pub fn leaving_self_test(reg: u8, data: &[u8]) -> bool {
  reg == DATA_FORMAT && data[0] & 0x80 == 0
}
