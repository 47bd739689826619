//! buffer/codec.rs
//!
//! Fixed-width typed accessors.
//!
//! Design notes:
//! - Every multi-byte value is big-endian; a buffer never mixes byte orders.
//! - Endianness lives in `byteorder`; this module only moves bytes through the
//!   raw `take` / `peek` / `append` / `patch` primitives.
//! - Reads return `None` when fewer than `WIDTH` bytes are unread; the cursor
//!   does not move in that case.

use byteorder::{BigEndian, ByteOrder};

use crate::buffer::Buffer;
use crate::types::BufferError;

/// Largest `FixedWidth::WIDTH`; sizes the on-stack scratch for encoding.
const MAX_WIDTH: usize = 8;

/// A value with a fixed big-endian wire representation of `WIDTH` bytes.
pub trait FixedWidth: Copy {
    const WIDTH: usize;

    /// Write `self` into `out[..WIDTH]`.
    fn encode(self, out: &mut [u8]);

    /// Read a value from `src[..WIDTH]`.
    fn decode(src: &[u8]) -> Self;
}

impl FixedWidth for u8 {
    const WIDTH: usize = 1;

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out[0] = self;
    }

    #[inline]
    fn decode(src: &[u8]) -> Self {
        src[0]
    }
}

impl FixedWidth for i8 {
    const WIDTH: usize = 1;

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out[0] = self as u8;
    }

    #[inline]
    fn decode(src: &[u8]) -> Self {
        src[0] as i8
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $width:expr, $read:ident, $write:ident;)*) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = $width;

                #[inline]
                fn encode(self, out: &mut [u8]) {
                    BigEndian::$write(&mut out[..$width], self);
                }

                #[inline]
                fn decode(src: &[u8]) -> Self {
                    BigEndian::$read(&src[..$width])
                }
            }
        )*
    };
}

impl_fixed_width! {
    u16 => 2, read_u16, write_u16;
    i16 => 2, read_i16, write_i16;
    u32 => 4, read_u32, write_u32;
    i32 => 4, read_i32, write_i32;
    u64 => 8, read_u64, write_u64;
    i64 => 8, read_i64, write_i64;
    f32 => 4, read_f32, write_f32;
    f64 => 8, read_f64, write_f64;
}

impl Buffer {
    /// Read and consume one `T`.
    pub fn get<T: FixedWidth>(&mut self) -> Option<T> {
        let bytes = self.take(T::WIDTH);
        if bytes.is_empty() {
            return None;
        }
        Some(T::decode(bytes))
    }

    /// Read one `T` without consuming it.
    pub fn peek_as<T: FixedWidth>(&self) -> Option<T> {
        let bytes = self.peek(T::WIDTH);
        if bytes.is_empty() {
            return None;
        }
        Some(T::decode(bytes))
    }

    /// Append one `T` at the write cursor.
    pub fn write<T: FixedWidth>(&mut self, v: T) -> Result<(), BufferError> {
        let mut scratch = [0u8; MAX_WIDTH];
        v.encode(&mut scratch[..T::WIDTH]);
        self.append(&scratch[..T::WIDTH])?;
        Ok(())
    }

    /// Overwrite one `T` at absolute `pos`; same silent no-op rule as `patch`.
    pub fn change<T: FixedWidth>(&mut self, pos: usize, v: T) {
        let mut scratch = [0u8; MAX_WIDTH];
        v.encode(&mut scratch[..T::WIDTH]);
        self.patch(pos, &scratch[..T::WIDTH]);
    }

    pub fn peek_u16(&self) -> Option<u16> {
        self.peek_as::<u16>()
    }

    pub fn peek_u32(&self) -> Option<u32> {
        self.peek_as::<u32>()
    }

    /// Consume `len` bytes as a string. Invalid UTF-8 is replaced, not rejected;
    /// use `take` for the raw bytes.
    pub fn get_string(&mut self, len: usize) -> Option<String> {
        if len == 0 {
            return Some(String::new());
        }
        let bytes = self.take(len);
        if bytes.is_empty() {
            return None;
        }
        Some(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Append the UTF-8 bytes of `v`, without any length prefix.
    pub fn write_string(&mut self, v: &str) -> Result<(), BufferError> {
        self.append(v.as_bytes())?;
        Ok(())
    }

    pub fn change_string(&mut self, pos: usize, v: &str) {
        self.patch(pos, v.as_bytes());
    }
}

macro_rules! typed_accessors {
    ($($ty:ty: $get:ident, $write:ident, $change:ident;)*) => {
        impl Buffer {
            $(
                #[doc = concat!("Consume one big-endian `", stringify!($ty), "`.")]
                #[inline]
                pub fn $get(&mut self) -> Option<$ty> {
                    self.get::<$ty>()
                }

                #[doc = concat!("Append one big-endian `", stringify!($ty), "`.")]
                #[inline]
                pub fn $write(&mut self, v: $ty) -> Result<(), BufferError> {
                    self.write(v)
                }

                #[doc = concat!("Patch one big-endian `", stringify!($ty), "` at `pos`.")]
                #[inline]
                pub fn $change(&mut self, pos: usize, v: $ty) {
                    self.change(pos, v)
                }
            )*
        }
    };
}

typed_accessors! {
    u8: get_u8, write_u8, change_u8;
    i8: get_i8, write_i8, change_i8;
    u16: get_u16, write_u16, change_u16;
    i16: get_i16, write_i16, change_i16;
    u32: get_u32, write_u32, change_u32;
    i32: get_i32, write_i32, change_i32;
    u64: get_u64, write_u64, change_u64;
    i64: get_i64, write_i64, change_i64;
    f32: get_f32, write_f32, change_f32;
    f64: get_f64, write_f64, change_f64;
}
