use std::io::{Read, Result as IoResult, Write};

/// Serialization into the GM/T wire form: big-endian bytes, fixed width,
/// highest tower component first.
pub trait ToBytes {
    fn write<W: Write>(&self, writer: W) -> IoResult<()>;
}

pub trait FromBytes: Sized {
    fn read<R: Read>(reader: R) -> IoResult<Self>;
}

/// Takes as input a sequence of objects and converts them to a vector of
/// their byte representations, concatenated.
#[macro_export]
macro_rules! to_bytes {
    ($($x:expr),*) => ({
        let mut buf = vec![];
        {
            let result: std::io::Result<()> = (|| {
                $($crate::bytes::ToBytes::write(&$x, &mut buf)?;)*
                Ok(())
            })();
            result.map(|_| buf)
        }
    });
}

impl ToBytes for u8 {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        writer.write_all(&[*self])
    }
}

impl ToBytes for [u8] {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        writer.write_all(self)
    }
}

impl ToBytes for Vec<u8> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        writer.write_all(self)
    }
}

impl<'a, T: 'a + ToBytes> ToBytes for &'a T {
    #[inline]
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        (*self).write(writer)
    }
}

#[cfg(test)]
mod tests {
    use crate::to_bytes;

    #[test]
    fn concatenates_in_order() {
        let bytes = to_bytes![0x01u8, vec![0x02u8, 0x03], 0x04u8].unwrap();
        assert_eq!(bytes, vec![0x01, 0x02, 0x03, 0x04]);
    }
}
