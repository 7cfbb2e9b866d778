//! Minimal FlatBuffers wire-format reader.
//!
//! Decodes the table subset the FLA2 schema needs, without generated code:
//! root resolution, vtable lookup, inline scalars, and string / vector /
//! nested-table offsets. Every offset, vtable extent, string length, and
//! vector element read is validated against the chunk slice before any byte
//! is dereferenced, so malformed input fails with a structured error instead
//! of reading out of bounds.
//!
//! Wire layout recap: the root is a `u32` offset at byte 0 to the root table.
//! A table starts with an `i32` back-offset to its vtable
//! (`vtable = table_pos - soffset`). The vtable is `u16` words: total vtable
//! size, table size, then one entry per field id (`4 + 2 * id`); an entry of
//! zero, or an entry past the vtable's end, marks the field absent. Scalar
//! fields live inline at `table_pos + entry`; strings, vectors, and tables
//! are reached through a `u32` offset relative to the field's own location.

use crate::error::{Error, Result};

fn out_of_bounds(path: &str, end: usize, available: usize) -> Error {
    Error::Fla2OutOfBounds {
        path: path.to_string(),
        end,
        available,
    }
}

/// Borrow `count` bytes starting at `at`, or fail with the field's path.
fn bytes_at<'a>(buf: &'a [u8], at: usize, count: usize, path: &str) -> Result<&'a [u8]> {
    let end = at
        .checked_add(count)
        .filter(|end| *end <= buf.len())
        .ok_or_else(|| out_of_bounds(path, at.saturating_add(count), buf.len()))?;
    Ok(&buf[at..end])
}

fn read_u16(buf: &[u8], at: usize, path: &str) -> Result<u16> {
    let b = bytes_at(buf, at, 2, path)?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

fn read_u32(buf: &[u8], at: usize, path: &str) -> Result<u32> {
    let b = bytes_at(buf, at, 4, path)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_i32(buf: &[u8], at: usize, path: &str) -> Result<i32> {
    let b = bytes_at(buf, at, 4, path)?;
    Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_f32(buf: &[u8], at: usize, path: &str) -> Result<f32> {
    let b = bytes_at(buf, at, 4, path)?;
    Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_string(buf: &[u8], at: usize, path: &str) -> Result<String> {
    let len = read_u32(buf, at, path)? as usize;
    let bytes = bytes_at(buf, at + 4, len, path)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// A table position with its resolved, bounds-checked vtable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fla2Table<'a> {
    buf: &'a [u8],
    pos: usize,
    vtable: usize,
    vtable_size: usize,
}

impl<'a> Fla2Table<'a> {
    /// Resolve the root table of a chunk payload.
    pub(crate) fn root(buf: &'a [u8], path: &str) -> Result<Self> {
        let pos = read_u32(buf, 0, path)? as usize;
        Self::at(buf, pos, path)
    }

    /// Resolve the table at `pos`, validating its vtable.
    fn at(buf: &'a [u8], pos: usize, path: &str) -> Result<Self> {
        let soffset = read_i32(buf, pos, path)?;
        let vtable = i64::try_from(pos)
            .ok()
            .map(|p| p - i64::from(soffset))
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| Error::Fla2MalformedTable {
                path: path.to_string(),
            })?;

        let vtable_size = read_u16(buf, vtable, path)? as usize;
        if vtable_size < 4 {
            return Err(Error::Fla2MalformedTable {
                path: path.to_string(),
            });
        }
        bytes_at(buf, vtable, vtable_size, path)?;

        Ok(Self {
            buf,
            pos,
            vtable,
            vtable_size,
        })
    }

    /// Absolute location of a field's inline data, or `None` when absent.
    fn field_loc(&self, id: u16) -> Option<usize> {
        let entry_at = 4 + 2 * usize::from(id);
        if entry_at + 2 > self.vtable_size {
            return None;
        }
        // The whole vtable was bounds-checked in `at`.
        let at = self.vtable + entry_at;
        let entry = u16::from_le_bytes([self.buf[at], self.buf[at + 1]]);
        if entry == 0 {
            None
        } else {
            Some(self.pos + usize::from(entry))
        }
    }

    /// Whether the writer stored the field at all.
    pub(crate) fn has_field(&self, id: u16) -> bool {
        self.field_loc(id).is_some()
    }

    pub(crate) fn u32_field(&self, id: u16, default: u32, path: &str) -> Result<u32> {
        match self.field_loc(id) {
            Some(loc) => read_u32(self.buf, loc, path),
            None => Ok(default),
        }
    }

    pub(crate) fn i32_field(&self, id: u16, default: i32, path: &str) -> Result<i32> {
        match self.field_loc(id) {
            Some(loc) => read_i32(self.buf, loc, path),
            None => Ok(default),
        }
    }

    pub(crate) fn u8_field(&self, id: u16, default: u8, path: &str) -> Result<u8> {
        match self.field_loc(id) {
            Some(loc) => Ok(bytes_at(self.buf, loc, 1, path)?[0]),
            None => Ok(default),
        }
    }

    pub(crate) fn bool_field(&self, id: u16, default: bool, path: &str) -> Result<bool> {
        match self.field_loc(id) {
            Some(loc) => Ok(bytes_at(self.buf, loc, 1, path)?[0] != 0),
            None => Ok(default),
        }
    }

    /// Follow a field's relative offset to its target position.
    fn offset_target(&self, loc: usize, path: &str) -> Result<usize> {
        let rel = read_u32(self.buf, loc, path)? as usize;
        Ok(loc + rel)
    }

    pub(crate) fn str_field(&self, id: u16, path: &str) -> Result<Option<String>> {
        let Some(loc) = self.field_loc(id) else {
            return Ok(None);
        };
        let target = self.offset_target(loc, path)?;
        Ok(Some(read_string(self.buf, target, path)?))
    }

    pub(crate) fn table_field(&self, id: u16, path: &str) -> Result<Option<Fla2Table<'a>>> {
        let Some(loc) = self.field_loc(id) else {
            return Ok(None);
        };
        let target = self.offset_target(loc, path)?;
        Ok(Some(Fla2Table::at(self.buf, target, path)?))
    }

    pub(crate) fn vector_field(&self, id: u16, path: &str) -> Result<Option<Fla2Vector<'a>>> {
        let Some(loc) = self.field_loc(id) else {
            return Ok(None);
        };
        let target = self.offset_target(loc, path)?;
        let len = read_u32(self.buf, target, path)? as usize;
        Ok(Some(Fla2Vector {
            buf: self.buf,
            base: target + 4,
            len,
        }))
    }

    /// A `[u8]` vector field borrowed as one contiguous slice.
    pub(crate) fn blob_field(&self, id: u16, path: &str) -> Result<Option<&'a [u8]>> {
        match self.vector_field(id, path)? {
            Some(vector) => Ok(Some(vector.u8_slice(path)?)),
            None => Ok(None),
        }
    }
}

/// A vector's element region; element width is fixed by the accessor used.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fla2Vector<'a> {
    buf: &'a [u8],
    base: usize,
    len: usize,
}

impl<'a> Fla2Vector<'a> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Confirm every element of the given width lies inside the buffer.
    ///
    /// Called before allocating element storage, so a forged count fails
    /// here instead of reserving gigabytes.
    pub(crate) fn verify_extent(&self, width: usize, path: &str) -> Result<()> {
        bytes_at(self.buf, self.base, self.len * width, path).map(|_| ())
    }

    pub(crate) fn u32_at(&self, index: usize, path: &str) -> Result<u32> {
        read_u32(self.buf, self.base + 4 * index, path)
    }

    pub(crate) fn f32_at(&self, index: usize, path: &str) -> Result<f32> {
        read_f32(self.buf, self.base + 4 * index, path)
    }

    pub(crate) fn str_at(&self, index: usize, path: &str) -> Result<String> {
        let loc = self.base + 4 * index;
        let rel = read_u32(self.buf, loc, path)? as usize;
        read_string(self.buf, loc + rel, path)
    }

    pub(crate) fn table_at(&self, index: usize, path: &str) -> Result<Fla2Table<'a>> {
        let loc = self.base + 4 * index;
        let rel = read_u32(self.buf, loc, path)? as usize;
        Fla2Table::at(self.buf, loc + rel, path)
    }

    /// The whole element region as bytes (for `[u8]` vectors).
    pub(crate) fn u8_slice(&self, path: &str) -> Result<&'a [u8]> {
        bytes_at(self.buf, self.base, self.len, path)
    }
}
