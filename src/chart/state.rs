//! Saved view state: the host's base state plus the chart's selection.
//!
//! Layout, big-endian:
//!
//! ```text
//! "PIEV" | version: u8 | base_len: u32 | base | selected: i32 | label_len: u32 | label (UTF-8)
//! ```

use crate::errors::StateError;

const MAGIC: &[u8; 4] = b"PIEV";
pub const FORMAT_VERSION: u8 = 1;

/// Selection value meaning "nothing selected".
pub const NO_SELECTION: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    /// Opaque state of the base view, handed back untouched on restore.
    pub base: Vec<u8>,
    pub selected_index: i32,
    pub center_label: String,
}

impl SavedState {
    pub fn new(base: Vec<u8>, selected: Option<usize>, center_label: impl Into<String>) -> Self {
        Self {
            base,
            selected_index: selected
                .and_then(|index| i32::try_from(index).ok())
                .unwrap_or(NO_SELECTION),
            center_label: center_label.into(),
        }
    }

    /// The selection as an index, treating any negative value as none.
    pub fn selected(&self) -> Option<usize> {
        usize::try_from(self.selected_index).ok()
    }

    pub fn encode(&self) -> Vec<u8> {
        let label = self.center_label.as_bytes();
        let mut out = Vec::with_capacity(MAGIC.len() + 1 + 4 + self.base.len() + 4 + 4 + label.len());
        out.extend_from_slice(MAGIC);
        out.push(FORMAT_VERSION);
        write_bytes(&mut out, &self.base);
        out.extend_from_slice(&self.selected_index.to_be_bytes());
        write_bytes(&mut out, label);
        out
    }

    pub fn decode(blob: &[u8]) -> Result<Self, StateError> {
        let mut reader = Reader::new(blob);
        if reader.take(MAGIC.len(), "magic").ok() != Some(MAGIC.as_slice()) {
            return Err(StateError::BadMagic);
        }
        let version = reader.take(1, "version")?[0];
        if version != FORMAT_VERSION {
            return Err(StateError::UnsupportedVersion(version));
        }
        let base = reader.take_prefixed("base")?.to_vec();
        let selected_index = i32::from_be_bytes(reader.take_array("selected_index")?);
        let label = reader.take_prefixed("center_label")?;
        let center_label = std::str::from_utf8(label)
            .map_err(|_| StateError::InvalidUtf8)?
            .to_string();
        if !reader.is_empty() {
            return Err(StateError::TrailingBytes(reader.remaining()));
        }
        Ok(Self {
            base,
            selected_index,
            center_label,
        })
    }
}

fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    // Blobs beyond u32::MAX bytes are not produced by any view.
    let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&bytes[..len as usize]);
}

struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], StateError> {
        if self.data.len() < len {
            return Err(StateError::Truncated { field });
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], StateError> {
        let bytes = self.take(N, field)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    fn take_prefixed(&mut self, field: &'static str) -> Result<&'a [u8], StateError> {
        let len = u32::from_be_bytes(self.take_array(field)?) as usize;
        self.take(len, field)
    }

    fn remaining(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
