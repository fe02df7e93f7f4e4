//! Cross-reference table reader and offset verification.
//!
//! Reads back the single classic xref table the writer produces and checks
//! that every in-use entry points exactly at its object's `N G obj` header.
//! Only uncompressed tables without `/Prev` chains are supported.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Cross-reference table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRefEntry {
    /// Byte offset (in-use entries) or next free object (free entries)
    pub offset: u64,
    /// Generation number
    pub generation: u16,
    /// Whether the object is in use
    pub in_use: bool,
}

impl XRefEntry {
    /// Create a new in-use entry.
    pub fn uncompressed(offset: u64, generation: u16) -> Self {
        Self {
            offset,
            generation,
            in_use: true,
        }
    }

    /// Create a new free entry.
    pub fn free(next_free: u64, generation: u16) -> Self {
        Self {
            offset: next_free,
            generation,
            in_use: false,
        }
    }
}

/// Values read from the trailer dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trailer {
    /// `/Size` entry
    pub size: Option<u32>,
    /// Object number from `/Root`
    pub root: Option<u32>,
}

/// Cross-reference table that maps object numbers to their locations.
#[derive(Debug, Clone, Default)]
pub struct CrossRefTable {
    entries: BTreeMap<u32, XRefEntry>,
    trailer: Trailer,
    /// Byte offset of the `xref` keyword
    pub start: u64,
}

impl CrossRefTable {
    /// Get an entry by object number.
    pub fn get(&self, object_number: u32) -> Option<&XRefEntry> {
        self.entries.get(&object_number)
    }

    /// Iterate over entries in object-number order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &XRefEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// In-use entries only.
    pub fn in_use(&self) -> impl Iterator<Item = (u32, &XRefEntry)> + '_ {
        self.entries().filter(|(_, entry)| entry.in_use)
    }

    /// The trailer values.
    pub fn trailer(&self) -> Trailer {
        self.trailer
    }

    /// Get the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Find the byte offset of the xref table from the `startxref` keyword.
pub fn find_xref_offset(data: &[u8]) -> Result<u64> {
    let tail_start = data.len().saturating_sub(2048);
    let content = String::from_utf8_lossy(&data[tail_start..]);
    let startxref_pos = content.rfind("startxref").ok_or(Error::InvalidXref)?;
    let after_keyword = &content[startxref_pos + "startxref".len()..];

    after_keyword
        .split(['\r', '\n'])
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| line.chars().all(|c| c.is_ascii_digit()))
        .ok_or(Error::InvalidXref)?
        .parse::<u64>()
        .map_err(|_| Error::InvalidXref)
}

/// Parse the classic xref table starting at `offset`.
///
/// The table format is:
/// ```text
/// xref
/// 0 6
/// 0000000000 65535 f
/// 0000000018 00000 n
/// ...
/// trailer
/// << /Size 6 /Root 1 0 R >>
/// ```
pub fn parse_xref(data: &[u8], offset: u64) -> Result<CrossRefTable> {
    let start = usize::try_from(offset).map_err(|_| Error::InvalidXref)?;
    if start >= data.len() || !data[start..].starts_with(b"xref") {
        return Err(Error::InvalidXref);
    }

    let content = String::from_utf8_lossy(&data[start..]);
    let mut lines = content.split(['\r', '\n']).map(str::trim).filter(|l| !l.is_empty());
    lines.next(); // "xref"

    let mut table = CrossRefTable {
        start: offset,
        ..CrossRefTable::default()
    };

    loop {
        let header = lines.next().ok_or(Error::InvalidXref)?;
        if header.starts_with("trailer") {
            let rest = header.trim_start_matches("trailer");
            let dict: String = std::iter::once(rest)
                .chain(lines.by_ref().take_while(|l| !l.starts_with("startxref")))
                .collect::<Vec<_>>()
                .join(" ");
            table.trailer = parse_trailer(&dict);
            break;
        }

        let mut parts = header.split_whitespace();
        let first: u32 = parse_field(parts.next())?;
        let count: u32 = parse_field(parts.next())?;

        for i in 0..count {
            let line = lines.next().ok_or(Error::InvalidXref)?;
            let mut fields = line.split_whitespace();
            let entry_offset: u64 = parse_field(fields.next())?;
            let generation: u16 = parse_field(fields.next())?;
            let entry = match fields.next() {
                Some("n") => XRefEntry::uncompressed(entry_offset, generation),
                Some("f") => XRefEntry::free(entry_offset, generation),
                _ => return Err(Error::InvalidXref),
            };
            let id = first.checked_add(i).ok_or(Error::InvalidXref)?;
            table.entries.insert(id, entry);
        }
    }

    log::trace!("Parsed xref at {} with {} entries", offset, table.len());
    Ok(table)
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>) -> Result<T> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or(Error::InvalidXref)
}

/// Pull `/Size` and `/Root` out of a flat trailer dictionary.
fn parse_trailer(dict: &str) -> Trailer {
    let tokens: Vec<&str> = dict.split_whitespace().collect();
    let value_after = |key: &str| {
        tokens
            .iter()
            .position(|t| *t == key)
            .and_then(|pos| tokens.get(pos + 1))
            .and_then(|t| t.trim_end_matches(">>").parse().ok())
    };
    Trailer {
        size: value_after("/Size"),
        root: value_after("/Root"),
    }
}

/// Check a complete PDF file: `startxref` must point at the `xref` keyword,
/// `/Size` must match the entry count, `/Root` must be an in-use object, and
/// every in-use entry must land on its `N G obj` header.
pub fn verify_offsets(data: &[u8]) -> Result<CrossRefTable> {
    let offset = find_xref_offset(data)?;
    let table = parse_xref(data, offset)?;

    let trailer = table.trailer();
    if trailer.size != Some(table.len() as u32) {
        return Err(Error::InvalidXref);
    }
    let root = trailer.root.ok_or(Error::InvalidXref)?;
    if !table.get(root).is_some_and(|entry| entry.in_use) {
        return Err(Error::MissingObject(root));
    }

    for (id, entry) in table.in_use() {
        let marker = format!("{} {} obj", id, entry.generation);
        let lands = usize::try_from(entry.offset)
            .ok()
            .and_then(|start| data.get(start..))
            .is_some_and(|rest| rest.starts_with(marker.as_bytes()));
        if !lands {
            return Err(Error::ObjectOffsetMismatch {
                id,
                offset: entry.offset,
            });
        }
    }

    log::debug!("Verified {} xref entries", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::assemble;

    #[test]
    fn test_find_xref_offset() {
        let data = b"%PDF-1.4\n...\nstartxref\n1234\n%%EOF";
        assert_eq!(find_xref_offset(data).unwrap(), 1234);
    }

    #[test]
    fn test_find_xref_offset_missing_keyword() {
        assert!(matches!(find_xref_offset(b"%PDF-1.4\n%%EOF"), Err(Error::InvalidXref)));
    }

    #[test]
    fn test_verify_written_document() {
        let bytes = assemble(&["BT\nET", "BT\nET"]).unwrap();
        let table = verify_offsets(&bytes).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.in_use().count(), 7);
        assert_eq!(table.trailer().root, Some(1));
        assert!(!table.get(0).unwrap().in_use);
    }

    #[test]
    fn test_detects_shifted_offset() {
        let mut bytes = assemble(&["BT\nET"]).unwrap();
        // Insert a byte after the header: every object moves, the xref does not.
        bytes.insert(9, b' ');
        // startxref now points one byte early, so the table itself is not found.
        assert!(verify_offsets(&bytes).is_err());
    }

    #[test]
    fn test_detects_wrong_entry() {
        let bytes = assemble(&["BT\nET"]).unwrap();
        let xref_pos = find_xref_offset(&bytes).unwrap() as usize;
        assert!(bytes[xref_pos..].starts_with(b"xref\n0 6\n"));
        let first_entry = xref_pos + "xref\n0 6\n0000000000 65535 f \n".len();
        let mut corrupted = bytes.clone();
        corrupted[first_entry + 9] = if corrupted[first_entry + 9] == b'0' { b'1' } else { b'0' };
        assert!(matches!(
            verify_offsets(&corrupted),
            Err(Error::ObjectOffsetMismatch { id: 1, .. })
        ));
    }

    #[test]
    fn test_subsection_past_last_object_number() {
        let data = b"xref\n4294967295 2\n0000000009 00000 n \n0000000042 00000 n \ntrailer\n<< /Size 2 /Root 1 0 R >>\nstartxref\n0\n%%EOF";
        assert!(matches!(parse_xref(data, 0), Err(Error::InvalidXref)));
    }

    #[test]
    fn test_subsection_ending_on_last_object_number() {
        let data = b"xref\n4294967295 1\n0000000009 00000 n \ntrailer\n<< /Size 1 >>\nstartxref\n0\n%%EOF";
        let table = parse_xref(data, 0).unwrap();
        assert_eq!(table.get(u32::MAX).map(|entry| entry.offset), Some(9));
    }
}
