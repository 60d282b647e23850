//! Product-version read from an executable's embedded version resource.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading version metadata from a file.
///
/// These never escape the locator: every variant is downgraded to a warning
/// log and the `Unknown` version placeholder.
#[derive(Debug, Error)]
pub(crate) enum MetadataError {
    /// The file could not be read at all.
    #[error("unable to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file carries no `ProductVersion` entry.
    #[error("no ProductVersion entry in the file's version resource")]
    NoVersionResource,

    /// The `ProductVersion` value is not valid UTF-16.
    #[error("ProductVersion value is not valid UTF-16")]
    Encoding,
}

/// Read the `ProductVersion` string embedded in a Windows executable.
///
/// PE binaries store version metadata in a `VS_VERSION_INFO` resource whose
/// string table holds UTF-16LE key/value pairs. Rather than walking the PE
/// section tree, this scans the raw bytes for the `ProductVersion` key and
/// decodes the null-terminated value that follows it. The resource format
/// aligns values to 32-bit boundaries, and header plus key already land this
/// value on one, so it sits directly after the key's terminator. Works on any
/// file that embeds the resource and fails with a typed error on everything
/// else; it never panics.
pub(crate) fn read_product_version(path: &Path) -> Result<String, MetadataError> {
    let bytes = fs::read(path)?;
    product_version_from_bytes(&bytes)
}

fn product_version_from_bytes(bytes: &[u8]) -> Result<String, MetadataError> {
    // The key as it appears on disk: UTF-16LE plus its null terminator.
    let key: Vec<u8> = "ProductVersion"
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .chain([0u8, 0u8])
        .collect();

    let start = find_subsequence(bytes, &key).ok_or(MetadataError::NoVersionResource)?;
    let mut offset = start + key.len();

    let mut units = Vec::new();
    while offset + 1 < bytes.len() {
        let unit = u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);
        if unit == 0 {
            break;
        }
        units.push(unit);
        offset += 2;
    }

    let value: String = char::decode_utf16(units)
        .collect::<Result<_, _>>()
        .map_err(|_| MetadataError::Encoding)?;
    let value = value.trim().to_string();

    if value.is_empty() {
        return Err(MetadataError::NoVersionResource);
    }
    Ok(value)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
