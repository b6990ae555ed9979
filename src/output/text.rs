//! Plain-text listings printed during an interactive session.
//!
//! Every writer takes a `color` flag; headers are painted with yansi only
//! when it is set. The session sets it only when stdout is a terminal.

use std::io::{self, Write};

use bytesize::ByteSize;
use yansi::Paint;

use crate::actions::DeleteFailure;
use crate::duplicates::{EnumeratedDuplicates, SizeIndex, SkippedFile};
use crate::scanner::hash_to_hex;

fn size_header(size: u64, color: bool) -> String {
    let text = format!("{} bytes", size);
    if color {
        text.bold().to_string()
    } else {
        text
    }
}

fn hash_header(hex: &str, color: bool) -> String {
    if color {
        format!("Hash: {}", hex.cyan())
    } else {
        format!("Hash: {}", hex)
    }
}

/// Print each size in `order` followed by its paths and a blank line.
///
/// Sizes in `order` that are missing from `index` are skipped.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_size_listing<W: Write>(
    out: &mut W,
    index: &SizeIndex,
    order: &[u64],
    color: bool,
) -> io::Result<()> {
    for size in order {
        let Some(paths) = index.get(size) else {
            continue;
        };
        writeln!(out, "{}", size_header(*size, color))?;
        for path in paths {
            writeln!(out, "{}", path.display())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the numbered duplicate listing: size, then each hash group with its
/// numbered members.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_duplicate_listing<W: Write>(
    out: &mut W,
    numbered: &EnumeratedDuplicates,
    color: bool,
) -> io::Result<()> {
    for section in numbered.sections() {
        writeln!(out, "{}", size_header(section.size, color))?;
        for group in &section.groups {
            let hex = hash_to_hex(&group.hash);
            writeln!(out, "{}", hash_header(&hex, color))?;
            for file in &group.files {
                writeln!(out, "{}. {}", file.number, file.path.display())?;
            }
        }
    }
    Ok(())
}

/// Print the freed-space total, with a human-readable size from 1 KiB up.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_freed_space<W: Write>(out: &mut W, bytes: u64) -> io::Result<()> {
    if bytes >= 1024 {
        writeln!(
            out,
            "Total freed up space: {} bytes ({})",
            bytes,
            ByteSize::b(bytes)
        )
    } else {
        writeln!(out, "Total freed up space: {} bytes", bytes)
    }
}

/// Print files left out of detection because they could not be hashed.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_skipped<W: Write>(out: &mut W, skipped: &[SkippedFile]) -> io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }
    writeln!(out, "Skipped {} unreadable file(s):", skipped.len())?;
    for file in skipped {
        writeln!(out, "  {}: {}", file.path.display(), file.reason)?;
    }
    Ok(())
}

/// Print selections that could not be deleted.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_delete_failures<W: Write>(out: &mut W, failures: &[DeleteFailure]) -> io::Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    writeln!(out, "Failed to delete {} file(s):", failures.len())?;
    for failure in failures {
        writeln!(out, "  {}. {}", failure.number, failure.error)?;
    }
    Ok(())
}
