//! Burrows–Wheeler transform with merge-ready bucket histograms.
//!
//! The engine is a linear-time induced-sorting suffix sorter specialized for
//! multi-document texts: byte 0 is the reserved implicit sentinel and byte 1
//! is an in-band document separator that compares below every ordinary byte
//! but stays distinct per occurrence, ordered by position. Because separators
//! never need sorting among themselves, many documents can be concatenated
//! and transformed in one pass without appending a sentinel per document.
//!
//! Alongside the transform, [`bwt`] emits a [`MergeAux`] histogram summary:
//! for every bucket of the transform it records how the rows that feed it
//! distribute over source columns, which is exactly the bookkeeping a
//! rank-counting merge of two independently built transforms needs.
//!
//! The sort order is over *contexts*: the prefix ending at each position,
//! read right to left. The output is therefore the transform of the reversed
//! text.
//! That is the orientation under which appending a document only appends
//! rows.
//!
//! ```
//! # fn main() -> Result<(), mbwt::Error> {
//! let text = b"ananab\x01abana\x01nana";
//! let out = mbwt::bwt(text)?;
//! assert_eq!(out.data.len(), text.len() + 1);
//! assert_eq!(mbwt::invert(out.primary, &out.data)?, text.to_vec());
//! # Ok(())
//! # }
//! ```

mod common;
mod error;
mod induce;
mod lms;
mod merge;
mod naming;
mod sais;
mod types;

pub use error::{Error, Result};
pub use merge::{Bwt, MergeAux};

use types::{MAX_TEXT, SEPARATOR};

/// Transform `text`, returning the rotated bytes, the primary index and the
/// merge auxiliary.
///
/// The text must be non-empty, free of byte 0, and short enough for a 32-bit
/// workspace. Byte 1 separates documents; a separator is expected to sit
/// between two non-empty documents, never first or last.
pub fn bwt(text: &[u8]) -> Result<Bwt> {
    if text.is_empty() {
        return Err(Error::Empty);
    }
    check_bytes(text)?;

    let mut sa = vec![0i32; text.len()];
    let (primary, ranks) = sais::transform(text, &mut sa);

    // row 0 is the empty context; it is extended by the first text byte, and
    // every following row carries the byte the workspace settled on.
    let mut data = Vec::with_capacity(text.len() + 1);
    data.push(text[0]);
    data.extend(sa.iter().map(|&b| b as u8));

    let aux = MergeAux::assemble(&data, ranks);
    Ok(Bwt {
        primary: primary + 1,
        data,
        aux,
    })
}

/// Fill `sa[..text.len()]` with the context order of `text`.
///
/// This is the plain suffix-sorting mode of the same engine; the reference
/// order sorts each position by its prefix read right to left, the implicit
/// sentinel sorting lowest.
///
/// # Panics
///
/// Panics if `sa` is shorter than `text`.
pub fn suffix_array(text: &[u8], sa: &mut [i32]) -> Result<()> {
    assert!(text.len() <= sa.len());
    check_bytes(text)?;
    if text.is_empty() {
        return Ok(());
    }
    let sa = &mut sa[..text.len()];
    sa.iter_mut().for_each(|s| *s = 0);
    sais::sort_suffixes(text, sa, types::ALPHABET);
    Ok(())
}

/// Recover the original text from a transform.
///
/// A standard LF walk from row 0, with one twist: reading a separator
/// advances through the separator bucket's own head cursor instead of rank
/// counting, because separator rows are ordered by text position and carry no
/// distinguishing content.
pub fn invert(primary: usize, data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::Empty);
    }
    if primary >= data.len() || data[primary] != 0 {
        return Err(Error::Malformed("primary index does not name the sentinel"));
    }

    let mut counts = [0usize; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    if counts[0] != 1 {
        return Err(Error::Malformed("expected exactly one sentinel byte"));
    }

    let mut heads = [0usize; 256];
    let mut sum = 0;
    for (h, &c) in heads.iter_mut().zip(counts.iter()) {
        *h = sum;
        sum += c;
    }

    // forward mapping for ordinary bytes; separators use the cursor below.
    let mut next = vec![0usize; data.len()];
    let mut cur = heads;
    for (i, &b) in data.iter().enumerate() {
        next[i] = cur[b as usize];
        cur[b as usize] += 1;
    }

    let mut out = Vec::with_capacity(data.len() - 1);
    let mut sep = heads[SEPARATOR];
    let mut row = 0;
    while data[row] != 0 {
        if out.len() == data.len() - 1 {
            return Err(Error::Malformed("walk does not close at the sentinel"));
        }
        let b = data[row];
        out.push(b);
        row = if b as usize == SEPARATOR {
            sep += 1;
            sep - 1
        } else {
            next[row]
        };
    }
    if out.len() != data.len() - 1 {
        return Err(Error::Malformed("walk closed before covering every row"));
    }
    Ok(out)
}

fn check_bytes(text: &[u8]) -> Result<()> {
    if text.len() > MAX_TEXT {
        return Err(Error::TooLong(text.len()));
    }
    if let Some(pos) = text.iter().position(|&b| b == 0) {
        return Err(Error::ReservedByte(pos));
    }
    Ok(())
}
