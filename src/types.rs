// The workspace indexes with i32, so wider-than-32-bit texts are rejected at
// the API boundary and narrower pointer widths cannot address the workspace.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("target pointer width must be at least 32 bits");

/// Size of the byte alphabet at the outer level.
pub(crate) const ALPHABET: usize = 256;

/// Byte value acting as the in-band document separator.
pub(crate) const SEPARATOR: usize = 1;

/// Longest supported text; every position must fit in an `i32` workspace cell.
pub(crate) const MAX_TEXT: usize = i32::MAX as usize;

/// Element of a text being suffix-sorted: bytes at the outer level, dense
/// substring names (`i32`) inside the recursion.
pub(crate) trait Symbol: Copy + Eq + Ord {
    /// Whether byte 1 is a positional document separator at this level.
    /// Names produced by the recursion carry no separator semantics.
    const HAS_SEPARATOR: bool;

    fn as_index(self) -> usize;
}

macro_rules! impl_symbol {
    ($($t:ty => $sep:expr),*) => {
        $(
            impl Symbol for $t {
                const HAS_SEPARATOR: bool = $sep;

                #[inline(always)]
                fn as_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_symbol!(u8 => true, i32 => false);
