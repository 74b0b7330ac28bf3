use std::io::{self, Write};

use once_cell::sync::Lazy;

static NEEDS_ESCAPED: Lazy<[bool; 256]> = Lazy::new(|| {
    let mut table = [false; 256];
    for &byte in b"&\"<>" {
        table[byte as usize] = true;
    }
    table
});

/// Writes `bytes` to `out`, replacing `&`, `"`, `<` and `>` with entities.
///
/// Already-escaped text is escaped again: `&amp;` becomes `&amp;amp;`.
pub(crate) fn write_escaped(out: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    let mut offset = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        if !NEEDS_ESCAPED[byte as usize] {
            continue;
        }
        let entity: &[u8] = match byte {
            b'&' => b"&amp;",
            b'"' => b"&quot;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            _ => unreachable!(),
        };
        out.write_all(&bytes[offset..idx])?;
        out.write_all(entity)?;
        offset = idx + 1;
    }
    out.write_all(&bytes[offset..])
}
