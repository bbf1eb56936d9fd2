use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::LineEnding;
use crate::sequence::{Sequence, SequencePair};

/// Writes both sequences to `path`, one comma-joined line each.
///
/// The file is created or truncated. The writer is owned by this call and
/// closed when it returns, whether or not a write failed.
pub fn write_sequences(
    pair: &SequencePair,
    path: &Path,
    line_ending: LineEnding,
) -> io::Result<()> {
    let f = File::create(path)?;
    let mut out = BufWriter::new(f);
    format_pair(pair, line_ending, &mut out)?;
    out.flush()?;
    log::debug!(
        "wrote {} bytes to {}",
        out.get_ref().metadata().map(|m| m.len()).unwrap_or(0),
        path.display()
    );
    Ok(())
}

fn format_pair(
    pair: &SequencePair,
    line_ending: LineEnding,
    out: &mut dyn Write,
) -> io::Result<()> {
    let eol = line_ending.as_str();
    format_sequence(&pair.first, out)?;
    out.write_all(eol.as_bytes())?;
    format_sequence(&pair.second, out)?;
    out.write_all(eol.as_bytes())?;
    Ok(())
}

/// Writes each letter separated by `,` with no trailing separator.
fn format_sequence(seq: &Sequence, out: &mut dyn Write) -> io::Result<()> {
    for (i, &b) in seq.as_bytes().iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        out.write_all(&[b])?;
    }
    Ok(())
}
