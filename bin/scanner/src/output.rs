use eyre::{Result, WrapErr};
use serde::Serialize;
use std::io::{self, Write};

/// Writes each record as pretty printed JSON followed by a newline.
pub fn write_records<W: Write, T: Serialize>(writer: &mut W, records: &[T]) -> Result<()> {
    for record in records {
        serde_json::to_writer_pretty(&mut *writer, record).wrap_err("failed to serialize record")?;
        writeln!(writer)?;
    }

    Ok(())
}

pub fn print_records<T: Serialize>(records: &[T]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_records(&mut handle, records)?;
    handle.flush()?;

    Ok(())
}
