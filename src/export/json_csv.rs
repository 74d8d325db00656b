use crate::errors::AppResult;
use crate::models::press::PressEvent;
use std::io::Write;

/// Export JSON pretty-printed, as an array of rows.
pub fn write_json<W: Write>(rows: &[PressEvent], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Export CSV (header included thanks to serde).
pub fn write_csv<W: Write>(rows: &[PressEvent], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
