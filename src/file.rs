// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_row;
use crate::error::Result;
use crate::normalize::{Row, Value};

/// Tabular sink: create parent dirs, truncate, write the header then every row.
pub fn write_table(path: &Path, columns: &[&str], rows: &[Vec<Value>], sep: char) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_row(&mut out, columns, sep)?;
    for row in rows {
        write_row(&mut out, row.as_slice(), sep)?;
    }
    out.flush()?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write typed rows to `<out_dir>/<table>.<ext>`. Returns the path written.
pub fn write_rows<R: Row>(export: &ExportOptions, rows: &[R]) -> Result<PathBuf> {
    let path = export.table_path(R::TABLE.name());
    let cells: Vec<Vec<Value>> = rows.iter().map(Row::cells).collect();
    write_table(&path, R::TABLE.columns(), &cells, export.format.delim())?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
