//! Read/write sample-table JSON.
//!
//! The table is owned by the per-era samples module; this crate reads it,
//! tags a copy, and writes the tagged copy to a separate path. The input
//! file is never modified in place.

use std::fs::File;
use std::path::Path;

use crate::domain::SampleTable;
use crate::error::AppError;

/// Read a sample table from a JSON file.
pub fn read_sample_table(path: &Path) -> Result<SampleTable, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!(
            "Failed to open sample table '{}': {e}",
            path.display()
        ))
    })?;
    let table: SampleTable = serde_json::from_reader(file).map_err(|e| {
        AppError::config(format!(
            "Invalid sample table JSON '{}': {e}",
            path.display()
        ))
    })?;
    Ok(table)
}

/// Write a (tagged) sample table to a JSON file.
pub fn write_sample_table(path: &Path, table: &SampleTable) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create sample table '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::to_writer_pretty(file, table)
        .map_err(|e| AppError::config(format!("Failed to write sample table: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SampleRecord;

    #[test]
    fn missing_file_is_a_config_error_naming_the_path() {
        let err = read_sample_table(Path::new("/nonexistent/samples.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("samples.json"), "message: {err}");
    }

    #[test]
    fn table_round_trips_through_a_file() {
        let mut table = SampleTable::new();
        table.insert("sum_events".to_string(), SampleRecord::default());
        table.insert(
            "TTTo2L2Nu".to_string(),
            SampleRecord::with_process("TTTo2L2Nu"),
        );

        let dir = std::env::temp_dir().join("bbww_mem_prep_table_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("samples.json");

        write_sample_table(&path, &table).unwrap();
        let back = read_sample_table(&path).unwrap();
        assert_eq!(back, table);

        std::fs::remove_file(&path).ok();
    }
}
