//! Write MEM job parameter-set files.

use std::fs::File;
use std::path::Path;

use crate::config::MemJobConfig;
use crate::error::AppError;

/// Write a job parameter set as pretty-printed JSON.
pub fn write_params_json(path: &Path, job: &MemJobConfig) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create parameter set '{}': {e}",
            path.display()
        ))
    })?;
    serde_json::to_writer_pretty(file, job)
        .map_err(|e| AppError::config(format!("Failed to write parameter set: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Era, MemChannel};

    #[test]
    fn written_file_parses_back_to_the_same_job() {
        let job = MemJobConfig::template(MemChannel::Dilepton, Era::Y2016);

        let dir = std::env::temp_dir().join("bbww_mem_prep_params_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mem_dilepton_cfg.json");

        write_params_json(&path, &job).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back: MemJobConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, job);

        std::fs::remove_file(&path).ok();
    }
}
