use crate::models::Summary;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save county summaries as CSV with header.
pub fn save_csv<P: AsRef<Path>>(summaries: &[Summary], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("county", "mean", "total"))?;
    for s in summaries {
        wtr.serialize((&s.county, s.mean, s.total))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save county summaries as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(summaries: &[Summary], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(summaries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Summary;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let sums = vec![Summary {
            county: "POLK".into(),
            mean: 100.0,
            total: 1500.0,
        }];
        save_csv(&sums, &csvp).unwrap();
        save_json(&sums, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
