use crate::models::{CountryStat, RegionMarker};
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save country rows as CSV with header.
pub fn save_csv<P: AsRef<Path>>(stats: &[CountryStat], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("code", "name", "request_count", "color"))?;
    for s in stats {
        wtr.serialize((&s.code, &s.name, s.request_count, &s.color))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save country rows as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(stats: &[CountryStat], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(stats)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save the marker list as a pretty JSON array.
pub fn save_markers_json<P: AsRef<Path>>(markers: &[RegionMarker], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(markers)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("countries.csv");
        let jsonp = dir.path().join("countries.json");
        let stats = data::country_stats();
        save_csv(&stats, &csvp).unwrap();
        save_json(&stats, &jsonp).unwrap();

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("code,name,request_count,color"));
        assert!(csv_text.contains("US,United States,45000000,#1e40af"));

        let parsed: Vec<CountryStat> =
            serde_json::from_str(&std::fs::read_to_string(&jsonp).unwrap()).unwrap();
        assert_eq!(parsed, stats);
    }

    #[test]
    fn write_markers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markers.json");
        save_markers_json(&data::region_markers(), &path).unwrap();
        let parsed: Vec<RegionMarker> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 19);
        assert_eq!(parsed[2].id, "LHR");
    }
}
