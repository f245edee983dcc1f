use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::records::PlacementRecord;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u64,
    team: &'a str,
    player: &'a str,
    sport: &'a str,
    age_class: &'a str,
    position: Option<u32>,
    points: Option<u32>,
    created_at: String,
}

impl<'a> From<&'a PlacementRecord> for CsvRow<'a> {
    fn from(r: &'a PlacementRecord) -> Self {
        Self {
            id: r.id,
            team: r.team.as_deref().unwrap_or("Individual"),
            player: r.player.as_deref().unwrap_or(""),
            sport: r.sport.name(),
            age_class: r.age_class.name(),
            position: r.position,
            points: r.points,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// "leaderboard_entries_2025-11-21.csv"
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("leaderboard_entries_{}.csv", date.format("%Y-%m-%d"))
}

/// Write entries as CSV with a header row. Every field is quoted.
pub fn write_entries_csv<W: Write>(records: &[PlacementRecord], writer: W) -> Result<()> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    for record in records {
        out.serialize(CsvRow::from(record))
            .with_context(|| format!("Failed to write entry {}", record.id))?;
    }
    out.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export entries to a CSV file. Returns the number of rows written.
///
/// An empty selection is an error so nobody ships a header-only file.
pub fn export_entries_csv(path: &Path, records: &[PlacementRecord]) -> Result<usize> {
    if records.is_empty() {
        anyhow::bail!("No rows to export for current filters");
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_entries_csv(records, file)?;

    info!(rows = records.len(), path = %path.display(), "Exported entries");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AgeClass, Sport};
    use chrono::{TimeZone, Utc};

    fn record(id: u64, team: Option<&str>, player: Option<&str>) -> PlacementRecord {
        PlacementRecord {
            id,
            team: team.map(str::to_string),
            player: player.map(str::to_string),
            sport: Sport::TableTennisMixedDoubles,
            age_class: AgeClass::MenSeniorVeteran,
            position: Some(1),
            points: Some(5),
            created_at: Utc.with_ymd_and_hms(2025, 11, 21, 10, 30, 0).unwrap(),
        }
    }

    fn to_string(records: &[PlacementRecord]) -> String {
        let mut buf = Vec::new();
        write_entries_csv(records, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_and_row() {
        let out = to_string(&[record(4, Some("Hamirpur"), None)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            r#""id","team","player","sport","age_class","position","points","created_at""#
        );
        assert_eq!(
            lines[1],
            r#""4","Hamirpur","","Table Tennis (Mix Doubles)","Men - Senior Veteran (53+)","1","5","2025-11-21T10:30:00+00:00""#
        );
    }

    #[test]
    fn test_individual_and_quotes_escaped() {
        let out = to_string(&[record(1, None, Some(r#"R. "Bunty" Thakur"#))]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with(r#""1","Individual","R. ""Bunty"" Thakur","#));
    }

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 21).unwrap();
        assert_eq!(default_export_file_name(date), "leaderboard_entries_2025-11-21.csv");
    }

    #[test]
    fn test_export_empty_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_entries_csv(&dir.path().join("out.csv"), &[]).unwrap_err();
        assert_eq!(err.to_string(), "No rows to export for current filters");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = export_entries_csv(&path, &[record(1, Some("Chamba"), None), record(2, None, None)])
            .unwrap();
        assert_eq!(rows, 2);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
