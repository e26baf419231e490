//! Integration tests for solo endorsement coverage over imported logbooks

use chrono::NaiveDate;
use logbook_processor::{
    InstructorEndorsement, LogbookConfig, LogbookProcessor, check_endorsements, find_coverage_gaps,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A student's logbook: dual lessons, then solo flights spread over the
/// year, one of them after the first endorsement lapsed
fn write_student_logbook() -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    let content = [
        "ForeFlight Logbook Import,This row is required for importing into ForeFlight. Do not delete or modify.",
        "",
        "Aircraft Table",
        "AircraftID,TypeCode,Make,Model,GearType,aircraftClass (FAA)",
        "N12345,C172,Cessna,172S,fixed_tricycle,airplane_single_engine_land",
        "",
        "Flights Table",
        "Date,AircraftID,From,To,TotalTime,PIC,DualReceived,Solo,DayLandingsFullStop,PilotComments",
        "2022-12-10,N12345,KPAO,KPAO,1.2,0.0,1.2,0.0,5,Dual pattern work",
        "2023-02-15,N12345,KPAO,KPAO,1.0,1.0,0.0,1.0,3,First solo",
        "2023-05-01,N12345,KPAO,KSQL,1.0,1.0,0.0,1.0,2,Solo to San Carlos",
        "2023-05-20,N12345,KPAO,KHAF,1.1,1.1,0.0,1.1,2,Solo to Half Moon Bay",
        "2023-07-02,N12345,KPAO,KLVK,1.3,1.3,0.0,1.3,2,Solo to Livermore",
    ]
    .join("\n");
    writeln!(file, "{}", content)?;
    file.flush()?;
    Ok(file)
}

fn processor() -> anyhow::Result<LogbookProcessor> {
    Ok(LogbookProcessor::new(LogbookConfig::default())?.with_today(date(2024, 6, 1)))
}

#[test]
fn test_flight_after_lapse_is_reported() -> anyhow::Result<()> {
    let file = write_student_logbook()?;
    let logbook = processor()?.process_file(file.path())?;

    let endorsements = [InstructorEndorsement::new(date(2023, 1, 1))];
    let report = check_endorsements(&logbook.entries, &endorsements);

    let unendorsed: Vec<NaiveDate> = report.unendorsed_flights.iter().map(|f| f.date).collect();
    assert_eq!(unendorsed, vec![date(2023, 5, 1), date(2023, 5, 20), date(2023, 7, 2)]);
    assert_eq!(report.total_invalid, 3);
    assert_eq!(report.unendorsed_flights[0].route, "KPAO → KSQL");
    assert_eq!(report.unendorsed_flights[0].aircraft_type, "C172");

    assert_eq!(report.gaps.len(), 1);
    assert_eq!(report.gaps[0].start_date, date(2023, 4, 1));
    assert_eq!(report.gaps[0].end_date, date(2023, 7, 2));
    assert_eq!(report.gaps[0].flight_count, 3);
    Ok(())
}

#[test]
fn test_renewed_endorsement_closes_gap() -> anyhow::Result<()> {
    let file = write_student_logbook()?;
    let processor = processor()?;
    let logbook = processor.process_file(file.path())?;

    let report = processor.check_endorsements(&logbook, &[date(2023, 1, 1), date(2023, 6, 1)]);

    assert_eq!(report.total_invalid, 2);
    assert_eq!(report.gaps.len(), 1);
    let gap = report.gaps[0];
    assert_eq!((gap.start_date, gap.end_date), (date(2023, 4, 1), date(2023, 6, 1)));
    assert_eq!(gap.flight_count, 2);

    let gaps = find_coverage_gaps(&[
        InstructorEndorsement::new(date(2023, 6, 1)),
        InstructorEndorsement::new(date(2023, 1, 1)),
    ]);
    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].start_date, gaps[0].end_date), (date(2023, 4, 1), date(2023, 6, 1)));
    Ok(())
}

#[test]
fn test_configured_validity_period() -> anyhow::Result<()> {
    let file = write_student_logbook()?;
    let processor = LogbookProcessor::new(
        LogbookConfig::default().with_endorsement_validity_days(365),
    )?
    .with_today(date(2024, 6, 1));
    let logbook = processor.process_file(file.path())?;

    let report = processor.check_endorsements(&logbook, &[date(2023, 1, 1)]);
    assert!(report.is_compliant());
    assert!(report.gaps.is_empty());
    Ok(())
}
