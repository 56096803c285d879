//! End-to-end tests for the schedule import engine.
//!
//! Tables are built the way the upload layer hands them over: a header list
//! plus rows of JSON-ish cell values.

use rust_decimal::Decimal;
use serde_json::{Value, json};

use schedule_import::config::ConfigLoader;
use schedule_import::error::ImportError;
use schedule_import::import::{
    ImportSession, ImportState, Importer, UploadKind, WeeklySchedule, import_schedule,
};
use schedule_import::models::{
    ColumnMapping, Day, Department, Normalized, RawTable, Row, SourceFormat, WarningKind,
};
use schedule_import::parsing::{ScheduleFormat, detect_format};

// =============================================================================
// Test Helpers
// =============================================================================

fn table(headers: &[&str], rows: Vec<Value>) -> RawTable {
    let rows = rows
        .into_iter()
        .map(|row| match row {
            Value::Object(cells) => cells.into_iter().collect::<Row>(),
            other => panic!("Row must be a JSON object, got {}", other),
        })
        .collect();
    RawTable::new(headers.to_vec(), rows)
}

fn column_headers() -> [&'static str; 5] {
    ["Name", "Start", "End", "Area", "Day"]
}

// =============================================================================
// Column format
// =============================================================================

#[test]
fn test_column_row_becomes_one_record() {
    let t = table(
        &column_headers(),
        vec![json!({
            "Name": "Jane Doe (555) 123-4567",
            "Start": "12:00 PM",
            "End": "8:00 PM",
            "Area": "Drive Thru",
            "Day": "Tuesday"
        })],
    );

    let pending = import_schedule(&t, &ColumnMapping::default()).unwrap();
    assert_eq!(pending.format(), ScheduleFormat::Column);
    assert!(pending.warnings().is_empty());

    let records = pending.commit();
    assert_eq!(records.len(), 1);

    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["employee_name"], "Jane Doe");
    assert_eq!(json["shift_start"]["value"], "12:00");
    assert_eq!(json["shift_end"]["value"], "20:00");
    assert_eq!(json["department"], "FOH");
    assert_eq!(json["day"], "tuesday");
    assert_eq!(json["time_block"], "12:00 - 20:00");
    assert_eq!(json["source_format"], "column");
}

#[test]
fn test_column_serial_times_and_hours() {
    let t = table(
        &column_headers(),
        vec![
            json!({"Name": "Ray", "Start": 0.25, "End": 0.625, "Area": "Prep", "Day": "Sat"}),
            json!({"Name": "Sue", "Start": "10p", "End": "6a", "Area": "Cashier", "Day": "s"}),
        ],
    );

    let records = import_schedule(&t, &ColumnMapping::default())
        .unwrap()
        .commit();

    assert_eq!(records[0].time_block, "06:00 - 15:00");
    assert_eq!(records[0].department, Department::Boh);
    assert_eq!(records[0].scheduled_hours(), Some(Decimal::from(9)));

    assert_eq!(records[1].time_block, "22:00 - 06:00");
    assert_eq!(records[1].day, Some(Day::Saturday));
    assert_eq!(records[1].scheduled_hours(), Some(Decimal::from(8)));
}

#[test]
fn test_missing_area_column_is_fatal() {
    let t = table(
        &["Name", "Start", "End", "Day"],
        vec![json!({"Name": "Jane", "Start": "9a", "End": "5p", "Day": "Mon"})],
    );

    match import_schedule(&t, &ColumnMapping::default()) {
        Err(err @ ImportError::MissingColumns { .. }) => {
            assert_eq!(err.to_string(), "Missing required columns: Area");
        }
        other => panic!("Expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_unrecognized_values_need_review() {
    let t = table(
        &column_headers(),
        vec![json!({
            "Name": "Jane",
            "Start": "open",
            "End": "close",
            "Area": "Lobby",
            "Day": "Someday"
        })],
    );

    let pending = import_schedule(&t, &ColumnMapping::default()).unwrap();
    let record = &pending.records()[0];

    assert_eq!(record.shift_start, Normalized::Unrecognized("open".to_string()));
    assert_eq!(record.department, Department::Foh);
    assert_eq!(record.day, None);
    assert!(record.needs_review());
    assert!(pending.preview().rows()[0].needs_review);

    let kinds: Vec<WarningKind> = pending.warnings().iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WarningKind::UnrecognizedTime,
            WarningKind::UnrecognizedTime,
            WarningKind::UnrecognizedDay
        ]
    );
}

// =============================================================================
// Weekly roster format
// =============================================================================

fn roster() -> RawTable {
    table(
        &["Employee", "Mon, 5/19/25", "Tue, 5/20/25", "Wed, 5/21/25"],
        vec![
            json!({
                "Employee": "Bob Johnson",
                "Mon, 5/19/25": "8:00 AM - 4:00 PM\nKitchen",
                "Tue, 5/20/25": "",
                "Wed, 5/21/25": "10:30 AM - 6:00 PM\nFront Counter"
            }),
            json!({
                "Employee": "Amy Wu 555-1234",
                "Mon, 5/19/25": "OFF",
                "Tue, 5/20/25": "4:00 PM - 11:00 PM\nDrive Thru"
            }),
        ],
    )
}

#[test]
fn test_roster_cell_becomes_one_record() {
    let t = roster();
    assert_eq!(detect_format(&t), ScheduleFormat::WeeklyRoster);

    let records = import_schedule(&t, &ColumnMapping::default())
        .unwrap()
        .commit();
    let bob_monday = records
        .iter()
        .find(|r| r.employee_name == "Bob Johnson" && r.day == Some(Day::Monday))
        .unwrap();

    assert_eq!(bob_monday.shift_start.to_string(), "08:00");
    assert_eq!(bob_monday.shift_end.to_string(), "16:00");
    assert_eq!(bob_monday.department, Department::Boh);
    assert_eq!(bob_monday.source_format, SourceFormat::WeeklyRoster);
    assert_eq!(bob_monday.origin.column.as_deref(), Some("Mon, 5/19/25"));
    assert!(bob_monday.source_row.is_some());
}

#[test]
fn test_blank_roster_cell_yields_nothing() {
    let records = import_schedule(&roster(), &ColumnMapping::default())
        .unwrap()
        .commit();

    assert!(
        !records
            .iter()
            .any(|r| r.employee_name == "Bob Johnson" && r.day == Some(Day::Tuesday))
    );
    assert!(
        !records
            .iter()
            .any(|r| r.employee_name == "Amy Wu" && r.day == Some(Day::Monday))
    );
    assert_eq!(records.len(), 3);
}

#[test]
fn test_roster_records_fill_weekly_view() {
    let records = import_schedule(&roster(), &ColumnMapping::default())
        .unwrap()
        .commit();
    let schedule = WeeklySchedule::from_records(&records);

    let tuesday_foh = schedule.shifts_on_in(Day::Tuesday, Department::Foh);
    assert_eq!(tuesday_foh.len(), 1);
    assert_eq!(tuesday_foh[0].employee_name, "Amy Wu");
    assert_eq!(tuesday_foh[0].time_block, "16:00 - 23:00");

    let wednesday = schedule.time_blocks(Day::Wednesday, Department::Foh);
    assert_eq!(wednesday.keys().copied().collect::<Vec<_>>(), vec!["10:30 - 18:00"]);
    assert!(schedule.shifts_on(Day::Sunday).is_empty());
}

#[test]
fn test_roster_without_name_column_is_fatal() {
    let t = table(
        &["Mon, 5/19/25", "Tue, 5/20/25"],
        vec![json!({"Mon, 5/19/25": "9:00 AM - 5:00 PM", "Tue, 5/20/25": ""})],
    );

    assert!(matches!(
        import_schedule(&t, &ColumnMapping::default()),
        Err(ImportError::MissingRosterNameColumn)
    ));
}

// =============================================================================
// Session, uploads and configuration
// =============================================================================

#[test]
fn test_session_lifecycle() {
    assert!(!UploadKind::from_file_name("week.xlsx").unwrap().requires_server_processing());

    let mut session = ImportSession::default();
    let warnings = session
        .upload(&roster(), &ColumnMapping::default())
        .unwrap()
        .warnings()
        .len();
    assert_eq!(warnings, 0);

    let records = session.confirm().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(session.state(), &ImportState::Committed);
}

#[test]
fn test_session_failure_returns_to_idle() {
    let mut session = ImportSession::default();
    let t = table(&column_headers(), vec![]);

    assert!(session.upload(&t, &ColumnMapping::default()).is_err());
    assert_eq!(session.state(), &ImportState::Idle);
}

#[test]
fn test_pdf_upload_is_flagged_for_server() {
    let kind = UploadKind::from_file_name("schedule.PDF").unwrap();
    assert!(kind.requires_server_processing());
}

#[test]
fn test_default_config_directory_drives_importer() {
    let config = ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .into_config();
    let importer = Importer::new(config);

    let t = table(
        &column_headers(),
        vec![json!({
            "Name": "Lee",
            "Start": "7:00",
            "End": "15:00",
            "Area": "Grill",
            "Day": "Thu"
        })],
    );
    let pending = importer.import(&t, &ColumnMapping::default()).unwrap();

    assert_eq!(pending.records()[0].department, Department::Boh);
    assert_eq!(pending.records()[0].day, Some(Day::Thursday));
}
