use chrono::NaiveDate;
use parade_state::config::RosterConfig;
use parade_state::io::messages::StaticHistory;
use parade_state::io::sheet::{SheetSource, XlsxSheetSource, find_date_columns};
use parade_state::pipeline;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

fn write_fixture(path: &std::path::Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").expect("sheet named");

    let cells: [[&str; 3]; 3] = [
        ["Name", "01/05/2025", ""],
        ["ME3 Tan", "P", "P"],
        ["CPT Lim", "LL TILL 15/5", "LL TILL 15/5"],
    ];
    for (row_idx, row) in cells.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, *cell)
                .expect("cell written");
        }
    }

    workbook.save(path).expect("workbook saved");
}

#[test]
fn reads_an_xlsx_workbook_through_the_sheet_source() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("roster.xlsx");
    write_fixture(&path);

    let source = XlsxSheetSource::new(&path);
    let table = source.fetch("Attendance").expect("table fetched");

    assert_eq!(table.headers[0], "Name");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, 0), Some("ME3 Tan"));

    let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    assert_eq!(find_date_columns(&table, date, (9, 9)), (1, 2));
}

#[test]
fn end_to_end_report_from_a_workbook_fixture() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("roster.xlsx");
    write_fixture(&path);

    let source = XlsxSheetSource::new(&path);
    let history = StaticHistory::from_texts([
        "/DI LIST\n01/05/2025: ME3 Edmund Cheong\n02/05/2025: LTA Tan Wei Ming",
    ]);
    let config = RosterConfig {
        active_rows: vec![1, 2],
        ..RosterConfig::default()
    };

    let message = pipeline::generate_message(
        &source,
        &history,
        &config,
        "Attendance",
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
    )
    .expect("message generated");

    let expected = "Parade State for 01/05/2025\n\
                    Thursday\n\
                    \n\
                    Today's DI: ME3 Edmund Cheong\n\
                    Next DI: LTA Tan Wei Ming\n\
                    \n\
                    1. ME3 Tan - P\n\
                    2. CPT Lim - LL TILL 15/05\n\
                    \n\
                    Today's number: 0(AM), 0(PM)";
    assert_eq!(message, expected);
}
