use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::database::attendance_repo::DayExportRow;
use crate::database::audit_repo::AuditExportRow;
use crate::database::student_day_repo::StudentPeriodRow;

/// Writes a bold header row and one worksheet row per record, returning the
/// finished workbook buffer. Zero data rows still yield a valid workbook with
/// just the header.
fn sheet_from_rows(headers: &[&str], rows: Vec<Vec<String>>) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            worksheet.write_string((row + 1) as u32, col as u16, value)?;
        }
    }

    worksheet.autofit();
    workbook.save_to_buffer()
}

/// All attendance marked on one date, every faculty.
pub fn day_attendance_sheet(rows: &[DayExportRow]) -> Result<Vec<u8>, XlsxError> {
    sheet_from_rows(
        &["Roll No", "Name", "Status"],
        rows.iter()
            .map(|r| vec![r.roll_no.clone(), r.name.clone(), r.status.clone()])
            .collect(),
    )
}

/// Cross-faculty audit listing, newest first.
pub fn audit_sheet(rows: &[AuditExportRow]) -> Result<Vec<u8>, XlsxError> {
    sheet_from_rows(
        &["Marked By", "Class Faculty", "Section", "Date"],
        rows.iter()
            .map(|r| {
                vec![
                    r.marked_by.clone(),
                    r.class_faculty.clone(),
                    r.section_name.clone(),
                    r.date.format("%Y-%m-%d").to_string(),
                ]
            })
            .collect(),
    )
}

/// One student's day, with the report date prefixed to every row.
pub fn student_day_sheet(
    date: NaiveDate,
    rows: &[StudentPeriodRow],
) -> Result<Vec<u8>, XlsxError> {
    let date_label = date.format("%d-%m-%Y").to_string();
    sheet_from_rows(
        &["Date", "Period", "Subject", "Faculty", "Status"],
        rows.iter()
            .map(|r| {
                vec![
                    date_label.clone(),
                    r.period_no.to_string(),
                    r.subject.clone(),
                    r.faculty_name.clone(),
                    r.status.clone(),
                ]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_still_builds_a_workbook() {
        let bytes = day_attendance_sheet(&[]).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn student_sheet_prefixes_the_date() {
        let rows = vec![StudentPeriodRow {
            period_no: 1,
            subject: "Math".to_string(),
            faculty_name: "Anil".to_string(),
            status: "Present".to_string(),
        }];
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        let bytes = student_day_sheet(date, &rows).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn audit_sheet_accepts_rows() {
        let rows = vec![AuditExportRow {
            marked_by: "Chitra".to_string(),
            class_faculty: "Anil".to_string(),
            section_name: "CSE-A".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
        }];
        assert!(audit_sheet(&rows).is_ok());
    }
}
