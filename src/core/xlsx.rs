use std::fmt::Write as _;
use std::io::{Cursor, Write};

use chrono::Local;
use quick_xml::escape::escape;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::domain::model::Table;
use crate::utils::error::Result;

pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Download filename for a cleaned table, stamped with the current date.
pub fn cleaned_filename() -> String {
    format!("Cleaned_{}.xlsx", Local::now().format("%d-%m-%Y"))
}

/// Renders the table as a single-sheet workbook in an in-memory byte buffer.
/// The header row comes first, then data rows; no index column. Cells are
/// written as inline strings so no shared-string part is needed.
pub fn write_workbook(table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types_xml().as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(package_rels_xml().as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml(sheet_name).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(workbook_rels_xml().as_bytes())?;

    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(sheet_xml(table).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn content_types_xml() -> String {
    format!(
        "{XML_DECLARATION}\
         <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
         <Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
         <Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
         </Types>"
    )
}

fn package_rels_xml() -> String {
    format!(
        "{XML_DECLARATION}\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
         </Relationships>"
    )
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        "{XML_DECLARATION}\
         <workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
         <sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/></sheets>\
         </workbook>",
        escape(sheet_name)
    )
}

fn workbook_rels_xml() -> String {
    format!(
        "{XML_DECLARATION}\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>\
         </Relationships>"
    )
}

fn sheet_xml(table: &Table) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        "<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\"><sheetData>",
    );
    write_row(&mut xml, 1, &table.columns);
    for (index, row) in table.rows.iter().enumerate() {
        write_row(&mut xml, index + 2, row);
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn write_row(xml: &mut String, row_number: usize, cells: &[String]) {
    let _ = write!(xml, "<row r=\"{row_number}\">");
    for (column, value) in cells.iter().enumerate() {
        let _ = write!(
            xml,
            "<c r=\"{}{}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
            column_letter(column),
            row_number,
            escape(value.as_str())
        );
    }
    xml.push_str("</row>");
}

/// 0-based column index to spreadsheet letters: 0 -> A, 25 -> Z, 26 -> AA.
fn column_letter(mut index: usize) -> String {
    let mut letters: Vec<char> = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.into_iter().rev().collect()
}
