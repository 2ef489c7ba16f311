use scraper::{ElementRef, Html, Selector};

use crate::models::{FinancialTable, TableRow, ValuationError};

/// Strategy for locating a statement section inside a parsed page and
/// lifting its table into a [`FinancialTable`]. Keeps the rest of the
/// pipeline independent of any one page layout.
pub trait TableExtractor {
    fn extract(
        &self,
        document: &Html,
        section_title: &str,
    ) -> Result<FinancialTable, ValuationError>;
}

/// Extractor for the layout screener.in uses: an `h2` heading naming the
/// section, followed somewhere later in the document by a
/// `table.data-table`. Heading matching is a case-sensitive substring
/// check on the heading text.
pub struct HeadingTableExtractor;

impl TableExtractor for HeadingTableExtractor {
    fn extract(
        &self,
        document: &Html,
        section_title: &str,
    ) -> Result<FinancialTable, ValuationError> {
        let heading = find_heading(document, section_title)?;
        let table = next_data_table(document, heading)
            .ok_or_else(|| ValuationError::TableNotFound(section_title.to_string()))?;
        parse_table(table, section_title)
    }
}

fn selector(css: &str) -> Result<Selector, ValuationError> {
    Selector::parse(css).map_err(|e| ValuationError::Selector(e.to_string()))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn find_heading<'a>(
    document: &'a Html,
    section_title: &str,
) -> Result<ElementRef<'a>, ValuationError> {
    let headings = selector("h2")?;
    document
        .select(&headings)
        .find(|heading| heading.text().collect::<String>().contains(section_title))
        .ok_or_else(|| ValuationError::SectionNotFound(section_title.to_string()))
}

/// First `table` with the `data-table` class appearing after `heading` in
/// document order, regardless of nesting.
fn next_data_table<'a>(document: &'a Html, heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut past_heading = false;
    for node in document.root_element().descendants() {
        if node.id() == heading.id() {
            past_heading = true;
            continue;
        }
        if !past_heading {
            continue;
        }
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "table"
                && element.value().classes().any(|class| class == "data-table")
            {
                return Some(element);
            }
        }
    }
    None
}

/// The first row supplies the column headers (`th` cells, label column
/// first). Every later row contributes its first `td` as the row label and
/// the remaining `td`s as numbers, with thousands separators stripped.
/// Non-numeric cells and rows of the wrong width fail the whole extraction.
fn parse_table(
    table: ElementRef<'_>,
    section_title: &str,
) -> Result<FinancialTable, ValuationError> {
    let tr = selector("tr")?;
    let th = selector("th")?;
    let td = selector("td")?;

    let mut table_rows = table.select(&tr);
    let header = table_rows
        .next()
        .ok_or_else(|| ValuationError::TableNotFound(section_title.to_string()))?;
    let columns: Vec<String> = header.select(&th).map(cell_text).collect();
    if columns.is_empty() {
        return Err(ValuationError::TableNotFound(section_title.to_string()));
    }

    let mut rows = Vec::new();
    for row in table_rows {
        let mut cells = row.select(&td);
        let label = match cells.next() {
            Some(cell) => cell_text(cell),
            None => {
                return Err(ValuationError::RaggedRow {
                    row: String::new(),
                    expected: columns.len() - 1,
                    got: 0,
                })
            }
        };

        let mut values = Vec::new();
        for cell in cells {
            let text = cell_text(cell).replace(',', "");
            let value = text.parse::<f64>().map_err(|_| ValuationError::MalformedCell {
                row: label.clone(),
                cell: text.clone(),
            })?;
            values.push(value);
        }
        if values.len() != columns.len() - 1 {
            return Err(ValuationError::RaggedRow {
                row: label,
                expected: columns.len() - 1,
                got: values.len(),
            });
        }
        rows.push(TableRow { label, values });
    }

    Ok(FinancialTable { columns, rows })
}
