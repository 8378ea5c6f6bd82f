//! Table partitioning: cloning a rectangular section of a table.

use std::collections::HashMap;

use super::measure::row_cells;
use crate::error::Result;
use crate::host::HostDocument;
use crate::types::SectionRange;

/// Clone rows `rows` × columns `cols` of `table` into a new, detached table.
///
/// The clone keeps the table's attributes except `id`, so several sections
/// of one table can live in the same document. Row groups (`thead`,
/// `tbody`, `tfoot`) are recreated on demand: the first selected row of a
/// group clones its wrapper, later rows of the same group reuse it. Columns
/// are picked from each row's header cells, or its data cells when it has
/// none. Indices past the end of the table select nothing.
pub fn clone_table_section<D: HostDocument>(
    doc: &D,
    table: &D::Element,
    rows: SectionRange,
    cols: SectionRange,
) -> Result<D::Element> {
    let section = doc.clone_element(table, false)?;
    doc.remove_attribute(&section, "id")?;
    if rows.is_empty() {
        return Ok(section);
    }

    let source_rows = doc.elements_by_tag(table, "tr");
    let mut groups: HashMap<String, D::Element> = HashMap::new();

    let selected_rows = source_rows
        .get(rows.clip(source_rows.len()))
        .unwrap_or_default();
    for row in selected_rows {
        let parent = match doc.parent_element(row) {
            Some(group) => {
                let tag = doc.tag_name(&group);
                if tag == "table" {
                    section.clone()
                } else if let Some(existing) = groups.get(&tag) {
                    existing.clone()
                } else {
                    let wrapper = doc.clone_element(&group, false)?;
                    doc.append_child(&section, &wrapper)?;
                    groups.insert(tag, wrapper.clone());
                    wrapper
                }
            }
            None => section.clone(),
        };

        let row_copy = doc.clone_element(row, false)?;
        let cells = row_cells(doc, row);
        for cell in cells.get(cols.clip(cells.len())).unwrap_or_default() {
            let cell_copy = doc.clone_element(cell, true)?;
            doc.append_child(&row_copy, &cell_copy)?;
        }
        doc.append_child(&parent, &row_copy)?;
    }

    tracing::trace!(
        target: "tablescroller::layout",
        row_start = rows.start,
        row_end = ?rows.end,
        col_start = cols.start,
        col_end = ?cols.end,
        "cloned table section"
    );
    Ok(section)
}
