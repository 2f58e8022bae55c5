//! Render award rows as SQL UPDATE statements.

use crate::award::{AwardRow, AwardTable};

/// Double single quotes so `s` can sit inside a single-quoted SQL string
/// literal. The target dialect (PostgreSQL) needs no other escaping.
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render one UPDATE statement for `row` against `public.<table_name>`.
///
/// `age_group_label` is compared verbatim, while `metric_code` and `tier`
/// go through `lower(trim(...))` on the column side so the statement still
/// matches rows stored with inconsistent casing or padding.
pub fn render_update(row: &AwardRow, table_name: &str) -> String {
    format!(
        r"UPDATE public.{table}
SET image_filename = '{filename}'
WHERE age_group_label = '{age}'
  AND lower(trim(metric_code)) = '{metric}'
  AND lower(trim(tier)) = '{tier}';
",
        table = table_name,
        filename = escape_literal(&row.image_filename),
        age = escape_literal(&row.age_group_label),
        metric = escape_literal(&row.metric_code),
        tier = escape_literal(&row.tier),
    )
}

/// Render one table's block: a header comment followed by its statements
/// back-to-back, in row order.
pub fn render_table_block(table: &AwardTable) -> String {
    let mut block = format!("-- SQL updates for {}.image_filename\n", table.table_name);
    for row in &table.rows {
        block.push_str(&render_update(row, table.table_name));
    }
    block
}

/// Assemble the final report: one block per table, separated by a blank
/// line.
pub fn render_report(tables: &[AwardTable]) -> String {
    tables
        .iter()
        .map(render_table_block)
        .collect::<Vec<_>>()
        .join("\n")
}
