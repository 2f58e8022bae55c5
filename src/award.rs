//! Award record types shared by the workbook reader and the SQL renderer.

/// Sheet name to target table mapping, in output order.
pub const SHEETS: [(&str, &str); 2] = [
    ("Medals", "medal_definitions"),
    ("Trophies", "trophy_definitions"),
];

/// One fully populated award record from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardRow {
    pub age_group_label: String,
    pub metric_code: String,
    pub tier: String,
    pub image_filename: String,
}

/// All retained rows from one sheet, bound to the table they update.
#[derive(Debug)]
pub struct AwardTable {
    pub table_name: &'static str,
    pub rows: Vec<AwardRow>,
}

impl AwardRow {
    /// Build a row from raw cell values, or `None` if any field is absent
    /// or blank. Skipped rows are expected (repeated headers, spacer rows),
    /// not errors.
    ///
    /// All four fields are trimmed; `metric_code` and `tier` are also
    /// lowercased. `age_group_label` and `image_filename` keep their case.
    pub fn normalize(
        age_group_label: Option<String>,
        metric_code: Option<String>,
        tier: Option<String>,
        image_filename: Option<String>,
    ) -> Option<Self> {
        let age_group_label = non_blank(age_group_label?)?;
        let metric_code = non_blank(metric_code?)?.to_lowercase();
        let tier = non_blank(tier?)?.to_lowercase();
        let image_filename = non_blank(image_filename?)?;

        Some(AwardRow {
            age_group_label,
            metric_code,
            tier,
            image_filename,
        })
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_normalize_complete_row() {
        let row = AwardRow::normalize(
            some(" 6-8 "),
            some(" Tall "),
            some("GOLD"),
            some("gold_tall.png"),
        )
        .unwrap();

        assert_eq!(row.age_group_label, "6-8");
        assert_eq!(row.metric_code, "tall");
        assert_eq!(row.tier, "gold");
        assert_eq!(row.image_filename, "gold_tall.png");
    }

    #[test]
    fn test_normalize_keeps_case_of_label_and_filename() {
        let row = AwardRow::normalize(
            some("U12 Boys"),
            some("sprint"),
            some("silver"),
            some("Silver_Sprint.PNG"),
        )
        .unwrap();

        assert_eq!(row.age_group_label, "U12 Boys");
        assert_eq!(row.image_filename, "Silver_Sprint.PNG");
    }

    #[test]
    fn test_normalize_drops_row_with_missing_field() {
        assert!(AwardRow::normalize(None, some("sprint"), some("gold"), some("a.png")).is_none());
        assert!(AwardRow::normalize(some("6-8"), None, some("gold"), some("a.png")).is_none());
        assert!(AwardRow::normalize(some("6-8"), some("sprint"), None, some("a.png")).is_none());
        assert!(AwardRow::normalize(some("6-8"), some("sprint"), some("gold"), None).is_none());
    }

    #[test]
    fn test_normalize_treats_whitespace_only_as_missing() {
        assert!(AwardRow::normalize(some("   "), some("sprint"), some("gold"), some("a.png")).is_none());
    }
}
