//! Property tests for normalization invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use rta_ingest::RawRow;
use rta_model::IMPORT_COLUMNS;
use rta_transform::normalization::keyword;
use rta_transform::{TransformContext, transform_row};

fn ctx() -> TransformContext {
    TransformContext::new(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
    .for_line(1)
}

fn arbitrary_cell() -> impl Strategy<Value = String> {
    // ASCII plus a few native-vocabulary characters the tables know.
    proptest::string::string_regex("[ -~高中低相关实物虚拟是否]{0,24}").unwrap()
}

proptest! {
    /// Normalizing the same raw row twice yields identical output.
    #[test]
    fn transform_is_idempotent(cells in proptest::collection::vec(arbitrary_cell(), 28)) {
        let header: Vec<String> = IMPORT_COLUMNS.iter().map(|c| c.to_string()).collect();
        let row = RawRow::from_header_and_cells(&header, cells.iter().map(String::as_str));
        let first = transform_row(&row, &ctx());
        let second = transform_row(&row, &ctx());
        prop_assert_eq!(first, second);
    }

    /// Keyword dispatch ignores input casing entirely.
    #[test]
    fn risk_level_is_case_insensitive(input in "[a-zA-Z0-9 /._-]{0,24}") {
        let lower = keyword::normalize_risk_level(&input.to_lowercase());
        let upper = keyword::normalize_risk_level(&input.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Whatever the input, the risk normalizer lands in the closed domain
    /// and only flags a default when nothing matched.
    #[test]
    fn risk_level_always_resolves(input in arbitrary_cell()) {
        let out = keyword::normalize_risk_level(&input);
        let again = keyword::normalize_risk_level(&input);
        prop_assert_eq!(out, again);
    }

    /// The two suffix fields are always exactly their fixed width.
    #[test]
    fn suffix_fields_have_fixed_width(
        explicit in arbitrary_cell(),
        full in arbitrary_cell(),
    ) {
        let header: Vec<String> = IMPORT_COLUMNS.iter().map(|c| c.to_string()).collect();
        let cells: Vec<String> = IMPORT_COLUMNS
            .iter()
            .map(|column| match *column {
                "extraAccountCertnoLastSix" => explicit.clone(),
                "extraAccountCertno" => full.clone(),
                "extraAccountPhoneLastFour" => explicit.clone(),
                "extraAccountPhone" => full.clone(),
                _ => String::new(),
            })
            .collect();
        let row = RawRow::from_header_and_cells(&header, cells.iter().map(String::as_str));
        let out = transform_row(&row, &ctx());
        prop_assert_eq!(out.record.extra_account_certno_last_six.chars().count(), 6);
        prop_assert_eq!(out.record.extra_account_phone_last_four.chars().count(), 4);
    }
}
