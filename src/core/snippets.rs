use crate::core::{comprehension, fulfillment, nested, stats};
use crate::domain::model::{SnippetInputs, SnippetReport, Stats};
use crate::domain::ports::Snippet;
use crate::utils::error::{IdiomError, Result};

/// Two return values, unpacked at the call site.
pub struct StatsSnippet;

impl Snippet for StatsSnippet {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn description(&self) -> &'static str {
        "Return multiple values and unpack no more than three of them"
    }

    fn run(&self, inputs: &SnippetInputs) -> Result<SnippetReport> {
        let (minimum, maximum) = stats::get_stats(&inputs.lengths).map_err(|mut e| {
            if let IdiomError::EmptyInput { what } = &mut e {
                *what = "lengths".to_string();
            }
            e
        })?;

        let mut report = SnippetReport::new(self.name());
        report.push(
            "min_max",
            &Stats { minimum, maximum },
            format!("Min: {}, Max: {}", minimum, maximum),
        )?;
        Ok(report)
    }
}

pub struct ComprehensionSnippet;

impl Snippet for ComprehensionSnippet {
    fn name(&self) -> &'static str {
        "comprehensions"
    }

    fn description(&self) -> &'static str {
        "Derive lists, sets and maps with iterator adapters instead of loops"
    }

    fn run(&self, inputs: &SnippetInputs) -> Result<SnippetReport> {
        let a = &inputs.numbers;
        let mut report = SnippetReport::new(self.name());

        let squares = comprehension::even_squares(a)?;
        report.push("even_squares", &squares, format!("{:?}", squares))?;

        let via_map_filter = comprehension::even_squares_map_filter(a)?;
        report.push(
            "even_squares_map_filter",
            &via_map_filter,
            format!("{:?}", via_map_filter),
        )?;

        let cubes = comprehension::cube_set(a)?;
        report.push("cube_set", &cubes, format!("{:?}", cubes))?;

        let odd_squares = comprehension::odd_square_map(a)?;
        report.push("odd_square_map", &odd_squares, format!("{:?}", odd_squares))?;

        Ok(report)
    }
}

pub struct NestedSnippet;

impl Snippet for NestedSnippet {
    fn name(&self) -> &'static str {
        "nested"
    }

    fn description(&self) -> &'static str {
        "Use at most two levels of nesting when deriving from nested data"
    }

    fn run(&self, inputs: &SnippetInputs) -> Result<SnippetReport> {
        let mut report = SnippetReport::new(self.name());

        let flat = nested::flatten(&inputs.matrix);
        report.push("flat", &flat, format!("{:?}", flat))?;

        let squared = nested::square_matrix(&inputs.matrix)?;
        report.push("squared", &squared, format!("{:?}", squared))?;

        let chained = nested::chain_rows(squared);
        report.push("chained", &chained, format!("{:?}", chained))?;

        Ok(report)
    }
}

pub struct FulfillmentSnippet;

impl Snippet for FulfillmentSnippet {
    fn name(&self) -> &'static str {
        "fulfillment"
    }

    fn description(&self) -> &'static str {
        "Bind an intermediate value once instead of repeating it in filter and map"
    }

    fn run(&self, inputs: &SnippetInputs) -> Result<SnippetReport> {
        let (stock, order, size) = (&inputs.stock, &inputs.order, inputs.batch_size);
        let mut report = SnippetReport::new(self.name());

        let result = fulfillment::fulfill_with_loop(stock, order, size);
        report.push("loop", &result, format!("{:?}", result))?;

        let found = fulfillment::fulfill_recomputing(stock, order, size);
        report.push("recomputing", &found, format!("{:?}", found))?;

        let found = fulfillment::fulfill(stock, order, size);
        report.push("bound_once", &found, format!("{:?}", found))?;

        Ok(report)
    }
}

/// Every snippet, in presentation order.
pub fn catalog() -> Vec<Box<dyn Snippet>> {
    vec![
        Box::new(StatsSnippet),
        Box::new(ComprehensionSnippet),
        Box::new(NestedSnippet),
        Box::new(FulfillmentSnippet),
    ]
}

pub fn find(name: &str) -> Result<Box<dyn Snippet>> {
    catalog()
        .into_iter()
        .find(|snippet| snippet.name() == name)
        .ok_or_else(|| IdiomError::UnknownSnippet {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displays(report: &SnippetReport) -> Vec<&str> {
        report.lines.iter().map(|line| line.display.as_str()).collect()
    }

    #[test]
    fn test_stats_snippet_output() {
        let report = StatsSnippet.run(&SnippetInputs::default()).unwrap();

        assert_eq!(displays(&report), vec!["Min: 60, Max: 73"]);
        assert_eq!(
            report.line("min_max").unwrap().value,
            serde_json::json!({"minimum": 60, "maximum": 73})
        );
    }

    #[test]
    fn test_stats_snippet_empty_lengths() {
        let inputs = SnippetInputs {
            lengths: vec![],
            ..SnippetInputs::default()
        };

        match StatsSnippet.run(&inputs) {
            Err(IdiomError::EmptyInput { what }) => assert_eq!(what, "lengths"),
            other => panic!("expected EmptyInput, got {:?}", other),
        }
    }

    #[test]
    fn test_comprehension_snippet_output() {
        let report = ComprehensionSnippet.run(&SnippetInputs::default()).unwrap();

        assert_eq!(
            displays(&report),
            vec![
                "[4, 16, 36, 64, 100]",
                "[4, 16, 36, 64, 100]",
                "{1, 8, 27, 64, 125, 216, 343, 512, 729, 1000}",
                "{1: 1, 3: 9, 5: 25, 7: 49, 9: 81}",
            ]
        );
    }

    #[test]
    fn test_nested_snippet_output() {
        let report = NestedSnippet.run(&SnippetInputs::default()).unwrap();

        assert_eq!(
            displays(&report),
            vec![
                "[1, 2, 3, 4, 5, 6, 7, 8, 9]",
                "[[1, 4, 9], [16, 25, 36], [49, 64, 81]]",
                "[1, 4, 9, 16, 25, 36, 49, 64, 81]",
            ]
        );
    }

    #[test]
    fn test_fulfillment_snippet_output() {
        let report = FulfillmentSnippet.run(&SnippetInputs::default()).unwrap();

        for display in displays(&report) {
            assert_eq!(display, r#"{"screws": 4, "wingnuts": 1}"#);
        }
        assert_eq!(
            report.line("bound_once").unwrap().value,
            serde_json::json!({"screws": 4, "wingnuts": 1})
        );
    }

    #[test]
    fn test_overflowing_numbers_fail_the_snippet() {
        let inputs = SnippetInputs {
            numbers: vec![3_000_000],
            ..SnippetInputs::default()
        };

        match ComprehensionSnippet.run(&inputs) {
            Err(err @ IdiomError::ArithmeticOverflow { .. }) => assert_eq!(err.exit_code(), 2),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_matrix_fails_the_snippet() {
        let inputs = SnippetInputs {
            matrix: vec![vec![1], vec![i64::MIN]],
            ..SnippetInputs::default()
        };
        assert!(matches!(
            NestedSnippet.run(&inputs),
            Err(IdiomError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_maps_print_in_input_order() {
        let inputs = SnippetInputs {
            numbers: vec![9, 1],
            order: vec!["wingnuts".to_string(), "screws".to_string()],
            ..SnippetInputs::default()
        };

        let comprehensions = ComprehensionSnippet.run(&inputs).unwrap();
        assert_eq!(
            comprehensions.line("odd_square_map").unwrap().display,
            "{9: 81, 1: 1}"
        );

        let fulfillment = FulfillmentSnippet.run(&inputs).unwrap();
        assert_eq!(
            fulfillment.line("bound_once").unwrap().display,
            r#"{"wingnuts": 1, "screws": 4}"#
        );
        assert_eq!(
            serde_json::to_string(&fulfillment.line("bound_once").unwrap().value).unwrap(),
            r#"{"wingnuts":1,"screws":4}"#
        );
    }

    #[test]
    fn test_catalog_names_are_unique_and_findable() {
        let names: Vec<&str> = catalog().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["stats", "comprehensions", "nested", "fulfillment"]);

        for name in names {
            assert_eq!(find(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_find_unknown_snippet() {
        assert!(matches!(
            find("walrus"),
            Err(IdiomError::UnknownSnippet { .. })
        ));
    }
}
