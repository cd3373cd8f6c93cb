//! Integration tests for the full use case funnel: input validation,
//! measurement construction and the result algebra working together,
//! plus the paginated read flow.

use std::str::FromStr;

use anyhow::Result;
use bigdecimal::BigDecimal;

use railcat_core::validation::constraints::{not_blank, positive};
use railcat_core::{
    run_validated, Direction, Gauge, InputValidator, Page, PaginatedResultSet, QueryError, Ratio,
    SingleResult, Sorting, TrackGauge, UseCase, UseCaseResult, ValidationError,
};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// Request DTO for creating a modelling scale
struct CreateScale {
    name: String,
    ratio: BigDecimal,
    gauge_millimetres: BigDecimal,
}

/// The created scale, as the outer layers would see it
#[derive(Debug, PartialEq)]
struct Scale {
    name: String,
    ratio: Ratio,
    gauge: Gauge,
}

#[derive(Debug, PartialEq)]
enum CreateScaleError {
    InvalidRequest(Vec<ValidationError>),
    AlreadyExists(String),
}

struct CreateScaleUseCase {
    validator: InputValidator<CreateScale>,
    existing: Vec<String>,
}

impl CreateScaleUseCase {
    fn new(existing: Vec<String>) -> CreateScaleUseCase {
        let validator = InputValidator::new()
            .with_constraint(not_blank("name", |input: &CreateScale| {
                input.name.as_str()
            }))
            .with_constraint(positive("ratio", |input: &CreateScale| &input.ratio))
            .with_constraint(positive("gauge.millimetres", |input: &CreateScale| {
                &input.gauge_millimetres
            }));
        CreateScaleUseCase {
            validator,
            existing,
        }
    }
}

impl UseCase for CreateScaleUseCase {
    type Input = CreateScale;
    type Output = Scale;
    type Error = CreateScaleError;

    fn execute(&self, input: CreateScale) -> UseCaseResult<Scale, CreateScaleError> {
        run_validated(
            &self.validator,
            input,
            CreateScaleError::InvalidRequest,
            |accepted| {
                if self.existing.contains(&accepted.name) {
                    return UseCaseResult::error(CreateScaleError::AlreadyExists(accepted.name));
                }
                // The validator already rejected non-positive values
                let ratio = Ratio::of(accepted.ratio).expect("ratio validated as positive");
                let gauge = Gauge::of_millimetres(accepted.gauge_millimetres, TrackGauge::Standard)
                    .expect("gauge validated as positive");
                UseCaseResult::output(Scale {
                    name: accepted.name,
                    ratio,
                    gauge,
                })
            },
        )
    }
}

#[test]
fn test_create_scale_happy_path() {
    let use_case = CreateScaleUseCase::new(vec![]);
    let result = use_case.execute(CreateScale {
        name: "H0".to_string(),
        ratio: dec("87"),
        gauge_millimetres: dec("16.5"),
    });

    let scale = result.as_output().expect("expected an output");
    assert_eq!(scale.name, "H0");
    assert_eq!(scale.ratio.to_string(), "1:87");
    assert_eq!(scale.gauge.millimetres().to_string(), "16.5 mm");
    assert_eq!(scale.gauge.inches().to_string(), "0.65 in");
}

#[test]
fn test_create_scale_collects_every_violation_sorted_by_field() {
    let use_case = CreateScaleUseCase::new(vec![]);
    let result = use_case.execute(CreateScale {
        name: "   ".to_string(),
        ratio: dec("-87"),
        gauge_millimetres: dec("16.5"),
    });

    match result.as_error().expect("expected an error") {
        CreateScaleError::InvalidRequest(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].field_name, "name");
            assert_eq!(errors[1].field_name, "ratio");
            assert_eq!(errors[0].invalid_value, serde_json::Value::from("   "));
            assert_eq!(errors[1].invalid_value, serde_json::Value::from("-87"));
        }
        other => panic!("Expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn test_create_scale_domain_error_travels_as_data() {
    let use_case = CreateScaleUseCase::new(vec!["H0".to_string()]);
    let result = use_case.execute(CreateScale {
        name: "H0".to_string(),
        ratio: dec("87"),
        gauge_millimetres: dec("16.5"),
    });

    assert_eq!(
        result.as_error(),
        Some(&CreateScaleError::AlreadyExists("H0".to_string()))
    );
}

#[test]
fn test_create_scale_output_composes_with_map() {
    let use_case = CreateScaleUseCase::new(vec![]);
    let result = use_case
        .execute(CreateScale {
            name: "N".to_string(),
            ratio: dec("160"),
            gauge_millimetres: dec("9"),
        })
        .map(|scale| scale.ratio.to_string());

    assert_eq!(result, UseCaseResult::output("1:160".to_string()));
}

#[test]
fn test_paginated_read_flow() -> Result<()> {
    let sorting = Sorting::by("name", Direction::Asc)
        .and_then_by("ratio", Direction::Desc)
        .build();
    assert_eq!(sorting.get("RATIO").map(|c| c.direction), Some(Direction::Desc));

    // A repository would translate page+sorting into its query
    // language; the core only carries them.
    let page = Page::new(0, 2);
    let scales = vec!["H0".to_string(), "N".to_string()];
    let result_set = PaginatedResultSet::results(page, scales);

    match result_set {
        PaginatedResultSet::Results(results) => {
            assert!(results.has_next());
            assert_eq!(results.next_page(), Some(Page::new(2, 2)));
            assert!(!results.has_previous());
        }
        PaginatedResultSet::Error(error) => panic!("Expected results, got {error}"),
    }
    Ok(())
}

#[test]
fn test_failed_read_redacts_the_cause() {
    #[derive(Debug)]
    struct Timeout;

    impl std::fmt::Display for Timeout {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("timed out connecting to catalog-db:5432")
        }
    }

    impl std::error::Error for Timeout {}

    let result: SingleResult<String> = SingleResult::error(QueryError::from_cause(&Timeout));
    match result {
        SingleResult::Error(error) => {
            assert!(!error.reason().contains("catalog-db"));
        }
        SingleResult::Value(_) => panic!("Expected Error"),
    }
}
