//! Integration tests for the full validate -> project -> transform -> render
//! pipeline, driven through the public API the way an application would.

use std::sync::atomic::{AtomicUsize, Ordering};

use vizgen_codegen::{
    CodeGenerator, DataTransformer, GenerationError, RenderError, RenderParams, TransformError,
    TransformedData, Visualizer,
};
use vizgen_dataset::{ColumnSpec, DataColumn, Dataset, PortConfiguration, PortId, Value, ValueType};

fn port(id: &'static str) -> PortId {
    PortId::from_static(id)
}

/// External dataset with ports A (integers 1, 2) and B (text "x", "y").
fn external_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    dataset
        .add_column(
            DataColumn::new(ColumnSpec::optional(port("A"), ValueType::Integer))
                .with_values(vec![Value::Integer(1), Value::Integer(2)]),
        )
        .unwrap();
    dataset
        .add_column(
            DataColumn::new(ColumnSpec::optional(port("B"), ValueType::Text))
                .with_values(vec!["x".into(), "y".into()]),
        )
        .unwrap();
    dataset
}

/// Sums the integers on the `val` port.
struct SumTransformer {
    calls: AtomicUsize,
}

impl SumTransformer {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl DataTransformer for SumTransformer {
    fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let values = dataset
            .values(&port("val"))
            .ok_or(TransformError::MissingPort(port("val")))?;
        let total: i64 = values.iter().filter_map(Value::as_i64).sum();
        Ok(TransformedData::new(total))
    }
}

/// Always fails, the way a transformer reports undigestible data.
struct RefusingTransformer;

impl DataTransformer for RefusingTransformer {
    fn transform(&self, _dataset: &Dataset) -> Result<TransformedData, TransformError> {
        Err(TransformError::IncompatibleData(
            "Data could not be transformed.".to_string(),
        ))
    }
}

/// Renders `chart(<total>)` and counts how often it was asked to.
struct CountingChart {
    renders: AtomicUsize,
}

impl CountingChart {
    fn new() -> Self {
        Self {
            renders: AtomicUsize::new(0),
        }
    }

    fn render_count(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }
}

impl Visualizer for CountingChart {
    fn input_schema(&self) -> Dataset {
        Dataset::from_specs(vec![ColumnSpec::required(port("val"), ValueType::Integer)])
    }

    fn render(
        &self,
        data: &TransformedData,
        _params: &RenderParams,
    ) -> Result<String, RenderError> {
        self.renders.fetch_add(1, Ordering::Relaxed);
        Ok(format!("chart({})", data.payload::<i64>()?))
    }
}

#[test]
fn test_end_to_end_generates_exact_code() {
    let generator = CodeGenerator::new(CountingChart::new());
    let config = PortConfiguration::from_pairs([("val", "A")]).unwrap();
    let transformer = SumTransformer::new();

    let code = generator
        .generate_code(
            &external_dataset(),
            &config,
            &transformer,
            &RenderParams::new(),
        )
        .expect("pipeline should complete");

    assert_eq!(code, "chart(3)");
    assert_eq!(transformer.call_count(), 1);
    assert_eq!(generator.visualizer().render_count(), 1);
}

#[test]
fn test_invalid_configuration_carries_validator_message() {
    let generator = CodeGenerator::new(CountingChart::new());
    let config = PortConfiguration::from_pairs([("bogus", "A")]).unwrap();
    let transformer = SumTransformer::new();

    let validation = generator.is_data_processable(&config).unwrap_err();
    assert_eq!(validation.message(), "Input port bogus not found in schema");

    let error = generator
        .generate_code(
            &external_dataset(),
            &config,
            &transformer,
            &RenderParams::new(),
        )
        .unwrap_err();
    match error {
        GenerationError::Validation(inner) => {
            assert_eq!(inner.message(), "Input port bogus not found in schema");
        }
        other => panic!("expected validation error, got {other}"),
    }

    // Validation failed before any mapping, so the transformer never ran.
    assert_eq!(transformer.call_count(), 0);
    assert_eq!(generator.visualizer().render_count(), 0);
}

#[test]
fn test_uncovered_required_port_fails_validation() {
    let generator = CodeGenerator::new(CountingChart::new());
    let config = PortConfiguration::new(Vec::new());

    let validation = generator.is_data_processable(&config).unwrap_err();
    assert_eq!(validation.message(), "Required port val has no mapping");
}

#[test]
fn test_transformer_failure_stops_before_rendering() {
    let generator = CodeGenerator::new(CountingChart::new());
    let config = PortConfiguration::from_pairs([("val", "A")]).unwrap();

    let error = generator
        .generate_code(
            &external_dataset(),
            &config,
            &RefusingTransformer,
            &RenderParams::new(),
        )
        .unwrap_err();

    match error {
        GenerationError::Transform(TransformError::IncompatibleData(message)) => {
            assert_eq!(message, "Data could not be transformed.");
        }
        other => panic!("expected transform error, got {other}"),
    }
    assert_eq!(generator.visualizer().render_count(), 0);
}

#[test]
fn test_missing_render_parameter_surfaces_as_render_error() {
    struct TitledChart;

    impl Visualizer for TitledChart {
        fn input_schema(&self) -> Dataset {
            Dataset::from_specs(vec![ColumnSpec::required(port("val"), ValueType::Integer)])
        }

        fn render(
            &self,
            data: &TransformedData,
            params: &RenderParams,
        ) -> Result<String, RenderError> {
            let title = params
                .get_str("title")
                .ok_or_else(|| RenderError::MissingParam("title".to_string()))?;
            Ok(format!("chart({}, \"{title}\")", data.payload::<i64>()?))
        }
    }

    let generator = CodeGenerator::new(TitledChart);
    let config = PortConfiguration::from_pairs([("val", "A")]).unwrap();

    let error = generator
        .generate_code(
            &external_dataset(),
            &config,
            &SumTransformer::new(),
            &RenderParams::new(),
        )
        .unwrap_err();

    match error {
        GenerationError::Render(RenderError::MissingParam(name)) => assert_eq!(name, "title"),
        other => panic!("expected render error, got {other}"),
    }

    let code = generator
        .generate_code(
            &external_dataset(),
            &config,
            &SumTransformer::new(),
            &RenderParams::new().with("title", "Total"),
        )
        .unwrap();
    assert_eq!(code, "chart(3, \"Total\")");
}

#[test]
fn test_generation_leaves_schema_untouched() {
    let generator = CodeGenerator::new(CountingChart::new());
    let before = generator.input().clone();
    let config = PortConfiguration::from_pairs([("val", "A")]).unwrap();

    generator
        .generate_code(
            &external_dataset(),
            &config,
            &SumTransformer::new(),
            &RenderParams::new(),
        )
        .unwrap();

    assert_eq!(generator.input(), &before);
    assert!(generator.input().values(&port("val")).unwrap().is_empty());
}

#[test]
fn test_overwrite_semantics_reach_the_transformer() {
    // Two mappings feed the same input port; the transformer must observe
    // the values of the later one (port B stringified would fail the sum,
    // so map A then B and check the text column won).
    struct CaptureValues;

    impl DataTransformer for CaptureValues {
        fn transform(&self, dataset: &Dataset) -> Result<TransformedData, TransformError> {
            let values = dataset
                .values(&port("val"))
                .ok_or(TransformError::MissingPort(port("val")))?;
            Ok(TransformedData::new(values.to_vec()))
        }
    }

    struct Passthrough;

    impl Visualizer for Passthrough {
        fn input_schema(&self) -> Dataset {
            Dataset::from_specs(vec![ColumnSpec::required(port("val"), ValueType::Text)])
        }

        fn render(
            &self,
            data: &TransformedData,
            _params: &RenderParams,
        ) -> Result<String, RenderError> {
            let values = data.payload::<Vec<Value>>()?;
            Ok(values.iter().map(Value::render).collect::<Vec<_>>().join(","))
        }
    }

    let generator = CodeGenerator::new(Passthrough);
    let config = PortConfiguration::from_pairs([("val", "A"), ("val", "B")]).unwrap();

    let code = generator
        .generate_code(
            &external_dataset(),
            &config,
            &CaptureValues,
            &RenderParams::new(),
        )
        .unwrap();

    assert_eq!(code, "x,y");
}

#[test]
fn test_mapping_against_absent_source_port_fails_cleanly() {
    let generator = CodeGenerator::new(CountingChart::new());
    let config = PortConfiguration::from_pairs([("val", "C")]).unwrap();

    let error = generator
        .generate_code(
            &external_dataset(),
            &config,
            &SumTransformer::new(),
            &RenderParams::new(),
        )
        .unwrap_err();

    match error {
        GenerationError::Validation(inner) => {
            assert_eq!(
                inner.message(),
                "Output port C not found in supplied dataset"
            );
        }
        other => panic!("expected validation error, got {other}"),
    }
}
