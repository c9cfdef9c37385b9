//! End-to-end tests for the built-in methods: registry lookup, full pipeline
//! runs, and exact snapshots of the emitted visualization code.

use vizgen_codegen::{CodeGenerator, RenderParams};
use vizgen_dataset::{
    ColumnSpec, DataColumn, Dataset, PortConfiguration, PortId, Value, ValueType,
};
use vizgen_methods::create;

/// Source dataset an analytics backend might hand over: one text column and
/// one integer column, keyed by its own port names.
fn activity_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    dataset
        .add_column(
            DataColumn::new(ColumnSpec::optional(
                PortId::from_static("activity"),
                ValueType::Text,
            ))
            .with_values(vec!["mon".into(), "tue".into(), "wed".into()]),
        )
        .unwrap();
    dataset
        .add_column(
            DataColumn::new(ColumnSpec::optional(
                PortId::from_static("hits"),
                ValueType::Integer,
            ))
            .with_values(vec![
                Value::Integer(12),
                Value::Integer(7),
                Value::Integer(3),
            ]),
        )
        .unwrap();
    dataset
}

#[test]
fn bar_chart_pipeline_emits_chart_call() {
    let (visualizer, transformer) = create("bar-chart").unwrap();
    let generator = CodeGenerator::new(visualizer);
    let config =
        PortConfiguration::from_pairs([("labels", "activity"), ("values", "hits")]).unwrap();
    let params = RenderParams::new().with("title", "Logins");

    let code = generator
        .generate_code(&activity_dataset(), &config, transformer.as_ref(), &params)
        .unwrap();

    insta::assert_snapshot!(
        code,
        @r#"vizgen.barChart({"labels":["mon","tue","wed"],"series":[{"name":"values","values":[12.0,7.0,3.0]}]}, {"title":"Logins"});"#
    );
}

#[test]
fn bar_chart_library_script_is_a_script_tag() {
    let (visualizer, _) = create("bar-chart").unwrap();
    let generator = CodeGenerator::new(visualizer);

    insta::assert_snapshot!(
        generator.library_script().unwrap(),
        @r#"<script src="https://cdn.jsdelivr.net/npm/vizgen-charts@1/dist/vizgen-charts.min.js"></script>"#
    );
}

#[test]
fn data_table_pipeline_emits_table_call() {
    let (visualizer, transformer) = create("data-table").unwrap();
    let generator = CodeGenerator::new(visualizer);
    let config =
        PortConfiguration::from_pairs([("items", "activity"), ("counts", "hits")]).unwrap();

    let code = generator
        .generate_code(
            &activity_dataset(),
            &config,
            transformer.as_ref(),
            &RenderParams::new(),
        )
        .unwrap();

    insta::assert_snapshot!(
        code,
        @r#"vizgen.dataTable({"headers":["Items","Counts"],"rows":[["mon","12"],["tue","7"],["wed","3"]]}, {});"#
    );
}

#[test]
fn data_table_works_without_optional_counts_mapping() {
    let (visualizer, transformer) = create("data-table").unwrap();
    let generator = CodeGenerator::new(visualizer);
    let config = PortConfiguration::from_pairs([("items", "activity")]).unwrap();

    let code = generator
        .generate_code(
            &activity_dataset(),
            &config,
            transformer.as_ref(),
            &RenderParams::new(),
        )
        .unwrap();

    insta::assert_snapshot!(
        code,
        @r#"vizgen.dataTable({"headers":["Items","Counts"],"rows":[["mon",""],["tue",""],["wed",""]]}, {});"#
    );
}

#[test]
fn bar_chart_requires_both_ports_mapped() {
    let (visualizer, _) = create("bar-chart").unwrap();
    let generator = CodeGenerator::new(visualizer);
    let config = PortConfiguration::from_pairs([("labels", "activity")]).unwrap();

    let error = generator.is_data_processable(&config).unwrap_err();
    assert_eq!(error.message(), "Required port values has no mapping");
}
