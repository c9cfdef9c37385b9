use anyhow::{Result, anyhow};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::{debug, info};

use vizgen_cli::load::{load_config, load_dataset, load_params};
use vizgen_codegen::{CodeGenerator, DataTransformer, RenderParams, Visualizer};
use vizgen_dataset::DataColumn;

use crate::cli::{GenerateArgs, SchemaArgs, ValidateArgs};

pub fn run_methods() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Method"),
        header_cell("Input ports"),
        header_cell("Library script"),
    ]);
    apply_table_style(&mut table);
    for name in vizgen_methods::method_names() {
        let (generator, _) = lookup(name)?;
        let ports = generator
            .input()
            .columns()
            .iter()
            .map(describe_port)
            .collect::<Vec<_>>()
            .join(", ");
        let library = match generator.library_script() {
            Some(_) => Cell::new("yes"),
            None => dim_cell("no"),
        };
        table.add_row(vec![
            Cell::new(name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(ports),
            library,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let (generator, _) = lookup(&args.method)?;
    println!("{}", generator.input_as_json());
    Ok(())
}

/// Returns whether the configuration was accepted; the caller maps a clean
/// rejection to a nonzero exit code without treating it as a hard error.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let (generator, _) = lookup(&args.method)?;
    let config = load_config(&args.config)?;
    match generator.is_data_processable(&config) {
        Ok(()) => {
            println!("OK: configuration fits {}", args.method);
            Ok(true)
        }
        Err(error) => {
            println!("INVALID: {}", error.message());
            Ok(false)
        }
    }
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let (generator, transformer) = lookup(&args.method)?;
    let dataset = load_dataset(&args.dataset)?;
    let config = load_config(&args.config)?;
    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => RenderParams::new(),
    };
    debug!(
        method = %args.method,
        columns = dataset.len(),
        rows = dataset.row_count(),
        mappings = config.len(),
        "generating visualization code"
    );

    let code = generator.generate_code(&dataset, &config, transformer.as_ref(), &params)?;
    info!(method = %args.method, bytes = code.len(), "code generated");

    if args.include_library
        && let Some(script) = generator.library_script()
    {
        println!("{script}");
    }
    println!("{code}");
    Ok(())
}

fn lookup(name: &str) -> Result<(CodeGenerator<Box<dyn Visualizer>>, Box<dyn DataTransformer>)> {
    let (visualizer, transformer) = vizgen_methods::create(name)
        .ok_or_else(|| anyhow!("unknown method '{name}' (see `vizgen methods`)"))?;
    Ok((CodeGenerator::new(visualizer), transformer))
}

fn describe_port(column: &DataColumn) -> String {
    let optional = if column.spec.required { "" } else { "?" };
    format!("{}{optional}: {}", column.id(), column.spec.value_type)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
