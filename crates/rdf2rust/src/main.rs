use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rdf2rust::emitter::java::JavaRenderer;
use rdf2rust::emitter::properties;
use rdf2rust::emitter::rust::RustRenderer;
use rdf2rust::emitter::UnitRenderer;
use rdf2rust::generator::{
    CaseFormat, ConflictPolicy, GeneratorOptions, SchemaGenerator, Target,
};
use rdf2rust::model::ntriples;

/// Compile an RDF schema definition into source-code constants.
#[derive(Parser)]
#[command(name = "rdf2rust", version, about)]
struct Cli {
    /// Path to the schema file (N-Triples).
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Target language: rust, java [default: rust].
    #[arg(short, long, value_name = "LANG")]
    target: Option<Target>,

    /// Namespace prefix (detected from an owl:Ontology subject if absent).
    #[arg(short = 'u', long = "uri", value_name = "PREFIX")]
    uri: Option<String>,

    /// Display name of the namespace (output file stem if absent).
    #[arg(short, long)]
    name: Option<String>,

    /// Package/module path for the unit header.
    #[arg(short, long)]
    package: Option<String>,

    /// Preferred language tag for labels and descriptions.
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Case format for term constants (e.g. upper-snake, lower-camel).
    #[arg(short = 'c', long, value_name = "CASE")]
    constant_case: Option<CaseFormat>,

    /// Case format for string constants.
    #[arg(long, value_name = "CASE")]
    string_constant_case: Option<CaseFormat>,

    /// Prefix for string constant names.
    #[arg(long, value_name = "PREFIX")]
    string_constant_prefix: Option<String>,

    /// Suffix for string constant names (e.g. _STRING).
    #[arg(long, value_name = "SUFFIX")]
    string_constant_suffix: Option<String>,

    /// Case format for local-name string constants.
    #[arg(long, value_name = "CASE")]
    local_name_constant_case: Option<CaseFormat>,

    /// Prefix for local-name constant names.
    #[arg(long, value_name = "PREFIX")]
    local_name_constant_prefix: Option<String>,

    /// Suffix for local-name constant names (e.g. _LOCALNAME).
    #[arg(long, value_name = "SUFFIX")]
    local_name_constant_suffix: Option<String>,

    /// Indent with N spaces instead of tabs.
    #[arg(short, long, value_name = "N", num_args = 0..=1, default_missing_value = "4")]
    spaces: Option<usize>,

    /// Directory to write localized resource bundles to.
    #[arg(short, long, value_name = "DIR")]
    bundles: Option<PathBuf>,

    /// Base name for resource bundle files [default: the namespace name].
    #[arg(long, value_name = "NAME")]
    bundle_name: Option<String>,

    /// Abort when two terms map to the same record key instead of warning.
    #[arg(long)]
    fail_on_conflict: bool,

    /// Generator options file (JSON); CLI flags override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn build_options(cli: &Cli) -> Result<GeneratorOptions, Box<dyn std::error::Error>> {
    let mut options: GeneratorOptions = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GeneratorOptions::default(),
    };

    if cli.uri.is_some() {
        options.prefix = cli.uri.clone();
    }
    if cli.name.is_some() {
        options.name = cli.name.clone();
    } else if options.name.is_none() {
        // Fall back to the output file stem, like the original tool.
        options.name = cli
            .output
            .as_deref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned());
    }
    if cli.package.is_some() {
        options.package_name = cli.package.clone();
    }
    if cli.language.is_some() {
        options.preferred_language = cli.language.clone();
    }
    if cli.constant_case.is_some() {
        options.constant_case = cli.constant_case;
    }
    if cli.string_constant_case.is_some() {
        options.string_constant_case = cli.string_constant_case;
    }
    if cli.string_constant_prefix.is_some() {
        options.string_constant_prefix = cli.string_constant_prefix.clone();
    }
    if cli.string_constant_suffix.is_some() {
        options.string_constant_suffix = cli.string_constant_suffix.clone();
    }
    if cli.local_name_constant_case.is_some() {
        options.local_name_constant_case = cli.local_name_constant_case;
    }
    if cli.local_name_constant_prefix.is_some() {
        options.local_name_constant_prefix = cli.local_name_constant_prefix.clone();
    }
    if cli.local_name_constant_suffix.is_some() {
        options.local_name_constant_suffix = cli.local_name_constant_suffix.clone();
    }
    if let Some(n) = cli.spaces {
        options.indent = Some(" ".repeat(n));
    }
    if cli.fail_on_conflict {
        options.conflict_policy = ConflictPolicy::FailFast;
    }
    if let Some(target) = cli.target {
        options.target = target;
    }

    Ok(options)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.verbose {
        eprintln!("Loading schema from: {}", cli.input.display());
    }
    let graph = ntriples::load_file(&cli.input)?;
    if cli.verbose {
        eprintln!("Loaded {} statements", graph.len());
    }

    let options = build_options(&cli)?;
    let generator = SchemaGenerator::new(&graph, options);

    // Assemble the full model before touching the output, so a failed run
    // writes nothing.
    let unit = generator.build_unit()?;

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    match generator.options().target {
        Target::Rust => RustRenderer::new(writer).render(&unit)?,
        Target::Java => JavaRenderer::new(writer).render(&unit)?,
    }

    if let Some(bundle_dir) = &cli.bundles {
        let base_name = cli
            .bundle_name
            .clone()
            .unwrap_or_else(|| unit.prefix_label());
        let bundles = generator.build_bundles(&base_name)?;
        fs::create_dir_all(bundle_dir)?;
        for (bundle_key, bundle) in &bundles {
            let path = bundle_dir.join(format!("{bundle_key}.properties"));
            let header = format!(
                "ResourceBundle ({bundle_key}) for {base_name}, generated by {} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            );
            let mut file = BufWriter::new(File::create(&path)?);
            properties::write_bundle(&mut file, &header, bundle)?;
            if cli.verbose {
                eprintln!("Wrote bundle: {}", path.display());
            }
        }
    }

    if !cli.quiet {
        eprintln!(
            "Generated {} constants for <{}>",
            unit.records.len(),
            unit.namespace
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
