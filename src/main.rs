use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use line_tally::cli::{Cli, Commands, CountArgs, InitArgs};
use line_tally::config::{Config, ConfigLoader, FileConfigLoader};
use line_tally::counter::{CountMode, count_files};
use line_tally::language::{LanguageRegistry, LanguageSyntax};
use line_tally::output::{JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use line_tally::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use line_tally::{EXIT_CONFIG_ERROR, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Count(args) => run_count(args, &cli),
        Commands::Languages => run_languages(),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_count_impl(args: &CountArgs, cli: &Cli) -> line_tally::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.default.extensions.clone());
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let use_gitignore = config.default.use_gitignore && !args.no_gitignore;
    let mode = if args.granular || config.default.granular {
        CountMode::Granular
    } else {
        CountMode::Basic
    };

    // 3. Resolve arguments into a file list; explicit files bypass the
    // extension filter so their failures stay observable.
    let filter = ExtensionFilter::new(&extensions, &exclude_patterns)?;
    let scanner = DirectoryScanner::new(filter, use_gitignore);
    let files = resolve_paths(&args.paths, &scanner)?;

    // 4. Count every file, isolating per-file failures
    let registry = LanguageRegistry::default();
    let summary = count_files(&files, &registry, mode);

    // 5. Format and write output
    let output = match args.format {
        OutputFormat::Text => TextFormatter::new().format(&summary)?,
        OutputFormat::Json => JsonFormatter.format(&summary)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(if summary.failures.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_PARTIAL_FAILURE
    })
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> line_tally::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn resolve_paths(paths: &[PathBuf], scanner: &impl FileScanner) -> line_tally::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> line_tally::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_languages() -> i32 {
    let registry = LanguageRegistry::default();
    for language in registry.all() {
        let extensions: Vec<String> = language
            .extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect();
        println!("{}: {}", language.name(), extensions.join(", "));
    }
    EXIT_SUCCESS
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> line_tally::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(line_tally::LineTallyError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, Config::template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}
