//! Process command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use kiru_core::{AbbreviationSet, CatalogBuilder, Language, Segmenter, SegmenterConfig};
use rayon::prelude::*;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language code or English name; unknown codes use generic rules [default: en]
    #[arg(short, long, value_name = "CODE", env = "KIRU_LANGUAGE")]
    pub language: Option<String>,

    /// Document type hint (`pdf` joins hard-wrapped lines)
    #[arg(long, value_name = "TYPE")]
    pub doc_type: Option<String>,

    /// Segment the text as given, without normalising line breaks
    #[arg(long)]
    pub no_clean: bool,

    /// Extra abbreviation catalog (TOML) added to the built-in list
    #[arg(short, long, value_name = "FILE")]
    pub abbreviations: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where one input comes from
#[derive(Debug)]
enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    fn name(&self) -> String {
        match self {
            Source::Stdin => STDIN.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => FileReader::read_stdin(),
            Source::File(path) => FileReader::read_text(path),
        }
    }
}

/// Sentences of one input
#[derive(Debug)]
struct Document {
    name: String,
    sentences: Vec<String>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting sentence segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let segmenter = self.build_segmenter(&config)?;
        let format = self.output_format(&config)?;
        let sources = self.sources()?;

        let documents = self.segment_all(&segmenter, &sources, &config)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        let mut total = 0;
        for document in &documents {
            for (index, sentence) in document.sentences.iter().enumerate() {
                formatter.format_sentence(&document.name, index, sentence)?;
            }
            total += document.sentences.len();
        }
        formatter.finish()?;

        log::info!(
            "Segmented {} input(s) into {} sentence(s)",
            documents.len(),
            total
        );
        Ok(())
    }

    /// Build the segmenter from flags, falling back to the config file
    fn build_segmenter(&self, config: &CliConfig) -> Result<Segmenter> {
        let code = self
            .language
            .as_deref()
            .unwrap_or(&config.processing.default_language);
        let language = Language::from_code(code);
        if language == Language::Generic {
            log::warn!("Unknown language '{code}', using generic rules");
        }

        let mut builder = SegmenterConfig::builder()
            .language_of(language)
            .clean(config.processing.clean && !self.no_clean);
        if let Some(doc_type) = self.doc_type.as_ref().or(config.processing.doc_type.as_ref()) {
            builder = builder.doc_type(doc_type.clone());
        }
        let segmenter_config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let segmenter = Segmenter::with_config(segmenter_config);

        let catalog_path = self
            .abbreviations
            .as_ref()
            .or(config.processing.abbreviations.as_ref());
        let Some(path) = catalog_path else {
            return Ok(segmenter);
        };

        let extra = AbbreviationSet::from_file(path).with_context(|| {
            format!("Failed to load abbreviation catalog: {}", path.display())
        })?;
        log::info!(
            "Adding {} abbreviation(s) from {} to the {} list",
            extra.len(),
            path.display(),
            language
        );
        let catalog = CatalogBuilder::new().extend(language, &extra).build();

        Ok(segmenter.with_catalog(Arc::new(catalog)))
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &config.output.default_format;
        OutputFormat::parse(name)
            .ok_or_else(|| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }

    fn sources(&self) -> Result<Vec<Source>> {
        if self.input.iter().any(|input| input == STDIN) {
            if self.input.len() > 1 {
                return Err(CliError::ConfigError(
                    "standard input ('-') cannot be combined with other inputs".to_string(),
                )
                .into());
            }
            return Ok(vec![Source::Stdin]);
        }

        let paths = resolve_patterns(&self.input)?;
        let bytes: u64 = paths
            .iter()
            .filter_map(|path| FileReader::file_size(path).ok())
            .sum();
        log::info!("Found {} file(s), {} bytes in total", paths.len(), bytes);

        Ok(paths.into_iter().map(Source::File).collect())
    }

    fn worker_threads(&self, config: &CliConfig) -> usize {
        match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        }
    }

    /// Segment every input, in parallel when there are several
    fn segment_all(
        &self,
        segmenter: &Segmenter,
        sources: &[Source],
        config: &CliConfig,
    ) -> Result<Vec<Document>> {
        let mut progress = ProgressReporter::new(self.quiet || sources.len() < 2);
        progress.init_files(sources.len() as u64);

        let segment = |source: &Source| -> Result<Document> {
            let name = source.name();
            let text = source.read()?;
            let sentences = segmenter
                .segment(&text)
                .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;
            // Log lines would tear the progress bar.
            if progress.is_active() {
                progress.file_completed(&name);
            } else {
                log::debug!("{}: {} sentence(s)", name, sentences.len());
            }
            Ok(Document { name, sentences })
        };

        let documents = if sources.len() < 2 {
            sources.iter().map(segment).collect::<Result<Vec<_>>>()
        } else {
            let threads = self.worker_threads(config);
            log::debug!("Using {threads} worker thread(s)");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to start worker threads")?;
            pool.install(|| sources.par_iter().map(segment).collect::<Result<Vec<_>>>())
        };

        progress.finish();
        documents
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when several commands run in one process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
