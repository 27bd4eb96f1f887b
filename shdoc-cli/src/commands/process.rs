//! Process command implementation

use crate::config::CliConfig;
use crate::error::parse_key_value;
use crate::input::InputSource;
use crate::language::LanguageResolver;
use crate::output::template::TemplateContext;
use crate::output::{
    HtmlFormatter, JsonFormatter, OutputFormat, OutputFormatter, OutputTarget, OutputWriter,
    TangleFormatter, Template, WeaveFormatter,
};
use anyhow::{Context, Result};
use clap::Args;
use shdoc_core::{segment_reader, CommentMarker};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else html)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to the HTML template
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Stylesheet URL (available to template as "stylesheet")
    #[arg(short, long, value_name = "URL")]
    pub stylesheet: Option<String>,

    /// Document title (available to template as "title")
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    /// Use basename rather than full path for title
    #[arg(short = 'S', long)]
    pub shortname: bool,

    /// Value for "language" key if no extension mapping is available
    #[arg(short, long, value_name = "NAME")]
    pub language: Option<String>,

    /// Map file extensions to values for the "language" key
    #[arg(short, long, value_name = "EXT=NAME", value_parser = parse_key_value)]
    pub map_extension: Vec<(String, String)>,

    /// Arbitrary key=value metadata that will be passed to the template
    #[arg(short = 'd', long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub metadata: Vec<(String, String)>,

    /// Line-comment marker that introduces documentation
    #[arg(short = 'M', long, value_name = "MARKER")]
    pub marker: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting shdoc processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let marker = self.marker(&config)?;
        let format = self.format.unwrap_or(config.output.default_format);
        let source = InputSource::from(self.input.clone());

        let reader = source.open()?;
        let target = OutputTarget::open(self.output.as_deref())?;
        let mut formatter = self.formatter(format, target.writer()?, &config, &source)?;

        log::info!("Processing {} as {}", source.name(), format.as_str());

        let mut chunk_count = 0usize;
        for chunk in segment_reader(reader, marker) {
            let chunk = chunk.with_context(|| format!("Failed to read {}", source.name()))?;
            formatter.format_chunk(&chunk)?;
            chunk_count += 1;
        }
        formatter.finish()?;
        drop(formatter);
        target.commit()?;

        log::info!("Wrote {chunk_count} chunks from {}", source.name());
        Ok(())
    }

    /// Comment marker from the command line, else the config file
    fn marker(&self, config: &CliConfig) -> Result<CommentMarker> {
        match &self.marker {
            Some(marker) => CommentMarker::new(marker.as_str()).context("Invalid --marker value"),
            None => Ok(config.marker()?),
        }
    }

    /// Build the formatter for `format`
    fn formatter(
        &self,
        format: OutputFormat,
        writer: OutputWriter,
        config: &CliConfig,
        source: &InputSource,
    ) -> Result<Box<dyn OutputFormatter>> {
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Html => {
                let template_path = self
                    .template
                    .as_deref()
                    .or(config.output.template.as_deref());
                let template = Template::load_or_bundled(template_path)?;
                let context = self.template_context(config, source);
                Box::new(HtmlFormatter::new(writer, template, context))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Weave => Box::new(WeaveFormatter::new(writer)),
            OutputFormat::Tangle => Box::new(TangleFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Values handed to the HTML template, except `content`
    pub fn template_context(&self, config: &CliConfig, source: &InputSource) -> TemplateContext {
        let title = match (&self.title, &config.output.title) {
            (Some(title), _) | (None, Some(title)) => title.clone(),
            (None, None) if self.shortname => source.short_name(),
            (None, None) => source.name(),
        };

        let resolver = LanguageResolver::new(self.language.clone())
            .with_mappings(self.map_extension.iter().cloned())
            .with_mappings(config.languages.clone());
        let language = resolver.resolve(&source.name()).map(str::to_string);
        log::debug!("Template language: {language:?}");

        TemplateContext {
            title,
            language,
            stylesheet: self.stylesheet.clone(),
            metadata: self.metadata.iter().cloned().collect(),
            content: String::new(),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}
