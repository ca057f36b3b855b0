//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::session::Session;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve { port } => {
                let server = ServerConfig {
                    host: config.server.host.clone(),
                    port: port.unwrap_or(config.server.port),
                    default_page_size: config.defaults.page_size,
                };
                let session = Session::new(config.source());
                serve(server, session).await
            }
            command => {
                let output = self.execute(command, &config)?;
                println!("{output}");
                Ok(())
            }
        }
    }

    /// Resolve the effective config: file (if any), then CLI overrides
    fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        };
        if let Some(data_file) = &self.cli.data_file {
            config.data_file.clone_from(data_file);
        }
        config.validate()?;
        Ok(config)
    }

    /// Run a one-shot paging command and render its result
    fn execute(&self, command: &Commands, config: &PagerConfig) -> Result<String> {
        let session = Session::new(config.source());
        let default_size = config.defaults.page_size;

        match command {
            Commands::Page { page, page_size } => {
                let records = session.get_page(*page, page_size.unwrap_or(default_size))?;
                self.render(&records)
            }
            Commands::Hyper { page, page_size } => {
                let hyper = session.get_hyper(*page, page_size.unwrap_or(default_size))?;
                self.render(&hyper)
            }
            Commands::HyperIndex { index, page_size } => {
                let hyper = session.get_hyper_index(*index, page_size.unwrap_or(default_size))?;
                self.render(&hyper)
            }
            Commands::Serve { .. } => Err(Error::config("serve is not a one-shot command")),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::Value;
    use std::io::Write;

    fn data_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Year,Name").unwrap();
        for i in 0..12 {
            writeln!(file, "2016,name_{i}").unwrap();
        }
        file
    }

    fn run(args: &[&str]) -> Result<Value> {
        let cli = Cli::parse_from(args);
        let runner = Runner::new(cli);
        let config = runner.load_config()?;
        let output = runner.execute(&runner.cli.command, &config)?;
        Ok(serde_json::from_str(&output)?)
    }

    #[test]
    fn test_page_command() {
        let file = data_file();
        let path = file.path().to_str().unwrap();

        let value = run(&["resilient-pager", "-d", path, "page", "--page", "2", "--page-size", "5"])
            .unwrap();
        assert_eq!(value[0], serde_json::json!(["2016", "name_5"]));
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_hyper_command_uses_default_page_size() {
        let file = data_file();
        let path = file.path().to_str().unwrap();

        let value = run(&["resilient-pager", "-d", path, "hyper"]).unwrap();
        assert_eq!(value["page_size"], 10);
        assert_eq!(value["next_page"], 2);
        assert_eq!(value["total_pages"], 2);
    }

    #[test]
    fn test_hyper_index_command() {
        let file = data_file();
        let path = file.path().to_str().unwrap();

        let value = run(&[
            "resilient-pager",
            "-d",
            path,
            "--format",
            "pretty",
            "hyper-index",
            "--index",
            "10",
            "--page-size",
            "5",
        ])
        .unwrap();
        assert_eq!(value["index"], 10);
        assert_eq!(value["page_size"], 2);
        assert_eq!(value["next_index"], 12);
    }

    #[test]
    fn test_invalid_argument_surfaces() {
        let file = data_file();
        let path = file.path().to_str().unwrap();

        let err = run(&["resilient-pager", "-d", path, "page", "--page", "0"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_config_file_page_size() {
        let file = data_file();
        let mut config = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            config,
            "data_file: {}\ndefaults:\n  page_size: 4",
            file.path().display()
        )
        .unwrap();

        let value = run(&[
            "resilient-pager",
            "-C",
            config.path().to_str().unwrap(),
            "hyper",
        ])
        .unwrap();
        assert_eq!(value["page_size"], 4);
        assert_eq!(value["total_pages"], 3);
    }
}
