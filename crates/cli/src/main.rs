use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kord_core::{DefaultOrderingPolicy, Gvk, SortOrder};
use kord_order::LegacyOrderTransformer;
use kord_resmap::ResMap;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kordctl", version, about = "Order Kubernetes manifests for sequential apply")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t = Output::Yaml)]
    output: Output,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Output { Yaml, Json }

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reorder a manifest stream and print it
    Sort {
        /// Manifest file; `-` reads stdin
        #[arg(default_value = "-")]
        file: PathBuf,
        /// Transformer config carrying `legacySortOptions`
        #[arg(long = "config", env = "KORD_SORT_CONFIG")]
        config: Option<PathBuf>,
        /// legacy (kind priority) or fifo (input order)
        #[arg(long = "order", env = "KORD_SORT_ORDER", default_value_t = SortOrder::Legacy)]
        order: SortOrder,
    },
    /// Print the built-in ordering policy
    Defaults,
    /// Report whether a kind is cluster-scoped or namespaced
    Scope {
        kind: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsDoc<'a> {
    legacy_sort_options: &'a kord_core::LegacySortOptions,
}

fn init_tracing() {
    let env = std::env::var("KORD_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s).context("reading manifests from stdin")?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { file, config, order } => {
            let mut resources = ResMap::from_yaml_str(&read_input(&file)?).context("loading manifests")?;
            info!(resources = resources.len(), %order, "sort invoked");
            if order == SortOrder::Legacy {
                let mut t = LegacyOrderTransformer::default();
                if let Some(path) = config {
                    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
                    t.configure(&raw).context("configuring legacy order transformer")?;
                }
                t.apply(&mut resources).context("sorting resources")?;
            }
            match cli.output {
                Output::Yaml => print!("{}", resources.to_yaml_string()?),
                Output::Json => println!("{}", resources.to_json_string()?),
            }
        }
        Commands::Defaults => {
            let policy = DefaultOrderingPolicy::default();
            let doc = DefaultsDoc { legacy_sort_options: policy.options() };
            match cli.output {
                Output::Yaml => print!("{}", serde_yaml::to_string(&doc)?),
                Output::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
            }
        }
        Commands::Scope { kind } => {
            let scope = if Gvk::new("", "", kind.as_str()).is_cluster_scoped() { "cluster" } else { "namespaced" };
            match cli.output {
                Output::Yaml => println!("{}", scope),
                Output::Json => println!("{}", serde_json::json!({ "kind": kind, "scope": scope })),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sort_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["kordctl", "sort"]).unwrap();
        match cli.command {
            Commands::Sort { file, .. } => assert_eq!(file, PathBuf::from("-")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn order_flag_parses_fifo() {
        let cli = Cli::try_parse_from(["kordctl", "-o", "json", "sort", "in.yaml", "--order", "fifo"]).unwrap();
        assert_eq!(cli.output, Output::Json);
        assert!(matches!(cli.command, Commands::Sort { order: SortOrder::Fifo, .. }));
    }
}
