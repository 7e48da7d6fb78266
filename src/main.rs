use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hierarchy_filter::hierarchy::{validate_unique_ids, validate_well_formed};
use hierarchy_filter::io::{parse_hierarchy, parse_id_list, render_tree};
use hierarchy_filter::{ArrayHierarchy, ExclusionKey, Filter, FilterConfig, Hierarchy, NodeId};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hierarchy-filter",
    about = "Filter forests stored as DFS pre-order depth arrays"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drop rejected nodes together with their descendants.
    Filter {
        /// Hierarchy file (`<id> <depth>` or `<id>:<depth>` per line).
        input: PathBuf,
        /// Comma-separated node ids to reject.
        #[arg(long)]
        exclude: Option<String>,
        /// Reject every id divisible by this value.
        #[arg(long)]
        exclude_multiples_of: Option<NodeId>,
        /// Track exclusions per position instead of per node id.
        #[arg(long)]
        by_position: bool,
        /// Validate every depth step before filtering.
        #[arg(long)]
        strict: bool,
        /// Print the result as an indented tree.
        #[arg(long)]
        tree: bool,
    },
    /// Print a hierarchy as an indented tree.
    Show {
        /// Hierarchy file.
        input: PathBuf,
    },
    /// Check depth steps and id uniqueness.
    Check {
        /// Hierarchy file.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Filter {
            input,
            exclude,
            exclude_multiples_of,
            by_position,
            strict,
            tree,
        } => run_filter(input, exclude, exclude_multiples_of, by_position, strict, tree)?,
        Commands::Show { input } => {
            let hierarchy = load(&input)?;
            print!("{}", render_tree(&hierarchy)?);
        }
        Commands::Check { input } => run_check(input)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load(path: &Path) -> Result<ArrayHierarchy> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read hierarchy from {}", path.display()))?;
    parse_hierarchy(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Node ids rejected by the `filter` subcommand.
#[derive(Debug)]
struct RejectRule {
    ids: HashSet<NodeId>,
    multiples_of: Option<NodeId>,
}

impl RejectRule {
    fn new(exclude: Option<&str>, multiples_of: Option<NodeId>) -> Result<Self> {
        if multiples_of == Some(0) {
            bail!("--exclude-multiples-of must be non-zero");
        }
        let ids = match exclude {
            Some(list) => parse_id_list(list)?.into_iter().collect(),
            None => HashSet::new(),
        };
        Ok(Self { ids, multiples_of })
    }

    fn accepts(&self, id: NodeId) -> bool {
        !self.ids.contains(&id) && self.multiples_of.map_or(true, |m| id.wrapping_rem(m) != 0)
    }
}

fn run_filter(
    input: PathBuf,
    exclude: Option<String>,
    exclude_multiples_of: Option<NodeId>,
    by_position: bool,
    strict: bool,
    tree: bool,
) -> Result<()> {
    let hierarchy = load(&input)?;
    let rule = RejectRule::new(exclude.as_deref(), exclude_multiples_of)?;

    let key = if by_position {
        ExclusionKey::Position
    } else {
        ExclusionKey::NodeId
    };
    let config = FilterConfig::default()
        .with_exclusion_key(key)
        .with_strict(strict);
    let outcome = Filter::new(config)
        .run(&hierarchy, |id| rule.accepts(id))
        .with_context(|| format!("filtering {} failed", input.display()))?;

    info!(
        input = hierarchy.size(),
        retained = outcome.hierarchy.size(),
        excluded = outcome.excluded,
        "filter complete"
    );

    if tree {
        print!("{}", render_tree(&outcome.hierarchy)?);
    } else {
        println!("{}", outcome.hierarchy);
    }
    Ok(())
}

fn run_check(input: PathBuf) -> Result<()> {
    let hierarchy = load(&input)?;
    validate_well_formed(&hierarchy)
        .with_context(|| format!("{} is not a well-formed hierarchy", input.display()))?;
    validate_unique_ids(&hierarchy)
        .with_context(|| format!("{} reuses node ids", input.display()))?;
    println!("ok: {} entries", hierarchy.size());
    Ok(())
}
