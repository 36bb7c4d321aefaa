use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::{graph::Graph, util::test_graphs::reference_graph};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to a csv file with the locations (column `name`)
    #[arg(long, value_name = "csv", requires = "roads")]
    locations: Option<PathBuf>,

    /// Path to a csv file with the roads (columns `source,target,weight`)
    #[arg(long, value_name = "csv", requires = "locations")]
    roads: Option<PathBuf>,

    /// Name commutes are recorded under
    #[arg(short, long, default_value = "guest")]
    owner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// Built-in nine location graph
    Reference,
    Csv {
        locations: PathBuf,
        roads: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub graph_source: GraphSource,
    pub owner: String,
}

impl Cfg {
    pub fn load_graph(&self) -> anyhow::Result<Graph> {
        match &self.graph_source {
            GraphSource::Reference => Ok(reference_graph()),
            GraphSource::Csv { locations, roads } => Graph::from_csv(locations, roads),
        }
    }
}

pub fn parse() -> Cfg {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Cfg
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let graph_source = match (cli.locations, cli.roads) {
        (Some(locations), Some(roads)) => GraphSource::Csv { locations, roads },
        _ => GraphSource::Reference,
    };

    Cfg {
        graph_source,
        owner: cli.owner,
    }
}
