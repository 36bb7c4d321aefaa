//! Interactive shell to plan and record commutes
use std::path::PathBuf;

use commute_core::prelude::*;
use commute_core::util::cli;
use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.graph.summary()))
}

/// List all locations
fn locations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let names: Vec<&str> = context.graph.nodes().map(|l| l.name.as_str()).collect();
    Ok(Some(names.join(", ")))
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (start, end) = endpoints(&args);

    match compute_route(&context.graph, start, end) {
        Ok(route) => Ok(Some(format!(
            "Shortest path: {}\nDuration: {}",
            route,
            route.duration()
        ))),
        Err(e) => Ok(Some(describe(&CommuteError::from(e)))),
    }
}

fn save(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (start, end) = endpoints(&args);

    match plan_commute(
        &context.graph,
        &mut context.store,
        &context.owner,
        start,
        end,
        chrono::Utc::now(),
    ) {
        Ok(record) => Ok(Some(format!("Commute saved successfully!\n{}", record))),
        Err(e) => Ok(Some(describe(&e))),
    }
}

fn history(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    match context.store.history(&context.owner) {
        Ok(records) => Ok(Some(
            records
                .iter()
                .map(|r| format!("{} ({})", r, r.date.format("%Y-%m-%d %H:%M")))
                .collect::<Vec<_>>()
                .join("\n"),
        )),
        Err(e) => Ok(Some(describe(&e))),
    }
}

fn endpoints(args: &ArgMatches) -> (&str, &str) {
    // Both arguments are required, clap rejects the command otherwise
    let start = args.get_one::<String>("start").map_or("", String::as_str);
    let end = args.get_one::<String>("end").map_or("", String::as_str);
    (start, end)
}

/// User facing message for a failed command
fn describe(e: &CommuteError) -> String {
    log::debug!("Command failed: {:?}", e);
    match e {
        CommuteError::Route(RouteError::InvalidLocation(_)) => {
            format!("{}. Type `locations` to list valid locations.", e)
        }
        _ => e.to_string(),
    }
}

struct Context {
    graph: Graph,
    store: InMemoryCommuteStore,
    owner: String,
}

impl Context {
    fn new(graph: Graph, owner: String) -> Self {
        Self {
            graph,
            store: InMemoryCommuteStore::new(),
            owner,
        }
    }
}

/// File the shell keeps its command history in, relative to the working directory
fn history_file() -> PathBuf {
    PathBuf::from(".commute_history")
}

fn route_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .arg(Arg::new("start").required(true).help("Start location"))
        .arg(Arg::new("end").required(true).help("End location"))
        .about(about)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();
    let graph = cfg.load_graph()?;
    log::info!("{}", graph.summary());
    let context = Context::new(graph, cfg.owner);

    let mut repl = Repl::new(context)
        .with_name("Commute")
        .with_version("v0.1.0")
        .with_description("Plan and record commutes between locations")
        .with_banner("Welcome to the Daily Commute Portal")
        .with_history(history_file(), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("locations").about("List all locations"),
            locations,
        )
        .with_command(
            route_command("route", "Calculate shortest route using Dijkstra's algorithm"),
            route,
        )
        .with_command(
            route_command("save", "Calculate shortest route and record the commute"),
            save,
        )
        .with_command(
            Command::new("history").about("Show recorded commutes, newest first"),
            history,
        );

    repl.run().map_err(|e| anyhow::anyhow!("REPL failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &'static str, start: &str, end: &str) -> ArgMatches {
        route_command(name, "").get_matches_from([name, start, end])
    }

    fn context() -> Context {
        Context::new(reference_graph(), "alice".to_string())
    }

    #[test]
    fn history_file_is_a_plain_file_name() {
        let path = history_file();

        assert_eq!(path.components().count(), 1);
        assert_eq!(path.file_name().unwrap(), ".commute_history");
    }

    #[test]
    fn route_prints_distance_and_duration() {
        let mut context = context();

        let out = route(args("route", "A", "C"), &mut context).unwrap().unwrap();

        assert_eq!(out, "Shortest path: A -> C, Distance: 5 km\nDuration: 50 min");
    }

    #[test]
    fn route_rejects_unknown_location() {
        let mut context = context();

        let out = route(args("route", "A", "Z"), &mut context).unwrap().unwrap();

        assert!(out.starts_with("Invalid location: Z."));
    }

    #[test]
    fn saved_commutes_show_up_in_history() {
        let mut context = context();

        let out = history(ArgMatches::default(), &mut context).unwrap().unwrap();
        assert_eq!(out, "No commute history found for alice");

        save(args("save", "A", "I"), &mut context).unwrap();
        save(args("save", "A", "Z"), &mut context).unwrap();

        let out = history(ArgMatches::default(), &mut context).unwrap().unwrap();
        assert!(out.starts_with("Start: A → End: I, Distance: 14 km, Time: 140 min"));
        assert_eq!(out.lines().count(), 1);
    }
}
