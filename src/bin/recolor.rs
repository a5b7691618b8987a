use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use graph_recolor::config::RecolorConfig;
use graph_recolor::graph::Graph;
use graph_recolor::io::{self, IoError};
use graph_recolor::options::Options;
use graph_recolor::recolor::{Recolorer, Recoloring, verify};
use graph_recolor::render::{DotRenderer, Renderer, TextRenderer, animate_transition};
use graph_recolor::report::RecolorReport;

const EXIT_UNSOLVED: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    if std::env::var("RECOLOR_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("RECOLOR_LOG")
            .write_style("RECOLOR_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_flags = std::env::var("RECOLOR_FLAGS").unwrap_or_default();
    let options = match Options::parse_with_env(&env_flags, &args) {
        Ok(options) => options,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            eprintln!("{err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    log::debug!("recolor options: {:?}", options);

    match run(&options) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(options: &Options) -> anyhow::Result<ExitCode> {
    let Some(input) = options.input.as_deref() else {
        println!("No input file given! Pass the path to a JSON graph file.");
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    let config = match &options.config {
        Some(path) => RecolorConfig::parse(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RecolorConfig::default(),
    };
    let mut limits = config.limits();
    if options.max_steps.is_some() {
        limits.max_steps = options.max_steps;
    }

    let before = match io::read_graph(input) {
        Ok(graph) => graph,
        Err(err @ (IoError::NotJson(_) | IoError::NotFound(_))) => {
            println!("{}!", capitalize(&err.to_string()));
            return Ok(ExitCode::from(EXIT_USAGE));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to load {}", input.display()));
        }
    };
    log_diagnostics(&before);

    let outcome = Recolorer::new(&before).with_limits(limits).run()?;
    log::info!(
        "search finished after {} steps ({} dead ends) in {:?}",
        outcome.stats.steps,
        outcome.stats.dead_ends,
        outcome.stats.elapsed
    );

    if let Some(path) = &options.report {
        let report = RecolorReport::new(input.display().to_string(), &before, &outcome);
        io::write_json(path, &report)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        log::info!("{}", report);
    }

    let after = match outcome.recoloring {
        Recoloring::Recolored(after) => after,
        Recoloring::Infeasible => {
            println!("The graph cannot be recolored!");
            return Ok(ExitCode::from(EXIT_UNSOLVED));
        }
        Recoloring::Empty => {
            println!("This graph does not have vertices! Try something else!");
            return Ok(ExitCode::from(EXIT_UNSOLVED));
        }
    };
    verify(&before, &after).context("search produced an invalid recoloring")?;

    match &options.output {
        Some(path) => {
            io::write_graph(path, &after)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("recolored graph written to {}", path.display());
        }
        None if !options.draw && !options.animate => println!("{}", io::graph_to_json(&after)?),
        None => {}
    }

    if options.draw || options.animate {
        let mut renderer = make_renderer(options.dot_dir.as_deref());
        if options.draw {
            renderer.render(&before, "before")?;
            renderer.render(&after, "after")?;
        }
        if options.animate {
            let pacing = config.pacing(before.vertex_count());
            animate_transition(renderer.as_mut(), &before, &after, pacing)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn make_renderer(dot_dir: Option<&Path>) -> Box<dyn Renderer> {
    match dot_dir {
        Some(dir) => Box::new(DotRenderer::new(dir)),
        None => Box::new(TextRenderer::new(std::io::stdout())),
    }
}

fn log_diagnostics(graph: &Graph) {
    let report = graph.diagnose();
    if report.has_issues() {
        log::warn!(
            "input is not properly colored: {} conflicting edges",
            report.conflicts.len()
        );
        for (a, b) in &report.conflicts {
            log::warn!("  - {} -- {}", a, b);
        }
    } else {
        log::info!(
            "input ok: {} vertices, {} edges, {} components",
            report.vertex_count,
            report.edge_count,
            report.components
        );
    }
    if !report.isolated.is_empty() {
        log::debug!("isolated vertices: {:?}", report.isolated);
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
