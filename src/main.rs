/*!
 * CPU Scheduler - Main Entry Point
 *
 * Usage:
 *   cpu-sched [--json] [--policy <sjf|rr|priority|all>] [FILE...]
 *
 * With files, each workload is simulated and printed. Without files, an
 * interactive loop asks for workload files until `exit`.
 */

use cpu_sched_sim::{init_tracing, run, Policy, Report, SimError, SimulationResult, Workload};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// Which simulators to run for a standard workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    One(Policy),
    All,
}

impl Selection {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "all" | "4" => Some(Self::All),
            "1" => Some(Self::One(Policy::Sjf)),
            "2" => Some(Self::One(Policy::RoundRobin)),
            "3" => Some(Self::One(Policy::Priority)),
            other => other.parse().ok().map(Self::One),
        }
    }
}

struct Options {
    json: bool,
    selection: Option<Selection>,
    files: Vec<String>,
}

fn parse_args() -> miette::Result<Options> {
    let mut options = Options {
        json: false,
        selection: None,
        files: Vec::new(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--policy" => {
                let value = args
                    .next()
                    .ok_or_else(|| miette::miette!("--policy needs a value"))?;
                let selection = Selection::parse(&value.to_lowercase())
                    .ok_or_else(|| miette::miette!("Unknown policy '{}'", value))?;
                options.selection = Some(selection);
            }
            _ => options.files.push(arg),
        }
    }

    Ok(options)
}

fn main() -> miette::Result<()> {
    init_tracing();
    let options = parse_args()?;

    if options.files.is_empty() {
        return interactive(options.json);
    }

    for file in &options.files {
        let selection = options.selection.unwrap_or(Selection::All);
        simulate_file(Path::new(file), |_| Ok(selection), options.json)?;
    }
    Ok(())
}

/// Prompt for workload files until `exit` or end of input
fn interactive(json: bool) -> miette::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("==========================================");
    println!("           CPU Scheduler Simulator        ");
    println!("==========================================");

    loop {
        print!("\nEnter JSON filename (e.g., test_1.json) or 'exit': ");
        io::stdout().flush().map_err(SimError::from)?;

        let Some(line) = lines.next() else { break };
        let filename = line.map_err(SimError::from)?.trim().to_string();
        if filename.is_empty() {
            continue;
        }
        if filename.eq_ignore_ascii_case("exit") {
            break;
        }

        let outcome = simulate_file(
            Path::new(&filename),
            |workload| {
                let config = workload.sim_config()?;
                println!(
                    "Config: [CS: {}] [RR: {}] [Aging: {}]",
                    config.context_switch, config.rr_quantum, config.aging_interval
                );
                println!("\n1. SJF (Preemptive)");
                println!("2. Round Robin");
                println!("3. Priority (Preemptive + Aging)");
                println!("4. Run ALL");
                print!("Choice: ");
                io::stdout().flush()?;

                let choice = match lines.next() {
                    Some(line) => line?,
                    None => String::new(),
                };
                Ok(Selection::parse(choice.trim()).unwrap_or_else(|| {
                    warn!(choice = choice.trim(), "unknown menu choice, running all");
                    Selection::All
                }))
            },
            json,
        );

        if let Err(err) = outcome {
            eprintln!("{:?}", miette::Report::new(err));
        }
    }

    Ok(())
}

/// Load `path`, decide which simulators apply and print their results
fn simulate_file<F>(path: &Path, choose: F, json: bool) -> Result<(), SimError>
where
    F: FnOnce(&Workload) -> Result<Selection, SimError>,
{
    let workload = Workload::from_path(path)?;
    let processes = workload.processes()?;

    let policies: Vec<Policy> = if workload.is_adaptive(Some(path)) {
        println!("\n>>> Running AG Scheduling <<<");
        vec![Policy::Ag]
    } else {
        println!("\n>>> Running Standard Algorithms <<<");
        match choose(&workload)? {
            Selection::One(policy) => vec![policy],
            Selection::All => Policy::STANDARD.to_vec(),
        }
    };

    let config = workload.sim_config()?;
    let results = policies
        .into_iter()
        .map(|policy| run(policy, &processes, &config))
        .collect::<Result<Vec<_>, _>>()?;

    info!(path = %path.display(), runs = results.len(), "workload simulated");
    print_results(&results, json)
}

fn print_results(results: &[SimulationResult], json: bool) -> Result<(), SimError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let text = serde_json::to_string_pretty(results).map_err(io::Error::from)?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    for result in results {
        writeln!(out)?;
        write!(out, "{}", Report::new(result))?;
    }
    Ok(())
}
