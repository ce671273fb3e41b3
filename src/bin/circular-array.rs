use std::io::{self, Write};
use std::process::ExitCode;

use circular_array::selfcheck::{self, Scenario};
use clap::Parser;

#[derive(Debug, Parser, PartialEq)]
#[clap(version, about = "Runs the circular array self-check", long_about = None)]
struct Args {
    #[clap(short, long = "scenario", value_name = "NAME", help = "Run only this scenario (repeatable)")]
    scenarios: Vec<String>,
    #[clap(short, long, help = "List the available scenarios and exit")]
    list: bool,
    #[clap(short, long, help = "Do not print the array each scenario ends with")]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> io::Result<ExitCode> {
    if args.list {
        for scenario in selfcheck::scenarios() {
            writeln!(out, "{:<20} {}", scenario.name, scenario.summary)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let selected: Vec<&'static Scenario> = if args.scenarios.is_empty() {
        selfcheck::scenarios().iter().collect()
    } else {
        match args
            .scenarios
            .iter()
            .map(|name| selfcheck::find(name))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(selected) => selected,
            Err(err) => {
                writeln!(out, "{}", err)?;
                return Ok(ExitCode::from(2));
            }
        }
    };

    let report = selfcheck::run(&selected);
    for (name, circ) in &report.passed {
        writeln!(out, "ok    {}", name)?;
        if !args.quiet {
            write!(out, "{}", circ)?;
        }
    }
    for err in &report.failed {
        writeln!(out, "FAIL  {}", err)?;
    }

    writeln!(out)?;
    if report.is_success() {
        writeln!(out, "*** ALL TESTS PASSED ***")?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(out,
                 "*** {} OF {} FAILED ***",
                 report.failed.len(),
                 selected.len())?;
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(argv: &[&str]) -> (ExitCode, String) {
        let mut argv_full = vec!["circular-array"];
        argv_full.extend_from_slice(argv);
        let args = Args::parse_from(argv_full);
        let mut out = Vec::new();
        let code = run(&args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_args() {
        let args = Args::parse_from(["circular-array", "-s", "multi-lap", "--scenario", "rotate-left", "-q"]);
        assert_eq!(args,
                   Args {
                       scenarios: vec!["multi-lap".to_string(), "rotate-left".to_string()],
                       list: false,
                       quiet: true,
                   });

        let args = Args::parse_from(["circular-array", "--list"]);
        assert!(args.list);
        assert!(args.scenarios.is_empty());
    }

    #[test]
    fn list_scenarios() {
        let (code, out) = run_with(&["--list"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out.lines().count(), 5);
        for name in ["append-only", "rotate-right", "rotate-left", "multi-lap", "append-after-rotate"] {
            assert!(out.lines().any(|line| line.starts_with(name)), "{}", name);
        }
    }

    #[test]
    fn unknown_scenario() {
        let (code, out) = run_with(&["-s", "multi-lap", "-s", "nope"]);
        assert_eq!(code, ExitCode::from(2));
        assert_eq!(out, "unknown scenario: nope\n");
    }

    #[test]
    fn run_all_quiet() {
        let (code, out) = run_with(&["-q"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out.lines().filter(|line| line.starts_with("ok    ")).count(), 5);
        assert!(out.ends_with("\n*** ALL TESTS PASSED ***\n"));
        assert!(!out.contains("FAIL"));
    }

    #[test]
    fn run_selected_prints_array() {
        let (code, out) = run_with(&["--scenario", "rotate-right"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out,
                   "ok    rotate-right\nhermione\nginny\nron\nharry\n\n*** ALL TESTS PASSED ***\n");
    }
}
