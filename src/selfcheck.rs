//! Built-in regression scenarios.
//!
//! These are the worked examples of the crate documentation, packaged so the
//! `circular-array` binary can run them and report pass or fail.

use std::fmt;

use log::{debug, warn};

use crate::error::SelfCheckError;
use crate::CircularArray;

/// A named regression scenario.
pub struct Scenario {
    /// Short name, used to select the scenario from the command line.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Runs the scenario and returns the array it finished with.
    pub run: fn() -> Result<CircularArray<&'static str>, SelfCheckError>,
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

/// Outcome of running a set of scenarios.
#[derive(Debug, Default)]
pub struct Report {
    /// Names of the scenarios that passed, with the array each one built.
    pub passed: Vec<(&'static str, CircularArray<&'static str>)>,
    /// One error per failed scenario.
    pub failed: Vec<SelfCheckError>,
}

impl Report {
    /// Returns true if no scenario failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

const NAMES: [&str; 4] = ["harry", "hermione", "ginny", "ron"];

static SCENARIOS: [Scenario; 5] = [
    Scenario {
        name: "append-only",
        summary: "four appends keep their order; get(15) is not found",
        run: append_only,
    },
    Scenario {
        name: "rotate-right",
        summary: "rotate(1) starts the array at the second element",
        run: rotate_right,
    },
    Scenario {
        name: "rotate-left",
        summary: "rotate(-1) starts the array at the last element",
        run: rotate_left,
    },
    Scenario {
        name: "multi-lap",
        summary: "rotate(-17) goes around more than once",
        run: multi_lap,
    },
    Scenario {
        name: "append-after-rotate",
        summary: "an append after rotate(-2) lands at the end of the rotation",
        run: append_after_rotate,
    },
];

/// Returns every built-in scenario.
pub fn scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

/// Looks up a scenario by name.
pub fn find(name: &str) -> Result<&'static Scenario, SelfCheckError> {
    SCENARIOS
        .iter()
        .find(|scenario| scenario.name == name)
        .ok_or_else(|| SelfCheckError::UnknownScenario(name.to_string()))
}

/// Runs the given scenarios in order and collects the results.
pub fn run(selected: &[&'static Scenario]) -> Report {
    let mut report = Report::default();
    for scenario in selected {
        debug!("running scenario {}", scenario.name);
        match (scenario.run)() {
            Ok(circ) => report.passed.push((scenario.name, circ)),
            Err(err) => {
                warn!("{}", err);
                report.failed.push(err);
            }
        }
    }
    report
}

/// Runs every built-in scenario.
pub fn run_all() -> Report {
    let all: Vec<&'static Scenario> = SCENARIOS.iter().collect();
    run(&all)
}

fn potter() -> CircularArray<&'static str> {
    let mut circ = CircularArray::new();
    for name in NAMES {
        circ.append(name);
    }
    circ
}

fn expect_eq<V>(scenario: &'static str, check: &str, expected: V, actual: V)
    -> Result<(), SelfCheckError>
    where V: PartialEq + fmt::Debug
{
    if expected == actual {
        Ok(())
    } else {
        Err(SelfCheckError::Mismatch {
            scenario,
            check: check.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

fn expect_order(scenario: &'static str,
                circ: &CircularArray<&'static str>,
                expected: &[&'static str])
                -> Result<(), SelfCheckError> {
    let actual: Vec<&str> = circ.iter().cloned().collect();
    expect_eq(scenario, "order", expected, &actual[..])
}

fn append_only() -> Result<CircularArray<&'static str>, SelfCheckError> {
    let scenario = "append-only";
    let circ = potter();
    expect_order(scenario, &circ, &NAMES)?;
    expect_eq(scenario, "get(2)", Some(&"ginny"), circ.get(2))?;
    expect_eq(scenario, "get(15)", None, circ.get(15))?;
    Ok(circ)
}

fn rotate_right() -> Result<CircularArray<&'static str>, SelfCheckError> {
    let scenario = "rotate-right";
    let mut circ = potter();
    circ.rotate(1);
    expect_order(scenario, &circ, &["hermione", "ginny", "ron", "harry"])?;
    expect_eq(scenario, "get(2)", Some(&"ron"), circ.get(2))?;
    Ok(circ)
}

fn rotate_left() -> Result<CircularArray<&'static str>, SelfCheckError> {
    let scenario = "rotate-left";
    let mut circ = potter();
    circ.rotate(-1);
    expect_order(scenario, &circ, &["ron", "harry", "hermione", "ginny"])?;
    expect_eq(scenario, "get(2)", Some(&"hermione"), circ.get(2))?;
    Ok(circ)
}

fn multi_lap() -> Result<CircularArray<&'static str>, SelfCheckError> {
    let scenario = "multi-lap";
    let mut circ = potter();
    circ.rotate(-17);
    expect_eq(scenario, "get(1)", Some(&"harry"), circ.get(1))?;
    Ok(circ)
}

fn append_after_rotate() -> Result<CircularArray<&'static str>, SelfCheckError> {
    let scenario = "append-after-rotate";
    let mut circ = potter();
    circ.rotate(-2);
    circ.append("dobby");
    expect_order(scenario,
                 &circ,
                 &["ginny", "ron", "harry", "hermione", "dobby"])?;
    Ok(circ)
}
