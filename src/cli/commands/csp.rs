//! CSP command - Solve a constraint problem described in three files

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    csp::CspProblem,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a finite-domain constraint problem")]
pub struct CspArgs {
    /// Variable names, separated by whitespace
    #[arg(long)]
    pub variables: PathBuf,

    /// One line of values per variable, in declaration order
    #[arg(long)]
    pub domains: PathBuf,

    /// One constraint per line: `A op B` or `A is op B`
    #[arg(long)]
    pub constraints: PathBuf,
}

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {what} {}", path.display()))
}

pub fn execute(args: CspArgs) -> Result<()> {
    let variables = read(&args.variables, "variables")?;
    let domains = read(&args.domains, "domains")?;
    let constraints = read(&args.constraints, "constraints")?;

    let problem = CspProblem::parse(&variables, &domains, &constraints)
        .context("failed to build constraint problem")?;

    print_section("Constraint satisfaction");
    print_kv("Variables", &problem.variables().len().to_string());
    print_kv("Constraints", &problem.constraints().len().to_string());
    println!();
    match problem.solve() {
        Some(assignment) => println!("{assignment}"),
        None => println!("No solution."),
    }
    Ok(())
}
