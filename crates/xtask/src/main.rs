use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must never depend on.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &["realmgrid-engine", "tracing", "rand", "tokio"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = check_domain_deps(&metadata.packages);
    violations.extend(check_domain_sources(&metadata.workspace_root)?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

fn check_domain_deps(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .filter(|p| p.name == "realmgrid-domain")
        .flat_map(|p| &p.dependencies)
        .filter(|d| DOMAIN_FORBIDDEN_DEPS.contains(&d.name.as_str()))
        .map(|d| format!("realmgrid-domain depends on {}", d.name))
        .collect()
}

/// The domain stays silent: no logging macros and no printing.
fn check_domain_sources(workspace_root: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\b(tracing::|println!|eprintln!|dbg!)")
        .context("compiling source pattern")?;

    let mut violations = Vec::new();
    let mut pending = vec![workspace_root.join("crates/domain/src")];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (line_no, line) in source.lines().enumerate() {
                if pattern.is_match(line) {
                    violations.push(format!(
                        "{}:{}: domain code must not log or print",
                        path.display(),
                        line_no + 1
                    ));
                }
            }
        }
    }
    Ok(violations)
}
