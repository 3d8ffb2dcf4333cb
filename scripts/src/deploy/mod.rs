//! The deploy scripts, and the runner selecting & ordering them by tag

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{deployments::DeployEnv, errors::ScriptError};

pub mod usdc_mock;
pub mod x_vault;

pub use usdc_mock::UsdcMock;
pub use x_vault::XVault;

/// A single deploy script
#[async_trait]
pub trait DeployScript: Send + Sync {
    /// The identifier of the script, used in logs
    fn id(&self) -> &'static str;

    /// The tags selecting the script
    fn tags(&self) -> &'static [&'static str];

    /// The tags of the scripts that must run before this one
    fn dependencies(&self) -> &'static [&'static str];

    /// Run the script
    async fn run(&self, env: &DeployEnv<'_>) -> Result<(), ScriptError>;
}

/// Every deploy script in the project
pub fn all_scripts() -> Vec<Box<dyn DeployScript>> {
    vec![Box::new(UsdcMock), Box::new(XVault)]
}

/// Order the scripts selected by the given tags (all scripts if no tags are
/// given) such that every script follows the scripts providing its
/// dependencies, with each script appearing once
pub fn execution_order<'a>(
    scripts: &'a [Box<dyn DeployScript>],
    tags: &[String],
) -> Vec<&'a dyn DeployScript> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();

    let selected = scripts.iter().filter(|script| {
        tags.is_empty() || script.tags().iter().any(|t| tags.iter().any(|s| s == t))
    });
    for script in selected {
        visit(script.as_ref(), scripts, &mut visited, &mut order);
    }

    order
}

/// Visit a script depth-first, placing its dependencies before it
fn visit<'a>(
    script: &'a dyn DeployScript,
    scripts: &'a [Box<dyn DeployScript>],
    visited: &mut HashSet<&'static str>,
    order: &mut Vec<&'a dyn DeployScript>,
) {
    if !visited.insert(script.id()) {
        return;
    }

    for dependency in script.dependencies() {
        let mut providers = scripts
            .iter()
            .filter(|s| s.tags().contains(dependency))
            .peekable();
        if providers.peek().is_none() {
            warn!(
                "no deploy script provides dependency `{dependency}` of `{}`",
                script.id()
            );
        }

        for provider in providers {
            visit(provider.as_ref(), scripts, visited, order);
        }
    }

    order.push(script);
}

/// Run the scripts selected by the given tags, dependencies first, returning
/// the ids of the scripts that ran
///
/// The first failing script aborts the run.
pub async fn run_scripts(
    scripts: &[Box<dyn DeployScript>],
    tags: &[String],
    env: &DeployEnv<'_>,
) -> Result<Vec<&'static str>, ScriptError> {
    let mut ran = Vec::new();
    for script in execution_order(scripts, tags) {
        info!("running deploy script `{}`", script.id());
        script.run(env).await?;
        ran.push(script.id());
    }

    Ok(ran)
}
