//! Tests of the tag & dependency driven deploy script runner

mod common;

use std::sync::Mutex;

use alloy::dyn_abi::DynSolValue;
use async_trait::async_trait;
use common::{named_accounts, RecordingDeployments, MAINNET_USDC};
use eyre::Result;
use sector_scripts::{
    deploy::{all_scripts, execution_order, run_scripts, DeployScript},
    deployments::{DeployEnv, Deployments},
    errors::ScriptError,
};

/// A script logging its runs into a shared journal
struct JournalScript {
    /// The id of the script
    id: &'static str,
    /// The tags of the script
    tags: &'static [&'static str],
    /// The dependencies of the script
    dependencies: &'static [&'static str],
    /// Whether the script fails
    fails: bool,
    /// The journal of runs
    journal: &'static Mutex<Vec<&'static str>>,
}

#[async_trait]
impl DeployScript for JournalScript {
    fn id(&self) -> &'static str {
        self.id
    }

    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    fn dependencies(&self) -> &'static [&'static str] {
        self.dependencies
    }

    async fn run(&self, _env: &DeployEnv<'_>) -> Result<(), ScriptError> {
        self.journal.lock().unwrap().push(self.id);
        if self.fails {
            return Err(ScriptError::ContractDeployment(self.id.to_string()));
        }

        Ok(())
    }
}

/// Leak a fresh journal for a test
fn journal() -> &'static Mutex<Vec<&'static str>> {
    Box::leak(Box::new(Mutex::new(Vec::new())))
}

/// Build a journaling script
fn journal_script(
    id: &'static str,
    tags: &'static [&'static str],
    dependencies: &'static [&'static str],
    journal: &'static Mutex<Vec<&'static str>>,
) -> Box<dyn DeployScript> {
    Box::new(JournalScript {
        id,
        tags,
        dependencies,
        fails: false,
        journal,
    })
}

#[test]
fn test_dependencies_ordered_first() {
    let scripts = all_scripts();

    let order: Vec<_> = execution_order(&scripts, &["XVault".to_string()])
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(order, vec!["usdcMock", "xVault"]);

    let order: Vec<_> = execution_order(&scripts, &[])
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(order, vec!["usdcMock", "xVault"]);

    let order: Vec<_> = execution_order(&scripts, &["USDCMock".to_string()])
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(order, vec!["usdcMock"]);
}

#[tokio::test]
async fn test_xvault_runs_over_fresh_mock() -> Result<()> {
    let accounts = named_accounts(None);
    let deployments = RecordingDeployments::new();
    let env = DeployEnv::new(&accounts, &deployments);

    let ran = run_scripts(&all_scripts(), &["XVault".to_string()], &env).await?;
    assert_eq!(ran, vec!["usdcMock", "xVault"]);

    let calls = deployments.calls();
    assert_eq!(deployments.call_names(), vec!["USDCMock", "SectorCrossVault-0"]);
    assert_eq!(calls[0].1.contract, "USDCMock");
    assert!(calls[0].1.skip_if_already_deployed);
    assert!(calls[0].1.args.is_empty());

    let mock = deployments.get("USDCMock").await?.address;
    assert_eq!(calls[1].1.args[0], DynSolValue::Address(mock));

    Ok(())
}

#[tokio::test]
async fn test_mock_skipped_with_real_usdc() -> Result<()> {
    let accounts = named_accounts(Some(MAINNET_USDC));
    let deployments = RecordingDeployments::new();
    let env = DeployEnv::new(&accounts, &deployments);

    let ran = run_scripts(&all_scripts(), &["XVault".to_string()], &env).await?;
    assert_eq!(ran, vec!["usdcMock", "xVault"]);
    assert_eq!(deployments.call_names(), vec!["SectorCrossVault-0"]);

    Ok(())
}

#[tokio::test]
async fn test_rerun_reuses_mock_and_redeploys_vault() -> Result<()> {
    let accounts = named_accounts(None);
    let deployments = RecordingDeployments::new();
    let env = DeployEnv::new(&accounts, &deployments);
    let scripts = all_scripts();

    run_scripts(&scripts, &[], &env).await?;
    let mock = deployments.get("USDCMock").await?.address;
    let vault = deployments.get("SectorCrossVault-0").await?.address;

    run_scripts(&scripts, &[], &env).await?;
    assert_eq!(deployments.get("USDCMock").await?.address, mock);
    assert_ne!(deployments.get("SectorCrossVault-0").await?.address, vault);

    Ok(())
}

#[tokio::test]
async fn test_unknown_dependency_is_ignored() -> Result<()> {
    let journal = journal();
    let scripts = vec![journal_script("lonely", &["Lonely"], &["Missing"], journal)];
    let accounts = named_accounts(None);
    let deployments = RecordingDeployments::new();

    let ran = run_scripts(&scripts, &[], &DeployEnv::new(&accounts, &deployments)).await?;
    assert_eq!(ran, vec!["lonely"]);
    assert_eq!(*journal.lock().unwrap(), vec!["lonely"]);

    Ok(())
}

#[tokio::test]
async fn test_shared_dependency_runs_once() -> Result<()> {
    let journal = journal();
    let scripts = vec![
        journal_script("a", &["A"], &["Base"], journal),
        journal_script("b", &["B"], &["Base"], journal),
        journal_script("base", &["Base"], &[], journal),
    ];
    let accounts = named_accounts(None);
    let deployments = RecordingDeployments::new();

    let ran = run_scripts(&scripts, &[], &DeployEnv::new(&accounts, &deployments)).await?;
    assert_eq!(ran, vec!["base", "a", "b"]);

    Ok(())
}

#[test]
fn test_dependency_cycle_terminates() {
    let journal = journal();
    let scripts = vec![
        journal_script("ping", &["Ping"], &["Pong"], journal),
        journal_script("pong", &["Pong"], &["Ping"], journal),
    ];

    let order: Vec<_> = execution_order(&scripts, &["Ping".to_string()])
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(order, vec!["pong", "ping"]);
}

#[tokio::test]
async fn test_failure_aborts_run() {
    let journal = journal();
    let scripts: Vec<Box<dyn DeployScript>> = vec![
        Box::new(JournalScript {
            id: "broken",
            tags: &["Broken"],
            dependencies: &[],
            fails: true,
            journal,
        }),
        journal_script("after", &["After"], &["Broken"], journal),
    ];
    let accounts = named_accounts(None);
    let deployments = RecordingDeployments::new();

    let err = run_scripts(&scripts, &[], &DeployEnv::new(&accounts, &deployments))
        .await
        .unwrap_err();
    assert_eq!(err, ScriptError::ContractDeployment("broken".to_string()));
    assert_eq!(*journal.lock().unwrap(), vec!["broken"]);
}
