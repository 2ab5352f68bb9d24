//! The bump engine.

use std::path::{Path, PathBuf};

use semver::Version;

use crate::error::{CairnError, Result};
use crate::manifest::{read_version, write_version};
use crate::shell::{run, shell_quote};
use crate::ui::UserInterface;

use super::BumpLevel;

/// Options controlling a bump run.
///
/// The follow-up flags mirror what standalone bump tools offer; every
/// caller inside this crate disables all of them and leaves git work to
/// the dedicated commands.
#[derive(Debug, Clone)]
pub struct BumpOptions {
    /// Which version component to increment.
    pub level: BumpLevel,

    /// Commit the rewritten manifests.
    pub commit: bool,

    /// Tag the commit with `v<version>`.
    pub tag: bool,

    /// Push after committing.
    pub push: bool,

    /// Ask for confirmation before writing.
    pub confirm: bool,
}

impl BumpOptions {
    /// Options for a bare bump: no confirmation, no git follow-ups.
    pub fn standalone(level: BumpLevel) -> Self {
        Self {
            level,
            commit: false,
            tag: false,
            push: false,
            confirm: false,
        }
    }
}

/// One rewritten manifest.
#[derive(Debug, Clone)]
pub struct BumpedManifest {
    pub path: PathBuf,
    pub previous: Version,
    pub next: Version,
}

/// Result of a bump run.
#[derive(Debug, Clone, Default)]
pub struct BumpOutcome {
    /// Manifests rewritten, in input order.
    pub bumped: Vec<BumpedManifest>,

    /// The user declined the confirmation prompt; nothing was written.
    pub cancelled: bool,
}

/// Bump each manifest to its own next version.
///
/// Manifests without a `version` field are skipped with a warning; a
/// version that fails semver parsing is fatal. Versions are bumped
/// independently per manifest, so a mixed-version workspace stays mixed.
pub fn run_bump(
    project_root: &Path,
    manifests: &[PathBuf],
    options: &BumpOptions,
    ui: &mut dyn UserInterface,
) -> Result<BumpOutcome> {
    let mut plan = Vec::new();

    for path in manifests {
        let Some(raw) = read_version(path)? else {
            ui.warning(&format!("{} has no version field, skipping", path.display()));
            continue;
        };

        let previous = Version::parse(&raw).map_err(|e| CairnError::InvalidVersion {
            path: path.clone(),
            version: raw.clone(),
            message: e.to_string(),
        })?;
        let next = options.level.apply_to(&previous);

        plan.push(BumpedManifest {
            path: path.clone(),
            previous,
            next,
        });
    }

    if plan.is_empty() {
        ui.warning("No manifest carries a version field; nothing to bump");
        return Ok(BumpOutcome::default());
    }

    if options.confirm {
        let question = format!(
            "Apply a {} bump to {} manifest(s)?",
            options.level,
            plan.len()
        );
        if !ui.confirm(&question, true)? {
            return Ok(BumpOutcome {
                bumped: Vec::new(),
                cancelled: true,
            });
        }
    }

    for entry in &plan {
        write_version(&entry.path, &entry.next.to_string())?;
        tracing::debug!(
            "bumped {} {} -> {}",
            entry.path.display(),
            entry.previous,
            entry.next
        );
    }

    run_followups(project_root, &plan, options)?;

    Ok(BumpOutcome {
        bumped: plan,
        cancelled: false,
    })
}

/// Git follow-ups, honored only when enabled.
///
/// The commit message and tag use the first manifest's new version; the
/// callers put the root manifest first.
fn run_followups(
    project_root: &Path,
    plan: &[BumpedManifest],
    options: &BumpOptions,
) -> Result<()> {
    if !options.commit && !options.tag && !options.push {
        return Ok(());
    }

    let version = &plan[0].next;

    if options.commit {
        let files = plan
            .iter()
            .map(|entry| shell_quote(&entry.path.display().to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        run(&format!("git add {}", files), Some(project_root))?;
        run(
            &format!("git commit -m {}", shell_quote(&format!("chore: release v{}", version))),
            Some(project_root),
        )?;
    }

    if options.tag {
        run(&format!("git tag v{}", version), Some(project_root))?;
    }

    if options.push {
        run("git push", Some(project_root))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(temp: &TempDir, rel: &str, content: &str) -> PathBuf {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn bumps_each_manifest_independently() {
        let temp = TempDir::new().unwrap();
        let root = manifest(&temp, "package.json", r#"{"version": "1.0.0"}"#);
        let app = manifest(&temp, "apps/web/package.json", r#"{"version": "0.3.1"}"#);
        let mut ui = MockUI::new();

        let outcome = run_bump(
            temp.path(),
            &[root.clone(), app.clone()],
            &BumpOptions::standalone(BumpLevel::Minor),
            &mut ui,
        )
        .unwrap();

        assert_eq!(outcome.bumped.len(), 2);
        assert!(!outcome.cancelled);
        assert_eq!(read_version(&root).unwrap(), Some("1.1.0".to_string()));
        assert_eq!(read_version(&app).unwrap(), Some("0.4.0".to_string()));
    }

    #[test]
    fn manifests_without_version_are_skipped_with_warning() {
        let temp = TempDir::new().unwrap();
        let root = manifest(&temp, "package.json", r#"{"version": "1.0.0"}"#);
        let private = manifest(&temp, "apps/infra/package.json", r#"{"private": true}"#);
        let mut ui = MockUI::new();

        let outcome = run_bump(
            temp.path(),
            &[root, private.clone()],
            &BumpOptions::standalone(BumpLevel::Patch),
            &mut ui,
        )
        .unwrap();

        assert_eq!(outcome.bumped.len(), 1);
        assert!(ui.has_warning("no version field"));
        assert_eq!(read_version(&private).unwrap(), None);
    }

    #[test]
    fn invalid_version_is_fatal_before_any_write() {
        let temp = TempDir::new().unwrap();
        let good = manifest(&temp, "package.json", r#"{"version": "1.0.0"}"#);
        let bad = manifest(&temp, "libs/x/package.json", r#"{"version": "latest"}"#);
        let mut ui = MockUI::new();

        let err = run_bump(
            temp.path(),
            &[good.clone(), bad],
            &BumpOptions::standalone(BumpLevel::Patch),
            &mut ui,
        )
        .unwrap_err();

        assert!(matches!(err, CairnError::InvalidVersion { .. }));
        // The valid manifest was not rewritten either.
        assert_eq!(read_version(&good).unwrap(), Some("1.0.0".to_string()));
    }

    #[test]
    fn empty_plan_warns_and_does_nothing() {
        let temp = TempDir::new().unwrap();
        let private = manifest(&temp, "package.json", r#"{"private": true}"#);
        let mut ui = MockUI::new();

        let outcome = run_bump(
            temp.path(),
            &[private],
            &BumpOptions::standalone(BumpLevel::Major),
            &mut ui,
        )
        .unwrap();

        assert!(outcome.bumped.is_empty());
        assert!(ui.has_warning("nothing to bump"));
    }

    #[test]
    fn declined_confirmation_cancels_without_writing() {
        let temp = TempDir::new().unwrap();
        let root = manifest(&temp, "package.json", r#"{"version": "1.0.0"}"#);
        let mut ui = MockUI::new();
        ui.set_confirm_response(false);

        let options = BumpOptions {
            confirm: true,
            ..BumpOptions::standalone(BumpLevel::Patch)
        };
        let outcome = run_bump(temp.path(), &[root.clone()], &options, &mut ui).unwrap();

        assert!(outcome.cancelled);
        assert!(outcome.bumped.is_empty());
        assert_eq!(read_version(&root).unwrap(), Some("1.0.0".to_string()));
        assert_eq!(ui.confirms_shown().len(), 1);
    }

    #[test]
    fn standalone_options_disable_every_followup() {
        let options = BumpOptions::standalone(BumpLevel::Minor);

        assert!(!options.commit);
        assert!(!options.tag);
        assert!(!options.push);
        assert!(!options.confirm);
    }
}
