use crate::commands::{save, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{TreeId, TreeStore};
use crate::tree::{check, repair, TreeIssue};

/// Reports integrity problems in a stored tree and, with `fix`, repairs them.
pub fn run<S: TreeStore>(store: &mut S, id: &TreeId, fix: bool) -> Result<CmdResult> {
    let nodes = store.fetch_tree(id)?;
    let issues = check(&nodes);
    let mut result = CmdResult::for_tree(id);

    if issues.is_empty() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning(format!(
        "{} inconsistenc{} found:",
        issues.len(),
        if issues.len() == 1 { "y" } else { "ies" }
    )));
    for issue in &issues {
        log::warn!("{}: {}", id, issue);
        let line = format!("  - {}", issue);
        result.add_message(match issue {
            TreeIssue::DuplicateId { .. } => CmdMessage::error(line),
            TreeIssue::UnsetFolderFields { .. } => CmdMessage::info(line),
        });
    }

    if fix {
        let (repaired, reassigned) = repair(&nodes);
        save(store, id, &repaired)?;
        result.add_message(CmdMessage::success(format!(
            "Fixed: folders normalized, {} duplicate id(s) reassigned.",
            reassigned
        )));
    } else {
        result.add_message(CmdMessage::info("Run with --fix to repair."));
    }
    Ok(result)
}
