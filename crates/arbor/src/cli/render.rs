//! Terminal output for command results.
//!
//! Functions build strings rather than printing so they can be tested with
//! colors switched off. Width math uses `unicode-width` so names in any
//! script line up.

use arborapp::commands::{CmdMessage, DisplayNode, MessageLevel};
use arborapp::model::NodeKind;
use arborapp::path::format_path;
use arborapp::store::TreeSummary;
use arborapp::tree::Row;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub const EXPANDED_MARKER: &str = "▾";
pub const COLLAPSED_MARKER: &str = "▸";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn pad_to(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

/// One line per row: dimmed path column, indentation by depth, then the node.
pub(super) fn render_rows(rows: &[Row], indent: usize) -> String {
    let paths: Vec<String> = rows.iter().map(|r| format_path(&r.path)).collect();
    let path_width = paths.iter().map(|p| p.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (row, path) in rows.iter().zip(&paths) {
        let node = &row.node;
        let label = match &node.kind {
            NodeKind::Folder { .. } => {
                let marker = if node.is_expanded() {
                    EXPANDED_MARKER
                } else {
                    COLLAPSED_MARKER
                };
                format!("{} {}", marker, node.name.bold())
            }
            NodeKind::Embed { .. } => format!("  {} {}", node.name, "(embed)".dimmed()),
            NodeKind::File {} => format!("  {}", node.name),
        };
        out.push_str(&format!(
            "{}  {}{}\n",
            pad_to(path, path_width).dimmed(),
            " ".repeat(row.depth * indent),
            label
        ));
    }
    out
}

pub(super) fn render_node(entry: &DisplayNode) -> String {
    let node = &entry.node;
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", format_path(&entry.path).yellow(), node.name.bold()));
    out.push_str(&format!("  {:<6}{}\n", "id", node.id));
    match &node.kind {
        NodeKind::Folder { .. } => {
            let children = node.children().map(|c| c.len()).unwrap_or(0);
            let state = if node.is_expanded() {
                "expanded"
            } else {
                "collapsed"
            };
            out.push_str(&format!(
                "  {:<6}folder, {}, {} child{}\n",
                "kind",
                state,
                children,
                if children == 1 { "" } else { "ren" }
            ));
        }
        NodeKind::Embed { embed_src } => {
            out.push_str(&format!("  {:<6}embed\n", "kind"));
            out.push_str(&format!("  {:<6}{}\n", "src", embed_src));
        }
        NodeKind::File {} => out.push_str(&format!("  {:<6}file\n", "kind")),
    }
    out
}

pub(super) fn render_trees(trees: &[TreeSummary]) -> String {
    let id_width = trees.iter().map(|t| t.id.as_str().width()).max().unwrap_or(0);
    let name_width = trees
        .iter()
        .map(|t| t.name.as_deref().unwrap_or("").width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for tree in trees {
        let name = tree.name.as_deref().unwrap_or("");
        out.push_str(&format!(
            "{}  {}  {}\n",
            pad_to(tree.id.as_str(), id_width).yellow(),
            pad_to(name, name_width),
            format!(
                "{} node(s), updated {}",
                tree.node_count,
                tree.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        ));
    }
    out
}
