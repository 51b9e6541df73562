//! # CLI Layer
//!
//! The only place that knows about stdout, stderr, and process exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, see `setup`
//! 2. **Logging**: `env_logger`, `warn` by default, `debug` with `-v`
//! 3. **Context Setup**: data directory, configuration, `ArborApi<FileStore>`
//! 4. **Dispatch**: one `handle_*` per subcommand
//! 5. **Output**: render the `CmdResult` via `render`

use super::render::{print_messages, render_node, render_rows, render_trees};
use super::setup::{Cli, Commands, KindArg, PositionArg};
use anyhow::{bail, Context, Result};
use arborapp::api::{ArborApi, MoveTarget};
use arborapp::commands::add::NewNodeKind;
use arborapp::commands::CmdResult;
use arborapp::config::{resolve_data_dir, ArborConfig};
use arborapp::drag::DropPosition;
use arborapp::store::fs::FileStore;
use clap::Parser;
use env_logger::Env;

struct AppContext {
    api: ArborApi<FileStore>,
    config: ArborConfig,
    tree: Option<String>,
}

impl AppContext {
    /// The tree to operate on: `--tree`, else the configured default, else the
    /// only stored tree.
    fn tree_id(&self) -> Result<String> {
        if let Some(tree) = self.tree.as_ref().or(self.config.default_tree.as_ref()) {
            return Ok(tree.clone());
        }
        let trees = self.api.list_trees()?.trees;
        match trees.as_slice() {
            [only] => Ok(only.id.to_string()),
            [] => bail!("No trees yet. Create one with `arbor new`."),
            _ => bail!(
                "{} trees stored; pick one with --tree or set default_tree in arbor.toml",
                trees.len()
            ),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New { name }) => handle_new(&mut ctx, name),
        Some(Commands::Trees) => handle_trees(&ctx),
        Some(Commands::List { all }) => handle_list(&ctx, all),
        Some(Commands::Show { path }) => handle_show(&ctx, &path),
        Some(Commands::Add {
            kind,
            parent,
            at,
            name,
            src,
        }) => handle_add(&mut ctx, kind, parent, at, name, src),
        Some(Commands::Rename { path, name }) => handle_rename(&mut ctx, &path, name),
        Some(Commands::Expand { path }) => handle_set_expanded(&mut ctx, &path, true),
        Some(Commands::Collapse { path }) => handle_set_expanded(&mut ctx, &path, false),
        Some(Commands::Toggle { path }) => {
            let tree = ctx.tree_id()?;
            report(ctx.api.toggle_node(&tree, &path)?);
            Ok(())
        }
        Some(Commands::SetSrc { path, src }) => {
            let tree = ctx.tree_id()?;
            report(ctx.api.set_embed_src(&tree, &path, &src)?);
            Ok(())
        }
        Some(Commands::Rm { path }) => {
            let tree = ctx.tree_id()?;
            report(ctx.api.remove_node(&tree, &path)?);
            Ok(())
        }
        Some(Commands::Mv {
            source,
            target,
            position,
            to_root,
        }) => handle_move(&mut ctx, &source, target, position, to_root),
        Some(Commands::Doctor { fix }) => {
            let tree = ctx.tree_id()?;
            report(ctx.api.doctor(&tree, fix)?);
            Ok(())
        }
        Some(Commands::Export) => handle_export(&ctx),
        None => handle_list(&ctx, false),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.dir.clone())?;
    log::debug!("data directory: {}", data_dir.display());
    let config = ArborConfig::load(&data_dir)
        .with_context(|| format!("loading configuration from {}", data_dir.display()))?;

    Ok(AppContext {
        api: ArborApi::new(FileStore::new(data_dir)),
        config,
        tree: cli.tree.clone(),
    })
}

/// Prints a mutation result's messages.
fn report(result: CmdResult) {
    print_messages(&result.messages);
}

fn join_words(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn handle_new(ctx: &mut AppContext, name: Vec<String>) -> Result<()> {
    let result = ctx.api.create_tree(join_words(name))?;
    if let Some(id) = &result.tree_id {
        println!("{}", id);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_trees(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_trees()?;
    print!("{}", render_trees(&result.trees));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, all: bool) -> Result<()> {
    let tree = ctx.tree_id()?;
    let result = ctx
        .api
        .list_nodes(&tree, all || ctx.config.show_collapsed)?;
    print!("{}", render_rows(&result.rows, ctx.config.indent));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, path: &str) -> Result<()> {
    let tree = ctx.tree_id()?;
    let result = ctx.api.show_node(&tree, path)?;
    for entry in &result.affected_nodes {
        print!("{}", render_node(entry));
    }
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    kind: KindArg,
    parent: Option<String>,
    at: Option<usize>,
    name: Option<String>,
    src: Option<String>,
) -> Result<()> {
    let tree = ctx.tree_id()?;
    let kind = match kind {
        KindArg::Folder => NewNodeKind::Folder,
        KindArg::Embed => NewNodeKind::Embed,
        KindArg::File => NewNodeKind::File,
    };
    let parent = parent.unwrap_or_default();
    report(ctx.api.add_node(&tree, kind, &parent, at, name, src)?);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, path: &str, name: Vec<String>) -> Result<()> {
    let tree = ctx.tree_id()?;
    let name = join_words(name).unwrap_or_default();
    report(ctx.api.rename_node(&tree, path, &name)?);
    Ok(())
}

fn handle_set_expanded(ctx: &mut AppContext, path: &str, expanded: bool) -> Result<()> {
    let tree = ctx.tree_id()?;
    report(ctx.api.set_expanded(&tree, path, expanded)?);
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    source: &str,
    target: Option<String>,
    position: PositionArg,
    to_root: bool,
) -> Result<()> {
    let tree = ctx.tree_id()?;
    let position = match position {
        PositionArg::Before => DropPosition::Before,
        PositionArg::After => DropPosition::After,
        PositionArg::Inside => DropPosition::Inside,
    };
    let target = match (&target, to_root) {
        (_, true) => MoveTarget::Root,
        (Some(path), false) => MoveTarget::Node {
            path: path.as_str(),
            position,
        },
        (None, false) => bail!("A target path or --to-root is required"),
    };
    report(ctx.api.move_node(&tree, source, target)?);
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let tree = ctx.tree_id()?;
    let result = ctx.api.export_tree(&tree)?;
    if let Some(json) = &result.exported {
        println!("{}", json);
    }
    Ok(())
}
