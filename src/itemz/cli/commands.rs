use super::prompt::{self, item_form, Prompter};
use super::render::{print_item_list, print_result, show_banner};
use super::setup::{Cli, Commands};
use clap::{CommandFactory, Parser};
use itemz::api::CmdResult;
use itemz::commands::delete;
use itemz::error::Result;
use itemz::init::{initialize, ItemzContext};
use itemz::logging::init_logging;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    show_banner();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut ctx = initialize(cli.data_file)?;
    debug!(data_file = %ctx.data_file.display(), ?command, "dispatching");
    let mut prompter = prompt::for_stdin();

    match command {
        Commands::Create => handle_create(&mut ctx, prompter.as_mut()),
        Commands::List => handle_list(&ctx),
        Commands::Find { id } => handle_find(&ctx, &id),
        Commands::Update { id } => handle_update(&mut ctx, &id, prompter.as_mut()),
        Commands::Delete { id } => handle_delete(&mut ctx, &id, prompter.as_mut()),
    }
}

fn handle_create(ctx: &mut ItemzContext, prompter: &mut dyn Prompter) -> Result<()> {
    let answers = item_form(None).fill(prompter)?;
    let candidate = prompt::new_item(&answers);
    let result = ctx.api.create_item(candidate.name, candidate.description)?;
    print_result(&result)
}

fn handle_list(ctx: &ItemzContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print_item_list(&result);
    Ok(())
}

fn handle_find(ctx: &ItemzContext, id: &str) -> Result<()> {
    let result = ctx.api.find_item(id)?;
    print_result(&result)
}

fn handle_update(ctx: &mut ItemzContext, id: &str, prompter: &mut dyn Prompter) -> Result<()> {
    let Some(current) = ctx.api.get_item(id)? else {
        return print_result(&CmdResult::not_found(id));
    };

    let patch = item_form(Some(&current)).fill(prompter)?.into_patch();
    let result = ctx.api.update_item(id, &patch)?;
    print_result(&result)
}

fn handle_delete(ctx: &mut ItemzContext, id: &str, prompter: &mut dyn Prompter) -> Result<()> {
    let question = format!("Are you sure you want to delete item with ID {}?", id);
    if !prompter.confirm(&question, false)? {
        return print_result(&delete::cancelled());
    }
    let result = ctx.api.delete_item(id)?;
    print_result(&result)
}
