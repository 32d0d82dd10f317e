use crate::app::TareaService;
use crate::app::runtime::find_tarea_root;
use crate::cli::action::{GlobalOpts, emit_error};
use crate::cli::commands::{
    AddArgs, DeleteArgs, DoneArgs, ProjectCommand, SearchArgs, ShowArgs, UpdateArgs, ViewArgs,
    execute_add, execute_delete, execute_done, execute_init, execute_project, execute_search,
    execute_show, execute_update, execute_view,
};
use crate::errors::TareaError;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "trea")]
#[command(version)]
#[command(about = "Personal tasks with inbox, today, upcoming and project views")]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: CommandKind,
}

#[derive(Debug, Subcommand)]
pub enum CommandKind {
    Init,
    Add(AddArgs),
    View(ViewArgs),
    Show(ShowArgs),
    Update(UpdateArgs),
    Done(DoneArgs),
    Delete(DeleteArgs),
    Search(SearchArgs),
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },
}

pub fn run_cli(service: &TareaService) -> i32 {
    let cli = Cli::parse();
    let opts = GlobalOpts { json: cli.json };

    if !matches!(cli.command, CommandKind::Init) && find_tarea_root().is_none() {
        let command_line = format!("trea {}", root_command_name(&cli.command));
        return emit_error(
            &command_line,
            opts,
            TareaError::new(
                "NOT_INITIALIZED",
                "No .tarea directory found. Run 'trea init' first.",
                2,
            ),
        );
    }

    match cli.command {
        CommandKind::Init => execute_init(service, opts),
        CommandKind::Add(args) => execute_add(service, args, opts),
        CommandKind::View(args) => execute_view(service, args, opts),
        CommandKind::Show(args) => execute_show(service, args, opts),
        CommandKind::Update(args) => execute_update(service, args, opts),
        CommandKind::Done(args) => execute_done(service, args, opts),
        CommandKind::Delete(args) => execute_delete(service, args, opts),
        CommandKind::Search(args) => execute_search(service, args, opts),
        CommandKind::Project { command } => execute_project(service, command, opts),
    }
}

fn root_command_name(command: &CommandKind) -> &'static str {
    match command {
        CommandKind::Init => "init",
        CommandKind::Add(_) => "add",
        CommandKind::View(_) => "view",
        CommandKind::Show(_) => "show",
        CommandKind::Update(_) => "update",
        CommandKind::Done(_) => "done",
        CommandKind::Delete(_) => "delete",
        CommandKind::Search(_) => "search",
        CommandKind::Project { .. } => "project",
    }
}
