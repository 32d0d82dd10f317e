use crate::app::TareaService;
use crate::app::runtime::{parse_scope, parse_status, parse_status_tab};
use crate::app::service_types::{CreateInput, TaskPatch, ViewInput};
use crate::cli::action::{GlobalOpts, emit_error, run_action};
use crate::cli::render::{print_project, print_project_list, print_task, print_task_list, print_view};
use crate::cli::style;
use crate::types::TaskStatus;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AddArgs {
    pub description: String,
    #[arg(long = "notes")]
    pub long_description: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long = "project")]
    pub project_id: Option<String>,
    #[arg(long = "parent")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// One of: inbox, today, upcoming, project
    pub scope: String,
    #[arg(long = "project")]
    pub project_id: Option<String>,
    #[arg(long, default_value = "all")]
    pub status: String,
    #[arg(long = "expand-completed", default_value_t = false)]
    pub expand_completed: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "notes")]
    pub long_description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long = "clear-deadline", default_value_t = false)]
    pub clear_deadline: bool,
}

#[derive(Debug, Args)]
pub struct DoneArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    Add(ProjectAddArgs),
    List,
}

#[derive(Debug, Args)]
pub struct ProjectAddArgs {
    pub name: String,
}

pub fn execute_init(service: &TareaService, opts: GlobalOpts) -> i32 {
    run_action(
        "trea init",
        opts,
        || service.init(),
        |result| result.clone(),
        |result| {
            println!("{}", style::success("initialized"));
            for file in &result.files {
                println!("  {}", file);
            }
        },
    )
}

pub fn execute_add(service: &TareaService, args: AddArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "trea add",
        opts,
        || {
            service.create(CreateInput {
                description: args.description.clone(),
                long_description: args.long_description.clone(),
                deadline: args.deadline.clone(),
                project_id: args.project_id.clone(),
                parent_id: args.parent_id.clone(),
            })
        },
        |task| task.clone(),
        print_task,
    )
}

pub fn execute_view(service: &TareaService, args: ViewArgs, opts: GlobalOpts) -> i32 {
    let command_line = format!("trea view {}", args.scope);
    let input = match parse_view_input(&args) {
        Ok(input) => input,
        Err(error) => return emit_error(&command_line, opts, error),
    };
    run_action(
        &command_line,
        opts,
        || service.view(&input),
        |view| view.clone(),
        |view| print_view(view, args.expand_completed),
    )
}

pub fn execute_show(service: &TareaService, args: ShowArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "trea show",
        opts,
        || service.show(&args.id),
        |task| task.clone(),
        print_task,
    )
}

pub fn execute_update(service: &TareaService, args: UpdateArgs, opts: GlobalOpts) -> i32 {
    let status = match args.status.as_deref().map(parse_status).transpose() {
        Ok(status) => status,
        Err(error) => return emit_error("trea update", opts, error),
    };
    run_action(
        "trea update",
        opts,
        || {
            service.update(
                &args.id,
                TaskPatch {
                    description: args.description.clone(),
                    long_description: args.long_description.clone(),
                    status,
                    deadline: args.deadline.clone(),
                    clear_deadline: args.clear_deadline,
                },
            )
        },
        |task| task.clone(),
        print_task,
    )
}

pub fn execute_done(service: &TareaService, args: DoneArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "trea done",
        opts,
        || {
            service.update(
                &args.id,
                TaskPatch {
                    status: Some(TaskStatus::Completed),
                    ..TaskPatch::default()
                },
            )
        },
        |task| task.clone(),
        print_task,
    )
}

pub fn execute_delete(service: &TareaService, args: DeleteArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "trea delete",
        opts,
        || service.delete(&args.id),
        |result| result.clone(),
        |result| {
            println!(
                "{} {}",
                style::success("deleted"),
                style::task_id(&result.deleted.id)
            );
        },
    )
}

pub fn execute_search(service: &TareaService, args: SearchArgs, opts: GlobalOpts) -> i32 {
    run_action(
        "trea search",
        opts,
        || service.search(&args.query),
        |tasks| tasks.clone(),
        |tasks| print_task_list(tasks),
    )
}

pub fn execute_project(service: &TareaService, command: ProjectCommand, opts: GlobalOpts) -> i32 {
    match command {
        ProjectCommand::Add(args) => run_action(
            "trea project add",
            opts,
            || service.project_create(&args.name),
            |project| project.clone(),
            print_project,
        ),
        ProjectCommand::List => run_action(
            "trea project list",
            opts,
            || service.project_list(),
            |projects| projects.clone(),
            |projects| print_project_list(projects),
        ),
    }
}

fn parse_view_input(args: &ViewArgs) -> Result<ViewInput, crate::errors::TareaError> {
    Ok(ViewInput {
        scope: parse_scope(&args.scope)?,
        project_id: args.project_id.clone(),
        status_tab: parse_status_tab(&args.status)?,
    })
}
