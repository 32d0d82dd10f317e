use tarea::app::TareaService;
use tarea::app::runtime::{get_repo_root, now_iso, today_local};
use tarea::cli::run_cli;

fn main() {
    let repo_root = get_repo_root();
    let service = TareaService::new(
        repo_root.to_string_lossy().to_string(),
        now_iso,
        today_local,
    );
    let exit_code = run_cli(&service);
    std::process::exit(exit_code);
}
