#[path = "launch.rs"]
mod launch;

fn main() -> std::process::ExitCode {
    launch::launch(configs::ServiceKind::Clients, server::run_clients)
}
