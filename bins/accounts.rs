#[path = "launch.rs"]
mod launch;

fn main() -> std::process::ExitCode {
    launch::launch(configs::ServiceKind::Accounts, server::run_accounts)
}
