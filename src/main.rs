use csvplot::{app, cli, state::AppState};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::parse_args();
    let state = AppState::load(&args.path)?;
    app::show(state)
}
