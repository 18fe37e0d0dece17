//! Two players, one terminal.

use std::cell::RefCell;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use sticks::{Game, Interactive};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sticks=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let console = Rc::new(RefCell::new(Interactive::new(io::stdin().lock(), io::stdout())));
    let mut game = Game::new(Rc::clone(&console), console);

    match game.play() {
        Ok(winner) => {
            println!("{}\n{winner} wins!", game.state());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, turns = game.turns(), "game aborted");
            eprintln!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
