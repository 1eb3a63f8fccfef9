use game::{input::Stdio, Game};

pub mod error;
pub mod game;
pub mod tictactoe;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init();

    let mut user_interface = Stdio::new();
    if let Err(err) = Game::new().run(&mut user_interface).await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
