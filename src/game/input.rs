use async_trait::async_trait;
use tokio::io::AsyncBufReadExt;

/// Seam between the game loop and whoever is playing it.
#[async_trait]
pub trait Input<InputType, OutputType> {
    /// Waits for the next raw input. `Ok(None)` means the input is exhausted.
    async fn get_input(&mut self) -> std::io::Result<Option<InputType>>;

    fn print_to_output(&mut self, output: OutputType);
}

/// Console user interface over stdin/stdout.
pub struct Stdio {
    lines: tokio::io::Lines<tokio::io::BufReader<tokio::io::Stdin>>,
}

impl Stdio {
    pub fn new() -> Self {
        Stdio {
            lines: tokio::io::BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl Input<String, super::OutputEvents> for Stdio {
    async fn get_input(&mut self) -> std::io::Result<Option<String>> {
        self.lines.next_line().await
    }

    fn print_to_output(&mut self, output: super::OutputEvents) {
        println!("{}", output);
    }
}
