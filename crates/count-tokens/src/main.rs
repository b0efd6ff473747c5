use count_tokens::prelude::*;
use count_tokens::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    count_tokens::run(&cli, std::io::stdout().lock())
}
