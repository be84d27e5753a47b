use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = claude_bell::cli::Cli::parse();
    claude_bell::run(cli)
}
