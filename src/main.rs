use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = aws_prof::cli::Cli::parse();
    aws_prof::logging::init(cli.verbose);

    if let Err(err) = aws_prof::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
