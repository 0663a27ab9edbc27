use clap::Parser;
use trezzle::cli::{self, Cli};
use trezzle::telemetry::{get_subscriber, init_subscriber};

fn main() {
    let subscriber = get_subscriber("warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli = Cli::parse();
    cli::run(cli);
}
