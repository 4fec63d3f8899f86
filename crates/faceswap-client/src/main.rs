//! faceswap — command-line front end for the face swap relay.

use std::path::PathBuf;

use faceswap_client::{ClientConfig, Orchestrator, SourceImage, SwapResult, SwapSession};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "face-swap-result.gif";

fn print_usage() {
    println!("faceswap — swap your face into a GIF");
    println!();
    println!("Usage: faceswap <command>");
    println!();
    println!("Commands:");
    println!("  swap <photo> <gif-url> [output]   Swap the face in <photo> into <gif-url>");
    println!("  probe                             Check the relay is online");
    println!("  help                              Show this help message");
    println!();
    println!("<photo> is a local image file or an http(s) URL.");
    println!("Environment: FACESWAP_RELAY_URL, FACESWAP_RELAY_KEY");
}

async fn load_photo(arg: &str) -> anyhow::Result<SourceImage> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        Ok(SourceImage::url(arg))
    } else {
        Ok(SourceImage::from_path(arg).await?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let orchestrator = Orchestrator::new(ClientConfig::from_env());

    match args.get(1).map(String::as_str) {
        Some("swap") => {
            if args.len() < 4 {
                eprintln!("Usage: faceswap swap <photo> <gif-url> [output]");
                std::process::exit(1);
            }
            let output_path = args
                .get(4)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

            let mut session = SwapSession::new();
            session.select_photo(load_photo(&args[2]).await?)?;
            session.select_gif(args[3].as_str())?;

            let result = session
                .run(&orchestrator, |progress| {
                    println!("[{:>3}%] {}", progress.percent, progress.message);
                })
                .await?;

            match result {
                SwapResult::Success(output) => {
                    let written = orchestrator.download_result(&output, &output_path).await?;
                    println!("{} ({} bytes written to {})", output.message, written, output_path.display());
                }
                SwapResult::Failure { message } => {
                    eprintln!("Face swap failed: {}", message);
                    std::process::exit(1);
                }
            }
        }
        Some("probe") => match orchestrator.run_connectivity_probe().await {
            Ok(message) => println!("Relay online: {}", message),
            Err(e) => {
                eprintln!("Relay probe failed: {}", e);
                std::process::exit(1);
            }
        },
        Some("help") | Some("--help") | Some("-h") | None => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {}. Use 'faceswap help' for usage.", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
