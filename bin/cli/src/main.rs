use anyhow::Context;
use clap::Parser;
use sango::{HttpClient, SegmentScanner};
use tracing_subscriber::EnvFilter;

/// Resolve a streaming manifest into its downloadable segment list.
#[derive(Parser, Debug, Clone)]
#[clap(name = "sango", version)]
struct SangoArgs {
    /// Manifest URL (HLS .m3u8 or MPEG-DASH .mpd)
    url: String,

    /// Print only the number of segments found
    #[clap(short, long)]
    count: bool,

    /// Pretty-print the JSON output
    #[clap(long, env = "SANGO_PRETTY")]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SangoArgs::parse();

    let scanner = SegmentScanner::new(HttpClient::default());
    let segments = scanner
        .scan(&args.url)
        .await
        .with_context(|| format!("scanning {}", args.url))?;

    if args.count {
        println!("{}", segments.len());
    } else if args.pretty {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        println!("{}", serde_json::to_string(&segments)?);
    }

    Ok(())
}
