use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Post or schedule a video to your pages
#[derive(Parser)]
#[command(name = "pagecast", version)]
#[command(about = "Post or schedule a video to selected social-media pages", long_about = None)]
pub struct Cli {
    /// Config file (defaults to pagecast.toml in the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true, env = "PAGECAST_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the pages you can post to
    Pages,
    /// Post a video now, or schedule it
    Post {
        /// Video URL (YouTube, etc.)
        #[arg(long)]
        video_url: String,
        /// Page id to post to; repeat for several pages
        #[arg(long = "page", value_name = "ID", required = true)]
        pages: Vec<String>,
        /// Caption for the post
        #[arg(long, default_value = "")]
        caption: String,
        /// Text burned into the video
        #[arg(long, default_value = "")]
        overlay_text: String,
        /// PNG or JPEG logo overlay
        #[arg(long, value_name = "PATH")]
        logo: Option<PathBuf>,
        /// Local time to publish at, YYYY-MM-DDTHH:MM
        #[arg(long, value_name = "WHEN")]
        schedule: Option<String>,
    },
}
