use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "flights")]
#[command(about = "Search and book flights by chatting with Gemini", long_about = None)]
pub struct Args {
    #[arg(long = "project", help = "Google Cloud project used for Vertex AI")]
    pub project: Option<String>,

    #[arg(long = "location", help = "Vertex AI region (e.g. us-central1)")]
    pub location: Option<String>,

    #[arg(long = "model", help = "Gemini model name (e.g. gemini-pro)")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom generateContent URL or API base URL"
    )]
    pub api_endpoint: Option<String>,

    #[arg(long = "temperature", help = "Sampling temperature (0.0 - 2.0)")]
    pub temperature: Option<f32>,

    #[arg(long = "year", help = "Reference year the assistant assumes for dates")]
    pub year: Option<i32>,

    #[arg(short = 'v', long = "verbose", help = "Print request diagnostics to stderr")]
    pub verbose: bool,

    #[arg(long = "no-clear", help = "Do not clear the screen between turns")]
    pub no_clear: bool,

    #[arg(long = "config-init", help = "Write an example config file and exit")]
    pub config_init: bool,
}
