use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the completion relay (POST /api/chat)
    Serve {
        /// Address to bind; overrides TAXCHAT_BIND (default 127.0.0.1:3000)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Open the terminal chat UI against a running relay
    Chat {
        /// Relay base URL; overrides TAXCHAT_RELAY_URL
        #[arg(short, long)]
        relay_url: Option<String>,
    },

    /// Send a single question through the relay and print the reply
    Ask {
        question: String,

        /// Relay base URL; overrides TAXCHAT_RELAY_URL
        #[arg(short, long)]
        relay_url: Option<String>,
    },
}
