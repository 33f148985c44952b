use clap::Subcommand;
use color_eyre::Result;

pub(crate) mod validate;

#[derive(Subcommand)]
pub(crate) enum Command {
    Serve,
    Validate,
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve
    }
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match self {
            Command::Serve => crate::http_server::serve().await,
            Command::Validate => validate::validate(),
        }
    }
}
