mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use folio::config::AdminConfig;
use folio::Folio;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let folio = Folio::from_env()?;

    match cli.command {
        Commands::Projects { json } => {
            let projects = folio.projects().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else if projects.is_empty() {
                println!("No projects published yet.");
            } else {
                for project in &projects {
                    println!("{} (ID: {})", project.attributes.title, project.id);
                }
            }
        }
        Commands::Render { out } => {
            let html = folio.render_home().await?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, &html).await?;
                    tracing::info!(path = %path.display(), bytes = html.len(), "wrote page");
                }
                None => println!("{html}"),
            }
        }
        Commands::Config => {
            let site = folio.config();
            let admin = AdminConfig::from_env();
            println!("api url:             {}", site.api_url);
            println!("public url:          {}", site.public_url);
            println!("admin jwt secret:    {}", presence(&admin.auth_secret));
            println!("api token salt:      {}", presence(&admin.api_token_salt));
            println!("transfer token salt: {}", presence(&admin.transfer_token_salt));
            println!("flag nps:            {}", admin.flags.nps);
            println!("flag promote-ee:     {}", admin.flags.promote_ee);
        }
    }

    Ok(())
}

// Never print secret values, only whether they are configured.
fn presence(secret: &Option<String>) -> &'static str {
    if secret.is_some() {
        "set"
    } else {
        "unset"
    }
}
