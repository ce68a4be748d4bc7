use anyhow::bail;
use tracing::info;

use crate::api::{Backend, HttpBackend, SignInRequest};
use crate::cli::SigninArgs;
use crate::config::Config;
use crate::session::{FileStore, Session, SessionStore};

pub async fn execute(config: &Config, args: SigninArgs) -> anyhow::Result<()> {
    if args.username.trim().is_empty() || args.password.is_empty() {
        bail!("Please fill all fields.");
    }

    let backend = HttpBackend::from_config(&config.api)?;
    info!("Signing in against {}", config.api.base_url);

    let username = args.username.trim().to_string();
    let resp = backend
        .sign_in(&SignInRequest {
            username: username.clone(),
            password: args.password,
        })
        .await?;

    let session = Session {
        username,
        name: resp.name.unwrap_or_default(),
    };
    FileStore::new()?.save(&session)?;

    if resp.message.is_empty() {
        println!("Login successful!");
    } else {
        println!("{}", resp.message);
    }
    println!("Signed in as {}.", session.display_name());

    Ok(())
}
