use anyhow::bail;
use tracing::info;

use crate::api::{Backend, HttpBackend, SignUpRequest};
use crate::cli::SignupArgs;
use crate::config::Config;
use crate::session::{FileStore, Session, SessionStore};

pub async fn execute(config: &Config, args: SignupArgs) -> anyhow::Result<()> {
    if args.name.trim().is_empty() || args.username.trim().is_empty() || args.password.is_empty() {
        bail!("Please fill all fields.");
    }

    let backend = HttpBackend::from_config(&config.api)?;
    info!("Creating account against {}", config.api.base_url);

    let name = args.name.trim().to_string();
    let username = args.username.trim().to_string();
    let resp = backend
        .sign_up(&SignUpRequest {
            name: name.clone(),
            username: username.clone(),
            password: args.password,
        })
        .await?;

    // The backend echoes the stored display name; fall back to what we sent
    let session = Session {
        username,
        name: resp.name.unwrap_or(name),
    };
    FileStore::new()?.save(&session)?;

    if resp.message.is_empty() {
        println!("Signup successful!");
    } else {
        println!("{}", resp.message);
    }
    println!("Signed in as {}.", session.display_name());

    Ok(())
}
