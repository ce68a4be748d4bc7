use anyhow::bail;
use tracing::info;

use crate::api::{Backend, HttpBackend, PlanRequest};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::output;
use crate::parser;
use crate::session::{self, FileStore};

pub async fn execute(config: &Config, args: GenerateArgs) -> anyhow::Result<()> {
    if args.domain.trim().is_empty()
        || args.topic.trim().is_empty()
        || args.time_available.trim().is_empty()
    {
        bail!("Domain, topic and time available are required.");
    }

    let store = FileStore::new()?;
    let session = session::require(&store)?;

    let request = PlanRequest {
        name: args
            .name
            .unwrap_or_else(|| session.display_name().to_string()),
        age: args.age.map(|a| a.to_string()).unwrap_or_default(),
        domain: args.domain.trim().to_string(),
        topic: args.topic.trim().to_string(),
        time_available: args.time_available.trim().to_string(),
        context: args.context.unwrap_or_default(),
        username: session.username.clone(),
    };

    let backend = HttpBackend::from_config(&config.api)?;
    info!("Requesting a plan from {}", config.api.base_url);
    println!("Generating your personalized suggestions...");

    let Some(text) = fetch_plan_text(&backend, &request).await? else {
        println!("No response returned.");
        return Ok(());
    };

    if args.raw {
        println!("{}", text);
        return Ok(());
    }

    let plan = parser::parse_plan(&text);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", output::render_plan(&plan));
    }

    Ok(())
}

/// One round-trip to the backend; an empty response field counts as no plan
async fn fetch_plan_text(
    backend: &dyn Backend,
    request: &PlanRequest,
) -> anyhow::Result<Option<String>> {
    let resp = backend.generate_plan(request).await?;
    let text = resp.response.trim().to_string();
    Ok((!text.is_empty()).then_some(text))
}
