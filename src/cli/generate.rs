use std::path::Path;

use llm_portal::{GenerationOptions, Portal, PortalError, TestPortal};
use tracing::info;

use crate::cli::commands::{EvaluateArgs, GenerateArgs};

async fn open_portal(model: &str, directory: Option<&str>) -> Result<Portal, PortalError> {
    match directory {
        Some(path) => Portal::with_directory_file(model, Path::new(path)).await,
        None => Portal::new(model).await,
    }
}

pub async fn handle_generate(args: GenerateArgs) -> Result<(), PortalError> {
    let mut portal = open_portal(&args.model, args.directory.as_deref()).await?;
    if let Some(context) = args.context {
        portal.set_context(context);
    }

    info!(model = %args.model, provider = %portal.provider(), "Generating");
    let options = GenerationOptions { temperature: args.temp, max_tokens: args.max_tokens };
    let text = portal.generate_with(&args.prompt, options).await?;
    println!("{}", text);

    portal.close();
    Ok(())
}

pub async fn handle_evaluate(args: EvaluateArgs) -> Result<(), PortalError> {
    let portal = open_portal(&args.model, args.directory.as_deref()).await?;
    let options = GenerationOptions { temperature: args.temp, max_tokens: args.max_tokens };
    let harness = TestPortal::from_portal(portal, &args.system, &args.rubric, options);

    info!(model = %args.model, "Evaluating");
    let grading = harness.evaluate(&args.question, args.answer_key.as_deref()).await?;
    println!("{}", grading);
    Ok(())
}
