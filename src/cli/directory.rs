use std::path::{Path, PathBuf};

use llm_portal::config::default_path;
use llm_portal::llm::catalog;
use llm_portal::{ModelDirectory, PortalError};
use serde_json::json;

use crate::cli::commands::{ModelsArgs, ResolveArgs, ValidateArgs};

fn directory_path(directory: Option<&str>) -> PathBuf {
    directory.map(PathBuf::from).unwrap_or_else(default_path)
}

pub async fn handle_resolve(args: ResolveArgs) -> Result<(), PortalError> {
    let directory = ModelDirectory::load(&directory_path(args.directory.as_deref())).await?;
    let resolution = directory.resolve(&args.model)?;
    println!("Model:    {}", args.model);
    let label = catalog::get_provider(&resolution.provider).map_or("no registered client", |p| p.name);
    println!("Provider: {} ({})", resolution.provider, label);
    println!("Endpoint: {}", resolution.endpoint.as_deref().unwrap_or("(provider default)"));
    Ok(())
}

pub async fn handle_models(args: ModelsArgs) -> Result<(), PortalError> {
    let directory = ModelDirectory::load(&directory_path(args.directory.as_deref())).await?;

    if args.json {
        let entries: Vec<_> = directory
            .models()
            .map(|(model, provider)| json!({"model": model, "provider": provider}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
        return Ok(());
    }

    let width = directory.models().map(|(m, _)| m.len()).max().unwrap_or(0);
    for (model, provider) in directory.models() {
        println!("{:<width$}  {}", model, provider, width = width);
    }
    Ok(())
}

pub async fn handle_validate(args: ValidateArgs) -> Result<(), PortalError> {
    let directory = ModelDirectory::load(Path::new(&args.path)).await?;
    let unresolved: Vec<_> = directory
        .models()
        .filter(|(model, _)| directory.resolve(model).is_err())
        .map(|(model, provider)| format!("{} -> {}", model, provider))
        .collect();

    if !unresolved.is_empty() {
        return Err(PortalError::Config(format!(
            "Models with no endpoint for their provider: {}",
            unresolved.join(", ")
        )));
    }

    println!("Model directory is valid: {}", args.path);
    Ok(())
}
