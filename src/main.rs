use log::error;
use recipe_intake::{
    build_recipe, ClassifiedLine, ImportError, ImportResult, RecipeImporter,
};
use serde::Serialize;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "Usage:
  recipe-intake url <URL>
  recipe-intake html <FILE> [SOURCE_URL]
  recipe-intake classify <TEXT_FILE>
  recipe-intake build <LINES_JSON_FILE>";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ImportError::InvalidInput(message)) => {
            eprintln!("{}\n\n{}", message, USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), ImportError> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| ImportError::InvalidInput("Missing command".to_string()))?;

    match (command.as_str(), rest) {
        ("url", [url]) => {
            let result = RecipeImporter::builder().url(url).build().await?;
            print_result(result)
        }
        ("html", [file, source @ ..]) if source.len() <= 1 => {
            let html = tokio::fs::read_to_string(file).await?;
            let source_url = source.first().map(String::as_str).unwrap_or_default();
            let result = RecipeImporter::builder()
                .html(html, source_url)
                .build()
                .await?;
            print_result(result)
        }
        ("classify", [file]) => {
            let text = tokio::fs::read_to_string(file).await?;
            let result = RecipeImporter::builder().scanned_text(text).build().await?;
            print_result(result)
        }
        ("build", [file]) => {
            let json = tokio::fs::read_to_string(file).await?;
            let lines: Vec<ClassifiedLine> = serde_json::from_str(&json)?;
            print_json(&build_recipe(&lines))
        }
        _ => Err(ImportError::InvalidInput(format!(
            "Unrecognized arguments: {}",
            args.join(" ")
        ))),
    }
}

fn print_result(result: ImportResult) -> Result<(), ImportError> {
    match result {
        ImportResult::Recipe(recipe) => print_json(&recipe),
        ImportResult::Lines(lines) => print_json(&lines),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ImportError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
